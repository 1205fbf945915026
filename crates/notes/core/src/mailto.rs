//! `mailto:` compose requests.
use std::borrow::Cow;

use crate::brief::MAIL_SUBJECT;

const SCHEME: &str = "mailto:";

/// A mail-client compose request with no pre-filled recipient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposeRequest {
    pub subject: String,
    pub body: String,
}

impl ComposeRequest {
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Request carrying the notes under the fixed assignment subject.
    pub fn for_notes(body: impl Into<String>) -> Self {
        Self::new(MAIL_SUBJECT, body)
    }

    /// Render as `mailto:?subject=..&body=..` with both values percent-encoded.
    pub fn to_url(&self) -> String {
        format!(
            "{SCHEME}?subject={}&body={}",
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }

    /// Parse a recipient-less `mailto:` URL produced by [`Self::to_url`].
    ///
    /// Returns `None` for other schemes, a pre-filled recipient, or values
    /// that do not decode to UTF-8. Missing parameters decode as empty.
    pub fn from_url(url: &str) -> Option<Self> {
        let query = url.strip_prefix(SCHEME)?.strip_prefix('?')?;

        let mut subject = String::new();
        let mut body = String::new();
        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let decoded: Cow<'_, str> = urlencoding::decode(value).ok()?;
            match key {
                "subject" => subject = decoded.into_owned(),
                "body" => body = decoded.into_owned(),
                _ => {}
            }
        }

        Some(Self { subject, body })
    }
}
