//! Locale-aware formatting of the "last saved" timestamp.
use std::env;

use chrono::{
    DateTime, Locale, TimeZone,
    format::{Item, StrftimeItems},
};

/// Locale's preferred date and time representation.
pub const DEFAULT_PATTERN: &str = "%c";

/// How the save banner renders wall-clock time.
#[derive(Clone, Debug)]
pub struct TimestampFormat {
    pattern: String,
    locale: Locale,
}

impl Default for TimestampFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            locale: Locale::POSIX,
        }
    }
}

impl TimestampFormat {
    /// Build a format, falling back to [`DEFAULT_PATTERN`] when `pattern` is
    /// not a valid strftime string.
    pub fn new(pattern: impl Into<String>, locale: Locale) -> Self {
        let pattern = pattern.into();
        let pattern = if is_valid_pattern(&pattern) {
            pattern
        } else {
            tracing::warn!("Invalid timestamp pattern {:?}, using {}", pattern, DEFAULT_PATTERN);
            DEFAULT_PATTERN.to_string()
        };

        Self { pattern, locale }
    }

    /// Construct from environment variables.
    ///
    /// Environment variables:
    /// - `NOTES_TIMESTAMP_FORMAT` - strftime pattern (default: `%c`)
    /// - `NOTES_LOCALE`, then `LC_ALL`, `LC_TIME`, `LANG` - host locale
    ///   (default: POSIX)
    pub fn from_env() -> Self {
        let pattern =
            env::var("NOTES_TIMESTAMP_FORMAT").unwrap_or_else(|_| DEFAULT_PATTERN.to_string());

        let locale = ["NOTES_LOCALE", "LC_ALL", "LC_TIME", "LANG"]
            .iter()
            .filter_map(|key| env::var(key).ok())
            .find_map(|raw| parse_locale(&raw))
            .unwrap_or(Locale::POSIX);

        Self::new(pattern, locale)
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn format<Tz>(&self, at: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        at.format_localized(&self.pattern, self.locale).to_string()
    }
}

/// Parse a POSIX locale name such as `de_DE.UTF-8` or `sr_RS@latin`.
///
/// `C` and `POSIX` map to [`Locale::POSIX`]; empty or unknown names yield `None`.
pub fn parse_locale(raw: &str) -> Option<Locale> {
    let name = raw.trim();
    let name = name.split('.').next().unwrap_or(name);
    let name = name.split('@').next().unwrap_or(name);

    match name {
        "" => None,
        "C" | "POSIX" => Some(Locale::POSIX),
        other => Locale::try_from(other).ok(),
    }
}

fn is_valid_pattern(pattern: &str) -> bool {
    !pattern.is_empty() && !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}
