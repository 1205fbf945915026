//! Terminal frontend configuration loaded from the environment.
use std::env;
use std::path::{Path, PathBuf};

use notes_core::TimestampFormat;

/// Terminal UI configuration.
///
/// This contains host-specific settings; the widget itself only needs the
/// timestamp format.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    pub export: ExportConfig,
    pub mail: MailConfig,
    pub timestamp: TimestampFormat,
    /// Name of the log session directory; generated when absent.
    pub session_id: Option<String>,
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `NOTES_EXPORT_DIR` - Download directory (default: user Downloads, else `.`)
    /// - `NOTES_MAIL_COMMAND` - Command that opens `mailto:` URLs (default: platform opener).
    ///   Split on whitespace; double-quote the program if its path has spaces,
    ///   e.g. `"/opt/Mail Client/mail" --compose`. Arguments cannot contain spaces.
    /// - `NOTES_INSTRUCTIONS_WIDTH` - Instructions panel width in percent (default: 50)
    /// - `NOTES_SESSION_ID` - Log session name (default: generated)
    /// - `NOTES_TIMESTAMP_FORMAT`, `NOTES_LOCALE` - see [`TimestampFormat::from_env`]
    pub fn from_env() -> Self {
        let mut config = Self {
            timestamp: TimestampFormat::from_env(),
            ..Self::default()
        };

        if let Some(dir) = read_env_string("NOTES_EXPORT_DIR") {
            config.export.directory = PathBuf::from(dir);
        }

        config.mail.command = read_env_string("NOTES_MAIL_COMMAND");

        if let Some(width) = read_env::<u16>("NOTES_INSTRUCTIONS_WIDTH") {
            config.ui.instructions_width = UiConfig::clamp_width(width);
        }

        config.session_id = read_env_string("NOTES_SESSION_ID");

        config
    }
}

/// Layout configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Width of the instructions panel as a percentage of the body.
    pub instructions_width: u16,
}

impl UiConfig {
    pub const MIN_WIDTH: u16 = 20;
    pub const MAX_WIDTH: u16 = 80;

    pub fn clamp_width(width: u16) -> u16 {
        width.clamp(Self::MIN_WIDTH, Self::MAX_WIDTH)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            instructions_width: 50,
        }
    }
}

/// Where downloaded notes are written.
#[derive(Clone, Debug)]
pub struct ExportConfig {
    pub directory: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        let directory = directories::UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));

        Self { directory }
    }
}

/// How `mailto:` URLs are handed to the mail client.
#[derive(Clone, Debug, Default)]
pub struct MailConfig {
    /// Command line (program and leading arguments) that receives the URL as
    /// its last argument. The program may be double-quoted. `None` uses the
    /// platform opener.
    pub command: Option<String>,
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

fn read_env_string(key: &str) -> Option<String> {
    let value = env::var(key).ok()?;
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
