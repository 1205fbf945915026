//! Mail-compose handoff through the platform URL opener.
use std::io;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use notes_core::{CapabilityError, ComposeRequest, MailComposer};

/// How long a freshly started handler is watched for an immediate failure.
const HANDOFF_GRACE: Duration = Duration::from_millis(300);
const HANDOFF_POLL: Duration = Duration::from_millis(20);

/// Opens `mailto:` URLs with the desktop's registered mail handler.
///
/// A configured command line overrides the platform default; the URL is
/// always appended as the final argument. The program may be double-quoted
/// when its path contains spaces.
///
/// The handler is started in the background. Only an exit within
/// [`HANDOFF_GRACE`] is reported; handlers that keep running (a mail client
/// started by the request) are reaped on later calls or left to finish.
#[derive(Debug, Default)]
pub struct SystemMailComposer {
    command: Option<String>,
    running: Vec<Child>,
}

impl SystemMailComposer {
    pub fn new(command: Option<String>) -> Self {
        Self {
            command,
            running: Vec::new(),
        }
    }

    fn launcher(&self, url: &str) -> Result<Command, CapabilityError> {
        let mut command = match &self.command {
            Some(line) => {
                let (program, args) = split_command(line).ok_or_else(|| {
                    CapabilityError::NoMailHandler("invalid mail command".to_string())
                })?;
                let mut command = Command::new(program);
                command.args(args.split_whitespace());
                command
            }
            None => platform_opener(),
        };

        command.arg(url);
        Ok(command)
    }

    /// Drop handlers that have exited since the last request.
    fn reap(&mut self) {
        self.running
            .retain_mut(|child| matches!(child.try_wait(), Ok(None)));
    }
}

impl MailComposer for SystemMailComposer {
    fn compose(&mut self, request: &ComposeRequest) -> Result<(), CapabilityError> {
        self.reap();

        let url = request.to_url();
        let mut command = self.launcher(&url)?;
        let program = command.get_program().to_string_lossy().into_owned();

        let result = command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        let mut child = result.map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => {
                CapabilityError::NoMailHandler(format!("{} not found", program))
            }
            _ => CapabilityError::Io(e),
        })?;

        let started = Instant::now();
        while started.elapsed() < HANDOFF_GRACE {
            if let Some(status) = child.try_wait()? {
                if !status.success() {
                    return Err(CapabilityError::MailHandler(format!(
                        "{} exited with {}",
                        program, status
                    )));
                }
                return Ok(());
            }
            thread::sleep(HANDOFF_POLL);
        }

        tracing::debug!("{} still running, continuing in background", program);
        self.running.push(child);
        Ok(())
    }
}

/// Split a command line into program and remaining arguments.
///
/// A leading double-quoted program keeps its spaces.
fn split_command(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if let Some(rest) = line.strip_prefix('"') {
        let (program, args) = rest.split_once('"')?;
        return (!program.is_empty()).then_some((program, args));
    }

    let mut parts = line.splitn(2, char::is_whitespace);
    let program = parts.next().filter(|p| !p.is_empty())?;
    Some((program, parts.next().unwrap_or("")))
}

#[cfg(target_os = "macos")]
fn platform_opener() -> Command {
    Command::new("open")
}

#[cfg(target_os = "windows")]
fn platform_opener() -> Command {
    // Bypasses cmd.exe, which would split the URL at '&'.
    let mut command = Command::new("rundll32");
    command.arg("url.dll,FileProtocolHandler");
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_opener() -> Command {
    Command::new("xdg-open")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_command_receives_url_last() {
        let composer = SystemMailComposer::new(Some("thunderbird -compose".to_string()));
        let url = ComposeRequest::for_notes("A & B").to_url();
        let command = composer.launcher(&url).unwrap();

        assert_eq!(command.get_program(), "thunderbird");
        let args: Vec<_> = command
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(args, vec!["-compose".to_string(), url]);
    }

    #[test]
    fn blank_command_is_rejected() {
        let composer = SystemMailComposer::new(Some("   ".to_string()));
        assert!(matches!(
            composer.launcher("mailto:?body=x"),
            Err(CapabilityError::NoMailHandler(_))
        ));
    }

    #[test]
    fn missing_handler_is_reported() {
        let mut composer =
            SystemMailComposer::new(Some("assignment-notes-no-such-mailer".to_string()));
        let err = composer
            .compose(&ComposeRequest::for_notes("notes"))
            .unwrap_err();
        assert!(matches!(err, CapabilityError::NoMailHandler(_)));
    }

    #[cfg(unix)]
    #[test]
    fn failing_handler_is_reported() {
        let mut composer = SystemMailComposer::new(Some("false".to_string()));
        let err = composer
            .compose(&ComposeRequest::for_notes("notes"))
            .unwrap_err();
        assert!(matches!(err, CapabilityError::MailHandler(_)));
    }

    #[test]
    fn quoted_program_keeps_spaces() {
        let composer = SystemMailComposer::new(Some(
            "\"/opt/Mail Client/bin/mail\" --compose".to_string(),
        ));
        let command = composer.launcher("mailto:?body=x").unwrap();

        assert_eq!(command.get_program(), "/opt/Mail Client/bin/mail");
        let args: Vec<_> = command
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(args, vec!["--compose", "mailto:?body=x"]);
    }

    #[test]
    fn unterminated_quote_is_rejected() {
        let composer = SystemMailComposer::new(Some("\"/opt/mail --compose".to_string()));
        assert!(composer.launcher("mailto:?body=x").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn long_running_handler_does_not_block() {
        // The URL lands in $0, so the handler just sleeps.
        let mut composer =
            SystemMailComposer::new(Some("/bin/sh -c sleep${IFS}3".to_string()));

        let started = Instant::now();
        assert!(composer.compose(&ComposeRequest::for_notes("notes")).is_ok());
        assert!(started.elapsed() < Duration::from_secs(2));
        assert_eq!(composer.running.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn accepting_handler_succeeds() {
        let mut composer = SystemMailComposer::new(Some("true".to_string()));
        assert!(composer.compose(&ComposeRequest::for_notes("notes")).is_ok());
    }
}
