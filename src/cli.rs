use std::io::{self, IsTerminal, Read};

use clap::Parser;
use tracing::warn;

use crate::model::{AlertEvent, AppError, ErrorCode};

/// Flags mirror the Nagios command definition, e.g.
/// `notify-teams --type "$NOTIFICATIONTYPE$" --host "$HOSTNAME$" --alert "$HOSTSTATE$" ...`
#[derive(Parser, Debug)]
#[command(
    name = "notify-teams",
    about = "Posts a Nagios alert to a Microsoft Teams incoming webhook",
    version = env!("CARGO_PKG_VERSION"),
)]
pub struct Cli {
    /// Notification type (PROBLEM, RECOVERY, ACKNOWLEDGEMENT, ...)
    #[arg(long = "type")]
    pub notification_type: String,

    /// Host name
    #[arg(long)]
    pub host: String,

    /// Service description; omit for host alerts
    #[arg(long)]
    pub service: Option<String>,

    /// Host or service state (OK, WARNING, CRITICAL, DOWN, ...)
    #[arg(long)]
    pub alert: String,

    /// Check output
    #[arg(long)]
    pub output: Option<String>,

    /// Teams connector webhook URL (falls back to NOTIFY_TEAMS_WEBHOOK_URL)
    #[arg(long)]
    pub url: Option<String>,
}

impl Cli {
    pub fn into_event(self, long_message: Option<String>) -> (AlertEvent, Option<String>) {
        let event = AlertEvent {
            notification_type: self.notification_type.as_str().into(),
            host: self.host,
            service: self.service,
            severity: self.alert.as_str().into(),
            check_output: self.output,
            long_message,
        };
        (event, self.url)
    }
}

/// Reads the long message from stdin unless it is attached to a terminal.
pub fn read_long_message() -> Option<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return None;
    }

    match read_all(stdin.lock()) {
        Ok(message) => Some(message),
        Err(e) => {
            warn!(detail = e.detail().unwrap_or_default(), "{}", e);
            None
        }
    }
}

fn read_all<R: Read>(mut reader: R) -> Result<String, AppError> {
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .map_err(|e| AppError::with_detail(ErrorCode::StdinReadFailed, e.to_string()))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NotificationType, Severity};
    use clap::CommandFactory;

    fn parse(flags: &[(&str, &str)]) -> Result<Cli, clap::Error> {
        let argv = std::iter::once("notify-teams")
            .chain(flags.iter().flat_map(|(flag, value)| [*flag, *value]));
        Cli::try_parse_from(argv)
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_service_alert() {
        let cli = parse(&[
            ("--type", "PROBLEM"),
            ("--host", "web01"),
            ("--service", "HTTP"),
            ("--alert", "CRITICAL"),
            ("--output", "Connection refused"),
            ("--url", "https://example.webhook.office.com/x"),
        ])
        .unwrap();

        let (event, url) = cli.into_event(Some("details".into()));
        assert_eq!(event.notification_type, NotificationType::Problem);
        assert_eq!(event.severity, Severity::Critical);
        assert_eq!(event.service(), Some("HTTP"));
        assert_eq!(event.check_output.as_deref(), Some("Connection refused"));
        assert_eq!(event.long_message.as_deref(), Some("details"));
        assert_eq!(url.as_deref(), Some("https://example.webhook.office.com/x"));
    }

    #[test]
    fn url_is_optional_at_parse_time() {
        let flags = [("--type", "RECOVERY"), ("--host", "web01"), ("--alert", "OK")];
        let cli = parse(&flags).unwrap();
        assert!(cli.url.is_none());
        assert!(cli.service.is_none());
    }

    #[test]
    fn missing_required_flag_is_rejected() {
        let err = parse(&[("--host", "web01"), ("--alert", "OK")]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn reads_entire_input() {
        let input = "line one\nline two\n";
        assert_eq!(read_all(input.as_bytes()).unwrap(), input);
    }

    #[test]
    fn invalid_utf8_is_read_error() {
        let err = read_all(&[0xff, 0xfe][..]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::StdinReadFailed);
    }
}
