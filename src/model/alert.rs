use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Nagios `$NOTIFICATIONTYPE$`. Anything not modelled explicitly
/// (FLAPPINGSTART, DOWNTIMEEND, CUSTOM, ...) is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationType {
    Problem,
    Recovery,
    Acknowledgement,
    Other(String),
}

impl NotificationType {
    pub fn as_str(&self) -> &str {
        match self {
            NotificationType::Problem => "PROBLEM",
            NotificationType::Recovery => "RECOVERY",
            NotificationType::Acknowledgement => "ACKNOWLEDGEMENT",
            NotificationType::Other(raw) => raw,
        }
    }

    /// Whether the card should carry an "Acknowledge" action.
    pub fn wants_acknowledge(&self) -> bool {
        !matches!(
            self,
            NotificationType::Recovery | NotificationType::Acknowledgement
        )
    }
}

impl From<&str> for NotificationType {
    fn from(raw: &str) -> Self {
        match raw {
            "PROBLEM" => NotificationType::Problem,
            "RECOVERY" => NotificationType::Recovery,
            "ACKNOWLEDGEMENT" => NotificationType::Acknowledgement,
            other => NotificationType::Other(other.to_string()),
        }
    }
}

impl FromStr for NotificationType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host or service state (`$HOSTSTATE$` / `$SERVICESTATE$`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    Ok,
    Warning,
    Critical,
    Down,
    Unreachable,
    Unknown,
    Other(String),
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
            Severity::Down => "DOWN",
            Severity::Unreachable => "UNREACHABLE",
            Severity::Unknown => "UNKNOWN",
            Severity::Other(raw) => raw,
        }
    }

    /// Card accent color, RRGGBB without a leading `#`.
    pub fn theme_color(&self) -> &'static str {
        match self {
            Severity::Warning => "FFFF00",
            Severity::Critical | Severity::Down | Severity::Unreachable => "FF0000",
            Severity::Unknown => "FF7F00",
            Severity::Ok | Severity::Other(_) => "00FF00",
        }
    }
}

impl From<&str> for Severity {
    fn from(raw: &str) -> Self {
        match raw {
            "OK" => Severity::Ok,
            "WARNING" => Severity::Warning,
            "CRITICAL" => Severity::Critical,
            "DOWN" => Severity::Down,
            "UNREACHABLE" => Severity::Unreachable,
            "UNKNOWN" => Severity::Unknown,
            other => Severity::Other(other.to_string()),
        }
    }
}

impl FromStr for Severity {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One host or service state change, as handed over by the monitoring daemon.
#[derive(Debug, Clone)]
pub struct AlertEvent {
    pub notification_type: NotificationType,
    pub host: String,
    pub service: Option<String>,
    pub severity: Severity,
    pub check_output: Option<String>,
    pub long_message: Option<String>,
}

impl AlertEvent {
    /// Service name, if this is a service-level alert. Empty counts as absent.
    pub fn service(&self) -> Option<&str> {
        self.service.as_deref().filter(|s| !s.is_empty())
    }
}
