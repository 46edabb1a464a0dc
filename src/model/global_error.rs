use thiserror::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // configuration
    MissingWebhookUrl,

    // input
    StdinReadFailed,

    // delivery
    SerializationFailed,
    TransportFailed,
    UnexpectedStatus,
}

impl ErrorCode {
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::MissingWebhookUrl => "error no url",
            ErrorCode::StdinReadFailed => "failed to read long message from stdin",
            ErrorCode::SerializationFailed => "failed to serialize notification card",
            ErrorCode::TransportFailed => "webhook request failed",
            ErrorCode::UnexpectedStatus => "webhook returned a non-success status",
        }
    }

    /// Process exit status for this error. Delivery problems keep the
    /// historical 0 so the monitoring daemon does not treat them as
    /// command failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorCode::MissingWebhookUrl => 2,

            ErrorCode::StdinReadFailed |
            ErrorCode::SerializationFailed |
            ErrorCode::TransportFailed |
            ErrorCode::UnexpectedStatus => 0,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Notify(ErrorCode, Option<String>),
}

impl AppError {
    pub fn new(code: ErrorCode) -> Self {
        AppError::Notify(code, None)
    }

    pub fn with_detail(code: ErrorCode, detail: String) -> Self {
        AppError::Notify(code, Some(detail))
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Notify(code, _) => *code,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            AppError::Notify(_, detail) => detail.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_missing_url_is_fatal() {
        assert_eq!(ErrorCode::MissingWebhookUrl.exit_code(), 2);
        assert_eq!(ErrorCode::TransportFailed.exit_code(), 0);
        assert_eq!(ErrorCode::UnexpectedStatus.exit_code(), 0);
    }

    #[test]
    fn displays_code_message() {
        let err = AppError::with_detail(ErrorCode::UnexpectedStatus, "500".into());
        assert_eq!(err.to_string(), "webhook returned a non-success status");
        assert_eq!(err.detail(), Some("500"));
        assert_eq!(AppError::new(ErrorCode::MissingWebhookUrl).to_string(), "error no url");
    }
}
