// src/application/error.rs
use axum::http::StatusCode;

pub type HandlerResult<T = serde_json::Value> = Result<T, HandlerError>;

/// Failure raised by an endpoint handler.
///
/// Both parts are optional: a missing status is answered with 500 and a
/// missing message leaves the `error` key out of the response body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HandlerError {
    status: Option<StatusCode>,
    message: Option<String>,
}

impl HandlerError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: Some(message.into()),
        }
    }

    /// Error carrying a status but no message.
    pub fn status(status: StatusCode) -> Self {
        Self {
            status: Some(status),
            message: None,
        }
    }

    /// Error carrying a message but no status.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: Some(message.into()),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status_code(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn message_text(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{}: {msg}", self.status_code()),
            None => write!(f, "{}", self.status_code()),
        }
    }
}

impl std::error::Error for HandlerError {}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_internal_server_error() {
        let err = HandlerError::message("boom");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message_text(), Some("boom"));
    }

    #[test]
    fn status_only_error_has_no_message() {
        let err = HandlerError::status(StatusCode::NOT_FOUND);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.message_text(), None);
        assert_eq!(err.to_string(), "404 Not Found");
    }
}
