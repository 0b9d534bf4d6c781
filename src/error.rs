//! Client Error Types
//!
//! Errors raised while talking to the Bizzap API or the form backend.
//! Dashboards record these in a [`LoadReport`](crate::dashboard::LoadReport)
//! and fall back to empty data; they are never shown as error banners.

use thiserror::Error;

/// Errors that can occur when calling a remote endpoint
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Connection refused, DNS failure, CORS rejection and similar
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status code
    #[error("API error {status} from {url}")]
    Status { status: u16, url: String },

    /// Body could not be read or was not JSON
    #[error("Decode error: {0}")]
    Decode(String),

    /// Request exceeded the configured timeout
    #[error("Request timeout")]
    Timeout,

    /// URL could not be built or parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Whether the error came from the server rather than the wire
    pub fn is_status(&self) -> bool {
        matches!(self, ClientError::Status { .. })
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// A form refused to submit; the message is shown to the user as-is
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{0}")]
pub struct FormRejection(pub &'static str);

impl FormRejection {
    pub fn message(&self) -> &'static str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = ClientError::Status {
            status: 404,
            url: "https://api.bizzap.app/leads/public/x".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error 404 from https://api.bizzap.app/leads/public/x"
        );
        assert!(err.is_status());
        assert!(!ClientError::Timeout.is_status());
    }

    #[test]
    fn test_rejection_displays_message() {
        let rejection = FormRejection("Please enter your phone number.");
        assert_eq!(rejection.to_string(), rejection.message());
    }
}
