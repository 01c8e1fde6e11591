//! Error types for form handling and submission.

use thiserror::Error;

/// Message shown for any request that never produced a response.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Client-side validation failures, caught before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// The request could not complete (offline, CORS, timeout, aborted).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

/// Why a form submission did not succeed.
///
/// `Display` yields the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Rejected before any request was issued.
    #[error("{0}")]
    Invalid(#[from] FormError),

    /// The server answered with a non-2xx status.
    #[error("{0}")]
    Rejected(String),

    /// The request never completed.
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    Network,

    /// The payload could not be encoded.
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    Encode,
}

/// Why a search produced no results to render. Only ever logged.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("could not build search URL: {0}")]
    Url(#[from] serde_urlencoded::ser::Error),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("search returned HTTP {0}")]
    Status(u16),

    #[error("malformed search response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<TransportError> for SubmitError {
    fn from(_: TransportError) -> Self {
        SubmitError::Network
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_displays_server_message_verbatim() {
        let err = SubmitError::Rejected("Invalid category".to_string());
        assert_eq!(err.to_string(), "Invalid category");
    }

    #[test]
    fn test_transport_failure_hides_detail() {
        let err: SubmitError = TransportError("TypeError: Failed to fetch".to_string()).into();
        assert_eq!(err, SubmitError::Network);
        assert_eq!(err.to_string(), NETWORK_ERROR_MESSAGE);
    }

    #[test]
    fn test_password_mismatch_message() {
        let err: SubmitError = FormError::PasswordMismatch.into();
        assert_eq!(err.to_string(), "Passwords do not match");
    }
}
