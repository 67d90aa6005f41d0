//! Failures of the gift suggestion call.

use thiserror::Error;

/// Longest error body kept in [`ServiceError::Status`].
const MAX_BODY_CHARS: usize = 200;

/// Every way a suggestion request can fail.
///
/// Callers treat all variants the same way: the request failed and the user
/// is told why. The variants exist for logging and tests.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection, timeout or body read failure
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Service answered with a non-2xx status
    #[error("Service responded with {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not `{ "result": string }`
    #[error("Malformed response: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Service returned an empty result")]
    EmptyResult,
}

impl ServiceError {
    pub(crate) fn status(status: u16, body: &str) -> Self {
        ServiceError::Status {
            status,
            body: truncate_body(body),
        }
    }
}

fn truncate_body(body: &str) -> String {
    let body = body.trim();
    if body.chars().count() <= MAX_BODY_CHARS {
        return body.to_string();
    }
    let cut: String = body.chars().take(MAX_BODY_CHARS.saturating_sub(3)).collect();
    format!("{}...", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_keeps_short_bodies() {
        let err = ServiceError::status(502, " bad gateway\n");
        assert_eq!(err.to_string(), "Service responded with 502: bad gateway");
    }

    #[test]
    fn status_error_truncates_long_bodies() {
        let body = "é".repeat(500);
        match ServiceError::status(500, &body) {
            ServiceError::Status { body, .. } => {
                assert_eq!(body.chars().count(), MAX_BODY_CHARS);
                assert!(body.ends_with("..."));
            }
            other => panic!("expected Status, got {other:?}"),
        }
    }
}
