//! API error type and user-facing error messages.

use serde::Deserialize;

pub const NETWORK_ERROR_MESSAGE: &str =
    "Unable to reach the server. Please check your connection and try again.";
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";
pub const UPLOAD_NOT_CONFIGURED_MESSAGE: &str =
    "Image uploads are not available: the upload service is not configured on the server.";
pub const UNEXPECTED_RESPONSE_MESSAGE: &str = "The server sent an unexpected response.";

/// Error returned by every REST call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// HTTP 401. The session is no longer valid.
    #[error("unauthorized")]
    Unauthorized,
    #[error("HTTP {status} {status_text}: {body}")]
    Http {
        status: u16,
        status_text: String,
        body: String,
    },
    #[error("failed to decode response: {0}")]
    Deserialize(String),
}

/// Error bodies the backend is known to produce: `{ "message": ... }`,
/// `{ "error": ... }` or RFC7807 problem details.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

/// Extract the server-provided message from an error body, if any.
pub fn server_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<ErrorBody>(body).ok()?;
    [parsed.message, parsed.error, parsed.detail, parsed.title]
        .into_iter()
        .flatten()
        .map(|m| m.trim().to_string())
        .find(|m| !m.is_empty())
}

impl ApiError {
    /// Classify a non-success response.
    pub fn from_response(status: u16, status_text: &str, body: String) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }
        ApiError::Http {
            status,
            status_text: status_text.to_string(),
            body,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Message suitable for showing next to the form that triggered the call.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            ApiError::Unauthorized => SESSION_EXPIRED_MESSAGE.to_string(),
            ApiError::Http {
                status,
                status_text,
                body,
            } => server_message(body).unwrap_or_else(|| {
                if status_text.trim().is_empty() {
                    format!("Request failed with status {status}")
                } else {
                    status_text.clone()
                }
            }),
            ApiError::Deserialize(_) => UNEXPECTED_RESPONSE_MESSAGE.to_string(),
        }
    }

    /// Like [`ApiError::user_message`], with the upload endpoints' 503
    /// mapped to the "service not configured" message.
    pub fn upload_message(&self) -> String {
        match self {
            ApiError::Http { status: 503, .. } => UPLOAD_NOT_CONFIGURED_MESSAGE.to_string(),
            other => other.user_message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_status_is_its_own_kind() {
        let err = ApiError::from_response(401, "Unauthorized", String::new());
        assert!(err.is_unauthorized());
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn server_message_prefers_message_field() {
        let err = ApiError::from_response(
            404,
            "Not Found",
            r#"{"message":"Invalid invite code"}"#.to_string(),
        );
        assert_eq!(err.user_message(), "Invalid invite code");
    }

    #[test]
    fn server_message_reads_error_and_problem_details() {
        assert_eq!(
            server_message(r#"{"error":"Email already registered"}"#).as_deref(),
            Some("Email already registered")
        );
        assert_eq!(
            server_message(r#"{"type":"about:blank","title":"Bad Request","detail":"Title is required"}"#)
                .as_deref(),
            Some("Title is required")
        );
        assert_eq!(server_message(r#"{"message":"   "}"#), None);
        assert_eq!(server_message("<html>oops</html>"), None);
    }

    #[test]
    fn falls_back_to_status_text() {
        let err = ApiError::from_response(500, "Internal Server Error", "boom".to_string());
        assert_eq!(err.user_message(), "Internal Server Error");

        let bare = ApiError::from_response(502, "", String::new());
        assert_eq!(bare.user_message(), "Request failed with status 502");
    }

    #[test]
    fn network_errors_get_connectivity_message() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
    }

    #[test]
    fn upload_503_means_service_not_configured() {
        let err = ApiError::from_response(
            503,
            "Service Unavailable",
            r#"{"message":"Cloudinary not configured"}"#.to_string(),
        );
        assert_eq!(err.upload_message(), UPLOAD_NOT_CONFIGURED_MESSAGE);
        assert_eq!(err.user_message(), "Cloudinary not configured");
    }
}
