//! Error types for the `ozon-seller-rs` crate.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an
//! alias for `std::result::Result<T, OzonError>`.
//!
//! [`OzonError`] covers two families:
//! - **Transport errors** — structured Ozon error responses, unexpected HTTP
//!   statuses, and network/TLS/timeout failures
//! - **Decode errors** — response bodies that don't match the expected shape
//!
//! plus [`OzonError::InvalidArgument`] for values rejected while building the
//! client.

use std::fmt;

/// One entry of the `details` array in an Ozon error response.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub type_url: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

/// Error response returned by the Ozon Seller API.
///
/// ```json
/// {"code": 5, "message": "Report not found", "details": []}
/// ```
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ApiErrorBody {
    /// gRPC-style error code.
    #[serde(default)]
    pub code: Option<i64>,
    /// Human-readable description of the error.
    #[serde(default)]
    pub message: Option<String>,
    /// Additional error details, usually empty.
    #[serde(default)]
    pub details: Vec<ApiErrorDetail>,
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "[{code}] ")?,
            None => write!(f, "[UNKNOWN] ")?,
        }
        write!(f, "{}", self.message.as_deref().unwrap_or("No message"))
    }
}

/// All possible errors produced by the `ozon-seller-rs` client.
#[derive(Debug, thiserror::Error)]
pub enum OzonError {
    /// An error response returned by the Ozon REST API.
    #[error("API error (HTTP {status}): {body}")]
    Api {
        /// The HTTP status code.
        status: reqwest::StatusCode,
        /// The parsed error body.
        body: ApiErrorBody,
    },

    /// The server returned an unexpected HTTP status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code.
        status: reqwest::StatusCode,
        /// The response body text.
        body: String,
    },

    /// A network or transport-level error from `reqwest`.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to deserialize a JSON response body.
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The caller provided an invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl OzonError {
    /// `true` for failures of the round trip itself: network errors and
    /// non-success HTTP statuses, structured or not.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Api { .. } | Self::HttpStatus { .. } | Self::Http(_)
        )
    }

    /// `true` when the server answered successfully but the body didn't
    /// match the expected response shape.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Json(_))
    }

    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Api { status, .. } | Self::HttpStatus { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OzonError>;
