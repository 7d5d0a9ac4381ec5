//! # API Error Type
//!
//! Unified error type for Tauri commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                Error Flow in Crumb Clicker                      │
//! │                                                                 │
//! │  Frontend                    Rust Backend                       │
//! │  ────────                    ────────────                       │
//! │                                                                 │
//! │  invoke('share_sales_summary')                                  │
//! │         │                                                       │
//! │         ▼                                                       │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                         │  │
//! │  │  Result<T, ApiError>                                      │  │
//! │  │         │                                                 │  │
//! │  │         ▼                                                 │  │
//! │  │  Opener failed? ── ApiError { SHARE_UNAVAILABLE } ──────► │  │
//! │  │         │                                                 │  │
//! │  │         ▼                                                 │  │
//! │  │  Success ────────────────────────────────────────────────►│  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! │                                                                 │
//! │  try {                                                          │
//! │    await invoke('share_sales_summary')                          │
//! │  } catch (e) {                                                  │
//! │    // e.code = "SHARE_UNAVAILABLE"                              │
//! │    // show transient toast with e.message                       │
//! │  }                                                              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tauri Error Serialization
//! Tauri requires errors to be serializable. We implement `Serialize`
//! and include both a machine-readable `code` and human-readable `message`.

use serde::Serialize;

/// API error returned from Tauri commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "SHARE_UNAVAILABLE",
///   "message": "Sharing is not available on this device"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// The clicker has exactly one expected runtime failure: the host OS has
/// no handler for the share hand-off. Everything else is `Internal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The host OS reported no handler for the share action.
    /// The frontend shows a transient notice; nothing is retried.
    ShareUnavailable,

    /// Unexpected failure in the command layer (500-class).
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a share-unavailable error with the user-facing notice text.
    pub fn share_unavailable() -> Self {
        ApiError::new(
            ErrorCode::ShareUnavailable,
            "Sharing is not available on this device",
        )
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_unavailable_shape() {
        let err = ApiError::share_unavailable();
        assert_eq!(err.code, ErrorCode::ShareUnavailable);

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "SHARE_UNAVAILABLE");
        assert_eq!(json["message"], "Sharing is not available on this device");
    }

    #[test]
    fn test_internal_display() {
        let err = ApiError::internal("something broke");
        assert_eq!(err.to_string(), "[Internal] something broke");
    }
}
