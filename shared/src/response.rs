//! API Response types
//!
//! Standardized response envelope used by the backend

use serde::{Deserialize, Serialize};

/// Unified API response structure
///
/// Nearly every endpoint answers in this format:
/// ```json
/// {
///     "status": 200,
///     "message": "Success",
///     "data": { ... }
/// }
/// ```
///
/// `data` may be null even when `status` reports success (goods/class
/// create and update do not reliably echo the written row), so callers
/// that care must check `status` rather than the presence of `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Application status code, HTTP-like (200..300 = success)
    pub status: u16,
    /// Human-readable message
    pub message: String,
    /// Response data (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            status: 200,
            message: "Success".to_string(),
            data: Some(data),
        }
    }

    /// Create a successful response with custom message
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            status: 200,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Create a successful response that carries no data
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            status: 200,
            message: message.into(),
            data: None,
        }
    }

    /// Create an error response
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            data: None,
        }
    }

    /// Whether the application status code reports success
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Take the response message, falling back when the backend sent an
    /// empty one
    pub fn message_or(&self, fallback: &str) -> String {
        if self.message.is_empty() {
            fallback.to_string()
        } else {
            self.message.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_roundtrip() {
        let response: ApiResponse<Vec<i64>> =
            serde_json::from_str(r#"{"status":200,"message":"Success","data":[1,2,3]}"#).unwrap();
        assert!(response.is_success());
        assert_eq!(response.data, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_missing_data_is_none() {
        let response: ApiResponse<Vec<i64>> =
            serde_json::from_str(r#"{"status":200,"message":"ok"}"#).unwrap();
        assert!(response.is_success());
        assert!(response.data.is_none());

        let response: ApiResponse<Vec<i64>> =
            serde_json::from_str(r#"{"status":200,"message":"ok","data":null}"#).unwrap();
        assert!(response.data.is_none());
    }

    #[test]
    fn test_is_success_bounds() {
        assert!(ApiResponse::<()>::error(299, "edge").is_success());
        assert!(!ApiResponse::<()>::error(300, "edge").is_success());
        assert!(!ApiResponse::<()>::error(500, "conflict").is_success());
    }

    #[test]
    fn test_message_or_fallback() {
        let response = ApiResponse::<()>::error(500, "");
        assert_eq!(response.message_or("Failed to create goods"), "Failed to create goods");
        let response = ApiResponse::<()>::error(500, "conflict");
        assert_eq!(response.message_or("Failed to create goods"), "conflict");
    }
}
