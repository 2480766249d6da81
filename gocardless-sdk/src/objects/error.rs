//! Error body returned by the API for any non-2xx response.

use serde::{Deserialize, Serialize};

/// `{"error": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ApiError,
}

/// Structured API failure.
///
/// Validation, not-found and authentication failures all share this shape;
/// tell them apart with [`error_type`](Self::error_type) and
/// [`code`](Self::code).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message} (type: {error_type}, code: {code}, request id: {request_id})")]
pub struct ApiError {
    #[serde(default)]
    pub documentation_url: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub request_id: String,
    #[serde(rename = "type", default)]
    pub error_type: String,
    #[serde(default)]
    pub code: u16,
    #[serde(rename = "errors", default)]
    pub details: Vec<ErrorDetail>,
}

/// Reason for one part of an [`ApiError`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub request_pointer: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_validation_error() {
        let body = json!({
            "error": {
                "documentation_url": "https://developer.gocardless.com/api-reference#validation_failed",
                "message": "Validation failed",
                "type": "validation_failed",
                "code": 422,
                "request_id": "dd50eaaf-8213-48fe-90d6-5466872efbc4",
                "errors": [
                    {
                        "message": "must be a number",
                        "field": "branch_code",
                        "request_pointer": "/customer_bank_accounts/branch_code"
                    }
                ]
            }
        });
        let envelope: ErrorEnvelope = serde_json::from_value(body).unwrap();
        let error = envelope.error;
        assert_eq!(error.code, 422);
        assert_eq!(error.error_type, "validation_failed");
        assert_eq!(error.details.len(), 1);
        assert_eq!(error.details[0].field, "branch_code");
        assert_eq!(
            error.details[0].request_pointer,
            "/customer_bank_accounts/branch_code"
        );
    }

    #[test]
    fn test_display() {
        let error = ApiError {
            message: "Resource not found".to_string(),
            error_type: "invalid_api_usage".to_string(),
            code: 404,
            request_id: "req_1".to_string(),
            ..ApiError::default()
        };
        assert_eq!(
            error.to_string(),
            "Resource not found (type: invalid_api_usage, code: 404, request id: req_1)"
        );
    }
}
