//! Error response DTOs.

use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response format.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "code": "NOT_FOUND",
    "message": "job with id=42 was not found"
}))]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ErrorResponse {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
            request_id: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Adds request ID to the error response for correlation.
    pub fn with_request_id(mut self, request_id: &str) -> Self {
        self.request_id = Some(request_id.to_string());
        self
    }
}

/// Body of a failed dashboard stats call: a single message the client shows as is.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatsErrorResponse {
    #[schema(example = "Failed to load dashboard stats")]
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_optional_fields_are_omitted() {
        let body = serde_json::to_value(ErrorResponse::new("FORBIDDEN", "Staff only")).unwrap();
        assert_eq!(body, json!({ "code": "FORBIDDEN", "message": "Staff only" }));
    }

    #[test]
    fn test_request_id_is_camel_case() {
        let body = serde_json::to_value(
            ErrorResponse::new("BAD_REQUEST", "nope")
                .with_details(json!({ "field": "date" }))
                .with_request_id("abc"),
        )
        .unwrap();
        assert_eq!(body["requestId"], "abc");
        assert_eq!(body["details"]["field"], "date");
    }
}
