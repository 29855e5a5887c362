//! Error handler for converting AppError to HTTP responses.
//!
//! Every error leaves the API as an [`ErrorResponse`]. Server-side failures are
//! logged here with their source chain and reach the client as a generic
//! message only.

use axum::{
    Json,
    extract::Request,
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

/// Maps an AppError variant to its HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Duplicate { .. } => StatusCode::CONFLICT,
        AppError::Validation { .. } | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::ValidationErrors { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
        AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
        AppError::ConnectionPool { .. } => StatusCode::SERVICE_UNAVAILABLE,
        AppError::Database { .. } | AppError::Configuration { .. } | AppError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn error_body(error: &AppError) -> ErrorResponse {
    match error {
        AppError::NotFound {
            entity,
            field,
            value,
        } => ErrorResponse::new(
            "NOT_FOUND",
            format!("{} with {}={} was not found", entity, field, value),
        ),
        AppError::Duplicate {
            entity,
            field,
            value,
        } => ErrorResponse::new(
            "DUPLICATE",
            format!("{} with {}='{}' already exists", entity, field, value),
        )
        .with_details(json!({ "entity": entity, "field": field })),
        AppError::Validation { field, reason } => {
            ErrorResponse::new("VALIDATION_ERROR", format!("{}: {}", field, reason))
                .with_details(json!([{ "field": field, "message": reason }]))
        }
        AppError::ValidationErrors { errors } => {
            ErrorResponse::new("VALIDATION_ERROR", "Request validation failed")
                .with_details(json!(errors))
        }
        AppError::BadRequest { message } => ErrorResponse::new("BAD_REQUEST", message.as_str()),
        AppError::Unauthorized { message } => ErrorResponse::new("UNAUTHORIZED", message.as_str()),
        AppError::Forbidden { message } => ErrorResponse::new("FORBIDDEN", message.as_str()),
        AppError::ConnectionPool { .. } => {
            ErrorResponse::new("SERVICE_UNAVAILABLE", "Database connection unavailable")
        }
        AppError::Database { .. } => ErrorResponse::new("DATABASE_ERROR", "A database error occurred"),
        AppError::Configuration { .. } | AppError::Internal { .. } => {
            ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred")
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);
        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let body = error_body(&self);
        let mut response = (status, Json(body.clone())).into_response();
        // Kept so the request id layer can stamp the body on the way out.
        response.extensions_mut().insert(body);
        response
    }
}

/// Re-renders an error produced by [`AppError::into_response`] with the
/// request id filled in. Other responses pass through untouched.
pub fn attach_request_id(response: Response, request_id: &str) -> Response {
    let Some(body) = response.extensions().get::<ErrorResponse>().cloned() else {
        return response;
    };
    let (mut parts, _) = response.into_parts();
    let rendered = Json(body.with_request_id(request_id)).into_response();
    let (rendered_parts, rendered_body) = rendered.into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    if let Some(content_type) = rendered_parts.headers.get(header::CONTENT_TYPE) {
        parts.headers.insert(header::CONTENT_TYPE, content_type.clone());
    }
    Response::from_parts(parts, rendered_body)
}

/// Turns bare error responses produced outside the handlers (unknown route,
/// wrong method) into the JSON error format.
pub async fn global_error_handler(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"));
    if is_json {
        return response;
    }

    let (code, message) = match status {
        StatusCode::NOT_FOUND => ("NOT_FOUND", "The requested resource was not found"),
        StatusCode::METHOD_NOT_ALLOWED => {
            ("METHOD_NOT_ALLOWED", "HTTP method not allowed for this endpoint")
        }
        StatusCode::UNSUPPORTED_MEDIA_TYPE => ("UNSUPPORTED_MEDIA_TYPE", "Unsupported media type"),
        StatusCode::PAYLOAD_TOO_LARGE => ("PAYLOAD_TOO_LARGE", "Request payload too large"),
        StatusCode::REQUEST_TIMEOUT => ("REQUEST_TIMEOUT", "The request took too long to complete"),
        s if s.is_server_error() => ("INTERNAL_ERROR", "An internal error occurred"),
        _ => ("BAD_REQUEST", "Bad request"),
    };

    let body = ErrorResponse::new(code, message);
    let mut rendered = (status, Json(body.clone())).into_response();
    rendered.extensions_mut().insert(body);
    rendered
}
