//! Public contact and emergency forms. Submissions are filed as website leads.

use axum::{Json, extract::State, http::StatusCode};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::INQUIRY_TAG;
use crate::api::dto::{ContactRequest, EmergencyRequest, ErrorResponse, InquiryResponse};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

pub fn inquiry_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(contact))
        .routes(routes!(emergency))
}

#[utoipa::path(
    post,
    path = "/contact",
    tag = INQUIRY_TAG,
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Inquiry received", body = InquiryResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 422, description = "Field validation failed", body = ErrorResponse)
    )
)]
async fn contact(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ContactRequest>,
) -> AppResult<(StatusCode, Json<InquiryResponse>)> {
    let lead = state.services.inquiries.submit_contact(payload.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(InquiryResponse {
            id: lead.id,
            message: "Thanks! We'll be in touch within one business day.".to_string(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/emergency",
    tag = INQUIRY_TAG,
    request_body = EmergencyRequest,
    responses(
        (status = 201, description = "Emergency request received", body = InquiryResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 422, description = "Field validation failed", body = ErrorResponse)
    )
)]
async fn emergency(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<EmergencyRequest>,
) -> AppResult<(StatusCode, Json<InquiryResponse>)> {
    let lead = state.services.inquiries.submit_emergency(payload.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(InquiryResponse {
            id: lead.id,
            message: "Emergency request received. A technician will call you shortly.".to_string(),
        }),
    ))
}
