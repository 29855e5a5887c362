//! Customer portal and technician day view.

use axum::{Extension, Json, extract::State};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::PORTAL_TAG;
use crate::api::dto::{ErrorResponse, PortalResponse, TechDayResponse};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;

/// Customer role only.
pub fn portal_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(summary))
}

/// Technician role only.
pub fn tech_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(today))
}

#[utoipa::path(
    get,
    path = "/summary",
    tag = PORTAL_TAG,
    responses(
        (status = 200, description = "The caller's account summary", body = PortalResponse),
        (status = 403, description = "Not a customer account", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn summary(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> AppResult<Json<PortalResponse>> {
    let customer_id = user.linked_customer()?;
    let summary = state.services.portal.summary(customer_id).await?;
    Ok(Json(summary.into()))
}

#[utoipa::path(
    get,
    path = "/today",
    tag = PORTAL_TAG,
    responses(
        (status = 200, description = "The caller's stops for today", body = TechDayResponse),
        (status = 403, description = "Not a technician account", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn today(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> AppResult<Json<TechDayResponse>> {
    let technician_id = user.linked_technician()?;
    let day = state.services.tech.today(technician_id).await?;
    Ok(Json(day.into()))
}
