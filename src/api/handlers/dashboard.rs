//! Back-office dashboard.

use axum::{Json, extract::State, http::StatusCode};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::DASHBOARD_TAG;
use crate::api::dto::{DashboardStatsResponse, OverviewResponse, StatsErrorResponse};
use crate::error::AppResult;
use crate::state::AppState;

/// # Routes
/// - `GET /stats` - Stat tiles
/// - `GET /overview` - Stat tiles, today's schedule and recent jobs
pub fn dashboard_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(stats))
        .routes(routes!(overview))
}

/// Fails as a whole: any aggregate error answers 500 with `{ "error": ... }`.
#[utoipa::path(
    get,
    path = "/stats",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Dashboard stats", body = DashboardStatsResponse),
        (status = 500, description = "An aggregate failed", body = StatsErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn stats(
    State(state): State<AppState>,
) -> Result<Json<DashboardStatsResponse>, (StatusCode, Json<StatsErrorResponse>)> {
    match state.services.dashboard.stats().await {
        Ok(stats) => Ok(Json(DashboardStatsResponse::from(&stats))),
        Err(e) => {
            tracing::error!(error = ?e, "Failed to load dashboard stats");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StatsErrorResponse {
                    error: "Failed to load dashboard stats".to_string(),
                }),
            ))
        }
    }
}

/// Sections that fail are replaced by empty values and listed in `degradedSections`.
#[utoipa::path(
    get,
    path = "/overview",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Dashboard overview", body = OverviewResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn overview(State(state): State<AppState>) -> AppResult<Json<OverviewResponse>> {
    let overview = state.services.dashboard.overview().await?;
    Ok(Json(overview.into()))
}
