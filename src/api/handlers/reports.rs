//! Report pages. Each table holds at most 50 rows, most recent first.

use axum::{
    Json,
    extract::{Path, State},
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::REPORTS_TAG;
use crate::api::dto::{
    AnalyticsResponse, CustomersPageResponse, ErrorResponse, InstallsPageResponse,
    JobsPageResponse, MembershipsPageResponse, TechniciansPageResponse,
};
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::JobDetailPanel;

pub fn report_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_jobs))
        .routes(routes!(get_job))
        .routes(routes!(customers))
        .routes(routes!(technicians))
        .routes(routes!(installs))
        .routes(routes!(memberships))
        .routes(routes!(analytics))
}

#[utoipa::path(
    get,
    path = "/jobs",
    tag = REPORTS_TAG,
    responses((status = 200, description = "Status tallies and recent jobs", body = JobsPageResponse)),
    security(("bearerAuth" = []))
)]
async fn list_jobs(State(state): State<AppState>) -> AppResult<Json<JobsPageResponse>> {
    Ok(Json(state.services.reports.jobs().await?.into()))
}

#[utoipa::path(
    get,
    path = "/jobs/{id}",
    tag = REPORTS_TAG,
    params(("id" = i32, Path, description = "Job id")),
    responses(
        (status = 200, description = "Job detail panel", body = JobDetailPanel),
        (status = 404, description = "No such job", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<JobDetailPanel>> {
    if id < 1 {
        return Err(AppError::not_found("job", id));
    }
    let details = state.services.reports.job(id).await?;
    Ok(Json(JobDetailPanel::from(&details)))
}

#[utoipa::path(
    get,
    path = "/customers",
    tag = REPORTS_TAG,
    responses((status = 200, description = "Customer totals and recent customers", body = CustomersPageResponse)),
    security(("bearerAuth" = []))
)]
async fn customers(State(state): State<AppState>) -> AppResult<Json<CustomersPageResponse>> {
    Ok(Json(state.services.reports.customers().await?.into()))
}

#[utoipa::path(
    get,
    path = "/technicians",
    tag = REPORTS_TAG,
    responses((status = 200, description = "Roster with job counts", body = TechniciansPageResponse)),
    security(("bearerAuth" = []))
)]
async fn technicians(State(state): State<AppState>) -> AppResult<Json<TechniciansPageResponse>> {
    Ok(Json(state.services.reports.technicians().await?.into()))
}

#[utoipa::path(
    get,
    path = "/installs",
    tag = REPORTS_TAG,
    responses((status = 200, description = "Installation jobs and totals", body = InstallsPageResponse)),
    security(("bearerAuth" = []))
)]
async fn installs(State(state): State<AppState>) -> AppResult<Json<InstallsPageResponse>> {
    Ok(Json(state.services.reports.installs().await?.into()))
}

#[utoipa::path(
    get,
    path = "/memberships",
    tag = REPORTS_TAG,
    responses((status = 200, description = "Membership totals and recent plans", body = MembershipsPageResponse)),
    security(("bearerAuth" = []))
)]
async fn memberships(State(state): State<AppState>) -> AppResult<Json<MembershipsPageResponse>> {
    Ok(Json(state.services.reports.memberships().await?.into()))
}

#[utoipa::path(
    get,
    path = "/analytics",
    tag = REPORTS_TAG,
    responses((status = 200, description = "Revenue, job mix, lead sources and top technicians", body = AnalyticsResponse)),
    security(("bearerAuth" = []))
)]
async fn analytics(State(state): State<AppState>) -> AppResult<Json<AnalyticsResponse>> {
    Ok(Json(state.services.reports.analytics().await?.into()))
}
