//! Dispatch board and lead pipeline.

use axum::{Json, extract::State};
use jiff::civil::Date;
use serde::Deserialize;
use utoipa::IntoParams;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use validator::Validate;

use crate::api::doc::DISPATCH_TAG;
use crate::api::dto::ErrorResponse;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedQuery;
use crate::views::{DispatchBoard, JobFilter, LeadPipeline, SelectionInput};

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BoardQuery {
    /// Day to show, YYYY-MM-DD; today in the business time zone when omitted
    #[param(value_type = Option<String>, format = Date, example = "2025-01-15")]
    pub date: Option<Date>,
    #[serde(default)]
    #[param(inline)]
    pub filter: JobFilter,
    /// Job whose detail panel is open
    #[validate(range(min = 1, message = "Job id must be positive"))]
    pub selected: Option<i32>,
    /// Job just clicked; clicking the open job closes its panel
    #[validate(range(min = 1, message = "Job id must be positive"))]
    pub click: Option<i32>,
    /// Click outside every job; closes the panel
    #[serde(default)]
    pub dismiss: bool,
}

impl BoardQuery {
    fn selection(&self) -> SelectionInput<i32> {
        SelectionInput {
            selected: self.selected,
            click: self.click,
            dismiss: self.dismiss,
        }
    }
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PipelineQuery {
    /// Lead whose detail panel is open
    #[validate(range(min = 1, message = "Lead id must be positive"))]
    pub selected: Option<i32>,
    /// Lead just clicked; clicking the open lead closes its panel
    #[validate(range(min = 1, message = "Lead id must be positive"))]
    pub click: Option<i32>,
    /// Click outside every lead; closes the panel
    #[serde(default)]
    pub dismiss: bool,
}

impl PipelineQuery {
    fn selection(&self) -> SelectionInput<i32> {
        SelectionInput {
            selected: self.selected,
            click: self.click,
            dismiss: self.dismiss,
        }
    }
}

/// # Routes
/// - `GET /dispatch/board` - One day's schedule grid and unassigned queue
/// - `GET /leads/pipeline` - Lead kanban with funnel stats
pub fn dispatch_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(board))
        .routes(routes!(pipeline))
}

#[utoipa::path(
    get,
    path = "/dispatch/board",
    tag = DISPATCH_TAG,
    params(BoardQuery),
    responses(
        (status = 200, description = "Dispatch board", body = DispatchBoard),
        (status = 400, description = "Unparseable date or filter", body = ErrorResponse),
        (status = 403, description = "Staff only", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn board(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<BoardQuery>,
) -> AppResult<Json<DispatchBoard>> {
    let board = state
        .services
        .dispatch
        .board(query.date, query.filter, query.selection())
        .await?;
    Ok(Json(board))
}

#[utoipa::path(
    get,
    path = "/leads/pipeline",
    tag = DISPATCH_TAG,
    params(PipelineQuery),
    responses(
        (status = 200, description = "Lead pipeline", body = LeadPipeline),
        (status = 403, description = "Staff only", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn pipeline(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<PipelineQuery>,
) -> AppResult<Json<LeadPipeline>> {
    let pipeline = state.services.pipeline.pipeline(query.selection()).await?;
    Ok(Json(pipeline))
}
