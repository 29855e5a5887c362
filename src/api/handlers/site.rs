//! Public brochure content. Compiled-in tables, no database access.

use axum::Json;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::SITE_TAG;
use crate::content::{
    self, COMPANY_TIMELINE, FAQS, FINANCING_OPTIONS, Faq, FinancingOption, JOB_OPENINGS,
    JobOpening, MEMBERSHIP_PLANS, MembershipPlan, Milestone, REVIEWS, ReviewSummary, SERVICES,
    ServiceOffering, TESTIMONIALS, Testimonial,
};
use crate::state::AppState;

pub fn site_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(services))
        .routes(routes!(testimonials))
        .routes(routes!(careers))
        .routes(routes!(faqs))
        .routes(routes!(timeline))
        .routes(routes!(financing))
        .routes(routes!(membership_plans))
        .routes(routes!(reviews))
}

#[utoipa::path(get, path = "/services", tag = SITE_TAG,
    responses((status = 200, body = [ServiceOffering])))]
async fn services() -> Json<&'static [ServiceOffering]> {
    Json(SERVICES)
}

#[utoipa::path(get, path = "/testimonials", tag = SITE_TAG,
    responses((status = 200, body = [Testimonial])))]
async fn testimonials() -> Json<&'static [Testimonial]> {
    Json(TESTIMONIALS)
}

#[utoipa::path(get, path = "/careers", tag = SITE_TAG,
    responses((status = 200, description = "Open positions", body = [JobOpening])))]
async fn careers() -> Json<&'static [JobOpening]> {
    Json(JOB_OPENINGS)
}

#[utoipa::path(get, path = "/faqs", tag = SITE_TAG,
    responses((status = 200, body = [Faq])))]
async fn faqs() -> Json<&'static [Faq]> {
    Json(FAQS)
}

#[utoipa::path(get, path = "/timeline", tag = SITE_TAG,
    responses((status = 200, description = "Company history", body = [Milestone])))]
async fn timeline() -> Json<&'static [Milestone]> {
    Json(COMPANY_TIMELINE)
}

#[utoipa::path(get, path = "/financing", tag = SITE_TAG,
    responses((status = 200, body = [FinancingOption])))]
async fn financing() -> Json<&'static [FinancingOption]> {
    Json(FINANCING_OPTIONS)
}

#[utoipa::path(get, path = "/membership-plans", tag = SITE_TAG,
    responses((status = 200, body = [MembershipPlan])))]
async fn membership_plans() -> Json<&'static [MembershipPlan]> {
    Json(MEMBERSHIP_PLANS)
}

#[utoipa::path(get, path = "/reviews", tag = SITE_TAG,
    responses((status = 200, description = "Reviews with average rating", body = ReviewSummary)))]
async fn reviews() -> Json<ReviewSummary> {
    Json(content::review_summary(REVIEWS))
}
