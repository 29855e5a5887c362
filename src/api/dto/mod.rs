//! Data Transfer Objects for API requests and responses.
//!
//! The dispatch board and lead pipeline view models in `crate::views` are
//! serialized as they are; the DTOs here cover everything else.

mod auth;
mod dashboard;
mod error;
mod health;
mod inquiries;
mod portal;
pub mod reports;

pub use auth::{LoginRequest, LoginResponse, RefreshRequest, UserSummary};
pub use dashboard::{DashboardStatsResponse, OverviewResponse};
pub use error::{ErrorResponse, StatsErrorResponse};
pub use health::{ComponentHealth, HealthResponse, HealthStatus};
pub use inquiries::{ContactRequest, EmergencyRequest, InquiryResponse};
pub use portal::{PortalResponse, TechDayResponse};
pub use reports::{
    AnalyticsResponse, CustomersPageResponse, InstallsPageResponse, JobRow, JobsPageResponse,
    MembershipsPageResponse, TechniciansPageResponse,
};
