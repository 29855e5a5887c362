//! Service layer for business logic operations.
//!
//! Services coordinate repositories and the pure view builders. Every date
//! boundary is computed in the configured business time zone.

mod auth_service;
mod dashboard_service;
mod dispatch_service;
mod inquiry_service;
mod pipeline_service;
mod portal_service;
mod report_service;
mod seed_service;
mod tech_service;

pub use auth_service::AuthService;
pub use dashboard_service::{DashboardOverview, DashboardService, DashboardStats};
pub use dispatch_service::DispatchService;
pub use inquiry_service::{ContactInquiry, EmergencyInquiry, InquiryService};
pub use pipeline_service::PipelineService;
pub use portal_service::{PortalService, PortalSummary};
pub use report_service::{
    AnalyticsReport, CustomersReport, InstallsReport, JobsReport, MembershipsReport,
    ReportService, TechnicianLoad, TechniciansReport,
};
pub use seed_service::{ADMIN_EMAIL, DEMO_PASSWORD, SeedReport, SeedService};
pub use tech_service::{TechDay, TechService};

use jiff::tz::TimeZone;

use crate::config::Settings;
use crate::error::{AppError, AppResult};
use crate::repositories::Repositories;
use crate::views::{GridSpec, Periods};

pub(crate) fn current_periods(tz: &TimeZone) -> AppResult<Periods> {
    Periods::now_in(tz).map_err(|e| AppError::Internal {
        source: anyhow::anyhow!("Failed to compute reporting periods: {}", e),
    })
}

/// Aggregates all services for convenient access.
///
/// Cloning is cheap since the underlying pool uses `Arc` internally.
#[derive(Clone)]
pub struct Services {
    pub auth: AuthService,
    pub dashboard: DashboardService,
    pub dispatch: DispatchService,
    pub pipeline: PipelineService,
    pub reports: ReportService,
    pub portal: PortalService,
    pub tech: TechService,
    pub inquiries: InquiryService,
}

impl Services {
    pub fn new(repos: Repositories, settings: &Settings) -> Self {
        let tz = settings.application.time_zone();
        Self {
            auth: AuthService::new(repos.users.clone(), settings.jwt.clone()),
            dashboard: DashboardService::new(&repos, tz.clone()),
            dispatch: DispatchService::new(
                repos.jobs.clone(),
                repos.technicians.clone(),
                GridSpec::from(&settings.dispatch),
                tz.clone(),
            ),
            pipeline: PipelineService::new(repos.leads.clone(), tz.clone()),
            reports: ReportService::new(&repos, tz.clone()),
            portal: PortalService::new(&repos, tz.clone()),
            tech: TechService::new(repos.technicians.clone(), repos.jobs.clone(), tz),
            inquiries: InquiryService::new(repos.leads),
        }
    }
}
