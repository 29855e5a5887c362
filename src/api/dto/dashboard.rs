//! Dashboard DTOs.

use serde::Serialize;
use utoipa::ToSchema;

use crate::api::dto::reports::{JobRow, job_rows};
use crate::services::{DashboardOverview, DashboardStats};
use crate::views::JobCard;
use crate::views::format::money;

/// Stat tiles. Money is rounded to cents, `conversionRate` is a percentage.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "revenueToday": 0.0,
    "jobsInProgress": 3,
    "activeTechs": 5,
    "openLeads": 12,
    "jobsToday": 8,
    "weeklyRevenue": 4210.5,
    "monthlyRevenue": 18345.0,
    "conversionRate": 30.0,
    "activeMembers": 41,
    "avgTicket": 412.37
}))]
pub struct DashboardStatsResponse {
    pub revenue_today: f64,
    pub jobs_in_progress: i64,
    pub active_techs: i64,
    pub open_leads: i64,
    pub jobs_today: i64,
    pub weekly_revenue: f64,
    pub monthly_revenue: f64,
    pub conversion_rate: f64,
    pub active_members: i64,
    pub avg_ticket: f64,
}

impl From<&DashboardStats> for DashboardStatsResponse {
    fn from(stats: &DashboardStats) -> Self {
        Self {
            revenue_today: money(&stats.revenue_today),
            jobs_in_progress: stats.jobs_in_progress,
            active_techs: stats.active_techs,
            open_leads: stats.open_leads,
            jobs_today: stats.jobs_today,
            weekly_revenue: money(&stats.weekly_revenue),
            monthly_revenue: money(&stats.monthly_revenue),
            conversion_rate: stats.conversion_rate,
            active_members: stats.active_members,
            avg_ticket: money(&stats.avg_ticket),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverviewResponse {
    pub stats: DashboardStatsResponse,
    pub today_schedule: Vec<JobCard>,
    pub recent_jobs: Vec<JobRow>,
    /// True when any section below holds fallback values
    pub degraded: bool,
    #[schema(example = json!(["recentJobs"]))]
    pub degraded_sections: Vec<String>,
}

impl From<DashboardOverview> for OverviewResponse {
    fn from(overview: DashboardOverview) -> Self {
        Self {
            stats: DashboardStatsResponse::from(&overview.stats),
            today_schedule: overview.today_schedule.iter().map(JobCard::new).collect(),
            recent_jobs: job_rows(&overview.recent_jobs),
            degraded: !overview.degraded.is_empty(),
            degraded_sections: overview.degraded.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_aggregates_serialize_as_zero() {
        let body =
            serde_json::to_value(DashboardStatsResponse::from(&DashboardStats::default())).unwrap();
        assert_eq!(body["revenueToday"], 0.0);
        assert_eq!(body["avgTicket"], 0.0);
        assert_eq!(body["jobsToday"], 0);
        assert!(body.get("revenue_today").is_none());
    }

    #[test]
    fn test_no_paid_invoices_today_reads_as_zero_revenue() {
        let stats = DashboardStats {
            revenue_today: crate::repositories::sum_or_zero(None),
            jobs_today: 3,
            ..DashboardStats::default()
        };
        let body = serde_json::to_value(DashboardStatsResponse::from(&stats)).unwrap();
        assert_eq!(body["revenueToday"], 0.0);
        assert_eq!(body["jobsToday"], 3);
    }

    #[test]
    fn test_fallback_sections_are_flagged() {
        let overview = DashboardOverview {
            degraded: vec!["stats", "recentJobs"],
            ..DashboardOverview::default()
        };
        let response = OverviewResponse::from(overview);
        assert!(response.degraded);
        assert_eq!(response.degraded_sections, vec!["stats", "recentJobs"]);

        assert!(!OverviewResponse::from(DashboardOverview::default()).degraded);
    }
}
