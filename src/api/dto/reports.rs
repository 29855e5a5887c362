//! Report page DTOs: jobs, customers, technicians, installs, memberships and analytics.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{
    Customer, CustomerType, JobPriority, JobStatus, JobType, LeadSource, Membership,
    MembershipStatus, MembershipTier,
};
use crate::repositories::{JobDetails, TechnicianCompleted};
use crate::services::{
    AnalyticsReport, CustomersReport, InstallsReport, JobsReport, MembershipsReport,
    TechnicianLoad, TechniciansReport,
};
use crate::views::Tone;
use crate::views::format::{money, money_opt, short_date, time_window};
use crate::views::reports::MonthRevenue;
use crate::views::styles::{
    job_priority_tone, job_status_tone, membership_status_tone, tier_tone,
};

/// One row of a job table.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobRow {
    pub id: i32,
    pub job_number: String,
    pub title: String,
    pub customer_name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technician: Option<String>,
    pub job_type: JobType,
    pub job_type_label: &'static str,
    pub priority: JobPriority,
    pub priority_tone: Tone,
    pub status: JobStatus,
    pub status_label: &'static str,
    pub status_tone: Tone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,
}

impl From<&JobDetails> for JobRow {
    fn from(details: &JobDetails) -> Self {
        let job = &details.job;
        Self {
            id: job.id,
            job_number: job.job_number.clone(),
            title: job.title.clone(),
            customer_name: details.customer.display_name(),
            address: details.property.one_line(),
            technician: details.technician.as_ref().map(|t| t.name.clone()),
            job_type: job.job_type,
            job_type_label: job.job_type.label(),
            priority: job.priority,
            priority_tone: job_priority_tone(job.priority),
            status: job.status,
            status_label: job.status.label(),
            status_tone: job_status_tone(job.status),
            scheduled_date: job.scheduled_date.map(|d| short_date(d.to_jiff())),
            time_window: time_window(
                job.scheduled_start.map(|t| t.to_jiff()),
                job.scheduled_end.map(|t| t.to_jiff()),
            ),
            estimated_cost: money_opt(job.estimated_cost.as_ref()),
        }
    }
}

pub fn job_rows(details: &[JobDetails]) -> Vec<JobRow> {
    details.iter().map(JobRow::from).collect()
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusTally {
    pub status: JobStatus,
    pub label: &'static str,
    pub tone: Tone,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobsPageResponse {
    pub total_jobs: i64,
    /// One entry per status, zero counts included
    pub status_tallies: Vec<StatusTally>,
    pub jobs: Vec<JobRow>,
}

impl From<JobsReport> for JobsPageResponse {
    fn from(report: JobsReport) -> Self {
        Self {
            total_jobs: report.status_tallies.iter().map(|(_, n)| n).sum(),
            status_tallies: report
                .status_tallies
                .into_iter()
                .map(|(status, count)| StatusTally {
                    status,
                    label: status.label(),
                    tone: job_status_tone(status),
                    count,
                })
                .collect(),
            jobs: job_rows(&report.recent),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRow {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub phone: String,
    pub customer_type: CustomerType,
    /// RFC 3339
    pub created_at: String,
}

impl From<&Customer> for CustomerRow {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id,
            name: format!("{} {}", customer.first_name, customer.last_name),
            company_name: customer.company_name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            customer_type: customer.customer_type,
            created_at: customer.created_at.to_jiff().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomersPageResponse {
    pub total: i64,
    pub residential: i64,
    pub commercial: i64,
    /// Customers holding an active membership
    pub members: i64,
    pub new_this_month: i64,
    pub customers: Vec<CustomerRow>,
}

impl From<CustomersReport> for CustomersPageResponse {
    fn from(report: CustomersReport) -> Self {
        let counts = report.counts;
        Self {
            total: counts.total,
            residential: counts.residential,
            commercial: counts.commercial,
            members: counts.members,
            new_this_month: counts.new_since,
            customers: report.recent.iter().map(CustomerRow::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianRow {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truck_id: Option<String>,
    pub is_available: bool,
    pub skills: Vec<String>,
    pub completed_jobs: i64,
    pub active_jobs: i64,
}

impl From<TechnicianLoad> for TechnicianRow {
    fn from(load: TechnicianLoad) -> Self {
        let tech = load.technician;
        Self {
            id: tech.id,
            name: tech.name,
            phone: tech.phone,
            truck_id: tech.truck_id,
            is_available: tech.is_available,
            skills: tech.skills,
            completed_jobs: load.completed,
            active_jobs: load.active,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TechniciansPageResponse {
    pub total: i64,
    pub available: i64,
    pub technicians: Vec<TechnicianRow>,
}

impl From<TechniciansReport> for TechniciansPageResponse {
    fn from(report: TechniciansReport) -> Self {
        Self {
            total: report.total,
            available: report.available,
            technicians: report.roster.into_iter().map(TechnicianRow::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InstallsPageResponse {
    pub total: i64,
    /// Open installs dated today or later
    pub upcoming: i64,
    pub completed_this_month: i64,
    /// Estimated value of every completed install
    pub completed_revenue: f64,
    pub installs: Vec<JobRow>,
}

impl From<InstallsReport> for InstallsPageResponse {
    fn from(report: InstallsReport) -> Self {
        let totals = report.totals;
        Self {
            total: totals.total,
            upcoming: totals.upcoming,
            completed_this_month: totals.completed_since,
            completed_revenue: money(&totals.completed_value),
            installs: job_rows(&report.recent),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TierTally {
    pub tier: MembershipTier,
    pub tone: Tone,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MembershipRow {
    pub id: i32,
    pub customer_id: i32,
    pub customer_name: String,
    pub tier: MembershipTier,
    pub tier_tone: Tone,
    pub status: MembershipStatus,
    pub status_tone: Tone,
    pub monthly_price: f64,
    /// YYYY-MM-DD
    pub start_date: String,
    pub end_date: String,
    pub auto_renew: bool,
}

impl From<(Membership, Customer)> for MembershipRow {
    fn from((membership, customer): (Membership, Customer)) -> Self {
        Self {
            id: membership.id,
            customer_id: customer.id,
            customer_name: customer.display_name(),
            tier: membership.tier,
            tier_tone: tier_tone(membership.tier),
            status: membership.status,
            status_tone: membership_status_tone(membership.status),
            monthly_price: money(&membership.monthly_price),
            start_date: membership.start_date.to_jiff().to_string(),
            end_date: membership.end_date.to_jiff().to_string(),
            auto_renew: membership.auto_renew,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MembershipsPageResponse {
    pub active: i64,
    /// Active memberships per tier
    pub by_tier: Vec<TierTally>,
    /// Non-expired share of all memberships, percent
    pub renewal_rate: f64,
    pub monthly_recurring: f64,
    pub memberships: Vec<MembershipRow>,
}

impl From<MembershipsReport> for MembershipsPageResponse {
    fn from(report: MembershipsReport) -> Self {
        Self {
            active: report.active,
            by_tier: report
                .by_tier
                .into_iter()
                .map(|(tier, count)| TierTally {
                    tier,
                    tone: tier_tone(tier),
                    count,
                })
                .collect(),
            renewal_rate: report.renewal_rate,
            monthly_recurring: money(&report.monthly_recurring),
            memberships: report.recent.into_iter().map(MembershipRow::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TypeTally {
    pub job_type: JobType,
    pub label: &'static str,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceTally {
    pub source: LeadSource,
    pub label: &'static str,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopTechnician {
    pub technician_id: i32,
    pub name: String,
    pub completed: i64,
}

impl From<TechnicianCompleted> for TopTechnician {
    fn from(row: TechnicianCompleted) -> Self {
        Self {
            technician_id: row.technician_id,
            name: row.name,
            completed: row.completed,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    /// Trailing six months, oldest first
    pub revenue_by_month: Vec<MonthRevenue>,
    pub jobs_by_type: Vec<TypeTally>,
    pub leads_by_source: Vec<SourceTally>,
    pub conversion_rate: f64,
    pub avg_ticket: f64,
    pub top_technicians: Vec<TopTechnician>,
}

impl From<AnalyticsReport> for AnalyticsResponse {
    fn from(report: AnalyticsReport) -> Self {
        Self {
            revenue_by_month: report.revenue_by_month,
            jobs_by_type: report
                .jobs_by_type
                .into_iter()
                .map(|(job_type, count)| TypeTally {
                    job_type,
                    label: job_type.label(),
                    count,
                })
                .collect(),
            leads_by_source: report
                .leads_by_source
                .into_iter()
                .map(|(source, count)| SourceTally {
                    source,
                    label: source.label(),
                    count,
                })
                .collect(),
            conversion_rate: report.conversion_rate,
            avg_ticket: money(&report.avg_ticket),
            top_technicians: report
                .top_technicians
                .into_iter()
                .map(TopTechnician::from)
                .collect(),
        }
    }
}
