//! Headline numbers for the back-office dashboard.

use bigdecimal::BigDecimal;
use jiff::tz::TimeZone;

use crate::error::AppResult;
use crate::models::{JobStatus, LeadStatus, MembershipStatus};
use crate::repositories::{
    InvoiceRepository, JobDetails, JobRepository, LeadRepository, MembershipRepository,
    Repositories, TechnicianRepository,
};
use crate::services::current_periods;
use crate::views::conversion_rate;

/// Aggregates behind the stat tiles. Empty aggregates are zero, never absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub revenue_today: BigDecimal,
    pub jobs_in_progress: i64,
    pub active_techs: i64,
    pub open_leads: i64,
    pub jobs_today: i64,
    pub weekly_revenue: BigDecimal,
    pub monthly_revenue: BigDecimal,
    pub conversion_rate: f64,
    pub active_members: i64,
    pub avg_ticket: BigDecimal,
}

#[derive(Debug, Clone, Default)]
pub struct DashboardOverview {
    pub stats: DashboardStats,
    pub today_schedule: Vec<JobDetails>,
    pub recent_jobs: Vec<JobDetails>,
    /// Sections that failed to load and hold fallback values
    pub degraded: Vec<&'static str>,
}

pub const RECENT_JOBS: i64 = 10;

#[derive(Clone)]
pub struct DashboardService {
    jobs: JobRepository,
    technicians: TechnicianRepository,
    leads: LeadRepository,
    invoices: InvoiceRepository,
    memberships: MembershipRepository,
    tz: TimeZone,
}

impl DashboardService {
    pub fn new(repos: &Repositories, tz: TimeZone) -> Self {
        Self {
            jobs: repos.jobs.clone(),
            technicians: repos.technicians.clone(),
            leads: repos.leads.clone(),
            invoices: repos.invoices.clone(),
            memberships: repos.memberships.clone(),
            tz,
        }
    }

    /// Runs every aggregate concurrently; the first failure fails the call.
    pub async fn stats(&self) -> AppResult<DashboardStats> {
        let periods = current_periods(&self.tz)?;

        let (
            revenue_today,
            jobs_in_progress,
            active_techs,
            open_leads,
            jobs_today,
            weekly_revenue,
            monthly_revenue,
            won,
            total_leads,
            active_members,
            avg_ticket,
        ) = tokio::try_join!(
            self.invoices.paid_between(periods.day_start, periods.day_end),
            self.jobs.count_with_status(JobStatus::InProgress),
            self.technicians.count_available(),
            self.leads.count_open(),
            self.jobs.count_scheduled_on(periods.today),
            self.invoices.paid_between(periods.week_start, periods.day_end),
            self.invoices.paid_between(periods.month_start, periods.day_end),
            self.leads.count_with_status(LeadStatus::Won),
            self.leads.count_all(),
            self.memberships.count_with_status(MembershipStatus::Active),
            self.invoices.average_paid(),
        )?;

        Ok(DashboardStats {
            revenue_today,
            jobs_in_progress,
            active_techs,
            open_leads,
            jobs_today,
            weekly_revenue,
            monthly_revenue,
            conversion_rate: conversion_rate(won, total_leads),
            active_members,
            avg_ticket: avg_ticket.unwrap_or_default(),
        })
    }

    /// Stats plus today's schedule and the latest jobs. Each section loads on
    /// its own; a failed section falls back to empty values and is listed in
    /// `degraded` instead of failing the page.
    pub async fn overview(&self) -> AppResult<DashboardOverview> {
        let periods = current_periods(&self.tz)?;
        let (stats, schedule, recent) = tokio::join!(
            self.stats(),
            self.jobs.scheduled_on(periods.today),
            self.jobs.recent_details(RECENT_JOBS),
        );

        let mut overview = DashboardOverview::default();
        match stats {
            Ok(stats) => overview.stats = stats,
            Err(e) => {
                tracing::warn!(error = %e, section = "stats", "Dashboard section degraded");
                overview.degraded.push("stats");
            }
        }
        match schedule {
            Ok(jobs) => overview.today_schedule = jobs,
            Err(e) => {
                tracing::warn!(error = %e, section = "todaySchedule", "Dashboard section degraded");
                overview.degraded.push("todaySchedule");
            }
        }
        match recent {
            Ok(jobs) => overview.recent_jobs = jobs,
            Err(e) => {
                tracing::warn!(error = %e, section = "recentJobs", "Dashboard section degraded");
                overview.degraded.push("recentJobs");
            }
        }

        Ok(overview)
    }
}
