//! Back-office report pages: jobs, customers, technicians, installs,
//! memberships and analytics.
//!
//! Every page runs a handful of independent aggregate queries concurrently and
//! caps its table at [`PAGE_ROWS`] rows, most recent first.

use std::collections::HashMap;

use bigdecimal::BigDecimal;
use jiff::tz::TimeZone;

use crate::error::{AppError, AppResult};
use crate::models::{
    Customer, JobStatus, JobType, LeadSource, LeadStatus, Membership, MembershipStatus,
    MembershipTier, Technician,
};
use crate::repositories::{
    CustomerCounts, CustomerRepository, InstallTotals, InvoiceRepository, JobDetails,
    JobRepository, LeadRepository, MembershipRepository, Repositories, TechnicianCompleted,
    TechnicianRepository,
};
use crate::services::current_periods;
use crate::views::conversion_rate;
use crate::views::reports::{MonthRevenue, complete_tallies, renewal_rate, revenue_by_month};

pub const PAGE_ROWS: i64 = 50;
pub const TOP_TECHNICIANS: i64 = 5;

#[derive(Debug, Clone)]
pub struct JobsReport {
    /// One entry per status in lifecycle order
    pub status_tallies: Vec<(JobStatus, i64)>,
    pub recent: Vec<JobDetails>,
}

#[derive(Debug, Clone)]
pub struct CustomersReport {
    pub counts: CustomerCounts,
    pub recent: Vec<Customer>,
}

#[derive(Debug, Clone)]
pub struct TechnicianLoad {
    pub technician: Technician,
    pub completed: i64,
    /// Jobs in an open status
    pub active: i64,
}

#[derive(Debug, Clone)]
pub struct TechniciansReport {
    pub roster: Vec<TechnicianLoad>,
    pub total: i64,
    pub available: i64,
}

#[derive(Debug, Clone)]
pub struct InstallsReport {
    pub totals: InstallTotals,
    pub recent: Vec<JobDetails>,
}

#[derive(Debug, Clone)]
pub struct MembershipsReport {
    pub active: i64,
    pub by_tier: Vec<(MembershipTier, i64)>,
    pub renewal_rate: f64,
    pub monthly_recurring: BigDecimal,
    pub recent: Vec<(Membership, Customer)>,
}

#[derive(Debug, Clone)]
pub struct AnalyticsReport {
    pub revenue_by_month: Vec<MonthRevenue>,
    pub jobs_by_type: Vec<(JobType, i64)>,
    pub leads_by_source: Vec<(LeadSource, i64)>,
    pub conversion_rate: f64,
    pub avg_ticket: BigDecimal,
    pub top_technicians: Vec<TechnicianCompleted>,
}

#[derive(Clone)]
pub struct ReportService {
    customers: CustomerRepository,
    technicians: TechnicianRepository,
    jobs: JobRepository,
    leads: LeadRepository,
    invoices: InvoiceRepository,
    memberships: MembershipRepository,
    tz: TimeZone,
}

impl ReportService {
    pub fn new(repos: &Repositories, tz: TimeZone) -> Self {
        Self {
            customers: repos.customers.clone(),
            technicians: repos.technicians.clone(),
            jobs: repos.jobs.clone(),
            leads: repos.leads.clone(),
            invoices: repos.invoices.clone(),
            memberships: repos.memberships.clone(),
            tz,
        }
    }

    pub async fn jobs(&self) -> AppResult<JobsReport> {
        let (tallies, recent) = tokio::try_join!(
            self.jobs.status_tallies(),
            self.jobs.recent_details(PAGE_ROWS),
        )?;

        Ok(JobsReport {
            status_tallies: complete_tallies(&JobStatus::ALL, tallies),
            recent,
        })
    }

    pub async fn job(&self, job_id: i32) -> AppResult<JobDetails> {
        self.jobs
            .find_details(job_id)
            .await?
            .ok_or_else(|| AppError::not_found("job", job_id))
    }

    /// `new_since` in the counts covers the current calendar month.
    pub async fn customers(&self) -> AppResult<CustomersReport> {
        let periods = current_periods(&self.tz)?;
        let (counts, recent) = tokio::try_join!(
            self.customers.counts(periods.month_start),
            self.customers.list_recent(PAGE_ROWS),
        )?;

        Ok(CustomersReport { counts, recent })
    }

    pub async fn technicians(&self) -> AppResult<TechniciansReport> {
        let (roster, tallies, available) = tokio::try_join!(
            self.technicians.list_roster(),
            self.jobs.technician_status_tallies(),
            self.technicians.count_available(),
        )?;

        let mut completed: HashMap<i32, i64> = HashMap::new();
        let mut active: HashMap<i32, i64> = HashMap::new();
        for (tech, status, n) in tallies {
            if status == JobStatus::Completed {
                *completed.entry(tech).or_default() += n;
            } else if JobStatus::OPEN.contains(&status) {
                *active.entry(tech).or_default() += n;
            }
        }

        let total = roster.len() as i64;
        let roster = roster
            .into_iter()
            .map(|technician| TechnicianLoad {
                completed: completed.get(&technician.id).copied().unwrap_or(0),
                active: active.get(&technician.id).copied().unwrap_or(0),
                technician,
            })
            .collect();

        Ok(TechniciansReport {
            roster,
            total,
            available,
        })
    }

    pub async fn installs(&self) -> AppResult<InstallsReport> {
        let periods = current_periods(&self.tz)?;
        let (totals, recent) = tokio::try_join!(
            self.jobs.install_totals(periods.today, periods.month_start),
            self.jobs.recent_of_type(JobType::Installation, PAGE_ROWS),
        )?;

        Ok(InstallsReport { totals, recent })
    }

    pub async fn memberships(&self) -> AppResult<MembershipsReport> {
        let (active, total, not_expired, tiers, monthly_recurring, recent) = tokio::try_join!(
            self.memberships.count_with_status(MembershipStatus::Active),
            self.memberships.count_all(),
            self.memberships.count_not_expired(),
            self.memberships.active_tier_tallies(),
            self.memberships.monthly_recurring(),
            self.memberships.recent_with_customer(PAGE_ROWS),
        )?;

        Ok(MembershipsReport {
            active,
            by_tier: complete_tallies(&MembershipTier::ALL, tiers),
            renewal_rate: renewal_rate(not_expired, total),
            monthly_recurring,
            recent,
        })
    }

    pub async fn analytics(&self) -> AppResult<AnalyticsReport> {
        let periods = current_periods(&self.tz)?;
        let (payments, job_types, sources, won, total_leads, avg_ticket, top_technicians) = tokio::try_join!(
            self.invoices.paid_since(periods.trailing_start),
            self.jobs.type_tallies(),
            self.leads.source_tallies(),
            self.leads.count_with_status(LeadStatus::Won),
            self.leads.count_all(),
            self.invoices.average_paid(),
            self.jobs.top_technicians(TOP_TECHNICIANS),
        )?;

        Ok(AnalyticsReport {
            revenue_by_month: revenue_by_month(
                &payments,
                &periods.trailing_months,
                periods.time_zone(),
            ),
            jobs_by_type: complete_tallies(&JobType::ALL, job_types),
            leads_by_source: complete_tallies(&LeadSource::ALL, sources),
            conversion_rate: conversion_rate(won, total_leads),
            avg_ticket: avg_ticket.unwrap_or_default(),
            top_technicians,
        })
    }
}
