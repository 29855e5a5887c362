//! Customer portal and technician day DTOs.

use serde::Serialize;
use utoipa::ToSchema;

use crate::api::dto::reports::{JobRow, job_rows};
use crate::models::{CustomerType, Invoice, InvoiceStatus, Membership, MembershipStatus, MembershipTier, Property};
use crate::repositories::JobDetails;
use crate::services::{PortalSummary, TechDay};
use crate::views::Tone;
use crate::views::format::{date_label, money};
use crate::views::styles::{invoice_status_tone, tier_tone};

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub phone: String,
    pub customer_type: CustomerType,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRow {
    pub id: i32,
    pub address: String,
}

impl From<&Property> for PropertyRow {
    fn from(property: &Property) -> Self {
        Self {
            id: property.id,
            address: property.one_line(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRow {
    pub id: i32,
    pub invoice_number: String,
    pub total: f64,
    pub status: InvoiceStatus,
    pub tone: Tone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<String>,
    pub created_at: String,
}

impl From<&Invoice> for InvoiceRow {
    fn from(invoice: &Invoice) -> Self {
        Self {
            id: invoice.id,
            invoice_number: invoice.invoice_number.clone(),
            total: money(&invoice.total),
            status: invoice.status,
            tone: invoice_status_tone(invoice.status),
            paid_at: invoice.paid_at.map(|t| t.to_jiff().to_string()),
            created_at: invoice.created_at.to_jiff().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MembershipBadge {
    pub tier: MembershipTier,
    pub tone: Tone,
    pub status: MembershipStatus,
    pub monthly_price: f64,
    pub renews_on: String,
    pub auto_renew: bool,
}

impl From<&Membership> for MembershipBadge {
    fn from(membership: &Membership) -> Self {
        Self {
            tier: membership.tier,
            tone: tier_tone(membership.tier),
            status: membership.status,
            monthly_price: money(&membership.monthly_price),
            renews_on: membership.end_date.to_jiff().to_string(),
            auto_renew: membership.auto_renew,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortalResponse {
    pub customer: CustomerProfile,
    pub properties: Vec<PropertyRow>,
    pub upcoming_jobs: Vec<JobRow>,
    pub invoices: Vec<InvoiceRow>,
    /// Sent plus overdue invoice totals
    pub outstanding_balance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership: Option<MembershipBadge>,
}

impl From<PortalSummary> for PortalResponse {
    fn from(summary: PortalSummary) -> Self {
        let customer = &summary.customer;
        Self {
            customer: CustomerProfile {
                id: customer.id,
                name: customer.display_name(),
                email: customer.email.clone(),
                phone: customer.phone.clone(),
                customer_type: customer.customer_type,
            },
            properties: summary.properties.iter().map(PropertyRow::from).collect(),
            upcoming_jobs: job_rows(&summary.upcoming),
            invoices: summary.invoices.iter().map(InvoiceRow::from).collect(),
            outstanding_balance: money(&summary.outstanding),
            membership: summary.membership.as_ref().map(MembershipBadge::from),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TechStop {
    #[serde(flatten)]
    pub job: JobRow,
    pub customer_phone: String,
    /// First stop not started yet
    pub is_next: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TechDayResponse {
    pub technician_id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truck_id: Option<String>,
    pub date: String,
    pub date_label: String,
    pub stops: Vec<TechStop>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_job_id: Option<i32>,
}

fn stop(details: &JobDetails, next: Option<i32>) -> TechStop {
    TechStop {
        job: JobRow::from(details),
        customer_phone: details.customer.phone.clone(),
        is_next: next == Some(details.job.id),
    }
}

impl From<TechDay> for TechDayResponse {
    fn from(day: TechDay) -> Self {
        Self {
            technician_id: day.technician.id,
            name: day.technician.name,
            truck_id: day.technician.truck_id,
            date: day.date.to_string(),
            date_label: date_label(day.date),
            stops: day.jobs.iter().map(|d| stop(d, day.next_job_id)).collect(),
            next_job_id: day.next_job_id,
        }
    }
}
