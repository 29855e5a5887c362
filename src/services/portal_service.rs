//! Customer self-service portal.

use bigdecimal::BigDecimal;
use jiff::tz::TimeZone;

use crate::error::{AppError, AppResult};
use crate::models::{Customer, Invoice, Membership, Property};
use crate::repositories::{
    CustomerRepository, InvoiceRepository, JobDetails, JobRepository, MembershipRepository,
    Repositories,
};
use crate::services::current_periods;

pub const PORTAL_INVOICES: i64 = 10;

#[derive(Debug, Clone)]
pub struct PortalSummary {
    pub customer: Customer,
    pub properties: Vec<Property>,
    pub upcoming: Vec<JobDetails>,
    pub invoices: Vec<Invoice>,
    /// Sent and overdue invoice totals
    pub outstanding: BigDecimal,
    pub membership: Option<Membership>,
}

#[derive(Clone)]
pub struct PortalService {
    customers: CustomerRepository,
    jobs: JobRepository,
    invoices: InvoiceRepository,
    memberships: MembershipRepository,
    tz: TimeZone,
}

impl PortalService {
    pub fn new(repos: &Repositories, tz: TimeZone) -> Self {
        Self {
            customers: repos.customers.clone(),
            jobs: repos.jobs.clone(),
            invoices: repos.invoices.clone(),
            memberships: repos.memberships.clone(),
            tz,
        }
    }

    pub async fn summary(&self, customer_id: i32) -> AppResult<PortalSummary> {
        let today = current_periods(&self.tz)?.today;
        let (customer, properties, upcoming, invoices, outstanding, membership) = tokio::try_join!(
            self.customers.find_by_id(customer_id),
            self.customers.properties_of(customer_id),
            self.jobs.upcoming_for_customer(customer_id, today),
            self.invoices.recent_for_customer(customer_id, PORTAL_INVOICES),
            self.invoices.outstanding_for_customer(customer_id),
            self.memberships.active_for_customer(customer_id),
        )?;
        let customer = customer.ok_or_else(|| AppError::not_found("customer", customer_id))?;

        Ok(PortalSummary {
            customer,
            properties,
            upcoming,
            invoices,
            outstanding,
            membership,
        })
    }
}
