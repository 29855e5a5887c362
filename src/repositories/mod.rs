//! Repository layer for data access operations.
//!
//! One repository per table. Aggregate queries (counts, sums, group-by
//! tallies) live next to the row queries of the table they read.

mod customer_repo;
mod invoice_repo;
mod job_repo;
mod lead_repo;
mod membership_repo;
mod technician_repo;
mod user_repo;

pub use customer_repo::{CustomerCounts, CustomerRepository};
pub use invoice_repo::InvoiceRepository;
pub use job_repo::{InstallTotals, JobDetails, JobRepository, TechnicianCompleted};
pub use lead_repo::LeadRepository;
pub use membership_repo::MembershipRepository;
pub use technician_repo::TechnicianRepository;
pub use user_repo::UserRepository;

use bigdecimal::BigDecimal;

use crate::db::AsyncDbPool;

/// `SUM` over no rows is SQL NULL; money totals report it as zero.
pub(crate) fn sum_or_zero(total: Option<BigDecimal>) -> BigDecimal {
    total.unwrap_or_default()
}

/// Aggregates all repositories for convenient access.
///
/// Since `AsyncDbPool` uses `Arc` internally, cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub users: UserRepository,
    pub customers: CustomerRepository,
    pub technicians: TechnicianRepository,
    pub jobs: JobRepository,
    pub leads: LeadRepository,
    pub invoices: InvoiceRepository,
    pub memberships: MembershipRepository,
}

impl Repositories {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            customers: CustomerRepository::new(pool.clone()),
            technicians: TechnicianRepository::new(pool.clone()),
            jobs: JobRepository::new(pool.clone()),
            leads: LeadRepository::new(pool.clone()),
            invoices: InvoiceRepository::new(pool.clone()),
            memberships: MembershipRepository::new(pool),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_sum_over_no_rows_is_zero() {
        let zero = sum_or_zero(None);
        assert_eq!(zero, BigDecimal::from(0));
        assert_eq!(crate::views::format::money(&zero), 0.0);
    }

    #[test]
    fn test_sum_keeps_value() {
        let total = BigDecimal::from_str("1249.50").unwrap();
        assert_eq!(sum_or_zero(Some(total.clone())), total);
    }
}
