use bigdecimal::BigDecimal;
use diesel::prelude::*;
use jiff_diesel::{Date, Time, Timestamp};

use super::{JobPriority, JobStatus, JobType};

/// Unit of field work. `technician_id = None` puts the job in the unassigned queue.
#[derive(Debug, Queryable, Selectable, Identifiable, Clone)]
#[diesel(table_name = crate::schema::jobs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Job {
    pub id: i32,
    pub job_number: String,
    pub title: String,
    pub description: Option<String>,
    pub job_type: JobType,
    pub priority: JobPriority,
    pub status: JobStatus,
    pub scheduled_date: Option<Date>,
    pub scheduled_start: Option<Time>,
    pub scheduled_end: Option<Time>,
    pub estimated_cost: Option<BigDecimal>,
    pub customer_id: i32,
    pub technician_id: Option<i32>,
    pub property_id: i32,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::jobs)]
pub struct NewJob {
    pub job_number: String,
    pub title: String,
    pub description: Option<String>,
    pub job_type: JobType,
    pub priority: JobPriority,
    pub status: JobStatus,
    pub scheduled_date: Option<Date>,
    pub scheduled_start: Option<Time>,
    pub scheduled_end: Option<Time>,
    pub estimated_cost: Option<BigDecimal>,
    pub customer_id: i32,
    pub technician_id: Option<i32>,
    pub property_id: i32,
}
