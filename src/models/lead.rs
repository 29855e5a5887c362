use bigdecimal::BigDecimal;
use diesel::prelude::*;
use jiff_diesel::{Date, Timestamp};

use super::{LeadSource, LeadStatus};

/// Prospective customer inquiry moving through the sales funnel.
#[derive(Debug, Queryable, Selectable, Identifiable, Clone)]
#[diesel(table_name = crate::schema::leads)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Lead {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub source: LeadSource,
    pub status: LeadStatus,
    pub service_needed: String,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub urgency: Option<i32>,
    pub estimated_value: Option<BigDecimal>,
    pub follow_up_date: Option<Date>,
    pub created_at: Timestamp,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::leads)]
pub struct NewLead {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub source: LeadSource,
    pub status: LeadStatus,
    pub service_needed: String,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub urgency: Option<i32>,
    pub estimated_value: Option<BigDecimal>,
    pub follow_up_date: Option<Date>,
}
