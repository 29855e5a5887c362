use bigdecimal::BigDecimal;
use diesel::prelude::*;
use jiff_diesel::Timestamp;

use super::InvoiceStatus;

#[derive(Debug, Queryable, Selectable, Identifiable, Clone)]
#[diesel(table_name = crate::schema::invoices)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Invoice {
    pub id: i32,
    pub invoice_number: String,
    pub customer_id: i32,
    pub job_id: Option<i32>,
    pub total: BigDecimal,
    pub status: InvoiceStatus,
    pub paid_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::invoices)]
pub struct NewInvoice {
    pub invoice_number: String,
    pub customer_id: i32,
    pub job_id: Option<i32>,
    pub total: BigDecimal,
    pub status: InvoiceStatus,
    pub paid_at: Option<Timestamp>,
}
