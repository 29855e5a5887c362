use bigdecimal::BigDecimal;
use diesel::dsl::{avg, sum};
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{Invoice, InvoiceStatus, NewInvoice};
use crate::repositories::sum_or_zero;
use crate::schema::invoices;

#[derive(Clone)]
pub struct InvoiceRepository {
    pool: AsyncDbPool,
}

impl InvoiceRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn insert(conn: &mut AsyncPgConnection, invoice: NewInvoice) -> AppResult<Invoice> {
        diesel::insert_into(invoices::table)
            .values(&invoice)
            .returning(Invoice::as_returning())
            .get_result(conn)
            .await
            .map_err(AppError::from)
    }

    /// Paid total over `[from, to)`; zero when nothing was paid.
    pub async fn paid_between(
        &self,
        from: jiff::Timestamp,
        to: jiff::Timestamp,
    ) -> AppResult<BigDecimal> {
        let mut conn = self.pool.get().await?;
        let from: jiff_diesel::Timestamp = from.into();
        let to: jiff_diesel::Timestamp = to.into();

        let total: Option<BigDecimal> = invoices::table
            .filter(invoices::status.eq(InvoiceStatus::Paid))
            .filter(invoices::paid_at.ge(from))
            .filter(invoices::paid_at.lt(to))
            .select(sum(invoices::total))
            .get_result(&mut conn)
            .await?;

        Ok(sum_or_zero(total))
    }

    /// Mean paid invoice, `None` when no invoice has been paid.
    pub async fn average_paid(&self) -> AppResult<Option<BigDecimal>> {
        let mut conn = self.pool.get().await?;

        invoices::table
            .filter(invoices::status.eq(InvoiceStatus::Paid))
            .select(avg(invoices::total))
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// `(paid_at, total)` for every invoice paid at or after `since`, oldest
    /// first. Bucketing by month happens in the business time zone, not here.
    pub async fn paid_since(
        &self,
        since: jiff::Timestamp,
    ) -> AppResult<Vec<(jiff::Timestamp, BigDecimal)>> {
        let mut conn = self.pool.get().await?;
        let since: jiff_diesel::Timestamp = since.into();

        let rows: Vec<(Option<jiff_diesel::Timestamp>, BigDecimal)> = invoices::table
            .filter(invoices::status.eq(InvoiceStatus::Paid))
            .filter(invoices::paid_at.ge(since))
            .order(invoices::paid_at.asc())
            .select((invoices::paid_at, invoices::total))
            .load(&mut conn)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(paid_at, total)| paid_at.map(|at| (at.to_jiff(), total)))
            .collect())
    }

    pub async fn recent_for_customer(&self, customer_id: i32, limit: i64) -> AppResult<Vec<Invoice>> {
        let mut conn = self.pool.get().await?;

        invoices::table
            .filter(invoices::customer_id.eq(customer_id))
            .order((invoices::created_at.desc(), invoices::id.desc()))
            .limit(limit)
            .select(Invoice::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Sent plus overdue totals still owed by a customer.
    pub async fn outstanding_for_customer(&self, customer_id: i32) -> AppResult<BigDecimal> {
        let mut conn = self.pool.get().await?;

        let owed: Option<BigDecimal> = invoices::table
            .filter(invoices::customer_id.eq(customer_id))
            .filter(invoices::status.eq_any([InvoiceStatus::Sent, InvoiceStatus::Overdue]))
            .select(sum(invoices::total))
            .get_result(&mut conn)
            .await?;

        Ok(sum_or_zero(owed))
    }
}
