use diesel::dsl::{count, count_star};
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{Lead, LeadSource, LeadStatus, NewLead};
use crate::schema::leads;

#[derive(Clone)]
pub struct LeadRepository {
    pool: AsyncDbPool,
}

impl LeadRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, lead: NewLead) -> AppResult<Lead> {
        let mut conn = self.pool.get().await?;
        Self::insert(&mut conn, lead).await
    }

    pub async fn insert(conn: &mut AsyncPgConnection, lead: NewLead) -> AppResult<Lead> {
        diesel::insert_into(leads::table)
            .values(&lead)
            .returning(Lead::as_returning())
            .get_result(conn)
            .await
            .map_err(AppError::from)
    }

    /// Newest first; the pipeline re-buckets them by status.
    pub async fn list_all(&self) -> AppResult<Vec<Lead>> {
        let mut conn = self.pool.get().await?;

        leads::table
            .order((leads::created_at.desc(), leads::id.desc()))
            .select(Lead::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn count_all(&self) -> AppResult<i64> {
        let mut conn = self.pool.get().await?;

        leads::table
            .select(count_star())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn count_with_status(&self, status: LeadStatus) -> AppResult<i64> {
        let mut conn = self.pool.get().await?;

        leads::table
            .filter(leads::status.eq(status))
            .select(count_star())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Leads that have not reached won or lost.
    pub async fn count_open(&self) -> AppResult<i64> {
        let mut conn = self.pool.get().await?;

        leads::table
            .filter(leads::status.ne_all([LeadStatus::Won, LeadStatus::Lost]))
            .select(count_star())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn source_tallies(&self) -> AppResult<Vec<(LeadSource, i64)>> {
        let mut conn = self.pool.get().await?;

        leads::table
            .group_by(leads::source)
            .select((leads::source, count(leads::id)))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
