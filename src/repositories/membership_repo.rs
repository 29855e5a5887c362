use bigdecimal::BigDecimal;
use diesel::dsl::{count, count_star, sum};
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{Customer, Membership, MembershipStatus, MembershipTier, NewMembership};
use crate::repositories::sum_or_zero;
use crate::schema::{customers, memberships};

#[derive(Clone)]
pub struct MembershipRepository {
    pool: AsyncDbPool,
}

impl MembershipRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn insert(
        conn: &mut AsyncPgConnection,
        membership: NewMembership,
    ) -> AppResult<Membership> {
        diesel::insert_into(memberships::table)
            .values(&membership)
            .returning(Membership::as_returning())
            .get_result(conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn count_all(&self) -> AppResult<i64> {
        let mut conn = self.pool.get().await?;

        memberships::table
            .select(count_star())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn count_with_status(&self, status: MembershipStatus) -> AppResult<i64> {
        let mut conn = self.pool.get().await?;

        memberships::table
            .filter(memberships::status.eq(status))
            .select(count_star())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Memberships not marked expired; the numerator of the renewal rate.
    pub async fn count_not_expired(&self) -> AppResult<i64> {
        let mut conn = self.pool.get().await?;

        memberships::table
            .filter(memberships::status.ne(MembershipStatus::Expired))
            .select(count_star())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn active_tier_tallies(&self) -> AppResult<Vec<(MembershipTier, i64)>> {
        let mut conn = self.pool.get().await?;

        memberships::table
            .filter(memberships::status.eq(MembershipStatus::Active))
            .group_by(memberships::tier)
            .select((memberships::tier, count(memberships::id)))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Monthly recurring revenue of active plans.
    pub async fn monthly_recurring(&self) -> AppResult<BigDecimal> {
        let mut conn = self.pool.get().await?;

        let total: Option<BigDecimal> = memberships::table
            .filter(memberships::status.eq(MembershipStatus::Active))
            .select(sum(memberships::monthly_price))
            .get_result(&mut conn)
            .await?;

        Ok(sum_or_zero(total))
    }

    pub async fn recent_with_customer(&self, limit: i64) -> AppResult<Vec<(Membership, Customer)>> {
        let mut conn = self.pool.get().await?;

        memberships::table
            .inner_join(customers::table)
            .order((memberships::start_date.desc(), memberships::id.desc()))
            .limit(limit)
            .select((Membership::as_select(), Customer::as_select()))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn active_for_customer(&self, customer_id: i32) -> AppResult<Option<Membership>> {
        let mut conn = self.pool.get().await?;

        memberships::table
            .filter(memberships::customer_id.eq(customer_id))
            .filter(memberships::status.eq(MembershipStatus::Active))
            .order(memberships::end_date.desc())
            .select(Membership::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }
}
