//! Customers and their service properties.

use diesel::dsl::{count_distinct, count_star};
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{
    Customer, CustomerType, MembershipStatus, NewCustomer, NewProperty, Property,
};
use crate::schema::{customers, memberships, properties};

/// Headline numbers for the customers page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CustomerCounts {
    pub total: i64,
    pub residential: i64,
    pub commercial: i64,
    /// Customers holding at least one active membership
    pub members: i64,
    pub new_since: i64,
}

#[derive(Clone)]
pub struct CustomerRepository {
    pool: AsyncDbPool,
}

impl CustomerRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn insert(
        conn: &mut AsyncPgConnection,
        customer: NewCustomer,
    ) -> Result<Customer, AppError> {
        diesel::insert_into(customers::table)
            .values(&customer)
            .returning(Customer::as_returning())
            .get_result(conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn insert_property(
        conn: &mut AsyncPgConnection,
        property: NewProperty,
    ) -> Result<Property, AppError> {
        diesel::insert_into(properties::table)
            .values(&property)
            .returning(Property::as_returning())
            .get_result(conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, customer_id: i32) -> Result<Option<Customer>, AppError> {
        let mut conn = self.pool.get().await?;

        customers::table
            .find(customer_id)
            .select(Customer::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn list_recent(&self, limit: i64) -> Result<Vec<Customer>, AppError> {
        let mut conn = self.pool.get().await?;

        customers::table
            .order((customers::created_at.desc(), customers::id.desc()))
            .limit(limit)
            .select(Customer::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn properties_of(&self, customer_id: i32) -> Result<Vec<Property>, AppError> {
        let mut conn = self.pool.get().await?;

        properties::table
            .filter(properties::customer_id.eq(customer_id))
            .order(properties::id.asc())
            .select(Property::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// `new_since` counts customers created at or after `since`.
    pub async fn counts(&self, since: jiff::Timestamp) -> Result<CustomerCounts, AppError> {
        let mut conn = self.pool.get().await?;
        let since: jiff_diesel::Timestamp = since.into();

        let total = customers::table
            .select(count_star())
            .get_result::<i64>(&mut conn)
            .await?;
        let commercial = customers::table
            .filter(customers::customer_type.eq(CustomerType::Commercial))
            .select(count_star())
            .get_result::<i64>(&mut conn)
            .await?;
        let members = memberships::table
            .filter(memberships::status.eq(MembershipStatus::Active))
            .select(count_distinct(memberships::customer_id))
            .get_result::<i64>(&mut conn)
            .await?;
        let new_since = customers::table
            .filter(customers::created_at.ge(since))
            .select(count_star())
            .get_result::<i64>(&mut conn)
            .await?;

        Ok(CustomerCounts {
            total,
            residential: total - commercial,
            commercial,
            members,
            new_since,
        })
    }
}
