use bigdecimal::BigDecimal;
use diesel::prelude::*;
use jiff_diesel::Date;

use super::{MembershipStatus, MembershipTier};

/// Recurring maintenance plan subscription.
#[derive(Debug, Queryable, Selectable, Identifiable, Clone)]
#[diesel(table_name = crate::schema::memberships)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Membership {
    pub id: i32,
    pub customer_id: i32,
    pub tier: MembershipTier,
    pub status: MembershipStatus,
    pub monthly_price: BigDecimal,
    pub start_date: Date,
    pub end_date: Date,
    pub auto_renew: bool,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::memberships)]
pub struct NewMembership {
    pub customer_id: i32,
    pub tier: MembershipTier,
    pub status: MembershipStatus,
    pub monthly_price: BigDecimal,
    pub start_date: Date,
    pub end_date: Date,
    pub auto_renew: bool,
}
