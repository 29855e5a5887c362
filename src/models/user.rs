use diesel::prelude::*;
use jiff_diesel::Timestamp;
use serde::Deserialize;

use super::UserRole;

/// Account row as read from the `users` table.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: UserRole,
    pub technician_id: Option<i32>,
    pub customer_id: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert form; `password` must already be hashed.
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: UserRole,
    pub technician_id: Option<i32>,
    pub customer_id: Option<i32>,
}
