use diesel::prelude::*;
use jiff_diesel::Timestamp;

use super::CustomerType;

#[derive(Debug, Queryable, Selectable, Identifiable, Clone)]
#[diesel(table_name = crate::schema::customers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub phone: String,
    pub customer_type: CustomerType,
    pub created_at: Timestamp,
}

impl Customer {
    /// Company name for commercial accounts, person name otherwise.
    pub fn display_name(&self) -> String {
        match (&self.customer_type, &self.company_name) {
            (CustomerType::Commercial, Some(company)) => company.clone(),
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::customers)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub phone: String,
    pub customer_type: CustomerType,
}

/// Service address belonging to a customer.
#[derive(Debug, Queryable, Selectable, Identifiable, Associations, Clone)]
#[diesel(belongs_to(Customer))]
#[diesel(table_name = crate::schema::properties)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Property {
    pub id: i32,
    pub customer_id: i32,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl Property {
    pub fn one_line(&self) -> String {
        format!("{}, {}, {} {}", self.street, self.city, self.state, self.zip)
    }
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::properties)]
pub struct NewProperty {
    pub customer_id: i32,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}
