use diesel::prelude::*;
use jiff_diesel::Timestamp;

#[derive(Debug, Queryable, Selectable, Identifiable, Clone)]
#[diesel(table_name = crate::schema::technicians)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Technician {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub truck_id: Option<String>,
    pub is_available: bool,
    pub skills: Vec<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::technicians)]
pub struct NewTechnician {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub truck_id: Option<String>,
    pub is_available: bool,
    pub skills: Vec<String>,
}
