use diesel::dsl::count_star;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewTechnician, Technician};
use crate::schema::technicians;

#[derive(Clone)]
pub struct TechnicianRepository {
    pool: AsyncDbPool,
}

impl TechnicianRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Inserts on the caller's connection so the write can join a
    /// transaction.
    pub async fn insert(
        conn: &mut AsyncPgConnection,
        technician: NewTechnician,
    ) -> Result<Technician, AppError> {
        diesel::insert_into(technicians::table)
            .values(&technician)
            .returning(Technician::as_returning())
            .get_result(conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, technician_id: i32) -> Result<Option<Technician>, AppError> {
        let mut conn = self.pool.get().await?;

        technicians::table
            .find(technician_id)
            .select(Technician::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Whole roster, alphabetical; the dispatch board shows one column each.
    pub async fn list_roster(&self) -> Result<Vec<Technician>, AppError> {
        let mut conn = self.pool.get().await?;

        technicians::table
            .order((technicians::name.asc(), technicians::id.asc()))
            .select(Technician::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn count_available(&self) -> Result<i64, AppError> {
        let mut conn = self.pool.get().await?;

        technicians::table
            .filter(technicians::is_available.eq(true))
            .select(count_star())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
