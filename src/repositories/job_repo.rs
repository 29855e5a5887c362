use bigdecimal::BigDecimal;
use diesel::dsl::{count, count_star, sum};
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{Customer, Job, JobStatus, JobType, NewJob, Property, Technician};
use crate::repositories::sum_or_zero;
use crate::schema::{customers, jobs, properties, technicians};

/// A job together with the records its detail panel and cards show.
#[derive(Debug, Clone)]
pub struct JobDetails {
    pub job: Job,
    pub customer: Customer,
    pub property: Property,
    pub technician: Option<Technician>,
}

impl From<(Job, Customer, Property, Option<Technician>)> for JobDetails {
    fn from((job, customer, property, technician): (Job, Customer, Property, Option<Technician>)) -> Self {
        Self {
            job,
            customer,
            property,
            technician,
        }
    }
}

/// Completed-job leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnicianCompleted {
    pub technician_id: i32,
    pub name: String,
    pub completed: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstallTotals {
    pub total: i64,
    pub upcoming: i64,
    pub completed_since: i64,
    /// Sum of estimated cost over completed installations
    pub completed_value: BigDecimal,
}

#[diesel::dsl::auto_type(no_type_alias)]
fn with_parties() -> _ {
    jobs::table
        .inner_join(customers::table)
        .inner_join(properties::table)
        .left_join(technicians::table)
}

type DetailsRow = (Job, Customer, Property, Option<Technician>);

#[derive(Clone)]
pub struct JobRepository {
    pool: AsyncDbPool,
}

impl JobRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn insert(conn: &mut AsyncPgConnection, job: NewJob) -> AppResult<Job> {
        diesel::insert_into(jobs::table)
            .values(&job)
            .returning(Job::as_returning())
            .get_result(conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_details(&self, job_id: i32) -> AppResult<Option<JobDetails>> {
        let mut conn = self.pool.get().await?;

        let row = with_parties()
            .filter(jobs::id.eq(job_id))
            .select((
                Job::as_select(),
                Customer::as_select(),
                Property::as_select(),
                Option::<Technician>::as_select(),
            ))
            .first::<DetailsRow>(&mut conn)
            .await
            .optional()?;

        Ok(row.map(JobDetails::from))
    }

    /// Everything the dispatch board needs for `date`: the jobs scheduled that
    /// day plus still-open jobs that have neither a date nor a technician.
    pub async fn board_candidates(&self, date: jiff::civil::Date) -> AppResult<Vec<JobDetails>> {
        let mut conn = self.pool.get().await?;
        let day: jiff_diesel::Date = date.into();

        let rows = with_parties()
            .filter(
                jobs::scheduled_date.eq(day).or(jobs::scheduled_date
                    .is_null()
                    .and(jobs::technician_id.is_null())
                    .and(jobs::status.eq_any(JobStatus::OPEN))),
            )
            .order((jobs::scheduled_start.asc(), jobs::id.asc()))
            .select((
                Job::as_select(),
                Customer::as_select(),
                Property::as_select(),
                Option::<Technician>::as_select(),
            ))
            .load::<DetailsRow>(&mut conn)
            .await?;

        Ok(rows.into_iter().map(JobDetails::from).collect())
    }

    /// Jobs dated `date`, assigned or not, earliest start first.
    pub async fn scheduled_on(&self, date: jiff::civil::Date) -> AppResult<Vec<JobDetails>> {
        let mut conn = self.pool.get().await?;
        let day: jiff_diesel::Date = date.into();

        let rows = with_parties()
            .filter(jobs::scheduled_date.eq(day))
            .order((jobs::scheduled_start.asc(), jobs::id.asc()))
            .select((
                Job::as_select(),
                Customer::as_select(),
                Property::as_select(),
                Option::<Technician>::as_select(),
            ))
            .load::<DetailsRow>(&mut conn)
            .await?;

        Ok(rows.into_iter().map(JobDetails::from).collect())
    }

    pub async fn recent_details(&self, limit: i64) -> AppResult<Vec<JobDetails>> {
        let mut conn = self.pool.get().await?;

        let rows = with_parties()
            .order((jobs::created_at.desc(), jobs::id.desc()))
            .limit(limit)
            .select((
                Job::as_select(),
                Customer::as_select(),
                Property::as_select(),
                Option::<Technician>::as_select(),
            ))
            .load::<DetailsRow>(&mut conn)
            .await?;

        Ok(rows.into_iter().map(JobDetails::from).collect())
    }

    pub async fn recent_of_type(&self, kind: JobType, limit: i64) -> AppResult<Vec<JobDetails>> {
        let mut conn = self.pool.get().await?;

        let rows = with_parties()
            .filter(jobs::job_type.eq(kind))
            .order((jobs::created_at.desc(), jobs::id.desc()))
            .limit(limit)
            .select((
                Job::as_select(),
                Customer::as_select(),
                Property::as_select(),
                Option::<Technician>::as_select(),
            ))
            .load::<DetailsRow>(&mut conn)
            .await?;

        Ok(rows.into_iter().map(JobDetails::from).collect())
    }

    /// Open jobs for a customer dated `from` onwards, undated ones last.
    pub async fn upcoming_for_customer(
        &self,
        customer_id: i32,
        from: jiff::civil::Date,
    ) -> AppResult<Vec<JobDetails>> {
        let mut conn = self.pool.get().await?;
        let from: jiff_diesel::Date = from.into();

        let rows = with_parties()
            .filter(jobs::customer_id.eq(customer_id))
            .filter(jobs::status.eq_any(JobStatus::OPEN))
            .filter(jobs::scheduled_date.ge(from).or(jobs::scheduled_date.is_null()))
            .order((jobs::scheduled_date.asc(), jobs::scheduled_start.asc(), jobs::id.asc()))
            .select((
                Job::as_select(),
                Customer::as_select(),
                Property::as_select(),
                Option::<Technician>::as_select(),
            ))
            .load::<DetailsRow>(&mut conn)
            .await?;

        Ok(rows.into_iter().map(JobDetails::from).collect())
    }

    /// A technician's route for one day, earliest start first.
    pub async fn for_technician_on(
        &self,
        technician_id: i32,
        date: jiff::civil::Date,
    ) -> AppResult<Vec<JobDetails>> {
        let mut conn = self.pool.get().await?;
        let day: jiff_diesel::Date = date.into();

        let rows = with_parties()
            .filter(jobs::technician_id.eq(technician_id))
            .filter(jobs::scheduled_date.eq(day))
            .order((jobs::scheduled_start.asc(), jobs::id.asc()))
            .select((
                Job::as_select(),
                Customer::as_select(),
                Property::as_select(),
                Option::<Technician>::as_select(),
            ))
            .load::<DetailsRow>(&mut conn)
            .await?;

        Ok(rows.into_iter().map(JobDetails::from).collect())
    }

    pub async fn count_with_status(&self, status: JobStatus) -> AppResult<i64> {
        let mut conn = self.pool.get().await?;

        jobs::table
            .filter(jobs::status.eq(status))
            .select(count_star())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn count_scheduled_on(&self, date: jiff::civil::Date) -> AppResult<i64> {
        let mut conn = self.pool.get().await?;
        let day: jiff_diesel::Date = date.into();

        jobs::table
            .filter(jobs::scheduled_date.eq(day))
            .select(count_star())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Row count per status; statuses with no jobs are absent.
    pub async fn status_tallies(&self) -> AppResult<Vec<(JobStatus, i64)>> {
        let mut conn = self.pool.get().await?;

        jobs::table
            .group_by(jobs::status)
            .select((jobs::status, count(jobs::id)))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn type_tallies(&self) -> AppResult<Vec<(JobType, i64)>> {
        let mut conn = self.pool.get().await?;

        jobs::table
            .group_by(jobs::job_type)
            .select((jobs::job_type, count(jobs::id)))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// `(technician, status, count)` over assigned jobs.
    pub async fn technician_status_tallies(&self) -> AppResult<Vec<(i32, JobStatus, i64)>> {
        let mut conn = self.pool.get().await?;

        let rows: Vec<(Option<i32>, JobStatus, i64)> = jobs::table
            .filter(jobs::technician_id.is_not_null())
            .group_by((jobs::technician_id, jobs::status))
            .select((jobs::technician_id, jobs::status, count(jobs::id)))
            .load(&mut conn)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(tech, status, n)| tech.map(|tech| (tech, status, n)))
            .collect())
    }

    pub async fn top_technicians(&self, limit: i64) -> AppResult<Vec<TechnicianCompleted>> {
        let mut conn = self.pool.get().await?;

        let rows: Vec<(i32, String, i64)> = jobs::table
            .inner_join(technicians::table)
            .filter(jobs::status.eq(JobStatus::Completed))
            .group_by((technicians::id, technicians::name))
            .select((technicians::id, technicians::name, count(jobs::id)))
            .order((count(jobs::id).desc(), technicians::name.asc()))
            .limit(limit)
            .load(&mut conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(technician_id, name, completed)| TechnicianCompleted {
                technician_id,
                name,
                completed,
            })
            .collect())
    }

    /// Installation headline numbers. `upcoming` counts open installs dated
    /// `today` or later; `completed_since` counts completions at or after `since`.
    pub async fn install_totals(
        &self,
        today: jiff::civil::Date,
        since: jiff::Timestamp,
    ) -> AppResult<InstallTotals> {
        let mut conn = self.pool.get().await?;
        let today: jiff_diesel::Date = today.into();
        let since: jiff_diesel::Timestamp = since.into();

        let total = jobs::table
            .filter(jobs::job_type.eq(JobType::Installation))
            .select(count_star())
            .get_result::<i64>(&mut conn)
            .await?;
        let upcoming = jobs::table
            .filter(jobs::job_type.eq(JobType::Installation))
            .filter(jobs::status.eq_any(JobStatus::OPEN))
            .filter(jobs::scheduled_date.ge(today))
            .select(count_star())
            .get_result::<i64>(&mut conn)
            .await?;
        let completed_since = jobs::table
            .filter(jobs::job_type.eq(JobType::Installation))
            .filter(jobs::status.eq(JobStatus::Completed))
            .filter(jobs::completed_at.ge(since))
            .select(count_star())
            .get_result::<i64>(&mut conn)
            .await?;
        let completed_value = jobs::table
            .filter(jobs::job_type.eq(JobType::Installation))
            .filter(jobs::status.eq(JobStatus::Completed))
            .select(sum(jobs::estimated_cost))
            .get_result::<Option<BigDecimal>>(&mut conn)
            .await?;

        Ok(InstallTotals {
            total,
            upcoming,
            completed_since,
            completed_value: sum_or_zero(completed_value),
        })
    }
}
