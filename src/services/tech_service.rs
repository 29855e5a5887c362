//! The technician's mobile day view.

use jiff::civil::Date;
use jiff::tz::TimeZone;

use crate::error::{AppError, AppResult};
use crate::models::{JobStatus, Technician};
use crate::repositories::{JobDetails, JobRepository, TechnicianRepository};
use crate::services::current_periods;

#[derive(Debug, Clone)]
pub struct TechDay {
    pub technician: Technician,
    pub date: Date,
    /// Earliest start first
    pub jobs: Vec<JobDetails>,
    /// First job of the day that has not been started yet
    pub next_job_id: Option<i32>,
}

/// Statuses of a job the technician still has to drive to.
const NOT_STARTED: [JobStatus; 3] = [JobStatus::Pending, JobStatus::Scheduled, JobStatus::EnRoute];

pub fn next_pending(jobs: &[JobDetails]) -> Option<i32> {
    jobs.iter()
        .find(|d| NOT_STARTED.contains(&d.job.status))
        .map(|d| d.job.id)
}

#[derive(Clone)]
pub struct TechService {
    technicians: TechnicianRepository,
    jobs: JobRepository,
    tz: TimeZone,
}

impl TechService {
    pub fn new(technicians: TechnicianRepository, jobs: JobRepository, tz: TimeZone) -> Self {
        Self {
            technicians,
            jobs,
            tz,
        }
    }

    pub async fn today(&self, technician_id: i32) -> AppResult<TechDay> {
        let date = current_periods(&self.tz)?.today;
        let (technician, jobs) = tokio::try_join!(
            self.technicians.find_by_id(technician_id),
            self.jobs.for_technician_on(technician_id, date),
        )?;
        let technician =
            technician.ok_or_else(|| AppError::not_found("technician", technician_id))?;

        Ok(TechDay {
            next_job_id: next_pending(&jobs),
            technician,
            date,
            jobs,
        })
    }
}
