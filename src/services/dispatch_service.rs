use jiff::civil::Date;
use jiff::tz::TimeZone;

use crate::error::AppResult;
use crate::repositories::{JobRepository, TechnicianRepository};
use crate::services::current_periods;
use crate::views::{DispatchBoard, GridSpec, JobFilter, SelectionInput, build_board};

#[derive(Clone)]
pub struct DispatchService {
    jobs: JobRepository,
    technicians: TechnicianRepository,
    grid: GridSpec,
    tz: TimeZone,
}

impl DispatchService {
    pub fn new(
        jobs: JobRepository,
        technicians: TechnicianRepository,
        grid: GridSpec,
        tz: TimeZone,
    ) -> Self {
        Self {
            jobs,
            technicians,
            grid,
            tz,
        }
    }

    /// Board for `date`, today in the business time zone when omitted.
    /// `selection` is applied before the board is built, so a click on the
    /// open job closes its panel.
    pub async fn board(
        &self,
        date: Option<Date>,
        filter: JobFilter,
        selection: SelectionInput<i32>,
    ) -> AppResult<DispatchBoard> {
        let date = match date {
            Some(date) => date,
            None => current_periods(&self.tz)?.today,
        };

        let (roster, jobs) = tokio::try_join!(
            self.technicians.list_roster(),
            self.jobs.board_candidates(date),
        )?;
        tracing::debug!(
            date = %date,
            technicians = roster.len(),
            jobs = jobs.len(),
            filter = ?filter,
            "Building dispatch board"
        );

        Ok(build_board(
            date,
            &roster,
            jobs,
            filter,
            selection.resolve(),
            &self.grid,
        ))
    }
}
