use jiff::tz::TimeZone;

use crate::error::AppResult;
use crate::repositories::LeadRepository;
use crate::services::current_periods;
use crate::views::{LeadPipeline, SelectionInput, build_pipeline};

#[derive(Clone)]
pub struct PipelineService {
    leads: LeadRepository,
    tz: TimeZone,
}

impl PipelineService {
    pub fn new(leads: LeadRepository, tz: TimeZone) -> Self {
        Self { leads, tz }
    }

    /// Kanban view of every lead; the week for "new this week" starts Monday
    /// in the business time zone.
    pub async fn pipeline(&self, selection: SelectionInput<i32>) -> AppResult<LeadPipeline> {
        let periods = current_periods(&self.tz)?;
        let leads = self.leads.list_all().await?;

        Ok(build_pipeline(
            leads,
            selection.resolve(),
            periods.now,
            periods.week_start,
        ))
    }
}
