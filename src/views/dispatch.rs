//! Dispatch board: one day's jobs laid out on a per-technician timeline grid,
//! with jobs lacking a technician collected in a side queue.
//!
//! Everything here is a pure transformation of already loaded rows. The
//! service layer decides which rows to load; this module decides where they go.

use std::collections::{BTreeMap, HashSet};

use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::DispatchConfig;
use crate::models::{Job, JobPriority, JobStatus, JobType, Technician};
use crate::repositories::JobDetails;
use crate::views::format::{date_label, hour_label, money_opt, short_date, time_window};
use crate::views::selection::Selection;
use crate::views::styles::{Tone, job_priority_tone, job_status_tone, job_type_tone};

/// Job-type filter offered above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum JobFilter {
    #[default]
    All,
    Repairs,
    Maintenance,
    Emergency,
    Installs,
}

impl JobFilter {
    pub const ALL: [JobFilter; 5] = [
        JobFilter::All,
        JobFilter::Repairs,
        JobFilter::Maintenance,
        JobFilter::Emergency,
        JobFilter::Installs,
    ];

    /// Job type this filter keeps; `None` keeps everything.
    pub fn job_type(self) -> Option<JobType> {
        match self {
            JobFilter::All => None,
            JobFilter::Repairs => Some(JobType::Repair),
            JobFilter::Maintenance => Some(JobType::Maintenance),
            JobFilter::Emergency => Some(JobType::Emergency),
            JobFilter::Installs => Some(JobType::Installation),
        }
    }

    pub fn matches(self, kind: JobType) -> bool {
        self.job_type().is_none_or(|wanted| wanted == kind)
    }
}

/// What the board needs to know about a job to place it.
pub trait BoardJob {
    fn job_type(&self) -> JobType;
    fn technician_id(&self) -> Option<i32>;
}

impl BoardJob for Job {
    fn job_type(&self) -> JobType {
        self.job_type
    }

    fn technician_id(&self) -> Option<i32> {
        self.technician_id
    }
}

impl BoardJob for JobDetails {
    fn job_type(&self) -> JobType {
        self.job.job_type
    }

    fn technician_id(&self) -> Option<i32> {
        self.job.technician_id
    }
}

pub fn filter_jobs<T: BoardJob>(jobs: impl IntoIterator<Item = T>, filter: JobFilter) -> Vec<T> {
    jobs.into_iter()
        .filter(|job| filter.matches(job.job_type()))
        .collect()
}

/// Jobs split by who, if anyone, will work them.
#[derive(Debug, Clone, PartialEq)]
pub struct TechnicianGroups<T> {
    /// One entry per rostered technician, even when the list is empty
    pub by_technician: BTreeMap<i32, Vec<T>>,
    pub unassigned: Vec<T>,
    /// Assigned to a technician who is not on the roster
    pub orphaned: Vec<T>,
}

/// Partitions `jobs` by technician. The key set of `by_technician` is exactly
/// `roster`; input order is kept inside every list.
pub fn group_by_technician<T: BoardJob>(
    jobs: impl IntoIterator<Item = T>,
    roster: &[i32],
) -> TechnicianGroups<T> {
    let mut groups = TechnicianGroups {
        by_technician: roster.iter().map(|id| (*id, Vec::new())).collect(),
        unassigned: Vec::new(),
        orphaned: Vec::new(),
    };

    for job in jobs {
        match job.technician_id() {
            None => groups.unassigned.push(job),
            Some(tech) => match groups.by_technician.get_mut(&tech) {
                Some(column) => column.push(job),
                None => groups.orphaned.push(job),
            },
        }
    }

    groups
}

/// Vertical placement of a block, both values in percent of the grid height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct BlockGeometry {
    pub top: f64,
    pub height: f64,
}

/// Hour range and block sizing rules of the timeline grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub start_hour: u8,
    pub end_hour: u8,
    pub default_duration_minutes: u32,
    pub min_block_minutes: u32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::from(&DispatchConfig::default())
    }
}

impl From<&DispatchConfig> for GridSpec {
    fn from(config: &DispatchConfig) -> Self {
        Self {
            start_hour: config.grid_start_hour,
            end_hour: config.grid_end_hour,
            default_duration_minutes: config.default_duration_minutes,
            min_block_minutes: config.min_block_minutes,
        }
    }
}

impl GridSpec {
    pub fn span_minutes(&self) -> f64 {
        f64::from(self.end_hour.saturating_sub(self.start_hour)) * 60.0
    }

    /// One label per grid row, e.g. "7 AM" through "6 PM" for a 7-19 grid.
    pub fn hour_labels(&self) -> Vec<String> {
        (self.start_hour..self.end_hour).map(hour_label).collect()
    }

    /// Places a block. Missing or non-positive durations use the default
    /// duration; a missing start pins the block to the top with the minimum
    /// height. The result always lies inside the grid and is never shorter
    /// than the minimum block.
    pub fn block(&self, start: Option<Time>, end: Option<Time>) -> BlockGeometry {
        let span = self.span_minutes();
        if span <= 0.0 {
            return BlockGeometry { top: 0.0, height: 0.0 };
        }
        let min_block = f64::from(self.min_block_minutes).min(span);

        let Some(start) = start else {
            return BlockGeometry {
                top: 0.0,
                height: min_block / span * 100.0,
            };
        };

        let start_minutes = minutes_of_day(start);
        let duration = match end.map(minutes_of_day) {
            Some(end_minutes) if end_minutes > start_minutes => end_minutes - start_minutes,
            _ => f64::from(self.default_duration_minutes),
        };

        let offset = start_minutes - f64::from(self.start_hour) * 60.0;
        let mut visible_start = offset.clamp(0.0, span);
        let visible_end = (offset + duration).clamp(0.0, span);
        let height = (visible_end - visible_start).max(min_block);
        if visible_start + height > span {
            visible_start = span - height;
        }

        BlockGeometry {
            top: visible_start / span * 100.0,
            height: height / span * 100.0,
        }
    }
}

fn minutes_of_day(time: Time) -> f64 {
    f64::from(time.hour()) * 60.0 + f64::from(time.minute()) + f64::from(time.second()) / 60.0
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobCard {
    pub id: i32,
    pub job_number: String,
    pub title: String,
    pub customer_name: String,
    pub address: String,
    pub job_type: JobType,
    pub job_type_label: &'static str,
    pub type_tone: Tone,
    pub priority: JobPriority,
    pub priority_tone: Tone,
    pub status: JobStatus,
    pub status_label: &'static str,
    pub status_tone: Tone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_window: Option<String>,
    /// Only set for blocks placed on the timeline grid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<BlockGeometry>,
    pub selected: bool,
}

impl JobCard {
    pub fn new(details: &JobDetails) -> Self {
        let job = &details.job;
        Self {
            id: job.id,
            job_number: job.job_number.clone(),
            title: job.title.clone(),
            customer_name: details.customer.display_name(),
            address: details.property.one_line(),
            job_type: job.job_type,
            job_type_label: job.job_type.label(),
            type_tone: job_type_tone(job.job_type),
            priority: job.priority,
            priority_tone: job_priority_tone(job.priority),
            status: job.status,
            status_label: job.status.label(),
            status_tone: job_status_tone(job.status),
            time_window: time_window(start_of(job), end_of(job)),
            geometry: None,
            selected: false,
        }
    }
}

fn start_of(job: &Job) -> Option<Time> {
    job.scheduled_start.map(|t| t.to_jiff())
}

fn end_of(job: &Job) -> Option<Time> {
    job.scheduled_end.map(|t| t.to_jiff())
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactCard {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Expanded view of the selected job.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobDetailPanel {
    pub id: i32,
    pub job_number: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub customer: ContactCard,
    pub address: String,
    pub job_type: JobType,
    pub job_type_label: &'static str,
    pub priority: JobPriority,
    pub priority_tone: Tone,
    pub status: JobStatus,
    pub status_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_window: Option<String>,
    /// Technician name, or "Unassigned"
    pub technician: String,
}

impl From<&JobDetails> for JobDetailPanel {
    fn from(details: &JobDetails) -> Self {
        let job = &details.job;
        let customer = &details.customer;
        Self {
            id: job.id,
            job_number: job.job_number.clone(),
            title: job.title.clone(),
            description: job.description.clone(),
            customer: ContactCard {
                name: customer.display_name(),
                phone: customer.phone.clone(),
                email: customer.email.clone(),
            },
            address: details.property.one_line(),
            job_type: job.job_type,
            job_type_label: job.job_type.label(),
            priority: job.priority,
            priority_tone: job_priority_tone(job.priority),
            status: job.status,
            status_label: job.status.label(),
            estimated_cost: money_opt(job.estimated_cost.as_ref()),
            scheduled_date: job.scheduled_date.map(|d| short_date(d.to_jiff())),
            time_window: time_window(start_of(job), end_of(job)),
            technician: details
                .technician
                .as_ref()
                .map(|t| t.name.clone())
                .unwrap_or_else(|| "Unassigned".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianColumn {
    pub technician_id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truck_id: Option<String>,
    pub is_available: bool,
    pub skills: Vec<String>,
    pub job_count: usize,
    pub jobs: Vec<JobCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DispatchBoard {
    pub date: String,
    pub date_label: String,
    pub filter: JobFilter,
    pub hours: Vec<String>,
    pub columns: Vec<TechnicianColumn>,
    pub unassigned: Vec<JobCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<JobDetailPanel>,
    /// Set when there is nothing to lay out
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

/// Assembles the board for `date`.
///
/// `jobs` holds the day's jobs plus any undated queue candidates; the filter
/// applies to grid and queue alike. A selection that is not on the resulting
/// board is cleared.
pub fn build_board(
    date: Date,
    roster: &[Technician],
    jobs: Vec<JobDetails>,
    filter: JobFilter,
    mut selection: Selection<i32>,
    grid: &GridSpec,
) -> DispatchBoard {
    let roster_ids: Vec<i32> = roster.iter().map(|t| t.id).collect();
    let visible = filter_jobs(jobs, filter);
    let TechnicianGroups {
        mut by_technician,
        unassigned,
        orphaned,
    } = group_by_technician(visible, &roster_ids);

    for details in &orphaned {
        tracing::warn!(
            job_id = details.job.id,
            technician_id = ?details.job.technician_id,
            "Job assigned to a technician missing from the roster, left off the board"
        );
    }

    let on_board: HashSet<i32> = by_technician
        .values()
        .flatten()
        .chain(unassigned.iter())
        .map(|d| d.job.id)
        .collect();
    selection.retain(|id| on_board.contains(&id));

    let selected = by_technician
        .values()
        .flatten()
        .chain(unassigned.iter())
        .find(|d| selection.is_selected(d.job.id))
        .map(JobDetailPanel::from);

    let card = |details: &JobDetails, placed: bool| {
        let mut card = JobCard::new(details);
        if placed {
            card.geometry = Some(grid.block(start_of(&details.job), end_of(&details.job)));
        }
        card.selected = selection.is_selected(details.job.id);
        card
    };

    let columns: Vec<TechnicianColumn> = roster
        .iter()
        .map(|tech| {
            let jobs: Vec<JobCard> = by_technician
                .remove(&tech.id)
                .unwrap_or_default()
                .iter()
                .map(|d| card(d, true))
                .collect();
            TechnicianColumn {
                technician_id: tech.id,
                name: tech.name.clone(),
                truck_id: tech.truck_id.clone(),
                is_available: tech.is_available,
                skills: tech.skills.clone(),
                job_count: jobs.len(),
                jobs,
            }
        })
        .collect();
    let unassigned: Vec<JobCard> = unassigned.iter().map(|d| card(d, false)).collect();

    let empty_message = if roster.is_empty() && unassigned.is_empty() {
        Some("No technicians on the roster and no jobs to dispatch".to_string())
    } else if roster.is_empty() {
        Some("No technicians on the roster".to_string())
    } else if on_board.is_empty() {
        Some("No jobs scheduled for this day".to_string())
    } else {
        None
    };

    DispatchBoard {
        date: date.to_string(),
        date_label: date_label(date),
        filter,
        hours: grid.hour_labels(),
        columns,
        unassigned,
        selected,
        empty_message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, CustomerType, Property};
    use crate::views::SelectionInput;
    use jiff::civil::{date, time};
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    #[derive(Debug, Clone, PartialEq)]
    struct Stub {
        id: usize,
        kind: JobType,
        tech: Option<i32>,
    }

    impl BoardJob for Stub {
        fn job_type(&self) -> JobType {
            self.kind
        }

        fn technician_id(&self) -> Option<i32> {
            self.tech
        }
    }

    fn kind_strategy() -> impl Strategy<Value = JobType> {
        proptest::sample::select(JobType::ALL.to_vec())
    }

    fn filter_strategy() -> impl Strategy<Value = JobFilter> {
        proptest::sample::select(JobFilter::ALL.to_vec())
    }

    fn stubs(techs: std::ops::Range<i32>) -> impl Strategy<Value = Vec<Stub>> {
        prop::collection::vec((kind_strategy(), proptest::option::of(techs)), 0..40).prop_map(
            |rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(id, (kind, tech))| Stub { id, kind, tech })
                    .collect()
            },
        )
    }

    proptest! {
        #[test]
        fn prop_filter_keeps_exact_subset(jobs in stubs(0..5), filter in filter_strategy()) {
            let kept = filter_jobs(jobs.clone(), filter);
            let expected: Vec<Stub> = match filter.job_type() {
                None => jobs.clone(),
                Some(kind) => jobs.iter().filter(|j| j.kind == kind).cloned().collect(),
            };
            prop_assert_eq!(&kept, &expected);
            prop_assert_eq!(filter_jobs(kept.clone(), filter), kept);
        }

        #[test]
        fn prop_grouping_is_a_partition(
            jobs in stubs(1..6),
            roster in prop::collection::btree_set(1i32..6, 0..5),
        ) {
            let roster: Vec<i32> = roster.into_iter().collect();
            let groups = group_by_technician(jobs.clone(), &roster);

            let keys: Vec<i32> = groups.by_technician.keys().copied().collect();
            prop_assert_eq!(&keys, &roster);

            let mut seen: Vec<usize> = groups
                .by_technician
                .values()
                .flatten()
                .chain(groups.unassigned.iter())
                .chain(groups.orphaned.iter())
                .map(|s| s.id)
                .collect();
            seen.sort_unstable();
            let all: Vec<usize> = jobs.iter().map(|s| s.id).collect();
            prop_assert_eq!(seen, all);

            for (tech, column) in &groups.by_technician {
                prop_assert!(column.iter().all(|s| s.tech == Some(*tech)));
            }
            prop_assert!(groups.unassigned.iter().all(|s| s.tech.is_none()));
            prop_assert!(groups.orphaned.iter().all(|s| s.tech.is_some_and(|t| !roster.contains(&t))));
        }

        #[test]
        fn prop_rostered_jobs_fill_columns_exactly(jobs in stubs(1..4)) {
            let assigned: Vec<Stub> = jobs.into_iter().filter(|s| s.tech.is_some()).collect();
            let groups = group_by_technician(assigned.clone(), &[1, 2, 3]);
            let total: usize = groups.by_technician.values().map(Vec::len).sum();
            prop_assert_eq!(total, assigned.len());
            prop_assert!(groups.unassigned.is_empty());
            prop_assert!(groups.orphaned.is_empty());
        }

        #[test]
        fn prop_blocks_stay_inside_grid(
            start in proptest::option::of((0i8..24, 0i8..60)),
            end in proptest::option::of((0i8..24, 0i8..60)),
        ) {
            let grid = GridSpec::default();
            let to_time = |(h, m): (i8, i8)| time(h, m, 0, 0);
            let geometry = grid.block(start.map(to_time), end.map(to_time));
            let min_height = 30.0 / 720.0 * 100.0;
            prop_assert!(geometry.top >= -EPS);
            prop_assert!(geometry.height >= min_height - EPS);
            prop_assert!(geometry.top + geometry.height <= 100.0 + EPS);
        }
    }

    #[test]
    fn test_block_geometry_with_end() {
        let geometry = GridSpec::default().block(Some(time(9, 0, 0, 0)), Some(time(10, 30, 0, 0)));
        assert!((geometry.top - 200.0 / 12.0).abs() < EPS);
        assert!((geometry.height - 12.5).abs() < EPS);
    }

    #[test]
    fn test_block_geometry_default_duration() {
        let geometry = GridSpec::default().block(Some(time(9, 0, 0, 0)), None);
        assert!((geometry.top - 200.0 / 12.0).abs() < EPS);
        assert!((geometry.height - 12.5).abs() < EPS);
        assert!(geometry.height > 0.0);
    }

    #[test]
    fn test_block_end_before_start_uses_default() {
        let geometry = GridSpec::default().block(Some(time(9, 0, 0, 0)), Some(time(8, 0, 0, 0)));
        assert!((geometry.height - 12.5).abs() < EPS);
    }

    #[test]
    fn test_block_without_start_pins_to_top() {
        let geometry = GridSpec::default().block(None, None);
        assert_eq!(geometry.top, 0.0);
        assert!((geometry.height - 30.0 / 720.0 * 100.0).abs() < EPS);
    }

    #[test]
    fn test_block_after_grid_is_pushed_back_in() {
        let geometry = GridSpec::default().block(Some(time(20, 0, 0, 0)), None);
        assert!((geometry.top + geometry.height - 100.0).abs() < EPS);
    }

    #[test]
    fn test_hour_labels() {
        let hours = GridSpec::default().hour_labels();
        assert_eq!(hours.len(), 12);
        assert_eq!(hours.first().map(String::as_str), Some("7 AM"));
        assert_eq!(hours.last().map(String::as_str), Some("6 PM"));
    }

    fn technician(id: i32, name: &str) -> Technician {
        Technician {
            id,
            name: name.to_string(),
            email: None,
            phone: None,
            truck_id: Some(format!("T-{id}")),
            is_available: true,
            skills: vec!["Heat Pumps".to_string()],
            created_at: jiff::Timestamp::UNIX_EPOCH.into(),
        }
    }

    fn details(id: i32, kind: JobType, tech: Option<&Technician>, start: Option<Time>) -> JobDetails {
        let customer = Customer {
            id: 100 + id,
            first_name: "Pat".to_string(),
            last_name: format!("Customer{id}"),
            company_name: None,
            email: Some(format!("pat{id}@example.com")),
            phone: "555-0101".to_string(),
            customer_type: CustomerType::Residential,
            created_at: jiff::Timestamp::UNIX_EPOCH.into(),
        };
        let property = Property {
            id: 200 + id,
            customer_id: customer.id,
            street: format!("{id} Elm St"),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip: "62701".to_string(),
        };
        let job = Job {
            id,
            job_number: format!("JOB-{id:04}"),
            title: "No cooling".to_string(),
            description: None,
            job_type: kind,
            priority: JobPriority::Normal,
            status: JobStatus::Scheduled,
            scheduled_date: Some(date(2025, 1, 15).into()),
            scheduled_start: start.map(Into::into),
            scheduled_end: None,
            estimated_cost: None,
            customer_id: customer.id,
            technician_id: tech.map(|t| t.id),
            property_id: property.id,
            completed_at: None,
            created_at: jiff::Timestamp::UNIX_EPOCH.into(),
        };
        JobDetails {
            job,
            customer,
            property,
            technician: tech.cloned(),
        }
    }

    fn five_jobs(roster: &[Technician]) -> Vec<JobDetails> {
        let nine = Some(time(9, 0, 0, 0));
        vec![
            details(1, JobType::Repair, Some(&roster[0]), nine),
            details(2, JobType::Maintenance, Some(&roster[1]), nine),
            details(3, JobType::Emergency, Some(&roster[0]), Some(time(13, 0, 0, 0))),
            details(4, JobType::Repair, None, None),
            details(5, JobType::Installation, None, nine),
        ]
    }

    #[test]
    fn test_board_splits_queue_and_grid() {
        let roster = vec![technician(1, "Alex"), technician(2, "Brooke"), technician(3, "Casey")];
        let board = build_board(
            date(2025, 1, 15),
            &roster,
            five_jobs(&roster),
            JobFilter::All,
            Selection::new(),
            &GridSpec::default(),
        );

        let queue: Vec<i32> = board.unassigned.iter().map(|c| c.id).collect();
        assert_eq!(queue, vec![4, 5]);
        assert!(board.unassigned.iter().all(|c| c.geometry.is_none()));

        assert_eq!(board.columns.len(), 3);
        let ids: Vec<Vec<i32>> = board
            .columns
            .iter()
            .map(|c| c.jobs.iter().map(|j| j.id).collect())
            .collect();
        assert_eq!(ids, vec![vec![1, 3], vec![2], vec![]]);
        assert!(board.columns.iter().flat_map(|c| &c.jobs).all(|j| j.geometry.is_some()));
        assert_eq!(board.date_label, "Wednesday, January 15, 2025");
        assert_eq!(board.empty_message, None);
    }

    #[test]
    fn test_filter_applies_to_queue_too() {
        let roster = vec![technician(1, "Alex"), technician(2, "Brooke")];
        let board = build_board(
            date(2025, 1, 15),
            &roster,
            five_jobs(&roster),
            JobFilter::Repairs,
            Selection::new(),
            &GridSpec::default(),
        );
        assert_eq!(board.unassigned.iter().map(|c| c.id).collect::<Vec<_>>(), vec![4]);
        assert_eq!(board.columns[0].job_count, 1);
        assert_eq!(board.columns[1].job_count, 0);
    }

    #[test]
    fn test_selection_resolves_detail_panel() {
        let roster = vec![technician(1, "Alex"), technician(2, "Brooke")];
        let board = build_board(
            date(2025, 1, 15),
            &roster,
            five_jobs(&roster),
            JobFilter::All,
            Selection::from_option(Some(4)),
            &GridSpec::default(),
        );
        let panel = board.selected.expect("selected job on board");
        assert_eq!(panel.id, 4);
        assert_eq!(panel.technician, "Unassigned");
        assert_eq!(panel.customer.email.as_deref(), Some("pat4@example.com"));
        assert!(board.unassigned.iter().any(|c| c.id == 4 && c.selected));
    }

    #[test]
    fn test_clicking_open_job_closes_panel() {
        let roster = vec![technician(1, "Alex"), technician(2, "Brooke")];
        let click = SelectionInput {
            selected: Some(4),
            click: Some(4),
            dismiss: false,
        };
        let board = build_board(
            date(2025, 1, 15),
            &roster,
            five_jobs(&roster),
            JobFilter::All,
            click.resolve(),
            &GridSpec::default(),
        );
        assert!(board.selected.is_none());
        let mut cards = board.columns.iter().flat_map(|c| &c.jobs).chain(&board.unassigned);
        assert!(cards.all(|j| !j.selected));

        let board = build_board(
            date(2025, 1, 15),
            &roster,
            five_jobs(&roster),
            JobFilter::All,
            SelectionInput { click: Some(1), ..click }.resolve(),
            &GridSpec::default(),
        );
        assert_eq!(board.selected.map(|p| p.id), Some(1));
    }

    #[test]
    fn test_selection_hidden_by_filter_is_cleared() {
        let roster = vec![technician(1, "Alex"), technician(2, "Brooke")];
        let board = build_board(
            date(2025, 1, 15),
            &roster,
            five_jobs(&roster),
            JobFilter::Maintenance,
            Selection::from_option(Some(1)),
            &GridSpec::default(),
        );
        assert!(board.selected.is_none());
        assert!(board.columns.iter().flat_map(|c| &c.jobs).all(|j| !j.selected));
    }

    #[test]
    fn test_orphaned_jobs_are_left_off() {
        let roster = vec![technician(1, "Alex")];
        let ghost = technician(9, "Gone");
        let jobs = vec![details(1, JobType::Repair, Some(&ghost), Some(time(9, 0, 0, 0)))];
        let board = build_board(
            date(2025, 1, 15),
            &roster,
            jobs,
            JobFilter::All,
            Selection::from_option(Some(1)),
            &GridSpec::default(),
        );
        assert_eq!(board.columns[0].job_count, 0);
        assert!(board.unassigned.is_empty());
        assert!(board.selected.is_none());
        assert_eq!(board.empty_message.as_deref(), Some("No jobs scheduled for this day"));
    }

    #[test]
    fn test_empty_roster_message() {
        let board = build_board(
            date(2025, 1, 15),
            &[],
            Vec::new(),
            JobFilter::All,
            Selection::new(),
            &GridSpec::default(),
        );
        assert!(board.columns.is_empty());
        assert!(board.empty_message.is_some());
    }

    #[test]
    fn test_filter_json_names() {
        let filter: JobFilter = serde_json::from_str("\"installs\"").unwrap();
        assert_eq!(filter, JobFilter::Installs);
        assert!(JobFilter::Installs.matches(JobType::Installation));
        assert!(!JobFilter::Installs.matches(JobType::Repair));
        assert!(JobFilter::All.matches(JobType::Warranty));
    }
}
