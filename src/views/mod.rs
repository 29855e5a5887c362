//! View-model derivation.
//!
//! Pure functions from loaded rows to the JSON shapes the front-end renders.
//! Nothing in here touches the database; callers pass `now` in.

pub mod dispatch;
pub mod format;
pub mod period;
pub mod pipeline;
pub mod reports;
pub mod selection;
pub mod styles;

pub use dispatch::{
    BlockGeometry, DispatchBoard, GridSpec, JobCard, JobDetailPanel, JobFilter, build_board,
    filter_jobs, group_by_technician,
};
pub use period::Periods;
pub use pipeline::{LeadPipeline, PipelineStats, build_pipeline, conversion_rate};
pub use selection::{Selection, SelectionInput};
pub use styles::Tone;
