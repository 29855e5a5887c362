//! Badge tones: the colour family a front-end uses for a status pill.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{
    InvoiceStatus, JobPriority, JobStatus, JobType, LeadStatus, MembershipStatus, MembershipTier,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
    Accent,
    Bronze,
    Silver,
    Gold,
    Platinum,
}

pub fn job_status_tone(status: JobStatus) -> Tone {
    match status {
        JobStatus::Pending => Tone::Neutral,
        JobStatus::Scheduled => Tone::Info,
        JobStatus::EnRoute => Tone::Accent,
        JobStatus::InProgress => Tone::Warning,
        JobStatus::OnHold => Tone::Neutral,
        JobStatus::Completed => Tone::Success,
        JobStatus::Cancelled => Tone::Danger,
        JobStatus::Callback => Tone::Danger,
    }
}

pub fn job_priority_tone(priority: JobPriority) -> Tone {
    match priority {
        JobPriority::Low => Tone::Neutral,
        JobPriority::Normal => Tone::Info,
        JobPriority::High => Tone::Warning,
        JobPriority::Urgent | JobPriority::Emergency => Tone::Danger,
    }
}

/// Block colour on the dispatch grid.
pub fn job_type_tone(kind: JobType) -> Tone {
    match kind {
        JobType::Emergency => Tone::Danger,
        JobType::Installation => Tone::Accent,
        JobType::Maintenance => Tone::Success,
        JobType::Repair | JobType::Callback | JobType::Warranty => Tone::Warning,
        JobType::Inspection | JobType::Estimate => Tone::Info,
    }
}

pub fn lead_status_tone(status: LeadStatus) -> Tone {
    match status {
        LeadStatus::New => Tone::Info,
        LeadStatus::Contacted => Tone::Accent,
        LeadStatus::Qualified => Tone::Warning,
        LeadStatus::EstimateSent | LeadStatus::FollowUp => Tone::Neutral,
        LeadStatus::Won => Tone::Success,
        LeadStatus::Lost => Tone::Danger,
    }
}

pub fn invoice_status_tone(status: InvoiceStatus) -> Tone {
    match status {
        InvoiceStatus::Draft | InvoiceStatus::Void => Tone::Neutral,
        InvoiceStatus::Sent => Tone::Info,
        InvoiceStatus::Paid => Tone::Success,
        InvoiceStatus::Overdue => Tone::Danger,
    }
}

pub fn membership_status_tone(status: MembershipStatus) -> Tone {
    match status {
        MembershipStatus::Active => Tone::Success,
        MembershipStatus::Expired => Tone::Neutral,
        MembershipStatus::Cancelled => Tone::Danger,
    }
}

pub fn tier_tone(tier: MembershipTier) -> Tone {
    match tier {
        MembershipTier::Bronze => Tone::Bronze,
        MembershipTier::Silver => Tone::Silver,
        MembershipTier::Gold => Tone::Gold,
        MembershipTier::Platinum => Tone::Platinum,
    }
}
