//! PostgreSQL enum types shared by the models.
//!
//! Database values are snake_case (the diesel-derive-enum default); the JSON
//! representation is SCREAMING_SNAKE_CASE, which is what the front-end keys
//! its lookups on.

use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Account role, decides which surface a user lands on after login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, DbEnum, ToSchema)]
#[db_enum(existing_type_path = "crate::schema::sql_types::UserRole")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Dispatcher,
    Technician,
    Customer,
}

impl UserRole {
    /// Office roles allowed on the dashboard, dispatch and report routes.
    pub fn is_staff(self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Dispatcher)
    }

    /// Front-end route a freshly logged-in user is sent to.
    pub fn landing_path(self) -> &'static str {
        match self {
            UserRole::Technician => "/tech",
            UserRole::Customer => "/portal",
            UserRole::Admin | UserRole::Dispatcher => "/dashboard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, DbEnum, ToSchema)]
#[db_enum(existing_type_path = "crate::schema::sql_types::CustomerType")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerType {
    Residential,
    Commercial,
}

/// Kind of field work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, DbEnum, ToSchema)]
#[db_enum(existing_type_path = "crate::schema::sql_types::JobType")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    Repair,
    Maintenance,
    Emergency,
    Installation,
    Inspection,
    Warranty,
    Callback,
    Estimate,
}

impl JobType {
    pub const ALL: [JobType; 8] = [
        JobType::Repair,
        JobType::Maintenance,
        JobType::Emergency,
        JobType::Installation,
        JobType::Inspection,
        JobType::Warranty,
        JobType::Callback,
        JobType::Estimate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            JobType::Repair => "Repair",
            JobType::Maintenance => "Maintenance",
            JobType::Emergency => "Emergency",
            JobType::Installation => "Installation",
            JobType::Inspection => "Inspection",
            JobType::Warranty => "Warranty",
            JobType::Callback => "Callback",
            JobType::Estimate => "Estimate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, DbEnum, ToSchema)]
#[db_enum(existing_type_path = "crate::schema::sql_types::JobPriority")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobPriority {
    Low,
    Normal,
    High,
    Urgent,
    Emergency,
}

/// Lifecycle state of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, DbEnum, ToSchema)]
#[db_enum(existing_type_path = "crate::schema::sql_types::JobStatus")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Pending,
    Scheduled,
    EnRoute,
    InProgress,
    OnHold,
    Completed,
    Cancelled,
    Callback,
}

impl JobStatus {
    pub const ALL: [JobStatus; 8] = [
        JobStatus::Pending,
        JobStatus::Scheduled,
        JobStatus::EnRoute,
        JobStatus::InProgress,
        JobStatus::OnHold,
        JobStatus::Completed,
        JobStatus::Cancelled,
        JobStatus::Callback,
    ];

    /// Statuses that still need a truck to roll.
    pub const OPEN: [JobStatus; 5] = [
        JobStatus::Pending,
        JobStatus::Scheduled,
        JobStatus::EnRoute,
        JobStatus::InProgress,
        JobStatus::OnHold,
    ];

    pub fn label(self) -> &'static str {
        match self {
            JobStatus::Pending => "Pending",
            JobStatus::Scheduled => "Scheduled",
            JobStatus::EnRoute => "En Route",
            JobStatus::InProgress => "In Progress",
            JobStatus::OnHold => "On Hold",
            JobStatus::Completed => "Completed",
            JobStatus::Cancelled => "Cancelled",
            JobStatus::Callback => "Callback",
        }
    }
}

/// Channel a lead arrived through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, DbEnum, ToSchema)]
#[db_enum(existing_type_path = "crate::schema::sql_types::LeadSource")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadSource {
    Website,
    Phone,
    Referral,
    GoogleAds,
    FacebookAds,
    WalkIn,
    Repeat,
}

impl LeadSource {
    pub const ALL: [LeadSource; 7] = [
        LeadSource::Website,
        LeadSource::Phone,
        LeadSource::Referral,
        LeadSource::GoogleAds,
        LeadSource::FacebookAds,
        LeadSource::WalkIn,
        LeadSource::Repeat,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LeadSource::Website => "Website",
            LeadSource::Phone => "Phone",
            LeadSource::Referral => "Referral",
            LeadSource::GoogleAds => "Google Ads",
            LeadSource::FacebookAds => "Facebook Ads",
            LeadSource::WalkIn => "Walk-in",
            LeadSource::Repeat => "Repeat Customer",
        }
    }
}

/// Sales funnel stage. Declaration order is funnel order; `Won` and `Lost`
/// are the terminal branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, DbEnum, ToSchema)]
#[db_enum(existing_type_path = "crate::schema::sql_types::LeadStatus")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    EstimateSent,
    FollowUp,
    Won,
    Lost,
}

impl LeadStatus {
    /// Every stage in kanban column order.
    pub const FUNNEL: [LeadStatus; 7] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Qualified,
        LeadStatus::EstimateSent,
        LeadStatus::FollowUp,
        LeadStatus::Won,
        LeadStatus::Lost,
    ];

    pub fn is_terminal(self) -> bool {
        matches!(self, LeadStatus::Won | LeadStatus::Lost)
    }

    pub fn label(self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Qualified => "Qualified",
            LeadStatus::EstimateSent => "Estimate Sent",
            LeadStatus::FollowUp => "Follow Up",
            LeadStatus::Won => "Won",
            LeadStatus::Lost => "Lost",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, DbEnum, ToSchema)]
#[db_enum(existing_type_path = "crate::schema::sql_types::InvoiceStatus")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
    Void,
}

/// Maintenance plan level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, DbEnum, ToSchema)]
#[db_enum(existing_type_path = "crate::schema::sql_types::MembershipTier")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl MembershipTier {
    pub const ALL: [MembershipTier; 4] = [
        MembershipTier::Bronze,
        MembershipTier::Silver,
        MembershipTier::Gold,
        MembershipTier::Platinum,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, DbEnum, ToSchema)]
#[db_enum(existing_type_path = "crate::schema::sql_types::MembershipStatus")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipStatus {
    Active,
    Expired,
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_screaming() {
        let json = serde_json::to_string(&UserRole::Technician).unwrap();
        assert_eq!(json, "\"TECHNICIAN\"");
        let status: JobStatus = serde_json::from_str("\"EN_ROUTE\"").unwrap();
        assert_eq!(status, JobStatus::EnRoute);
    }

    #[test]
    fn test_landing_paths() {
        assert_eq!(UserRole::Technician.landing_path(), "/tech");
        assert_eq!(UserRole::Customer.landing_path(), "/portal");
        assert_eq!(UserRole::Admin.landing_path(), "/dashboard");
        assert_eq!(UserRole::Dispatcher.landing_path(), "/dashboard");
    }

    #[test]
    fn test_funnel_order_matches_declaration() {
        let mut sorted = LeadStatus::FUNNEL;
        sorted.sort();
        assert_eq!(sorted, LeadStatus::FUNNEL);
        assert!(LeadStatus::Won.is_terminal());
        assert!(LeadStatus::Lost.is_terminal());
        assert!(!LeadStatus::FollowUp.is_terminal());
    }

    #[test]
    fn test_staff_roles() {
        assert!(UserRole::Admin.is_staff());
        assert!(UserRole::Dispatcher.is_staff());
        assert!(!UserRole::Technician.is_staff());
        assert!(!UserRole::Customer.is_staff());
    }
}
