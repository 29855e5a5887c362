//! Contact and emergency forms from the public site. Each submission is
//! stored as a new website lead so it shows up in the pipeline.

use crate::error::AppResult;
use crate::models::{Lead, LeadSource, LeadStatus, NewLead};
use crate::repositories::LeadRepository;

pub const EMERGENCY_URGENCY: i32 = 10;
pub const EMERGENCY_SERVICE: &str = "Emergency Service";
pub const GENERAL_SERVICE: &str = "General Inquiry";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInquiry {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub service_needed: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmergencyInquiry {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub description: Option<String>,
}

impl From<ContactInquiry> for NewLead {
    fn from(inquiry: ContactInquiry) -> Self {
        NewLead {
            name: inquiry.name.trim().to_string(),
            phone: inquiry.phone.trim().to_string(),
            email: non_blank(inquiry.email),
            address: non_blank(inquiry.address),
            source: LeadSource::Website,
            status: LeadStatus::New,
            service_needed: non_blank(inquiry.service_needed)
                .unwrap_or_else(|| GENERAL_SERVICE.to_string()),
            description: non_blank(inquiry.message),
            notes: None,
            urgency: None,
            estimated_value: None,
            follow_up_date: None,
        }
    }
}

impl From<EmergencyInquiry> for NewLead {
    fn from(inquiry: EmergencyInquiry) -> Self {
        NewLead {
            name: inquiry.name.trim().to_string(),
            phone: inquiry.phone.trim().to_string(),
            email: None,
            address: non_blank(Some(inquiry.address)),
            source: LeadSource::Website,
            status: LeadStatus::New,
            service_needed: EMERGENCY_SERVICE.to_string(),
            description: non_blank(inquiry.description),
            notes: None,
            urgency: Some(EMERGENCY_URGENCY),
            estimated_value: None,
            follow_up_date: None,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Clone)]
pub struct InquiryService {
    leads: LeadRepository,
}

impl InquiryService {
    pub fn new(leads: LeadRepository) -> Self {
        Self { leads }
    }

    pub async fn submit_contact(&self, inquiry: ContactInquiry) -> AppResult<Lead> {
        let lead = self.leads.create(inquiry.into()).await?;
        tracing::info!(lead_id = lead.id, "Contact inquiry received");
        Ok(lead)
    }

    pub async fn submit_emergency(&self, inquiry: EmergencyInquiry) -> AppResult<Lead> {
        let lead = self.leads.create(inquiry.into()).await?;
        tracing::warn!(lead_id = lead.id, phone = %lead.phone, "Emergency inquiry received");
        Ok(lead)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_becomes_new_website_lead() {
        let lead: NewLead = ContactInquiry {
            name: " Sam Lee ".to_string(),
            phone: "555-0142".to_string(),
            email: Some("sam@example.com".to_string()),
            address: Some("   ".to_string()),
            service_needed: None,
            message: Some("Furnace short cycling".to_string()),
        }
        .into();

        assert_eq!(lead.name, "Sam Lee");
        assert_eq!(lead.source, LeadSource::Website);
        assert_eq!(lead.status, LeadStatus::New);
        assert_eq!(lead.service_needed, GENERAL_SERVICE);
        assert_eq!(lead.address, None);
        assert_eq!(lead.description.as_deref(), Some("Furnace short cycling"));
        assert_eq!(lead.urgency, None);
    }

    #[test]
    fn test_emergency_is_maximally_urgent() {
        let lead: NewLead = EmergencyInquiry {
            name: "Ana Cruz".to_string(),
            phone: "555-0911".to_string(),
            address: "12 Oak Ave, Springfield".to_string(),
            description: None,
        }
        .into();

        assert_eq!(lead.urgency, Some(EMERGENCY_URGENCY));
        assert_eq!(lead.service_needed, EMERGENCY_SERVICE);
        assert_eq!(lead.status, LeadStatus::New);
        assert_eq!(lead.address.as_deref(), Some("12 Oak Ave, Springfield"));
    }
}
