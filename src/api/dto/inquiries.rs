//! Public contact and emergency form DTOs.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::services::{ContactInquiry, EmergencyInquiry};

/// Digits with the usual separators, 7 to 20 characters.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[0-9()\-.\s]{7,20}$").expect("static regex")
});

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "name": "Sam Lee",
    "phone": "(312) 555-0142",
    "email": "sam@example.com",
    "serviceNeeded": "AC Repair",
    "message": "Upstairs unit blows warm air"
}))]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(regex(path = *PHONE_PATTERN, message = "Invalid phone number"))]
    pub phone: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(format = "email")]
    pub email: Option<String>,
    #[validate(length(max = 200, message = "Address must be at most 200 characters"))]
    pub address: Option<String>,
    #[validate(length(max = 100, message = "Service must be at most 100 characters"))]
    pub service_needed: Option<String>,
    #[validate(length(max = 2000, message = "Message must be at most 2000 characters"))]
    pub message: Option<String>,
}

impl From<ContactRequest> for ContactInquiry {
    fn from(request: ContactRequest) -> Self {
        Self {
            name: request.name,
            phone: request.phone,
            email: request.email,
            address: request.address,
            service_needed: request.service_needed,
            message: request.message,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "name": "Ana Cruz",
    "phone": "312-555-0911",
    "address": "12 Oak Ave, Chicago, IL",
    "description": "No heat, house at 50F"
}))]
pub struct EmergencyRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(regex(path = *PHONE_PATTERN, message = "Invalid phone number"))]
    pub phone: String,
    #[validate(length(min = 5, max = 200, message = "Address must be between 5 and 200 characters"))]
    pub address: String,
    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,
}

impl From<EmergencyRequest> for EmergencyInquiry {
    fn from(request: EmergencyRequest) -> Self {
        Self {
            name: request.name,
            phone: request.phone,
            address: request.address,
            description: request.description,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InquiryResponse {
    /// Id of the lead the inquiry was filed as
    pub id: i32,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(phone: &str) -> ContactRequest {
        ContactRequest {
            name: "Sam Lee".to_string(),
            phone: phone.to_string(),
            email: None,
            address: None,
            service_needed: None,
            message: None,
        }
    }

    #[test]
    fn test_phone_formats() {
        for ok in ["(312) 555-0142", "+1 312.555.0142", "3125550142"] {
            assert!(contact(ok).validate().is_ok(), "{ok} should pass");
        }
        for bad in ["555", "call me maybe", ""] {
            assert!(contact(bad).validate().is_err(), "{bad} should fail");
        }
    }

    #[test]
    fn test_emergency_needs_address() {
        let request = EmergencyRequest {
            name: "Ana Cruz".to_string(),
            phone: "312-555-0911".to_string(),
            address: "".to_string(),
            description: None,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("address"));
    }
}
