//! Authentication DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{User, UserRole};
use crate::utils::jwt::TokenPair;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "email": "dispatch@demo.test",
    "password": "demo1234"
}))]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technician_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i32>,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            technician_id: user.technician_id,
            customer_id: user.customer_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "user": { "id": 3, "name": "Marco Ruiz", "email": "tech@demo.test", "role": "TECHNICIAN", "technicianId": 1 },
    "accessToken": "eyJhbGciOiJIUzI1NiJ9...",
    "refreshToken": "eyJhbGciOiJIUzI1NiJ9...",
    "redirectTo": "/tech"
}))]
pub struct LoginResponse {
    pub user: UserSummary,
    pub access_token: String,
    pub refresh_token: String,
    /// Surface the client should open next
    pub redirect_to: String,
}

impl LoginResponse {
    pub fn new(user: User, tokens: TokenPair) -> Self {
        Self {
            redirect_to: user.role.landing_path().to_string(),
            user: user.into(),
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole) -> User {
        User {
            id: 3,
            email: "tech@demo.test".to_string(),
            name: "Marco Ruiz".to_string(),
            password: "$argon2id$secret".to_string(),
            role,
            technician_id: Some(1),
            customer_id: None,
            created_at: jiff::Timestamp::UNIX_EPOCH.into(),
            updated_at: jiff::Timestamp::UNIX_EPOCH.into(),
        }
    }

    fn tokens() -> TokenPair {
        TokenPair {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
        }
    }

    #[test]
    fn test_technician_is_sent_to_tech_view() {
        let body = serde_json::to_value(LoginResponse::new(user(UserRole::Technician), tokens()))
            .unwrap();
        assert_eq!(body["redirectTo"], "/tech");
        assert_eq!(body["user"]["role"], "TECHNICIAN");
        assert_eq!(body["user"]["technicianId"], 1);
        assert!(body["user"].get("password").is_none());
    }

    #[test]
    fn test_staff_go_to_dashboard() {
        let response = LoginResponse::new(user(UserRole::Dispatcher), tokens());
        assert_eq!(response.redirect_to, "/dashboard");
        assert_eq!(
            LoginResponse::new(user(UserRole::Customer), tokens()).redirect_to,
            "/portal"
        );
    }

    #[test]
    fn test_login_request_rejects_bad_email() {
        let request = LoginRequest {
            email: "dispatch".to_string(),
            password: "demo1234".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
