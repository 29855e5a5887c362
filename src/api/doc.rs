use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

pub const AUTH_TAG: &str = "Auth";
pub const HEALTH_TAG: &str = "Health";
pub const DASHBOARD_TAG: &str = "Dashboard";
pub const DISPATCH_TAG: &str = "Dispatch";
pub const REPORTS_TAG: &str = "Reports";
pub const PORTAL_TAG: &str = "Portal";
pub const SITE_TAG: &str = "Site";
pub const INQUIRY_TAG: &str = "Inquiries";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HVACDesk",
        description = "Operations API for an HVAC service company",
    ),
    modifiers(&SecurityAddon),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
            crate::api::dto::StatsErrorResponse,
        )
    ),
    tags(
        (name = AUTH_TAG, description = "Login, token refresh and current user"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
        (name = DASHBOARD_TAG, description = "Back-office headline numbers"),
        (name = DISPATCH_TAG, description = "Dispatch board and lead pipeline"),
        (name = REPORTS_TAG, description = "Jobs, customers, technicians, installs, memberships and analytics"),
        (name = PORTAL_TAG, description = "Customer portal and technician day view"),
        (name = SITE_TAG, description = "Public site content"),
        (name = INQUIRY_TAG, description = "Contact and emergency request forms"),
    )
)]
pub struct ApiDoc;

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearerAuth"));
        assert!(components.schemas.contains_key("ErrorResponse"));
    }
}
