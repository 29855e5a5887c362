//! JWT authentication and role guards.
//!
//! `auth_middleware` validates the bearer token and stores an [`AuthUser`] in
//! the request extensions. The `require_*` guards run after it and answer 403
//! when the role does not fit the route group.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::error::{AppError, AppResult};
use crate::models::UserRole;
use crate::state::AppState;
use crate::utils::jwt::{Claims, validate_access_token};

/// Authenticated caller, extracted in handlers with `Extension<AuthUser>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i32,
    pub email: String,
    pub role: UserRole,
    pub technician_id: Option<i32>,
    pub customer_id: Option<i32>,
}

impl TryFrom<Claims> for AuthUser {
    type Error = AppError;

    fn try_from(claims: Claims) -> AppResult<Self> {
        Ok(Self {
            user_id: claims.user_id()?,
            email: claims.email,
            role: claims.role,
            technician_id: claims.technician_id,
            customer_id: claims.customer_id,
        })
    }
}

impl AuthUser {
    /// Customer record behind a portal login.
    pub fn linked_customer(&self) -> AppResult<i32> {
        self.customer_id
            .ok_or_else(|| AppError::forbidden("Account is not linked to a customer"))
    }

    /// Technician record behind a field login.
    pub fn linked_technician(&self) -> AppResult<i32> {
        self.technician_id
            .ok_or_else(|| AppError::forbidden("Account is not linked to a technician"))
    }
}

fn bearer_token(request: &Request) -> AppResult<&str> {
    let value = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

    value.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::unauthorized("Invalid authorization header format. Expected: Bearer <token>")
    })
}

pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = validate_access_token(bearer_token(&request)?, &state.jwt_config.secret)?;
    let user = AuthUser::try_from(claims)?;
    tracing::Span::current().record("user_id", user.user_id);
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

fn authenticated(request: &Request) -> AppResult<&AuthUser> {
    request
        .extensions()
        .get::<AuthUser>()
        .ok_or_else(|| AppError::unauthorized("Authentication required"))
}

async fn guard(
    request: Request,
    next: Next,
    allowed: fn(UserRole) -> bool,
    message: &'static str,
) -> Result<Response, AppError> {
    let user = authenticated(&request)?;
    if !allowed(user.role) {
        tracing::debug!(user_id = user.user_id, role = ?user.role, "Role not allowed on route");
        return Err(AppError::forbidden(message));
    }
    Ok(next.run(request).await)
}

/// Admins and dispatchers only.
pub async fn require_staff(request: Request, next: Next) -> Result<Response, AppError> {
    guard(request, next, UserRole::is_staff, "Staff access required").await
}

pub async fn require_customer(request: Request, next: Next) -> Result<Response, AppError> {
    guard(
        request,
        next,
        |role| role == UserRole::Customer,
        "Customer access required",
    )
    .await
}

pub async fn require_technician(request: Request, next: Next) -> Result<Response, AppError> {
    guard(
        request,
        next,
        |role| role == UserRole::Technician,
        "Technician access required",
    )
    .await
}
