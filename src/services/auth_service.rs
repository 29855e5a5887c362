//! Login, token refresh and current-user lookup.

use crate::config::JwtConfig;
use crate::error::{AppError, AppResult};
use crate::models::User;
use crate::repositories::UserRepository;
use crate::utils::jwt::{TokenPair, generate_token_pair, validate_refresh_token};
use crate::utils::password::verify_password;

const BAD_CREDENTIALS: &str = "Invalid email or password";

#[derive(Clone)]
pub struct AuthService {
    repo: UserRepository,
    jwt: JwtConfig,
}

impl AuthService {
    pub fn new(repo: UserRepository, jwt: JwtConfig) -> Self {
        Self { repo, jwt }
    }

    /// Checks credentials and issues a token pair.
    ///
    /// An unknown email and a wrong password fail with the same message so
    /// the response does not reveal which accounts exist.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<(User, TokenPair)> {
        let email = normalize_email(email);
        let Some(user) = self.repo.find_by_email(&email).await? else {
            tracing::info!(email = %email, "Login rejected: unknown email");
            return Err(AppError::unauthorized(BAD_CREDENTIALS));
        };

        if !verify_password(password, &user.password)? {
            tracing::info!(user_id = user.id, "Login rejected: wrong password");
            return Err(AppError::unauthorized(BAD_CREDENTIALS));
        }

        let tokens = generate_token_pair(&user, &self.jwt)?;
        tracing::info!(user_id = user.id, role = ?user.role, "User logged in");
        Ok((user, tokens))
    }

    /// Swaps a refresh token for a fresh pair. The account is re-read so a
    /// role change takes effect on the next refresh.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<(User, TokenPair)> {
        let claims = validate_refresh_token(refresh_token, &self.jwt.secret)?;
        let user = self
            .repo
            .find_by_id(claims.user_id()?)
            .await?
            .ok_or_else(|| AppError::unauthorized("Account no longer exists"))?;

        let tokens = generate_token_pair(&user, &self.jwt)?;
        Ok((user, tokens))
    }

    pub async fn current_user(&self, user_id: i32) -> AppResult<User> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("user", user_id))
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Admin@Demo.Test "), "admin@demo.test");
    }
}
