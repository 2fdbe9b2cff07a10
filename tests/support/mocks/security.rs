// tests/support/mocks/security.rs
use async_trait::async_trait;
use aventures_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use aventures_core::domain::user::{Role, UserId};
use chrono::Duration;

pub const ADMIN_TOKEN: &str = "admin-token";
pub const USER_TOKEN: &str = "user-token";

/// Accepts the two fixed tokens above and issues `token-for-<id>` strings.
#[derive(Clone, Debug, Default)]
pub struct FakeTokenManager;

#[async_trait]
impl TokenManager for FakeTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = super::time::fixed_now();
        Ok(AuthTokenDto {
            token: format!("token-for-{}", i64::from(subject.user_id)),
            issued_at: now,
            expires_at: now + Duration::hours(24),
            expires_in: 86_400,
            role: subject.role,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let (id, email, role) = match token {
            ADMIN_TOKEN => (1, "admin@example.fr", Role::Admin),
            USER_TOKEN => (2, "reader@example.fr", Role::User),
            _ => return Err(ApplicationError::unauthorized("invalid token")),
        };
        let now = super::time::fixed_now();
        Ok(AuthenticatedUser {
            id: UserId::new(id).unwrap(),
            email: email.into(),
            role,
            issued_at: now,
            expires_at: now + Duration::hours(1),
        })
    }
}

/// Deterministic "hash" that still rejects wrong passwords.
#[derive(Clone, Debug, Default)]
pub struct StrictPasswordHasher;

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hash::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hash::{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("bad password"))
        }
    }
}
