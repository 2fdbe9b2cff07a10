// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use aventures_core::domain::errors::{DomainError, DomainResult};
use aventures_core::domain::user::{Email, NewUser, Role, User, UserId, UserRepository};
use std::sync::Mutex;

/// Enforces the same uniqueness rules as the database: one account per
/// email and at most one administrator.
#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(DomainError::Conflict("email already registered".into()));
        }
        if new_user.role == Role::Admin && users.iter().any(|u| u.role == Role::Admin) {
            return Err(DomainError::Validation("administrator already exists".into()));
        }
        let user = User {
            id: UserId::new(users.len() as i64 + 1)?,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role,
            created_at: new_user.created_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }

    async fn exists_with_role(&self, role: Role) -> DomainResult<bool> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().any(|u| u.role == role))
    }
}
