// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repo;
pub mod category_repo;
pub mod comment_repo;
pub mod media;
pub mod racing_article_repo;
pub mod security;
pub mod time;
pub mod user_repo;

use std::sync::{Arc, Mutex};

/// Ordered record of side effects shared between fakes, so tests can assert
/// on the sequence of calls across collaborators.
#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<String>>>);

impl EventLog {
    pub fn push(&self, event: impl Into<String>) {
        self.0.lock().unwrap().push(event.into());
    }

    pub fn events(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

pub use article_repo::InMemoryArticleRepo;
pub use category_repo::InMemoryCategoryRepo;
pub use comment_repo::InMemoryCommentRepo;
pub use media::FakeImageHost;
pub use racing_article_repo::RacingArticleRepo;
pub use security::{ADMIN_TOKEN, FakeTokenManager, StrictPasswordHasher, USER_TOKEN};
pub use time::{FixedClock, fixed_now};
pub use user_repo::InMemoryUserRepo;
