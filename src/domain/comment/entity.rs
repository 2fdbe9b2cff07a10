// src/domain/comment/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::comment::value_objects::{
    CommentContent, CommentId, CommenterName, ModerationState,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub name: CommenterName,
    pub content: CommentContent,
    pub state: ModerationState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn is_approved(&self) -> bool {
        self.state.is_approved()
    }

    /// Returns `false` when the comment was already approved.
    pub fn approve(&mut self, now: DateTime<Utc>) -> bool {
        if self.state.is_approved() {
            return false;
        }
        self.state = self.state.approve();
        self.updated_at = now;
        true
    }
}

/// A visitor submission. There is no way to build one that starts approved.
#[derive(Debug, Clone)]
pub struct NewComment {
    article_id: ArticleId,
    name: CommenterName,
    content: CommentContent,
    created_at: DateTime<Utc>,
}

impl NewComment {
    pub fn submitted(
        article_id: ArticleId,
        name: CommenterName,
        content: CommentContent,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            article_id,
            name,
            content,
            created_at,
        }
    }

    pub fn article_id(&self) -> ArticleId {
        self.article_id
    }

    pub fn name(&self) -> &CommenterName {
        &self.name
    }

    pub fn content(&self) -> &CommentContent {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn state(&self) -> ModerationState {
        ModerationState::Pending
    }
}
