// tests/support/mocks/comment_repo.rs
use async_trait::async_trait;
use aventures_core::domain::article::ArticleId;
use aventures_core::domain::comment::{
    Comment, CommentId, CommentRepository, ModerationState, NewComment,
};
use aventures_core::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::sync::Mutex;

use super::EventLog;

#[derive(Default)]
pub struct InMemoryCommentRepo {
    rows: Mutex<Vec<Comment>>,
    next_id: Mutex<i64>,
    events: EventLog,
}

impl InMemoryCommentRepo {
    pub fn with_events(events: EventLog) -> Self {
        Self {
            events,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    /// Drop every comment of one article, as the article delete does in storage.
    pub fn purge_article(&self, article_id: ArticleId) -> u64 {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.article_id != article_id);
        self.events.push(format!("comments:delete:{article_id}"));
        (before - rows.len()) as u64
    }
}

fn newest_first(rows: &mut [Comment]) {
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepo {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let row = Comment {
            id: CommentId::new(*next_id)?,
            article_id: comment.article_id(),
            name: comment.name().clone(),
            content: comment.content().clone(),
            state: comment.state(),
            created_at: comment.created_at(),
            updated_at: comment.created_at(),
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self.rows.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn list_all(&self) -> DomainResult<Vec<Comment>> {
        let mut rows = self.rows.lock().unwrap().clone();
        newest_first(&mut rows);
        Ok(rows)
    }

    async fn list_for_article(
        &self,
        article_id: ArticleId,
        approved_only: bool,
    ) -> DomainResult<Vec<Comment>> {
        let mut rows: Vec<Comment> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.article_id == article_id && (c.is_approved() || !approved_only))
            .cloned()
            .collect();
        newest_first(&mut rows);
        Ok(rows)
    }

    async fn mark_approved(&self, id: CommentId, at: DateTime<Utc>) -> DomainResult<Comment> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        row.state = ModerationState::Approved;
        row.updated_at = at;
        Ok(row.clone())
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        if rows.len() == before {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }
}
