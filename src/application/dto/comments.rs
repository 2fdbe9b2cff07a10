use crate::domain::article::Article;
use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentArticleDto {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i64,
    pub article_id: i64,
    /// Only attached on the moderation listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<CommentArticleDto>,
    pub name: String,
    pub content: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CommentDto {
    pub fn with_article(mut self, article: Option<&Article>) -> Self {
        self.article = article.map(|a| CommentArticleDto {
            id: a.id.into(),
            title: a.title.as_str().to_string(),
        });
        self
    }
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            article_id: comment.article_id.into(),
            article: None,
            approved: comment.is_approved(),
            name: comment.name.into(),
            content: comment.content.into(),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}
