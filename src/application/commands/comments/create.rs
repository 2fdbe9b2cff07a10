use super::CommentCommandService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::ArticleId,
        comment::{CommentContent, CommenterName, NewComment},
    },
};

pub struct CreateCommentCommand {
    pub article_id: i64,
    pub name: String,
    pub content: String,
}

impl CommentCommandService {
    /// Public submission. The comment stays hidden until an administrator approves it.
    pub async fn create_comment(&self, command: CreateCommentCommand) -> ApplicationResult<CommentDto> {
        let article_id = ArticleId::new(command.article_id)?;
        let name = CommenterName::new(command.name)?;
        let content = CommentContent::new(command.content)?;

        if self.article_repo.find_by_id(article_id).await?.is_none() {
            return Err(ApplicationError::not_found("article not found"));
        }

        let comment = NewComment::submitted(article_id, name, content, self.clock.now());
        let created = self.comment_repo.insert(comment).await?;

        tracing::info!(comment_id = %created.id, article_id = %article_id, "comment submitted for moderation");
        Ok(created.into())
    }
}
