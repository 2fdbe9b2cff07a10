use super::CommentCommandService;
use crate::{
    application::{
        authorization::require_admin,
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::CommentId,
};

pub struct ApproveCommentCommand {
    pub id: i64,
}

impl CommentCommandService {
    /// Approving an approved comment succeeds without touching it.
    pub async fn approve_comment(
        &self,
        actor: &AuthenticatedUser,
        command: ApproveCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        require_admin(actor)?;

        let id = CommentId::new(command.id)?;
        let mut comment = self
            .comment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        let now = self.clock.now();
        if !comment.approve(now) {
            return Ok(comment.into());
        }

        let approved = self.comment_repo.mark_approved(id, now).await?;
        tracing::info!(comment_id = %id, "comment approved");
        Ok(approved.into())
    }
}
