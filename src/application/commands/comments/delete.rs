use super::CommentCommandService;
use crate::{
    application::{
        authorization::require_admin,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::CommentId,
};

pub struct DeleteCommentCommand {
    pub id: i64,
}

impl CommentCommandService {
    pub async fn delete_comment(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<()> {
        require_admin(actor)?;

        let id = CommentId::new(command.id)?;
        if self.comment_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("comment not found"));
        }

        self.comment_repo.delete(id).await?;
        Ok(())
    }
}
