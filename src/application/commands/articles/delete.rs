// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        authorization::require_admin,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Destroys every hosted image, then removes the record together with its comments.
    /// A failed image destroy is logged and does not stop the deletion.
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        require_admin(actor)?;

        let id = ArticleId::new(command.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        for image in article.hosted_images() {
            if let Err(err) = self.image_host.destroy(&image.storage_id).await {
                tracing::warn!(
                    article_id = %id,
                    storage_id = %image.storage_id,
                    error = %err,
                    "failed to destroy hosted image; continuing with article deletion"
                );
            }
        }

        let removed_comments = self.write_repo.delete(id).await?;

        tracing::info!(article_id = %id, removed_comments, "article deleted");
        Ok(())
    }
}
