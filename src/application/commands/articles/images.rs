// src/application/commands/articles/images.rs
use super::ArticleCommandService;
use crate::{
    application::{
        authorization::require_admin,
        dto::{AuthenticatedUser, ImageRemovalDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleUpdate},
};

pub struct RemoveArticleImageCommand {
    pub article_id: i64,
    pub storage_id: String,
}

impl ArticleCommandService {
    /// Destroy the asset on the image host first, then detach it from the article.
    /// The host answering "not found" still detaches it.
    pub async fn remove_article_image(
        &self,
        actor: &AuthenticatedUser,
        command: RemoveArticleImageCommand,
    ) -> ApplicationResult<ImageRemovalDto> {
        require_admin(actor)?;

        if command.storage_id.trim().is_empty() {
            return Err(ApplicationError::validation("storage id is required"));
        }

        let id = ArticleId::new(command.article_id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if article.image(&command.storage_id).is_none() {
            return Err(ApplicationError::not_found("image not attached to this article"));
        }

        let outcome = self.image_host.destroy(&command.storage_id).await?;

        let original_updated_at = article.updated_at;
        article.remove_image(&command.storage_id, self.clock.now());
        let mut update =
            ArticleUpdate::new(id, original_updated_at).with_images(article.images.clone());
        update.set_updated_at(article.updated_at);

        let updated = self.write_repo.update(update).await?;
        tracing::info!(
            article_id = %id,
            storage_id = %command.storage_id,
            host_result = outcome.as_str(),
            "article image removed"
        );

        Ok(ImageRemovalDto {
            message: "image removed".into(),
            article: self.to_dto(updated).await?,
            host_result: outcome.as_str().to_string(),
        })
    }
}
