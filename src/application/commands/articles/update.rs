// src/application/commands/articles/update.rs
use super::{
    ArticleCommandService,
    service::{MAX_SLUG_ATTEMPTS, images_from_dtos},
};
use crate::{
    application::{
        authorization::require_admin,
        dto::{ArticleDto, ArticleImageDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{Article, ArticleContent, ArticleId, ArticleTitle, ArticleUpdate, Blog},
        errors::DomainError,
    },
};

#[derive(Default)]
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub images: Option<Vec<ArticleImageDto>>,
    pub category_id: Option<i64>,
    pub blog: Option<String>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        require_admin(actor)?;

        let id = ArticleId::new(command.id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let UpdateArticleCommand {
            id: _,
            title,
            content,
            images,
            category_id,
            blog,
        } = command;

        let title = title.map(ArticleTitle::new).transpose()?;
        let content = content.map(ArticleContent::new).transpose()?;
        let images = images.map(images_from_dtos).transpose()?;
        let blog = blog.map(|b| b.parse::<Blog>()).transpose()?;
        let category_id = match category_id {
            Some(raw) => Some(self.ensure_category(raw).await?),
            None => None,
        };

        let now = self.clock.now();
        let original_updated_at = article.updated_at;
        let mut update = ArticleUpdate::new(id, original_updated_at);

        if let Some(content) = content {
            article.set_content(content.clone(), now);
            update = update.with_content(content);
        }
        if let Some(images) = images {
            article.replace_images(images.clone(), now);
            update = update.with_images(images);
        }
        if let Some(category_id) = category_id {
            article.set_category(category_id, now);
            update = update.with_category(category_id);
        }
        if let Some(blog) = blog {
            article.set_blog(blog, now);
            update = update.with_blog(blog, article.blog_slug.clone());
        }
        // An unchanged title keeps its slug, even when a lower suffix has freed up since.
        let retitle = title.filter(|t| *t != article.title);

        if retitle.is_none() && update.is_empty() {
            return self.to_dto(article).await;
        }
        update.set_updated_at(now);

        let Some(title) = retitle else {
            let updated = self.write_repo.update(update).await?;
            return self.to_dto(updated).await;
        };

        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let slug = self
                .slug_service
                .generate_unique_slug(&title, Some(id), now)
                .await?;
            let attempt_update = update.clone().with_title(title.clone(), slug);

            match self.write_repo.update(attempt_update).await {
                Ok(updated) => return self.finish_retitle(updated).await,
                Err(DomainError::DuplicateSlug(slug)) => {
                    tracing::debug!(%slug, attempt, article_id = %id, "slug taken concurrently, retrying");
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(ApplicationError::conflict(
            "could not allocate a unique slug for this title",
        ))
    }

    async fn finish_retitle(&self, updated: Article) -> ApplicationResult<ArticleDto> {
        tracing::info!(article_id = %updated.id, slug = %updated.slug, "article retitled");
        self.to_dto(updated).await
    }
}
