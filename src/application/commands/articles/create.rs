// src/application/commands/articles/create.rs
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
        article::{ArticleContent, ArticleTitle, Blog, NewArticle},
        errors::DomainError,
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub images: Vec<ArticleImageDto>,
    pub category_id: i64,
    pub blog: String,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        require_admin(actor)?;

        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let blog: Blog = command.blog.parse()?;
        let images = images_from_dtos(command.images)?;
        let category_id = self.ensure_category(command.category_id).await?;
        let now = self.clock.now();

        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let slug = self
                .slug_service
                .generate_unique_slug(&title, None, now)
                .await?;

            let new_article = NewArticle {
                title: title.clone(),
                slug,
                content: content.clone(),
                images: images.clone(),
                category_id,
                blog,
                blog_slug: blog.slug(),
                created_at: now,
                updated_at: now,
            };

            match self.write_repo.insert(new_article).await {
                Ok(created) => {
                    tracing::info!(
                        article_id = %created.id,
                        slug = %created.slug,
                        blog_slug = created.blog_slug.as_str(),
                        "article created"
                    );
                    return self.to_dto(created).await;
                }
                Err(DomainError::DuplicateSlug(slug)) => {
                    tracing::debug!(%slug, attempt, "slug taken concurrently, retrying");
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(ApplicationError::conflict(
            "could not allocate a unique slug for this title",
        ))
    }
}
