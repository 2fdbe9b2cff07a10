// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{ArticleDto, ArticleImageDto},
        error::ApplicationResult,
        ports::{media::ImageHost, time::Clock},
    },
    domain::{
        article::{
            Article, ArticleImage, ArticleReadRepository, ArticleWriteRepository,
            services::ArticleSlugService,
        },
        category::{CategoryId, CategoryRepository},
        errors::{DomainError, DomainResult},
    },
};

/// Writes rejected by the slug unique index are retried this many times in total.
pub(super) const MAX_SLUG_ATTEMPTS: usize = 5;

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) image_host: Arc<dyn ImageHost>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        image_host: Arc<dyn ImageHost>,
        slug_service: Arc<ArticleSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            image_host,
            slug_service,
            clock,
        }
    }

    pub(super) async fn ensure_category(&self, id: i64) -> ApplicationResult<CategoryId> {
        let id = CategoryId::new(id)?;
        match self.category_repo.find_by_id(id).await? {
            Some(_) => Ok(id),
            None => Err(DomainError::Validation(format!("category {id} does not exist")).into()),
        }
    }

    pub(super) async fn to_dto(&self, article: Article) -> ApplicationResult<ArticleDto> {
        let category = self.category_repo.find_by_id(article.category_id).await?;
        Ok(ArticleDto::from(article).with_category(category.as_ref()))
    }
}

pub(super) fn images_from_dtos(images: Vec<ArticleImageDto>) -> DomainResult<Vec<ArticleImage>> {
    images
        .into_iter()
        .map(|img| ArticleImage::new(img.url, img.storage_id))
        .collect()
}
