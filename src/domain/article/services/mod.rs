// src/domain/article/services/mod.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::errors::DomainResult;
use crate::domain::slug::resolve_unique;

/// Domain service responsible for producing unique slugs for articles.
pub struct ArticleSlugService {
    read_repo: Arc<dyn ArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    /// Slug for `title` that no other article holds. When `ignore_id` is set,
    /// that article's own slug does not count as taken.
    pub async fn generate_unique_slug(
        &self,
        title: &ArticleTitle,
        ignore_id: Option<ArticleId>,
        now: DateTime<Utc>,
    ) -> DomainResult<ArticleSlug> {
        let base = self.generator.slugify(title.as_str());
        let base_slug = if base.is_empty() {
            format!("article-{}", now.timestamp())
        } else {
            base
        };

        let read_repo = Arc::clone(&self.read_repo);
        let slug = resolve_unique(&base_slug, move |candidate| {
            let read_repo = Arc::clone(&read_repo);
            async move {
                let slug = ArticleSlug::new(candidate)?;
                let taken = match read_repo.find_by_slug(&slug).await? {
                    Some(existing) => Some(existing.id) != ignore_id,
                    None => false,
                };
                Ok(taken)
            }
        })
        .await?;

        ArticleSlug::new(slug)
    }
}
