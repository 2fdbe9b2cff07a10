use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    application::ports::{time::Clock, util::SlugGenerator},
    domain::{
        article::ArticleReadRepository,
        category::{CategoryRepository, CategorySlug, CategoryTitle},
        errors::DomainResult,
    },
};

pub struct CategoryCommandService {
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CategoryCommandService {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            category_repo,
            article_repo,
            slugger,
            clock,
        }
    }

    /// Category slugs are not made unique; two categories may share one.
    pub(super) fn slug_for(
        &self,
        title: &CategoryTitle,
        now: DateTime<Utc>,
    ) -> DomainResult<CategorySlug> {
        let slug = self.slugger.slugify(title.as_str());
        if slug.is_empty() {
            CategorySlug::new(format!("category-{}", now.timestamp()))
        } else {
            CategorySlug::new(slug)
        }
    }
}
