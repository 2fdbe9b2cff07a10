// tests/support/mocks/racing_article_repo.rs
use async_trait::async_trait;
use aventures_core::domain::article::{
    Article, ArticleId, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use aventures_core::domain::errors::{DomainError, DomainResult};
use std::sync::{Arc, Mutex};

use super::InMemoryArticleRepo;

/// Write side that loses the next `collisions` slug races: before each losing
/// write a rival article grabs the requested slug, then the write is rejected
/// with `DuplicateSlug`. Later writes go straight through.
pub struct RacingArticleRepo {
    inner: Arc<InMemoryArticleRepo>,
    collisions: Mutex<usize>,
}

impl RacingArticleRepo {
    pub fn new(inner: Arc<InMemoryArticleRepo>, collisions: usize) -> Self {
        Self {
            inner,
            collisions: Mutex::new(collisions),
        }
    }

    fn lose_race(&self) -> bool {
        let mut remaining = self.collisions.lock().unwrap();
        if *remaining == 0 {
            return false;
        }
        *remaining -= 1;
        true
    }

    async fn rival_takes(&self, article: NewArticle) -> DomainError {
        let slug = article.slug.to_string();
        self.inner
            .insert(article)
            .await
            .expect("rival insert should win the slug");
        DomainError::DuplicateSlug(slug)
    }
}

fn rival_of(article: &Article) -> NewArticle {
    NewArticle {
        title: article.title.clone(),
        slug: article.slug.clone(),
        content: article.content.clone(),
        images: Vec::new(),
        category_id: article.category_id,
        blog: article.blog,
        blog_slug: article.blog_slug.clone(),
        created_at: article.created_at,
        updated_at: article.updated_at,
    }
}

#[async_trait]
impl ArticleWriteRepository for RacingArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        if self.lose_race() {
            return Err(self.rival_takes(article.clone()).await);
        }
        self.inner.insert(article).await
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        if let Some(slug) = &update.slug {
            if self.lose_race() {
                let current = self
                    .inner
                    .get(update.id.0)
                    .expect("racing update targets a stored article");
                let mut rival = rival_of(&current);
                rival.slug = slug.clone();
                return Err(self.rival_takes(rival).await);
            }
        }
        self.inner.update(update).await
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<u64> {
        self.inner.delete(id).await
    }
}
