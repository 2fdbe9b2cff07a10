use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, BlogSlug};
use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Fails with `DomainError::DuplicateSlug` when the slug is already stored.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Fails with `DomainError::Conflict` when `original_updated_at` no longer matches.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    /// Removes the article and its comments together; returns how many comments went with it.
    async fn delete(&self, id: ArticleId) -> DomainResult<u64>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    async fn find_by_ids(&self, ids: &[ArticleId]) -> DomainResult<Vec<Article>>;
    /// Newest first.
    async fn list(&self, blog_slug: Option<&BlogSlug>) -> DomainResult<Vec<Article>>;
    async fn count_by_category(&self, category_id: CategoryId) -> DomainResult<u64>;
}
