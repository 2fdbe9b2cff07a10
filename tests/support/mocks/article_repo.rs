// tests/support/mocks/article_repo.rs
use async_trait::async_trait;
use aventures_core::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleSlug, ArticleUpdate, ArticleWriteRepository,
    BlogSlug, NewArticle,
};
use aventures_core::domain::category::CategoryId;
use aventures_core::domain::errors::{DomainError, DomainResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use super::{EventLog, InMemoryCommentRepo};

/// Backs both article repository traits. Rejects duplicate slugs and stale
/// `original_updated_at` values like the PostgreSQL adapter does, and deletes
/// an article's comments along with it.
#[derive(Default)]
pub struct InMemoryArticleRepo {
    rows: Mutex<Vec<Article>>,
    next_id: Mutex<i64>,
    events: EventLog,
    comments: Option<Arc<InMemoryCommentRepo>>,
    fail_deletes: AtomicBool,
}

impl InMemoryArticleRepo {
    pub fn with_events(events: EventLog) -> Self {
        Self {
            events,
            ..Self::default()
        }
    }

    pub fn with_comments(events: EventLog, comments: Arc<InMemoryCommentRepo>) -> Self {
        Self {
            events,
            comments: Some(comments),
            ..Self::default()
        }
    }

    /// Make every later delete fail as a lost database connection would.
    pub fn fail_deletes(&self) {
        self.fail_deletes.store(true, Ordering::SeqCst);
    }

    /// Insert a fully built article as-is, keeping its id.
    pub fn seed(&self, article: Article) {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id = (*next_id).max(article.id.0);
        self.rows.lock().unwrap().push(article);
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.rows.lock().unwrap().iter().find(|a| a.id.0 == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn slug_taken(rows: &[Article], slug: &ArticleSlug, except: Option<ArticleId>) -> bool {
        rows.iter()
            .any(|a| &a.slug == slug && Some(a.id) != except)
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut rows = self.rows.lock().unwrap();
        if Self::slug_taken(&rows, &article.slug, None) {
            return Err(DomainError::DuplicateSlug(article.slug.to_string()));
        }
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let row = Article {
            id: ArticleId::new(*next_id)?,
            title: article.title,
            slug: article.slug,
            content: article.content,
            images: article.images,
            category_id: article.category_id,
            blog: article.blog,
            blog_slug: article.blog_slug,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(slug) = &update.slug {
            if Self::slug_taken(&rows, slug, Some(update.id)) {
                return Err(DomainError::DuplicateSlug(slug.to_string()));
            }
        }
        let row = rows
            .iter_mut()
            .find(|a| a.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        if row.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict("article was modified concurrently".into()));
        }
        if let Some(title) = update.title {
            row.title = title;
        }
        if let Some(slug) = update.slug {
            row.slug = slug;
        }
        if let Some(content) = update.content {
            row.content = content;
        }
        if let Some(images) = update.images {
            row.images = images;
        }
        if let Some(category_id) = update.category_id {
            row.category_id = category_id;
        }
        if let Some((blog, blog_slug)) = update.blog {
            row.blog = blog;
            row.blog_slug = blog_slug;
        }
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<u64> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("connection reset".into()));
        }
        let mut rows = self.rows.lock().unwrap();
        if !rows.iter().any(|a| a.id == id) {
            return Err(DomainError::NotFound("article not found".into()));
        }
        let removed = self
            .comments
            .as_ref()
            .map_or(0, |comments| comments.purge_article(id));
        rows.retain(|a| a.id != id);
        self.events.push(format!("article:delete:{id}"));
        Ok(removed)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.rows.lock().unwrap().iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self.rows.lock().unwrap().iter().find(|a| &a.slug == slug).cloned())
    }

    async fn find_by_ids(&self, ids: &[ArticleId]) -> DomainResult<Vec<Article>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|a| ids.contains(&a.id)).cloned().collect())
    }

    async fn list(&self, blog_slug: Option<&BlogSlug>) -> DomainResult<Vec<Article>> {
        let rows = self.rows.lock().unwrap();
        let mut listed: Vec<Article> = rows
            .iter()
            .filter(|a| blog_slug.is_none_or(|wanted| &a.blog_slug == wanted))
            .cloned()
            .collect();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));
        Ok(listed)
    }

    async fn count_by_category(&self, category_id: CategoryId) -> DomainResult<u64> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|a| a.category_id == category_id).count() as u64)
    }
}
