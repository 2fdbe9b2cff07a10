use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::BlogSlug,
};

#[derive(Debug, Default)]
pub struct ListArticlesQuery {
    pub blog_slug: Option<String>,
}

impl ArticleQueryService {
    /// Newest first. A blank filter lists every blog.
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<Vec<ArticleDto>> {
        let blog_slug = query
            .blog_slug
            .filter(|s| !s.trim().is_empty())
            .map(BlogSlug::from_query);
        let articles = self.read_repo.list(blog_slug.as_ref()).await?;
        self.with_categories(articles).await
    }
}
