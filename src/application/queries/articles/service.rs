use std::{collections::HashMap, sync::Arc};

use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::{Article, ArticleReadRepository},
        category::{CategoryId, CategoryRepository},
    },
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            read_repo,
            category_repo,
        }
    }

    /// Attach category summaries with a single lookup for the whole batch.
    pub(super) async fn with_categories(
        &self,
        articles: Vec<Article>,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let mut ids: Vec<CategoryId> = articles.iter().map(|a| a.category_id).collect();
        ids.sort_by_key(|id| id.0);
        ids.dedup();

        let categories: HashMap<CategoryId, _> = self
            .category_repo
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        Ok(articles
            .into_iter()
            .map(|article| {
                let category = categories.get(&article.category_id);
                ArticleDto::from(article).with_category(category)
            })
            .collect())
    }

    pub(super) async fn single(&self, article: Article) -> ApplicationResult<ArticleDto> {
        let category = self.category_repo.find_by_id(article.category_id).await?;
        Ok(ArticleDto::from(article).with_category(category.as_ref()))
    }
}
