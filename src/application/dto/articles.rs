use crate::domain::article::{Article, ArticleImage};
use crate::domain::category::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleImageDto {
    pub url: String,
    /// Identifier on the image host. Empty for images that were never uploaded through us.
    #[serde(default, alias = "public_id")]
    pub storage_id: String,
}

impl From<ArticleImage> for ArticleImageDto {
    fn from(image: ArticleImage) -> Self {
        Self {
            url: image.url,
            storage_id: image.storage_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummaryDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
}

impl From<&Category> for CategorySummaryDto {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.into(),
            title: category.title.as_str().to_string(),
            slug: category.slug.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub images: Vec<ArticleImageDto>,
    pub category_id: i64,
    /// Populated on reads; absent when the category row could not be resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategorySummaryDto>,
    pub blog: String,
    pub blog_slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleDto {
    pub fn with_category(mut self, category: Option<&Category>) -> Self {
        self.category = category.map(CategorySummaryDto::from);
        self
    }
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            slug: article.slug.into(),
            content: article.content.into(),
            images: article.images.into_iter().map(Into::into).collect(),
            category_id: article.category_id.into(),
            category: None,
            blog: article.blog.as_str().to_string(),
            blog_slug: article.blog_slug.into(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Result of detaching one image from an article.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageRemovalDto {
    pub message: String,
    pub article: ArticleDto,
    /// What the image host answered: `ok` or `not found`.
    pub host_result: String,
}
