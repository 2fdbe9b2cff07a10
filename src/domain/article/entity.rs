// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleId, ArticleImage, ArticleSlug, ArticleTitle, Blog, BlogSlug,
};
use crate::domain::category::CategoryId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub images: Vec<ArticleImage>,
    pub category_id: CategoryId,
    pub blog: Blog,
    pub blog_slug: BlogSlug,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn set_content(&mut self, content: ArticleContent, now: DateTime<Utc>) {
        self.content = content;
        self.updated_at = now;
    }

    pub fn set_blog(&mut self, blog: Blog, now: DateTime<Utc>) {
        self.blog_slug = blog.slug();
        self.blog = blog;
        self.updated_at = now;
    }

    pub fn set_category(&mut self, category_id: CategoryId, now: DateTime<Utc>) {
        self.category_id = category_id;
        self.updated_at = now;
    }

    pub fn replace_images(&mut self, images: Vec<ArticleImage>, now: DateTime<Utc>) {
        self.images = images;
        self.updated_at = now;
    }

    pub fn image(&self, storage_id: &str) -> Option<&ArticleImage> {
        self.images.iter().find(|img| img.storage_id == storage_id)
    }

    /// Drop every image carrying `storage_id`; returns whether anything was removed.
    pub fn remove_image(&mut self, storage_id: &str, now: DateTime<Utc>) -> bool {
        let before = self.images.len();
        self.images.retain(|img| img.storage_id != storage_id);
        let removed = self.images.len() != before;
        if removed {
            self.updated_at = now;
        }
        removed
    }

    pub fn hosted_images(&self) -> impl Iterator<Item = &ArticleImage> {
        self.images.iter().filter(|img| img.is_hosted())
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub images: Vec<ArticleImage>,
    pub category_id: CategoryId,
    pub blog: Blog,
    pub blog_slug: BlogSlug,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub slug: Option<ArticleSlug>,
    pub content: Option<ArticleContent>,
    pub images: Option<Vec<ArticleImage>>,
    pub category_id: Option<CategoryId>,
    pub blog: Option<(Blog, BlogSlug)>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            content: None,
            images: None,
            category_id: None,
            blog: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle, slug: ArticleSlug) -> Self {
        self.title = Some(title);
        self.slug = Some(slug);
        self
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_images(mut self, images: Vec<ArticleImage>) -> Self {
        self.images = Some(images);
        self
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_blog(mut self, blog: Blog, blog_slug: BlogSlug) -> Self {
        self.blog = Some((blog, blog_slug));
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.images.is_none()
            && self.category_id.is_none()
            && self.blog.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_article() -> Article {
        let now = Utc::now();
        Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("title").unwrap(),
            slug: ArticleSlug::new("title").unwrap(),
            content: ArticleContent::new("body").unwrap(),
            images: vec![
                ArticleImage::new("https://img.test/a.jpg", "articles/a").unwrap(),
                ArticleImage::new("https://img.test/b.jpg", "articles/b").unwrap(),
                ArticleImage::new("https://elsewhere.test/c.jpg", "").unwrap(),
            ],
            category_id: CategoryId::new(1).unwrap(),
            blog: Blog::SommePhotos,
            blog_slug: Blog::SommePhotos.slug(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn set_blog_rederives_blog_slug() {
        let mut article = sample_article();
        let now = Utc::now();
        article.set_blog(Blog::DhierEtDaujourdhui, now);
        assert_eq!(article.blog_slug.as_str(), "dhier-et-daujourdhui");
        assert_eq!(article.updated_at, now);
    }

    #[test]
    fn remove_image_only_touches_matching_storage_id() {
        let mut article = sample_article();
        let later = article.updated_at + chrono::Duration::seconds(5);
        assert!(article.remove_image("articles/a", later));
        assert_eq!(article.images.len(), 2);
        assert_eq!(article.updated_at, later);

        let unchanged = article.updated_at;
        assert!(!article.remove_image("articles/zzz", later + chrono::Duration::seconds(5)));
        assert_eq!(article.updated_at, unchanged);
    }

    #[test]
    fn hosted_images_skip_external_urls() {
        let article = sample_article();
        let ids: Vec<_> = article.hosted_images().map(|i| i.storage_id.as_str()).collect();
        assert_eq!(ids, vec!["articles/a", "articles/b"]);
    }
}
