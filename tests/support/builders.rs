// tests/support/builders.rs
use aventures_core::domain::article::*;
use aventures_core::domain::category::CategoryId;

use super::mocks::fixed_now;

/// Builds articles for direct seeding into the in-memory repository.
pub struct ArticleBuilder {
    id: i64,
    title: String,
    slug: String,
    content: String,
    images: Vec<(String, String)>,
    category_id: i64,
    blog: Blog,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Article".into(),
            slug: "test-article".into(),
            content: "Test content".into(),
            images: Vec::new(),
            category_id: 1,
            blog: Blog::VillersSurAuthie,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>, slug: impl Into<String>) -> Self {
        self.title = title.into();
        self.slug = slug.into();
        self
    }

    pub fn category(mut self, category_id: i64) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn blog(mut self, blog: Blog) -> Self {
        self.blog = blog;
        self
    }

    pub fn image(mut self, url: impl Into<String>, storage_id: impl Into<String>) -> Self {
        self.images.push((url.into(), storage_id.into()));
        self
    }

    pub fn build(self) -> Article {
        let now = fixed_now();
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            slug: ArticleSlug::new(self.slug).unwrap(),
            content: ArticleContent::new(self.content).unwrap(),
            images: self
                .images
                .into_iter()
                .map(|(url, id)| ArticleImage::new(url, id).unwrap())
                .collect(),
            category_id: CategoryId::new(self.category_id).unwrap(),
            blog: self.blog,
            blog_slug: self.blog.slug(),
            created_at: now,
            updated_at: now,
        }
    }
}
