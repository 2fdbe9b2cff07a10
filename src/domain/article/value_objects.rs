use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::normalize;
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleTitle> for String {
    fn from(value: ArticleTitle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleSlug(String);

impl ArticleSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleSlug> for String {
    fn from(value: ArticleSlug) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent(String);

impl ArticleContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("content cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ArticleContent> for String {
    fn from(value: ArticleContent) -> Self {
        value.0
    }
}

/// The fixed set of blogs an article can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Blog {
    VillersSurAuthie,
    DhierEtDaujourdhui,
    SommePhotos,
}

impl Blog {
    pub const ALL: [Blog; 3] = [
        Blog::VillersSurAuthie,
        Blog::DhierEtDaujourdhui,
        Blog::SommePhotos,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Blog::VillersSurAuthie => "Villers-sur-Authie",
            Blog::DhierEtDaujourdhui => "D'hier et d'aujourd'hui",
            Blog::SommePhotos => "Somme-photos",
        }
    }

    pub fn slug(&self) -> BlogSlug {
        BlogSlug(normalize(self.as_str()))
    }
}

impl fmt::Display for Blog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Blog {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('\u{2019}', "'");
        Blog::ALL
            .into_iter()
            .find(|blog| blog.as_str() == wanted)
            .ok_or_else(|| DomainError::Validation(format!("unknown blog '{s}'")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlogSlug(String);

impl BlogSlug {
    /// Accepts any string; used for filtering, where an unknown slug simply matches nothing.
    pub fn from_query(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<BlogSlug> for String {
    fn from(value: BlogSlug) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleImage {
    pub url: String,
    pub storage_id: String,
}

impl ArticleImage {
    pub fn new(url: impl Into<String>, storage_id: impl Into<String>) -> DomainResult<Self> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(DomainError::Validation("image url cannot be empty".into()));
        }
        Ok(Self {
            url,
            storage_id: storage_id.into(),
        })
    }

    /// Images saved without a storage id were never hosted by us and need no remote cleanup.
    pub fn is_hosted(&self) -> bool {
        !self.storage_id.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blog_slugs_are_derived_from_names() {
        assert_eq!(Blog::VillersSurAuthie.slug().as_str(), "villers-sur-authie");
        assert_eq!(Blog::DhierEtDaujourdhui.slug().as_str(), "dhier-et-daujourdhui");
        assert_eq!(Blog::SommePhotos.slug().as_str(), "somme-photos");
    }

    #[test]
    fn blog_parses_display_names() {
        for blog in Blog::ALL {
            assert_eq!(blog.as_str().parse::<Blog>().unwrap(), blog);
        }
        assert_eq!(
            "D’hier et d’aujourd’hui".parse::<Blog>().unwrap(),
            Blog::DhierEtDaujourdhui
        );
        assert!("Autre blog".parse::<Blog>().is_err());
    }

    #[test]
    fn blank_title_and_content_are_rejected() {
        assert!(ArticleTitle::new("  ").is_err());
        assert!(ArticleContent::new("").is_err());
        assert!(ArticleId::new(0).is_err());
    }

    #[test]
    fn image_without_storage_id_is_not_hosted() {
        let image = ArticleImage::new("https://example.test/a.jpg", "").unwrap();
        assert!(!image.is_hosted());
        assert!(ArticleImage::new(" ", "id").is_err());
    }
}
