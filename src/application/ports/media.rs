// src/application/ports/media.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use bytes::Bytes;

#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    pub url: String,
    pub storage_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestroyOutcome {
    Deleted,
    /// The host had no asset under that id; callers treat this as success.
    NotFound,
}

impl DestroyOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            DestroyOutcome::Deleted => "ok",
            DestroyOutcome::NotFound => "not found",
        }
    }
}

/// External image hosting. Failures surface as `ApplicationError::Upstream`.
#[async_trait]
pub trait ImageHost: Send + Sync {
    async fn upload(&self, image: UploadedImage, folder: &str) -> ApplicationResult<StoredImage>;
    async fn destroy(&self, storage_id: &str) -> ApplicationResult<DestroyOutcome>;
}
