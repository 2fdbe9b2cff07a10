use std::sync::Arc;

use crate::application::{
    dto::StoredImageDto,
    error::{ApplicationError, ApplicationResult},
    ports::media::{ImageHost, UploadedImage},
};

/// Folder on the image host that receives article pictures.
pub const UPLOAD_FOLDER: &str = "articles";

pub struct MediaCommandService {
    image_host: Arc<dyn ImageHost>,
}

impl MediaCommandService {
    pub fn new(image_host: Arc<dyn ImageHost>) -> Self {
        Self { image_host }
    }

    pub async fn upload_image(&self, image: UploadedImage) -> ApplicationResult<StoredImageDto> {
        if image.data.is_empty() {
            return Err(ApplicationError::validation("no file uploaded"));
        }

        let size = image.data.len();
        let stored = self.image_host.upload(image, UPLOAD_FOLDER).await?;
        tracing::info!(storage_id = %stored.storage_id, size, "image uploaded");
        Ok(stored.into())
    }
}
