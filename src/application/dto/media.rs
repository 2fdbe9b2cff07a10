use crate::application::ports::media::StoredImage;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoredImageDto {
    pub url: String,
    pub storage_id: String,
}

impl From<StoredImage> for StoredImageDto {
    fn from(image: StoredImage) -> Self {
        Self {
            url: image.url,
            storage_id: image.storage_id,
        }
    }
}
