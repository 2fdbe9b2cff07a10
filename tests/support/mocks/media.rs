// tests/support/mocks/media.rs
use async_trait::async_trait;
use aventures_core::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::media::{DestroyOutcome, ImageHost, StoredImage, UploadedImage},
};
use std::collections::HashSet;
use std::sync::Mutex;

use super::EventLog;

/// Image host double. Destroys are logged as `image:destroy:<id>`; ids can be
/// marked as unknown to the host or as failing.
#[derive(Default)]
pub struct FakeImageHost {
    events: EventLog,
    missing: Mutex<HashSet<String>>,
    failing: Mutex<HashSet<String>>,
    uploads: Mutex<Vec<UploadedImage>>,
}

impl FakeImageHost {
    pub fn with_events(events: EventLog) -> Self {
        Self {
            events,
            ..Self::default()
        }
    }

    pub fn mark_missing(&self, storage_id: &str) {
        self.missing.lock().unwrap().insert(storage_id.to_string());
    }

    pub fn mark_failing(&self, storage_id: &str) {
        self.failing.lock().unwrap().insert(storage_id.to_string());
    }

    pub fn uploads(&self) -> Vec<UploadedImage> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageHost for FakeImageHost {
    async fn upload(&self, image: UploadedImage, folder: &str) -> ApplicationResult<StoredImage> {
        let mut uploads = self.uploads.lock().unwrap();
        uploads.push(image);
        let storage_id = format!("{folder}/img{}", uploads.len());
        self.events.push(format!("image:upload:{storage_id}"));
        Ok(StoredImage {
            url: format!("https://img.test/{storage_id}.jpg"),
            storage_id,
        })
    }

    async fn destroy(&self, storage_id: &str) -> ApplicationResult<DestroyOutcome> {
        self.events.push(format!("image:destroy:{storage_id}"));
        if self.failing.lock().unwrap().contains(storage_id) {
            return Err(ApplicationError::upstream(
                "image host request failed",
                "503 Service Unavailable",
            ));
        }
        if self.missing.lock().unwrap().contains(storage_id) {
            return Ok(DestroyOutcome::NotFound);
        }
        Ok(DestroyOutcome::Deleted)
    }
}
