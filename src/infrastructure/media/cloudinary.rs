//! Cloudinary adapter for the [`ImageHost`] port, over its REST upload API.

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::media::{DestroyOutcome, ImageHost, StoredImage, UploadedImage},
};
use async_trait::async_trait;
use reqwest::{Client, multipart};
use serde::Deserialize;
use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::{str::FromStr, time::Duration};

const DEFAULT_API_BASE: &str = "https://api.cloudinary.com/v1_1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureAlgorithm {
    #[default]
    Sha1,
    Sha256,
}

impl SignatureAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureAlgorithm::Sha1 => "sha1",
            SignatureAlgorithm::Sha256 => "sha256",
        }
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha1" | "sha-1" => Ok(SignatureAlgorithm::Sha1),
            "sha256" | "sha-256" => Ok(SignatureAlgorithm::Sha256),
            other => Err(format!("unsupported signature algorithm '{other}'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub signature_algorithm: SignatureAlgorithm,
    pub timeout: Duration,
}

pub struct CloudinaryImageHost {
    config: CloudinaryConfig,
    api_base: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

impl CloudinaryImageHost {
    pub fn new(config: CloudinaryConfig) -> ApplicationResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| ApplicationError::infrastructure(format!("http client: {err}")))?;
        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: CloudinaryConfig, client: Client) -> Self {
        Self {
            config,
            api_base: DEFAULT_API_BASE.to_string(),
            client,
        }
    }

    /// Point the adapter at another API root, e.g. a local stub.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self, action: &str) -> String {
        format!("{}/{}/image/{action}", self.api_base, self.config.cloud_name)
    }

    fn sign(&self, params: &[(&str, String)]) -> String {
        match self.config.signature_algorithm {
            SignatureAlgorithm::Sha1 => sign_params::<Sha1>(params, &self.config.api_secret),
            SignatureAlgorithm::Sha256 => sign_params::<Sha256>(params, &self.config.api_secret),
        }
    }

    fn signed_form(&self, mut params: Vec<(&'static str, String)>) -> multipart::Form {
        params.push(("timestamp", chrono::Utc::now().timestamp().to_string()));
        let signature = self.sign(&params);

        let mut form = multipart::Form::new()
            .text("api_key", self.config.api_key.clone())
            .text("signature", signature)
            .text(
                "signature_algorithm",
                self.config.signature_algorithm.as_str(),
            );
        for (key, value) in params {
            form = form.text(key, value);
        }
        form
    }

    async fn send(&self, action: &str, form: multipart::Form) -> ApplicationResult<String> {
        let response = self
            .client
            .post(self.endpoint(action))
            .multipart(form)
            .send()
            .await
            .map_err(|err| {
                ApplicationError::upstream(format!("image host {action} failed"), err.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|err| {
            ApplicationError::upstream(format!("image host {action} failed"), err.to_string())
        })?;

        if !status.is_success() {
            return Err(ApplicationError::upstream(
                format!("image host {action} failed ({status})"),
                body,
            ));
        }
        Ok(body)
    }
}

/// Cloudinary request signature: parameters sorted by name, joined as
/// `k=v&k=v`, secret appended, hex digest.
fn sign_params<D: Digest>(params: &[(&str, String)], secret: &str) -> String {
    let mut sorted: Vec<_> = params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));

    let joined = sorted
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = D::new();
    hasher.update(joined.as_bytes());
    hasher.update(secret.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

fn parse_destroy_result(result: &str) -> Option<DestroyOutcome> {
    match result {
        "ok" => Some(DestroyOutcome::Deleted),
        "not found" => Some(DestroyOutcome::NotFound),
        _ => None,
    }
}

#[async_trait]
impl ImageHost for CloudinaryImageHost {
    async fn upload(&self, image: UploadedImage, folder: &str) -> ApplicationResult<StoredImage> {
        let mut part = multipart::Part::bytes(image.data.to_vec())
            .file_name(image.file_name.unwrap_or_else(|| "upload".to_string()));
        if let Some(content_type) = image.content_type.as_deref() {
            part = part
                .mime_str(content_type)
                .map_err(|err| ApplicationError::validation(format!("content type: {err}")))?;
        }

        let form = self
            .signed_form(vec![("folder", folder.to_string())])
            .part("file", part);
        let body = self.send("upload", form).await?;

        let parsed: UploadResponse = serde_json::from_str(&body).map_err(|err| {
            ApplicationError::upstream("unexpected image host response", err.to_string())
        })?;

        Ok(StoredImage {
            url: parsed.secure_url,
            storage_id: parsed.public_id,
        })
    }

    async fn destroy(&self, storage_id: &str) -> ApplicationResult<DestroyOutcome> {
        let form = self.signed_form(vec![("public_id", storage_id.to_string())]);
        let body = self.send("destroy", form).await?;

        let parsed: DestroyResponse = serde_json::from_str(&body).map_err(|err| {
            ApplicationError::upstream("unexpected image host response", err.to_string())
        })?;

        parse_destroy_result(&parsed.result).ok_or_else(|| {
            ApplicationError::upstream("image host refused to delete the image", body)
        })
    }
}
