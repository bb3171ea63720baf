//! Profile picture hosting.
//!
//! Pictures are not stored locally: they are uploaded to an Imgur compatible
//! API and the user row keeps the public link plus the delete hash needed to
//! remove the image once it gets replaced.

use std::time::Duration;

use async_trait::async_trait;
use nutrimeal_shared::{Error, bail};
use reqwest::{
    Client,
    multipart::{Form, Part},
};
use serde::Deserialize;

use crate::config::ImgurConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub link: String,
    pub delete_hash: String,
}

#[async_trait]
pub trait ImageHost: Send + Sync {
    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> nutrimeal_shared::Result<UploadedImage>;

    async fn delete(&self, delete_hash: &str) -> nutrimeal_shared::Result<()>;
}

#[derive(Deserialize)]
struct Envelope<T> {
    success: bool,
    #[serde(default)]
    status: u16,
    data: Option<T>,
}

#[derive(Deserialize)]
struct ImageData {
    #[serde(default)]
    link: String,
    #[serde(default)]
    deletehash: String,
}

pub struct ImgurClient {
    client: Client,
    client_id: String,
    base_url: String,
}

impl ImgurClient {
    pub fn new(config: &ImgurConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            client_id: config.client_id.to_owned(),
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn authorization(&self) -> String {
        format!("Client-ID {}", self.client_id)
    }
}

fn upstream(err: reqwest::Error) -> Error {
    tracing::error!("image host request failed: {err}");
    Error::Server("Failed to reach image host".to_owned())
}

#[async_trait]
impl ImageHost for ImgurClient {
    #[tracing::instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> nutrimeal_shared::Result<UploadedImage> {
        let part = Part::bytes(bytes).file_name(filename.to_owned());
        let form = Form::new().part("image", part);

        let envelope = self
            .client
            .post(format!("{}/image", self.base_url))
            .header("Authorization", self.authorization())
            .multipart(form)
            .send()
            .await
            .map_err(upstream)?
            .json::<Envelope<ImageData>>()
            .await
            .map_err(upstream)?;

        match envelope {
            Envelope {
                success: true,
                data: Some(data),
                ..
            } => Ok(UploadedImage {
                link: data.link,
                delete_hash: data.deletehash,
            }),
            Envelope { status, .. } => bail!("Image upload failed. Status: {status}"),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, delete_hash: &str) -> nutrimeal_shared::Result<()> {
        if delete_hash.is_empty() {
            nutrimeal_shared::user!("Delete hash is required");
        }

        let envelope = self
            .client
            .delete(format!("{}/image/{delete_hash}", self.base_url))
            .header("Authorization", self.authorization())
            .send()
            .await
            .map_err(upstream)?
            .json::<Envelope<serde_json::Value>>()
            .await
            .map_err(upstream)?;

        if !envelope.success {
            bail!(
                "Failed to delete image from image host. Status: {}",
                envelope.status
            );
        }

        Ok(())
    }
}
