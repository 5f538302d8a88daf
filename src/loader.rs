//! Resolving candidate URLs into decoded images.
//!
//! One attempt per URL with no retries; callers decide what a failure means.

use async_trait::async_trait;
use image::DynamicImage;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::error::LoadError;

#[async_trait]
pub trait ImageLoader: Send + Sync {
    async fn load(&self, url: &str) -> Result<DynamicImage, LoadError>;
}

/// Fetches images over HTTP(S).
#[derive(Clone, Debug, Default)]
pub struct HttpImageLoader {
    client: Client,
}

impl HttpImageLoader {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageLoader for HttpImageLoader {
    async fn load(&self, url: &str) -> Result<DynamicImage, LoadError> {
        let request_err = |source| LoadError::Request {
            url: url.to_string(),
            source,
        };

        tracing::debug!("Fetching image: {}", url);
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "image/*")
            .send()
            .await
            .map_err(request_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // A missing content type is left to the decoder to judge.
        if let Some(content_type) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            if !content_type.trim_start().to_ascii_lowercase().starts_with("image/") {
                return Err(LoadError::NotAnImage {
                    url: url.to_string(),
                    content_type: content_type.to_string(),
                });
            }
        }

        let bytes = response.bytes().await.map_err(request_err)?;
        tracing::debug!("Decoding {} bytes from {}", bytes.len(), url);
        Ok(image::load_from_memory(&bytes)?)
    }
}

/// Reads images from `file://` URLs or plain filesystem paths.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsImageLoader;

#[async_trait]
impl ImageLoader for FsImageLoader {
    async fn load(&self, url: &str) -> Result<DynamicImage, LoadError> {
        let path = url.strip_prefix("file://").unwrap_or(url);
        let bytes = tokio::fs::read(path).await.map_err(|source| LoadError::Io {
            path: path.to_string(),
            source,
        })?;
        Ok(image::load_from_memory(&bytes)?)
    }
}

/// Dispatches on URL scheme: `http`/`https` over the network, `file` or no scheme from disk.
#[derive(Clone, Debug, Default)]
pub struct DefaultImageLoader {
    http: HttpImageLoader,
    fs: FsImageLoader,
}

impl DefaultImageLoader {
    pub fn new() -> Self {
        Self::default()
    }
}

fn scheme(url: &str) -> Option<String> {
    let (scheme, _) = url.split_once("://")?;
    let valid = !scheme.is_empty()
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then(|| scheme.to_ascii_lowercase())
}

#[async_trait]
impl ImageLoader for DefaultImageLoader {
    async fn load(&self, url: &str) -> Result<DynamicImage, LoadError> {
        match scheme(url).as_deref() {
            Some("http") | Some("https") => self.http.load(url).await,
            Some("file") | None => self.fs.load(url).await,
            Some(_) => Err(LoadError::UnsupportedScheme {
                url: url.to_string(),
            }),
        }
    }
}
