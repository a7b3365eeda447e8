//! Gallery service client.
//!
//! [`GalleryService`] is the seam between the controller and the network:
//! the controller only ever talks to the trait, so it can run against the
//! real HTTP service ([`HttpGalleryService`]) or an in-memory double.
//!
//! JSON requests carry a cache-busting query parameter (`dummy=<random>` by
//! default) so intermediary caches never serve a stale tag or entry list.
//! Image requests do not; thumbnails and pictures are immutable per name.
//!
//! Only the success path produces data. Transport failures, non-2xx
//! statuses and undecodable bodies all come back as [`ClientError`] and
//! callers decide what to leave on screen.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::ServiceConfig;
use crate::endpoints::Endpoints;
use crate::types::{GalleryEntry, Tag};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{url} returned {status}")]
    Status { url: String, status: StatusCode },
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("URL cannot be used as a base: {0}")]
    NotABase(String),
}

/// Read-only access to a gallery service.
#[async_trait]
pub trait GalleryService: Send + Sync {
    /// All tags known to the service, in server order.
    async fn tags(&self) -> Result<Vec<Tag>, ClientError>;

    /// Entries carrying `tag`, in server order.
    async fn entries_for_tag(&self, tag: &str) -> Result<Vec<GalleryEntry>, ClientError>;

    /// Thumbnail bytes for a picture.
    async fn thumbnail(&self, picture_name: &str) -> Result<Vec<u8>, ClientError>;

    /// Full-resolution bytes for a picture.
    async fn picture(&self, picture_name: &str) -> Result<Vec<u8>, ClientError>;
}

/// [`GalleryService`] over HTTP(S) with `reqwest`.
pub struct HttpGalleryService {
    client: reqwest::Client,
    endpoints: Endpoints,
    cache_bust_param: Option<String>,
}

impl HttpGalleryService {
    pub fn new(config: &ServiceConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }

        Ok(Self {
            client: builder.build()?,
            endpoints: Endpoints::new(&config.base_url)?,
            cache_bust_param: config
                .cache_bust
                .then(|| config.cache_bust_param.clone()),
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        let mut request = self.client.get(url.clone());
        if let Some(param) = &self.cache_bust_param {
            let value = rand::random::<f64>().to_string();
            request = request.query(&[(param.as_str(), value.as_str())]);
        }

        debug!(%url, "GET");
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "gallery service request failed");
            return Err(ClientError::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(response.json::<T>().await?)
    }

    async fn get_bytes(&self, url: Url) -> Result<Vec<u8>, ClientError> {
        debug!(%url, "GET");
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "image request failed");
            return Err(ClientError::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl GalleryService for HttpGalleryService {
    #[instrument(skip(self))]
    async fn tags(&self) -> Result<Vec<Tag>, ClientError> {
        let tags: Vec<Tag> = self.get_json(self.endpoints.tags()?).await?;
        debug!(count = tags.len(), "received tags");
        Ok(tags)
    }

    #[instrument(skip(self))]
    async fn entries_for_tag(&self, tag: &str) -> Result<Vec<GalleryEntry>, ClientError> {
        let entries: Vec<GalleryEntry> = self.get_json(self.endpoints.entries(tag)?).await?;
        debug!(count = entries.len(), "received entries");
        Ok(entries)
    }

    #[instrument(skip(self))]
    async fn thumbnail(&self, picture_name: &str) -> Result<Vec<u8>, ClientError> {
        self.get_bytes(self.endpoints.thumbnail(picture_name)?).await
    }

    #[instrument(skip(self))]
    async fn picture(&self, picture_name: &str) -> Result<Vec<u8>, ClientError> {
        self.get_bytes(self.endpoints.picture(picture_name)?).await
    }
}
