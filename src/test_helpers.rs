//! Shared test utilities.
//!
//! [`StaticService`] is an in-memory [`GalleryService`] that answers from
//! fixed data and records which tags were requested, so controller tests run
//! without a network.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let service = StaticService::new()
//!     .with_tags(&["cats"])
//!     .with_entries("cats", vec![GalleryEntry::new("c1", "A cat", &["cute"])]);
//! ```

use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::BTreeMap;
use std::io::Cursor;
use std::sync::Mutex;

use crate::client::{ClientError, GalleryService};
use crate::types::{GalleryEntry, Tag};

// =========================================================================
// In-memory gallery service
// =========================================================================

#[derive(Default)]
pub struct StaticService {
    tags: Vec<Tag>,
    entries: BTreeMap<String, Vec<GalleryEntry>>,
    thumbnails: BTreeMap<String, Vec<u8>>,
    pictures: BTreeMap<String, Vec<u8>>,
    fail_tags: bool,
    requested_tags: Mutex<Vec<String>>,
}

impl StaticService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Register the response for `tag`. Unregistered tags answer 404.
    pub fn with_entries(mut self, tag: &str, entries: Vec<GalleryEntry>) -> Self {
        self.entries.insert(tag.to_string(), entries);
        self
    }

    pub fn with_thumbnail(mut self, picture_name: &str, bytes: Vec<u8>) -> Self {
        self.thumbnails.insert(picture_name.to_string(), bytes);
        self
    }

    pub fn with_picture(mut self, picture_name: &str, bytes: Vec<u8>) -> Self {
        self.pictures.insert(picture_name.to_string(), bytes);
        self
    }

    /// Make the tags endpoint fail with a 500.
    pub fn failing_tags(mut self) -> Self {
        self.fail_tags = true;
        self
    }

    /// Tags passed to `entries_for_tag`, in call order.
    pub fn requested_tags(&self) -> Vec<String> {
        self.requested_tags.lock().unwrap().clone()
    }
}

fn status_error(path: &str, status: StatusCode) -> ClientError {
    ClientError::Status {
        url: format!("memory:///rest/gallery_service/{path}"),
        status,
    }
}

#[async_trait]
impl GalleryService for StaticService {
    async fn tags(&self) -> Result<Vec<Tag>, ClientError> {
        if self.fail_tags {
            return Err(status_error("tags", StatusCode::INTERNAL_SERVER_ERROR));
        }
        Ok(self.tags.clone())
    }

    async fn entries_for_tag(&self, tag: &str) -> Result<Vec<GalleryEntry>, ClientError> {
        self.requested_tags.lock().unwrap().push(tag.to_string());
        self.entries
            .get(tag)
            .cloned()
            .ok_or_else(|| status_error(tag, StatusCode::NOT_FOUND))
    }

    async fn thumbnail(&self, picture_name: &str) -> Result<Vec<u8>, ClientError> {
        self.thumbnails.get(picture_name).cloned().ok_or_else(|| {
            status_error(&format!("thumbnail/{picture_name}"), StatusCode::NOT_FOUND)
        })
    }

    async fn picture(&self, picture_name: &str) -> Result<Vec<u8>, ClientError> {
        self.pictures.get(picture_name).cloned().ok_or_else(|| {
            status_error(&format!("picture/{picture_name}"), StatusCode::NOT_FOUND)
        })
    }
}

// =========================================================================
// Image fixtures
// =========================================================================

/// Encode a blank RGB image of the given size in `format`.
pub fn encoded_image(width: u32, height: u32, format: image::ImageFormat) -> Vec<u8> {
    let img = image::DynamicImage::ImageRgb8(image::RgbImage::new(width, height));
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, format).unwrap();
    bytes.into_inner()
}
