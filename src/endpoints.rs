//! URL construction for the gallery service.
//!
//! The service exposes four read-only endpoints below `rest/gallery_service/`:
//!
//! ```text
//! tags                      → JSON array of tag strings
//! {tag}                     → JSON array of gallery entries
//! thumbnail/{pictureName}   → thumbnail image bytes
//! picture/{pictureName}     → full-resolution image bytes
//! ```
//!
//! [`Endpoints`] builds absolute URLs for the client. [`ImageLinks`] builds the
//! `src` values written into rendered `<img>` elements, which may stay
//! relative to the page.
//!
//! Tags are percent-encoded as a single path segment. Picture names are
//! trusted: they are inserted as-is, matching the backend's naming scheme.

use crate::client::ClientError;
use url::Url;

/// Path of the gallery service relative to the application root.
pub const SERVICE_PATH: &str = "rest/gallery_service";

/// Absolute endpoint URLs, resolved against a configured base URL.
#[derive(Debug, Clone)]
pub struct Endpoints {
    root: Url,
}

impl Endpoints {
    /// Resolve the service root from the application base URL.
    ///
    /// A missing trailing slash is added, so `http://host/app` and
    /// `http://host/app/` resolve to the same service root.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let mut base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            return Err(ClientError::NotABase(base_url.to_string()));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let root = base.join(&format!("{SERVICE_PATH}/"))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Url {
        &self.root
    }

    pub fn tags(&self) -> Result<Url, ClientError> {
        Ok(self.root.join("tags")?)
    }

    /// Entries endpoint for `tag`, with the tag encoded as one path segment.
    pub fn entries(&self, tag: &str) -> Result<Url, ClientError> {
        let mut url = self.root.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::NotABase(self.root.to_string()))?
            .pop_if_empty()
            .push(tag);
        Ok(url)
    }

    pub fn thumbnail(&self, picture_name: &str) -> Result<Url, ClientError> {
        Ok(self.root.join(&format!("thumbnail/{picture_name}"))?)
    }

    pub fn picture(&self, picture_name: &str) -> Result<Url, ClientError> {
        Ok(self.root.join(&format!("picture/{picture_name}"))?)
    }
}

/// Image `src` values for rendered markup.
///
/// With an empty prefix the links are relative (`rest/gallery_service/...`)
/// and resolve against whatever page embeds the fragments.
#[derive(Debug, Clone, Default)]
pub struct ImageLinks {
    prefix: String,
}

impl ImageLinks {
    pub fn new(image_base: &str) -> Self {
        let prefix = if image_base.is_empty() || image_base.ends_with('/') {
            image_base.to_string()
        } else {
            format!("{image_base}/")
        };
        Self { prefix }
    }

    pub fn thumbnail(&self, picture_name: &str) -> String {
        format!("{}{SERVICE_PATH}/thumbnail/{picture_name}", self.prefix)
    }

    pub fn picture(&self, picture_name: &str) -> String {
        format!("{}{SERVICE_PATH}/picture/{picture_name}", self.prefix)
    }
}
