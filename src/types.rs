//! Wire types shared by the service client, the controller and the renderers.
//!
//! Field names follow the gallery service's JSON (`pictureName`, `description`,
//! `tags`), so responses deserialize straight into these structs.

use serde::{Deserialize, Serialize};

/// A tag label as returned by the tags endpoint.
pub type Tag = String;

/// One picture in the gallery, as returned by the per-tag endpoint.
///
/// Two entries describe the same picture when their `picture_name`s match;
/// the name is also the key for the thumbnail and full-image endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryEntry {
    /// Unique picture identifier, used verbatim as a URL path segment.
    pub picture_name: String,
    /// Free-form description, shown in the detail view.
    pub description: String,
    /// Tags attached to the picture, in server order.
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl GalleryEntry {
    pub fn new(picture_name: &str, description: &str, tags: &[&str]) -> Self {
        Self {
            picture_name: picture_name.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl PartialEq for GalleryEntry {
    fn eq(&self, other: &Self) -> bool {
        self.picture_name == other.picture_name
    }
}

impl Eq for GalleryEntry {}
