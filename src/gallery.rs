//! The gallery controller: tag loading, tag selection and picture selection.
//!
//! Control flows strictly forward:
//!
//! ```text
//! load_tags ──(tag button)──► select_tag ──(thumbnail)──► select_picture
//!  #buttons                   #thumbnails                  #big-picture
//! ```
//!
//! The controller owns the page, the service client and the list of entries
//! returned by the most recent successful tag selection. That list is the
//! only state shared between steps: a new selection replaces it wholesale,
//! and picture lookups only ever see the latest one.
//!
//! Every operation takes `&mut self`, so selections on one controller are
//! applied in the order they are issued.
//!
//! ## Failures
//!
//! A failed request leaves the page and the entry list exactly as they were
//! and hands the error back. A picture name missing from the current list
//! (for instance a thumbnail from an earlier tag) is not an error: nothing
//! changes and [`Gallery::select_picture`] returns `false`.

use tracing::{debug, info, warn};

use crate::client::{ClientError, GalleryService};
use crate::endpoints::ImageLinks;
use crate::page::{ContainerId, Page};
use crate::render;
use crate::types::GalleryEntry;

/// A user action on a rendered control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// A tag button, carrying the unescaped tag.
    Tag(String),
    /// A thumbnail, carrying its picture name.
    Picture(String),
}

/// What an activation changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Thumbnails were replaced with this many entries.
    Thumbnails(usize),
    /// The detail view shows the requested picture.
    Detail,
    /// Nothing changed.
    Unchanged,
}

pub struct Gallery<S> {
    service: S,
    links: ImageLinks,
    page: Page,
    current_entries: Vec<GalleryEntry>,
}

impl<S: GalleryService> Gallery<S> {
    pub fn new(service: S, links: ImageLinks) -> Self {
        Self {
            service,
            links,
            page: Page::new(),
            current_entries: Vec::new(),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Entries from the most recent successful tag selection.
    pub fn current_entries(&self) -> &[GalleryEntry] {
        &self.current_entries
    }

    /// Fetch all tags and render one button per tag into `#buttons`.
    ///
    /// Returns the number of buttons rendered.
    pub async fn load_tags(&mut self) -> Result<usize, ClientError> {
        let tags = self.service.tags().await.inspect_err(|e| {
            warn!(error = %e, "could not load tags");
        })?;

        self.page
            .replace(ContainerId::Buttons, render::render_tag_buttons(&tags));
        info!(count = tags.len(), "rendered tag buttons");
        Ok(tags.len())
    }

    /// Fetch entries for `tag`, make them the current list and render their
    /// thumbnails into `#thumbnails`.
    ///
    /// Returns the number of thumbnails rendered.
    pub async fn select_tag(&mut self, tag: &str) -> Result<usize, ClientError> {
        let entries = self.service.entries_for_tag(tag).await.inspect_err(|e| {
            warn!(tag, error = %e, "could not load entries; keeping previous thumbnails");
        })?;

        self.page.replace(
            ContainerId::Thumbnails,
            render::render_thumbnails(&entries, &self.links),
        );
        self.current_entries = entries;
        info!(tag, count = self.current_entries.len(), "rendered thumbnails");
        Ok(self.current_entries.len())
    }

    /// Show the entry named `picture_name` in `#big-picture`.
    ///
    /// Returns `false`, leaving the page untouched, when the name is not in
    /// the current entry list.
    pub fn select_picture(&mut self, picture_name: &str) -> bool {
        let Some(entry) = self
            .current_entries
            .iter()
            .find(|e| e.picture_name == picture_name)
        else {
            debug!(picture_name, "picture not in current entries; ignoring");
            return false;
        };

        self.page.replace(
            ContainerId::BigPicture,
            render::render_detail(entry, &self.links),
        );
        debug!(picture_name, tags = entry.tags.len(), "rendered detail view");
        true
    }

    /// Dispatch a user action to the matching handler.
    pub async fn activate(&mut self, activation: &Activation) -> Result<Outcome, ClientError> {
        match activation {
            Activation::Tag(tag) => Ok(Outcome::Thumbnails(self.select_tag(tag).await?)),
            Activation::Picture(name) => Ok(if self.select_picture(name) {
                Outcome::Detail
            } else {
                Outcome::Unchanged
            }),
        }
    }
}
