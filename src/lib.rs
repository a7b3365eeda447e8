//! # Tag Gallery
//!
//! Client for tag-based image gallery services. The service knows a set of
//! tags and, per tag, a list of pictures with descriptions; this crate fetches
//! both and renders the gallery page: tag buttons, thumbnails for the chosen
//! tag, and a detail view for the chosen thumbnail.
//!
//! # Architecture: Three Steps, One Direction
//!
//! ```text
//! 1. Load tags        GET tags         →  #buttons      (one button per tag)
//! 2. Select a tag     GET {tag}        →  #thumbnails   (one thumbnail per entry)
//! 3. Select a picture lookup by name   →  #big-picture  (image, description, badges)
//! ```
//!
//! Each step is triggered by a control the previous step rendered, and no
//! step reaches back into an earlier one. Step 3 needs no request: it reads
//! the entry list kept from step 2.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`gallery`] | The controller: owns page, service and current entries; one method per step |
//! | [`client`] | `GalleryService` trait and its `reqwest` implementation |
//! | [`endpoints`] | Service URLs and image `src` links |
//! | [`render`] | Maud fragments for each container, plus the standalone document |
//! | [`page`] | The three containers and their ids |
//! | [`types`] | `GalleryEntry` as sent by the service |
//! | [`config`] | `config.toml` loading, merging and validation |
//! | [`fetch`] | Download a picture or thumbnail to disk |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Owned State Instead of a Global
//!
//! The list of entries for the selected tag lives in the [`gallery::Gallery`]
//! value next to the page it was rendered into. Picture selection can only
//! see the list that produced the visible thumbnails, and tests drive the
//! whole flow against an in-memory service.
//!
//! ## Escaping Through Maud
//!
//! Everything the service sends back as text (tags, descriptions) is
//! interpolated through Maud and therefore escaped. Picture names are the
//! exception: they are the backend's own identifiers and are used directly
//! as URL path segments.
//!
//! ## Failures Keep the Page
//!
//! A failed request never clears a container. The previous buttons,
//! thumbnails and entry list stay in place and the error is returned to the
//! caller, which decides whether to report it.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod fetch;
pub mod gallery;
pub mod output;
pub mod page;
pub mod render;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
