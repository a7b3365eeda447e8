//! The page the gallery renders into.
//!
//! A [`Page`] owns the three attachment points of the gallery layout. Each
//! container is only ever replaced as a whole, never appended to, so the
//! same render always leaves the same contents behind.

use crate::config::PageConfig;
use crate::render;
use maud::{Markup, PreEscaped};
use std::fmt;

/// Attachment points of the gallery layout, by element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerId {
    /// `#buttons`: one button per tag.
    Buttons,
    /// `#thumbnails`: thumbnails for the selected tag.
    Thumbnails,
    /// `#big-picture`: detail view of the selected picture.
    BigPicture,
}

impl ContainerId {
    pub const ALL: [ContainerId; 3] = [Self::Buttons, Self::Thumbnails, Self::BigPicture];

    /// Element id, without the leading `#`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buttons => "buttons",
            Self::Thumbnails => "thumbnails",
            Self::BigPicture => "big-picture",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.strip_prefix('#').unwrap_or(id);
        Self::ALL.into_iter().find(|c| c.as_str() == id)
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.as_str())
    }
}

/// Rendered contents of the three containers.
#[derive(Debug, Clone)]
pub struct Page {
    buttons: Markup,
    thumbnails: Markup,
    big_picture: Markup,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    /// A page with all containers empty.
    pub fn new() -> Self {
        Self {
            buttons: PreEscaped(String::new()),
            thumbnails: PreEscaped(String::new()),
            big_picture: PreEscaped(String::new()),
        }
    }

    pub fn container(&self, id: ContainerId) -> &Markup {
        match id {
            ContainerId::Buttons => &self.buttons,
            ContainerId::Thumbnails => &self.thumbnails,
            ContainerId::BigPicture => &self.big_picture,
        }
    }

    /// Replace the whole contents of a container.
    pub fn replace(&mut self, id: ContainerId, content: Markup) {
        let slot = match id {
            ContainerId::Buttons => &mut self.buttons,
            ContainerId::Thumbnails => &mut self.thumbnails,
            ContainerId::BigPicture => &mut self.big_picture,
        };
        *slot = content;
    }

    pub fn buttons(&self) -> &str {
        &self.buttons.0
    }

    pub fn thumbnails(&self) -> &str {
        &self.thumbnails.0
    }

    pub fn big_picture(&self) -> &str {
        &self.big_picture.0
    }

    pub fn is_empty(&self, id: ContainerId) -> bool {
        self.container(id).0.is_empty()
    }

    /// Standalone HTML document with all three containers in place.
    pub fn render_document(&self, config: &PageConfig) -> Markup {
        render::render_document(self, config)
    }
}
