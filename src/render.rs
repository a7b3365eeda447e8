//! HTML rendering for the three gallery containers.
//!
//! Each function produces the complete contents of one container; callers
//! replace the container with the result rather than appending to it.
//!
//! | Function | Container |
//! |----------|-----------|
//! | [`render_tag_buttons`] | `#buttons` |
//! | [`render_thumbnails`] | `#thumbnails` |
//! | [`render_detail`] | `#big-picture` |
//!
//! Uses [maud](https://maud.lambda.xyz/), so every interpolated string (tag
//! labels, descriptions, badges, attribute values) is HTML-escaped. Picture
//! names flow into image URLs unchanged apart from attribute escaping.
//!
//! Activation targets are carried as data attributes: `data-tag` on tag
//! buttons and `data-picture` on thumbnail links. Their unescaped values are
//! what [`crate::gallery::Activation`] expects.

use crate::config::PageConfig;
use crate::endpoints::ImageLinks;
use crate::page::{ContainerId, Page};
use crate::types::{GalleryEntry, Tag};
use maud::{DOCTYPE, Markup, html};

/// One button per tag, in order.
pub fn render_tag_buttons(tags: &[Tag]) -> Markup {
    html! {
        @for tag in tags {
            input.btn.btn-primary.tag type="button" value=(tag) data-tag=(tag);
        }
    }
}

/// One clickable thumbnail per entry, in order.
pub fn render_thumbnails(entries: &[GalleryEntry], links: &ImageLinks) -> Markup {
    html! {
        @for entry in entries {
            a data-picture=(entry.picture_name) {
                img src=(links.thumbnail(&entry.picture_name));
            }
        }
    }
}

/// Full image, description and tag badges for a single entry.
pub fn render_detail(entry: &GalleryEntry, links: &ImageLinks) -> Markup {
    html! {
        img.card-img-top src=(links.picture(&entry.picture_name));
        br;
        h4 { b { (entry.description) } }
        br;
        div.container.centered-container {
            h4 {
                @for tag in &entry.tags {
                    span.badge.badge-primary { (tag) }
                }
            }
        }
    }
}

/// Renders a standalone HTML document embedding the page's containers.
pub fn render_document(page: &Page, config: &PageConfig) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (config.title) }
                @if !config.stylesheet.is_empty() {
                    link rel="stylesheet" href=(config.stylesheet);
                }
            }
            body {
                main.container {
                    div id=(ContainerId::Buttons.as_str()) { (page.container(ContainerId::Buttons)) }
                    div id=(ContainerId::Thumbnails.as_str()) { (page.container(ContainerId::Thumbnails)) }
                    div id=(ContainerId::BigPicture.as_str()) { (page.container(ContainerId::BigPicture)) }
                }
            }
        }
    }
}
