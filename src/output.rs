//! CLI output formatting.
//!
//! Every command has a `format_*` function returning lines (pure, testable)
//! and a `print_*` wrapper that writes them to stdout.
//!
//! ```text
//! Tags
//! 001 cats
//! 002 dogs
//!
//! cats (1 pictures)
//! 001 c1
//!     Description: A cat
//!     Tags: cute
//! ```

use crate::fetch::{FetchedImage, ImageKind};
use crate::page::{ContainerId, Page};
use crate::types::{GalleryEntry, Tag};
use std::path::Path;

const DESCRIPTION_WIDTH: usize = 72;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

pub fn format_tags(tags: &[Tag]) -> Vec<String> {
    let mut lines = vec!["Tags".to_string()];
    if tags.is_empty() {
        lines.push("    (none)".to_string());
    }
    for (i, tag) in tags.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), tag));
    }
    lines
}

pub fn print_tags(tags: &[Tag]) {
    for line in format_tags(tags) {
        println!("{}", line);
    }
}

pub fn format_entries(tag: &str, entries: &[GalleryEntry]) -> Vec<String> {
    let mut lines = vec![format!("{} ({} pictures)", tag, entries.len())];
    for (i, entry) in entries.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), entry.picture_name));
        if !entry.description.is_empty() {
            lines.push(format!(
                "    Description: {}",
                truncate_desc(&entry.description, DESCRIPTION_WIDTH)
            ));
        }
        if !entry.tags.is_empty() {
            lines.push(format!("    Tags: {}", entry.tags.join(", ")));
        }
    }
    lines
}

pub fn print_entries(tag: &str, entries: &[GalleryEntry]) {
    for line in format_entries(tag, entries) {
        println!("{}", line);
    }
}

/// Summary of a rendered page snapshot: what each container holds.
pub fn format_page_summary(page: &Page, output: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    for id in ContainerId::ALL {
        let html = page.container(id).0.as_str();
        let detail = match id {
            ContainerId::Buttons => format!("{} buttons", html.matches("<input").count()),
            ContainerId::Thumbnails => format!("{} thumbnails", html.matches("<img").count()),
            ContainerId::BigPicture if html.is_empty() => "empty".to_string(),
            ContainerId::BigPicture => "detail view".to_string(),
        };
        lines.push(format!("{id}: {detail}"));
    }
    lines.push(format!("Wrote {}", output.display()));
    lines
}

pub fn print_page_summary(page: &Page, output: &Path) {
    for line in format_page_summary(page, output) {
        println!("{}", line);
    }
}

pub fn format_fetched(image: &FetchedImage) -> Vec<String> {
    let kind = match image.kind {
        ImageKind::Thumbnail => "thumbnail",
        ImageKind::Picture => "picture",
    };
    let (width, height) = image.dimensions;
    vec![
        format!("{} ({})", image.picture_name, kind),
        format!(
            "    {:?} {}x{}, {} bytes",
            image.format, width, height, image.size_bytes
        ),
        format!("    Saved: {}", image.path.display()),
    ]
}

pub fn print_fetched(image: &FetchedImage) {
    for line in format_fetched(image) {
        println!("{}", line);
    }
}
