//! Download a picture or its thumbnail to disk.
//!
//! The service does not say what format it serves, so the bytes are sniffed
//! with the `image` crate: the detected format picks the file extension, and
//! the header gives the dimensions reported back to the caller. Bytes that
//! are not a recognizable image are rejected before anything is written.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::client::{ClientError, GalleryService};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("not an image: {0}")]
    Image(#[from] image::ImageError),
    #[error("invalid picture name: {0:?}")]
    InvalidName(String),
}

/// Which rendition of a picture to download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Thumbnail,
    Picture,
}

/// A downloaded image on disk.
#[derive(Debug)]
pub struct FetchedImage {
    pub picture_name: String,
    pub kind: ImageKind,
    pub path: PathBuf,
    pub format: image::ImageFormat,
    pub dimensions: (u32, u32),
    pub size_bytes: usize,
}

/// Fetch one rendition of `picture_name` and write it into `output_dir`.
///
/// The file is named after the picture (last path component, extension
/// replaced by the detected format); thumbnails get a `-thumb` suffix.
pub async fn fetch_image<S: GalleryService + ?Sized>(
    service: &S,
    picture_name: &str,
    kind: ImageKind,
    output_dir: &Path,
) -> Result<FetchedImage, FetchError> {
    let stem = Path::new(picture_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty() && *s != "..")
        .ok_or_else(|| FetchError::InvalidName(picture_name.to_string()))?;

    let bytes = match kind {
        ImageKind::Thumbnail => service.thumbnail(picture_name).await?,
        ImageKind::Picture => service.picture(picture_name).await?,
    };

    let format = image::guess_format(&bytes)?;
    let dimensions = image::ImageReader::with_format(Cursor::new(&bytes), format)
        .into_dimensions()?;

    let extension = format.extensions_str().first().copied().unwrap_or("img");
    let file_name = match kind {
        ImageKind::Thumbnail => format!("{stem}-thumb.{extension}"),
        ImageKind::Picture => format!("{stem}.{extension}"),
    };

    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(file_name);
    std::fs::write(&path, &bytes)?;
    info!(path = %path.display(), ?format, "saved image");

    Ok(FetchedImage {
        picture_name: picture_name.to_string(),
        kind,
        path,
        format,
        dimensions,
        size_bytes: bytes.len(),
    })
}
