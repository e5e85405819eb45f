//! Image decoding for crop sources.
//!
//! The host fetches source bytes itself (network, file picker, camera
//! roll) and runs them through here before handing the content to the
//! view. Format detection rides on the `image` crate's guessing; JPEG
//! EXIF orientation is honored so the widget always sees upright
//! content.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};
use thiserror::Error;

use crate::bitmap::Bitmap;

/// Errors from turning source bytes into a [`Bitmap`].
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes are not a recognizable image format
    #[error("unrecognized image data: {0}")]
    Unrecognized(String),

    /// The format was recognized but the data is broken
    #[error("corrupted image data: {0}")]
    Corrupted(String),
}

/// Decode source bytes into upright RGBA content.
///
/// # Errors
///
/// Returns [`DecodeError::Unrecognized`] when no format matches and
/// [`DecodeError::Corrupted`] when decoding fails partway.
pub fn decode_image(bytes: &[u8]) -> Result<Bitmap, DecodeError> {
    let orientation = exif_orientation(bytes);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::Unrecognized(e.to_string()))?;
    let img = reader
        .decode()
        .map_err(|e| DecodeError::Corrupted(e.to_string()))?;

    Ok(Bitmap::from_rgba_image(orient(img, orientation).into_rgba8()))
}

/// EXIF orientation tag value; 1 (upright) when absent or unreadable.
fn exif_orientation(bytes: &[u8]) -> u32 {
    let mut cursor = Cursor::new(bytes);
    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .unwrap_or(1),
        Err(_) => 1,
    }
}

/// Undo the camera's stored rotation/mirroring. Unknown values pass the
/// image through untouched.
fn orient(img: DynamicImage, orientation: u32) -> DynamicImage {
    match orientation {
        2 => img.fliph(),
        3 => img.rotate180(),
        4 => img.flipv(),
        5 => img.rotate90().fliph(),
        6 => img.rotate90(),
        7 => img.rotate270().fliph(),
        8 => img.rotate270(),
        _ => img,
    }
}
