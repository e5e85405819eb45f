//! Crop extraction: carve the crop window's pixels out of the content
//! as it is shown on screen.
//!
//! The native source rarely matches its on-screen size, so extraction
//! scales it to the current content bounds first and then copies the
//! window's overlap. All dimension math truncates toward zero, matching
//! the integer pixel grid the host displays.

use image::imageops::{self, FilterType};
use thiserror::Error;

use crate::bitmap::{Bitmap, BYTES_PER_PIXEL};
use crate::geometry::Rect;

/// Errors from the crop result channel. Gesture input never produces
/// these; they belong to extraction itself.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// No decoded content is attached to the view
    #[error("no source content attached")]
    NoContent,

    /// The window's overlap with the content has a negative dimension
    #[error("crop region is degenerate: {width}x{height}")]
    InvalidRegion { width: i32, height: i32 },

    /// The pixel copy itself failed
    #[error("pixel copy failed: {0}")]
    CopyFailed(String),
}

/// Extract the `restriction` window from `source` as displayed within
/// `bounds`.
///
/// Offsets of the window inside the bounds are computed edge by edge; a
/// negative offset means the window pokes past the content on that edge
/// and shrinks the copied region instead. A region with a negative
/// dimension fails with [`ExtractError::InvalidRegion`]; a zero
/// dimension yields an empty bitmap.
pub fn extract(source: &Bitmap, bounds: &Rect, restriction: &Rect) -> Result<Bitmap, ExtractError> {
    let target_w = bounds.width() as i32;
    let target_h = bounds.height() as i32;
    if target_w <= 0 || target_h <= 0 {
        return Err(ExtractError::InvalidRegion {
            width: target_w,
            height: target_h,
        });
    }

    let mut left_offset = (restriction.left - bounds.left) as i32;
    let mut top_offset = (restriction.top - bounds.top) as i32;
    let right_offset = (bounds.right - restriction.right) as i32;
    let bottom_offset = (bounds.bottom - restriction.bottom) as i32;
    let mut width = restriction.width() as i32;
    let mut height = restriction.height() as i32;

    if left_offset < 0 {
        width += left_offset;
        left_offset = 0;
    }
    if top_offset < 0 {
        height += top_offset;
        top_offset = 0;
    }
    if right_offset < 0 {
        width += right_offset;
    }
    if bottom_offset < 0 {
        height += bottom_offset;
    }
    if width < 0 || height < 0 {
        return Err(ExtractError::InvalidRegion { width, height });
    }

    let scaled = scale_to(source, target_w as u32, target_h as u32)?;
    copy_region(
        &scaled,
        left_offset as u32,
        top_offset as u32,
        width as u32,
        height as u32,
    )
}

/// Scale the source to its on-screen size. Nearest-neighbor: extraction
/// reproduces what the screen shows, it does not resample beyond that.
fn scale_to(source: &Bitmap, width: u32, height: u32) -> Result<Bitmap, ExtractError> {
    if source.width == width && source.height == height {
        return Ok(source.clone());
    }
    let img = source
        .to_rgba_image()
        .ok_or_else(|| ExtractError::CopyFailed("source buffer length mismatch".to_string()))?;
    let resized = imageops::resize(&img, width, height, FilterType::Nearest);
    Ok(Bitmap::from_rgba_image(resized))
}

fn copy_region(
    scaled: &Bitmap,
    left: u32,
    top: u32,
    width: u32,
    height: u32,
) -> Result<Bitmap, ExtractError> {
    if left + width > scaled.width || top + height > scaled.height {
        return Err(ExtractError::CopyFailed(format!(
            "region {}x{} at ({}, {}) escapes the {}x{} surface",
            width, height, left, top, scaled.width, scaled.height
        )));
    }
    let row_bytes = width as usize * BYTES_PER_PIXEL;
    let mut pixels = Vec::with_capacity(row_bytes * height as usize);
    for row in top..top + height {
        let start = (row as usize * scaled.width as usize + left as usize) * BYTES_PER_PIXEL;
        pixels.extend_from_slice(&scaled.pixels[start..start + row_bytes]);
    }
    Ok(Bitmap::new(width, height, pixels))
}


// ===== Property-Based Tests =====
