//! Crop result export to PNG and JPEG bytes.
//!
//! The widget hands crop results back as raw RGBA; hosts that want a
//! file (upload, download link, share sheet) encode here.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

use crate::bitmap::{Bitmap, BYTES_PER_PIXEL};

/// Errors that can occur while encoding a crop result.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel data length doesn't match the dimensions
    #[error("invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// The codec itself failed
    #[error("encoding failed: {0}")]
    EncodingFailed(String),
}

fn validate(bitmap: &Bitmap) -> Result<(), EncodeError> {
    if bitmap.width == 0 || bitmap.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: bitmap.width,
            height: bitmap.height,
        });
    }
    let expected = bitmap.width as usize * bitmap.height as usize * BYTES_PER_PIXEL;
    if bitmap.pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: bitmap.pixels.len(),
        });
    }
    Ok(())
}

/// Encode a crop result as PNG, alpha preserved.
pub fn encode_png(bitmap: &Bitmap) -> Result<Vec<u8>, EncodeError> {
    validate(bitmap)?;
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            &bitmap.pixels,
            bitmap.width,
            bitmap.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;
    Ok(bytes)
}

/// Encode a crop result as JPEG at the given quality (1-100, clamped).
/// JPEG carries no alpha channel, so it is dropped.
pub fn encode_jpeg(bitmap: &Bitmap, quality: u8) -> Result<Vec<u8>, EncodeError> {
    validate(bitmap)?;
    let quality = quality.clamp(1, 100);

    let rgb: Vec<u8> = bitmap
        .pixels
        .chunks_exact(BYTES_PER_PIXEL)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();

    let mut cursor = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut cursor, quality)
        .write_image(&rgb, bitmap.width, bitmap.height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(width: u32, height: u32) -> Bitmap {
        Bitmap::new(
            width,
            height,
            vec![128; width as usize * height as usize * 4],
        )
    }

    #[test]
    fn test_encode_png_magic_bytes() {
        let bytes = encode_png(&gray(16, 16)).unwrap();
        assert_eq!(&bytes[0..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_encode_jpeg_magic_bytes() {
        let bytes = encode_jpeg(&gray(16, 16), 90).unwrap();
        assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_encode_rejects_zero_dimensions() {
        let empty = Bitmap::new(0, 16, Vec::new());
        assert!(matches!(
            encode_png(&empty),
            Err(EncodeError::InvalidDimensions { .. })
        ));
        assert!(encode_jpeg(&empty, 90).is_err());
    }

    #[test]
    fn test_encode_rejects_short_buffer() {
        let bad = Bitmap::new(4, 4, vec![0; 7]);
        assert!(matches!(
            encode_png(&bad),
            Err(EncodeError::InvalidPixelData {
                expected: 64,
                actual: 7
            })
        ));
    }

    #[test]
    fn test_encode_jpeg_clamps_quality() {
        // 0 and 255 both clamp into range instead of failing
        assert!(encode_jpeg(&gray(8, 8), 0).is_ok());
        assert!(encode_jpeg(&gray(8, 8), 255).is_ok());
    }

    #[test]
    fn test_jpeg_smaller_at_lower_quality() {
        let mut bitmap = gray(64, 64);
        // Noise so quality actually matters
        for (i, px) in bitmap.pixels.iter_mut().enumerate() {
            *px = (i * 31 % 251) as u8;
        }
        let high = encode_jpeg(&bitmap, 95).unwrap();
        let low = encode_jpeg(&bitmap, 20).unwrap();
        assert!(low.len() < high.len());
    }
}
