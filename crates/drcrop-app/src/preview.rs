//! Down-scaled RGB preview of an uploaded image for terminal rendering
//!
//! The TUI draws two pixel rows per cell with the upper half block, so the
//! preview height is kept even where possible.

use image::imageops::FilterType;

/// Maximum preview width in pixels (one pixel per terminal column)
pub const PREVIEW_MAX_WIDTH: u32 = 48;

/// Maximum preview height in pixels (two pixels per terminal row)
pub const PREVIEW_MAX_HEIGHT: u32 = 32;

/// Decoded, down-scaled image pixels
#[derive(Clone, PartialEq, Eq)]
pub struct ImagePreview {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl std::fmt::Debug for ImagePreview {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePreview")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl ImagePreview {
    /// Decode `bytes` and shrink to fit within `max_width` x `max_height`.
    ///
    /// Returns `None` when the bytes cannot be decoded; the caller falls back
    /// to a placeholder.
    pub fn from_bytes(bytes: &[u8], max_width: u32, max_height: u32) -> Option<Self> {
        let img = match image::load_from_memory(bytes) {
            Ok(img) => img,
            Err(e) => {
                tracing::debug!("Preview decode failed: {}", e);
                return None;
            }
        };

        let img = if img.width() > max_width || img.height() > max_height {
            img.resize(max_width, max_height, FilterType::Triangle)
        } else {
            img
        };

        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        let pixels = rgb.pixels().map(|p| p.0).collect();

        Some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGB at (x, y), `None` outside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }
}
