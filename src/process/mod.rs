//! Pixel processing for icon assets.
//!
//! Recolouring of single icons, foreground masks for sprite sheet cells,
//! and the trim/pad/square geometry shared by the extractors.

mod geometry;
mod mask;
mod recolor;

use image::RgbaImage;

pub use geometry::{add_padding, blank, content_bounds, crop, make_square, trim_transparent, Bounds};
pub use mask::{brightness, saturation, ForegroundMask, GoldMask, MaskKind, WhiteMask};
pub use recolor::{recolor_image, recolor_pixel};

/// Pixels with alpha at or below this are trimmed away.
pub const TRIM_THRESHOLD: u8 = 10;

/// Default transparent border added around extracted icons.
pub const DEFAULT_PADDING: u32 = 10;

/// Largest padding a sheet job may request.
pub const MAX_PADDING: u32 = 4096;

/// Turn a cropped sheet cell into a finished icon.
///
/// Applies `mask`, trims to content, pads by `padding` and centres the
/// result on a square canvas.
pub fn extract_icon<M: ForegroundMask + ?Sized>(
    mut cell: RgbaImage,
    mask: &M,
    padding: u32,
) -> RgbaImage {
    mask.apply(&mut cell);
    let trimmed = trim_transparent(&cell, TRIM_THRESHOLD);
    make_square(&add_padding(&trimmed, padding))
}
