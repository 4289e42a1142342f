//! Axis-aligned crop, trim, padding and squaring of RGBA buffers.

use image::{imageops, RgbaImage};

use crate::types::{CellRect, Colour};

/// Tight bounding box of image content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Find the box enclosing every pixel whose alpha exceeds `threshold`.
///
/// Returns `None` when no pixel qualifies.
pub fn content_bounds(image: &RgbaImage, threshold: u8) -> Option<Bounds> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0;
    let mut max_y = 0;

    for (x, y, p) in image.enumerate_pixels() {
        if p[3] > threshold {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    (min_x != u32::MAX).then(|| Bounds {
        x: min_x,
        y: min_y,
        width: max_x - min_x + 1,
        height: max_y - min_y + 1,
    })
}

/// Crop to the content bounds. Images without content come back unchanged.
pub fn trim_transparent(image: &RgbaImage, threshold: u8) -> RgbaImage {
    match content_bounds(image, threshold) {
        Some(b) => imageops::crop_imm(image, b.x, b.y, b.width, b.height).to_image(),
        None => image.clone(),
    }
}

/// Surround the image with `padding` transparent pixels on every side.
///
/// Pixels are copied exactly, partial alpha included; nothing is blended
/// through the image's own alpha. `padding` must leave the canvas size
/// within `u32`; sheet jobs cap it at `MAX_PADDING`.
pub fn add_padding(image: &RgbaImage, padding: u32) -> RgbaImage {
    let mut canvas = blank(
        image.width() + padding * 2,
        image.height() + padding * 2,
    );
    imageops::replace(&mut canvas, image, padding as i64, padding as i64);
    canvas
}

/// Centre the image on a transparent square canvas of its largest side.
pub fn make_square(image: &RgbaImage) -> RgbaImage {
    let size = image.width().max(image.height());
    let mut canvas = blank(size, size);
    let x = (size - image.width()) / 2;
    let y = (size - image.height()) / 2;
    imageops::replace(&mut canvas, image, x as i64, y as i64);
    canvas
}

/// Copy out the pixels inside `rect`.
pub fn crop(image: &RgbaImage, rect: CellRect) -> RgbaImage {
    imageops::crop_imm(image, rect.left, rect.top, rect.width(), rect.height()).to_image()
}

/// Fully transparent canvas.
pub fn blank(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Colour::TRANSPARENT.into())
}
