//! Brightness-driven recolouring of monochrome icons.

use image::{Rgba, RgbaImage};

use crate::types::Colour;

/// Pixels darker than this take the full target colour.
const DARK_BRIGHTNESS: f64 = 10.0;
/// Pixels lighter than this blend from the target colour toward white.
const LIGHT_BRIGHTNESS: f64 = 240.0;
/// Brightness span over which the white blend reaches 1.0.
const LIGHT_BLEND_SPAN: f64 = 15.0;

/// Map one pixel onto `target` by its mean brightness.
///
/// Fully transparent pixels become `(0, 0, 0, 0)`; alpha is otherwise kept.
pub fn recolor_pixel(pixel: Rgba<u8>, target: Colour) -> Rgba<u8> {
    let [r, g, b, a] = pixel.0;
    if a == 0 {
        return Colour::TRANSPARENT.into();
    }

    let avg = (r as f64 + g as f64 + b as f64) / 3.0;
    let colour = if avg < DARK_BRIGHTNESS {
        target
    } else if avg > LIGHT_BRIGHTNESS {
        target.mix(Colour::WHITE, (avg - LIGHT_BRIGHTNESS) / LIGHT_BLEND_SPAN)
    } else {
        target.scale(1.0 - avg / 255.0)
    };

    colour.with_alpha(a).into()
}

/// Recolour a whole image. Output dimensions match the input.
pub fn recolor_image(image: &RgbaImage, target: Colour) -> RgbaImage {
    RgbaImage::from_fn(image.width(), image.height(), |x, y| {
        recolor_pixel(*image.get_pixel(x, y), target)
    })
}
