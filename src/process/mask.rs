//! Foreground masks.
//!
//! A mask decides per pixel whether it belongs to the icon. Rejected pixels
//! become fully transparent; kept pixels may be adjusted (e.g. edge fading).
//! Thresholds are tuned against the source sheets and must not drift.

use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::types::Colour;

/// Gold test: minimum saturation.
const GOLD_MIN_SATURATION: f32 = 0.20;
/// Gold test: minimum alpha.
const GOLD_MIN_ALPHA: f32 = 120.0;
/// Gold test: green must exceed blue scaled by this factor.
const GOLD_BLUE_FACTOR: f32 = 0.85;
/// Saturated test: minimum saturation.
const SATURATED_MIN_SATURATION: f32 = 0.25;
/// Saturated test: minimum alpha.
const SATURATED_MIN_ALPHA: f32 = 150.0;
/// Kept pixels below this saturation have their alpha faded.
const EDGE_SATURATION: f32 = 0.30;

/// Bright test: minimum brightness and alpha.
const BRIGHT_MIN_BRIGHTNESS: f32 = 180.0;
const BRIGHT_MIN_ALPHA: f32 = 50.0;
/// Light test: minimum brightness and alpha.
const LIGHT_MIN_BRIGHTNESS: f32 = 120.0;
const LIGHT_MIN_ALPHA: f32 = 30.0;

/// Colourfulness `(max - min) / max` over RGB; 0 for black.
pub fn saturation(r: f32, g: f32, b: f32) -> f32 {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if max > 0.0 {
        (max - min) / max
    } else {
        0.0
    }
}

/// Mean of the RGB channels.
pub fn brightness(r: f32, g: f32, b: f32) -> f32 {
    (r + g + b) / 3.0
}

fn channels(p: Rgba<u8>) -> [f32; 4] {
    p.0.map(f32::from)
}

/// Per-pixel foreground classification.
pub trait ForegroundMask {
    /// Return the pixel to keep, or `None` if it is background.
    fn classify(&self, pixel: Rgba<u8>) -> Option<Rgba<u8>>;

    /// Apply the mask in place, clearing background pixels.
    fn apply(&self, image: &mut RgbaImage) {
        for p in image.pixels_mut() {
            *p = self.classify(*p).unwrap_or(Colour::TRANSPARENT.into());
        }
    }
}

/// Keeps gold or clearly saturated pixels; fades low-saturation edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoldMask;

impl ForegroundMask for GoldMask {
    fn classify(&self, pixel: Rgba<u8>) -> Option<Rgba<u8>> {
        let [r, g, b, a] = channels(pixel);
        let s = saturation(r, g, b);

        let is_gold =
            r > g && g > b * GOLD_BLUE_FACTOR && s > GOLD_MIN_SATURATION && a > GOLD_MIN_ALPHA;
        let is_saturated = s > SATURATED_MIN_SATURATION && a > SATURATED_MIN_ALPHA;
        if !(is_gold || is_saturated) {
            return None;
        }

        let mut kept = pixel;
        if s < EDGE_SATURATION {
            kept[3] = (a * (s / EDGE_SATURATION)) as u8;
        }
        Some(kept)
    }
}

/// Keeps bright or moderately light pixels, untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhiteMask;

impl ForegroundMask for WhiteMask {
    fn classify(&self, pixel: Rgba<u8>) -> Option<Rgba<u8>> {
        let [r, g, b, a] = channels(pixel);
        let v = brightness(r, g, b);

        let is_bright = v > BRIGHT_MIN_BRIGHTNESS && a > BRIGHT_MIN_ALPHA;
        let is_light = v > LIGHT_MIN_BRIGHTNESS && a > LIGHT_MIN_ALPHA;
        (is_bright || is_light).then_some(pixel)
    }
}

/// Mask selection as written in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskKind {
    Gold,
    White,
}

impl ForegroundMask for MaskKind {
    fn classify(&self, pixel: Rgba<u8>) -> Option<Rgba<u8>> {
        match self {
            MaskKind::Gold => GoldMask.classify(pixel),
            MaskKind::White => WhiteMask.classify(pixel),
        }
    }
}
