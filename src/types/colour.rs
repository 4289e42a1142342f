//! Colour type and parsing.

use std::fmt;

use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};

/// An RGBA colour value.
///
/// Serializes as a hex string (`#E6BE8A`) so manifests stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Dashboard accent gold, matching the button colour rgba(230,190,138).
    pub const GOLD: Self = Self::rgb(230, 190, 138);

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.is_ascii() {
            return Err(invalid_hex(s));
        }

        match hex.len() {
            3 | 4 => {
                let mut nibbles = [0xFu8; 4];
                for (slot, c) in nibbles.iter_mut().zip(hex.chars()) {
                    *slot = parse_hex_digit(c)?;
                }
                let [r, g, b, a] = nibbles.map(|n| n << 4 | n);
                Ok(Self::new(r, g, b, a))
            }
            6 | 8 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                let a = if hex.len() == 8 {
                    parse_hex_byte(&hex[6..8])?
                } else {
                    255
                };
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(invalid_hex(s)),
        }
    }

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Linear blend of the RGB channels toward `other`.
    ///
    /// `t` is clamped to [0, 1]; channels are truncated toward zero. Alpha
    /// is taken from `self`.
    pub fn mix(self, other: Colour, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f64 * (1.0 - t) + b as f64 * t) as u8;
        Self::new(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
            self.a,
        )
    }

    /// Multiply the RGB channels by `k`, truncating toward zero.
    pub fn scale(self, k: f64) -> Self {
        let mul = |c: u8| (c as f64 * k) as u8;
        Self::new(mul(self.r), mul(self.g), mul(self.b), self.a)
    }

    /// Replace the alpha channel.
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

impl From<Rgba<u8>> for Colour {
    fn from(p: Rgba<u8>) -> Self {
        let [r, g, b, a] = p.0;
        Self::new(r, g, b, a)
    }
}

impl From<Colour> for Rgba<u8> {
    fn from(c: Colour) -> Self {
        Rgba(c.to_rgba())
    }
}

impl TryFrom<String> for Colour {
    type Error = IconError;

    fn try_from(s: String) -> Result<Self> {
        Self::from_hex(&s)
    }
}

impl From<Colour> for String {
    fn from(c: Colour) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

fn invalid_hex(s: &str) -> IconError {
    IconError::Parse {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| IconError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| IconError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_6digit() {
        assert_eq!(Colour::from_hex("#E6BE8A").unwrap(), Colour::GOLD);
        assert_eq!(
            Colour::from_hex("#1a1a2e").unwrap(),
            Colour::rgb(0x1a, 0x1a, 0x2e)
        );
    }

    #[test]
    fn test_from_hex_3digit() {
        assert_eq!(Colour::from_hex("#FFF").unwrap(), Colour::WHITE);
        assert_eq!(
            Colour::from_hex("#ABC").unwrap(),
            Colour::rgb(0xAA, 0xBB, 0xCC)
        );
    }

    #[test]
    fn test_from_hex_with_alpha() {
        assert_eq!(
            Colour::from_hex("#FF000080").unwrap(),
            Colour::new(255, 0, 0, 128)
        );
        assert_eq!(
            Colour::from_hex("#F008").unwrap(),
            Colour::new(255, 0, 0, 0x88)
        );
    }

    #[test]
    fn test_from_hex_no_hash() {
        assert_eq!(Colour::from_hex("e6be8a").unwrap(), Colour::GOLD);
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("#GGG").is_err());
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("").is_err());
        assert!(Colour::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Colour::GOLD.to_string(), "#E6BE8A");
        assert_eq!(Colour::new(255, 0, 0, 128).to_string(), "#FF000080");
    }

    #[test]
    fn test_mix_endpoints() {
        assert_eq!(Colour::GOLD.mix(Colour::WHITE, 0.0), Colour::GOLD);
        assert_eq!(Colour::GOLD.mix(Colour::WHITE, 1.0), Colour::WHITE);
        // Out of range factors clamp.
        assert_eq!(Colour::GOLD.mix(Colour::WHITE, 4.0), Colour::WHITE);
        assert_eq!(Colour::GOLD.mix(Colour::WHITE, -1.0), Colour::GOLD);
    }

    #[test]
    fn test_mix_truncates() {
        // 230 * 0.5 + 255 * 0.5 = 242.5
        assert_eq!(Colour::GOLD.mix(Colour::WHITE, 0.5).r, 242);
    }

    #[test]
    fn test_scale_keeps_alpha() {
        let c = Colour::new(200, 100, 51, 77).scale(0.5);
        assert_eq!(c, Colour::new(100, 50, 25, 77));
    }

    #[test]
    fn test_rgba_conversion() {
        let p: Rgba<u8> = Colour::GOLD.with_alpha(9).into();
        assert_eq!(p.0, [230, 190, 138, 9]);
        assert_eq!(Colour::from(p), Colour::new(230, 190, 138, 9));
    }

    #[test]
    fn test_serde_hex_string() {
        let yaml = serde_yaml::to_string(&Colour::GOLD).unwrap();
        assert!(yaml.contains("#E6BE8A"));
        assert_eq!(serde_yaml::from_str::<Colour>(&yaml).unwrap(), Colour::GOLD);
        let back: Colour = serde_yaml::from_str("\"#ffffff\"").unwrap();
        assert_eq!(back, Colour::WHITE);
        assert!(serde_yaml::from_str::<Colour>("\"nope\"").is_err());
    }
}
