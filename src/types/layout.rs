//! Sprite sheet layouts.
//!
//! A sheet is split into equal-height rows; each row holds its own number
//! of equal-width cells. Only the top `content_height` fraction of a row is
//! cropped so captions printed under each icon are left out.

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};

/// A named cell position on a sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSlot {
    /// Output file name, e.g. `clear.png`.
    pub name: String,
    pub col: u32,
    pub row: u32,
}

impl IconSlot {
    pub fn new(name: &str, col: u32, row: u32) -> Self {
        Self {
            name: name.to_string(),
            col,
            row,
        }
    }
}

/// Pixel crop box, right/bottom exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CellRect {
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }
}

/// Row-based grid layout of a sprite sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetLayout {
    /// Number of icons in each row, top to bottom.
    pub rows: Vec<u32>,
    /// Fraction of the row height kept, measured from the top of the row.
    pub content_height: f64,
}

impl SheetLayout {
    /// Uniform grid: `rows` rows of `cols` icons each.
    pub fn grid(cols: u32, rows: u32, content_height: f64) -> Self {
        Self {
            rows: vec![cols; rows as usize],
            content_height,
        }
    }

    /// Layout of the gold weather sheet: 5 columns x 2 rows.
    pub fn weather() -> Self {
        Self::grid(5, 2, 0.70)
    }

    /// Layout of the playlist sheet: 4 icons above 3.
    pub fn playlists() -> Self {
        Self {
            rows: vec![4, 3],
            content_height: 0.65,
        }
    }

    /// Widest row's icon count.
    pub fn max_cols(&self) -> u32 {
        self.rows.iter().copied().max().unwrap_or(0)
    }

    /// Check the layout itself, independent of any slot.
    pub fn validate(&self) -> Result<()> {
        if self.rows.is_empty() || self.rows.contains(&0) {
            return Err(IconError::Build {
                message: format!("Invalid sheet layout rows {:?}", self.rows),
                help: Some("Every row needs at least one icon".to_string()),
            });
        }
        if !(self.content_height > 0.0 && self.content_height <= 1.0) {
            return Err(IconError::Build {
                message: format!(
                    "Invalid content height {} (must be in (0, 1])",
                    self.content_height
                ),
                help: None,
            });
        }
        Ok(())
    }

    /// Compute the crop box for `slot` on a `width` x `height` sheet.
    ///
    /// Rows holding fewer icons than the widest row are shifted right by
    /// half of the unused width. Coordinates are truncated and clamped to
    /// the sheet.
    pub fn cell(&self, width: u32, height: u32, slot: &IconSlot) -> Result<CellRect> {
        let count = *self
            .rows
            .get(slot.row as usize)
            .ok_or_else(|| IconError::Build {
                message: format!(
                    "{}: row {} is outside the {}-row layout",
                    slot.name,
                    slot.row,
                    self.rows.len()
                ),
                help: None,
            })?;
        if slot.col >= count {
            return Err(IconError::Build {
                message: format!(
                    "{}: column {} is outside row {} ({} icons)",
                    slot.name, slot.col, slot.row, count
                ),
                help: None,
            });
        }

        let (w, h) = (width as f64, height as f64);
        let row_height = h / self.rows.len() as f64;
        let cell_width = w / count as f64;

        let x_offset = if count < self.max_cols() {
            (w - cell_width * count as f64) / 2.0
        } else {
            0.0
        };

        let col = slot.col as f64;
        let row = slot.row as f64;
        let to_px = |v: f64, max: u32| (v.max(0.0) as u32).min(max);

        Ok(CellRect {
            left: to_px(x_offset + cell_width * col, width),
            right: to_px(x_offset + cell_width * (col + 1.0), width),
            top: to_px(row_height * row, height),
            bottom: to_px(row_height * row + row_height * self.content_height, height),
        })
    }
}
