//! Core domain types for iconkit.
//!
//! - `Colour` - RGBA colour values and recolour targets
//! - `SheetLayout` - Row-based grid geometry of a sprite sheet
//! - `IconSlot` / `CellRect` - Named cells and their pixel crop boxes

mod colour;
mod layout;

pub use colour::Colour;
pub use layout::{CellRect, IconSlot, SheetLayout};
