//! iconkit - Dashboard icon asset preparation
//!
//! Recolours monochrome icons to fixed accent colours and slices sprite
//! sheets into square, padded, transparent icon files.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod process;
pub mod render;
pub mod types;

pub use config::{Manifest, Project, RecolorSet, SheetJob, MANIFEST_FILENAME};
pub use error::{IconError, Result};
pub use process::{
    extract_icon, recolor_image, recolor_pixel, ForegroundMask, GoldMask, MaskKind, WhiteMask,
};
pub use render::{load_rgba, write_png};
pub use types::{CellRect, Colour, IconSlot, SheetLayout};
