//! Reading source images and writing finished assets.

mod png;

pub use png::{copy_asset, ensure_dir, load_rgba, write_placeholder, write_png};
