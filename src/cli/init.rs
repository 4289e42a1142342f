//! Init command implementation.
//!
//! Writes an `iconkit.yaml` holding the stock recolour sets and sheet jobs,
//! ready to be edited.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{Manifest, MANIFEST_FILENAME};
use crate::error::{IconError, Result};
use crate::output::{display_path, plural, Printer};

/// Write a default iconkit.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing iconkit.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(IconError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let manifest = Manifest::default();
    let yaml = format!(
        "# iconkit manifest. Relative paths resolve against this file's directory.\n{}",
        manifest.to_yaml()?
    );

    fs::write(&manifest_path, yaml).map_err(|e| IconError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    let sheet_icons = manifest.weather.icons.len() + manifest.playlists.icons.len();
    printer.info(
        "Configured",
        &format!(
            "{}, {}",
            plural(manifest.recolor.len(), "recolour set", "recolour sets"),
            plural(sheet_icons, "sheet icon", "sheet icons")
        ),
    );
    printer.success("Created", &display_path(&manifest_path));

    Ok(())
}
