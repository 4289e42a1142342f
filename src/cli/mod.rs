pub mod build;
pub mod completions;
pub mod extract;
pub mod init;
pub mod recolor;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::Project;
use crate::error::Result;
use crate::output::Printer;

/// iconkit - Dashboard icon recolouring and sprite sheet extraction
#[derive(Parser, Debug)]
#[command(name = "iconkit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Manifest to use instead of ./iconkit.yaml
    #[arg(long, short, global = true)]
    pub manifest: Option<PathBuf>,

    /// Print crop boxes and other detail
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recolour monochrome icons to their accent colours
    Recolor(recolor::RecolorArgs),

    /// Slice a sprite sheet into square transparent icons
    Extract(extract::ExtractArgs),

    /// Run every recolour set and sheet job
    Build(build::BuildArgs),

    /// Write a default iconkit.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Load the explicit manifest, or discover one in the working directory.
pub fn load_project(manifest: Option<&Path>, printer: &Printer) -> Result<Project> {
    let project = match manifest {
        Some(path) => Project::open(path)?,
        None => Project::discover(".")?,
    };
    printer.verbose("Manifest", &project.describe());
    Ok(project)
}
