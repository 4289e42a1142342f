//! Recolor command implementation.
//!
//! Produces `<stem>_<suffix>.png` next to each configured source icon.
//! Missing sources are reported and skipped; the batch carries on.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::{Project, RecolorSet};
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::process::recolor_image;
use crate::render::{load_rgba, write_png};
use crate::types::Colour;

/// Recolour monochrome icons to their accent colours
#[derive(Args, Debug, Default)]
pub struct RecolorArgs {
    /// Icon directory (default: `icons` from the manifest)
    #[arg(long)]
    pub icons: Option<PathBuf>,
}

/// Files written and sources skipped by a recolour run.
#[derive(Debug, Default)]
pub struct RecolorReport {
    pub written: Vec<PathBuf>,
    pub missing: Vec<PathBuf>,
}

pub fn run(args: RecolorArgs, project: &Project, printer: &Printer) -> Result<RecolorReport> {
    let icons_dir = args.icons.unwrap_or_else(|| project.icons_dir());
    recolor_sets(&project.manifest.recolor, &icons_dir, printer)
}

/// Run every set against the icons in `icons_dir`.
pub fn recolor_sets(
    sets: &[RecolorSet],
    icons_dir: &Path,
    printer: &Printer,
) -> Result<RecolorReport> {
    let mut report = RecolorReport::default();

    for set in sets {
        for name in &set.icons {
            let input = icons_dir.join(name);
            if !input.is_file() {
                printer.warning("Warning", &format!("{} not found", display_path(&input)));
                report.missing.push(input);
                continue;
            }

            let output = icons_dir.join(output_name(name, &set.suffix));
            recolor_file(&input, &output, set.colour)?;
            printer.success("Created", &display_path(&output));
            report.written.push(output);
        }
    }

    printer.success(
        "Finished",
        &format!("{} colourized", plural(report.written.len(), "icon", "icons")),
    );
    if !report.missing.is_empty() {
        printer.warning(
            "Skipped",
            &plural(report.missing.len(), "missing icon", "missing icons"),
        );
    }

    Ok(report)
}

/// Recolour a single file.
pub fn recolor_file(input: &Path, output: &Path, colour: Colour) -> Result<()> {
    let source = load_rgba(input)?;
    write_png(&recolor_image(&source, colour), output)
}

/// `movie time.png` + `gold` -> `movie time_gold.png`.
fn output_name(name: &str, suffix: &str) -> String {
    let stem = Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name);
    format!("{}_{}.png", stem, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Manifest;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn test_output_name() {
        assert_eq!(output_name("movie time.png", "gold"), "movie time_gold.png");
        assert_eq!(output_name("end show.png", "white"), "end show_white.png");
        assert_eq!(output_name("noext", "gold"), "noext_gold.png");
    }

    #[test]
    fn test_recolor_default_sets() {
        let dir = tempdir().unwrap();
        let icons = dir.path().join("webos-app/Icons");
        for name in ["open awning.png", "movie time.png", "close awning.png", "end show.png"] {
            let mut img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0]));
            img.put_pixel(1, 1, Rgba([0, 0, 0, 255]));
            write_png(&img, &icons.join(name)).unwrap();
        }

        let project = Project::discover(dir.path()).unwrap();
        let report = run(RecolorArgs::default(), &project, &Printer::new()).unwrap();

        assert_eq!(report.written.len(), 4);
        assert!(report.missing.is_empty());

        let gold = load_rgba(&icons.join("movie time_gold.png")).unwrap();
        assert_eq!(gold.dimensions(), (4, 4));
        assert_eq!(gold.get_pixel(1, 1).0, [230, 190, 138, 255]);
        assert_eq!(gold.get_pixel(0, 0).0, [0, 0, 0, 0]);

        let white = load_rgba(&icons.join("end show_white.png")).unwrap();
        assert_eq!(white.get_pixel(1, 1).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_recolor_skips_missing_icons() {
        let dir = tempdir().unwrap();
        write_png(
            &RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255])),
            &dir.path().join("open awning.png"),
        )
        .unwrap();

        let manifest = Manifest::default();
        let report = recolor_sets(&manifest.recolor, dir.path(), &Printer::new()).unwrap();

        assert_eq!(report.written, vec![dir.path().join("open awning_gold.png")]);
        assert_eq!(report.missing.len(), 3);
        assert!(dir.path().join("open awning_gold.png").exists());
    }

    #[test]
    fn test_recolor_icons_override() {
        let dir = tempdir().unwrap();
        let elsewhere = dir.path().join("elsewhere");
        write_png(
            &RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255])),
            &elsewhere.join("close awning.png"),
        )
        .unwrap();

        let project = Project::discover(dir.path()).unwrap();
        let args = RecolorArgs {
            icons: Some(elsewhere.clone()),
        };
        let report = run(args, &project, &Printer::new()).unwrap();

        assert_eq!(report.written, vec![elsewhere.join("close awning_white.png")]);
    }

    #[test]
    fn test_recolor_corrupt_icon_is_fatal() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("movie time.png"), b"garbage").unwrap();

        let manifest = Manifest::default();
        assert!(recolor_sets(&manifest.recolor, dir.path(), &Printer::new()).is_err());
    }
}
