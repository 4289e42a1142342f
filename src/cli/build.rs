//! Build command implementation.
//!
//! Runs the recolour sets, then the weather and playlist sheet jobs.

use clap::Args;

use crate::config::Project;
use crate::error::Result;
use crate::output::{plural, Printer};

use super::extract::{self, ExtractArgs, Sheet};
use super::recolor::{self, RecolorArgs};

/// Run every recolour set and sheet job
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Skip the recolour sets
    #[arg(long)]
    pub no_recolor: bool,
}

pub fn run(args: BuildArgs, project: &Project, printer: &Printer) -> Result<usize> {
    let mut total = 0;

    if !args.no_recolor {
        total += recolor::run(RecolorArgs::default(), project, printer)?
            .written
            .len();
    }

    for sheet in [Sheet::Weather, Sheet::Playlists] {
        let report = extract::run(ExtractArgs::new(sheet), project, printer)?;
        total += report.icons.len() + report.copies.len() + report.placeholder.iter().count();
    }

    printer.success("Built", &plural(total, "asset", "assets"));
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SheetJob;
    use crate::render::write_png;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn sheet(job: &SheetJob, w: u32, h: u32, colour: Rgba<u8>) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(w, h, Rgba([0, 0, 0, 0]));
        for slot in &job.icons {
            let rect = job.layout.cell(w, h, slot).unwrap();
            extract::paint_cell(&mut img, rect, 4, colour);
        }
        img
    }

    fn setup(dir: &std::path::Path) {
        let weather = SheetJob::weather();
        write_png(
            &sheet(&weather, 250, 100, Rgba([220, 170, 60, 255])),
            &dir.join("all icons.png"),
        )
        .unwrap();

        let playlists = SheetJob::playlists();
        write_png(
            &sheet(&playlists, 240, 120, Rgba([255, 255, 255, 255])),
            &dir.join("webos-app/Icons/playlist icons.png"),
        )
        .unwrap();
    }

    #[test]
    fn test_build_all_jobs() {
        let dir = tempdir().unwrap();
        setup(dir.path());
        let icons = dir.path().join("webos-app/Icons");
        write_png(
            &RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255])),
            &icons.join("movie time.png"),
        )
        .unwrap();

        let project = Project::discover(dir.path()).unwrap();
        let total = run(BuildArgs::default(), &project, &Printer::new()).unwrap();

        // 1 recoloured + 10 weather + 2 copies + 7 playlists + fallback
        assert_eq!(total, 21);
        assert!(icons.join("movie time_gold.png").exists());
        assert!(icons.join("weather/rainy.png").exists());
        assert!(icons.join("movie_time.png").exists());
        assert!(icons.join("playlists/work_drive.png").exists());
        assert!(icons.join("playlists/fallback.png").exists());
    }

    #[test]
    fn test_build_without_recolor() {
        let dir = tempdir().unwrap();
        setup(dir.path());

        let project = Project::discover(dir.path()).unwrap();
        let args = BuildArgs { no_recolor: true };
        let total = run(args, &project, &Printer::new()).unwrap();
        assert_eq!(total, 20);
    }

    #[test]
    fn test_build_fails_without_sheets() {
        let dir = tempdir().unwrap();
        let project = Project::discover(dir.path()).unwrap();
        assert!(run(BuildArgs::default(), &project, &Printer::new()).is_err());
    }
}
