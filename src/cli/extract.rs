//! Extract command implementation.
//!
//! Crops each configured cell out of a sprite sheet, strips the background
//! with the job's mask and writes a square, padded, transparent PNG per icon.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::{Project, SheetJob};
use crate::error::{IconError, Result};
use crate::output::{display_path, plural, Printer};
use crate::process::{crop, extract_icon};
use crate::render::{copy_asset, ensure_dir, load_rgba, write_placeholder, write_png};

/// Which sheet job to run.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sheet {
    /// Gold weather and show-control icons
    Weather,
    /// White playlist icons
    Playlists,
}

/// Slice a sprite sheet into square transparent icons
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Sheet to extract
    #[arg(value_enum)]
    pub sheet: Sheet,

    /// Sprite sheet PNG (default: from the manifest)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Output directory (default: from the manifest)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl ExtractArgs {
    pub fn new(sheet: Sheet) -> Self {
        Self {
            sheet,
            source: None,
            output: None,
        }
    }
}

/// Resolved locations of one sheet job.
#[derive(Debug, Clone)]
pub struct JobPaths {
    pub source: PathBuf,
    pub output: PathBuf,
    /// Destination of the job's copies.
    pub copy_dir: PathBuf,
}

/// Files produced by one sheet job.
#[derive(Debug, Default)]
pub struct ExtractReport {
    pub icons: Vec<PathBuf>,
    pub copies: Vec<PathBuf>,
    pub placeholder: Option<PathBuf>,
}

pub fn run(args: ExtractArgs, project: &Project, printer: &Printer) -> Result<ExtractReport> {
    let job = match args.sheet {
        Sheet::Weather => &project.manifest.weather,
        Sheet::Playlists => &project.manifest.playlists,
    };

    let mut paths = default_paths(job, project);
    if let Some(source) = args.source {
        paths.source = source;
    }
    if let Some(output) = args.output {
        paths.output = output;
    }

    run_job(job, &paths, printer)
}

/// Run a sheet job. A missing or unreadable sheet aborts the job.
pub fn run_job(job: &SheetJob, paths: &JobPaths, printer: &Printer) -> Result<ExtractReport> {
    job.validate()?;

    printer.status("Loading", &display_path(&paths.source));
    let sheet = load_rgba(&paths.source)?;
    let (w, h) = sheet.dimensions();

    if w == 0 || h == 0 {
        return Err(IconError::Build {
            message: format!("Sheet has zero dimensions ({}x{})", w, h),
            help: Some("Input image must have non-zero width and height".to_string()),
        });
    }

    printer.info(
        "Analyzed",
        &format!(
            "{}x{} sheet, {} in {} rows",
            w,
            h,
            plural(job.icons.len(), "icon", "icons"),
            job.layout.rows.len()
        ),
    );

    ensure_dir(&paths.output)?;
    let mut report = ExtractReport::default();

    for slot in &job.icons {
        let rect = job.layout.cell(w, h, slot)?;
        printer.verbose(
            "Cropping",
            &format!(
                "{} ({},{})-({},{})",
                slot.name, rect.left, rect.top, rect.right, rect.bottom
            ),
        );

        let icon = extract_icon(crop(&sheet, rect), &job.mask, job.padding);
        let path = paths.output.join(&slot.name);
        write_png(&icon, &path)?;
        printer.status(
            "Saved",
            &format!("{} ({}x{})", slot.name, icon.width(), icon.height()),
        );
        report.icons.push(path);
    }

    for name in &job.copies {
        let to = paths.copy_dir.join(name);
        copy_asset(&paths.output.join(name), &to)?;
        printer.status("Copied", &display_path(&to));
        report.copies.push(to);
    }

    if let Some(placeholder) = &job.placeholder {
        let path = paths.output.join(&placeholder.name);
        write_placeholder(placeholder.size, &path)?;
        printer.status(
            "Created",
            &format!("{} ({}x{} placeholder)", placeholder.name, placeholder.size, placeholder.size),
        );
        report.placeholder = Some(path);
    }

    printer.success(
        "Finished",
        &format!(
            "{} extracted to {}",
            plural(report.icons.len(), "icon", "icons"),
            printer.cyan(&display_path(&paths.output))
        ),
    );

    Ok(report)
}

/// Paths of a job resolved against `project` with no overrides.
pub fn default_paths(job: &SheetJob, project: &Project) -> JobPaths {
    JobPaths {
        source: project.resolve(&job.source),
        output: project.resolve(&job.output),
        copy_dir: project.icons_dir(),
    }
}

/// Fixture helper shared with the build tests.
#[cfg(test)]
pub(crate) fn paint_cell(
    sheet: &mut image::RgbaImage,
    rect: crate::types::CellRect,
    size: u32,
    colour: image::Rgba<u8>,
) {
    let x0 = rect.left + (rect.width() - size) / 2;
    let y0 = rect.top + (rect.height() - size) / 2;
    for y in y0..y0 + size {
        for x in x0..x0 + size {
            sheet.put_pixel(x, y, colour);
        }
    }
}
