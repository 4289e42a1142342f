//! Project manifest (iconkit.yaml) parsing.
//!
//! The manifest names every input and output of the icon jobs. Each field
//! falls back to the dashboard's stock tables, so an empty file (or no file
//! at all) reproduces the standard asset set.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};
use crate::process::{MaskKind, DEFAULT_PADDING, MAX_PADDING};
use crate::types::{Colour, IconSlot, SheetLayout};

/// Project manifest loaded from iconkit.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Top-level icon directory: recolour inputs and outputs, and the
    /// destination of sheet job copies.
    pub icons: PathBuf,

    /// Recolour sets, applied in order.
    pub recolor: Vec<RecolorSet>,

    /// Gold weather icon sheet.
    pub weather: SheetJob,

    /// White playlist icon sheet.
    pub playlists: SheetJob,
}

/// Icons recoloured to one target colour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecolorSet {
    /// Appended to the file stem: `movie time.png` -> `movie time_gold.png`.
    pub suffix: String,
    pub colour: Colour,
    /// File names inside the icon directory.
    pub icons: Vec<String>,
}

/// A sprite sheet sliced into individual icons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetJob {
    pub source: PathBuf,
    pub output: PathBuf,
    pub mask: MaskKind,
    pub layout: SheetLayout,

    #[serde(default = "default_padding")]
    pub padding: u32,

    pub icons: Vec<IconSlot>,

    /// Extracted icons also copied into the top-level icon directory.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub copies: Vec<String>,

    /// Empty fallback image written after the icons.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<Placeholder>,
}

/// Transparent square written as a fallback asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
    pub name: String,
    #[serde(default = "default_placeholder_size")]
    pub size: u32,
}

fn default_padding() -> u32 {
    DEFAULT_PADDING
}

fn default_placeholder_size() -> u32 {
    200
}

fn default_icons_dir() -> PathBuf {
    PathBuf::from("webos-app/Icons")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            icons: default_icons_dir(),
            recolor: vec![
                RecolorSet {
                    suffix: "gold".to_string(),
                    colour: Colour::GOLD,
                    icons: vec!["open awning.png".to_string(), "movie time.png".to_string()],
                },
                RecolorSet {
                    suffix: "white".to_string(),
                    colour: Colour::WHITE,
                    icons: vec!["close awning.png".to_string(), "end show.png".to_string()],
                },
            ],
            weather: SheetJob::weather(),
            playlists: SheetJob::playlists(),
        }
    }
}

impl SheetJob {
    /// Gold weather sheet: 5x2 grid, copies the show controls upward.
    pub fn weather() -> Self {
        let names = [
            ["clear.png", "partlycloudy.png", "cloudy.png", "rainy.png", "pouring.png"],
            ["snowy.png", "foggy.png", "windy.png", "movie_time.png", "end_show.png"],
        ];
        let icons = names
            .iter()
            .zip(0u32..)
            .flat_map(|(row_names, row)| {
                row_names
                    .iter()
                    .zip(0u32..)
                    .map(move |(name, col)| IconSlot::new(name, col, row))
            })
            .collect();

        Self {
            source: PathBuf::from("all icons.png"),
            output: default_icons_dir().join("weather"),
            mask: MaskKind::Gold,
            layout: SheetLayout::weather(),
            padding: DEFAULT_PADDING,
            icons,
            copies: vec!["movie_time.png".to_string(), "end_show.png".to_string()],
            placeholder: None,
        }
    }

    /// White playlist sheet: 4 icons over 3, plus an empty fallback.
    pub fn playlists() -> Self {
        Self {
            source: default_icons_dir().join("playlist icons.png"),
            output: default_icons_dir().join("playlists"),
            mask: MaskKind::White,
            layout: SheetLayout::playlists(),
            padding: DEFAULT_PADDING,
            icons: vec![
                IconSlot::new("perfect_mood.png", 0, 0),
                IconSlot::new("dance.png", 1, 0),
                IconSlot::new("its_a_hard_life.png", 2, 0),
                IconSlot::new("nostalgic.png", 3, 0),
                IconSlot::new("soft_jazz.png", 0, 1),
                IconSlot::new("the_ultimate_skiing_playlist.png", 1, 1),
                IconSlot::new("work_drive.png", 2, 1),
            ],
            copies: vec![],
            placeholder: Some(Placeholder {
                name: "fallback.png".to_string(),
                size: default_placeholder_size(),
            }),
        }
    }

    /// Check the layout, the padding, every slot, and that copies name
    /// extracted icons.
    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;

        if self.padding > MAX_PADDING {
            return Err(IconError::Build {
                message: format!("Padding {} is too large", self.padding),
                help: Some(format!("Use a padding of at most {} pixels", MAX_PADDING)),
            });
        }

        for slot in &self.icons {
            // Any sheet size works here; only slot ranges are checked.
            self.layout.cell(1, 1, slot)?;
        }

        for name in &self.copies {
            if !self.icons.iter().any(|slot| &slot.name == name) {
                return Err(IconError::Build {
                    message: format!("Cannot copy {}: not an icon of this sheet", name),
                    help: Some("Copies must name one of the sheet's icons".to_string()),
                });
            }
        }

        Ok(())
    }
}

impl Manifest {
    /// Load manifest from an iconkit.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IconError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // serde_yaml rejects an empty document for a struct.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| IconError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check iconkit.yaml syntax".to_string()),
        })
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| IconError::Build {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }
}
