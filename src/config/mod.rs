//! Project configuration.
//!
//! A project is a root directory plus its manifest. Relative paths in the
//! manifest resolve against the root, which is the manifest's directory or
//! the working directory when no manifest exists.

mod manifest;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use manifest::{Manifest, Placeholder, RecolorSet, SheetJob};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "iconkit.yaml";

/// A manifest together with the directory its paths are relative to.
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub manifest: Manifest,
    /// Whether an iconkit.yaml was found.
    pub has_manifest: bool,
}

impl Project {
    /// Look for `iconkit.yaml` in `root`, falling back to the defaults.
    pub fn discover(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let manifest_path = root.join(MANIFEST_FILENAME);

        if manifest_path.is_file() {
            Ok(Self {
                manifest: Manifest::load(&manifest_path)?,
                root,
                has_manifest: true,
            })
        } else {
            Ok(Self {
                manifest: Manifest::default(),
                root,
                has_manifest: false,
            })
        }
    }

    /// Load an explicit manifest file; its directory becomes the root.
    pub fn open(manifest_path: &Path) -> Result<Self> {
        let manifest = Manifest::load(manifest_path)?;
        let root = manifest_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            root,
            manifest,
            has_manifest: true,
        })
    }

    /// Resolve a manifest path against the project root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// The resolved top-level icon directory.
    pub fn icons_dir(&self) -> PathBuf {
        self.resolve(&self.manifest.icons)
    }

    /// Where the configuration came from, for verbose output.
    pub fn describe(&self) -> String {
        if self.has_manifest {
            format!("loaded from {}", self.root.display())
        } else {
            format!(
                "no {} in {}, using built-in defaults",
                MANIFEST_FILENAME,
                self.root.display()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_discover_without_manifest() {
        let dir = tempdir().unwrap();
        let project = Project::discover(dir.path()).unwrap();

        assert!(!project.has_manifest);
        assert_eq!(project.manifest, Manifest::default());
        assert_eq!(project.icons_dir(), dir.path().join("webos-app/Icons"));
    }

    #[test]
    fn test_discover_with_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "icons: art").unwrap();

        let project = Project::discover(dir.path()).unwrap();
        assert!(project.has_manifest);
        assert_eq!(project.icons_dir(), dir.path().join("art"));
    }

    #[test]
    fn test_describe_reports_defaults() {
        let dir = tempdir().unwrap();
        let project = Project::discover(dir.path()).unwrap();
        assert!(project.describe().contains("using built-in defaults"));

        fs::write(dir.path().join(MANIFEST_FILENAME), "icons: art").unwrap();
        let project = Project::discover(dir.path()).unwrap();
        assert!(project.describe().starts_with("loaded from"));
    }

    #[test]
    fn test_open_uses_manifest_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("dashboard");
        fs::create_dir_all(&nested).unwrap();
        let path = nested.join("custom.yaml");
        fs::write(&path, "icons: Icons").unwrap();

        let project = Project::open(&path).unwrap();
        assert_eq!(project.root, nested);
        assert_eq!(project.icons_dir(), nested.join("Icons"));
    }

    #[test]
    fn test_open_missing_manifest() {
        let dir = tempdir().unwrap();
        assert!(Project::open(&dir.path().join("nope.yaml")).is_err());
    }

    #[test]
    fn test_resolve_absolute_path() {
        let dir = tempdir().unwrap();
        let project = Project::discover(dir.path()).unwrap();
        let abs = dir.path().join("elsewhere").join("sheet.png");
        assert_eq!(project.resolve(&abs), abs);
    }
}
