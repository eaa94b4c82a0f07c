//! Preset catalog of model photographs and their masks
//!
//! Presets live under a root directory with a `models` and a `masks`
//! subdirectory. Both listings are sorted by file name and paired by position,
//! so the n-th model uses the n-th mask. A model's file stem is its preset
//! identifier and must be unique within the catalog.

use crate::io::configuration::{MASK_EXTENSIONS, MASKS_DIR, MODEL_EXTENSIONS, MODELS_DIR};
use crate::io::error::{CompositeError, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// One model photograph with its mask
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    /// Stable identifier, the model file stem
    pub id: String,
    /// Path to the model photograph
    pub image_path: PathBuf,
    /// Path to the matching mask
    pub mask_path: PathBuf,
}

/// Ordered set of presets found under a root directory
#[derive(Debug, Clone, Default)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl PresetCatalog {
    /// Scan `root/models` and `root/masks` and pair their files
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either directory cannot be read
    /// - The directories hold different numbers of usable files
    /// - Two models share a file stem, e.g. `a.jpg` and `a.png`
    pub fn scan(root: &Path) -> Result<Self> {
        let models = list_files(&root.join(MODELS_DIR), MODEL_EXTENSIONS)?;
        let masks = list_files(&root.join(MASKS_DIR), MASK_EXTENSIONS)?;

        if models.len() != masks.len() {
            return Err(CompositeError::InvalidSourceData {
                reason: format!(
                    "{} model images but {} masks under '{}'",
                    models.len(),
                    masks.len(),
                    root.display()
                ),
            });
        }

        let mut seen = HashSet::with_capacity(models.len());
        let mut presets = Vec::with_capacity(models.len());
        for (image_path, mask_path) in models.into_iter().zip(masks) {
            let id = file_stem(&image_path);
            if !seen.insert(id.clone()) {
                return Err(CompositeError::InvalidSourceData {
                    reason: format!(
                        "preset '{id}' is defined by more than one model under '{}'",
                        root.display()
                    ),
                });
            }
            presets.push(Preset {
                id,
                image_path,
                mask_path,
            });
        }

        Ok(Self { presets })
    }

    /// All presets in catalog order
    pub const fn presets(&self) -> &[Preset] {
        self.presets.as_slice()
    }

    /// Number of presets
    pub const fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether the catalog has no presets
    pub const fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Look up a preset by identifier
    pub fn find(&self, id: &str) -> Option<&Preset> {
        self.presets.iter().find(|preset| preset.id == id)
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            extensions
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

fn list_files(dir: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| CompositeError::FileSystem {
        path: dir.to_path_buf(),
        operation: "read directory",
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| CompositeError::FileSystem {
                path: dir.to_path_buf(),
                operation: "read directory entry",
                source: e,
            })?
            .path();
        if path.is_file() && has_extension(&path, extensions) {
            files.push(path);
        }
    }

    // File names order the pairing, so the sort must be stable across platforms
    files.sort_by_key(|path| path.file_name().map(std::ffi::OsStr::to_os_string));
    Ok(files)
}
