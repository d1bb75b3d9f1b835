//! Draft file listing

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use walkdir::WalkDir;

/// Placeholder kept in empty directories; never listed
const PLACEHOLDER: &str = ".gitkeep";

/// A file under `draft/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftFile {
    /// Path relative to the draft root
    pub path: String,
    /// Size in bytes
    pub size: u64,
}

/// Lists every file below `root`, sorted by relative path
///
/// Symlinked files are listed with their target's size; symlinked
/// directories are not descended into. Unreadable subdirectories are
/// skipped; only an unreadable `root` is an error.
pub fn list_drafts(root: &Path) -> Result<Vec<DraftFile>> {
    fs::read_dir(root).with_context(|| format!("Failed to read {}", root.display()))?;

    let mut files = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).into_iter().flatten() {
        if entry.file_name() == PLACEHOLDER {
            continue;
        }

        let metadata = fs::metadata(entry.path())
            .with_context(|| format!("Failed to stat {}", entry.path().display()))?;
        if metadata.is_dir() {
            continue;
        }

        let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
        files.push(DraftFile {
            path: rel.to_string_lossy().into_owned(),
            size: metadata.len(),
        });
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}
