//! TODO.md checklist

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub const TODO_FILE: &str = "TODO.md";

/// Contents of a freshly created TODO.md
pub const TODO_HEADER: &str = "# TODO\n\n";

/// Appends `- [ ] <text>` to `<root>/TODO.md`, creating it with a header
///
/// Returns the path written to.
pub fn append_entry(root: &Path, text: &str) -> Result<PathBuf> {
    let path = root.join(TODO_FILE);

    if !path.is_file() {
        fs::write(&path, TODO_HEADER)
            .with_context(|| format!("Failed to create {}", path.display()))?;
    }

    let mut file = OpenOptions::new()
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    writeln!(file, "- [ ] {}", text).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}
