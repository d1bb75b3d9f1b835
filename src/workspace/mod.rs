//! # Workspace
//!
//! Everything the CLI derives from the current working directory.
//!
//! A pawject workspace lives on disk as:
//!
//! ```text
//! workspaces/{projectId}/
//! ├── CLAUDE.md            # Workspace root marker
//! ├── context/             # Workspace root marker
//! ├── TODO.md              # Checklist maintained by `pawject todo-add`
//! ├── draft/               # Draft files listed by `pawject drafts`
//! └── tasks/{taskId}/      # Per-task working directories
//! ```
//!
//! Commands may run from the workspace root or up to two levels below it,
//! so lookups search `.`, `..` and `../..` in that order and the first match
//! wins.

mod identity;
mod drafts;
mod todo;

use std::path::PathBuf;

pub use identity::{project_id_from_path, task_id_from_path, IdentityError};
pub use drafts::{list_drafts, DraftFile};
pub use todo::{append_entry, TODO_FILE, TODO_HEADER};

/// Ancestors searched for workspace files, nearest first
pub const SEARCH_DIRS: [&str; 3] = [".", "..", "../.."];

/// View of the workspace around a working directory
#[derive(Debug, Clone)]
pub struct Workspace {
    cwd: PathBuf,
}

impl Workspace {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }

    /// Project ID from a `workspaces/<id>` path segment, else `fallback`
    pub fn project_id(&self, fallback: Option<&str>) -> Result<String, IdentityError> {
        project_id_from_path(&self.cwd)
            .or_else(|| fallback.map(str::to_string))
            .ok_or(IdentityError::NoProjectId)
    }

    /// Task ID from a `tasks/<id>` path segment, else `fallback`
    pub fn task_id(&self, fallback: Option<&str>) -> Option<String> {
        task_id_from_path(&self.cwd).or_else(|| fallback.map(str::to_string))
    }

    /// Candidate paths `name` resolved against each search directory
    ///
    /// Candidates that do not exist are dropped; the rest are canonical.
    pub fn candidates(&self, name: &str) -> Vec<PathBuf> {
        SEARCH_DIRS
            .iter()
            .filter_map(|dir| self.cwd.join(dir).join(name).canonicalize().ok())
            .collect()
    }

    /// First `draft/` directory found
    pub fn find_draft_dir(&self) -> Option<PathBuf> {
        self.candidates("draft").into_iter().find(|p| p.is_dir())
    }

    /// First `TODO.md` regular file found
    pub fn find_todo(&self) -> Option<PathBuf> {
        self.candidates(TODO_FILE).into_iter().find(|p| p.is_file())
    }

    /// Directory that receives new TODO entries
    ///
    /// The first search directory holding a `CLAUDE.md` file or a `context/`
    /// directory; the working directory when none does.
    pub fn root(&self) -> PathBuf {
        self.candidates("")
            .into_iter()
            .find(|dir| dir.join("CLAUDE.md").is_file() || dir.join("context").is_dir())
            .unwrap_or_else(|| self.cwd.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn layout() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        (dir, nested)
    }

    #[test]
    fn project_id_prefers_path_over_fallback() {
        let ws = Workspace::new("/home/u/workspaces/proj-1/tasks/t9");
        assert_eq!(ws.project_id(Some("env")).unwrap(), "proj-1");
        assert_eq!(ws.task_id(Some("env")).as_deref(), Some("t9"));
    }

    #[test]
    fn project_id_falls_back() {
        let ws = Workspace::new("/tmp/elsewhere");
        assert_eq!(ws.project_id(Some("env-proj")).unwrap(), "env-proj");
        assert!(matches!(ws.project_id(None), Err(IdentityError::NoProjectId)));
        assert_eq!(ws.task_id(None), None);
    }

    #[test]
    fn draft_dir_nearest_wins() {
        let (dir, nested) = layout();
        fs::create_dir(dir.path().join("draft")).unwrap();
        fs::create_dir(dir.path().join("a").join("draft")).unwrap();

        let found = Workspace::new(&nested).find_draft_dir().unwrap();
        assert_eq!(found, dir.path().join("a").join("draft").canonicalize().unwrap());
    }

    #[test]
    fn draft_dir_beyond_two_levels_is_ignored() {
        let dir = TempDir::new().unwrap();
        let deep = dir.path().join("a").join("b").join("c");
        fs::create_dir_all(&deep).unwrap();
        fs::create_dir(dir.path().join("draft")).unwrap();

        assert!(Workspace::new(&deep).find_draft_dir().is_none());
    }

    #[test]
    fn draft_file_is_not_a_directory() {
        let (dir, nested) = layout();
        fs::write(nested.join("draft"), "not a dir").unwrap();
        fs::create_dir(dir.path().join("draft")).unwrap();

        let found = Workspace::new(&nested).find_draft_dir().unwrap();
        assert_eq!(found, dir.path().join("draft").canonicalize().unwrap());
    }

    #[test]
    fn todo_found_in_ancestor() {
        let (dir, nested) = layout();
        fs::write(dir.path().join("TODO.md"), "# TODO\n").unwrap();

        let found = Workspace::new(&nested).find_todo().unwrap();
        assert_eq!(found, dir.path().join("TODO.md").canonicalize().unwrap());
    }

    #[test]
    fn root_detected_by_markers() {
        let (dir, nested) = layout();
        fs::create_dir(dir.path().join("context")).unwrap();
        assert_eq!(Workspace::new(&nested).root(), dir.path().canonicalize().unwrap());

        fs::write(dir.path().join("a").join("CLAUDE.md"), "").unwrap();
        assert_eq!(
            Workspace::new(&nested).root(),
            dir.path().join("a").canonicalize().unwrap()
        );
    }

    #[test]
    fn root_ignores_claude_md_directory() {
        let (dir, nested) = layout();
        fs::create_dir(dir.path().join("a").join("CLAUDE.md")).unwrap();
        assert_eq!(Workspace::new(&nested).root(), nested);
    }

    #[test]
    fn root_defaults_to_cwd() {
        let (_dir, nested) = layout();
        assert_eq!(Workspace::new(&nested).root(), nested);
    }
}
