//! Project and task identity derived from the working directory

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static PROJECT_SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"workspaces/([^/]+)").unwrap());
static TASK_SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"tasks/([^/]+)").unwrap());

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("Could not determine projectId from CWD or PAWJECT_PROJECT_ID.\nMake sure you are inside a workspaces/{{projectId}}/ directory.")]
    NoProjectId,

    #[error("Could not determine taskId. Use --task-id or run from tasks/{{id}}/ directory.")]
    NoTaskId,
}

/// First `workspaces/<id>` segment in `path`
pub fn project_id_from_path(path: &Path) -> Option<String> {
    first_capture(&PROJECT_SEGMENT, path)
}

/// First `tasks/<id>` segment in `path`
pub fn task_id_from_path(path: &Path) -> Option<String> {
    first_capture(&TASK_SEGMENT, path)
}

fn first_capture(pattern: &Regex, path: &Path) -> Option<String> {
    let text = path.to_string_lossy();
    pattern
        .captures(&text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn project_id_from_workspace_root() {
        let path = Path::new("/srv/pawject/workspaces/cm8abc");
        assert_eq!(project_id_from_path(path).as_deref(), Some("cm8abc"));
    }

    #[test]
    fn first_match_wins() {
        let path = Path::new("/a/workspaces/one/nested/workspaces/two");
        assert_eq!(project_id_from_path(path).as_deref(), Some("one"));
    }

    #[test]
    fn segment_prefix_also_matches() {
        // Matching is textual: `myworkspaces/x` counts too
        let path = Path::new("/a/myworkspaces/x");
        assert_eq!(project_id_from_path(path).as_deref(), Some("x"));
    }

    #[test]
    fn no_segment_no_id() {
        assert_eq!(project_id_from_path(Path::new("/home/user/code")), None);
        assert_eq!(project_id_from_path(Path::new("/home/workspaces/")), None);
        assert_eq!(task_id_from_path(Path::new("/w/workspaces/p")), None);
    }

    #[test]
    fn task_id_from_task_dir() {
        let path = Path::new("/w/workspaces/p1/tasks/t-42/draft");
        assert_eq!(task_id_from_path(path).as_deref(), Some("t-42"));
    }

    #[test]
    fn identity_errors_read_as_diagnostics() {
        let msg = IdentityError::NoProjectId.to_string();
        assert_eq!(msg.lines().count(), 2);
        assert!(msg.contains("workspaces/{projectId}/"));
        assert!(IdentityError::NoTaskId.to_string().contains("--task-id"));
    }

    proptest! {
        #[test]
        fn project_id_ignores_trailing_segments(
            prefix in "(/[a-z0-9_.-]{1,8}){0,3}",
            id in "[A-Za-z0-9_-]{1,24}",
            suffix in "(/[a-z0-9_.-]{1,8}){0,4}",
        ) {
            prop_assume!(!prefix.contains("workspaces"));
            let path = format!("{}/workspaces/{}{}", prefix, id, suffix);
            prop_assert_eq!(project_id_from_path(Path::new(&path)), Some(id));
        }
    }
}
