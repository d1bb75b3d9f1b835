//! Runtime configuration
//!
//! The CLI keeps no config files: everything comes from the environment
//! and the working directory, captured once per invocation.
//!
//! | Variable | Purpose | Default |
//! |----------|---------|---------|
//! | `PAWJECT_API_URL` | API base URL (also `--api-url`) | `http://localhost:3000` |
//! | `PAWJECT_PROJECT_ID` | Project ID when the CWD has no `workspaces/<id>` | none |
//! | `PAWJECT_TASK_ID` | Task ID when the CWD has no `tasks/<id>` | none |

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const API_URL_VAR: &str = "PAWJECT_API_URL";
pub const PROJECT_ID_VAR: &str = "PAWJECT_PROJECT_ID";
pub const TASK_ID_VAR: &str = "PAWJECT_TASK_ID";

/// Settings for one CLI invocation
#[derive(Debug, Clone)]
pub struct Config {
    /// API base URL without a trailing slash
    pub api_url: String,
    /// Fallback project ID
    pub project_id: Option<String>,
    /// Fallback task ID
    pub task_id: Option<String>,
    /// Working directory all lookups start from
    pub cwd: PathBuf,
}

impl Config {
    /// Reads the fallback IDs and working directory from the process
    pub fn load(api_url: &str) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to read current directory")?;
        Ok(Self::new(api_url, non_empty_var(PROJECT_ID_VAR), non_empty_var(TASK_ID_VAR), cwd))
    }

    pub fn new(
        api_url: &str,
        project_id: Option<String>,
        task_id: Option<String>,
        cwd: impl Into<PathBuf>,
    ) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            project_id: project_id.filter(|s| !s.is_empty()),
            task_id: task_id.filter(|s| !s.is_empty()),
            cwd: cwd.into(),
        }
    }
}

/// Value of `name`, treating unset and empty alike
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_ids_are_unset() {
        let config = Config::new("http://h:1/", Some(String::new()), Some("t1".into()), "/tmp");
        assert_eq!(config.api_url, "http://h:1");
        assert_eq!(config.project_id, None);
        assert_eq!(config.task_id.as_deref(), Some("t1"));
    }
}
