//! pawject - command-line client for project agent workspaces
//!
//! Lets a human or an agent inspect and change a project's tasks, user
//! todos and agent registration through the local pawject API, and read or
//! append the workspace's `draft/` files and `TODO.md`. The project and task
//! are inferred from a `workspaces/{projectId}/.../tasks/{taskId}/` working
//! directory.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod workspace;

pub use api::{ApiClient, ApiError};
pub use config::Config;
pub use workspace::{IdentityError, Workspace};
