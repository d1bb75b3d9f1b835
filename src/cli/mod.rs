//! # Command-Line Interface
//!
//! Subcommand dispatch, handlers and output formatting.
//!
//! ## Command Groups
//!
//! | Group | Purpose | Examples |
//! |-------|---------|----------|
//! | Tasks | Task lifecycle over the API | `tasks`, `task <id>`, `task-create`, `task-stop` |
//! | Files | Workspace files on disk | `drafts`, `todo`, `todo-add` |
//! | Context | Project context items | `context` |
//! | User todos | Questions for the human | `user-todos`, `user-todo-create`, `user-todo-resolve` |
//! | Agent | Project agent lifecycle | `agent-register`, `heartbeat`, `agent-status`, `graph-event` |
//!
//! ## Output Formats
//!
//! All commands support `--format`:
//! - `text` (default) - aligned tables and key/value lines
//! - `json` - the raw API response, or a JSON object for file commands
//!
//! ## Verbose Mode
//!
//! `--verbose` (or `-v`) logs resolved IDs, searched paths and every request
//! to stderr:
//! ```bash
//! pawject --verbose tasks
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod session;
mod task;
mod context;
mod files;
mod user_todo;
mod agent;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
pub use session::Session;
