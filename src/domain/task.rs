//! Task domain model
//!
//! Tasks are units of agent work. The CLI creates them, changes their status
//! and reads their message history; it never deletes them.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{lenient_string, truncate_chars};

/// Number of characters of message content shown in previews
pub const PREVIEW_CHARS: usize = 200;

/// Number of characters of `createdAt` shown (`YYYY-MM-DDTHH:MM:SS`)
pub const TIMESTAMP_CHARS: usize = 19;

/// How a task is triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum TaskType {
    /// Runs once
    #[default]
    OneTime,
    /// Runs on a schedule
    Periodic,
    /// Started by the project agent
    Proactive,
}

impl TaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::OneTime => "one_time",
            TaskType::Periodic => "periodic",
            TaskType::Proactive => "proactive",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    Running,
    Completed,
    AwaitingInput,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Running => "running",
            TaskStatus::Completed => "completed",
            TaskStatus::AwaitingInput => "awaiting_input",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task as returned by `GET /api/tasks`
///
/// `type` and `status` stay plain strings: the server may know values this
/// client does not.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub project_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub task_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
}

/// Payload for `POST /api/tasks`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask<'a> {
    pub project_id: &'a str,
    pub name: &'a str,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub description: &'a str,
    /// Passed through verbatim; the server parses it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_config: Option<&'a str>,
}

/// A chat message belonging to a task
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default, deserialize_with = "lenient_string")]
    pub role: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: String,
}

impl Message {
    /// Role label, `?` when the server omitted it
    pub fn role_label(&self) -> &str {
        if self.role.is_empty() {
            "?"
        } else {
            &self.role
        }
    }

    /// Content cut to [`PREVIEW_CHARS`] characters with `...` appended when cut
    pub fn preview(&self) -> String {
        let head = truncate_chars(&self.content, PREVIEW_CHARS);
        if head.len() < self.content.len() {
            format!("{}...", head)
        } else {
            head.to_string()
        }
    }

    /// Creation timestamp without fractional seconds and zone
    pub fn timestamp(&self) -> &str {
        truncate_chars(&self.created_at, TIMESTAMP_CHARS)
    }

    /// Returns the trailing `count` messages, oldest first
    pub fn recent(messages: &[Message], count: usize) -> &[Message] {
        &messages[messages.len().saturating_sub(count)..]
    }
}
