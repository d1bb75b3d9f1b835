//! User todos: questions an agent leaves for a human

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{lenient_string, truncate_chars};

/// Characters of `query` shown in the listing table
pub const QUERY_PREVIEW_CHARS: usize = 50;

/// Kind of input the agent is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[value(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoType {
    /// The agent needs more context from the user
    AskUserContext,
    /// The agent needs the user to confirm something
    AskUserConfirm,
}

impl TodoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoType::AskUserContext => "ASK_USER_CONTEXT",
            TodoType::AskUserConfirm => "ASK_USER_CONFIRM",
        }
    }
}

impl fmt::Display for TodoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user todo as returned by `/api/user-todos`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTodo {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub project_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub task_id: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub todo_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub query: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub suggestion: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub priority: String,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub resolved: bool,
    #[serde(default, deserialize_with = "lenient_string")]
    pub response: String,
}

impl UserTodo {
    /// Query cut for table display; `query` itself is left intact
    pub fn query_preview(&self) -> &str {
        truncate_chars(&self.query, QUERY_PREVIEW_CHARS)
    }

    pub fn resolved_label(&self) -> &'static str {
        if self.resolved {
            "Yes"
        } else {
            "No"
        }
    }
}

/// Truthiness of any JSON value: `false`, `null`, zero and empty values are false
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde_json::Value;

    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    })
}

/// Payload for `POST /api/user-todos`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserTodo<'a> {
    pub project_id: &'a str,
    pub task_id: &'a str,
    #[serde(rename = "type")]
    pub todo_type: TodoType,
    pub query: &'a str,
    /// Sent as `null` when absent
    pub suggestion: Option<&'a str>,
    pub priority: Priority,
}

/// Payload for `PATCH /api/user-todos`
#[derive(Debug, Clone, Serialize)]
pub struct TodoResolution<'a> {
    pub id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<&'a str>,
}
