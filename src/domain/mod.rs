//! Domain models for the pawject CLI
//!
//! Typed views of the entities served by the pawject API. The server owns
//! the schema, so every field is lenient: missing or `null` values decode as
//! empty strings and unexpected scalars are rendered as text.

mod task;
mod user_todo;
mod agent;
mod context;

pub use task::{Message, NewTask, Task, TaskStatus, TaskType};
pub use user_todo::{NewUserTodo, Priority, TodoResolution, TodoType, UserTodo};
pub use agent::{AgentRegistration, Heartbeat, ProjectAgent};
pub use context::ContextItem;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes any JSON value into display text
///
/// `null` becomes the empty string, strings are kept as-is and any other
/// value uses its JSON rendering.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Returns at most `max` characters of `text`
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
