//! Project agent registration and heartbeat records

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient_string;

/// The agent process registered for a project
///
/// `GET /api/project-agent` answers with a status summary (`running`,
/// `status`, `lastHeartbeat`, `pid`) while `POST`/`PATCH` return the stored
/// record; both decode into this type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAgent {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub project_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(default)]
    pub pid: Option<Value>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub session_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_heartbeat: String,
    #[serde(default)]
    pub running: Option<bool>,
}

impl ProjectAgent {
    /// PID as text, `None` when absent, null or zero
    pub fn pid_label(&self) -> Option<String> {
        match self.pid.as_ref()? {
            Value::Null => None,
            Value::Number(n) if n.as_i64() == Some(0) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Payload for `POST /api/project-agent`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRegistration<'a> {
    pub project_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<&'a str>,
}

/// Payload for `PATCH /api/project-agent`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Heartbeat<'a> {
    pub project_id: &'a str,
}
