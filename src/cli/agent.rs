//! Project agent commands: registration, heartbeat, status and graph events

use anyhow::Result;
use serde_json::json;

use super::session::{object_of, or_unknown, Session};
use crate::domain::{AgentRegistration, Heartbeat, ProjectAgent};

const ENDPOINT: &str = "/api/project-agent";

pub fn heartbeat(session: &Session) -> Result<()> {
    let project_id = session.project_id()?;
    let value = session.patch(ENDPOINT, &Heartbeat { project_id: &project_id })?;

    if session.output().is_json() {
        session.output().data(&value);
        return Ok(());
    }

    let agent: ProjectAgent = object_of(&value);
    println!("Heartbeat OK: {}", agent.last_heartbeat);
    Ok(())
}

pub fn register(session: &Session, pid: Option<u32>, session_id: Option<&str>) -> Result<()> {
    let project_id = session.project_id()?;
    let payload = AgentRegistration {
        project_id: &project_id,
        pid: pid.filter(|p| *p != 0),
        session_id: session_id.filter(|s| !s.is_empty()),
    };

    let value = session.post(ENDPOINT, &payload)?;
    if session.output().is_json() {
        session.output().data(&value);
        return Ok(());
    }

    let agent: ProjectAgent = object_of(&value);
    println!("Agent registered: {}", or_unknown(&agent.id));
    println!("  Status: {}", agent.status);
    Ok(())
}

pub fn status(session: &Session) -> Result<()> {
    let project_id = session.project_id()?;
    let value = session.get(ENDPOINT, &[("projectId", project_id.as_str())])?;

    if session.output().is_json() {
        session.output().data(&value);
        return Ok(());
    }

    let agent: ProjectAgent = object_of(&value);
    let status = if agent.status.is_empty() {
        "not_found"
    } else {
        agent.status.as_str()
    };
    println!("Agent status: {}", status);
    if !agent.last_heartbeat.is_empty() {
        println!("  Last heartbeat: {}", agent.last_heartbeat);
    }
    if let Some(pid) = agent.pid_label() {
        println!("  PID: {}", pid);
    }
    if let Some(running) = agent.running {
        println!("  Running: {}", if running { "yes" } else { "no" });
    }
    Ok(())
}

/// Echoes a graph event without storing it
///
/// The agent view builds its graph from git history and the database, so
/// there is nothing to write yet.
pub fn graph_event(
    session: &Session,
    event_type: &str,
    label: &str,
    detail: &str,
    task_id: Option<&str>,
) -> Result<()> {
    let output = session.output();
    if output.is_json() {
        output.data(&json!({
            "type": event_type,
            "label": label,
            "detail": detail,
            "taskId": task_id,
            "persisted": false,
        }));
        return Ok(());
    }

    println!("Graph event: {}", event_type);
    println!("  Label:  {}", label);
    println!("  Detail: {}", detail);
    if let Some(task_id) = task_id.filter(|t| !t.is_empty()) {
        println!("  TaskID: {}", task_id);
    }
    println!("(Note: graph events are currently derived from git log + DB)");
    Ok(())
}
