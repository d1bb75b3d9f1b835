//! Task commands: listing, details, creation and status changes

use anyhow::Result;
use serde_json::json;

use super::session::{list_of, object_of, or_unknown, Session};
use crate::domain::{Message, NewTask, Task, TaskStatus, TaskType};

/// Messages shown by `pawject task`
const RECENT_MESSAGES: usize = 5;

pub fn list(session: &Session) -> Result<()> {
    let project_id = session.project_id()?;
    let value = session.get("/api/tasks", &[("projectId", project_id.as_str())])?;

    if session.output().is_json() {
        session.output().data(&value);
        return Ok(());
    }

    let tasks: Vec<Task> = list_of(&value);
    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }

    println!("{:<28} {:<16} {:<12} Name", "ID", "Status", "Type");
    println!("{}", "-".repeat(80));
    for task in &tasks {
        println!("{:<28} {:<16} {:<12} {}", task.id, task.status, task.task_type, task.name);
    }

    Ok(())
}

pub fn show(session: &Session, task_id: &str) -> Result<()> {
    let output = session.output();
    let messages_value = session.get("/api/messages", &[("taskId", task_id)])?;
    let project_id = session.project_id()?;
    let tasks_value = session.get("/api/tasks", &[("projectId", project_id.as_str())])?;

    let task_value = tasks_value
        .as_array()
        .and_then(|tasks| tasks.iter().find(|t| t.get("id").and_then(|id| id.as_str()) == Some(task_id)));
    output.verbose_ctx("task", &format!("task {} found in project: {}", task_id, task_value.is_some()));

    if output.is_json() {
        output.data(&json!({
            "task": task_value,
            "messages": messages_value,
        }));
        return Ok(());
    }

    if let Some(task) = task_value.map(object_of::<Task>) {
        println!("Task: {}", task.name);
        println!("ID:   {}", task.id);
        println!("Type: {}  |  Status: {}", task.task_type, task.status);
        if !task.description.is_empty() {
            println!("Desc: {}", task.description);
        }
        println!();
    }

    let messages: Vec<Message> = list_of(&messages_value);
    let recent = Message::recent(&messages, RECENT_MESSAGES);
    if recent.is_empty() {
        println!("No messages yet.");
        return Ok(());
    }

    println!("--- Recent messages ({} of {}) ---", recent.len(), messages.len());
    for message in recent {
        println!("[{}] {}", message.role_label(), message.timestamp());
        println!("  {}", message.preview());
        println!();
    }

    Ok(())
}

pub fn create(
    session: &Session,
    name: &str,
    task_type: TaskType,
    description: &str,
    schedule: Option<&str>,
) -> Result<()> {
    let project_id = session.project_id()?;
    let payload = NewTask {
        project_id: &project_id,
        name,
        task_type,
        description,
        schedule_config: schedule.filter(|s| !s.is_empty()),
    };

    let value = session.post("/api/tasks", &payload)?;
    if session.output().is_json() {
        session.output().data(&value);
        return Ok(());
    }

    let task: Task = object_of(&value);
    println!("Task created: {}", or_unknown(&task.id));
    println!("  Name:   {}", task.name);
    println!("  Status: {}", task.status);
    Ok(())
}

/// Marks a task completed
pub fn stop(session: &Session, task_id: &str) -> Result<()> {
    let value = patch_status(session, task_id, TaskStatus::Completed)?;
    if session.output().is_json() {
        session.output().data(&value);
        return Ok(());
    }

    println!("Task {} stopped.", task_id);
    if value.is_object() {
        let task: Task = object_of(&value);
        let status = if task.status.is_empty() {
            TaskStatus::Completed.as_str()
        } else {
            task.status.as_str()
        };
        println!("  Status: {}", status);
    }
    Ok(())
}

pub fn sync_status(session: &Session, task_id: &str, status: TaskStatus) -> Result<()> {
    let value = patch_status(session, task_id, status)?;
    if session.output().is_json() {
        session.output().data(&value);
        return Ok(());
    }

    let task: Task = object_of(&value);
    println!("Task {} status updated to: {}", task_id, task.status);
    Ok(())
}

fn patch_status(session: &Session, task_id: &str, status: TaskStatus) -> Result<serde_json::Value> {
    session.patch(&format!("/api/tasks/{}", task_id), &json!({ "status": status }))
}
