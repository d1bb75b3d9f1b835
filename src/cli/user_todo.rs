//! User todo commands: questions agents leave for humans

use anyhow::Result;

use super::session::{list_of, object_of, or_unknown, Session};
use crate::domain::{NewUserTodo, Priority, TodoResolution, TodoType, UserTodo};

const ENDPOINT: &str = "/api/user-todos";

/// Lists user todos, optionally only the unresolved ones
pub fn list(session: &Session, pending_only: bool) -> Result<()> {
    let project_id = session.project_id()?;
    let mut query = vec![("projectId", project_id.as_str())];
    if pending_only {
        query.push(("resolved", "false"));
    }
    let value = session.get(ENDPOINT, &query)?;

    if session.output().is_json() {
        session.output().data(&value);
        return Ok(());
    }

    let todos: Vec<UserTodo> = list_of(&value);
    if todos.is_empty() {
        println!("No user todos.");
        return Ok(());
    }

    println!("{:<28} {:<22} {:<10} {:<10} Query", "ID", "Type", "Priority", "Resolved");
    println!("{}", "-".repeat(110));
    for todo in &todos {
        println!(
            "{:<28} {:<22} {:<10} {:<10} {}",
            todo.id,
            todo.todo_type,
            todo.priority,
            todo.resolved_label(),
            todo.query_preview()
        );
    }

    Ok(())
}

pub fn create(
    session: &Session,
    todo_type: TodoType,
    query: &str,
    task_id: Option<&str>,
    suggestion: Option<&str>,
    priority: Priority,
) -> Result<()> {
    let project_id = session.project_id()?;
    let task_id = session.task_id(task_id)?;

    let payload = NewUserTodo {
        project_id: &project_id,
        task_id: &task_id,
        todo_type,
        query,
        suggestion,
        priority,
    };

    let value = session.post(ENDPOINT, &payload)?;
    if session.output().is_json() {
        session.output().data(&value);
        return Ok(());
    }

    let todo: UserTodo = object_of(&value);
    println!("UserTodo created: {}", or_unknown(&todo.id));
    println!("  Type:     {}", todo.todo_type);
    println!("  Query:    {}", todo.query);
    println!("  Priority: {}", todo.priority);
    Ok(())
}

pub fn resolve(session: &Session, id: &str, response: Option<&str>) -> Result<()> {
    let payload = TodoResolution {
        id,
        response: response.filter(|r| !r.is_empty()),
    };

    let value = session.patch(ENDPOINT, &payload)?;
    if session.output().is_json() {
        session.output().data(&value);
        return Ok(());
    }

    let todo: UserTodo = object_of(&value);
    println!("UserTodo resolved: {}", or_unknown(&todo.id));
    Ok(())
}
