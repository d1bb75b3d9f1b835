//! Workspace file commands: drafts and TODO.md

use std::fs;

use anyhow::{Context, Result};
use serde_json::json;

use super::session::Session;
use crate::workspace::{append_entry, list_drafts};

pub fn drafts(session: &Session) -> Result<()> {
    let output = session.output();

    let Some(root) = session.workspace().find_draft_dir() else {
        output.success("No draft/ directory found.");
        return Ok(());
    };
    output.verbose_ctx("drafts", &format!("Listing {}", root.display()));

    let files = list_drafts(&root)?;

    if output.is_json() {
        output.data(&json!({
            "root": root.display().to_string(),
            "files": files,
        }));
        return Ok(());
    }

    if files.is_empty() {
        println!("No draft files.");
        return Ok(());
    }

    println!("{:<50} {:>10}", "File", "Size");
    println!("{}", "-".repeat(62));
    for file in &files {
        println!("{:<50} {:>10}", file.path, file.size);
    }

    Ok(())
}

pub fn show_todo(session: &Session) -> Result<()> {
    let output = session.output();

    let Some(path) = session.workspace().find_todo() else {
        output.success("No TODO.md found. Use 'pawject todo-add' to create one.");
        return Ok(());
    };
    output.verbose_ctx("todo", &format!("Reading {}", path.display()));

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if output.is_json() {
        output.data(&json!({
            "path": path.display().to_string(),
            "content": content,
        }));
    } else {
        println!("{}", content);
    }

    Ok(())
}

pub fn add_todo(session: &Session, text: &str) -> Result<()> {
    let output = session.output();
    let root = session.workspace().root();
    output.verbose_ctx("todo", &format!("Workspace root: {}", root.display()));

    let path = append_entry(&root, text)?;

    if output.is_json() {
        output.data(&json!({
            "path": path.display().to_string(),
            "entry": format!("- [ ] {}", text),
        }));
    } else {
        println!("Added to {}", path.display());
    }

    Ok(())
}
