//! Context item listing

use anyhow::Result;

use super::session::{list_of, Session};
use crate::domain::ContextItem;

pub fn list(session: &Session) -> Result<()> {
    let project_id = session.project_id()?;
    let value = session.get("/api/context", &[("projectId", project_id.as_str())])?;

    if session.output().is_json() {
        session.output().data(&value);
        return Ok(());
    }

    let items: Vec<ContextItem> = list_of(&value);
    if items.is_empty() {
        println!("No context items.");
        return Ok(());
    }

    println!("{:<28} {:<12} Name", "ID", "Type");
    println!("{}", "-".repeat(60));
    for item in &items {
        println!("{:<28} {:<12} {}", item.id, item.item_type, item.name);
    }

    Ok(())
}
