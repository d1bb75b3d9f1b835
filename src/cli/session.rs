//! Per-invocation state shared by command handlers

use anyhow::Result;
use once_cell::unsync::OnceCell;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::output::Output;
use crate::api::{ApiClient, Method};
use crate::config::Config;
use crate::workspace::{IdentityError, Workspace};

/// Configuration, output and a lazily built API client
pub struct Session {
    config: Config,
    output: Output,
    workspace: Workspace,
    client: OnceCell<ApiClient>,
}

impl Session {
    pub fn new(config: Config, output: Output) -> Self {
        let workspace = Workspace::new(config.cwd.clone());
        Self {
            config,
            output,
            workspace,
            client: OnceCell::new(),
        }
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Project ID for the working directory; fatal when undeterminable
    pub fn project_id(&self) -> Result<String> {
        let id = self.workspace.project_id(self.config.project_id.as_deref())?;
        self.output.verbose_ctx("identity", &format!("projectId = {}", id));
        Ok(id)
    }

    /// Task ID from an explicit flag, the working directory or the environment
    pub fn task_id(&self, explicit: Option<&str>) -> Result<String> {
        let id = explicit
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .or_else(|| self.workspace.task_id(self.config.task_id.as_deref()))
            .ok_or(IdentityError::NoTaskId)?;
        self.output.verbose_ctx("identity", &format!("taskId = {}", id));
        Ok(id)
    }

    fn client(&self) -> Result<&ApiClient> {
        let client = self
            .client
            .get_or_try_init(|| ApiClient::new(&self.config.api_url))?;
        Ok(client)
    }

    fn trace(&self, method: Method, path: &str) -> Result<&ApiClient> {
        let client = self.client()?;
        self.output
            .verbose_ctx("api", &format!("{} {}", method, client.url(path)));
        Ok(client)
    }

    pub fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value> {
        Ok(self.trace(Method::Get, path)?.get(path, query)?)
    }

    pub fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        Ok(self.trace(Method::Post, path)?.post(path, body)?)
    }

    pub fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        Ok(self.trace(Method::Patch, path)?.patch(path, body)?)
    }
}

/// Decodes the elements of a JSON array; anything else is an empty list
pub fn list_of<T: DeserializeOwned>(value: &Value) -> Vec<T> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Decodes a JSON object, falling back to an all-empty value
pub fn object_of<T: DeserializeOwned + Default>(value: &Value) -> T {
    serde_json::from_value(value.clone()).unwrap_or_default()
}

/// `value`, or `unknown` when empty
pub fn or_unknown(value: &str) -> &str {
    if value.is_empty() {
        "unknown"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Task;
    use serde_json::json;

    #[test]
    fn list_of_ignores_non_arrays() {
        let tasks: Vec<Task> = list_of(&json!({"error": "x"}));
        assert!(tasks.is_empty());
        let tasks: Vec<Task> = list_of(&json!([{"id": "a"}, {"id": "b", "name": 3}]));
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].name, "3");
    }

    #[test]
    fn object_of_defaults() {
        let task: Task = object_of(&json!("not an object"));
        assert_eq!(task, Task::default());
    }

    #[test]
    fn explicit_task_id_wins() {
        let config = Config::new("http://x", None, Some("env-task".into()), "/w/workspaces/p/tasks/cwd-task");
        let session = Session::new(config, Output::new(Default::default(), false));
        assert_eq!(session.task_id(Some("flag")).unwrap(), "flag");
        assert_eq!(session.task_id(Some("")).unwrap(), "cwd-task");
        assert_eq!(session.task_id(None).unwrap(), "cwd-task");
    }

    #[test]
    fn missing_task_id_is_error() {
        let config = Config::new("http://x", Some("p".into()), None, "/tmp/plain");
        let session = Session::new(config, Output::new(Default::default(), false));
        let err = session.task_id(None).unwrap_err();
        assert!(err.downcast_ref::<IdentityError>().is_some());
        assert_eq!(session.project_id().unwrap(), "p");
    }
}
