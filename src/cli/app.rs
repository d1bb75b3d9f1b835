//! Main CLI application structure

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::session::Session;
use super::{agent, context, files, task, user_todo};
use crate::api::DEFAULT_API_URL;
use crate::config::Config;
use crate::domain::{Priority, TaskStatus, TaskType, TodoType};

const ENV_HELP: &str = "\
Environment:
  PAWJECT_API_URL       API base URL (default: http://localhost:3000)
  PAWJECT_PROJECT_ID    Project ID when the CWD is not inside workspaces/{projectId}/
  PAWJECT_TASK_ID       Task ID when the CWD is not inside tasks/{taskId}/";

#[derive(Parser)]
#[command(name = "pawject")]
#[command(author, version, about = "Project agent workspace CLI")]
#[command(propagate_version = true, after_help = ENV_HELP)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Base URL of the pawject API
    #[arg(long, global = true, env = "PAWJECT_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Omitted: print usage and exit successfully
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all tasks
    Tasks,

    /// Task details + recent messages
    Task {
        /// Task ID
        id: String,
    },

    /// Create a new task
    TaskCreate {
        /// Task name
        #[arg(long)]
        name: String,

        /// Task type
        #[arg(long = "type", value_enum, default_value_t = TaskType::OneTime)]
        task_type: TaskType,

        /// Task description
        #[arg(long, default_value = "")]
        desc: String,

        /// Schedule config JSON (for periodic tasks), passed through as-is
        #[arg(long)]
        schedule: Option<String>,
    },

    /// Stop a task
    TaskStop {
        /// Task ID
        id: String,
    },

    /// List draft files
    Drafts,

    /// List context items
    Context,

    /// Read TODO.md
    Todo,

    /// Append to TODO.md
    TodoAdd {
        /// Entry text (words are joined with spaces)
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// List user todos
    UserTodos {
        /// Only show unresolved todos
        #[arg(long)]
        pending: bool,
    },

    /// Create a user todo (ask the user for context or confirmation)
    UserTodoCreate {
        /// Todo type
        #[arg(long = "type", value_enum)]
        todo_type: TodoType,

        /// Question for the user
        #[arg(long)]
        query: String,

        /// Task ID (auto-detected from CWD if not provided)
        #[arg(long)]
        task_id: Option<String>,

        /// Where the user should add context
        #[arg(long)]
        suggestion: Option<String>,

        /// Priority level
        #[arg(long, value_enum, default_value_t = Priority::Medium)]
        priority: Priority,
    },

    /// Resolve a user todo
    UserTodoResolve {
        /// Todo ID
        #[arg(long)]
        id: String,

        /// The user's response
        #[arg(long)]
        response: Option<String>,
    },

    /// Update task status
    SyncTaskStatus {
        /// Task ID
        #[arg(long)]
        task_id: String,

        /// New status
        #[arg(long, value_enum)]
        status: TaskStatus,
    },

    /// Send agent heartbeat
    Heartbeat,

    /// Register project agent
    AgentRegister {
        /// OS process ID
        #[arg(long)]
        pid: Option<u32>,

        /// Agent session ID
        #[arg(long)]
        session_id: Option<String>,
    },

    /// Get agent status
    AgentStatus,

    /// Record a graph event (echo only, nothing is stored)
    GraphEvent {
        /// Event type (task_created, task_completed, draft_generated, context_added, ask_user)
        #[arg(long = "type")]
        event_type: String,

        /// Human-readable label
        #[arg(long)]
        label: String,

        /// Detail text
        #[arg(long, default_value = "")]
        detail: String,

        /// Related task ID
        #[arg(long)]
        task_id: Option<String>,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        // Bare `pawject` is a request for usage, not a mistake
        Cli::command().print_help()?;
        return Ok(());
    };

    let output = Output::new(cli.format, cli.verbose);
    let config = Config::load(&cli.api_url)?;
    output.verbose(&format!("API at {}, cwd {}", config.api_url, config.cwd.display()));

    let session = Session::new(config, output);
    dispatch(&session, command)?;

    output.verbose("Command completed successfully");
    Ok(())
}

fn dispatch(session: &Session, command: Commands) -> Result<()> {
    match command {
        Commands::Tasks => task::list(session),
        Commands::Task { id } => task::show(session, &id),
        Commands::TaskCreate { name, task_type, desc, schedule } => {
            task::create(session, &name, task_type, &desc, schedule.as_deref())
        }
        Commands::TaskStop { id } => task::stop(session, &id),
        Commands::SyncTaskStatus { task_id, status } => task::sync_status(session, &task_id, status),

        Commands::Drafts => files::drafts(session),
        Commands::Todo => files::show_todo(session),
        Commands::TodoAdd { text } => files::add_todo(session, &text.join(" ")),

        Commands::Context => context::list(session),

        Commands::UserTodos { pending } => user_todo::list(session, pending),
        Commands::UserTodoCreate { todo_type, query, task_id, suggestion, priority } => user_todo::create(
            session,
            todo_type,
            &query,
            task_id.as_deref(),
            suggestion.as_deref(),
            priority,
        ),
        Commands::UserTodoResolve { id, response } => user_todo::resolve(session, &id, response.as_deref()),

        Commands::Heartbeat => agent::heartbeat(session),
        Commands::AgentRegister { pid, session_id } => agent::register(session, pid, session_id.as_deref()),
        Commands::AgentStatus => agent::status(session),
        Commands::GraphEvent { event_type, label, detail, task_id } => {
            agent::graph_event(session, &event_type, &label, &detail, task_id.as_deref())
        }
    }
}
