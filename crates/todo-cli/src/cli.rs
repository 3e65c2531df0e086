use clap::{ArgGroup, Args, Parser, Subcommand};
use clap_complete::Shell;

use todo_core::VERSION;

/// Todo - a small todo-item store with memory and SQLite backends
#[derive(Parser)]
#[command(name = "todo")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true, env = "TODO_CONFIG", value_name = "PATH")]
    pub config: Option<String>,

    /// Path to the SQLite database (overrides config)
    #[arg(long, global = true, env = "TODO_DB", value_name = "PATH")]
    pub db: Option<String>,

    /// Use a volatile in-memory store for this invocation
    #[arg(long, global = true)]
    pub memory: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Database path to record in the config (defaults to the XDG data dir)
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Item ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Item title
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Optional description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Mark the item as important
    #[arg(short, long)]
    pub important: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
#[command(group(ArgGroup::new("description_change").args(["description", "clear_description"])))]
#[command(group(ArgGroup::new("importance").args(["important", "not_important"])))]
pub struct EditArgs {
    /// Item ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// New title
    #[arg(short, long)]
    pub title: Option<String>,

    /// New description (an empty string is kept as empty)
    #[arg(short, long)]
    pub description: Option<String>,

    /// Remove the description
    #[arg(long)]
    pub clear_description: bool,

    /// Mark the item as important
    #[arg(long)]
    pub important: bool,

    /// Mark the item as not important
    #[arg(long)]
    pub not_important: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Item ID
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for the `request` command
#[derive(Args)]
pub struct RequestArgs {
    /// Request method (GET, POST, PUT, DELETE)
    #[arg(value_name = "METHOD")]
    pub method: String,

    /// Request path (e.g. /api/todos/1)
    #[arg(value_name = "PATH")]
    pub path: String,

    /// JSON request body
    #[arg(long)]
    pub body: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default config file
    Init(InitArgs),

    /// List items
    List(ListArgs),

    /// Show a specific item by ID
    Show(ShowArgs),

    /// Add a new item
    Add(AddArgs),

    /// Change fields of an existing item
    Edit(EditArgs),

    /// Delete an item
    Delete(DeleteArgs),

    /// Run a single API request against the store
    Request(RequestArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
