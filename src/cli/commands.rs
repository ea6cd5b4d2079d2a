use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dl", about = concat!("duelist v", env!("CARGO_PKG_VERSION"), " - a terminal client for your task list"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Task service URL (overrides config and DUELIST_URL)
    #[arg(long, global = true)]
    pub url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks grouped into sections
    List,
    /// Show one task in full
    Show(IdArgs),
    /// Show task counts (total, completed, pending, overdue, due today)
    Stats,
    /// Add a task
    Add(AddArgs),
    /// Mark a task completed
    Toggle(IdArgs),
    /// Put a completed task back into the open state
    Reset(IdArgs),
    /// Permanently delete a task
    Rm(IdArgs),
}

#[derive(Args)]
pub struct IdArgs {
    /// Task id
    pub id: i64,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    pub title: String,
    /// Longer description
    #[arg(long)]
    pub desc: Option<String>,
    /// Due date: today, tomorrow, or YYYY-MM-DD (default: today)
    #[arg(long)]
    pub due: Option<String>,
    /// Priority: normal, medium, or high (default: normal)
    #[arg(long)]
    pub priority: Option<String>,
    /// Reminder: 1h, tomorrow9, or HH:MM
    #[arg(long)]
    pub remind: Option<String>,
}
