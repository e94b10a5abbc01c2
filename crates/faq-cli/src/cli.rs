//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

use faq_core::{DEFAULT_LIST_NAME, DEFAULT_PAGE_SIZE};

use crate::commands::{create, delete, list, update};

/// Manage a FAQ list.
#[derive(Parser, Debug)]
#[command(name = "faq")]
#[command(author, version = env!("FAQ_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub target: ListArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Which list to work on and how to show it.
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Where lists live: a file:// directory or an https:// site
    /// (defaults to the local data directory)
    #[arg(long, env = "FAQ_LIST_URL", global = true)]
    pub list_url: Option<String>,

    /// List title
    #[arg(long, default_value = DEFAULT_LIST_NAME, global = true)]
    pub list: String,

    /// Items per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, global = true)]
    pub page_size: usize,

    /// Bearer token for remote lists
    #[arg(long, env = "FAQ_ACCESS_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show one page of the list
    List(list::ListPageArgs),

    /// Add an item
    Create(create::CreateArgs),

    /// Change an existing item
    Update(update::UpdateArgs),

    /// Delete an item
    Delete(delete::DeleteArgs),

    /// Work on the list interactively
    Shell,
}
