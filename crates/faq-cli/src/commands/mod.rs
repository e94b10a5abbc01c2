//! Subcommand implementations.

pub mod create;
pub mod delete;
pub mod list;
pub mod shell;
pub mod update;

use anyhow::{Context, Result, anyhow};

use faq_core::{Board, Error, Pagination, SubmitOutcome};

use crate::cli::{Cli, Commands, ListArgs};
use crate::output;
use crate::prompt::TerminalConfirm;
use crate::repository::CliRepository;

pub type CliBoard = Board<CliRepository, TerminalConfirm>;

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List(args) => list::run(&cli.target, args).await,
        Commands::Create(args) => create::run(&cli.target, args).await,
        Commands::Update(args) => update::run(&cli.target, args).await,
        Commands::Delete(args) => delete::run(&cli.target, args).await,
        Commands::Shell => shell::run(&cli.target).await,
    }
}

/// Open the list and load it.
pub async fn open_board(target: &ListArgs, confirm: TerminalConfirm) -> Result<CliBoard> {
    let repo = CliRepository::open(target)?;
    let pagination = Pagination::new(target.page_size).context("Invalid page size")?;
    let mut board = Board::new(repo, confirm, pagination);

    if !board.mount().await {
        return Err(failure(&board).context("Failed to load list"));
    }

    Ok(board)
}

/// Report the outcome of a submit; a failed save is an error.
pub fn report_submit(outcome: SubmitOutcome) -> Result<()> {
    match outcome {
        SubmitOutcome::Created(id) => output::success(&format!("Item {} created", id)),
        SubmitOutcome::Updated(id) => output::success(&format!("Item {} updated", id)),
        SubmitOutcome::Failed(e) => return Err(anyhow::Error::new(e).context("Failed to save item")),
    }
    Ok(())
}

/// The board's last repository failure as an error.
pub fn failure(board: &CliBoard) -> anyhow::Error {
    board
        .last_failure()
        .cloned()
        .map(anyhow::Error::new)
        .unwrap_or_else(|| anyhow!("unknown failure"))
}

/// Map a library error into the CLI's error type.
pub fn invalid(e: Error, what: &'static str) -> anyhow::Error {
    anyhow::Error::new(e).context(what)
}
