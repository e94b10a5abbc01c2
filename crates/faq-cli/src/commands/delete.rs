//! Delete command implementation.

use anyhow::Result;
use clap::Args;

use faq_core::{DeleteOutcome, RecordId};

use crate::cli::ListArgs;
use crate::output;
use crate::prompt::TerminalConfirm;

use super::open_board;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Id of the item to delete
    pub id: RecordId,

    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

pub async fn run(target: &ListArgs, args: DeleteArgs) -> Result<()> {
    let mut board = open_board(target, TerminalConfirm::new(args.force)).await?;

    match board.delete(args.id).await {
        DeleteOutcome::Declined => eprintln!("Aborted."),
        DeleteOutcome::Deleted(id) => output::success(&format!("Item {} deleted", id)),
        DeleteOutcome::Failed(e) => {
            return Err(anyhow::Error::new(e).context("Failed to delete item"));
        }
    }

    Ok(())
}
