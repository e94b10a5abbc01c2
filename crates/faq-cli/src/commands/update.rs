//! Update command implementation.

use anyhow::{Result, bail};
use clap::Args;

use faq_core::{Field, RecordId};

use crate::cli::ListArgs;
use crate::prompt::TerminalConfirm;

use super::{invalid, open_board, report_submit};

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Id of the item to change
    pub id: RecordId,

    /// New question title
    #[arg(long)]
    pub title: Option<String>,

    /// New answer text
    #[arg(long)]
    pub body: Option<String>,

    /// New index letter
    #[arg(long)]
    pub letter: Option<String>,
}

pub async fn run(target: &ListArgs, args: UpdateArgs) -> Result<()> {
    let mut board = open_board(target, TerminalConfirm::new(false)).await?;

    board
        .begin_edit(args.id)
        .map_err(|e| invalid(e, "Cannot edit item"))?;

    let changes = [
        (Field::Title, args.title),
        (Field::Body, args.body),
        (Field::Letter, args.letter),
    ];
    for (field, value) in changes {
        if let Some(value) = value {
            board.set_field(field, value);
        }
    }

    match board.submit().await {
        Ok(outcome) => report_submit(outcome),
        Err(e) => bail!("{}", e),
    }
}
