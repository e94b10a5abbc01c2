//! Create command implementation.

use anyhow::{Result, bail};
use clap::Args;

use faq_core::Field;

use crate::cli::ListArgs;
use crate::prompt::TerminalConfirm;

use super::{open_board, report_submit};

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Question title
    #[arg(long)]
    pub title: String,

    /// Answer text
    #[arg(long, default_value = "")]
    pub body: String,

    /// Index letter
    #[arg(long, default_value = "")]
    pub letter: String,
}

pub async fn run(target: &ListArgs, args: CreateArgs) -> Result<()> {
    let mut board = open_board(target, TerminalConfirm::new(false)).await?;

    board.begin_create();
    board.set_field(Field::Title, args.title);
    board.set_field(Field::Body, args.body);
    board.set_field(Field::Letter, args.letter);

    match board.submit().await {
        Ok(outcome) => report_submit(outcome),
        Err(e) => bail!("{}", e),
    }
}
