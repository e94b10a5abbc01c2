//! List command implementation.

use anyhow::{Result, bail};
use clap::Args;

use crate::cli::ListArgs;
use crate::output::{self, PageJson};
use crate::prompt::TerminalConfirm;

use super::{invalid, open_board};

#[derive(Args, Debug)]
pub struct ListPageArgs {
    /// Page to show, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Print the page as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(target: &ListArgs, args: ListPageArgs) -> Result<()> {
    if args.page == 0 {
        bail!("Pages start at 1");
    }

    let mut board = open_board(target, TerminalConfirm::new(false)).await?;
    board
        .set_page(args.page)
        .map_err(|e| invalid(e, "Invalid page"))?;

    let view = board.page();
    if args.json {
        output::json_pretty(&PageJson::from(view))?;
    } else {
        output::page(&view);
    }

    Ok(())
}
