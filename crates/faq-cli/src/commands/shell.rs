//! Interactive shell over one board.

use std::io::{self, Write};
use std::str::FromStr;

use anyhow::Result;
use colored::Colorize;

use faq_core::{DeleteOutcome, Field, RecordId};

use crate::cli::ListArgs;
use crate::output;
use crate::prompt::TerminalConfirm;

use super::{CliBoard, failure, open_board, report_submit};

const HELP: &str = "\
list              show the current page
page N            go to page N
new               start a new item
edit ID           edit an existing item
set FIELD VALUE   set title, body or letter on the draft
show              show the draft
submit            save the draft
cancel            discard the draft
delete ID         delete an item
reload            reload the list
help              show this help
quit              leave the shell";

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellCommand {
    List,
    Page(usize),
    New,
    Edit(RecordId),
    Set(Field, String),
    Show,
    Submit,
    Cancel,
    Delete(RecordId),
    Reload,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let id = |rest: &str| {
            RecordId::from_str(rest).map_err(|_| format!("'{}' is not an item id", rest))
        };

        match word.to_ascii_lowercase().as_str() {
            "list" | "ls" => Ok(ShellCommand::List),
            "page" => rest
                .parse()
                .map(ShellCommand::Page)
                .map_err(|_| format!("'{}' is not a page number", rest)),
            "new" => Ok(ShellCommand::New),
            "edit" => id(rest).map(ShellCommand::Edit),
            "set" => {
                let (name, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let field = Field::from_str(name)
                    .map_err(|_| format!("unknown field '{}' (title, body, letter)", name))?;
                Ok(ShellCommand::Set(field, value.trim_start().to_string()))
            }
            "show" => Ok(ShellCommand::Show),
            "submit" | "save" => Ok(ShellCommand::Submit),
            "cancel" => Ok(ShellCommand::Cancel),
            "delete" | "rm" => id(rest).map(ShellCommand::Delete),
            "reload" => Ok(ShellCommand::Reload),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" => Ok(ShellCommand::Quit),
            other => Err(format!("unknown command '{}', try 'help'", other)),
        }
    }
}

pub async fn run(target: &ListArgs) -> Result<()> {
    let mut board = open_board(target, TerminalConfirm::new(false)).await?;
    output::page(&board.page());

    loop {
        eprint!("{} ", "faq>".bold());
        io::stderr().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<ShellCommand>() {
            Ok(ShellCommand::Quit) => break,
            Ok(command) => {
                if let Err(e) = execute(&mut board, command).await {
                    output::error(&format!("{:#}", e));
                }
            }
            Err(message) => output::error(&message),
        }
    }

    Ok(())
}

async fn execute(board: &mut CliBoard, command: ShellCommand) -> Result<()> {
    match command {
        ShellCommand::List => output::page(&board.page()),
        ShellCommand::Page(n) => {
            board.set_page(n)?;
            output::page(&board.page());
        }
        ShellCommand::New => board.begin_create(),
        ShellCommand::Edit(id) => {
            board.begin_edit(id)?;
            output::session(board.session());
        }
        ShellCommand::Set(field, value) => board.set_field(field, value),
        ShellCommand::Show => output::session(board.session()),
        ShellCommand::Submit => report_submit(board.submit().await?)?,
        ShellCommand::Cancel => board.cancel(),
        ShellCommand::Delete(id) => match board.delete(id).await {
            DeleteOutcome::Declined => eprintln!("Aborted."),
            DeleteOutcome::Deleted(id) => output::success(&format!("Item {} deleted", id)),
            DeleteOutcome::Failed(e) => return Err(e.into()),
        },
        ShellCommand::Reload => {
            if !board.reload().await {
                return Err(failure(board));
            }
            output::page(&board.page());
        }
        ShellCommand::Help => println!("{}", HELP),
        ShellCommand::Quit => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<ShellCommand, String> {
        line.parse()
    }

    #[test]
    fn parses_simple_commands() {
        assert_eq!(parse("list"), Ok(ShellCommand::List));
        assert_eq!(parse("  SUBMIT \n"), Ok(ShellCommand::Submit));
        assert_eq!(parse("quit"), Ok(ShellCommand::Quit));
    }

    #[test]
    fn parses_ids_and_pages() {
        assert_eq!(parse("page 3"), Ok(ShellCommand::Page(3)));
        assert_eq!(
            parse("edit 12"),
            Ok(ShellCommand::Edit(RecordId::new(12).unwrap()))
        );
        assert!(parse("delete 0").is_err());
        assert!(parse("page x").is_err());
    }

    #[test]
    fn set_keeps_spaces_in_value() {
        assert_eq!(
            parse("set title How do I reset my password?"),
            Ok(ShellCommand::Set(
                Field::Title,
                "How do I reset my password?".to_string()
            ))
        );
        assert_eq!(
            parse("set body"),
            Ok(ShellCommand::Set(Field::Body, String::new()))
        );
    }

    #[test]
    fn rejects_unknown_input() {
        assert!(parse("set colour red").is_err());
        assert!(parse("frobnicate").is_err());
    }
}
