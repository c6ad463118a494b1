//! Line commands for the interactive CLI.

use crate::types::{TodoAction, TodoId};
use std::str::FromStr;
use thiserror::Error;

/// Help text listing every command
pub const USAGE: &str = "\
commands:
  add <text>      add a task
  toggle <id>     flip a task between pending and done (aliases: done, undo)
  delete <id>     remove a task (alias: rm)
  list            show all tasks
  help            show this help
  quit            exit (alias: exit)";

/// One parsed line of input
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `add <text>`
    Add(String),
    /// `toggle <id>`
    Toggle(TodoId),
    /// `delete <id>`
    Delete(TodoId),
    /// `list`
    List,
    /// `help`
    Help,
    /// `quit`
    Quit,
}

/// Why a line could not be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Blank line
    #[error("empty input")]
    Empty,

    /// First word is not a known command
    #[error("unknown command `{0}`")]
    Unknown(String),

    /// Command needs an id and got none
    #[error("`{0}` needs a task id")]
    MissingId(String),

    /// Argument is not a valid id
    #[error("`{0}` is not a valid task id")]
    InvalidId(String),
}

impl Command {
    /// The store action this command maps to, if any
    #[must_use]
    pub fn into_action(self) -> Option<TodoAction> {
        match self {
            Self::Add(text) => Some(TodoAction::Add { text }),
            Self::Toggle(id) => Some(TodoAction::Toggle { id }),
            Self::Delete(id) => Some(TodoAction::Delete { id }),
            Self::List | Self::Help | Self::Quit => None,
        }
    }
}

fn parse_id(command: &str, arg: &str) -> Result<TodoId, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingId(command.to_string()));
    }
    arg.parse()
        .map_err(|_| CommandError::InvalidId(arg.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }

        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        match word.to_ascii_lowercase().as_str() {
            // Blank text still reaches the store, which treats it as a no-op.
            "add" => Ok(Self::Add(rest.to_string())),
            cmd @ ("toggle" | "done" | "undo") => parse_id(cmd, rest).map(Self::Toggle),
            cmd @ ("delete" | "rm") => parse_id(cmd, rest).map(Self::Delete),
            "list" | "ls" => Ok(Self::List),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}
