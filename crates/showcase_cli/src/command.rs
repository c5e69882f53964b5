//! Line command parsing for the interactive shell.
//!
//! # Responsibility
//! - Map one input line to one unit operation or view request.
//! - Resolve user task references (row number or full id) against a list.
//!
//! # Invariants
//! - Parsing never panics; bad input becomes `ParseError`.
//! - Draft text after the command word is kept verbatim.

use showcase_core::{TaskId, TaskList};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub const HELP_TEXT: &str = "\
commands:
  draft <text>     replace the draft buffer
  add [text]       add the draft (or <text>) as a task
  toggle <n|id>    flip done on task row n or id
  delete <n|id>    remove task row n or id
  inc | dec | reset
  tasks | counter | card
  help | quit";

/// Task reference as typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskRef {
    /// 1-based display row.
    Row(usize),
    Id(Uuid),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Draft(String),
    Add(Option<String>),
    Toggle(TaskRef),
    Delete(TaskRef),
    Increment,
    Decrement,
    Reset,
    ShowTasks,
    ShowCounter,
    ShowCard,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    UnknownCommand(String),
    MissingArgument(&'static str),
    InvalidTaskRef(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::UnknownCommand(word) => write!(f, "unknown command `{word}`; try `help`"),
            Self::MissingArgument(command) => write!(f, "`{command}` needs an argument"),
            Self::InvalidTaskRef(value) => {
                write!(f, "`{value}` is neither a row number nor a task id")
            }
        }
    }
}

impl Error for ParseError {}

pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim_end_matches(['\n', '\r']);
    let trimmed = line.trim_start();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, Some(rest)),
        None => (trimmed, None),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Err(ParseError::Empty),
        "draft" => Ok(Command::Draft(rest.unwrap_or_default().to_string())),
        "add" => Ok(Command::Add(
            rest.filter(|text| !text.trim().is_empty())
                .map(str::to_string),
        )),
        "toggle" => parse_task_ref("toggle", rest).map(Command::Toggle),
        "delete" | "rm" => parse_task_ref("delete", rest).map(Command::Delete),
        "inc" | "+" => Ok(Command::Increment),
        "dec" | "-" => Ok(Command::Decrement),
        "reset" => Ok(Command::Reset),
        "tasks" => Ok(Command::ShowTasks),
        "counter" => Ok(Command::ShowCounter),
        "card" => Ok(Command::ShowCard),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn parse_task_ref(command: &'static str, rest: Option<&str>) -> Result<TaskRef, ParseError> {
    let value = rest.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Err(ParseError::MissingArgument(command));
    }
    if let Ok(row) = value.parse::<usize>() {
        if row == 0 {
            return Err(ParseError::InvalidTaskRef(value.to_string()));
        }
        return Ok(TaskRef::Row(row));
    }
    Uuid::parse_str(value)
        .map(TaskRef::Id)
        .map_err(|_| ParseError::InvalidTaskRef(value.to_string()))
}

/// Resolves a reference to a task id.
///
/// Rows outside the list resolve to `None`. Ids resolve as-is, so an unknown
/// id reaches the unit and is ignored there.
pub fn resolve_task_ref(task_ref: TaskRef, list: &TaskList) -> Option<TaskId> {
    match task_ref {
        TaskRef::Row(row) => list.tasks().get(row - 1).map(|task| task.id),
        TaskRef::Id(uuid) => Some(TaskId::from_uuid(uuid)),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_command, resolve_task_ref, Command, ParseError, TaskRef};
    use showcase_core::TaskList;
    use uuid::Uuid;

    #[test]
    fn draft_text_is_kept_verbatim() {
        assert_eq!(
            parse_command("draft   Buy milk  \n").unwrap(),
            Command::Draft("  Buy milk  ".to_string())
        );
        assert_eq!(parse_command("draft").unwrap(), Command::Draft(String::new()));
    }

    #[test]
    fn add_takes_optional_text() {
        assert_eq!(parse_command("add").unwrap(), Command::Add(None));
        assert_eq!(parse_command("add  \t").unwrap(), Command::Add(None));
        assert_eq!(
            parse_command("ADD walk dog").unwrap(),
            Command::Add(Some("walk dog".to_string()))
        );
    }

    #[test]
    fn task_refs_accept_rows_and_ids() {
        assert_eq!(
            parse_command("toggle 2").unwrap(),
            Command::Toggle(TaskRef::Row(2))
        );
        let id = Uuid::new_v4();
        assert_eq!(
            parse_command(&format!("rm {id}")).unwrap(),
            Command::Delete(TaskRef::Id(id))
        );
    }

    #[test]
    fn any_whitespace_separates_the_command_word() {
        assert_eq!(
            parse_command("toggle\t1").unwrap(),
            Command::Toggle(TaskRef::Row(1))
        );
        assert_eq!(
            parse_command("draft\tpadded ").unwrap(),
            Command::Draft("padded ".to_string())
        );
    }

    #[test]
    fn bad_input_maps_to_parse_errors() {
        assert_eq!(parse_command("   "), Err(ParseError::Empty));
        assert_eq!(
            parse_command("toggle"),
            Err(ParseError::MissingArgument("toggle"))
        );
        assert_eq!(
            parse_command("delete 0"),
            Err(ParseError::InvalidTaskRef("0".to_string()))
        );
        assert_eq!(
            parse_command("delete abc"),
            Err(ParseError::InvalidTaskRef("abc".to_string()))
        );
        assert!(matches!(
            parse_command("launch"),
            Err(ParseError::UnknownCommand(_))
        ));
    }

    #[test]
    fn rows_resolve_against_display_order() {
        let mut list = TaskList::new();
        list.set_draft("first");
        let first = list.add_task().unwrap();

        assert_eq!(resolve_task_ref(TaskRef::Row(1), &list), Some(first));
        assert_eq!(resolve_task_ref(TaskRef::Row(2), &list), None);
    }
}
