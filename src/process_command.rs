use crate::linked_list::LinkedList;
use log::{debug, warn};
use std::num::ParseIntError;
use thiserror::Error;

#[cfg(feature = "extensions")]
pub const HELP_TEXT: &str = "\
commands:
  add <int>       append a value at the tail
  prepend <int>   insert a value at the head
  display         show the list
  len             number of nodes
  empty           whether the list has no nodes
  values          values as a bracketed sequence
  graph           Graphviz DOT description of the chain
  help            this summary
  q               quit";

#[cfg(not(feature = "extensions"))]
pub const HELP_TEXT: &str = "\
commands:
  add <int>       append a value at the tail
  prepend <int>   insert a value at the head
  display         show the list
  len             number of nodes
  empty           whether the list has no nodes
  values          values as a bracketed sequence
  help            this summary
  q               quit";

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("unrecognized command: {0}")]
    Unrecognized(String),

    #[error("missing value for '{0}'")]
    MissingValue(&'static str),

    #[error("invalid value: {0}")]
    InvalidValue(#[from] ParseIntError),

    #[cfg(not(feature = "extensions"))]
    #[error("graph output requires the 'extensions' feature")]
    GraphUnavailable,
}

/// A parsed list command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Add(i32),
    Prepend(i32),
    Display,
    Len,
    Empty,
    Values,
    Graph,
    Help,
}

impl Command {
    /// Parses one line of input, e.g. `add 10` or `display`.
    pub fn parse(input: &str) -> Result<Command, CommandError> {
        let mut parts = input.split_whitespace();
        let keyword = match parts.next() {
            Some(keyword) => keyword,
            None => return Err(CommandError::Unrecognized(String::new())),
        };

        let command = match keyword {
            "add" => Command::Add(parse_value(parts.next(), "add")?),
            "prepend" => Command::Prepend(parse_value(parts.next(), "prepend")?),
            "display" => Command::Display,
            "len" => Command::Len,
            "empty" => Command::Empty,
            "values" => Command::Values,
            "graph" => Command::Graph,
            "help" => Command::Help,
            _ => return Err(CommandError::Unrecognized(input.trim().to_string())),
        };

        // Trailing tokens are not part of any command
        if parts.next().is_some() {
            return Err(CommandError::Unrecognized(input.trim().to_string()));
        }
        Ok(command)
    }
}

fn parse_value(token: Option<&str>, keyword: &'static str) -> Result<i32, CommandError> {
    let token = token.ok_or(CommandError::MissingValue(keyword))?;
    Ok(token.parse::<i32>()?)
}

/// Applies a command to the list.
///
/// # Returns
///
/// The text to show the user, if the command produces any output.
pub fn apply_command(
    list: &mut LinkedList,
    command: Command,
) -> Result<Option<String>, CommandError> {
    let output = match command {
        Command::Add(value) => {
            list.add(value);
            None
        }
        Command::Prepend(value) => {
            list.prepend(value);
            None
        }
        Command::Display => Some(list.render()),
        Command::Len => Some(list.len().to_string()),
        Command::Empty => Some(list.is_empty().to_string()),
        Command::Values => Some(format!("{:?}", list.values())),
        Command::Graph => Some(graph_output(list)?),
        Command::Help => Some(HELP_TEXT.to_string()),
    };
    Ok(output)
}

#[cfg(feature = "extensions")]
fn graph_output(list: &LinkedList) -> Result<String, CommandError> {
    Ok(crate::visualize_list::render_dot(list))
}

#[cfg(not(feature = "extensions"))]
fn graph_output(_list: &LinkedList) -> Result<String, CommandError> {
    Err(CommandError::GraphUnavailable)
}

/// Parses and applies one line of input. A failed command leaves the list untouched.
pub fn process_command(
    list: &mut LinkedList,
    input: &str,
) -> Result<Option<String>, CommandError> {
    let command = Command::parse(input).inspect_err(|err| {
        warn!("rejected '{}': {}", input.trim(), err);
    })?;
    debug!("applying {:?}", command);
    apply_command(list, command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_commands() {
        assert_eq!(Command::parse("add 10"), Ok(Command::Add(10)));
        assert_eq!(Command::parse("  prepend   -5 "), Ok(Command::Prepend(-5)));
        assert_eq!(Command::parse("display"), Ok(Command::Display));
        assert_eq!(Command::parse("len"), Ok(Command::Len));
        assert_eq!(Command::parse("empty"), Ok(Command::Empty));
        assert_eq!(Command::parse("values"), Ok(Command::Values));
        assert_eq!(Command::parse("graph"), Ok(Command::Graph));
        assert_eq!(Command::parse("help"), Ok(Command::Help));
    }

    #[test]
    fn test_parse_invalid_commands() {
        assert_eq!(
            Command::parse("remove 3"),
            Err(CommandError::Unrecognized("remove 3".to_string()))
        );
        assert_eq!(Command::parse(""), Err(CommandError::Unrecognized(String::new())));
        assert_eq!(Command::parse("add"), Err(CommandError::MissingValue("add")));
        assert_eq!(
            Command::parse("display now"),
            Err(CommandError::Unrecognized("display now".to_string()))
        );
        assert!(matches!(Command::parse("add ten"), Err(CommandError::InvalidValue(_))));
        assert!(matches!(
            Command::parse("prepend 99999999999"),
            Err(CommandError::InvalidValue(_))
        ));
        assert!(matches!(Command::parse("ADD 1"), Err(CommandError::Unrecognized(_))));
    }

    #[test]
    fn test_process_demo_sequence() {
        let mut list = LinkedList::new();
        assert_eq!(process_command(&mut list, "add 10"), Ok(None));
        assert_eq!(process_command(&mut list, "add 20"), Ok(None));
        assert_eq!(process_command(&mut list, "prepend 5"), Ok(None));
        assert_eq!(
            process_command(&mut list, "display"),
            Ok(Some("5 -> 10 -> 20 -> nil".to_string()))
        );
        assert_eq!(process_command(&mut list, "len"), Ok(Some("3".to_string())));
        assert_eq!(process_command(&mut list, "values"), Ok(Some("[5, 10, 20]".to_string())));
        assert_eq!(process_command(&mut list, "empty"), Ok(Some("false".to_string())));
    }

    #[test]
    fn test_failed_command_leaves_list_unchanged() {
        let mut list = LinkedList::new();
        process_command(&mut list, "add 1").unwrap();
        let before = list.clone();
        assert!(process_command(&mut list, "add x").is_err());
        assert!(process_command(&mut list, "prepend").is_err());
        assert!(process_command(&mut list, "pop").is_err());
        assert_eq!(list, before);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_empty_list_queries() {
        let mut list = LinkedList::new();
        assert_eq!(process_command(&mut list, "display"), Ok(Some("nil".to_string())));
        assert_eq!(process_command(&mut list, "empty"), Ok(Some("true".to_string())));
        assert_eq!(process_command(&mut list, "values"), Ok(Some("[]".to_string())));
    }

    #[test]
    fn test_help_lists_commands() {
        let mut list = LinkedList::new();
        let help = process_command(&mut list, "help").unwrap().unwrap();
        assert!(help.contains("add <int>"));
        assert!(help.contains("prepend <int>"));
    }

    #[cfg(feature = "extensions")]
    #[test]
    fn test_help_mentions_graph_with_extensions() {
        let mut list = LinkedList::new();
        let help = process_command(&mut list, "help").unwrap().unwrap();
        assert!(help.contains("graph"));
    }

    #[cfg(not(feature = "extensions"))]
    #[test]
    fn test_help_omits_graph_without_extensions() {
        let mut list = LinkedList::new();
        let help = process_command(&mut list, "help").unwrap().unwrap();
        assert!(!help.contains("graph"));
        assert_eq!(
            process_command(&mut list, "graph"),
            Err(CommandError::GraphUnavailable)
        );
    }

    #[cfg(feature = "extensions")]
    #[test]
    fn test_graph_command_returns_dot() {
        let mut list = LinkedList::new();
        process_command(&mut list, "add 1").unwrap();
        let dot = process_command(&mut list, "graph").unwrap().unwrap();
        assert!(dot.starts_with("digraph"));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CommandError::Unrecognized("pop".to_string()).to_string(),
            "unrecognized command: pop"
        );
        assert_eq!(CommandError::MissingValue("add").to_string(), "missing value for 'add'");
    }
}
