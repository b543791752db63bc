use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}', type 'help' for the list")]
    Unknown(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("'{0}' is not a number")]
    InvalidNumber(String),
}

/// One line of user input, already split into verb and argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Chips,
    Filter(String),
    Open(String),
    Next,
    Previous,
    /// 1-based, matching the position dots under the lightbox image.
    Jump(isize),
    Close,
    Show,
    Featured,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        let argument = |name: &'static str| {
            if rest.is_empty() {
                Err(CommandError::MissingArgument(name))
            } else {
                Ok(rest.to_string())
            }
        };

        match verb.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "list" | "ls" => Ok(Command::List),
            "chips" | "categories" => Ok(Command::Chips),
            "filter" | "f" => argument("filter").map(Command::Filter),
            "open" | "o" => argument("open").map(Command::Open),
            "next" | "n" | "right" => Ok(Command::Next),
            "prev" | "previous" | "p" | "left" => Ok(Command::Previous),
            "jump" | "j" => {
                let raw = argument("jump")?;
                raw.parse::<isize>()
                    .map(Command::Jump)
                    .map_err(|_| CommandError::InvalidNumber(raw))
            }
            "close" | "esc" | "escape" => Ok(Command::Close),
            "show" => Ok(Command::Show),
            "featured" | "home" => Ok(Command::Featured),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

pub const HELP: &str = "\
commands:
  list                 show the items matching the current filter
  chips                show the filter chips with their counts
  filter <category>    filter by category label or slug (\"all\" clears it)
  open <id>            open an item in the lightbox
  next | prev          page through the open item's images
  jump <n>             go to image n of the open item
  close                close the lightbox
  show                 redraw the lightbox
  featured             show the home page selection
  quit                 leave";
