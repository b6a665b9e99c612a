//! A tiny line-based language for driving an [`OrderedSet`] from a script.
//!
//! Each line holds one command: `add N`, `contains N`, `remove N`, `len` or `height`. Operation
//! names are case-insensitive. Blank lines and lines starting with `#` are ignored.
//!
//! # Examples
//!
//! ```
//! use bst_set::command::{Command, Reply};
//! use bst_set::{iterative::Tree, OrderedSet};
//!
//! let mut tree = Tree::new();
//! let add: Command = "add 5".parse().unwrap();
//! let contains: Command = "CONTAINS 5".parse().unwrap();
//!
//! assert_eq!(add.apply(&mut tree), Reply::Bool(true));
//! assert_eq!(contains.apply(&mut tree), Reply::Bool(true));
//! assert_eq!(Command::Len.apply(&mut tree).to_string(), "1");
//! ```

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::OrderedSet;

/// Result type for parsing commands.
pub type Result<T> = std::result::Result<T, ParseCommandError>;

/// Why a line couldn't be turned into a [`Command`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    /// The line had no words.
    #[error("empty command")]
    Empty,
    /// The first word isn't an operation we know.
    #[error("unknown operation `{0}`")]
    UnknownOperation(String),
    /// The operation takes a key but none was given.
    #[error("`{0}` needs a value")]
    MissingValue(String),
    /// The key isn't an `i64`.
    #[error("invalid value `{value}`: {source}")]
    InvalidValue {
        /// The text that failed to parse.
        value: String,
        /// Why it failed.
        #[source]
        source: ParseIntError,
    },
    /// Words were left over after a complete command.
    #[error("unexpected trailing input `{0}`")]
    TrailingInput(String),
}

/// One operation to run against a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// [`OrderedSet::add`]
    Add(i64),
    /// [`OrderedSet::contains`]
    Contains(i64),
    /// [`OrderedSet::remove`]
    Remove(i64),
    /// [`OrderedSet::len`]
    Len,
    /// [`OrderedSet::height`]
    Height,
}

/// What running a [`Command`] produced. Its `Display` form is what the driver prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// The answer of `add`, `contains` or `remove`.
    Bool(bool),
    /// The answer of `len` or `height`.
    Count(usize),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Count(n) => write!(f, "{n}"),
        }
    }
}

impl Command {
    /// Parses one script line. Returns `Ok(None)` for blank lines and `#` comments.
    pub fn parse_line(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        line.parse().map(Some)
    }

    /// Runs this command against `set`.
    pub fn apply<S>(self, set: &mut S) -> Reply
    where
        S: OrderedSet + ?Sized,
    {
        match self {
            Self::Add(x) => Reply::Bool(set.add(x)),
            Self::Contains(x) => Reply::Bool(set.contains(x)),
            Self::Remove(x) => Reply::Bool(set.remove(x)),
            Self::Len => Reply::Count(set.len()),
            Self::Height => Reply::Count(set.height()),
        }
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self> {
        let mut words = s.split_whitespace();
        let op = words.next().ok_or(ParseCommandError::Empty)?;

        let value = |words: &mut std::str::SplitWhitespace<'_>| -> Result<i64> {
            let value = words
                .next()
                .ok_or_else(|| ParseCommandError::MissingValue(op.to_string()))?;
            value
                .parse()
                .map_err(|source| ParseCommandError::InvalidValue {
                    value: value.to_string(),
                    source,
                })
        };

        let command = match op.to_ascii_lowercase().as_str() {
            "add" => Self::Add(value(&mut words)?),
            "contains" => Self::Contains(value(&mut words)?),
            "remove" => Self::Remove(value(&mut words)?),
            "len" => Self::Len,
            "height" => Self::Height,
            _ => return Err(ParseCommandError::UnknownOperation(op.to_string())),
        };

        let rest: Vec<&str> = words.collect();
        if !rest.is_empty() {
            return Err(ParseCommandError::TrailingInput(rest.join(" ")));
        }

        Ok(command)
    }
}
