/*!
Error types for registration and parsing.

Registration (naming options and commands) fails with [`BuildError`]; parsing
an argument list fails with [`ParseError`]. Failures from converting a single
token into a typed value are [`ValueError`]s, carried unmodified inside
[`ParseError::Value`]. [`Error`] wraps all three, for callers that want a
single error type.
 */

use thiserror::Error;

use crate::{parameter::ValueError, validation::NameKind};

/// Something was wrong with an option or command name at registration time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BuildError {
    /// The name (or one half of a `-s,--long` pair) was empty
    #[error("name cannot be empty: {0}")]
    EmptyName(&'static str),

    /// The name starts with something other than a letter, or contains a
    /// character that isn't allowed
    #[error("invalid name for argument: {0}")]
    InvalidName(String),

    /// The name is too long or too short for its kind
    #[error("name has invalid size: {name} ({len}) [{kind}: {min}-{max}]")]
    InvalidSize {
        name: String,
        len: usize,
        kind: NameKind,
        min: u8,
        max: u8,
    },

    /// The name is on the configured list of reserved names
    #[error("name is reserved: {0}")]
    ReservedName(String),

    /// Another option (or command) was already registered with this name
    #[error("name is already registered: {0}")]
    DuplicateName(String),
}

/// Something was wrong with the argument list given to a parse call.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The token matched no registered option or command
    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    /// An option that needs a value was the last token
    #[error("insufficient values for argument: {0}")]
    InsufficientValues(String),

    /// An option appeared more than once. `names` lists every name the option
    /// answers to.
    #[error("same argument appears multiple times: {names}")]
    DuplicateArgument { names: String },

    /// The option's value couldn't be converted into the option's type
    #[error("{option}: {error}")]
    Value {
        option: String,
        #[source]
        error: ValueError,
    },

    /// An argument from the environment wasn't valid UTF-8
    #[error("argument wasn't valid UTF-8: {0:?}")]
    InvalidUtf8(String),
}

impl ParseError {
    /// If this error came from converting a value, get the conversion error
    #[must_use]
    pub fn value_error(&self) -> Option<&ValueError> {
        match self {
            Self::Value { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Any error produced by this crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Value(#[from] ValueError),
}
