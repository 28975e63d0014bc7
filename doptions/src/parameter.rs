/*!
Conversion from a single command-line token into a typed value.

Any type that implements [`Value`] can be bound to an option. The common
primitive types are provided out of the box; your own types can implement
[`Value`] directly, opt in to their [`FromStr`] implementation with
[`ParsedValue`], or use `#[derive(Value)]`.
 */

use core::{fmt::Display, str::FromStr};
use std::error::Error as StdError;

use joinery::JoinableIterator as _;
use thiserror::Error;

/// A boxed error from a user-provided conversion.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Things that can go wrong converting a token into a typed value.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ValueError {
    /// The token is a valid number, but it doesn't fit in the target type
    #[error("value out of range: {value} ({min} - {max})")]
    OutOfRange {
        value: String,
        min: String,
        max: String,
    },

    /// The token isn't a number at all
    #[error("invalid numeric literal {literal:?}: {source}")]
    InvalidLiteral {
        literal: String,
        #[source]
        source: BoxError,
    },

    /// The token should have been one of these (or, possibly, a case
    /// insensitive variation)
    #[error("{arg:?} should be one of: {}", .expected.iter().join_with(", "))]
    ShouldBe {
        arg: String,
        expected: &'static [&'static str],
    },

    /// A user-provided conversion failed
    #[error("failed to parse {arg:?}: {source}")]
    Custom {
        arg: String,
        #[source]
        source: BoxError,
    },
}

impl ValueError {
    pub fn out_of_range(value: impl Display, min: impl Display, max: impl Display) -> Self {
        Self::OutOfRange {
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    pub fn invalid_literal(literal: &str, source: impl Into<BoxError>) -> Self {
        Self::InvalidLiteral {
            literal: literal.to_owned(),
            source: source.into(),
        }
    }

    pub fn should_be(arg: &str, expected: &'static [&'static str]) -> Self {
        Self::ShouldBe {
            arg: arg.to_owned(),
            expected,
        }
    }

    pub fn custom(arg: &str, source: impl Into<BoxError>) -> Self {
        Self::Custom {
            arg: arg.to_owned(),
            source: source.into(),
        }
    }
}

/**
A type that can be parsed from a single command-line token.

Most types are options: they take the token that follows the option name on
the command line as their value. A type can set [`TAKES_ARGUMENT`] to `false`
to act as a flag instead; flags consume no token, and are given the literal
`"true"` when they're present on the command line. [`bool`] is the flag type
provided by this crate.

[`TAKES_ARGUMENT`]: Value::TAKES_ARGUMENT
*/
pub trait Value: Sized {
    /// Whether an option of this type consumes the token after its name.
    const TAKES_ARGUMENT: bool = true;

    /// Parse a `Value` from a token given on the command line
    fn from_arg(arg: &str) -> Result<Self, ValueError>;
}

/// For types with a [`FromStr`] implementation, [`ParsedValue`] automatically
/// gives them a [`Value`] implementation so that they can be used as
/// command line options. Parse failures are reported as
/// [`ValueError::Custom`].
pub trait ParsedValue: FromStr {}

impl<T> Value for T
where
    T: ParsedValue,
    T::Err: Into<BoxError>,
{
    #[inline]
    fn from_arg(arg: &str) -> Result<Self, ValueError> {
        arg.parse().map_err(|err| ValueError::custom(arg, err))
    }
}
