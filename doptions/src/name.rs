/*!
Parsing of option names as they're given at registration time: `-s`,
`--long`, or the combined `-s,--long`.
 */

use core::fmt;

use joinery::JoinableIterator as _;

use crate::{
    errors::BuildError,
    validation::{NameKind, NameValidationConfig},
};

/// The set of names that identify a particular option (`-short`, `--long`).
/// Names are stored with their prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tags {
    /// This option uses only a long name
    Long { long: String },

    /// This option uses only a short name
    Short { short: String },

    /// This option uses both a long and short name
    LongShort { long: String, short: String },
}

impl Tags {
    /**
    Parse a registration string into a set of tags, validating each name
    body against `config`.

    With a comma, the part before it is the short name and the part after it
    is the long name; both must be present. Without one, a `--` prefix makes a
    long name, a `-` prefix makes a short name, and a bare name is short if it
    fits within the short name limit.
    */
    pub fn parse(names: &str, config: &NameValidationConfig) -> Result<Self, BuildError> {
        let names = names.trim();

        if names.is_empty() {
            return Err(BuildError::EmptyName("argument name"));
        }

        if let Some(comma) = memchr::memchr(b',', names.as_bytes()) {
            let short = names[..comma].trim();
            let long = names[comma + 1..].trim();

            if short.is_empty() {
                return Err(BuildError::EmptyName("short name"));
            }

            if long.is_empty() {
                return Err(BuildError::EmptyName("long name"));
            }

            let short = short.strip_prefix('-').unwrap_or(short);
            let long = long.strip_prefix("--").unwrap_or(long);

            config.validate(short, NameKind::Short)?;
            config.validate(long, NameKind::Long)?;

            return Ok(Self::LongShort {
                long: format!("--{long}"),
                short: format!("-{short}"),
            });
        }

        let (body, kind) = match names {
            s if s.len() >= 3 && s.starts_with("--") => (&s[2..], NameKind::Long),
            s if s.len() >= 2 && s.starts_with('-') => (&s[1..], NameKind::Short),
            s if s.len() <= usize::from(config.short_name_limit) => (s, NameKind::Short),
            s => (s, NameKind::Long),
        };

        let body = body.trim();
        config.validate(body, kind)?;

        Ok(match kind {
            NameKind::Short => Self::Short {
                short: format!("-{body}"),
            },
            NameKind::Long => Self::Long {
                long: format!("--{body}"),
            },
        })
    }

    /// Get the long name (with its `--` prefix), if any
    #[inline]
    #[must_use]
    pub fn long(&self) -> Option<&str> {
        match self {
            Tags::Long { long } | Tags::LongShort { long, .. } => Some(long),
            Tags::Short { .. } => None,
        }
    }

    /// Get the short name (with its `-` prefix), if any
    #[inline]
    #[must_use]
    pub fn short(&self) -> Option<&str> {
        match self {
            Tags::Short { short } | Tags::LongShort { short, .. } => Some(short),
            Tags::Long { .. } => None,
        }
    }

    /// All of the names, short name first.
    pub fn iter(&self) -> impl Iterator<Item = &str> + Clone {
        self.short().into_iter().chain(self.long())
    }
}

impl fmt::Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter().join_with(", "))
    }
}
