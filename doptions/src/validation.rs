/*!
Rules for option and command names.

A name body (the part after any `-` or `--` prefix) must start with an ASCII
letter and otherwise contain only ASCII letters, digits, and whichever of
`-`, `.`, and `_` the [`NameValidationConfig`] allows. Short and long names
have disjoint length ranges: a short body has between 1 and
`short_name_limit` characters, a long body has more than `short_name_limit`
and at most `long_name_limit`.

There is no global configuration. An [`Application`][crate::Application] or
[`Command`][crate::Command] carries its own config and uses it for every name
registered with it; [`NameValidationConfig::default`] is the standard set of
rules.
 */

use core::fmt;

use crate::errors::BuildError;

pub const DEFAULT_SHORT_LIMIT: u8 = 3;
pub const DEFAULT_LONG_LIMIT: u8 = 100;

/// Whether a name is being validated as a short (`-x`) or long (`--xyz`)
/// name. Command names are always validated as long names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Short,
    Long,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NameKind::Short => "short",
            NameKind::Long => "long",
        })
    }
}

/// The rules used to validate option and command names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameValidationConfig {
    /// The longest a short name body can be. Long name bodies must be longer
    /// than this.
    pub short_name_limit: u8,

    /// The longest a long name body can be.
    pub long_name_limit: u8,

    pub allow_dots: bool,
    pub allow_dashes: bool,
    pub allow_underscores: bool,

    /// Name bodies that can't be registered at all
    pub reserved_names: Vec<String>,
}

impl Default for NameValidationConfig {
    fn default() -> Self {
        Self {
            short_name_limit: DEFAULT_SHORT_LIMIT,
            long_name_limit: DEFAULT_LONG_LIMIT,
            allow_dots: false,
            allow_dashes: true,
            allow_underscores: true,
            reserved_names: Vec::new(),
        }
    }
}

impl NameValidationConfig {
    #[inline]
    #[must_use]
    fn valid_char(&self, c: char) -> bool {
        match c {
            c if c.is_ascii_alphanumeric() => true,
            '-' => self.allow_dashes,
            '.' => self.allow_dots,
            '_' => self.allow_underscores,
            _ => false,
        }
    }

    /// Check the characters of a name body.
    pub fn validate_name(&self, name: &str) -> Result<(), BuildError> {
        let mut chars = name.chars();

        let first = chars.next().ok_or(BuildError::EmptyName("argument name"))?;

        if !first.is_ascii_alphabetic() || !chars.all(|c| self.valid_char(c)) {
            return Err(BuildError::InvalidName(name.to_owned()));
        }

        if self.reserved_names.iter().any(|reserved| reserved == name) {
            return Err(BuildError::ReservedName(name.to_owned()));
        }

        Ok(())
    }

    /// Check the length of a name body against the range for its kind.
    pub fn validate_size(&self, name: &str, kind: NameKind) -> Result<(), BuildError> {
        let len = name.len();
        let short = usize::from(self.short_name_limit);
        let long = usize::from(self.long_name_limit);

        let (valid, min, max) = match kind {
            NameKind::Short => (len > 0 && len <= short, 0, self.short_name_limit),
            NameKind::Long => (
                len > short && len <= long,
                self.short_name_limit,
                self.long_name_limit,
            ),
        };

        match valid {
            true => Ok(()),
            false => Err(BuildError::InvalidSize {
                name: name.to_owned(),
                len,
                kind,
                min,
                max,
            }),
        }
    }

    /// Check both the characters and the length of a name body.
    pub fn validate(&self, name: &str, kind: NameKind) -> Result<(), BuildError> {
        self.validate_name(name)?;
        self.validate_size(name, kind)
    }
}
