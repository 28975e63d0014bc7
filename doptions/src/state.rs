/*!
The option table shared by [`Command`][crate::Command] and
[`Application`][crate::Application], and the per-parse state used while
matching tokens against it.
 */

use std::collections::HashMap;

use doptions_parser::{Arg, ArgAccess};
use tracing::trace;

use crate::{errors::BuildError, errors::ParseError, option::Opt};

/// A set of options, indexed by every name they answer to.
#[derive(Debug, Default)]
pub struct OptionSet<'a> {
    options: Vec<Opt<'a>>,
    names: HashMap<String, usize>,
}

impl<'a> OptionSet<'a> {
    /// Add an option. Fails if any of its names is already taken.
    pub fn insert(&mut self, option: Opt<'a>) -> Result<(), BuildError> {
        let taken = option
            .tags()
            .iter()
            .find(|name| self.names.contains_key(*name));

        if let Some(taken) = taken {
            return Err(BuildError::DuplicateName(taken.to_owned()));
        }

        let index = self.options.len();

        for name in option.tags().iter() {
            self.names.insert(name.to_owned(), index);
        }

        trace!(option = %option.tags(), index, "registered option");
        self.options.push(option);

        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Opt<'a>> {
        self.options.iter()
    }

    /// Start a parse. Each option can be matched at most once per parse.
    pub fn matcher(&mut self) -> Matcher<'_, 'a> {
        Matcher {
            seen: vec![false; self.options.len()],
            set: self,
        }
    }
}

/// The state of a single parse over an [`OptionSet`].
pub struct Matcher<'s, 'a> {
    set: &'s mut OptionSet<'a>,
    seen: Vec<bool>,
}

impl Matcher<'_, '_> {
    /**
    Handle an option token: look it up, reject it if its option was already
    matched, get its value (the next token, or `"true"` for flags), and store
    it.
    */
    pub fn apply<'arg>(
        &mut self,
        option: &'arg Arg,
        argument: impl ArgAccess<'arg>,
    ) -> Result<(), ParseError> {
        let index = *self
            .set
            .names
            .get(option.as_str())
            .ok_or_else(|| ParseError::UnknownArgument(option.to_string()))?;

        let target = &mut self.set.options[index];

        if self.seen[index] {
            return Err(ParseError::DuplicateArgument {
                names: target.tags().to_string(),
            });
        }

        let value = match target.needs_value() {
            true => argument
                .take()
                .ok_or_else(|| ParseError::InsufficientValues(option.to_string()))?
                .as_str(),
            false => "true",
        };

        trace!(option = %option, value, "matched option");

        target
            .parse_value(value)
            .map_err(|error| ParseError::Value {
                option: option.to_string(),
                error,
            })?;

        self.seen[index] = true;
        Ok(())
    }
}
