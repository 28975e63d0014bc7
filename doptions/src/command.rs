/*!
Sub-commands: a name, and a table of options that only apply after that name
appears on the command line.
 */

use doptions_parser::{Arg, ArgAccess, ArgumentsParser, Visitor};
use tracing::{debug, trace};

use crate::{
    errors::{BuildError, ParseError},
    option::Opt,
    parameter::{BoxError, Value},
    state::{Matcher, OptionSet},
    validation::{NameKind, NameValidationConfig},
};

/**
A named sub-parser with its own set of options.

Command names are always long names (they must be longer than the short name
limit) and are matched without any prefix: a command named `build` is selected
by the token `build`.
*/
#[derive(Debug)]
pub struct Command<'a> {
    name: String,
    config: NameValidationConfig,
    options: OptionSet<'a>,
}

impl<'a> Command<'a> {
    /// Create a command using the default name rules.
    pub fn new(name: &str) -> Result<Self, BuildError> {
        Self::with_config(name, NameValidationConfig::default())
    }

    /// Create a command. `config` is used both for the command's own name
    /// and for every option added to it.
    pub fn with_config(name: &str, config: NameValidationConfig) -> Result<Self, BuildError> {
        config.validate(name, NameKind::Long)?;
        trace!(command = name, "registered command");

        Ok(Self {
            name: name.to_owned(),
            config,
            options: OptionSet::default(),
        })
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add an option to this command, bound to `storage`.
    pub fn add_option<T: Value>(
        &mut self,
        name: &str,
        storage: &'a mut T,
    ) -> Result<&mut Self, BuildError> {
        self.options
            .insert(Opt::with_config(name, storage, &self.config)?)?;
        Ok(self)
    }

    /// Add an option to this command whose value is converted by `parser`.
    pub fn add_option_with<T, E, F>(
        &mut self,
        name: &str,
        storage: &'a mut T,
        parser: F,
    ) -> Result<&mut Self, BuildError>
    where
        T: 'a,
        F: FnMut(&str) -> Result<T, E> + 'a,
        E: Into<BoxError> + 'a,
    {
        self.options
            .insert(Opt::with_parser(name, storage, parser, &self.config)?)?;
        Ok(self)
    }

    pub fn options(&self) -> impl Iterator<Item = &Opt<'a>> {
        self.options.iter()
    }

    /**
    Parse the tokens that followed this command's name. Every token must be
    one of this command's options or the value of the option before it, and
    every option may appear at most once.

    Parsing stops at the first error. Options matched before the error keep
    their new values.
    */
    pub fn parse_command<S: AsRef<str>>(&mut self, args: &[S]) -> Result<(), ParseError> {
        debug!(command = %self.name, arguments = args.len(), "parsing command arguments");

        let mut parser = ArgumentsParser::new(args);
        let mut matcher = self.options.matcher();

        while let Some(result) = parser.next_arg(CommandVisitor {
            matcher: &mut matcher,
        }) {
            result?;
        }

        Ok(())
    }
}

struct CommandVisitor<'m, 's, 'a> {
    matcher: &'m mut Matcher<'s, 'a>,
}

impl<'arg> Visitor<'arg> for CommandVisitor<'_, '_, '_> {
    type Value = Result<(), ParseError>;

    fn visit_option(self, option: &'arg Arg, arg: impl ArgAccess<'arg>) -> Self::Value {
        self.matcher.apply(option, arg)
    }

    fn visit_word(self, word: &'arg Arg) -> Self::Value {
        Err(ParseError::UnknownArgument(word.to_string()))
    }
}
