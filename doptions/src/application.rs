/*!
The top-level registry: global options, plus the sub-commands that can follow
them.
 */

use std::collections::HashMap;

use doptions_parser::{Arg, ArgAccess, ArgumentsParser, Visitor};
use tracing::debug;

use crate::{
    command::Command,
    errors::{BuildError, ParseError},
    option::Opt,
    parameter::{BoxError, Value},
    state::{Matcher, OptionSet},
    validation::NameValidationConfig,
};

#[derive(Debug)]
struct CommandEntry<'a> {
    command: Command<'a>,
    executed: &'a mut bool,
}

/**
The top-level argument parser: a set of global options and a set of commands.

Every option and command is bound to a variable borrowed for the lifetime
`'a`; [`parse`][Application::parse] writes the parsed values straight into
them.

```
use doptions::Application;

let mut verbose = false;
let mut build = false;
let mut jobs = 1u32;

let mut app = Application::new();
app.add_option("-v,--verbose", &mut verbose)?;
app.add_command("build", &mut build)?
    .add_option("-j,--jobs", &mut jobs)?;

app.parse(&["-v", "build", "--jobs", "4"])?;
drop(app);

assert!(verbose);
assert!(build);
assert_eq!(jobs, 4);
# Ok::<(), doptions::Error>(())
```
*/
#[derive(Debug, Default)]
pub struct Application<'a> {
    config: NameValidationConfig,
    options: OptionSet<'a>,
    commands: Vec<CommandEntry<'a>>,
    command_names: HashMap<String, usize>,
}

impl<'a> Application<'a> {
    /// Create an empty application using the default name rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty application. `config` is used for every option and
    /// command registered with it, including the options of its commands.
    #[must_use]
    pub fn with_config(config: NameValidationConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &NameValidationConfig {
        &self.config
    }

    /// Add a global option, bound to `storage`.
    pub fn add_option<T: Value>(
        &mut self,
        name: &str,
        storage: &'a mut T,
    ) -> Result<&mut Self, BuildError> {
        self.options
            .insert(Opt::with_config(name, storage, &self.config)?)?;
        Ok(self)
    }

    /// Add a global option whose value is converted by `parser`.
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

    /**
    Add a command. `executed` is set to `true` by [`parse`][Self::parse] if
    this command is the one selected on the command line; it's otherwise left
    alone, so callers should initialize it to `false`.

    Returns the new command, so that its options can be added.
    */
    pub fn add_command(
        &mut self,
        name: &str,
        executed: &'a mut bool,
    ) -> Result<&mut Command<'a>, BuildError> {
        let command = Command::with_config(name, self.config.clone())?;

        if self.command_names.contains_key(command.name()) {
            return Err(BuildError::DuplicateName(command.name().to_owned()));
        }

        let index = self.commands.len();
        self.command_names.insert(command.name().to_owned(), index);
        self.commands.push(CommandEntry { command, executed });

        Ok(&mut self.commands[index].command)
    }

    pub fn options(&self) -> impl Iterator<Item = &Opt<'a>> {
        self.options.iter()
    }

    pub fn commands(&self) -> impl Iterator<Item = &Command<'a>> {
        self.commands.iter().map(|entry| &entry.command)
    }

    /**
    Parse an argument list, excluding the program name.

    Tokens are matched against the global options until one of them names a
    command. Everything after the command name is handed to that command, its
    executed flag is set, and parsing ends: at most one command runs per call,
    and global options can't appear after the command name.

    Parsing stops at the first error. Options matched before the error keep
    their new values.
    */
    pub fn parse<S: AsRef<str>>(&mut self, args: &[S]) -> Result<(), ParseError> {
        debug!(arguments = args.len(), "parsing application arguments");

        let mut parser = ArgumentsParser::new(args);
        let mut matcher = self.options.matcher();

        let selected = loop {
            let step = parser.next_arg(ApplicationVisitor {
                matcher: &mut matcher,
                command_names: &self.command_names,
            });

            match step {
                None => break None,
                Some(Ok(None)) => continue,
                Some(Ok(Some(index))) => break Some(index),
                Some(Err(error)) => return Err(error),
            }
        };

        drop(matcher);

        if let Some(index) = selected {
            let entry = &mut self.commands[index];

            debug!(command = entry.command.name(), "dispatching to command");
            entry.command.parse_command(parser.remaining())?;
            *entry.executed = true;
        }

        Ok(())
    }
}

struct ApplicationVisitor<'m, 's, 'a> {
    matcher: &'m mut Matcher<'s, 'a>,
    command_names: &'m HashMap<String, usize>,
}

impl<'arg> Visitor<'arg> for ApplicationVisitor<'_, '_, '_> {
    /// The index of the selected command, if this token was a command name
    type Value = Result<Option<usize>, ParseError>;

    fn visit_option(self, option: &'arg Arg, arg: impl ArgAccess<'arg>) -> Self::Value {
        self.matcher.apply(option, arg).map(|()| None)
    }

    fn visit_word(self, word: &'arg Arg) -> Self::Value {
        self.command_names
            .get(word.as_str())
            .copied()
            .map(Some)
            .ok_or_else(|| ParseError::UnknownArgument(word.to_string()))
    }
}
