/*!
A single named option, bound to a variable owned by the caller.
 */

use core::{fmt, marker::PhantomData};

use crate::{
    errors::BuildError,
    name::Tags,
    parameter::{BoxError, Value, ValueError},
    validation::NameValidationConfig,
};

/// Where an option's parsed value ends up.
trait Slot {
    fn takes_argument(&self) -> bool;

    fn store(&mut self, arg: &str) -> Result<(), ValueError>;
}

impl<T: Value> Slot for &mut T {
    #[inline]
    fn takes_argument(&self) -> bool {
        T::TAKES_ARGUMENT
    }

    #[inline]
    fn store(&mut self, arg: &str) -> Result<(), ValueError> {
        **self = T::from_arg(arg)?;
        Ok(())
    }
}

/// A slot with its own conversion function, for types that don't implement
/// [`Value`] (or that need to be parsed differently than usual).
struct ParserSlot<'a, T, F, E> {
    target: &'a mut T,
    parser: F,
    error: PhantomData<fn() -> E>,
}

impl<T, F, E> Slot for ParserSlot<'_, T, F, E>
where
    F: FnMut(&str) -> Result<T, E>,
    E: Into<BoxError>,
{
    #[inline]
    fn takes_argument(&self) -> bool {
        true
    }

    fn store(&mut self, arg: &str) -> Result<(), ValueError> {
        *self.target = (self.parser)(arg).map_err(|err| ValueError::custom(arg, err))?;
        Ok(())
    }
}

/**
An option: a set of names (`-n`, `--number`) bound to a variable.

The variable is borrowed for as long as the option exists, and every
successful [`parse_value`][Opt::parse_value] overwrites it. Whether the
option consumes a value token on the command line is decided by the
variable's type: [`bool`] options are flags, everything else takes a value.

Usually options are created through
[`Application::add_option`][crate::Application::add_option] or
[`Command::add_option`][crate::Command::add_option] rather than directly.
*/
pub struct Opt<'a> {
    tags: Tags,
    slot: Box<dyn Slot + 'a>,
}

impl<'a> Opt<'a> {
    /// Create an option using the default name rules.
    pub fn new<T: Value>(name: &str, storage: &'a mut T) -> Result<Self, BuildError> {
        Self::with_config(name, storage, &NameValidationConfig::default())
    }

    pub fn with_config<T: Value>(
        name: &str,
        storage: &'a mut T,
        config: &NameValidationConfig,
    ) -> Result<Self, BuildError> {
        Ok(Self {
            tags: Tags::parse(name, config)?,
            slot: Box::new(storage),
        })
    }

    /// Create an option whose value is converted by `parser` instead of by a
    /// [`Value`] implementation. These options always take a value.
    pub fn with_parser<T, E, F>(
        name: &str,
        storage: &'a mut T,
        parser: F,
        config: &NameValidationConfig,
    ) -> Result<Self, BuildError>
    where
        T: 'a,
        F: FnMut(&str) -> Result<T, E> + 'a,
        E: Into<BoxError> + 'a,
    {
        Ok(Self {
            tags: Tags::parse(name, config)?,
            slot: Box::new(ParserSlot {
                target: storage,
                parser,
                error: PhantomData,
            }),
        })
    }

    #[inline]
    #[must_use]
    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    /// The short name, including its `-` prefix
    #[inline]
    #[must_use]
    pub fn short_name(&self) -> Option<&str> {
        self.tags.short()
    }

    /// The long name, including its `--` prefix
    #[inline]
    #[must_use]
    pub fn long_name(&self) -> Option<&str> {
        self.tags.long()
    }

    /// True if this option consumes the token after its name.
    #[inline]
    #[must_use]
    pub fn needs_value(&self) -> bool {
        self.slot.takes_argument()
    }

    /**
    Convert `token` and store it in the bound variable. On failure the
    variable is left unchanged.

    Flags are given `"true"` by the parsers when they appear on the command
    line.
    */
    pub fn parse_value(&mut self, token: &str) -> Result<(), ValueError> {
        self.slot.store(token)
    }
}

impl fmt::Debug for Opt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opt")
            .field("tags", &self.tags)
            .field("needs_value", &self.needs_value())
            .finish_non_exhaustive()
    }
}
