#![cfg_attr(not(test), no_std)]

/*!
Low-level implementation of argument handling. Takes care of distinguishing
option names from words, and of handing the token after an option name to
the options that need a value. No type handling happens here. Usually this is
too low level to use directly.
*/

mod arg;

pub use arg::Arg;

/**
The [`ArgumentsParser`] type operates by passing arguments it finds into a
[`Visitor`], to be handled.
 */
pub trait Visitor<'arg> {
    type Value;

    /// An option name, such as `-v` or `--number`.
    fn visit_option(self, option: &'arg Arg, arg: impl ArgAccess<'arg>) -> Self::Value;

    /// Anything that isn't shaped like an option name. This is where command
    /// names show up.
    fn visit_word(self, word: &'arg Arg) -> Self::Value;
}

/**
[`ArgAccess`] allows a visitor to decide if a given option needs a value,
based on the identity of the option.

Consider `--foo bar`. Is this a flag `--foo` followed by the unrelated token
`bar`, or a single option `--foo bar` that takes a value? The
[`ArgumentsParser`] can't independently classify a given argument, so instead,
a visitor requests the value via this trait only for options that need one.
*/
pub trait ArgAccess<'arg>: Sized {
    /**
    Get the next token from the parser, whatever it is. This should only be
    called by options that need it; flags should simply ignore it, to ensure
    that the next command line argument can correctly be parsed independently.

    This returns [`None`] if all of the CLI arguments have been exhausted.
    */
    fn take(self) -> Option<&'arg Arg>;
}

/**
An `ArgumentsParser` is the main entry point into `doptions_parser`. It parses
arguments in each call to `next_arg`, sending those arguments to the given
[`Visitor`].

[doptions-parser][crate] operates entirely on borrowed data, because we assume
that command-line arguments can be loaded early on in `main` and then handled
in a borrowed form for the rest of the program. The ubiquitous `'arg` lifetime
refers to this borrowed command line data.
*/
#[derive(Debug, Clone)]
pub struct ArgumentsParser<'arg, S> {
    args: &'arg [S],
}

impl<'arg, S> ArgumentsParser<'arg, S>
where
    S: AsRef<str>,
{
    /**
    Create a new [`ArgumentsParser`] from a slice of tokens, where each token
    is a single argument received from the command line. This list should
    *exclude* the name of the program, which is commonly passed as the first
    argument in the list.
     */
    #[inline]
    #[must_use]
    pub const fn new(args: &'arg [S]) -> Self {
        Self { args }
    }

    /// The tokens that haven't been handed to a visitor yet.
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> &'arg [S] {
        self.args
    }

    pub fn next_arg<V>(&mut self, visitor: V) -> Option<V::Value>
    where
        V: Visitor<'arg>,
    {
        let (argument, rest) = self.args.split_first()?;
        self.args = rest;

        let argument = Arg::new(argument.as_ref());

        Some(match argument.is_option() {
            true => visitor.visit_option(
                argument,
                NextArgAccess {
                    args: &mut self.args,
                },
            ),
            false => visitor.visit_word(argument),
        })
    }
}

/// ArgAccess implementation that gets the next token from the list.
struct NextArgAccess<'a, 'arg, S> {
    args: &'a mut &'arg [S],
}

impl<'arg, S> ArgAccess<'arg> for NextArgAccess<'_, 'arg, S>
where
    S: AsRef<str>,
{
    fn take(self) -> Option<&'arg Arg> {
        let (argument, rest) = self.args.split_first()?;
        *self.args = rest;

        Some(Arg::new(argument.as_ref()))
    }
}
