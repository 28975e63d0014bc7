/*!
A typed command-line options parser. Options and sub-commands are bound
directly to variables you own; parsing an argument list converts each value
to the variable's type and writes it in place.

```
use doptions::Command;

let mut verbose = false;
let mut number = 0i32;

let mut command = Command::new("test")?;
command
    .add_option("-v,--verbose", &mut verbose)?
    .add_option("-n,--number", &mut number)?;

command.parse_command(&["-n", "42", "-v"])?;
drop(command);

assert!(verbose);
assert_eq!(number, 42);
# Ok::<(), doptions::Error>(())
```

The pieces:

- [`Application`] holds global options and [`Command`]s. Its
  [`parse`][Application::parse] consumes global options until it meets a
  command name, then hands every remaining token to that command.
- [`Opt`] is a single option. [`bool`] options are flags that take no value;
  every other type takes the token after the option name as its value.
- [`parameter::Value`] converts a token into a typed value. It's implemented
  for the integer, float, `bool` and `String` types, and for your own types
  with `#[derive(Value)]`, by opting in to their `FromStr` with
  [`parameter::ParsedValue`], or by implementing it by hand. Options can also
  be given a one-off conversion function with `add_option_with`.
- [`validation::NameValidationConfig`] controls which option and command
  names are allowed.
*/

mod application;
mod arguments;
mod command;
pub mod errors;
mod impls;
pub mod name;
mod option;
pub mod parameter;
mod state;
pub mod validation;

pub use application::Application;
pub use arguments::LoadedArguments;
pub use command::Command;
pub use doptions_derive::Value;
pub use doptions_parser::Arg;
pub use errors::{BuildError, Error, ParseError};
pub use name::Tags;
pub use option::Opt;
pub use parameter::{ParsedValue, Value, ValueError};
pub use validation::NameValidationConfig;
