use std::ffi::{OsStr, OsString};

use crate::{application::Application, errors::ParseError};

/// Helper type for loading arguments from the environment.
///
/// This type exists to provide a convenient owned container for args
/// retrieved from [`std::env`], which an [`Application`] can then parse.
/// Arguments are checked for UTF-8 up front, so a bad argument is reported
/// before any option is touched. The program name is kept as it was given,
/// since it's never parsed.
#[derive(Debug, Clone)]
pub struct LoadedArguments {
    argv0: Option<OsString>,
    arguments: Vec<String>,
}

impl LoadedArguments {
    pub fn from_env() -> Result<Self, ParseError> {
        Self::from_os_args(std::env::args_os())
    }

    /// Load arguments from any list of OS strings. The first one is the
    /// program name.
    pub fn from_os_args(args: impl IntoIterator<Item = OsString>) -> Result<Self, ParseError> {
        let mut args = args.into_iter();
        let argv0 = args.next();

        args.map(|arg| {
            arg.into_string()
                .map_err(|arg| ParseError::InvalidUtf8(arg.to_string_lossy().into_owned()))
        })
        .collect::<Result<_, _>>()
        .map(|arguments| Self { argv0, arguments })
    }

    /// The program name, if there was one.
    pub fn argv0(&self) -> Option<&OsStr> {
        self.argv0.as_deref()
    }

    /// Every argument after the program name.
    pub fn args(&self) -> &[String] {
        &self.arguments
    }

    pub fn parse(&self, app: &mut Application<'_>) -> Result<(), ParseError> {
        app.parse(self.args())
    }
}
