use core::fmt;

/**
A single, raw argument passed in from the command line.

This type is used in two ways: to indicate option names, and to indicate the
values that follow them. For instance, given `--target foo -v build`,
`--target`, `foo`, `-v`, and `build` would all be passed as [`Arg`] values to
the relevant functions.

An [`Arg`] is just a borrowed [`str`]; callers parse it however they need.
*/
#[derive(Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Arg(str);

impl Arg {
    #[inline]
    #[must_use]
    pub const fn new(token: &str) -> &Self {
        // SAFETY: Arg is repr transparent to a str, so a pointer to a str is
        // a valid pointer to an Arg with the same metadata.
        unsafe { &*(token as *const str as *const Arg) }
    }

    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &str {
        &self.0
    }

    /// True if this token looks like an option name (`-x`, `--xyz`), rather
    /// than a word like a command name or a stray value.
    #[inline]
    #[must_use]
    pub fn is_option(&self) -> bool {
        self.0.len() > 1 && self.0.starts_with('-')
    }
}

impl PartialEq<str> for Arg {
    fn eq(&self, other: &str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<&str> for Arg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == **other
    }
}

impl AsRef<str> for Arg {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &self.0)
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
