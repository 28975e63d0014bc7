/*!
Implementations of [`Value`] for various primitive and standard library types
 */

use core::num::IntErrorKind;

use crate::parameter::{ParsedValue, Value, ValueError};

/// Parse an integer literal into the widest integer type, so that it can be
/// range checked against the real target type. Literals too big even for
/// `i128` are still out of range, rather than malformed.
fn parse_wide<T: core::fmt::Display>(arg: &str, min: T, max: T) -> Result<i128, ValueError> {
    arg.parse().map_err(|err: core::num::ParseIntError| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            ValueError::out_of_range(arg, min, max)
        }
        _ => ValueError::invalid_literal(arg, err),
    })
}

macro_rules! bounded_integers {
    ($($type:ident)*) => {
        $(
            impl Value for $type {
                #[inline]
                fn from_arg(arg: &str) -> Result<Self, ValueError> {
                    let wide = parse_wide(arg, $type::MIN, $type::MAX)?;

                    $type::try_from(wide)
                        .map_err(|_| ValueError::out_of_range(wide, $type::MIN, $type::MAX))
                }
            }
        )*
    };
}

bounded_integers! {
    u8 u16 u32 u64 usize
    i8 i16 i32 i64 isize
}

/**
Find the longest prefix of `arg` that reads as a floating point literal:
optional leading whitespace and sign, then `inf`, `infinity`, `nan`, or a
decimal mantissa with an optional exponent. Anything after the literal is
ignored, so `12.3abc` reads as `12.3`. Returns `None` if there is no literal
at all.
*/
fn float_prefix(arg: &str) -> Option<&str> {
    let arg = arg.trim_start();
    let bytes = arg.as_bytes();

    let digits_from = |start: usize| {
        bytes
            .get(start..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    for word in ["infinity", "inf", "nan"] {
        let matched = bytes
            .get(end..end + word.len())
            .is_some_and(|candidate| candidate.eq_ignore_ascii_case(word.as_bytes()));

        if matched {
            return Some(&arg[..end + word.len()]);
        }
    }

    let integer = digits_from(end);
    end += integer;

    if bytes.get(end) == Some(&b'.') {
        let fraction = digits_from(end + 1);

        if integer > 0 || fraction > 0 {
            end += 1 + fraction;
        }
    }

    if !bytes[..end].iter().any(u8::is_ascii_digit) {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent = digits_from(end + 1 + sign);

        if exponent > 0 {
            end += 1 + sign + exponent;
        }
    }

    Some(&arg[..end])
}

macro_rules! floats {
    ($($type:ident)*) => {
        $(
            impl Value for $type {
                fn from_arg(arg: &str) -> Result<Self, ValueError> {
                    let Some(literal) = float_prefix(arg) else {
                        return arg
                            .parse()
                            .map_err(|err| ValueError::invalid_literal(arg, err));
                    };

                    let value: $type = literal
                        .parse()
                        .map_err(|err| ValueError::invalid_literal(arg, err))?;

                    let spelled_infinite = literal
                        .trim_start_matches(['+', '-'])
                        .starts_with(['i', 'I']);

                    // A nonzero mantissa that rounds to zero underflowed
                    let underflowed = value == 0.0
                        && literal
                            .split(['e', 'E'])
                            .next()
                            .is_some_and(|mantissa| mantissa.bytes().any(|b| matches!(b, b'1'..=b'9')));

                    match (value.is_infinite() && !spelled_infinite) || underflowed {
                        true => Err(ValueError::out_of_range(literal, $type::MIN, $type::MAX)),
                        false => Ok(value),
                    }
                }
            }
        )*
    };
}

floats! { f32 f64 }

impl Value for bool {
    const TAKES_ARGUMENT: bool = false;

    #[inline]
    fn from_arg(arg: &str) -> Result<Self, ValueError> {
        Ok(arg == "true")
    }
}

impl Value for String {
    #[inline]
    fn from_arg(arg: &str) -> Result<Self, ValueError> {
        Ok(arg.to_owned())
    }
}

impl<T: Value> Value for Option<T> {
    const TAKES_ARGUMENT: bool = T::TAKES_ARGUMENT;

    #[inline]
    fn from_arg(arg: &str) -> Result<Self, ValueError> {
        T::from_arg(arg).map(Some)
    }
}

macro_rules! from_str {
    ($($type:ident $(:: $path:ident)*,)*) => {
        $(
            impl ParsedValue for $type $(:: $path)* {}
        )*
    };
}

from_str! {
    char,
    std::path::PathBuf,
    std::net::Ipv4Addr,
    std::net::Ipv6Addr,
    std::net::IpAddr,
    std::net::SocketAddrV4,
    std::net::SocketAddrV6,
    std::net::SocketAddr,
}
