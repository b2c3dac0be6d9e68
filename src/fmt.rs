//! Runtime printf-style formatting
//!
//! Interprets a printf-subset format string against a list of runtime
//! arguments and renders into a growable [`String`], so output length is
//! never bounded by an initial buffer size. Used for messages whose
//! format strings come from configuration or log templates rather than
//! compile-time literals (compile-time formatting should use `format!`).
//!
//! Supported syntax: `%%`, flags `-` `0` `+`, minimum field width,
//! `.`-precision, conversions `d i u x X o f F e E g s c`.

use std::borrow::Cow;

use crate::error::FormatError;

/// A runtime formatting argument.
#[derive(Debug, Clone)]
pub enum Arg<'a> {
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(Cow<'a, str>),
    Char(char),
}

macro_rules! impl_arg_signed {
    ($($ty:ty),* $(,)?) => {$(
        impl<'a> From<$ty> for Arg<'a> {
            fn from(v: $ty) -> Self {
                Arg::Int(v as i64)
            }
        }
    )*};
}

macro_rules! impl_arg_unsigned {
    ($($ty:ty),* $(,)?) => {$(
        impl<'a> From<$ty> for Arg<'a> {
            fn from(v: $ty) -> Self {
                Arg::UInt(v as u64)
            }
        }
    )*};
}

impl_arg_signed!(i8, i16, i32, i64, isize);
impl_arg_unsigned!(u8, u16, u32, u64, usize);

impl<'a> From<f32> for Arg<'a> {
    fn from(v: f32) -> Self {
        Arg::Float(v as f64)
    }
}

impl<'a> From<f64> for Arg<'a> {
    fn from(v: f64) -> Self {
        Arg::Float(v)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(v: &'a str) -> Self {
        Arg::Str(Cow::Borrowed(v))
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(v: &'a String) -> Self {
        Arg::Str(Cow::Borrowed(v.as_str()))
    }
}

impl From<String> for Arg<'static> {
    fn from(v: String) -> Self {
        Arg::Str(Cow::Owned(v))
    }
}

impl<'a> From<char> for Arg<'a> {
    fn from(v: char) -> Self {
        Arg::Char(v)
    }
}

impl<'a> From<bool> for Arg<'a> {
    fn from(v: bool) -> Self {
        Arg::Int(v as i64)
    }
}

/// One parsed `%` conversion specification.
#[derive(Debug, Default, Clone, Copy)]
struct Spec {
    left_align: bool,
    zero_pad: bool,
    plus_sign: bool,
    width: usize,
    precision: Option<usize>,
}

/// Formats `fmt` with `args`, printf style.
///
/// Arguments are consumed left to right; surplus arguments are ignored,
/// a missing argument is an error.
pub fn sprintf(fmt: &str, args: &[Arg<'_>]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(fmt.len());
    let mut chars = fmt.chars().peekable();
    let mut next_arg = 0usize;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let mut spec = Spec::default();
        loop {
            match chars.peek() {
                Some('-') => {
                    spec.left_align = true;
                    chars.next();
                }
                Some('0') => {
                    spec.zero_pad = true;
                    chars.next();
                }
                Some('+') => {
                    spec.plus_sign = true;
                    chars.next();
                }
                _ => break,
            }
        }
        while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
            spec.width = spec.width * 10 + d as usize;
            chars.next();
        }
        if chars.peek() == Some(&'.') {
            chars.next();
            let mut precision = 0usize;
            while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
                precision = precision * 10 + d as usize;
                chars.next();
            }
            spec.precision = Some(precision);
        }

        let conversion = chars.next().ok_or(FormatError::TrailingPercent)?;
        if conversion == '%' {
            out.push('%');
            continue;
        }

        let arg = args
            .get(next_arg)
            .ok_or(FormatError::MissingArgument { index: next_arg })?;
        out.push_str(&render(arg, conversion, &spec, next_arg)?);
        next_arg += 1;
    }

    Ok(out)
}

fn render(arg: &Arg<'_>, conversion: char, spec: &Spec, index: usize) -> Result<String, FormatError> {
    match conversion {
        'd' | 'i' => {
            let v = signed_value(arg, conversion, index)?;
            Ok(pad_number(v.unsigned_abs().to_string(), v < 0, spec))
        }
        'u' => {
            let v = unsigned_value(arg, conversion, index)?;
            Ok(pad_number(v.to_string(), false, spec))
        }
        'x' => {
            let v = unsigned_value(arg, conversion, index)?;
            Ok(pad_number(format!("{:x}", v), false, spec))
        }
        'X' => {
            let v = unsigned_value(arg, conversion, index)?;
            Ok(pad_number(format!("{:X}", v), false, spec))
        }
        'o' => {
            let v = unsigned_value(arg, conversion, index)?;
            Ok(pad_number(format!("{:o}", v), false, spec))
        }
        'f' | 'F' => {
            let v = float_value(arg, conversion, index)?;
            let precision = spec.precision.unwrap_or(6);
            Ok(pad_number(
                format!("{:.*}", precision, v.abs()),
                v.is_sign_negative(),
                spec,
            ))
        }
        'e' | 'E' => {
            let v = float_value(arg, conversion, index)?;
            let precision = spec.precision.unwrap_or(6);
            let mut body = format!("{:.*e}", precision, v.abs());
            if conversion == 'E' {
                body = body.to_uppercase();
            }
            Ok(pad_number(body, v.is_sign_negative(), spec))
        }
        'g' => {
            let v = float_value(arg, conversion, index)?;
            Ok(pad_number(format!("{}", v.abs()), v.is_sign_negative(), spec))
        }
        's' => {
            let s = str_value(arg, conversion, index)?;
            let s = match spec.precision {
                Some(p) => s.chars().take(p).collect::<String>(),
                None => s,
            };
            Ok(pad_text(&s, spec))
        }
        'c' => match arg {
            Arg::Char(c) => Ok(pad_text(&c.to_string(), spec)),
            _ => Err(FormatError::TypeMismatch { index, conversion }),
        },
        other => Err(FormatError::UnsupportedConversion { conversion: other }),
    }
}

fn signed_value(arg: &Arg<'_>, conversion: char, index: usize) -> Result<i64, FormatError> {
    match arg {
        Arg::Int(v) => Ok(*v),
        Arg::UInt(v) => i64::try_from(*v)
            .map_err(|_| FormatError::TypeMismatch { index, conversion }),
        Arg::Char(c) => Ok(*c as i64),
        _ => Err(FormatError::TypeMismatch { index, conversion }),
    }
}

fn unsigned_value(arg: &Arg<'_>, conversion: char, index: usize) -> Result<u64, FormatError> {
    match arg {
        Arg::UInt(v) => Ok(*v),
        Arg::Int(v) => u64::try_from(*v)
            .map_err(|_| FormatError::TypeMismatch { index, conversion }),
        Arg::Char(c) => Ok(*c as u64),
        _ => Err(FormatError::TypeMismatch { index, conversion }),
    }
}

fn float_value(arg: &Arg<'_>, conversion: char, index: usize) -> Result<f64, FormatError> {
    match arg {
        Arg::Float(v) => Ok(*v),
        Arg::Int(v) => Ok(*v as f64),
        Arg::UInt(v) => Ok(*v as f64),
        _ => Err(FormatError::TypeMismatch { index, conversion }),
    }
}

fn str_value(arg: &Arg<'_>, conversion: char, index: usize) -> Result<String, FormatError> {
    match arg {
        Arg::Str(s) => Ok(s.to_string()),
        Arg::Char(c) => Ok(c.to_string()),
        _ => Err(FormatError::TypeMismatch { index, conversion }),
    }
}

/// Width-pads a rendered number; zero fill goes between the sign and the digits.
fn pad_number(body: String, negative: bool, spec: &Spec) -> String {
    let sign = if negative {
        "-"
    } else if spec.plus_sign {
        "+"
    } else {
        ""
    };
    let content_len = sign.len() + body.len();
    if content_len >= spec.width {
        return format!("{sign}{body}");
    }
    let fill = spec.width - content_len;
    if spec.left_align {
        format!("{sign}{body}{}", " ".repeat(fill))
    } else if spec.zero_pad {
        format!("{sign}{}{body}", "0".repeat(fill))
    } else {
        format!("{}{sign}{body}", " ".repeat(fill))
    }
}

fn pad_text(s: &str, spec: &Spec) -> String {
    let len = s.chars().count();
    if len >= spec.width {
        return s.to_string();
    }
    let fill = " ".repeat(spec.width - len);
    if spec.left_align {
        format!("{s}{fill}")
    } else {
        format!("{fill}{s}")
    }
}

/// Printf-style formatting with automatic argument conversion.
///
/// ```
/// use vo_utils::sprintf;
///
/// let s = sprintf!("frame %05d: %s", 42, "tracking").unwrap();
/// assert_eq!(s, "frame 00042: tracking");
/// ```
#[macro_export]
macro_rules! sprintf {
    ($fmt:expr $(,)?) => {
        $crate::fmt::sprintf($fmt, &[])
    };
    ($fmt:expr, $($arg:expr),+ $(,)?) => {
        $crate::fmt::sprintf($fmt, &[$($crate::fmt::Arg::from($arg)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;

    #[test]
    fn test_basic_interleaving() {
        assert_eq!(sprintf!("%d-%s", 3, "x").unwrap(), "3-x");
        assert_eq!(sprintf!("no conversions").unwrap(), "no conversions");
        assert_eq!(sprintf!("%s %s %s", "a", "b", "c").unwrap(), "a b c");
    }

    #[test]
    fn test_integer_conversions() {
        assert_eq!(sprintf!("%d", -42).unwrap(), "-42");
        assert_eq!(sprintf!("%i", 42).unwrap(), "42");
        assert_eq!(sprintf!("%u", 42u32).unwrap(), "42");
        assert_eq!(sprintf!("%x", 255).unwrap(), "ff");
        assert_eq!(sprintf!("%X", 255).unwrap(), "FF");
        assert_eq!(sprintf!("%o", 8).unwrap(), "10");
    }

    #[test]
    fn test_width_and_padding() {
        assert_eq!(sprintf!("%05d", 42).unwrap(), "00042");
        assert_eq!(sprintf!("%5d", 42).unwrap(), "   42");
        assert_eq!(sprintf!("%-5d|", 42).unwrap(), "42   |");
        assert_eq!(sprintf!("%+d", 42).unwrap(), "+42");
        // zero fill sits between the sign and the digits
        assert_eq!(sprintf!("%05d", -42).unwrap(), "-0042");
        assert_eq!(sprintf!("%8s|", "vo").unwrap(), "      vo|");
        assert_eq!(sprintf!("%-8s|", "vo").unwrap(), "vo      |");
    }

    #[test]
    fn test_float_conversions() {
        assert_eq!(sprintf!("%f", 1.5).unwrap(), "1.500000");
        assert_eq!(sprintf!("%.2f", 3.14159).unwrap(), "3.14");
        assert_eq!(sprintf!("%.0f", 2.5).unwrap(), "2");
        assert_eq!(sprintf!("%.2f", -1.005).unwrap(), "-1.00");
        // integer arguments coerce to float
        assert_eq!(sprintf!("%.1f", 4).unwrap(), "4.0");
    }

    #[test]
    fn test_char_and_percent() {
        assert_eq!(sprintf!("%c", 'y').unwrap(), "y");
        assert_eq!(sprintf!("100%%").unwrap(), "100%");
    }

    #[test]
    fn test_string_precision_truncates() {
        assert_eq!(sprintf!("%.3s", "truncated").unwrap(), "tru");
    }

    #[test]
    fn test_output_grows_past_any_initial_buffer() {
        // output well past 1 KiB, to exercise unbounded growth
        let long = "x".repeat(2000);
        let rendered = sprintf!("%d-%s", 7, &long).unwrap();
        assert_eq!(rendered.len(), 2 + 2000);
        assert!(rendered.starts_with("7-xxx"));
    }

    #[test]
    fn test_missing_argument_is_an_error() {
        let err = sprintf!("%d %d", 1).unwrap_err();
        assert!(matches!(err, FormatError::MissingArgument { index: 1 }));
    }

    #[test]
    fn test_trailing_percent_is_an_error() {
        let err = sprintf!("oops %").unwrap_err();
        assert!(matches!(err, FormatError::TrailingPercent));
    }

    #[test]
    fn test_unsupported_conversion_is_an_error() {
        let err = sprintf!("%q", 1).unwrap_err();
        assert!(matches!(
            err,
            FormatError::UnsupportedConversion { conversion: 'q' }
        ));
    }

    #[test]
    fn test_type_mismatch_is_an_error() {
        let err = sprintf!("%d", "not a number").unwrap_err();
        assert!(matches!(err, FormatError::TypeMismatch { .. }));
        let err = sprintf!("%s", 3).unwrap_err();
        assert!(matches!(err, FormatError::TypeMismatch { .. }));
    }

    #[test]
    fn test_surplus_arguments_are_ignored() {
        assert_eq!(sprintf!("%d", 1, 2, 3).unwrap(), "1");
    }
}
