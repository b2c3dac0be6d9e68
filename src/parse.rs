//! String-to-value parsing
//!
//! Typed parsing for configuration and command-line values. Numeric
//! types delegate to `FromStr`; booleans additionally accept the numeric
//! forms `"0"` and `"1"` and case-insensitive `"true"`/`"false"`.

use crate::error::ParseError;
use crate::text::eq_ignore_case;

/// A value that can be parsed from its textual form.
pub trait ParseValue: Sized {
    fn parse_value(s: &str) -> Result<Self, ParseError>;
}

macro_rules! impl_parse_value {
    ($($ty:ty),* $(,)?) => {$(
        impl ParseValue for $ty {
            fn parse_value(s: &str) -> Result<Self, ParseError> {
                s.trim().parse::<$ty>().map_err(|e| ParseError::InvalidNumber {
                    value: s.to_string(),
                    reason: e.to_string(),
                })
            }
        }
    )*};
}

impl_parse_value!(i32, i64, u32, u64, usize, f32, f64);

impl ParseValue for bool {
    fn parse_value(s: &str) -> Result<Self, ParseError> {
        if eq_ignore_case(s.trim(), "true") {
            return Ok(true);
        }
        if eq_ignore_case(s.trim(), "false") {
            return Ok(false);
        }
        // fall back to the numeric forms {0, 1}
        match i64::parse_value(s) {
            Ok(0) => Ok(false),
            Ok(1) => Ok(true),
            _ => Err(ParseError::InvalidBool {
                value: s.to_string(),
            }),
        }
    }
}

/// Parses a string into `T`.
pub fn parse<T: ParseValue>(s: &str) -> Result<T, ParseError> {
    T::parse_value(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integers() {
        assert_eq!(parse::<i32>("42").unwrap(), 42);
        assert_eq!(parse::<i64>("-7").unwrap(), -7);
        assert_eq!(parse::<usize>(" 128 ").unwrap(), 128);
        assert!(parse::<u32>("-1").is_err());
    }

    #[test]
    fn test_parse_floats() {
        assert_eq!(parse::<f64>("2.5").unwrap(), 2.5);
        assert_eq!(parse::<f32>("-0.125").unwrap(), -0.125);
        assert!(parse::<f64>("two point five").is_err());
    }

    #[test]
    fn test_parse_bool_words() {
        assert!(parse::<bool>("true").unwrap());
        assert!(parse::<bool>("TRUE").unwrap());
        assert!(!parse::<bool>("False").unwrap());
    }

    #[test]
    fn test_parse_bool_numeric() {
        assert!(parse::<bool>("1").unwrap());
        assert!(!parse::<bool>("0").unwrap());
    }

    #[test]
    fn test_parse_bool_rejects_everything_else() {
        let err = parse::<bool>("2").unwrap_err();
        assert!(matches!(err, ParseError::InvalidBool { .. }));
        assert!(parse::<bool>("yes").is_err());
        assert!(parse::<bool>("").is_err());
    }

    #[test]
    fn test_invalid_number_reports_value() {
        let err = parse::<i32>("abc").unwrap_err();
        if let ParseError::InvalidNumber { value, .. } = err {
            assert_eq!(value, "abc");
        } else {
            panic!("expected InvalidNumber");
        }
    }
}
