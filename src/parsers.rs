//! The `Parse` trait for attribute values, and utilities for parsers.

use cssparser::{Parser, ParserInput};

use crate::error::*;

/// Trait to parse values using `cssparser::Parser`.
pub trait Parse: Sized {
    /// Parses a value out of the `parser`.
    ///
    /// All value types should implement this for composability.
    fn parse<'i>(parser: &mut Parser<'i, '_>) -> Result<Self, ParseError<'i>>;

    /// Convenience function to parse a value out of a `&str`.
    ///
    /// The whole string must be consumed.
    fn parse_str(s: &str) -> Result<Self, ParseError<'_>> {
        let mut input = ParserInput::new(s);
        let mut parser = Parser::new(&mut input);

        let res = Self::parse(&mut parser)?;
        parser.expect_exhausted()?;

        Ok(res)
    }
}

/// Consumes a comma if it exists, or does nothing.
pub fn optional_comma(parser: &mut Parser<'_, '_>) {
    let _ = parser.try_parse(|p| p.expect_comma());
}

/// Parses an `f32` and ensures that it is not an infinity or NaN.
pub fn finite_f32(n: f32) -> Result<f32, ValueErrorKind> {
    if n.is_finite() {
        Ok(n)
    } else {
        Err(ValueErrorKind::Value("expected finite number".to_string()))
    }
}

impl Parse for f64 {
    fn parse<'i>(parser: &mut Parser<'i, '_>) -> Result<Self, ParseError<'i>> {
        let loc = parser.current_source_location();
        let n = parser.expect_number()?;
        if n.is_finite() {
            Ok(f64::from(n))
        } else {
            Err(loc.new_custom_error(ValueErrorKind::value_error("expected finite number")))
        }
    }
}

/// A whitespace- or comma-separated list of numbers, like `stroke-dasharray`.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberList(pub Vec<f64>);

impl Parse for NumberList {
    fn parse<'i>(parser: &mut Parser<'i, '_>) -> Result<Self, ParseError<'i>> {
        let mut v = Vec::new();

        while !parser.is_exhausted() {
            if !v.is_empty() {
                optional_comma(parser);
            }

            v.push(f64::parse(parser)?);
        }

        Ok(NumberList(v))
    }
}

/// Parses one of a set of keywords, case-insensitively.
///
/// # Example
///
/// ```ignore
/// let fit = parse_identifiers!(
///     parser,
///     "meet" => FitMode::Meet,
///     "slice" => FitMode::Slice,
/// )?;
/// ```
macro_rules! parse_identifiers {
    ($parser:expr,
     $($str:expr => $val:expr,)+) => {
        {
            let loc = $parser.current_source_location();
            let token = $parser.next()?;

            match token {
                $(cssparser::Token::Ident(ref cow) if cow.eq_ignore_ascii_case($str) => Ok($val),)+

                _ => Err(loc.new_basic_unexpected_token_error(token.clone()))
            }
        }
    };
}

/// Declares an enum of SVG keywords.
///
/// Variants serialize as their lowercased names and display as the given
/// keyword.
macro_rules! keyword_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $kw:expr,)+ }) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $kw,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// Validators for configuration fields.  They take the plain values that
// configs store and report which field was wrong.

pub fn check_finite(field: &'static str, v: f64) -> Result<f64, ConfigError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ConfigError::value(field, "expected finite number"))
    }
}

pub fn check_non_negative(field: &'static str, v: f64) -> Result<f64, ConfigError> {
    let v = check_finite(field, v)?;

    if v >= 0.0 {
        Ok(v)
    } else {
        Err(ConfigError::value(field, "must not be negative"))
    }
}

pub fn check_unit_interval(field: &'static str, v: f64) -> Result<f64, ConfigError> {
    let v = check_finite(field, v)?;

    if (0.0..=1.0).contains(&v) {
        Ok(v)
    } else {
        Err(ConfigError::value(field, "must be between 0 and 1"))
    }
}

/// Formats a number for an attribute value.
///
/// Uses the shortest representation that round-trips, and never prints `-0`.
pub fn fmt_number(v: f64) -> String {
    if v == 0.0 {
        "0".to_string()
    } else {
        format!("{}", v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_number() {
        assert_eq!(f64::parse_str("1.5"), Ok(1.5));
        assert_eq!(f64::parse_str("-2e2"), Ok(-200.0));
        assert!(f64::parse_str("foo").is_err());
        assert!(f64::parse_str("1 2").is_err());
    }

    #[test]
    fn parses_number_list() {
        assert_eq!(NumberList::parse_str("5 3"), Ok(NumberList(vec![5.0, 3.0])));
        assert_eq!(
            NumberList::parse_str("1,2, 3"),
            Ok(NumberList(vec![1.0, 2.0, 3.0]))
        );
        assert_eq!(NumberList::parse_str(""), Ok(NumberList(vec![])));
        assert!(NumberList::parse_str("1,,2").is_err());
    }

    #[test]
    fn checks_ranges() {
        assert!(check_non_negative("w", 0.0).is_ok());
        assert!(check_non_negative("w", -0.1).is_err());
        assert!(check_non_negative("w", f64::NAN).is_err());
        assert!(check_unit_interval("o", 1.0).is_ok());
        assert!(check_unit_interval("o", 1.1).is_err());
        assert_eq!(check_finite("x", f64::INFINITY).unwrap_err().field, "x");
    }

    #[test]
    fn formats_numbers() {
        assert_eq!(fmt_number(100.0), "100");
        assert_eq!(fmt_number(12.5), "12.5");
        assert_eq!(fmt_number(-0.0), "0");
        assert_eq!(fmt_number(0.1), "0.1");
    }
}
