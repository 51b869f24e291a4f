//! Paint values for `fill` and `stroke`.

use std::fmt;

use cssparser::Parser;
use serde::{Deserialize, Serialize};

use crate::error::*;
use crate::parsers::Parse;

/// A color as written in an SVG attribute.
///
/// Any CSS color is accepted (`red`, `#0af`, `rgb(1, 2, 3)`, `hsl(...)`,
/// `currentColor`, `transparent`), as well as `none`.  The value is kept as
/// given, so that it is written back out unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    pub fn new(value: &str) -> Result<Color, ValueErrorKind> {
        Color::parse_str(value).map_err(ValueErrorKind::from_parse_error)
    }

    pub fn none() -> Color {
        Color("none".to_string())
    }

    pub fn black() -> Color {
        Color("black".to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn is_none(&self) -> bool {
        self.0 == "none"
    }
}

impl Parse for Color {
    fn parse<'i>(parser: &mut Parser<'i, '_>) -> Result<Color, ParseError<'i>> {
        let start = parser.position();

        if parser
            .try_parse(|p| p.expect_ident_matching("none"))
            .is_err()
        {
            cssparser::Color::parse(parser)?;
        }

        Ok(Color(parser.slice_from(start).trim().to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = ValueErrorKind;

    fn try_from(value: String) -> Result<Color, ValueErrorKind> {
        Color::new(&value)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> String {
        c.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
