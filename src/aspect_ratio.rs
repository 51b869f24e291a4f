//! Handling of `preserveAspectRatio` values.
//!
//! This module handles `preserveAspectRatio` values [per the SVG specification][spec].
//! We have an [`AspectRatio`] struct which encapsulates such a value.
//!
//! ```
//! # use svgbuild::{AspectRatio, Parse};
//! assert_eq!(
//!     AspectRatio::parse_str("xMidYMid").unwrap(),
//!     AspectRatio::default()
//! );
//! assert_eq!(AspectRatio::default().to_string(), "xMidYMid meet");
//! ```
//!
//! [spec]: https://www.w3.org/TR/SVG/coords.html#PreserveAspectRatioAttribute

use std::fmt;

use cssparser::{BasicParseError, Parser};
use serde::{Deserialize, Serialize};

use crate::error::*;
use crate::parsers::Parse;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
enum FitMode {
    #[default]
    Meet,
    Slice,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
enum Align1D {
    Min,
    #[default]
    Mid,
    Max,
}

impl Align1D {
    fn as_str(self) -> &'static str {
        match self {
            Align1D::Min => "Min",
            Align1D::Mid => "Mid",
            Align1D::Max => "Max",
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
struct Align {
    x: Align1D,
    y: Align1D,
    fit: FitMode,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AspectRatio {
    defer: bool,
    align: Option<Align>,
}

impl Default for AspectRatio {
    fn default() -> AspectRatio {
        AspectRatio {
            defer: false,
            align: Some(Align::default()),
        }
    }
}

impl AspectRatio {
    pub fn is_slice(&self) -> bool {
        matches!(
            self.align,
            Some(Align {
                fit: FitMode::Slice,
                ..
            })
        )
    }

    /// Whether the content is stretched to fill the viewport (`none`).
    pub fn is_none(&self) -> bool {
        self.align.is_none()
    }
}

/// Writes the canonical form, always including the fit mode.
impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.defer {
            f.write_str("defer ")?;
        }

        match self.align {
            None => f.write_str("none"),

            Some(Align { x, y, fit }) => {
                let fit = match fit {
                    FitMode::Meet => "meet",
                    FitMode::Slice => "slice",
                };

                write!(f, "x{}Y{} {}", x.as_str(), y.as_str(), fit)
            }
        }
    }
}

fn parse_align_xy<'i>(
    parser: &mut Parser<'i, '_>,
) -> Result<Option<(Align1D, Align1D)>, BasicParseError<'i>> {
    use self::Align1D::*;

    parse_identifiers!(
        parser,

        "none" => None,

        "xMinYMin" => Some((Min, Min)),
        "xMidYMin" => Some((Mid, Min)),
        "xMaxYMin" => Some((Max, Min)),

        "xMinYMid" => Some((Min, Mid)),
        "xMidYMid" => Some((Mid, Mid)),
        "xMaxYMid" => Some((Max, Mid)),

        "xMinYMax" => Some((Min, Max)),
        "xMidYMax" => Some((Mid, Max)),
        "xMaxYMax" => Some((Max, Max)),
    )
}

fn parse_fit_mode<'i>(parser: &mut Parser<'i, '_>) -> Result<FitMode, BasicParseError<'i>> {
    parse_identifiers!(
        parser,
        "meet" => FitMode::Meet,
        "slice" => FitMode::Slice,
    )
}

impl Parse for AspectRatio {
    fn parse<'i>(parser: &mut Parser<'i, '_>) -> Result<AspectRatio, ParseError<'i>> {
        let defer = parser
            .try_parse(|p| p.expect_ident_matching("defer"))
            .is_ok();

        let align_xy = parser.try_parse(parse_align_xy)?;
        let fit = parser.try_parse(parse_fit_mode).unwrap_or_default();
        let align = align_xy.map(|(x, y)| Align { x, y, fit });

        Ok(AspectRatio { defer, align })
    }
}

impl TryFrom<String> for AspectRatio {
    type Error = ValueErrorKind;

    fn try_from(s: String) -> Result<AspectRatio, ValueErrorKind> {
        AspectRatio::parse_str(&s).map_err(ValueErrorKind::from_parse_error)
    }
}

impl From<AspectRatio> for String {
    fn from(a: AspectRatio) -> String {
        a.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_invalid_strings_yields_error() {
        assert!(AspectRatio::parse_str("").is_err());
        assert!(AspectRatio::parse_str("defer").is_err());
        assert!(AspectRatio::parse_str("defer foo").is_err());
        assert!(AspectRatio::parse_str("defer xMidYMid foo").is_err());
        assert!(AspectRatio::parse_str("xMidYMid foo").is_err());
        assert!(AspectRatio::parse_str("defer xMidYMid meet foo").is_err());
    }

    #[test]
    fn parses_valid_strings() {
        assert_eq!(
            AspectRatio::parse_str("defer none").unwrap(),
            AspectRatio {
                defer: true,
                align: None,
            }
        );

        assert_eq!(
            AspectRatio::parse_str("xMidYMid").unwrap(),
            AspectRatio::default()
        );

        assert_eq!(
            AspectRatio::parse_str("defer xMinYMax slice").unwrap(),
            AspectRatio {
                defer: true,
                align: Some(Align {
                    x: Align1D::Min,
                    y: Align1D::Max,
                    fit: FitMode::Slice,
                }),
            }
        );
    }

    #[test]
    fn displays_canonical_form() {
        for (input, output) in [
            ("xMidYMid", "xMidYMid meet"),
            ("xMinYMax slice", "xMinYMax slice"),
            ("defer xMaxYMin meet", "defer xMaxYMin meet"),
            ("none", "none"),
            ("none slice", "none"),
        ] {
            assert_eq!(AspectRatio::parse_str(input).unwrap().to_string(), output);
        }

        assert!(AspectRatio::parse_str("xMinYMax slice").unwrap().is_slice());
        assert!(AspectRatio::parse_str("none").unwrap().is_none());
    }

    #[test]
    fn deserializes_from_string() {
        let a: AspectRatio = serde_json::from_str("\"xMaxYMax slice\"").unwrap();
        assert!(a.is_slice());
        assert!(serde_json::from_str::<AspectRatio>("\"sideways\"").is_err());
    }
}
