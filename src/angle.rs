//! Angle values for rotations and skews.

use std::fmt;
use std::ops::Add;

use cssparser::{Parser, Token};
use float_cmp::approx_eq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::*;
use crate::parsers::{finite_f32, fmt_number, Parse};

/// An angle, stored in degrees and normalized to `[0, 360)`.
///
/// Degrees are kept as the canonical unit so that values given by the
/// caller come back out unchanged in `rotate()` and `skewX()` attributes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Angle(f64);

impl Angle {
    pub fn new(rad: f64) -> Angle {
        Angle::from_degrees(rad.to_degrees())
    }

    pub fn from_degrees(deg: f64) -> Angle {
        Angle(Angle::normalize(deg))
    }

    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }

    pub fn degrees(self) -> f64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    // Normalizes an angle to [0.0, 360.0)
    fn normalize(deg: f64) -> f64 {
        let res = deg % 360.0;
        if approx_eq!(f64, res, 0.0) || approx_eq!(f64, res.abs(), 360.0) {
            0.0
        } else if res < 0.0 {
            res + 360.0
        } else {
            res
        }
    }
}

/// Composes two rotations.
impl Add for Angle {
    type Output = Angle;

    fn add(self, other: Angle) -> Angle {
        Angle::from_degrees(self.0 + other.0)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", fmt_number(self.0))
    }
}

// angle:
// https://www.w3.org/TR/SVG/types.html#DataTypeAngle
//
// angle ::= number ("deg" | "grad" | "rad" | "turn")?
//
impl Parse for Angle {
    fn parse<'i>(parser: &mut Parser<'i, '_>) -> Result<Angle, ParseError<'i>> {
        let angle = {
            let loc = parser.current_source_location();

            let token = parser.next()?;

            match *token {
                Token::Number { value, .. } => {
                    let degrees = finite_f32(value).map_err(|e| loc.new_custom_error(e))?;
                    Angle::from_degrees(f64::from(degrees))
                }

                Token::Dimension {
                    value, ref unit, ..
                } => {
                    let value = f64::from(finite_f32(value).map_err(|e| loc.new_custom_error(e))?);

                    match unit.as_ref() {
                        "deg" => Angle::from_degrees(value),
                        "grad" => Angle::from_degrees(value * 360.0 / 400.0),
                        "rad" => Angle::new(value),
                        "turn" => Angle::from_degrees(value * 360.0),
                        _ => {
                            return Err(loc.new_unexpected_token_error(token.clone()));
                        }
                    }
                }

                _ => return Err(loc.new_unexpected_token_error(token.clone())),
            }
        };

        Ok(angle)
    }
}

impl Serialize for Angle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

/// Scene documents may give angles as plain degrees or as strings with units.
impl<'de> Deserialize<'de> for Angle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Degrees(f64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Degrees(deg) if deg.is_finite() => Ok(Angle::from_degrees(deg)),
            Repr::Degrees(_) => Err(serde::de::Error::custom("expected finite number")),
            Repr::Text(s) => Angle::parse_str(&s)
                .map_err(|e| serde::de::Error::custom(ValueErrorKind::from_parse_error(e))),
        }
    }
}
