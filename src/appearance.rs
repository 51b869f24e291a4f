//! Presentation attributes shared by all shapes.

use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize};

use crate::attributes::{Attributes, ToAttributes};
use crate::color::Color;
use crate::error::*;
use crate::parsers::{check_non_negative, check_unit_interval, fmt_number, NumberList, Parse};

keyword_enum!(
    /// `stroke-linecap`
    LineCap {
        Butt => "butt",
        Round => "round",
        Square => "square",
    }
);

keyword_enum!(
    /// `stroke-linejoin`
    LineJoin {
        Miter => "miter",
        Round => "round",
        Bevel => "bevel",
    }
);

/// Fill, stroke and opacity of a shape.
///
/// Every field is optional; unset fields are not written, so the SVG
/// defaults apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppearanceConfig {
    pub fill: Option<Color>,
    pub fill_opacity: Option<f64>,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f64>,
    pub stroke_opacity: Option<f64>,
    #[serde(deserialize_with = "deserialize_dasharray")]
    pub stroke_dasharray: Option<Vec<f64>>,
    pub stroke_linecap: Option<LineCap>,
    pub stroke_linejoin: Option<LineJoin>,
    pub opacity: Option<f64>,
}

impl AppearanceConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit = [
            ("fill_opacity", self.fill_opacity),
            ("stroke_opacity", self.stroke_opacity),
            ("opacity", self.opacity),
        ];

        for (field, value) in unit {
            if let Some(v) = value {
                check_unit_interval(field, v)?;
            }
        }

        if let Some(w) = self.stroke_width {
            check_non_negative("stroke_width", w)?;
        }

        if let Some(ref dashes) = self.stroke_dasharray {
            if dashes.is_empty() {
                return Err(ConfigError::value("stroke_dasharray", "must not be empty"));
            }

            for &d in dashes {
                check_non_negative("stroke_dasharray", d)?;
            }

            if dashes.iter().all(|&d| d == 0.0) {
                return Err(ConfigError::value(
                    "stroke_dasharray",
                    "at least one dash must be longer than zero",
                ));
            }
        }

        Ok(())
    }
}

impl ToAttributes for AppearanceConfig {
    fn to_attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();

        if let Some(ref c) = self.fill {
            attrs.insert("fill", c.value());
        }
        attrs.insert_opt_number("fill-opacity", self.fill_opacity);

        if let Some(ref c) = self.stroke {
            attrs.insert("stroke", c.value());
        }
        attrs.insert_opt_number("stroke-width", self.stroke_width);
        attrs.insert_opt_number("stroke-opacity", self.stroke_opacity);

        if let Some(ref dashes) = self.stroke_dasharray {
            attrs.insert(
                "stroke-dasharray",
                dashes.iter().map(|&d| fmt_number(d)).join(","),
            );
        }

        if let Some(cap) = self.stroke_linecap {
            attrs.insert("stroke-linecap", cap.as_str());
        }

        if let Some(join) = self.stroke_linejoin {
            attrs.insert("stroke-linejoin", join.as_str());
        }

        attrs.insert_opt_number("opacity", self.opacity);

        attrs
    }
}

/// Dash arrays may be given as a list of numbers or as an SVG string like `"5 3"`.
fn deserialize_dasharray<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<f64>>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        List(Vec<f64>),
        Text(String),
    }

    match Option::<Repr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Repr::List(v)) => Ok(Some(v)),
        Some(Repr::Text(s)) => NumberList::parse_str(&s)
            .map(|NumberList(v)| Some(v))
            .map_err(|e| serde::de::Error::custom(ValueErrorKind::from_parse_error(e))),
    }
}
