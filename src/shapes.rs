//! Basic SVG shapes: the `rect`, `circle` and `polyline` elements.

use std::f64::consts::PI;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::appearance::AppearanceConfig;
use crate::attributes::{Attributes, ToAttributes};
use crate::component::{box_center, Component};
use crate::error::*;
use crate::parsers::{check_finite, check_non_negative, fmt_number};
use crate::rect::Rect;
use crate::transform::TransformConfig;

/// The geometry of a shape element.
pub trait Geometry: ToAttributes {
    /// Name of the SVG element.
    const ELEMENT: &'static str;

    fn validate(&self) -> Result<(), ConfigError>;

    fn central_point(&self) -> (f64, f64);

    fn bounding_box(&self) -> Rect;
}

/// A shape element: geometry, appearance and transform.
///
/// The element's attributes are written in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape<G> {
    config: G,
    appearance: AppearanceConfig,
    transform: TransformConfig,
}

pub type Rectangle = Shape<RectangleConfig>;
pub type Circle = Shape<CircleConfig>;
pub type Polyline = Shape<PolylineConfig>;

impl<G: Geometry> Shape<G> {
    pub fn new(config: G) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Shape {
            config,
            appearance: AppearanceConfig::default(),
            transform: TransformConfig::default(),
        })
    }

    pub fn with_appearance(mut self, appearance: AppearanceConfig) -> Result<Self, ConfigError> {
        appearance.validate()?;
        self.appearance = appearance;
        Ok(self)
    }

    pub fn with_transform(mut self, transform: TransformConfig) -> Result<Self, ConfigError> {
        transform.validate()?;
        self.transform = transform;
        Ok(self)
    }

    pub fn config(&self) -> &G {
        &self.config
    }

    pub fn appearance(&self) -> &AppearanceConfig {
        &self.appearance
    }
}

impl<G: Geometry + Default> Default for Shape<G> {
    fn default() -> Self {
        Shape {
            config: G::default(),
            appearance: AppearanceConfig::default(),
            transform: TransformConfig::default(),
        }
    }
}

impl<G: Geometry> Component for Shape<G> {
    fn name(&self) -> &'static str {
        G::ELEMENT
    }

    fn central_point(&self) -> Result<(f64, f64), ComponentError> {
        Ok(self.config.central_point())
    }

    fn bounding_box(&self) -> Result<Rect, ComponentError> {
        Ok(self.config.bounding_box())
    }

    fn transform(&self) -> &TransformConfig {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut TransformConfig {
        &mut self.transform
    }

    fn to_svg_element(&self) -> String {
        let mut attrs = self.config.to_attributes();
        attrs.update(self.appearance.to_attributes());
        attrs.update(self.transform.to_attributes());

        attrs.element(G::ELEMENT, None)
    }
}

/// Geometry of a `rect`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RectangleConfig {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Corner radius along the x axis.
    pub rx: Option<f64>,
    /// Corner radius along the y axis.
    pub ry: Option<f64>,
}

impl Default for RectangleConfig {
    fn default() -> Self {
        RectangleConfig {
            x: 0.0,
            y: 0.0,
            width: 200.0,
            height: 100.0,
            rx: None,
            ry: None,
        }
    }
}

impl ToAttributes for RectangleConfig {
    fn to_attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        attrs.insert_number("x", self.x);
        attrs.insert_number("y", self.y);
        attrs.insert_number("width", self.width);
        attrs.insert_number("height", self.height);
        attrs.insert_opt_number("rx", self.rx);
        attrs.insert_opt_number("ry", self.ry);
        attrs
    }
}

impl Geometry for RectangleConfig {
    const ELEMENT: &'static str = "rect";

    fn validate(&self) -> Result<(), ConfigError> {
        check_finite("x", self.x)?;
        check_finite("y", self.y)?;
        check_non_negative("width", self.width)?;
        check_non_negative("height", self.height)?;

        if let Some(rx) = self.rx {
            check_non_negative("rx", rx)?;
        }

        if let Some(ry) = self.ry {
            check_non_negative("ry", ry)?;
        }

        Ok(())
    }

    fn central_point(&self) -> (f64, f64) {
        box_center(self.x, self.y, self.width, self.height)
    }

    fn bounding_box(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

impl Rectangle {
    pub fn has_rounded_corners(&self) -> bool {
        self.config.rx.is_some() || self.config.ry.is_some()
    }

    /// Area of the untransformed rectangle, ignoring rounded corners.
    pub fn area(&self) -> f64 {
        self.config.width * self.config.height
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.config.width + self.config.height)
    }
}

/// Geometry of a `circle`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CircleConfig {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

impl Default for CircleConfig {
    fn default() -> Self {
        CircleConfig {
            cx: 50.0,
            cy: 50.0,
            r: 50.0,
        }
    }
}

impl ToAttributes for CircleConfig {
    fn to_attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        attrs.insert_number("cx", self.cx);
        attrs.insert_number("cy", self.cy);
        attrs.insert_number("r", self.r);
        attrs
    }
}

impl Geometry for CircleConfig {
    const ELEMENT: &'static str = "circle";

    fn validate(&self) -> Result<(), ConfigError> {
        check_finite("cx", self.cx)?;
        check_finite("cy", self.cy)?;
        check_non_negative("r", self.r)?;
        Ok(())
    }

    fn central_point(&self) -> (f64, f64) {
        (self.cx, self.cy)
    }

    fn bounding_box(&self) -> Rect {
        Rect::new(
            self.cx - self.r,
            self.cy - self.r,
            self.cx + self.r,
            self.cy + self.r,
        )
    }
}

impl Circle {
    pub fn area(&self) -> f64 {
        PI * self.config.r * self.config.r
    }

    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.config.r
    }
}

/// Geometry of a `polyline`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolylineConfig {
    pub points: Vec<(f64, f64)>,
}

impl PolylineConfig {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        PolylineConfig { points }
    }
}

fn check_points(points: &[(f64, f64)]) -> Result<(), ConfigError> {
    for &(x, y) in points {
        check_finite("points", x)?;
        check_finite("points", y)?;
    }

    Ok(())
}

impl ToAttributes for PolylineConfig {
    fn to_attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();

        if !self.points.is_empty() {
            let points = self
                .points
                .iter()
                .map(|&(x, y)| format!("{},{}", fmt_number(x), fmt_number(y)))
                .join(" ");

            attrs.insert("points", points);
        }

        attrs
    }
}

impl Geometry for PolylineConfig {
    const ELEMENT: &'static str = "polyline";

    fn validate(&self) -> Result<(), ConfigError> {
        if self.points.is_empty() {
            return Err(ConfigError::value(
                "points",
                "a polyline must have at least one point",
            ));
        }

        check_points(&self.points)
    }

    /// The centroid of the points, or the origin if there are none.
    fn central_point(&self) -> (f64, f64) {
        if self.points.is_empty() {
            return (0.0, 0.0);
        }

        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), &(x, y)| (sx + x, sy + y));
        let n = self.points.len() as f64;

        (sx / n, sy / n)
    }

    fn bounding_box(&self) -> Rect {
        Rect::from_points(&self.points).unwrap_or_default()
    }
}

impl Polyline {
    /// Lengths of the segments between consecutive points.
    pub fn segment_lengths(&self) -> Vec<f64> {
        self.config
            .points
            .iter()
            .tuple_windows()
            .map(|(&(x1, y1), &(x2, y2))| (x2 - x1).hypot(y2 - y1))
            .collect()
    }

    pub fn total_length(&self) -> f64 {
        self.segment_lengths().iter().sum()
    }

    pub fn add_point(&mut self, x: f64, y: f64) -> Result<&mut Self, ConfigError> {
        self.add_points(&[(x, y)])
    }

    /// Appends points; nothing is added if any of them is invalid.
    pub fn add_points(&mut self, points: &[(f64, f64)]) -> Result<&mut Self, ConfigError> {
        check_points(points)?;
        self.config.points.extend_from_slice(points);
        Ok(self)
    }

    pub fn clear_points(&mut self) -> &mut Self {
        self.config.points.clear();
        self
    }

    pub fn point_count(&self) -> usize {
        self.config.points.len()
    }
}
