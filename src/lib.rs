//! Build SVG documents out of validated components.
//!
//! This crate provides SVG shapes (`rect`, `circle`, `polyline`) and
//! content elements (`text`, `image`, nested `svg`).  Each component holds a
//! configuration struct that is validated when the component is created,
//! and a [`TransformConfig`] that records moves, rotations, scaling and
//! skews.  Components are placed on a [`Canvas`], which writes the final
//! SVG document.
//!
//! # Basic usage
//!
//! * Create components from their configs, e.g. [`Rectangle::new`].
//! * Optionally give shapes an [`AppearanceConfig`] and transform them with
//!   the [`Component`] methods, which reject steps that would leave an
//!   invalid transform.
//! * Add them to a [`Canvas`] and call [`Canvas::to_svg`] or [`Canvas::save`].
//!
//! # Example
//!
//! ```
//! use svgbuild::{
//!     AppearanceConfig, Canvas, Circle, CircleConfig, Color, Component, Rectangle,
//!     RectangleConfig,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let rect = Rectangle::new(RectangleConfig {
//!     x: 10.0,
//!     y: 10.0,
//!     width: 80.0,
//!     height: 40.0,
//!     ..Default::default()
//! })?
//! .with_appearance(AppearanceConfig {
//!     fill: Some(Color::new("skyblue")?),
//!     ..Default::default()
//! })?
//! .rotate(15.0)?;
//!
//! let circle = Circle::new(CircleConfig {
//!     cx: 150.0,
//!     cy: 50.0,
//!     r: 30.0,
//! })?;
//!
//! let mut canvas = Canvas::new(200.0, 100.0)?;
//! canvas.add(rect).add(circle);
//!
//! let svg = canvas.to_svg();
//! assert!(svg.contains(r#"<circle cx="150" cy="50" r="30" />"#));
//! assert!(svg.contains(r#"transform="rotate(15, 50, 30)""#));
//! # Ok(())
//! # }
//! ```
//!
//! # Scene documents
//!
//! A whole canvas can also be described in JSON and loaded with
//! [`Scene::from_json`]; this is what the `svgbuild` program does.

#![warn(nonstandard_style, rust_2018_idioms, unused)]
#![warn(trivial_casts, trivial_numeric_casts)]

// The macros are used by the modules below.
#[macro_use]
mod logging;
#[macro_use]
mod parsers;

mod angle;
mod appearance;
mod aspect_ratio;
mod attributes;
mod canvas;
mod color;
mod component;
mod content;
mod error;
mod rect;
mod scene;
mod shapes;
mod transform;
mod viewbox;

pub use crate::angle::Angle;
pub use crate::appearance::{AppearanceConfig, LineCap, LineJoin};
pub use crate::aspect_ratio::AspectRatio;
pub use crate::attributes::{Attributes, ToAttributes};
pub use crate::canvas::Canvas;
pub use crate::color::Color;
pub use crate::component::{fit_factor, Component};
pub use crate::content::{
    Content, ContentConfig, DominantBaseline, ImageConfig, ImageContent, SvgCode, SvgConfig,
    SvgContent, TextAnchor, TextConfig, TextContent,
};
pub use crate::error::{
    CanvasError, ComponentError, ConfigError, ParseError, SceneError, ValueErrorKind,
};
pub use crate::logging::{configure_logging, set_global_logging_level, LogConfig, LOG_ENV};
pub use crate::parsers::Parse;
pub use crate::rect::Rect;
pub use crate::scene::{ComponentKind, Scene, SceneComponent};
pub use crate::shapes::{
    Circle, CircleConfig, Geometry, Polyline, PolylineConfig, Rectangle, RectangleConfig, Shape,
};
pub use crate::transform::{Transform, TransformConfig};
pub use crate::viewbox::ViewBox;
