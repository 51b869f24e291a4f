//! Content elements: `text`, `image` and nested `svg`.
//!
//! Unlike shapes these have no appearance configuration; everything they
//! draw comes from their own config.

use std::fmt;

use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::{Deserialize, Serialize};

use crate::aspect_ratio::AspectRatio;
use crate::attributes::{Attributes, ToAttributes};
use crate::color::Color;
use crate::component::{box_center, Component};
use crate::error::*;
use crate::parsers::{check_finite, check_non_negative, fmt_number};
use crate::rect::Rect;
use crate::transform::TransformConfig;

/// The configuration of a content element.
pub trait ContentConfig: ToAttributes {
    /// Name of the SVG element.
    const ELEMENT: &'static str;

    fn validate(&self) -> Result<(), ConfigError>;

    fn central_point(&self) -> Result<(f64, f64), ComponentError>;

    fn bounding_box(&self) -> Result<Rect, ComponentError>;

    /// Character data or markup between the tags; `None` for an empty element.
    fn body(&self) -> Option<String>;
}

/// A content element: its configuration plus a transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Content<C> {
    config: C,
    transform: TransformConfig,
}

pub type TextContent = Content<TextConfig>;
pub type ImageContent = Content<ImageConfig>;
pub type SvgContent = Content<SvgConfig>;

impl<C: ContentConfig> Content<C> {
    pub fn new(config: C) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Content {
            config,
            transform: TransformConfig::default(),
        })
    }

    pub fn with_transform(mut self, transform: TransformConfig) -> Result<Self, ConfigError> {
        transform.validate()?;
        self.transform = transform;
        Ok(self)
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

impl<C: ContentConfig> Component for Content<C> {
    fn name(&self) -> &'static str {
        C::ELEMENT
    }

    fn central_point(&self) -> Result<(f64, f64), ComponentError> {
        self.config.central_point()
    }

    fn bounding_box(&self) -> Result<Rect, ComponentError> {
        self.config.bounding_box()
    }

    fn transform(&self) -> &TransformConfig {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut TransformConfig {
        &mut self.transform
    }

    fn to_svg_element(&self) -> String {
        let mut attrs = self.config.to_attributes();
        attrs.update(self.transform.to_attributes());

        attrs.element(C::ELEMENT, self.config.body().as_deref())
    }
}

keyword_enum!(
    /// `text-anchor`
    TextAnchor {
        Start => "start",
        Middle => "middle",
        End => "end",
    }
);

keyword_enum!(
    /// `dominant-baseline`
    DominantBaseline {
        Auto => "auto",
        Middle => "middle",
        Hanging => "hanging",
        Central => "central",
    }
);

/// A line of text.
///
/// `(x, y)` is the anchor point; with the default anchor and baseline the
/// text is centered on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextConfig {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub font_size: f64,
    pub font_family: String,
    pub color: Color,
    pub text_anchor: TextAnchor,
    pub dominant_baseline: DominantBaseline,
}

impl Default for TextConfig {
    fn default() -> Self {
        TextConfig {
            x: 0.0,
            y: 0.0,
            text: String::new(),
            font_size: 12.0,
            font_family: "Arial".to_string(),
            color: Color::black(),
            text_anchor: TextAnchor::Middle,
            dominant_baseline: DominantBaseline::Central,
        }
    }
}

impl TextConfig {
    pub fn new(text: impl Into<String>) -> Self {
        TextConfig {
            text: text.into(),
            ..Default::default()
        }
    }

    fn is_centered(&self) -> bool {
        self.text_anchor == TextAnchor::Middle
            && self.dominant_baseline == DominantBaseline::Central
    }
}

impl ToAttributes for TextConfig {
    fn to_attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        attrs.insert_number("x", self.x);
        attrs.insert_number("y", self.y);
        attrs.insert_number("font-size", self.font_size);
        attrs.insert("font-family", self.font_family.as_str());
        attrs.insert("fill", self.color.value());
        attrs.insert("text-anchor", self.text_anchor.as_str());
        attrs.insert("dominant-baseline", self.dominant_baseline.as_str());
        attrs
    }
}

impl ContentConfig for TextConfig {
    const ELEMENT: &'static str = "text";

    fn validate(&self) -> Result<(), ConfigError> {
        check_finite("x", self.x)?;
        check_finite("y", self.y)?;
        check_non_negative("font_size", self.font_size)?;
        Ok(())
    }

    fn central_point(&self) -> Result<(f64, f64), ComponentError> {
        if self.is_centered() {
            Ok((self.x, self.y))
        } else {
            Err(ComponentError::CentralPointUndetermined(Self::ELEMENT))
        }
    }

    /// The extent of rendered text depends on font metrics, which are not
    /// available here.
    fn bounding_box(&self) -> Result<Rect, ComponentError> {
        Err(ComponentError::SizeUndetermined(Self::ELEMENT))
    }

    fn body(&self) -> Option<String> {
        Some(escape(self.text.as_str()).into_owned())
    }
}

/// An embedded raster or vector image, referenced by URL or data URI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImageConfig {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub href: String,
    pub preserve_aspect_ratio: AspectRatio,
}

impl Default for ImageConfig {
    fn default() -> Self {
        ImageConfig {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 100.0,
            href: String::new(),
            preserve_aspect_ratio: AspectRatio::default(),
        }
    }
}

impl ImageConfig {
    pub fn new(href: impl Into<String>) -> Self {
        ImageConfig {
            href: href.into(),
            ..Default::default()
        }
    }
}

impl ToAttributes for ImageConfig {
    fn to_attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        attrs.insert_number("x", self.x);
        attrs.insert_number("y", self.y);
        attrs.insert_number("width", self.width);
        attrs.insert_number("height", self.height);
        attrs.insert("href", self.href.as_str());
        attrs.insert("preserveAspectRatio", self.preserve_aspect_ratio.to_string());
        attrs
    }
}

impl ContentConfig for ImageConfig {
    const ELEMENT: &'static str = "image";

    fn validate(&self) -> Result<(), ConfigError> {
        check_finite("x", self.x)?;
        check_finite("y", self.y)?;
        check_non_negative("width", self.width)?;
        check_non_negative("height", self.height)?;

        if self.href.trim().is_empty() {
            return Err(ConfigError::value("href", "an image needs a reference"));
        }

        Ok(())
    }

    fn central_point(&self) -> Result<(f64, f64), ComponentError> {
        Ok(box_center(self.x, self.y, self.width, self.height))
    }

    fn bounding_box(&self) -> Result<Rect, ComponentError> {
        Ok(Rect::new(
            self.x,
            self.y,
            self.x + self.width,
            self.y + self.height,
        ))
    }

    fn body(&self) -> Option<String> {
        None
    }
}

/// A nested `svg` element wrapping existing markup.
///
/// The markup is drawn in a `0 0 width height` coordinate system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SvgConfig {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub svg_content: SvgCode,
}

impl Default for SvgConfig {
    fn default() -> Self {
        SvgConfig {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 100.0,
            svg_content: SvgCode::default(),
        }
    }
}

impl SvgConfig {
    pub fn new(svg_content: SvgCode) -> Self {
        SvgConfig {
            svg_content,
            ..Default::default()
        }
    }
}

impl ToAttributes for SvgConfig {
    fn to_attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        attrs.insert_number("x", self.x);
        attrs.insert_number("y", self.y);
        attrs.insert_number("width", self.width);
        attrs.insert_number("height", self.height);
        attrs.insert(
            "viewBox",
            format!("0 0 {} {}", fmt_number(self.width), fmt_number(self.height)),
        );
        attrs
    }
}

impl ContentConfig for SvgConfig {
    const ELEMENT: &'static str = "svg";

    fn validate(&self) -> Result<(), ConfigError> {
        check_finite("x", self.x)?;
        check_finite("y", self.y)?;
        check_non_negative("width", self.width)?;
        check_non_negative("height", self.height)?;
        Ok(())
    }

    fn central_point(&self) -> Result<(f64, f64), ComponentError> {
        Ok(box_center(self.x, self.y, self.width, self.height))
    }

    fn bounding_box(&self) -> Result<Rect, ComponentError> {
        Ok(Rect::new(
            self.x,
            self.y,
            self.x + self.width,
            self.y + self.height,
        ))
    }

    fn body(&self) -> Option<String> {
        Some(self.svg_content.as_str().to_string())
    }
}

/// A fragment of SVG markup.
///
/// The fragment must be well-formed: every start tag has a matching end tag,
/// and text and attribute values use only the predefined entities and
/// character references.  It may contain several top-level elements, or
/// none, but no XML declaration or document type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SvgCode(String);

impl SvgCode {
    pub fn new(code: impl Into<String>) -> Result<SvgCode, ValueErrorKind> {
        let code = code.into();
        check_well_formed(&code)?;
        Ok(SvgCode(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

fn check_well_formed(code: &str) -> Result<(), ValueErrorKind> {
    let mut reader = Reader::from_str(code);
    let mut depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                check_attributes(&e)?;
                depth += 1;
            }

            Ok(Event::Empty(e)) => check_attributes(&e)?,

            Ok(Event::End(e)) => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    ValueErrorKind::Parse(format!(
                        "unexpected end tag </{}>",
                        String::from_utf8_lossy(e.name().as_ref())
                    ))
                })?;
            }

            Ok(Event::Text(t)) => {
                t.unescape().map_err(|e| {
                    ValueErrorKind::Parse(format!(
                        "invalid text before byte {}: {}",
                        reader.buffer_position(),
                        e
                    ))
                })?;
            }

            Ok(Event::Decl(_)) => {
                return Err(ValueErrorKind::parse_error(
                    "an XML declaration is not allowed in a fragment",
                ));
            }

            Ok(Event::DocType(_)) => {
                return Err(ValueErrorKind::parse_error(
                    "a document type is not allowed in a fragment",
                ));
            }

            Ok(Event::Eof) => break,

            Ok(_) => (),

            Err(e) => {
                return Err(ValueErrorKind::Parse(format!(
                    "malformed markup at byte {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
        }
    }

    if depth == 0 {
        Ok(())
    } else {
        Err(ValueErrorKind::parse_error("unclosed element"))
    }
}

// The reader does not look at attributes until asked to.
fn check_attributes(tag: &BytesStart<'_>) -> Result<(), ValueErrorKind> {
    for attr in tag.attributes() {
        let attr =
            attr.map_err(|e| ValueErrorKind::Parse(format!("malformed attribute: {}", e)))?;

        let name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();

        if attr.value.contains(&b'<') {
            return Err(ValueErrorKind::Parse(format!(
                "'<' in the value of attribute {}",
                name
            )));
        }

        attr.unescape_value().map_err(|e| {
            ValueErrorKind::Parse(format!("invalid value of attribute {}: {}", name, e))
        })?;
    }

    Ok(())
}

impl TryFrom<String> for SvgCode {
    type Error = ValueErrorKind;

    fn try_from(s: String) -> Result<SvgCode, ValueErrorKind> {
        SvgCode::new(s)
    }
}

impl From<SvgCode> for String {
    fn from(c: SvgCode) -> String {
        c.0
    }
}

impl fmt::Display for SvgCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
