//! The `viewBox` attribute.

use std::fmt;
use std::ops::Deref;

use cssparser::Parser;
use serde::{Deserialize, Serialize};

use crate::error::*;
use crate::parsers::{fmt_number, optional_comma, Parse};
use crate::rect::Rect;

/// Newtype around a [`Rect`], used to represent the `viewBox` attribute.
///
/// A `ViewBox` is a new user-space coordinate system mapped onto the rectangle defined by
/// the current viewport.  See <https://www.w3.org/TR/SVG2/coords.html#ViewBoxAttribute>
///
/// `ViewBox` derefs to `Rect`, so you can use `Rect`'s methods and fields directly like
/// `vbox.x0` or `vbox.width()`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ViewBox(Rect);

impl ViewBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<ViewBox, ValueErrorKind> {
        let all_finite = [x, y, width, height].iter().all(|v| v.is_finite());

        if !all_finite {
            Err(ValueErrorKind::value_error("expected finite numbers"))
        } else if width < 0.0 || height < 0.0 {
            Err(ValueErrorKind::value_error(
                "width and height must not be negative",
            ))
        } else {
            Ok(ViewBox(Rect::new(x, y, x + width, y + height)))
        }
    }

    /// `0 0 width height`, for sizes that were already validated.
    pub(crate) fn from_size(width: f64, height: f64) -> ViewBox {
        ViewBox(Rect::from_size(width, height))
    }
}

impl Deref for ViewBox {
    type Target = Rect;

    fn deref(&self) -> &Rect {
        &self.0
    }
}

impl Parse for ViewBox {
    // Parse a viewBox attribute
    // https://www.w3.org/TR/SVG/coords.html#ViewBoxAttribute
    //
    // viewBox: double [,] double [,] double [,] double [,]
    //
    // x, y, w, h
    //
    // Where w and h must be nonnegative.
    fn parse<'i>(parser: &mut Parser<'i, '_>) -> Result<ViewBox, ParseError<'i>> {
        let loc = parser.current_source_location();

        let mut v = [0.0; 4];
        for (i, slot) in v.iter_mut().enumerate() {
            if i != 0 {
                optional_comma(parser);
            }
            *slot = f64::parse(parser)?;
        }

        ViewBox::new(v[0], v[1], v[2], v[3]).map_err(|e| loc.new_custom_error(e))
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            fmt_number(self.x0),
            fmt_number(self.y0),
            fmt_number(self.width()),
            fmt_number(self.height())
        )
    }
}

impl TryFrom<String> for ViewBox {
    type Error = ValueErrorKind;

    fn try_from(s: String) -> Result<ViewBox, ValueErrorKind> {
        ViewBox::parse_str(&s).map_err(ValueErrorKind::from_parse_error)
    }
}

impl From<ViewBox> for String {
    fn from(v: ViewBox) -> String {
        v.to_string()
    }
}
