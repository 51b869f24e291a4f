//! Handling of `transform` values.
//!
//! A component's placement is described by a [`TransformConfig`]: an
//! accumulated translation, a rotation and a scale about given centers, and
//! optional skews.  It is written out as a `transform` attribute
//! [per the SVG specification][spec], and can be flattened into an affine
//! [`Transform`] matrix to compute where a component ends up.
//!
//! [spec]:  https://www.w3.org/TR/SVG11/coords.html#TransformAttribute

use std::fmt;

use cssparser::{Parser, Token};
use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::angle::Angle;
use crate::attributes::{Attributes, ToAttributes};
use crate::error::*;
use crate::parsers::{check_finite, fmt_number, optional_comma, Parse};
use crate::rect::Rect;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub xx: f64,
    pub yx: f64,
    pub xy: f64,
    pub yy: f64,
    pub x0: f64,
    pub y0: f64,
}

impl Transform {
    #[inline]
    pub fn new_unchecked(xx: f64, yx: f64, xy: f64, yy: f64, x0: f64, y0: f64) -> Self {
        Self {
            xx,
            xy,
            x0,
            yx,
            yy,
            y0,
        }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new_unchecked(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    #[inline]
    pub fn new_translate(tx: f64, ty: f64) -> Self {
        Self::new_unchecked(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    #[inline]
    pub fn new_scale(sx: f64, sy: f64) -> Self {
        Self::new_unchecked(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    #[inline]
    pub fn new_rotate(a: Angle) -> Self {
        let (s, c) = a.radians().sin_cos();
        Self::new_unchecked(c, s, -s, c, 0.0, 0.0)
    }

    #[inline]
    pub fn new_skew(ax: Angle, ay: Angle) -> Self {
        Self::new_unchecked(1.0, ay.radians().tan(), ax.radians().tan(), 1.0, 0.0, 0.0)
    }

    /// Rotation by `a` about the point `(cx, cy)`.
    pub fn new_rotate_about(a: Angle, cx: f64, cy: f64) -> Self {
        Transform::new_translate(cx, cy)
            .pre_rotate(a)
            .pre_translate(-cx, -cy)
    }

    /// Scale by `(sx, sy)` keeping the point `(cx, cy)` fixed.
    pub fn new_scale_about(sx: f64, sy: f64, cx: f64, cy: f64) -> Self {
        Transform::new_translate(cx, cy)
            .pre_scale(sx, sy)
            .pre_translate(-cx, -cy)
    }

    /// Composes two transforms; `t1` is applied first.
    #[must_use]
    pub fn multiply(t1: &Transform, t2: &Transform) -> Self {
        Transform {
            xx: t1.xx * t2.xx + t1.yx * t2.xy,
            yx: t1.xx * t2.yx + t1.yx * t2.yy,
            xy: t1.xy * t2.xx + t1.yy * t2.xy,
            yy: t1.xy * t2.yx + t1.yy * t2.yy,
            x0: t1.x0 * t2.xx + t1.y0 * t2.xy + t2.x0,
            y0: t1.x0 * t2.yx + t1.y0 * t2.yy + t2.y0,
        }
    }

    #[inline]
    pub fn pre_transform(&self, t: &Transform) -> Self {
        Self::multiply(t, self)
    }

    #[inline]
    pub fn post_transform(&self, t: &Transform) -> Self {
        Self::multiply(self, t)
    }

    #[inline]
    pub fn pre_translate(&self, x: f64, y: f64) -> Self {
        self.pre_transform(&Transform::new_translate(x, y))
    }

    #[inline]
    pub fn pre_scale(&self, sx: f64, sy: f64) -> Self {
        self.pre_transform(&Transform::new_scale(sx, sy))
    }

    #[inline]
    pub fn pre_rotate(&self, angle: Angle) -> Self {
        self.pre_transform(&Transform::new_rotate(angle))
    }

    #[inline]
    fn determinant(&self) -> f64 {
        self.xx * self.yy - self.xy * self.yx
    }

    #[inline]
    pub fn is_invertible(&self) -> bool {
        let det = self.determinant();

        det != 0.0 && det.is_finite()
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Transform::identity()
    }

    #[must_use]
    pub fn invert(&self) -> Option<Self> {
        let det = self.determinant();

        if det == 0.0 || !det.is_finite() {
            return None;
        }

        let inv_det = 1.0 / det;

        Some(Transform::new_unchecked(
            inv_det * self.yy,
            inv_det * (-self.yx),
            inv_det * (-self.xy),
            inv_det * self.xx,
            inv_det * (self.xy * self.y0 - self.yy * self.x0),
            inv_det * (self.yx * self.x0 - self.xx * self.y0),
        ))
    }

    #[inline]
    pub fn transform_distance(&self, dx: f64, dy: f64) -> (f64, f64) {
        (dx * self.xx + dy * self.xy, dx * self.yx + dy * self.yy)
    }

    #[inline]
    pub fn transform_point(&self, px: f64, py: f64) -> (f64, f64) {
        let (x, y) = self.transform_distance(px, py);
        (x + self.x0, y + self.y0)
    }

    /// Bounding box of the transformed corners of `rect`.
    pub fn transform_rect(&self, rect: &Rect) -> Rect {
        let points = [
            self.transform_point(rect.x0, rect.y0),
            self.transform_point(rect.x1, rect.y0),
            self.transform_point(rect.x0, rect.y1),
            self.transform_point(rect.x1, rect.y1),
        ];

        // four points are never empty
        Rect::from_points(&points).unwrap_or(*rect)
    }
}

impl Default for Transform {
    #[inline]
    fn default() -> Transform {
        Transform::identity()
    }
}

/// Writes the transform as an SVG `matrix()` function.
impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args = [self.xx, self.yx, self.xy, self.yy, self.x0, self.y0]
            .iter()
            .map(|&v| fmt_number(v))
            .join(" ");

        write!(f, "matrix({})", args)
    }
}

impl Parse for Transform {
    fn parse<'i>(parser: &mut Parser<'i, '_>) -> Result<Transform, ParseError<'i>> {
        let loc = parser.current_source_location();

        let t = parse_transform_list(parser)?;

        if !t.is_invertible() {
            return Err(loc.new_custom_error(ValueErrorKind::Value(
                "invalid transformation matrix".to_string(),
            )));
        }

        Ok(t)
    }
}

impl Serialize for Transform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Transform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;

        Transform::parse_str(&s)
            .map_err(|e| serde::de::Error::custom(ValueErrorKind::from_parse_error(e)))
    }
}

fn parse_transform_list<'i>(parser: &mut Parser<'i, '_>) -> Result<Transform, ParseError<'i>> {
    let mut t = Transform::identity();

    loop {
        if parser.is_exhausted() {
            break;
        }

        t = parse_transform_command(parser)?.post_transform(&t);
        optional_comma(parser);
    }

    Ok(t)
}

fn parse_transform_command<'i>(parser: &mut Parser<'i, '_>) -> Result<Transform, ParseError<'i>> {
    let loc = parser.current_source_location();

    match parser.next()?.clone() {
        Token::Function(ref name) => parse_transform_function(name, parser),

        Token::Ident(ref name) => {
            parser.expect_parenthesis_block()?;
            parse_transform_function(name, parser)
        }

        tok => Err(loc.new_unexpected_token_error(tok)),
    }
}

fn parse_transform_function<'i>(
    name: &str,
    parser: &mut Parser<'i, '_>,
) -> Result<Transform, ParseError<'i>> {
    let loc = parser.current_source_location();

    match name {
        "matrix" => parse_matrix_args(parser),
        "translate" => parse_translate_args(parser),
        "scale" => parse_scale_args(parser),
        "rotate" => parse_rotate_args(parser),
        "skewX" => parse_skew_x_args(parser),
        "skewY" => parse_skew_y_args(parser),
        _ => Err(loc.new_custom_error(ValueErrorKind::parse_error(
            "expected matrix|translate|scale|rotate|skewX|skewY",
        ))),
    }
}

fn parse_matrix_args<'i>(parser: &mut Parser<'i, '_>) -> Result<Transform, ParseError<'i>> {
    parser.parse_nested_block(|p| {
        let mut v = [0.0; 6];

        for (i, slot) in v.iter_mut().enumerate() {
            if i != 0 {
                optional_comma(p);
            }
            *slot = f64::parse(p)?;
        }

        Ok(Transform::new_unchecked(v[0], v[1], v[2], v[3], v[4], v[5]))
    })
}

fn parse_translate_args<'i>(parser: &mut Parser<'i, '_>) -> Result<Transform, ParseError<'i>> {
    parser.parse_nested_block(|p| {
        let tx = f64::parse(p)?;

        let ty = p
            .try_parse(|p| {
                optional_comma(p);
                f64::parse(p)
            })
            .unwrap_or(0.0);

        Ok(Transform::new_translate(tx, ty))
    })
}

fn parse_scale_args<'i>(parser: &mut Parser<'i, '_>) -> Result<Transform, ParseError<'i>> {
    parser.parse_nested_block(|p| {
        let x = f64::parse(p)?;

        let y = p
            .try_parse(|p| {
                optional_comma(p);
                f64::parse(p)
            })
            .unwrap_or(x);

        Ok(Transform::new_scale(x, y))
    })
}

fn parse_rotate_args<'i>(parser: &mut Parser<'i, '_>) -> Result<Transform, ParseError<'i>> {
    parser.parse_nested_block(|p| {
        let angle = Angle::from_degrees(f64::parse(p)?);

        let (cx, cy) = p
            .try_parse(|p| -> Result<_, ParseError<'_>> {
                optional_comma(p);
                let cx = f64::parse(p)?;

                optional_comma(p);
                let cy = f64::parse(p)?;

                Ok((cx, cy))
            })
            .unwrap_or((0.0, 0.0));

        Ok(Transform::new_rotate_about(angle, cx, cy))
    })
}

fn parse_skew_x_args<'i>(parser: &mut Parser<'i, '_>) -> Result<Transform, ParseError<'i>> {
    parser.parse_nested_block(|p| {
        let angle = Angle::from_degrees(f64::parse(p)?);
        Ok(Transform::new_skew(angle, Angle::new(0.0)))
    })
}

fn parse_skew_y_args<'i>(parser: &mut Parser<'i, '_>) -> Result<Transform, ParseError<'i>> {
    parser.parse_nested_block(|p| {
        let angle = Angle::from_degrees(f64::parse(p)?);
        Ok(Transform::new_skew(Angle::new(0.0), angle))
    })
}

/// Placement of a component.
///
/// The parts are applied to the component's geometry from the innermost
/// outwards: `matrix`, skews, scale about `scale_center`, rotation about
/// `rotation_center`, and finally the translation.  Each part that is unset
/// or neutral is left out of the `transform` attribute.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransformConfig {
    pub translate: Option<(f64, f64)>,
    pub rotate: Option<Angle>,
    pub rotation_center: Option<(f64, f64)>,
    pub scale: Option<(f64, f64)>,
    pub scale_center: Option<(f64, f64)>,
    pub skew_x: Option<Angle>,
    pub skew_y: Option<Angle>,
    pub matrix: Option<Transform>,
}

fn check_pair(field: &'static str, pair: Option<(f64, f64)>) -> Result<(), ConfigError> {
    if let Some((a, b)) = pair {
        check_finite(field, a)?;
        check_finite(field, b)?;
    }

    Ok(())
}

fn check_angle(field: &'static str, angle: Option<Angle>) -> Result<(), ConfigError> {
    if let Some(a) = angle {
        check_finite(field, a.degrees())?;
    }

    Ok(())
}

fn check_scale(scale: Option<(f64, f64)>) -> Result<(), ConfigError> {
    check_pair("scale", scale)?;

    match scale {
        Some((sx, sy)) if sx == 0.0 || sy == 0.0 => {
            Err(ConfigError::value("scale", "scale factors must not be zero"))
        }
        _ => Ok(()),
    }
}

impl TransformConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_pair("translate", self.translate)?;
        check_angle("rotate", self.rotate)?;
        check_pair("rotation_center", self.rotation_center)?;
        check_scale(self.scale)?;
        check_pair("scale_center", self.scale_center)?;
        check_angle("skew_x", self.skew_x)?;
        check_angle("skew_y", self.skew_y)?;

        if let Some(ref m) = self.matrix {
            if !m.is_invertible() {
                return Err(ConfigError::value("matrix", "invalid transformation matrix"));
            }
        }

        Ok(())
    }

    /// Whether any part of the transform has an effect.
    pub fn has_transform(&self) -> bool {
        self.translation().is_some()
            || self.rotation().is_some()
            || self.scaling().is_some()
            || self.skew_x.map_or(false, |a| !a.is_zero())
            || self.skew_y.map_or(false, |a| !a.is_zero())
            || self.matrix.map_or(false, |m| !m.is_identity())
    }

    /// Adds `(dx, dy)` to the current translation.
    ///
    /// On error the transform is left as it was.
    pub fn translate(&mut self, dx: f64, dy: f64) -> Result<(), ConfigError> {
        let (tx, ty) = self.translate.unwrap_or((0.0, 0.0));
        let translate = (tx + dx, ty + dy);

        check_pair("translate", Some(translate))?;
        self.translate = Some(translate);

        Ok(())
    }

    /// Adds `angle` to the current rotation, which now happens about `center`.
    pub fn rotate(&mut self, angle: Angle, center: (f64, f64)) -> Result<(), ConfigError> {
        check_angle("rotate", Some(angle))?;
        check_pair("rotation_center", Some(center))?;

        let current = self.rotate.unwrap_or_else(|| Angle::from_degrees(0.0));
        self.rotate = Some(current + angle);
        self.rotation_center = Some(center);

        Ok(())
    }

    /// Multiplies the current scale, which now happens about `center`.
    pub fn scale(&mut self, sx: f64, sy: f64, center: (f64, f64)) -> Result<(), ConfigError> {
        let (cur_x, cur_y) = self.scale_factors();
        let scale = (cur_x * sx, cur_y * sy);

        check_scale(Some(scale))?;
        check_pair("scale_center", Some(center))?;

        self.scale = Some(scale);
        self.scale_center = Some(center);

        Ok(())
    }

    /// Adds `angle` to the horizontal skew.
    pub fn skew_x(&mut self, angle: Angle) -> Result<(), ConfigError> {
        check_angle("skew_x", Some(angle))?;

        let current = self.skew_x.unwrap_or_else(|| Angle::from_degrees(0.0));
        self.skew_x = Some(current + angle);

        Ok(())
    }

    /// Adds `angle` to the vertical skew.
    pub fn skew_y(&mut self, angle: Angle) -> Result<(), ConfigError> {
        check_angle("skew_y", Some(angle))?;

        let current = self.skew_y.unwrap_or_else(|| Angle::from_degrees(0.0));
        self.skew_y = Some(current + angle);

        Ok(())
    }

    pub fn scale_factors(&self) -> (f64, f64) {
        self.scale.unwrap_or((1.0, 1.0))
    }

    pub fn reset(&mut self) {
        *self = TransformConfig::default();
    }

    fn translation(&self) -> Option<(f64, f64)> {
        self.translate.filter(|&(tx, ty)| tx != 0.0 || ty != 0.0)
    }

    fn rotation(&self) -> Option<Angle> {
        self.rotate.filter(|a| !a.is_zero())
    }

    fn scaling(&self) -> Option<(f64, f64)> {
        self.scale.filter(|&(sx, sy)| sx != 1.0 || sy != 1.0)
    }

    /// The affine matrix equivalent to the `transform` attribute.
    pub fn to_matrix(&self) -> Transform {
        let mut t = self.matrix.unwrap_or_default();

        if let Some(a) = self.skew_y.filter(|a| !a.is_zero()) {
            t = t.post_transform(&Transform::new_skew(Angle::new(0.0), a));
        }

        if let Some(a) = self.skew_x.filter(|a| !a.is_zero()) {
            t = t.post_transform(&Transform::new_skew(a, Angle::new(0.0)));
        }

        if let Some((sx, sy)) = self.scaling() {
            let (cx, cy) = self.scale_center.unwrap_or((0.0, 0.0));
            t = t.post_transform(&Transform::new_scale_about(sx, sy, cx, cy));
        }

        if let Some(a) = self.rotation() {
            let (cx, cy) = self.rotation_center.unwrap_or((0.0, 0.0));
            t = t.post_transform(&Transform::new_rotate_about(a, cx, cy));
        }

        if let Some((tx, ty)) = self.translation() {
            t = t.post_transform(&Transform::new_translate(tx, ty));
        }

        t
    }

    /// The value of the `transform` attribute, or `None` for no transform.
    pub fn to_svg_value(&self) -> Option<String> {
        let mut parts = Vec::new();

        if let Some((tx, ty)) = self.translation() {
            parts.push(format!("translate({}, {})", fmt_number(tx), fmt_number(ty)));
        }

        if let Some(a) = self.rotation() {
            match self.rotation_center {
                Some((cx, cy)) => parts.push(format!(
                    "rotate({}, {}, {})",
                    a,
                    fmt_number(cx),
                    fmt_number(cy)
                )),
                None => parts.push(format!("rotate({})", a)),
            }
        }

        if let Some((sx, sy)) = self.scaling() {
            let scale = if sx == sy {
                format!("scale({})", fmt_number(sx))
            } else {
                format!("scale({}, {})", fmt_number(sx), fmt_number(sy))
            };

            match self.scale_center.filter(|&(cx, cy)| cx != 0.0 || cy != 0.0) {
                Some((cx, cy)) => parts.push(format!(
                    "translate({}, {}) {} translate({}, {})",
                    fmt_number(cx),
                    fmt_number(cy),
                    scale,
                    fmt_number(-cx),
                    fmt_number(-cy)
                )),
                None => parts.push(scale),
            }
        }

        if let Some(a) = self.skew_x.filter(|a| !a.is_zero()) {
            parts.push(format!("skewX({})", a));
        }

        if let Some(a) = self.skew_y.filter(|a| !a.is_zero()) {
            parts.push(format!("skewY({})", a));
        }

        if let Some(m) = self.matrix.filter(|m| !m.is_identity()) {
            parts.push(m.to_string());
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

impl ToAttributes for TransformConfig {
    fn to_attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();

        if let Some(v) = self.to_svg_value() {
            attrs.insert("transform", v);
        }

        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::ApproxEq;
    use proptest::prelude::*;
    use std::f64;

    fn rotation_transform(deg: f64, tx: f64, ty: f64) -> Transform {
        Transform::new_rotate_about(Angle::from_degrees(deg), tx, ty)
    }

    fn parse_transform(s: &str) -> Result<Transform, ParseError<'_>> {
        Transform::parse_str(s)
    }

    fn transform_eq(t1: &Transform, t2: &Transform) -> bool {
        let epsilon = 1e-9;

        t1.xx.approx_eq(t2.xx, (epsilon, 1))
            && t1.yx.approx_eq(t2.yx, (epsilon, 1))
            && t1.xy.approx_eq(t2.xy, (epsilon, 1))
            && t1.yy.approx_eq(t2.yy, (epsilon, 1))
            && t1.x0.approx_eq(t2.x0, (epsilon, 1))
            && t1.y0.approx_eq(t2.y0, (epsilon, 1))
    }

    fn assert_transform_eq(t1: &Transform, t2: &Transform) {
        assert!(transform_eq(t1, t2), "{:?} != {:?}", t1, t2);
    }

    #[test]
    fn test_multiply() {
        let t1 = Transform::identity();
        let t2 = Transform::new_unchecked(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_transform_eq(&Transform::multiply(&t1, &t2), &t2);
        assert_transform_eq(&Transform::multiply(&t2, &t1), &t2);

        let t1 = Transform::new_unchecked(0.5, 0.0, 0.0, 0.5, 10.0, 10.0);
        let t2 = Transform::new_unchecked(1.0, 0.0, 0.0, 1.0, -10.0, -10.0);
        let r1 = Transform::new_unchecked(0.5, 0.0, 0.0, 0.5, 0.0, 0.0);
        let r2 = Transform::new_unchecked(0.5, 0.0, 0.0, 0.5, 5.0, 5.0);
        assert_transform_eq(&Transform::multiply(&t1, &t2), &r1);
        assert_transform_eq(&Transform::multiply(&t2, &t1), &r2);
    }

    #[test]
    fn test_invert() {
        let t = Transform::new_unchecked(2.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert!(!t.is_invertible());
        assert!(t.invert().is_none());

        let t = Transform::new_unchecked(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let i = t.invert().unwrap();
        assert_transform_eq(&t.pre_transform(&i), &Transform::identity());
        assert_transform_eq(&t.post_transform(&i), &Transform::identity());
    }

    #[test]
    fn transforms_points_and_rects() {
        let t = Transform::new_translate(10.0, 10.0);
        assert_eq!((11.0, 11.0), t.transform_point(1.0, 1.0));

        let t = Transform::new_scale_about(2.0, 2.0, 5.0, 5.0);
        assert_eq!(t.transform_point(5.0, 5.0), (5.0, 5.0));
        assert!(t
            .transform_rect(&Rect::new(0.0, 0.0, 10.0, 10.0))
            .approx_eq(&Rect::new(-5.0, -5.0, 15.0, 15.0)));

        let t = rotation_transform(90.0, 0.0, 0.0);
        assert!(t
            .transform_rect(&Rect::new(0.0, 0.0, 2.0, 1.0))
            .approx_eq(&Rect::new(-1.0, 0.0, 0.0, 2.0)));
    }

    #[test]
    fn parses_transform_list() {
        let t = Transform::new_unchecked(1.0, 0.0, 0.0, 1.0, 20.0, 30.0);
        let s = Transform::new_unchecked(10.0, 0.0, 0.0, 10.0, 0.0, 0.0);
        let r = rotation_transform(30.0, 10.0, 10.0);

        assert_transform_eq(
            &parse_transform("scale(10)rotate(30, 10, 10)").unwrap(),
            &Transform::multiply(&r, &s),
        );

        let a = Transform::multiply(&s, &t);
        assert_transform_eq(
            &parse_transform("translate(20, 30), scale (10) rotate (30 10 10)").unwrap(),
            &Transform::multiply(&r, &a),
        );

        assert_transform_eq(
            &parse_transform("matrix(1,2.25,-3.25e2,4 5 6)").unwrap(),
            &Transform::new_unchecked(1.0, 2.25, -325.0, 4.0, 5.0, 6.0),
        );

        assert_transform_eq(&parse_transform("").unwrap(), &Transform::identity());
    }

    #[test]
    fn syntax_error_yields_parse_error() {
        for s in [
            "foo",
            "matrix (1 2 3 4 5)",
            "translate(1 2 3 4 5)",
            "translate (1,)",
            "skewX (1,2)",
            "skewY ()",
            "skewY",
        ] {
            assert!(parse_transform(s).is_err(), "{} should not parse", s);
        }
    }

    #[test]
    fn invalid_transform_yields_value_error() {
        assert!(parse_transform("matrix (0 0 0 0 0 0)").is_err());
        assert!(parse_transform("scale (0), translate (10, 10)").is_err());
    }

    #[test]
    fn matrix_display_parses_back() {
        let t = Transform::new_unchecked(1.0, 2.0, 3.0, 4.0, 5.5, -6.0);
        assert_eq!(t.to_string(), "matrix(1 2 3 4 5.5 -6)");
        assert_eq!(Transform::parse_str(&t.to_string()).unwrap(), t);
    }

    #[test]
    fn empty_config_has_no_transform() {
        let c = TransformConfig::default();
        assert!(!c.has_transform());
        assert_eq!(c.to_svg_value(), None);
        assert!(c.to_attributes().is_empty());
        assert!(c.to_matrix().is_identity());
    }

    #[test]
    fn neutral_parts_are_omitted() {
        let c = TransformConfig {
            translate: Some((0.0, 0.0)),
            rotate: Some(Angle::from_degrees(360.0)),
            scale: Some((1.0, 1.0)),
            ..Default::default()
        };
        assert!(!c.has_transform());
        assert_eq!(c.to_svg_value(), None);
    }

    #[test]
    fn translations_accumulate() {
        let mut c = TransformConfig::default();
        c.translate(50.0, 30.0).unwrap();
        c.translate(-10.0, 5.0).unwrap();
        assert_eq!(c.to_svg_value().unwrap(), "translate(40, 35)");
    }

    #[test]
    fn writes_parts_in_order() {
        let mut c = TransformConfig::default();
        c.rotate(Angle::from_degrees(45.0), (40.0, 20.0)).unwrap();
        c.scale(1.5, 1.5, (40.0, 20.0)).unwrap();
        c.translate(10.0, 0.0).unwrap();
        c.skew_x = Some(Angle::from_degrees(10.0));

        assert_eq!(
            c.to_svg_value().unwrap(),
            "translate(10, 0) rotate(45, 40, 20) \
             translate(40, 20) scale(1.5) translate(-40, -20) skewX(10)"
        );
    }

    #[test]
    fn matrix_matches_attribute() {
        let mut c = TransformConfig::default();
        c.translate(10.0, 20.0).unwrap();
        c.rotate(Angle::from_degrees(30.0), (5.0, 5.0)).unwrap();
        c.scale(2.0, 3.0, (1.0, 2.0)).unwrap();
        c.skew_y = Some(Angle::from_degrees(15.0));

        let attr = c.to_svg_value().unwrap();
        assert_transform_eq(&c.to_matrix(), &Transform::parse_str(&attr).unwrap());
    }

    #[test]
    fn scales_multiply() {
        let mut c = TransformConfig::default();
        c.scale(2.0, 2.0, (0.0, 0.0)).unwrap();
        c.scale(0.5, 3.0, (0.0, 0.0)).unwrap();
        assert_eq!(c.scale_factors(), (1.0, 6.0));
        assert_eq!(c.to_svg_value().unwrap(), "scale(1, 6)");
    }

    #[test]
    fn rejects_invalid_steps_and_keeps_state() {
        let mut c = TransformConfig::default();
        c.translate(5.0, 5.0).unwrap();
        c.scale(2.0, 2.0, (1.0, 1.0)).unwrap();
        let before = c;

        assert_eq!(c.translate(f64::NAN, 0.0).unwrap_err().field, "translate");
        assert_eq!(c.translate(0.0, f64::INFINITY).unwrap_err().field, "translate");
        assert_eq!(
            c.rotate(Angle::from_degrees(f64::INFINITY), (0.0, 0.0))
                .unwrap_err()
                .field,
            "rotate"
        );
        assert_eq!(
            c.rotate(Angle::from_degrees(10.0), (f64::NAN, 0.0))
                .unwrap_err()
                .field,
            "rotation_center"
        );
        assert_eq!(c.scale(0.0, 1.0, (0.0, 0.0)).unwrap_err().field, "scale");
        assert_eq!(c.scale(f64::INFINITY, 1.0, (0.0, 0.0)).unwrap_err().field, "scale");
        assert_eq!(
            c.scale(1.0, 1.0, (0.0, f64::INFINITY)).unwrap_err().field,
            "scale_center"
        );
        assert_eq!(
            c.skew_x(Angle::from_degrees(f64::NAN)).unwrap_err().field,
            "skew_x"
        );
        assert_eq!(
            c.skew_y(Angle::from_degrees(f64::NEG_INFINITY)).unwrap_err().field,
            "skew_y"
        );

        assert_eq!(c, before);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn skews_accumulate() {
        let mut c = TransformConfig::default();
        c.skew_x(Angle::from_degrees(10.0)).unwrap();
        c.skew_x(Angle::from_degrees(5.0)).unwrap();
        c.skew_y(Angle::from_degrees(-5.0)).unwrap();
        assert_eq!(c.to_svg_value().unwrap(), "skewX(15) skewY(355)");
    }

    #[test]
    fn validates() {
        let mut c = TransformConfig::default();
        assert!(c.validate().is_ok());

        c.scale = Some((0.0, 1.0));
        assert_eq!(c.validate().unwrap_err().field, "scale");

        c.scale = None;
        c.translate = Some((f64::NAN, 0.0));
        assert_eq!(c.validate().unwrap_err().field, "translate");

        c.translate = None;
        c.rotate = Some(Angle::from_degrees(f64::NAN));
        assert_eq!(c.validate().unwrap_err().field, "rotate");
    }

    #[test]
    fn deserializes_from_json() {
        let c: TransformConfig = serde_json::from_str(
            r#"{ "translate": [5, 6], "rotate": "90deg", "matrix": "skewX(10)" }"#,
        )
        .unwrap();

        assert_eq!(c.translate, Some((5.0, 6.0)));
        assert_eq!(c.rotate, Some(Angle::from_degrees(90.0)));
        assert!(c.matrix.is_some());

        assert!(serde_json::from_str::<TransformConfig>(r#"{ "shear": 1 }"#).is_err());
    }

    proptest! {
        #[test]
        fn config_matrix_is_invertible(
            tx in -1000.0..1000.0f64,
            ty in -1000.0..1000.0f64,
            deg in -720.0..720.0f64,
            s in 0.01..100.0f64,
        ) {
            let mut c = TransformConfig::default();
            c.translate(tx, ty).unwrap();
            c.rotate(Angle::from_degrees(deg), (tx, ty)).unwrap();
            c.scale(s, s, (1.0, 1.0)).unwrap();

            let m = c.to_matrix();
            let inv = m.invert();
            prop_assert!(inv.is_some());

            let (x, y) = m.transform_point(3.0, 4.0);
            let (bx, by) = inv.unwrap().transform_point(x, y);
            prop_assert!((bx - 3.0).abs() < 1e-6 && (by - 4.0).abs() < 1e-6);
        }
    }
}
