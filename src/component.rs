//! The interface shared by everything that can be placed on a canvas.

use crate::angle::Angle;
use crate::error::{ComponentError, ConfigError};
use crate::rect::Rect;
use crate::transform::TransformConfig;

/// An SVG element with its own geometry and placement.
///
/// Implementors provide their geometry through [`central_point`] and
/// [`bounding_box`]; moving, rotating and scaling are recorded in the component's
/// [`TransformConfig`] and never modify the geometry itself.
///
/// The chaining methods (`move_by`, `rotate`, ...) consume the component and
/// return it again, so that it can be built in one expression with `?`.
/// A step that would leave an invalid transform, or that needs a central
/// point the component does not have, is an error.  A component that
/// was already added to a canvas as a `Box<dyn Component>` can still be
/// changed through [`transform_mut`] and [`restrict_size`].
///
/// [`central_point`]: Component::central_point
/// [`bounding_box`]: Component::bounding_box
/// [`transform_mut`]: Component::transform_mut
/// [`restrict_size`]: Component::restrict_size
pub trait Component {
    /// Element name, for messages.
    fn name(&self) -> &'static str;

    /// The central point of the untransformed geometry.
    fn central_point(&self) -> Result<(f64, f64), ComponentError>;

    /// Bounding box of the untransformed geometry.
    fn bounding_box(&self) -> Result<Rect, ComponentError>;

    fn transform(&self) -> &TransformConfig;

    fn transform_mut(&mut self) -> &mut TransformConfig;

    /// The complete SVG element for this component.
    fn to_svg_element(&self) -> String;

    /// Width and height of the untransformed geometry.
    fn size(&self) -> Result<(f64, f64), ComponentError> {
        self.bounding_box().map(|r| r.size())
    }

    fn has_transform(&self) -> bool {
        self.transform().has_transform()
    }

    /// Scales the component down, about its central point, until it fits in
    /// `max_width` × `max_height`.
    ///
    /// The current scale is taken into account.  Components that already
    /// fit are not changed, and nothing is ever scaled up.
    fn restrict_size(&mut self, max_width: f64, max_height: f64) -> Result<(), ComponentError> {
        let (w, h) = self.size()?;

        check_limit("max_width", max_width)?;
        check_limit("max_height", max_height)?;
        let (sx, sy) = self.transform().scale_factors();

        let factor = fit_factor(w * sx.abs(), h * sy.abs(), max_width, max_height);

        if factor < 1.0 {
            let center = self.central_point()?;
            svg_log!(
                "restricting {} to {}x{}: scale by {}",
                self.name(),
                max_width,
                max_height,
                factor
            );
            self.transform_mut().scale(factor, factor, center)?;
        }

        Ok(())
    }

    /// Where the component ends up after its transform, if its size is known.
    fn transformed_bounding_box(&self) -> Result<Rect, ComponentError> {
        let rect = self.bounding_box()?;

        Ok(self.transform().to_matrix().transform_rect(&rect))
    }

    /// Adds `(dx, dy)` to the component's translation.
    fn move_by(mut self, dx: f64, dy: f64) -> Result<Self, ComponentError>
    where
        Self: Sized,
    {
        self.transform_mut().translate(dx, dy)?;
        Ok(self)
    }

    /// Rotates the component by `degrees` about its central point.
    fn rotate(mut self, degrees: f64) -> Result<Self, ComponentError>
    where
        Self: Sized,
    {
        let center = self.central_point()?;
        self.transform_mut().rotate(Angle::from_degrees(degrees), center)?;
        Ok(self)
    }

    /// Scales the component uniformly about its central point.
    fn scale(self, factor: f64) -> Result<Self, ComponentError>
    where
        Self: Sized,
    {
        self.scale_xy(factor, factor)
    }

    fn scale_xy(mut self, sx: f64, sy: f64) -> Result<Self, ComponentError>
    where
        Self: Sized,
    {
        let center = self.central_point()?;
        self.transform_mut().scale(sx, sy, center)?;
        Ok(self)
    }

    fn skew_x(mut self, degrees: f64) -> Result<Self, ComponentError>
    where
        Self: Sized,
    {
        self.transform_mut().skew_x(Angle::from_degrees(degrees))?;
        Ok(self)
    }

    fn skew_y(mut self, degrees: f64) -> Result<Self, ComponentError>
    where
        Self: Sized,
    {
        self.transform_mut().skew_y(Angle::from_degrees(degrees))?;
        Ok(self)
    }

    #[must_use]
    fn reset_transform(mut self) -> Self
    where
        Self: Sized,
    {
        self.transform_mut().reset();
        self
    }
}

/// Uniform scale factor that makes a `width` × `height` box fit in
/// `max_width` × `max_height`; 1 if it already fits.
pub fn fit_factor(width: f64, height: f64, max_width: f64, max_height: f64) -> f64 {
    let width_scale = if width > max_width {
        max_width / width
    } else {
        1.0
    };

    let height_scale = if height > max_height {
        max_height / height
    } else {
        1.0
    };

    width_scale.min(height_scale)
}

fn check_limit(field: &'static str, v: f64) -> Result<(), ConfigError> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::value(field, "must be a positive number"))
    }
}

/// Center of the box at `(x, y)` with the given size.
pub(crate) fn box_center(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    (x + width / 2.0, y + height / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_factor_only_shrinks() {
        assert_eq!(fit_factor(100.0, 50.0, 200.0, 200.0), 1.0);
        assert_eq!(fit_factor(200.0, 100.0, 100.0, 100.0), 0.5);
        assert_eq!(fit_factor(200.0, 100.0, 100.0, 20.0), 0.2);
        assert_eq!(fit_factor(100.0, 400.0, 50.0, 100.0), 0.25);
    }

    #[test]
    fn box_center_is_midpoint() {
        assert_eq!(box_center(10.0, 20.0, 100.0, 50.0), (60.0, 45.0));
    }
}
