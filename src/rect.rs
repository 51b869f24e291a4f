//! Axis-aligned rectangles for bounding boxes.

use float_cmp::approx_eq;

// Use our own min() and max() that are acceptable for floating point

fn min(x: f64, y: f64) -> f64 {
    if x <= y {
        x
    } else {
        y
    }
}

fn max(x: f64, y: f64) -> f64 {
    if x >= y {
        x
    } else {
        y
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    #[inline]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    #[inline]
    pub fn from_size(w: f64, h: f64) -> Self {
        Self::new(0.0, 0.0, w, h)
    }

    /// Smallest rectangle that contains all the points, or `None` for no points.
    pub fn from_points(points: &[(f64, f64)]) -> Option<Self> {
        let (&(x, y), rest) = points.split_first()?;

        Some(rest.iter().fold(Rect::new(x, y, x, y), |r, &(x, y)| {
            Rect::new(min(r.x0, x), min(r.y0, y), max(r.x1, x), max(r.y1, y))
        }))
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    #[inline]
    pub fn size(&self) -> (f64, f64) {
        (self.width(), self.height())
    }

    #[inline]
    pub fn center(&self) -> (f64, f64) {
        ((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        approx_eq!(f64, self.width(), 0.0) || approx_eq!(f64, self.height(), 0.0)
    }

    #[inline]
    pub fn translate(&self, by: (f64, f64)) -> Self {
        Self {
            x0: self.x0 + by.0,
            y0: self.y0 + by.1,
            x1: self.x1 + by.0,
            y1: self.y1 + by.1,
        }
    }

    #[inline]
    pub fn scale(self, x: f64, y: f64) -> Self {
        Self {
            x0: self.x0 * x,
            y0: self.y0 * y,
            x1: self.x1 * x,
            y1: self.y1 * y,
        }
    }

    #[inline]
    pub fn union(&self, rect: &Self) -> Self {
        Self {
            x0: min(self.x0, rect.x0),
            y0: min(self.y0, rect.y0),
            x1: max(self.x1, rect.x1),
            y1: max(self.y1, rect.y1),
        }
    }

    pub fn approx_eq(&self, other: &Self) -> bool {
        approx_eq!(f64, self.x0, other.x0, epsilon = 0.0001)
            && approx_eq!(f64, self.y0, other.y0, epsilon = 0.0001)
            && approx_eq!(f64, self.x1, other.x1, epsilon = 0.0001)
            && approx_eq!(f64, self.y1, other.y1, epsilon = 0.0001)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_size_and_center() {
        let r = Rect::new(10.0, 20.0, 110.0, 70.0);
        assert_eq!(r.size(), (100.0, 50.0));
        assert_eq!(r.center(), (60.0, 45.0));
        assert!(!r.is_empty());
        assert!(Rect::from_size(0.0, 5.0).is_empty());
    }

    #[test]
    fn bounds_points() {
        assert_eq!(Rect::from_points(&[]), None);
        assert_eq!(
            Rect::from_points(&[(0.0, 5.0), (-2.0, 1.0), (3.0, 4.0)]),
            Some(Rect::new(-2.0, 1.0, 3.0, 5.0))
        );
    }

    #[test]
    fn unions_and_translates() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let b = Rect::new(2.0, -1.0, 3.0, 0.5);
        assert_eq!(a.union(&b), Rect::new(0.0, -1.0, 3.0, 1.0));
        assert_eq!(a.translate((1.0, 2.0)), Rect::new(1.0, 2.0, 2.0, 3.0));
        assert!(a.scale(2.0, 3.0).approx_eq(&Rect::new(0.0, 0.0, 2.0, 3.0)));
    }
}
