// SPDX: CC0-1.0

//! Mapping between calculator space and screen space.
//!
//! A [`Viewport`] is an affine transform: `origin` is the pixel where the
//! calculator origin lands and `ratio` is how many pixels one calculator unit
//! spans. Both axes grow in the same direction in both spaces.

use crate::{CalcPoint, Number, Point, ScreenPoint};
use core::fmt;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigErr {
    #[error("ratio must be a positive number, found {0}")]
    Ratio(Number),
    #[error("origin must be finite, found {0}")]
    Origin(Point<Number>),
    #[error("step must be a positive number, found {0}")]
    Step(Number),
    #[error("plot index must not be negative, found {0}")]
    NegativeIndex(i64),
    #[error("viewport needs {points} ticks or samples along one axis, at most {max} are drawn")]
    TooDense { points: Number, max: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    origin: ScreenPoint,
    ratio: Number,
}

impl Viewport {
    /// Any positive ratio is accepted here. A ratio small enough to put
    /// millions of units on the canvas is rejected later, against
    /// [`Settings::check_points`](crate::Settings::check_points), when a
    /// session is built.
    pub fn new(origin: ScreenPoint, ratio: Number) -> Result<Self, ConfigErr> {
        if !(origin.x.is_finite() && origin.y.is_finite()) {
            return Err(ConfigErr::Origin(origin));
        }
        // also catches NaN
        if !(ratio.is_finite() && ratio > 0.0) {
            return Err(ConfigErr::Ratio(ratio));
        }
        Ok(Self { origin, ratio })
    }

    #[inline]
    pub const fn origin(&self) -> ScreenPoint {
        self.origin
    }

    #[inline]
    pub const fn ratio(&self) -> Number {
        self.ratio
    }

    #[inline]
    pub fn to_screen(&self, p: CalcPoint) -> ScreenPoint {
        Point {
            x: self.origin.x + self.ratio * p.x,
            y: self.origin.y + self.ratio * p.y,
        }
    }

    #[inline]
    pub fn to_calc(&self, p: ScreenPoint) -> CalcPoint {
        Point {
            x: (p.x - self.origin.x) / self.ratio,
            y: (p.y - self.origin.y) / self.ratio,
        }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Viewport")
            .field("origin", &format_args!("{}", self.origin))
            .field("ratio", &self.ratio)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn viewport() -> Viewport {
        Viewport::new(Point::new(400.0, 300.0), 50.0).unwrap()
    }

    #[test]
    fn origin_maps_to_origin_pixel() {
        assert_eq!(viewport().to_screen(Point::new(0.0, 0.0)), Point::new(400.0, 300.0));
    }

    #[test]
    fn one_unit_is_ratio_pixels() {
        let v = viewport();
        assert_eq!(v.to_screen(Point::new(1.0, -2.0)), Point::new(450.0, 200.0));
    }

    #[test]
    fn to_calc_inverts_to_screen() {
        let v = Viewport::new(Point::new(13.0, -7.5), 3.3).unwrap();
        let p = Point::new(-2.71, 9.0);
        let back = v.to_calc(v.to_screen(p));
        assert_relative_eq!(back.x, p.x, epsilon = 1e-12);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-12);
    }

    #[test]
    fn rejects_non_positive_ratio() {
        for ratio in [0.0, -1.0, Number::NAN, Number::INFINITY] {
            assert!(matches!(
                Viewport::new(Point::new(0.0, 0.0), ratio),
                Err(ConfigErr::Ratio(_))
            ));
        }
    }

    #[test]
    fn rejects_non_finite_origin() {
        assert!(matches!(
            Viewport::new(Point::new(Number::NAN, 0.0), 1.0),
            Err(ConfigErr::Origin(_))
        ));
    }
}
