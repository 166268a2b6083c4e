// SPDX: CC0-1.0

use crate::{
    color::Color,
    coord::{ConfigErr, Viewport},
    curve::sample_count,
    range::{x_range, y_range},
    Number, Point,
};
use core::{fmt, num::NonZeroU32};

const DEFAULT_MAX_POINTS: u32 = 1_000_000;

/// Everything about a drawing session that isn't the viewport.
///
/// Only valid settings can be built: `with_step` checks its argument.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    width: NonZeroU32,
    height: NonZeroU32,
    tick_half_len: Number,
    x_label_offset: Point<Number>,
    y_label_offset: Point<Number>,
    step: Number,
    axis_color: Color,
    max_points: NonZeroU32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: NonZeroU32::new(800).unwrap_or(NonZeroU32::MIN),
            height: NonZeroU32::new(600).unwrap_or(NonZeroU32::MIN),
            tick_half_len: 3.0,
            x_label_offset: Point::new(0.0, -15.0),
            y_label_offset: Point::new(-15.0, -3.0),
            step: 0.1,
            axis_color: Color::Black,
            max_points: NonZeroU32::new(DEFAULT_MAX_POINTS).unwrap_or(NonZeroU32::MAX),
        }
    }
}

impl Settings {
    /// Distance between consecutive curve samples, in calculator units.
    pub fn with_step(self, step: Number) -> Result<Self, ConfigErr> {
        // also catches NaN
        if !(step.is_finite() && step > 0.0) {
            return Err(ConfigErr::Step(step));
        }
        Ok(Self { step, ..self })
    }

    /// Most ticks one axis may have, and most samples one curve may take.
    pub fn with_max_points(self, max_points: NonZeroU32) -> Self {
        Self { max_points, ..self }
    }

    #[inline]
    pub const fn width(&self) -> NonZeroU32 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> NonZeroU32 {
        self.height
    }

    #[inline]
    pub const fn tick_half_len(&self) -> Number {
        self.tick_half_len
    }

    #[inline]
    pub const fn x_label_offset(&self) -> Point<Number> {
        self.x_label_offset
    }

    #[inline]
    pub const fn y_label_offset(&self) -> Point<Number> {
        self.y_label_offset
    }

    #[inline]
    pub const fn step(&self) -> Number {
        self.step
    }

    #[inline]
    pub const fn axis_color(&self) -> Color {
        self.axis_color
    }

    #[inline]
    pub fn canvas(&self) -> Point<Number> {
        Point::new(
            Number::from(self.width.get()),
            Number::from(self.height.get()),
        )
    }

    /// Fails if drawing `points` ticks or samples would exceed the limit.
    pub fn check_points(&self, points: Number) -> Result<(), ConfigErr> {
        let max = self.max_points.get();
        if points <= Number::from(max) {
            Ok(())
        } else {
            Err(ConfigErr::TooDense { points, max })
        }
    }

    /// Fails if `viewport` puts more ticks on an axis, or more samples on a
    /// curve, than these settings allow.
    pub fn check_viewport(&self, viewport: &Viewport) -> Result<(), ConfigErr> {
        let canvas = self.canvas();
        let (xs, ys) = (x_range(viewport, canvas.x), y_range(viewport, canvas.y));
        self.check_points(xs.tick_count() as Number)?;
        self.check_points(ys.tick_count() as Number)?;
        self.check_points(sample_count(xs, self.step))
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("canvas", &format_args!("{}x{}", self.width, self.height))
            .field("step", &self.step)
            .finish()
    }
}
