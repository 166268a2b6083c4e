// SPDX: CC0-1.0

use crate::{coord::Viewport, Number};
use core::{fmt, ops::RangeInclusive};

/// Inclusive integer bounds of the calculator coordinates visible along one
/// axis. Always covers the whole canvas, possibly overshooting each edge by
/// less than one unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisRange {
    pub min: i64,
    pub max: i64,
}

impl AxisRange {
    /// Range covering pixels `0..=extent` when calculator zero sits at pixel
    /// `origin`.
    fn covering(origin: Number, extent: Number, ratio: Number) -> Self {
        let lo = (0.0 - origin) / ratio;
        let hi = (extent - origin) / ratio;
        Self {
            // saturating casts, so absurd viewports clamp instead of wrapping
            min: lo.floor() as i64,
            max: hi.ceil() as i64,
        }
    }

    #[inline]
    pub fn ticks(&self) -> RangeInclusive<i64> {
        self.min..=self.max
    }

    /// Number of integers in the range, saturating at `u64::MAX`.
    #[inline]
    pub const fn tick_count(&self) -> u64 {
        self.max.abs_diff(self.min).saturating_add(1)
    }
}

impl fmt::Display for AxisRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

pub fn x_range(viewport: &Viewport, width: Number) -> AxisRange {
    AxisRange::covering(viewport.origin().x, width, viewport.ratio())
}

pub fn y_range(viewport: &Viewport, height: Number) -> AxisRange {
    AxisRange::covering(viewport.origin().y, height, viewport.ratio())
}
