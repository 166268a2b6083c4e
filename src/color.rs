// SPDX: CC0-1.0

use crate::coord::ConfigErr;
use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Blue,
}

impl Color {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub const PLOT_COLORS: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

/// Ordinal of a plot within its session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ColorIndex(usize);

impl ColorIndex {
    #[inline]
    pub const fn new(idx: usize) -> Self {
        Self(idx)
    }

    #[inline]
    pub const fn get(&self) -> usize {
        self.0
    }

    #[inline]
    pub const fn next(&self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl TryFrom<i64> for ColorIndex {
    type Error = ConfigErr;

    fn try_from(idx: i64) -> Result<Self, Self::Error> {
        usize::try_from(idx)
            .map(Self)
            .map_err(|_| ConfigErr::NegativeIndex(idx))
    }
}

impl fmt::Display for ColorIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub const fn color_for(idx: ColorIndex) -> Color {
    PLOT_COLORS[idx.get() % PLOT_COLORS.len()]
}
