// SPDX: CC0-1.0

pub mod axis;
pub mod calc;
pub mod color;
pub mod coord;
pub mod curve;
pub mod eval;
pub mod lex;
pub mod parse;
pub mod range;
pub mod render;
pub mod session;
pub mod settings;
pub mod shell;
pub mod stdlib;
pub mod svg;

use core::{fmt, num::ParseFloatError, str::FromStr};

pub use calc::Calculator;
pub use color::{color_for, Color, ColorIndex};
pub use coord::{ConfigErr, Viewport};
pub use curve::{CurveStats, ExpressionEvaluator, PlotRequest};
pub use range::AxisRange;
pub use render::Renderer;
pub use session::Session;
pub use settings::Settings;

pub type Number = f64;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// A point in calculator space, where expressions live.
pub type CalcPoint = Point<Number>;

/// A point in pixel space, relative to the canvas' bottom-left corner.
pub type ScreenPoint = Point<Number>;

impl fmt::Display for Point<Number> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParsePointErr {
    #[error("expected two coordinates separated by a comma")]
    Arity,
    #[error("invalid coordinate: {0}")]
    Coord(#[from] ParseFloatError),
}

/// Accepts `x,y` with optional surrounding parentheses and whitespace.
impl FromStr for Point<Number> {
    type Err = ParsePointErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_prefix('(')
            .and_then(|inner| inner.strip_suffix(')'))
            .unwrap_or(s);
        let mut parts = s.split(',');
        let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ParsePointErr::Arity);
        };
        Ok(Self {
            x: x.trim().parse()?,
            y: y.trim().parse()?,
        })
    }
}
