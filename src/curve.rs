// SPDX: CC0-1.0

use crate::{
    color::{color_for, ColorIndex},
    coord::{ConfigErr, Viewport},
    range::{x_range, AxisRange},
    render::Renderer,
    settings::Settings,
    Number, Point, ScreenPoint,
};
use core::{fmt, iter};
use log::{debug, trace, warn};

/// Turns an expression in `x` into a number.
pub trait ExpressionEvaluator {
    type Err: fmt::Display;

    fn evaluate(&mut self, expr: &str, x: Number) -> Result<Number, Self::Err>;
}

impl<F, E> ExpressionEvaluator for F
where
    F: FnMut(&str, Number) -> Result<Number, E>,
    E: fmt::Display,
{
    type Err = E;

    fn evaluate(&mut self, expr: &str, x: Number) -> Result<Number, Self::Err> {
        self(expr, x)
    }
}

/// The `idx`th expression plotted in a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlotRequest {
    pub expr: String,
    pub idx: ColorIndex,
}

impl PlotRequest {
    pub fn new(expr: impl Into<String>, idx: ColorIndex) -> Self {
        Self {
            expr: expr.into(),
            idx,
        }
    }

    pub fn try_new(expr: impl Into<String>, idx: i64) -> Result<Self, ConfigErr> {
        Ok(Self::new(expr, ColorIndex::try_from(idx)?))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CurveStats {
    /// Segments handed to the renderer.
    pub segments: usize,
    /// Segments left out because an endpoint could not be evaluated.
    pub skipped: usize,
}

impl CurveStats {
    #[inline]
    pub const fn total(&self) -> usize {
        self.segments + self.skipped
    }
}

impl fmt::Display for CurveStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} segments drawn",
            self.segments,
            self.total()
        )
    }
}

/// Sample positions covering `range`: `min`, `min + step`, ... and finally
/// `max` itself, which may be closer than one step to its predecessor.
///
/// A `step` that isn't a positive number yields `max` alone.
pub fn sample_xs(range: AxisRange, step: Number) -> impl Iterator<Item = Number> {
    let (min, max) = (range.min as Number, range.max as Number);
    let steps = if step.is_finite() && step > 0.0 {
        // slack so that a span that is a whole number of steps doesn't get an
        // extra sample from rounding
        ((max - min) / step - 1e-9).ceil().max(0.0) as usize
    } else {
        0
    };
    (0..steps)
        .map(move |i| min + step * i as Number)
        .take_while(move |x| *x < max)
        .chain(iter::once(max))
}

/// How many samples [`sample_xs`] yields for `range`, as a float so that
/// absurd ranges don't overflow.
pub fn sample_count(range: AxisRange, step: Number) -> Number {
    let span = range.max as Number - range.min as Number;
    (span / step - 1e-9).ceil().max(0.0) + 1.0
}

/// Draws `req` as a polyline through samples of its expression.
///
/// A sample that fails to evaluate, or evaluates to something non-finite,
/// leaves a gap: both segments touching it are skipped and drawing resumes at
/// the next pair of good samples.
///
/// A viewport that would need more samples than the settings allow draws
/// nothing.
pub fn sample_curve<E, R>(
    req: &PlotRequest,
    evaluator: &mut E,
    viewport: &Viewport,
    settings: &Settings,
    renderer: &mut R,
) -> Result<CurveStats, R::Err>
where
    E: ExpressionEvaluator + ?Sized,
    R: Renderer + ?Sized,
{
    let range = x_range(viewport, settings.canvas().x);
    if let Err(err) = settings.check_points(sample_count(range, settings.step())) {
        warn!("not plotting {:?}: {err}", req.expr);
        return Ok(CurveStats::default());
    }
    let color = color_for(req.idx);
    debug!(
        "plotting {expr:?} ({idx}, {color}) over x in {range}",
        expr = req.expr,
        idx = req.idx
    );
    renderer.set_color(color)?;

    let mut stats = CurveStats::default();
    let mut prev: Option<Option<ScreenPoint>> = None; // outer None before the first sample
    let mut pen_down = false;
    for x in sample_xs(range, settings.step()) {
        let cur = match evaluator.evaluate(&req.expr, x) {
            Ok(y) if y.is_finite() => Some(viewport.to_screen(Point::new(x, y))),
            Ok(y) => {
                trace!("gap at x = {x}: value is {y}");
                None
            }
            Err(err) => {
                trace!("gap at x = {x}: {err}");
                None
            }
        };

        match (prev, cur) {
            (None, _) => {}
            (Some(Some(from)), Some(to)) => {
                if !pen_down {
                    renderer.move_to(from)?;
                    pen_down = true;
                }
                renderer.line_to(to)?;
                stats.segments += 1;
            }
            (Some(_), _) => {
                pen_down = false;
                stats.skipped += 1;
            }
        }
        prev = Some(cur);
    }

    if stats.segments == 0 && stats.skipped != 0 {
        warn!("{:?} is undefined everywhere on screen", req.expr);
    } else {
        debug!("{:?}: {stats}", req.expr);
    }
    Ok(stats)
}
