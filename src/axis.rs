// SPDX: CC0-1.0

use crate::{
    coord::Viewport,
    range::{x_range, y_range, AxisRange},
    render::Renderer,
    settings::Settings,
    CalcPoint, Number, Point, ScreenPoint,
};
use core::fmt;
use log::{debug, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn range(&self, viewport: &Viewport, settings: &Settings) -> AxisRange {
        let canvas = settings.canvas();
        match self {
            Self::X => x_range(viewport, canvas.x),
            Self::Y => y_range(viewport, canvas.y),
        }
    }

    /// The point `at` units along this axis.
    pub const fn point(&self, at: Number) -> CalcPoint {
        match self {
            Self::X => Point { x: at, y: 0.0 },
            Self::Y => Point { x: 0.0, y: at },
        }
    }

    /// Endpoints of a tick centred on `p`, perpendicular to this axis.
    pub fn tick(&self, p: ScreenPoint, half_len: Number) -> (ScreenPoint, ScreenPoint) {
        match self {
            Self::X => (Point::new(p.x, p.y - half_len), Point::new(p.x, p.y + half_len)),
            Self::Y => (Point::new(p.x - half_len, p.y), Point::new(p.x + half_len, p.y)),
        }
    }

    pub fn label_offset(&self, settings: &Settings) -> Point<Number> {
        match self {
            Self::X => settings.x_label_offset(),
            Self::Y => settings.y_label_offset(),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Draws the axis line across the visible range, then a tick and label at
/// every integer on it. An axis with more ticks than the settings allow is
/// not drawn at all.
pub fn draw_axis<R>(
    axis: Axis,
    viewport: &Viewport,
    settings: &Settings,
    renderer: &mut R,
) -> Result<(), R::Err>
where
    R: Renderer + ?Sized,
{
    let range = axis.range(viewport, settings);
    if let Err(err) = settings.check_points(range.tick_count() as Number) {
        warn!("not drawing {axis} axis: {err}");
        return Ok(());
    }
    debug!("drawing {axis} axis over {range}");

    renderer.set_color(settings.axis_color())?;
    renderer.line(
        viewport.to_screen(axis.point(range.min as Number)),
        viewport.to_screen(axis.point(range.max as Number)),
    )?;

    let offset = axis.label_offset(settings);
    for i in range.ticks() {
        let p = viewport.to_screen(axis.point(i as Number));
        let (from, to) = axis.tick(p, settings.tick_half_len());
        renderer.line(from, to)?;
        renderer.write_text(Point::new(p.x + offset.x, p.y + offset.y), &i.to_string())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::Color, render::Recording};

    fn draw(axis: Axis) -> Recording {
        let viewport = Viewport::new(Point::new(400.0, 300.0), 50.0).unwrap();
        let mut rec = Recording::new();
        draw_axis(axis, &viewport, &Settings::default(), &mut rec).unwrap();
        rec
    }

    #[test]
    fn x_axis() {
        let rec = draw(Axis::X);
        assert_eq!(rec.colors().collect::<Vec<_>>(), [Color::Black]);

        let lines = rec.lines();
        // baseline plus one tick for each of -8..=8
        assert_eq!(lines.len(), 1 + 17);
        assert_eq!(lines[0], (Point::new(0.0, 300.0), Point::new(800.0, 300.0)));
        // tick at x = 0 is vertical through the origin
        assert_eq!(lines[9], (Point::new(400.0, 297.0), Point::new(400.0, 303.0)));

        let texts: Vec<_> = rec.texts().collect();
        assert_eq!(texts.len(), 17);
        assert_eq!(texts[0], (Point::new(0.0, 285.0), "-8"));
        assert_eq!(texts[16], (Point::new(800.0, 285.0), "8"));
    }

    #[test]
    fn y_axis() {
        let rec = draw(Axis::Y);
        let lines = rec.lines();
        assert_eq!(lines.len(), 1 + 13);
        assert_eq!(lines[0], (Point::new(400.0, 0.0), Point::new(400.0, 600.0)));
        assert_eq!(lines[1], (Point::new(397.0, 0.0), Point::new(403.0, 0.0)));

        let texts: Vec<_> = rec.texts().collect();
        assert_eq!(texts.len(), 13);
        assert_eq!(texts[6], (Point::new(385.0, 297.0), "0"));
    }

    #[test]
    fn tick_spacing_ignores_density() {
        let viewport = Viewport::new(Point::new(0.0, 0.0), 1.0).unwrap();
        let mut rec = Recording::new();
        draw_axis(Axis::X, &viewport, &Settings::default(), &mut rec).unwrap();
        assert_eq!(rec.texts().count(), 801);
    }

    #[test]
    fn tiny_ratio_draws_nothing() {
        let viewport = Viewport::new(Point::new(400.0, 300.0), 1e-300).unwrap();
        let mut rec = Recording::new();
        draw_axis(Axis::X, &viewport, &Settings::default(), &mut rec).unwrap();
        assert!(rec.cmds.is_empty());
    }
}
