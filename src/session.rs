// SPDX: CC0-1.0

use crate::{
    axis::{draw_axis, Axis},
    color::ColorIndex,
    coord::{ConfigErr, Viewport},
    curve::{sample_curve, CurveStats, ExpressionEvaluator, PlotRequest},
    render::Renderer,
    settings::Settings,
};
use log::info;

/// One viewport's worth of drawing: the axes, then each plot in the order it
/// was submitted.
#[derive(Debug)]
pub struct Session<R: Renderer> {
    viewport: Viewport,
    settings: Settings,
    renderer: R,
    next: ColorIndex,
    axes_drawn: bool,
}

impl<R: Renderer> Session<R> {
    /// Fails if the viewport puts more ticks on an axis, or more samples on a
    /// curve, than `settings` allow.
    pub fn new(viewport: Viewport, settings: Settings, renderer: R) -> Result<Self, ConfigErr> {
        settings.check_viewport(&viewport)?;
        info!("new session: {viewport}, {settings}");
        Ok(Self {
            viewport,
            settings,
            renderer,
            next: ColorIndex::default(),
            axes_drawn: false,
        })
    }

    /// Ordinal the next plot will get.
    pub const fn next_index(&self) -> ColorIndex {
        self.next
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Draws both axes. Only the first call does anything.
    pub fn draw_axes(&mut self) -> Result<(), R::Err> {
        if self.axes_drawn {
            return Ok(());
        }
        for axis in [Axis::X, Axis::Y] {
            draw_axis(axis, &self.viewport, &self.settings, &mut self.renderer)?;
        }
        self.axes_drawn = true;
        Ok(())
    }

    /// Plots `expr` in the next color of the cycle.
    pub fn plot<E>(&mut self, expr: &str, evaluator: &mut E) -> Result<CurveStats, R::Err>
    where
        E: ExpressionEvaluator + ?Sized,
    {
        self.draw_axes()?;
        let req = PlotRequest::new(expr, self.next);
        let stats = sample_curve(
            &req,
            evaluator,
            &self.viewport,
            &self.settings,
            &mut self.renderer,
        )?;
        self.next = self.next.next();
        Ok(stats)
    }
}
