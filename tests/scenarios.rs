use approx::assert_relative_eq;
use graph_calc::{
    color::{color_for, Color, ColorIndex},
    curve::{sample_curve, PlotRequest},
    range::{x_range, y_range, AxisRange},
    render::{DrawCmd, Recording},
    svg::SvgRenderer,
    Calculator, ConfigErr, Number, Point, Renderer, Session, Settings, Viewport,
};
use std::io;

fn centred() -> Viewport {
    Viewport::new(Point::new(400.0, 300.0), 50.0).expect("valid viewport")
}

#[test]
fn centred_viewport_ranges() {
    let viewport = centred();
    assert_eq!(x_range(&viewport, 800.0), AxisRange { min: -8, max: 8 });
    assert_eq!(y_range(&viewport, 600.0), AxisRange { min: -6, max: 6 });
}

#[test]
fn identity_is_the_diagonal() {
    let viewport = centred();
    let mut rec = Recording::new();
    let stats = sample_curve(
        &PlotRequest::new("x", ColorIndex::new(0)),
        &mut Calculator::default(),
        &viewport,
        &Settings::default(),
        &mut rec,
    )
    .expect("recording never fails");
    assert_eq!(stats.skipped, 0);

    let lines = rec.lines();
    let (first, _) = lines[0];
    let (_, last) = lines[lines.len() - 1];
    assert_eq!(viewport.to_calc(first), Point::new(-8.0, -8.0));
    assert_eq!(viewport.to_calc(last), Point::new(8.0, 8.0));

    for (from, to) in &lines {
        // every segment sits on y = x
        assert_relative_eq!(from.x - 400.0, from.y - 300.0, epsilon = 1e-9);
        assert_relative_eq!(to.x - 400.0, to.y - 300.0, epsilon = 1e-9);
    }
    assert!(lines
        .iter()
        .any(|(from, to)| from.x <= 400.0 && 400.0 <= to.x));
}

#[test]
fn reciprocal_skips_zero_and_keeps_going() {
    let viewport = centred();
    let mut rec = Recording::new();
    let stats = sample_curve(
        &PlotRequest::new("1/x", ColorIndex::new(0)),
        &mut Calculator::default(),
        &viewport,
        &Settings::default(),
        &mut rec,
    )
    .expect("recording never fails");

    assert_eq!(stats.skipped, 2);
    assert_eq!(stats.segments, 158);

    let xs: Vec<_> = rec
        .lines()
        .into_iter()
        .map(|(from, to)| (viewport.to_calc(from).x, viewport.to_calc(to).x))
        .collect();
    assert!(xs.iter().all(|(a, b)| *b <= 0.0 || *a >= 0.0));
    assert!(xs.iter().any(|(a, _)| *a > 0.0), "sampling stopped at the pole");
    assert!(xs.iter().any(|(_, b)| *b < 0.0));
}

#[test]
fn colors_cycle_every_three_plots() {
    let colors: Vec<_> = (0..4).map(|i| color_for(ColorIndex::new(i))).collect();
    assert_eq!(colors, [Color::Red, Color::Green, Color::Blue, Color::Red]);
}

#[test]
fn bad_configuration_is_rejected_before_drawing() {
    let rec = Recording::new();

    assert_eq!(
        Viewport::new(Point::new(400.0, 300.0), 0.0),
        Err(ConfigErr::Ratio(0.0))
    );
    assert_eq!(
        Viewport::new(Point::new(400.0, 300.0), -5.0),
        Err(ConfigErr::Ratio(-5.0))
    );
    assert_eq!(
        PlotRequest::try_new("x", -1),
        Err(ConfigErr::NegativeIndex(-1))
    );
    assert!(rec.cmds.is_empty());
}

#[test]
fn session_draws_axes_then_plots_in_order() {
    let mut session =
        Session::new(centred(), Settings::default(), Recording::new()).expect("valid settings");
    let mut calc = Calculator::default();
    for expr in ["x^2", "sin(x)", "ln(x)"] {
        session.plot(expr, &mut calc).expect("recording never fails");
    }
    let rec = session.into_renderer();

    // 2 axis lines, 17 x ticks, 13 y ticks, then curves
    let axis_cmds = rec
        .cmds
        .iter()
        .position(|cmd| *cmd == DrawCmd::SetColor(Color::Red))
        .expect("first plot is red");
    assert_eq!(rec.texts().count(), 17 + 13);
    assert!(rec.cmds[..axis_cmds]
        .iter()
        .all(|cmd| !matches!(cmd, DrawCmd::SetColor(c) if *c != Color::Black)));

    let colors: Vec<_> = rec.colors().filter(|c| *c != Color::Black).collect();
    assert_eq!(colors, [Color::Red, Color::Green, Color::Blue]);
}

#[test]
fn session_renders_to_svg() {
    let settings = Settings::default();
    let svg = SvgRenderer::new(Vec::new(), &settings).expect("in-memory writer");
    let mut session = Session::new(centred(), settings, svg).expect("valid settings");
    session
        .plot("abs(x) - 2", &mut Calculator::default())
        .expect("in-memory writer");
    let doc = String::from_utf8(session.into_renderer().finish().expect("in-memory writer"))
        .expect("svg is utf-8");

    assert!(doc.contains(r#"stroke="red""#));
    assert!(doc.contains(r#">-8</text>"#));
    assert!(doc.trim_end().ends_with("</svg>"));
}

/// Canvas whose writes fail after a budget runs out.
struct Flaky {
    budget: usize,
}

impl Renderer for Flaky {
    type Err = io::Error;

    fn set_color(&mut self, _: Color) -> io::Result<()> {
        Ok(())
    }

    fn move_to(&mut self, _: Point<Number>) -> io::Result<()> {
        Ok(())
    }

    fn line_to(&mut self, _: Point<Number>) -> io::Result<()> {
        self.budget = self
            .budget
            .checked_sub(1)
            .ok_or_else(|| io::Error::other("canvas unavailable"))?;
        Ok(())
    }

    fn write_text(&mut self, _: Point<Number>, _: &str) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn render_target_errors_propagate() {
    let mut session =
        Session::new(centred(), Settings::default(), Flaky { budget: 40 }).expect("valid settings");
    let err = session
        .plot("x", &mut Calculator::default())
        .expect_err("canvas runs out mid-curve");
    assert_eq!(err.to_string(), "canvas unavailable");
}
