use approx::assert_relative_eq;
use graph_calc::{
    color::{color_for, ColorIndex, PLOT_COLORS},
    curve::sample_xs,
    range::{x_range, AxisRange},
    Calculator, ExpressionEvaluator, Number, Point, Viewport,
};
use proptest::prelude::*;

fn viewports() -> impl Strategy<Value = Viewport> {
    (-2000.0..2000.0f64, -2000.0..2000.0f64, 0.01..500.0f64).prop_map(|(x, y, ratio)| {
        Viewport::new(Point::new(x, y), ratio).expect("ratio is positive")
    })
}

proptest! {
    #[test]
    fn screen_calc_round_trip(
        viewport in viewports(),
        x in -1.0e4..1.0e4f64,
        y in -1.0e4..1.0e4f64,
    ) {
        let p = Point::new(x, y);
        let back = viewport.to_calc(viewport.to_screen(p));
        assert_relative_eq!(back.x, x, epsilon = 1e-6, max_relative = 1e-9);
        assert_relative_eq!(back.y, y, epsilon = 1e-6, max_relative = 1e-9);
    }

    #[test]
    fn range_covers_the_canvas(viewport in viewports(), width in 1.0..4000.0f64) {
        let range = x_range(&viewport, width);
        prop_assert!(range.min <= range.max);

        let left = viewport.to_calc(Point::new(0.0, 0.0)).x;
        let right = viewport.to_calc(Point::new(width, 0.0)).x;
        prop_assert!(range.min as Number <= left + 1e-9);
        prop_assert!(range.max as Number >= right - 1e-9);
        // tight: no more than one unit of slack on either side
        prop_assert!(left - (range.min as Number) < 1.0 + 1e-9);
        prop_assert!((range.max as Number) - right < 1.0 + 1e-9);
    }

    #[test]
    fn color_cycle_has_period_three(i in 0usize..1_000_000) {
        let idx = ColorIndex::new(i);
        prop_assert_eq!(color_for(idx), PLOT_COLORS[i % 3]);
        prop_assert_eq!(color_for(ColorIndex::new(i + 3)), color_for(idx));
    }

    #[test]
    fn negative_indices_never_become_colors(i in i64::MIN..0) {
        prop_assert!(ColorIndex::try_from(i).is_err());
    }

    #[test]
    fn samples_are_increasing_and_bounded(
        min in -500i64..500,
        len in 0i64..200,
        step in 0.01..3.0f64,
    ) {
        let range = AxisRange { min, max: min + len };
        let xs: Vec<_> = sample_xs(range, step).collect();
        prop_assert_eq!(xs[0], min as Number);
        prop_assert_eq!(*xs.last().expect("at least one sample"), range.max as Number);
        let gaps: Vec<_> = xs.windows(2).map(|pair| pair[1] - pair[0]).collect();
        if let Some((last, full)) = gaps.split_last() {
            for gap in full {
                assert_relative_eq!(*gap, step, epsilon = 1e-9);
            }
            prop_assert!(*last > 0.0);
            prop_assert!(*last <= step + 1e-9);
        }
    }

    #[test]
    fn polynomials_match_direct_evaluation(
        a in -10.0..10.0f64,
        b in -10.0..10.0f64,
        x in -100.0..100.0f64,
    ) {
        let mut calc = Calculator::default();
        let y = calc
            .evaluate(&format!("({a})*x^2 + ({b})*x - 1"), x)
            .expect("polynomials are defined everywhere");
        assert_relative_eq!(y, a * x * x + b * x - 1.0, epsilon = 1e-6, max_relative = 1e-9);
    }
}
