use plotly::common::Mode;
use plotly::layout::Axis;
use plotly::{Layout, Plot, Scatter};

use crate::fit::coefficientpair::CoefficientPair;
use crate::math::curve::curve::Curve;
use crate::pricing::mintcost::{SUPPLY_CAP, VERTEX_OFFSET};

/// Grid density of the rendered curve.
pub const SAMPLE_COUNT: usize = 500;

/// Legend entry carrying the fitted formula with its exact rational
/// coefficients.
pub fn formula_label(coefficients: &CoefficientPair) -> String {
    format!(
        "y = {} * (x + {})^2 + {}",
        coefficients.coef_a(),
        VERTEX_OFFSET,
        coefficients.coef_b(),
    )
}

/// Renders the marginal price curve over the full supply domain as a single
/// line chart: title, `x`/`y` axis labels, gridlines, one legend entry.
pub fn price_curve_figure(curve: &impl Curve, coefficients: &CoefficientPair) -> Plot {
    let table = curve.sample(0.0, SUPPLY_CAP as f64, SAMPLE_COUNT);
    let xs: Vec<f64> = table.iter().map(|&(x, _)| x).collect();
    let ys: Vec<f64> = table.iter().map(|&(_, y)| y).collect();
    let label = formula_label(coefficients);

    let mut plot = Plot::new();
    plot.add_trace(Scatter::new(xs, ys).name(&label).mode(Mode::Lines));
    plot.set_layout(
        Layout::new()
            .title("Marginal price of minting, launch to supply cap")
            .x_axis(Axis::new().title("x").show_grid(true))
            .y_axis(Axis::new().title("y").show_grid(true))
            .show_legend(true),
    );
    plot
}
