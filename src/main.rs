use std::error::Error;

use bondcurve::pricing::mintcost::{fit_price_curve, quote_tranches, vertex_offset};
use bondcurve::report::curveplot::price_curve_figure;

const PLOT_FILE: &str = "price_curve.html";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let coefficients = fit_price_curve()?;
    println!("solved coefficients: {}", coefficients);

    let curve = coefficients.to_curve(&vertex_offset());
    for quote in quote_tranches(&curve)? {
        println!(
            "{} result requires: {}, error: {}",
            quote.label, quote.cost, quote.error_bound
        );
    }

    let figure = price_curve_figure(&curve, &coefficients);
    figure.write_html(PLOT_FILE);
    log::info!("price curve written to {}", PLOT_FILE);

    Ok(())
}
