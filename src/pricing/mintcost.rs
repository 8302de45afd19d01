//! The fixed mint-cost analysis: curve constants, the fit over its two
//! boundary conditions, and the four tranche quotes.
//!
//! Supply is measured in base units of an 18-decimal token, so 1e25 base
//! units is 10 million whole tokens. The marginal price `y` is itself in base
//! units, which is why quoted costs are divided by 10^36 to land in whole
//! token × whole currency terms.

use dashu::integer::IBig;
use dashu::rational::RBig;

use crate::fit::boundarycondition::BoundaryCondition;
use crate::fit::coefficientpair::CoefficientPair;
use crate::fit::coefficientsolver::{FitError, solve_quadratic_through};
use crate::math::curve::curve::Curve;
use crate::math::curve::shiftedquadratic::ShiftedQuadratic;
use crate::math::quadrature::adaptivequadrature::{
    QuadratureError, QuadratureSettings, integrate,
};

/// Vertex offset `K` of the price curve: the axis of symmetry sits at
/// `x = -3e25`, safely left of the whole supply domain.
pub const VERTEX_OFFSET: i128 = 30_000_000_000_000_000_000_000_000;

/// Marginal price at zero supply, in base units.
pub const LAUNCH_PRICE: i128 = 1_800_000_000;

/// Total mintable supply in base units (700 million tokens) and the marginal
/// price required once it is reached.
pub const SUPPLY_CAP: i128 = 700_000_000_000_000_000_000_000_000;
pub const PRICE_AT_CAP: i128 = 24_000_000_000;

/// Divides raw base-unit² cost integrals down to whole-token, whole-currency
/// figures (10^18 supply decimals × 10^18 price decimals).
pub const COST_SCALE_DIVISOR: f64 = 1e36;

/// The four cumulative supply levels the analysis quotes, smallest first.
pub const TRANCHES: [MintTranche; 4] = [
    MintTranche { label: "10M tokens", supply: 10_000_000_000_000_000_000_000_000 },
    MintTranche { label: "20M tokens", supply: 20_000_000_000_000_000_000_000_000 },
    MintTranche { label: "100M tokens", supply: 100_000_000_000_000_000_000_000_000 },
    MintTranche { label: "700M tokens", supply: SUPPLY_CAP },
];

#[derive(Clone, Copy)]
pub struct MintTranche {
    pub label: &'static str,
    /// Cumulative supply minted, in base units; the quote integrates from 0.
    pub supply: i128,
}

/// One quoted tranche: scaled total cost plus the quadrature's own absolute
/// error bound (reported unscaled, as a raw bound on the integral).
pub struct MintQuote {
    pub label: &'static str,
    pub supply: f64,
    pub cost: f64,
    pub error_bound: f64,
}

pub fn vertex_offset() -> RBig {
    RBig::from(IBig::from(VERTEX_OFFSET))
}

/// Fits the marginal price curve through the launch and cap conditions,
/// exactly.
pub fn fit_price_curve() -> Result<CoefficientPair, FitError> {
    let at_launch = BoundaryCondition::from_integers(0, LAUNCH_PRICE);
    let at_cap = BoundaryCondition::from_integers(SUPPLY_CAP, PRICE_AT_CAP);
    solve_quadratic_through(&at_launch, &at_cap, &vertex_offset())
}

/// Integrates the price curve over `[0, supply]` for every tranche. Each
/// tranche is a fresh integration; nothing is reused between them, so a
/// failure on one aborts the whole quote.
pub fn quote_tranches(curve: &ShiftedQuadratic) -> Result<Vec<MintQuote>, QuadratureError> {
    TRANCHES
        .iter()
        .map(|tranche| {
            let supply = tranche.supply as f64;
            let result = integrate(
                |x| curve.value(x),
                0.0,
                supply,
                QuadratureSettings::default(),
            )?;
            Ok(MintQuote {
                label: tranche.label,
                supply,
                cost: result.estimate / COST_SCALE_DIVISOR,
                error_bound: result.error_bound,
            })
        })
        .collect()
}
