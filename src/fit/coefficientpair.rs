use std::fmt::Display;

use dashu::rational::RBig;

use crate::math::curve::shiftedquadratic::ShiftedQuadratic;

/// The two solved coefficients of `y = coef_a * (x + K)^2 + coef_b`, kept
/// exact. Immutable once solved; downstream stages copy values out instead of
/// rebinding the unknowns.
pub struct CoefficientPair {
    coef_a: RBig,
    coef_b: RBig,
}

impl CoefficientPair {
    pub fn new(coef_a: RBig, coef_b: RBig) -> CoefficientPair {
        CoefficientPair { coef_a, coef_b }
    }

    pub fn coef_a(&self) -> &RBig {
        &self.coef_a
    }

    pub fn coef_b(&self) -> &RBig {
        &self.coef_b
    }

    /// Exact evaluation of the fitted formula, used to plug the boundary
    /// conditions back in.
    pub fn evaluate_exact(&self, x: &RBig, vertex_offset: &RBig) -> RBig {
        let shifted = x + vertex_offset;
        &self.coef_a * shifted.pow(2) + &self.coef_b
    }

    /// The exact→floating-point conversion boundary. Everything past this
    /// call (quadrature, sampling, plotting) works in `f64`.
    pub fn to_curve(&self, vertex_offset: &RBig) -> ShiftedQuadratic {
        ShiftedQuadratic::new(
            self.coef_a.to_f64().value(),
            self.coef_b.to_f64().value(),
            vertex_offset.to_f64().value(),
        )
    }
}

impl Display for CoefficientPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "a = {}, b = {}", self.coef_a, self.coef_b)
    }
}
