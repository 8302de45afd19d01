use dashu::integer::IBig;
use dashu::rational::RBig;

/// A fixed (input, required output) pair constraining the curve fit.
///
/// Both members are exact rationals so the fit stage never touches floating
/// point; conversion to `f64` happens once, after solving.
pub struct BoundaryCondition {
    x: RBig,
    y: RBig,
}

impl BoundaryCondition {
    pub fn new(x: RBig, y: RBig) -> BoundaryCondition {
        BoundaryCondition { x, y }
    }

    /// Convenience constructor for integer-valued conditions. Every constant
    /// in this analysis fits an `i128` with room to spare.
    pub fn from_integers(x: i128, y: i128) -> BoundaryCondition {
        BoundaryCondition {
            x: RBig::from(IBig::from(x)),
            y: RBig::from(IBig::from(y)),
        }
    }

    pub fn x(&self) -> &RBig {
        &self.x
    }

    pub fn y(&self) -> &RBig {
        &self.y
    }
}
