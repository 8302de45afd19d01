use crate::math::curve::curve::Curve;

/// Axis-shifted quadratic `y = coef_a * (x + vertex_offset)^2 + coef_b`.
///
/// The vertex offset is baked in at construction; only the two coefficients
/// come out of a fit. Evaluation is total for finite `x` — at the extreme end
/// of the supply domain the squared term reaches ~1e53 and precision loss is
/// an accepted property of the formula.
pub struct ShiftedQuadratic {
    coef_a: f64,
    coef_b: f64,
    vertex_offset: f64,
}

impl ShiftedQuadratic {
    pub fn new(coef_a: f64, coef_b: f64, vertex_offset: f64) -> ShiftedQuadratic {
        ShiftedQuadratic { coef_a, coef_b, vertex_offset }
    }

    pub fn coef_a(&self) -> f64 {
        self.coef_a
    }

    pub fn coef_b(&self) -> f64 {
        self.coef_b
    }

    pub fn vertex_offset(&self) -> f64 {
        self.vertex_offset
    }
}

impl Curve for ShiftedQuadratic {
    fn value(&self, x: f64) -> f64 {
        let shifted = x + self.vertex_offset;
        f64::mul_add(self.coef_a * shifted, shifted, self.coef_b)
    }

    fn derivative(&self, x: f64) -> f64 {
        2.0 * self.coef_a * (x + self.vertex_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_matches_expanded_form() {
        let curve = ShiftedQuadratic::new(2.0, -3.0, 1.0);
        // 2*(4+1)^2 - 3 = 47
        assert_eq!(curve.value(4.0), 47.0);
        assert_eq!(curve.value(-1.0), -3.0);
    }

    #[test]
    fn derivative_vanishes_at_vertex() {
        let curve = ShiftedQuadratic::new(5.0, 0.5, 2.0);
        assert_eq!(curve.derivative(-2.0), 0.0);
        assert!(curve.derivative(0.0) > 0.0);
        assert!(curve.derivative(-4.0) < 0.0);
    }

    #[test]
    fn sample_grid_covers_both_endpoints() {
        let curve = ShiftedQuadratic::new(1.0, 0.0, 0.0);
        let table = curve.sample(0.0, 10.0, 6);
        assert_eq!(table.len(), 6);
        assert_eq!(table[0], (0.0, 0.0));
        assert_eq!(table[5], (10.0, 100.0));
        assert_eq!(table[3].0, 6.0);
    }
}
