use dashu::rational::RBig;
use thiserror::Error;

use crate::fit::boundarycondition::BoundaryCondition;
use crate::fit::coefficientpair::CoefficientPair;

#[derive(Debug, Error)]
pub enum FitError {
    #[error(
        "boundary inputs x = {x1} and x = {x2} give a singular system; \
         no unique coefficient pair exists"
    )]
    SingularSystem { x1: RBig, x2: RBig },
}

/// Solves `y = coef_a * (x + vertex_offset)^2 + coef_b` through two boundary
/// conditions, exactly.
///
/// Writing `s_i = (x_i + K)^2`, the 2×2 system reduces to
///
/// ```text
/// coef_a = (y2 - y1) / (s2 - s1)
/// coef_b = y1 - coef_a * s1
/// ```
///
/// and is singular exactly when `s1 == s2`, i.e. when the two inputs coincide
/// (or mirror each other across the vertex). That case is reported as
/// [`FitError::SingularSystem`] instead of dividing by zero.
pub fn solve_quadratic_through(
    first: &BoundaryCondition,
    second: &BoundaryCondition,
    vertex_offset: &RBig,
) -> Result<CoefficientPair, FitError> {
    let s1 = (first.x() + vertex_offset).pow(2);
    let s2 = (second.x() + vertex_offset).pow(2);

    if s1 == s2 {
        return Err(FitError::SingularSystem {
            x1: first.x().clone(),
            x2: second.x().clone(),
        });
    }

    let coef_a = (second.y() - first.y()) / (s2 - &s1);
    let coef_b = first.y() - &coef_a * s1;

    Ok(CoefficientPair::new(coef_a, coef_b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashu::integer::IBig;

    fn rational(n: i128) -> RBig {
        RBig::from(IBig::from(n))
    }

    #[test]
    fn plugging_the_conditions_back_in_reproduces_them_exactly() {
        // y = 2*(x + 1)^2 + 5 through (0, 7) and (3, 37)
        let c1 = BoundaryCondition::from_integers(0, 7);
        let c2 = BoundaryCondition::from_integers(3, 37);
        let offset = rational(1);

        let pair = solve_quadratic_through(&c1, &c2, &offset).unwrap();
        assert_eq!(pair.coef_a(), &rational(2));
        assert_eq!(pair.coef_b(), &rational(5));
        assert_eq!(pair.evaluate_exact(c1.x(), &offset), rational(7));
        assert_eq!(pair.evaluate_exact(c2.x(), &offset), rational(37));
    }

    #[test]
    fn coinciding_inputs_are_singular() {
        let c1 = BoundaryCondition::from_integers(4, 10);
        let c2 = BoundaryCondition::from_integers(4, 20);
        let outcome = solve_quadratic_through(&c1, &c2, &rational(0));
        assert!(matches!(outcome, Err(FitError::SingularSystem { .. })));
    }

    #[test]
    fn inputs_mirrored_across_the_vertex_are_singular_too() {
        // With K = -2, x = 1 and x = 3 shift to -1 and 1: equal squares.
        let c1 = BoundaryCondition::from_integers(1, 10);
        let c2 = BoundaryCondition::from_integers(3, 20);
        let outcome = solve_quadratic_through(&c1, &c2, &rational(-2));
        assert!(matches!(outcome, Err(FitError::SingularSystem { .. })));
    }
}
