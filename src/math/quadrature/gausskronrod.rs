//! 15-point Gauss–Kronrod panel rule.
//!
//! The Kronrod extension reuses the 7 Gauss–Legendre abscissae and adds 8 more,
//! so one sweep of 15 integrand evaluations yields both a degree-22-exact
//! estimate and an embedded degree-13-exact estimate. The gap between the two
//! is the per-panel error signal the adaptive driver refines on.

/// Abscissae of the 15-point Kronrod rule on [-1, 1], positive half.
/// Odd indices (1, 3, 5) and the implicit 0 are the embedded Gauss points.
const XGK: [f64; 8] = [
    0.991455371120813,
    0.949107912342759,
    0.864864423359769,
    0.741531185599394,
    0.586087235467691,
    0.405845151377397,
    0.207784955007898,
    0.000000000000000,
];

/// Kronrod weights paired with `XGK`.
const WGK: [f64; 8] = [
    0.022935322010529,
    0.063092092629979,
    0.104790010322250,
    0.140653259715525,
    0.169004726639267,
    0.190350578064785,
    0.204432940075298,
    0.209482141084728,
];

/// 7-point Gauss weights; `WG[3]` belongs to the centre node.
const WG: [f64; 4] = [
    0.129484966168870,
    0.279705391489277,
    0.381830050505119,
    0.417959183673469,
];

pub struct PanelEstimate {
    pub kronrod: f64,
    pub gauss: f64,
}

impl PanelEstimate {
    /// Gap between the two embedded estimates, the panel's error signal.
    pub fn discrepancy(&self) -> f64 {
        (self.kronrod - self.gauss).abs()
    }
}

/// Applies the G7–K15 pair to `f` over `[lo, hi]`.
pub fn kronrod15<F>(f: &F, lo: f64, hi: f64) -> PanelEstimate
where
    F: Fn(f64) -> f64,
{
    let centre = 0.5 * (lo + hi);
    let half_width = 0.5 * (hi - lo);

    let f_centre = f(centre);
    let mut kronrod = WGK[7] * f_centre;
    let mut gauss = WG[3] * f_centre;

    for j in 0..7 {
        let offset = half_width * XGK[j];
        let pair = f(centre - offset) + f(centre + offset);
        kronrod += WGK[j] * pair;
        if j % 2 == 1 {
            gauss += WG[j / 2] * pair;
        }
    }

    PanelEstimate {
        kronrod: kronrod * half_width,
        gauss: gauss * half_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_integrate_the_constant_one() {
        // Both rules must reproduce the length of [-1, 1] exactly.
        let kronrod_total: f64 = WGK[7] + 2.0 * WGK[..7].iter().sum::<f64>();
        let gauss_total: f64 = WG[3] + 2.0 * WG[..3].iter().sum::<f64>();
        assert!((kronrod_total - 2.0).abs() < 1e-12);
        assert!((gauss_total - 2.0).abs() < 1e-12);
    }

    #[test]
    fn single_panel_is_exact_on_low_degree_polynomials() {
        // ∫₀¹ x² dx = 1/3
        let estimate = kronrod15(&|x: f64| x * x, 0.0, 1.0);
        assert!((estimate.kronrod - 1.0 / 3.0).abs() < 1e-14);
        assert!((estimate.gauss - 1.0 / 3.0).abs() < 1e-14);

        // ∫₀² (x³ + 2x) dx = 8
        let estimate = kronrod15(&|x: f64| x * x * x + 2.0 * x, 0.0, 2.0);
        assert!((estimate.kronrod - 8.0).abs() < 1e-12);
        assert!(estimate.discrepancy() < 1e-12);
    }

    #[test]
    fn discrepancy_is_nonzero_for_a_rough_integrand() {
        let estimate = kronrod15(&|x: f64| (20.0 * x).sin(), 0.0, 3.0);
        assert!(estimate.discrepancy() > 1e-10);
    }
}
