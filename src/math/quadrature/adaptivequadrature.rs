//! Adaptive quadrature driver on top of the G7–K15 panel rule.
//!
//! The interval is split by bisecting whichever panel currently carries the
//! largest error signal, until the summed bound meets tolerance or the
//! subdivision budget runs out. A spent budget is a hard error: a truncated
//! estimate must never be mistaken for a converged one.

use thiserror::Error;

use crate::math::quadrature::gausskronrod::kronrod15;

#[derive(Debug, Error)]
pub enum QuadratureError {
    #[error(
        "quadrature did not converge within {max_subdivisions} subdivisions \
         (estimate {estimate:e}, error bound {error_bound:e})"
    )]
    NonConvergence {
        estimate: f64,
        error_bound: f64,
        max_subdivisions: usize,
    },
    #[error("quadrature estimate became non-finite; integrand misbehaves on the interval")]
    NonFinite,
}

#[derive(Clone, Copy)]
pub struct QuadratureSettings {
    pub absolute_tolerance: f64,
    pub relative_tolerance: f64,
    pub max_subdivisions: usize,
}

impl Default for QuadratureSettings {
    fn default() -> QuadratureSettings {
        QuadratureSettings {
            absolute_tolerance: 1.49e-8,
            relative_tolerance: 1.49e-8,
            max_subdivisions: 50,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct QuadratureResult {
    /// Best available estimate of the definite integral.
    pub estimate: f64,
    /// Absolute bound on the estimate's error, summed over all panels.
    pub error_bound: f64,
    /// Number of bisections performed before convergence.
    pub subdivisions: usize,
}

struct Panel {
    lo: f64,
    hi: f64,
    estimate: f64,
    error: f64,
}

impl Panel {
    fn compute<F: Fn(f64) -> f64>(f: &F, lo: f64, hi: f64) -> Panel {
        let panel = kronrod15(f, lo, hi);
        Panel {
            lo,
            hi,
            estimate: panel.kronrod,
            error: panel.discrepancy(),
        }
    }
}

/// Estimates `∫ f dx` over `[lo, hi]` together with an absolute error bound.
///
/// A reversed interval integrates the swapped bounds and negates; an empty
/// interval is exactly zero.
pub fn integrate<F>(
    f: F,
    lo: f64,
    hi: f64,
    settings: QuadratureSettings,
) -> Result<QuadratureResult, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    if lo == hi {
        return Ok(QuadratureResult {
            estimate: 0.0,
            error_bound: 0.0,
            subdivisions: 0,
        });
    }
    if lo > hi {
        let mut flipped = integrate(f, hi, lo, settings)?;
        flipped.estimate = -flipped.estimate;
        return Ok(flipped);
    }

    let mut panels = vec![Panel::compute(&f, lo, hi)];
    let mut subdivisions = 0;

    loop {
        let estimate: f64 = panels.iter().map(|p| p.estimate).sum();
        let error_bound: f64 = panels.iter().map(|p| p.error).sum();

        if !estimate.is_finite() || !error_bound.is_finite() {
            return Err(QuadratureError::NonFinite);
        }

        let tolerance = settings
            .absolute_tolerance
            .max(settings.relative_tolerance * estimate.abs());
        if error_bound <= tolerance {
            return Ok(QuadratureResult {
                estimate,
                error_bound,
                subdivisions,
            });
        }

        if subdivisions >= settings.max_subdivisions {
            return Err(QuadratureError::NonConvergence {
                estimate,
                error_bound,
                max_subdivisions: settings.max_subdivisions,
            });
        }

        let worst = panels
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.error.total_cmp(&b.error))
            .map(|(i, _)| i)
            .unwrap_or(0);
        let Panel { lo, hi, .. } = panels.swap_remove(worst);
        let mid = 0.5 * (lo + hi);
        panels.push(Panel::compute(&f, lo, mid));
        panels.push(Panel::compute(&f, mid, hi));
        subdivisions += 1;
    }
}
