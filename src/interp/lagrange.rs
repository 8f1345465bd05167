//! Global Lagrange polynomial estimator.
//!
//! For `n` known points the estimator evaluates the unique polynomial of degree
//! `n - 1` that passes through all of them:
//!
//! ```text
//! P(x) = Σ_i y_i · Π_{j≠i} (x - x_j) / (x_i - x_j)
//! ```
//!
//! Numerical notes:
//! - Years are converted to `f64` before subtraction, so differences never
//!   overflow `i32`.
//! - Known years are distinct integers, so every denominator is a non-zero
//!   integer-valued float.
//! - No clamping is applied. Targets outside the known range extrapolate and
//!   can diverge quickly for high degrees.

use crate::domain::KnownPoint;
use crate::error::InterpolationError;

/// Minimum number of known points for a defined estimate.
pub const MIN_KNOWN_POINTS: usize = 2;

/// Estimate the value at `target_year` from every point in `known`.
///
/// The general formula is used even when `target_year` coincides with a known
/// year; the result then equals the stored value up to rounding.
pub fn estimate(known: &[KnownPoint], target_year: i32) -> Result<f64, InterpolationError> {
    if known.len() < MIN_KNOWN_POINTS {
        return Err(InterpolationError::InsufficientData { known: known.len() });
    }

    let result: f64 = known
        .iter()
        .enumerate()
        .map(|(i, p)| p.value * basis(known, i, target_year))
        .sum();

    Ok(result)
}

/// Evaluate the `i`-th Lagrange basis polynomial at `target_year`.
///
/// # Panics
/// Panics if `i >= known.len()`.
pub fn basis(known: &[KnownPoint], i: usize, target_year: i32) -> f64 {
    let x = f64::from(target_year);
    let xi = f64::from(known[i].year);
    known
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .map(|(_, pj)| {
            let xj = f64::from(pj.year);
            (x - xj) / (xi - xj)
        })
        .product()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(i32, f64)]) -> Vec<KnownPoint> {
        raw.iter().map(|&(y, v)| KnownPoint::new(y, v)).collect()
    }

    #[test]
    fn collinear_points_keep_linear_trend() {
        let known = pts(&[(1990, 1000.0), (2000, 2000.0), (2010, 3000.0)]);
        let v = estimate(&known, 2005).unwrap();
        assert!((v - 2500.0).abs() < 1e-9, "got {v}");
    }

    #[test]
    fn two_points_give_midpoint() {
        let known = pts(&[(1990, 1000.0), (1992, 1500.0)]);
        let v = estimate(&known, 1991).unwrap();
        assert!((v - 1250.0).abs() < 1e-9, "got {v}");
    }

    #[test]
    fn quadratic_is_reproduced() {
        // y = 3x^2 - 2x + 7 with x measured in years since 2000.
        let f = |year: i32| {
            let x = f64::from(year - 2000);
            3.0 * x * x - 2.0 * x + 7.0
        };
        let known = pts(&[(2000, f(2000)), (2003, f(2003)), (2007, f(2007))]);
        for year in [2001, 2005, 2010, 1995] {
            let v = estimate(&known, year).unwrap();
            assert!((v - f(year)).abs() < 1e-6, "year {year}: {v} vs {}", f(year));
        }
    }

    #[test]
    fn known_year_returns_stored_value() {
        let known = pts(&[(1990, 17.0), (1994, 23.5), (2001, 11.0), (2003, 40.0)]);
        for p in &known {
            let v = estimate(&known, p.year).unwrap();
            assert!((v - p.value).abs() <= 1e-9 * p.value.abs().max(1.0));
        }
    }

    #[test]
    fn rejects_fewer_than_two_points() {
        assert_eq!(
            estimate(&[], 2000),
            Err(InterpolationError::InsufficientData { known: 0 })
        );
        assert_eq!(
            estimate(&pts(&[(2000, 1.0)]), 2000),
            Err(InterpolationError::InsufficientData { known: 1 })
        );
    }

    #[test]
    fn basis_is_kronecker_delta_on_nodes() {
        let known = pts(&[(1990, 0.0), (1995, 0.0), (2004, 0.0)]);
        for i in 0..known.len() {
            for (j, p) in known.iter().enumerate() {
                let b = basis(&known, i, p.year);
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((b - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn basis_sums_to_one() {
        let known = pts(&[(1990, 0.0), (1993, 0.0), (1998, 0.0), (2010, 0.0)]);
        let total: f64 = (0..known.len()).map(|i| basis(&known, i, 2001)).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }
}
