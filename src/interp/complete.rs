//! Series completion and helper queries.
//!
//! `complete_series` maps every entry of the input to either itself (observed)
//! or a derived copy carrying the rounded estimate. The input is never mutated.

use crate::domain::{KnownPoint, Observation, Series};
use crate::error::InterpolationError;
use crate::interp::lagrange::estimate;

/// An estimate that could not be produced for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearFailure {
    pub year: i32,
    pub error: InterpolationError,
}

/// Completed series plus the per-year failures collected on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub series: Series,
    pub failures: Vec<YearFailure>,
}

impl Completion {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Fill every missing entry with the rounded global Lagrange estimate.
///
/// Rounding is half away from zero. Filled entries keep `observed = false`.
///
/// Returns `Err` only when there are missing entries and no known point at
/// all; any other estimation failure is recorded per year and leaves that
/// entry's value unset.
pub fn complete_series(series: &Series) -> Result<Completion, InterpolationError> {
    let known = known_points(series);
    let has_missing = series.iter().any(|o| !o.observed);

    if has_missing && known.is_empty() {
        return Err(InterpolationError::InsufficientData { known: 0 });
    }

    let mut failures = Vec::new();
    let completed = series
        .iter()
        .map(|obs| {
            if obs.observed {
                return *obs;
            }
            match estimate(&known, obs.year) {
                Ok(v) => Observation {
                    value: Some(round_estimate(v)),
                    ..*obs
                },
                Err(error) => {
                    failures.push(YearFailure {
                        year: obs.year,
                        error,
                    });
                    Observation { value: None, ..*obs }
                }
            }
        })
        .collect();

    Ok(Completion {
        series: completed,
        failures,
    })
}

/// Round an estimate to the nearest integer, ties away from zero.
pub fn round_estimate(v: f64) -> f64 {
    v.round()
}

/// Observed entries as estimator input, in series order.
pub fn known_points(series: &Series) -> Vec<KnownPoint> {
    series
        .iter()
        .filter(|o| o.observed)
        .filter_map(|o| o.value.map(|v| KnownPoint::new(o.year, v)))
        .collect()
}

/// Years still to be filled, in series order.
pub fn missing_years(series: &Series) -> Vec<i32> {
    series.iter().filter(|o| !o.observed).map(|o| o.year).collect()
}

/// Number of observed entries.
pub fn observed_count(series: &Series) -> usize {
    series.iter().filter(|o| o.observed).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Series {
        Series::new(vec![
            Observation::observed(1990, 1000.0),
            Observation::missing(1991),
            Observation::observed(1992, 1500.0),
        ])
    }

    #[test]
    fn fills_midpoint_and_keeps_flag() {
        let done = complete_series(&sample()).unwrap();
        assert!(done.is_complete());

        let filled = done.series.get(1991).unwrap();
        assert_eq!(filled.value, Some(1250.0));
        assert!(!filled.observed);
    }

    #[test]
    fn helper_queries() {
        let series = sample();
        assert_eq!(missing_years(&series), vec![1991]);
        assert_eq!(observed_count(&series), 2);
    }

    #[test]
    fn completion_preserves_shape() {
        let input = Series::new(vec![
            Observation::missing(1989),
            Observation::observed(1990, 10.0),
            Observation::missing(1993),
            Observation::observed(1991, 12.0),
            Observation::observed(1995, 30.0),
            Observation::missing(1997),
        ]);
        let done = complete_series(&input).unwrap();

        assert_eq!(done.series.len(), input.len());
        for (before, after) in input.iter().zip(done.series.iter()) {
            assert_eq!(before.year, after.year);
            assert_eq!(before.observed, after.observed);
            if before.observed {
                assert_eq!(before.value, after.value);
            } else {
                assert!(after.value.is_some());
            }
        }
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(round_estimate(0.5), 1.0);
        assert_eq!(round_estimate(2.5), 3.0);
        assert_eq!(round_estimate(-2.5), -3.0);
        assert_eq!(round_estimate(1249.4999), 1249.0);

        // (0, 0) and (2, 5): the midpoint estimate is exactly 2.5.
        let series = Series::new(vec![
            Observation::observed(0, 0.0),
            Observation::missing(1),
            Observation::observed(2, 5.0),
        ]);
        let done = complete_series(&series).unwrap();
        assert_eq!(done.series.get(1).unwrap().value, Some(3.0));
    }

    #[test]
    fn single_known_point_fails_per_year() {
        let series = Series::new(vec![
            Observation::observed(2000, 5.0),
            Observation::missing(2001),
            Observation::missing(2002),
        ]);
        let done = complete_series(&series).unwrap();

        assert_eq!(done.failures.len(), 2);
        assert_eq!(done.failures[0].year, 2001);
        assert_eq!(
            done.failures[1].error,
            InterpolationError::InsufficientData { known: 1 }
        );
        assert_eq!(done.series.get(2001).unwrap().value, None);
        assert_eq!(done.series.get(2000).unwrap().value, Some(5.0));
    }

    #[test]
    fn no_known_points_is_fatal() {
        let series = Series::new(vec![Observation::missing(2000), Observation::missing(2001)]);
        assert_eq!(
            complete_series(&series),
            Err(InterpolationError::InsufficientData { known: 0 })
        );
    }

    #[test]
    fn fully_observed_series_is_unchanged() {
        let series = Series::new(vec![
            Observation::observed(2000, 1.0),
            Observation::observed(2001, 2.0),
        ]);
        let done = complete_series(&series).unwrap();
        assert_eq!(done.series, series);
        assert!(done.failures.is_empty());
    }
}
