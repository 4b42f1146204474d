//! Aggregate statistics over the accepted values.

use serde::Serialize;

/// Summary statistics for one extraction run.
///
/// `min`, `max` and `mean` are `None` when no values were accepted; "no
/// data" is distinguishable from "sum is zero".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub count: usize,
    pub sum: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}

impl Stats {
    /// Stats for an empty value set.
    pub fn empty() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            min: None,
            max: None,
            mean: None,
        }
    }

    /// Compute stats from an ordered value sequence, single pass.
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::empty();
        }

        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in values {
            sum += v;
            min = min.min(v);
            max = max.max(v);
        }

        Self {
            count: values.len(),
            sum,
            min: Some(min),
            max: Some(max),
            mean: Some(sum / values.len() as f64),
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_has_absent_extrema() {
        let stats = Stats::from_values(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.sum, 0.0);
        assert_eq!(stats.min, None);
        assert_eq!(stats.max, None);
        assert_eq!(stats.mean, None);
    }

    #[test]
    fn single_value() {
        let stats = Stats::from_values(&[7.5]);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.sum, 7.5);
        assert_eq!(stats.min, Some(7.5));
        assert_eq!(stats.max, Some(7.5));
        assert_eq!(stats.mean, Some(7.5));
    }

    #[test]
    fn mean_sits_between_extrema() {
        let stats = Stats::from_values(&[-3.0, 0.0, 12.0]);
        let (min, max, mean) = (
            stats.min.unwrap(),
            stats.max.unwrap(),
            stats.mean.unwrap(),
        );
        assert!(min <= mean && mean <= max);
        assert_eq!(stats.sum, 9.0);
        assert_eq!(mean, 3.0);
    }

    #[test]
    fn zero_sum_is_not_absent() {
        let stats = Stats::from_values(&[-2.0, 2.0]);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.sum, 0.0);
        assert_eq!(stats.min, Some(-2.0));
    }
}
