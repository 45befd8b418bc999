//! Descriptive statistics over a sample: mean, median, mode.
//!
//! Every function takes a borrowed slice, never mutates it, and rejects
//! an empty sample with [`StatsError::EmptySample`] instead of producing
//! NaN or reading past the end.
//!
//! # Algorithms
//!
//! - **Mean**: Neumaier compensated summation divided by the count.
//! - **Median**: sort a private copy under IEEE 754 total order; the
//!   even-length case averages the two central elements.
//! - **Mode**: single sequential scan with occurrence counts; the running
//!   mode changes only on a strictly greater count, so ties go to the
//!   value encountered first.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::StatsError;

/// Mean, median and mode of one sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
}

/// Computes the arithmetic mean of `data`.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Errors
/// [`StatsError::EmptySample`] if `data` is empty.
///
/// # Examples
/// ```
/// use vinostat::stats::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), Ok(3.0));
/// assert!(mean(&[]).is_err());
/// ```
pub fn mean(data: &[f64]) -> Result<f64, StatsError> {
    if data.is_empty() {
        return Err(StatsError::EmptySample);
    }
    Ok(kahan_sum(data) / data.len() as f64)
}

/// Computes the median of `data` without mutating the input.
///
/// Clones and sorts the data, then returns the middle element, or the
/// arithmetic mean of the two middle elements for even-length data.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Errors
/// [`StatsError::EmptySample`] if `data` is empty.
///
/// # Examples
/// ```
/// use vinostat::stats::median;
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Ok(2.0));
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Ok(2.5));
/// ```
pub fn median(data: &[f64]) -> Result<f64, StatsError> {
    if data.is_empty() {
        return Err(StatsError::EmptySample);
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 1 {
        Ok(sorted[n / 2])
    } else {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

/// Returns the most frequent value in `data`.
///
/// Ties are broken in favour of the value encountered first in a
/// sequential scan: the running mode only changes when a value's count
/// strictly exceeds the best count so far.
/// `0.0` and `-0.0` count as one value, as do all NaNs.
///
/// # Complexity
/// Time: O(n), Space: O(k) for k distinct values
///
/// # Errors
/// [`StatsError::EmptySample`] if `data` is empty.
///
/// # Examples
/// ```
/// use vinostat::stats::mode;
/// assert_eq!(mode(&[1.0, 2.0, 2.0, 3.0]), Ok(2.0));
/// // tie: first encountered wins
/// assert_eq!(mode(&[1.0, 1.0, 2.0, 2.0]), Ok(1.0));
/// ```
pub fn mode(data: &[f64]) -> Result<f64, StatsError> {
    let first = *data.first().ok_or(StatsError::EmptySample)?;
    let mut counts: HashMap<u64, usize> = HashMap::with_capacity(data.len());
    let mut best = first;
    let mut best_count = 0;
    for &x in data {
        let count = counts.entry(value_key(x)).or_insert(0);
        *count += 1;
        if *count > best_count {
            best = x;
            best_count = *count;
        }
    }
    Ok(best)
}

/// Computes [`mean`], [`median`] and [`mode`] in one call.
///
/// # Errors
/// [`StatsError::EmptySample`] if `data` is empty.
pub fn summarize(data: &[f64]) -> Result<Summary, StatsError> {
    Ok(Summary {
        mean: mean(data)?,
        median: median(data)?,
        mode: mode(data)?,
    })
}

/// Hash key under which two samples count as the same value.
fn value_key(x: f64) -> u64 {
    if x == 0.0 {
        0
    } else if x.is_nan() {
        f64::NAN.to_bits()
    } else {
        x.to_bits()
    }
}

/// Neumaier compensated summation.
///
/// Improved variant of Kahan summation that also handles the case where
/// the addend is larger in magnitude than the running sum.
///
/// Reference: Neumaier (1974), *Zeitschrift für Angewandte Mathematik und
/// Mechanik* 54(1), pp. 39–51.
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- mean ---

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), Ok(3.0));
    }

    #[test]
    fn test_mean_single() {
        assert_eq!(mean(&[42.0]), Ok(42.0));
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), Err(StatsError::EmptySample));
    }

    #[test]
    fn test_mean_nan_propagates() {
        assert!(mean(&[1.0, f64::NAN, 3.0]).unwrap().is_nan());
    }

    // --- median ---

    #[test]
    fn test_median_odd() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Ok(2.0));
    }

    #[test]
    fn test_median_even_averages_center() {
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Ok(2.5));
    }

    #[test]
    fn test_median_single() {
        assert_eq!(median(&[7.5]), Ok(7.5));
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(median(&[]), Err(StatsError::EmptySample));
    }

    #[test]
    fn test_median_does_not_mutate() {
        let data = vec![5.0, 3.0, 9.0, 1.0];
        let before = data.clone();
        let _ = median(&data);
        assert_eq!(data, before);
    }

    #[test]
    fn test_median_negative_values() {
        assert_eq!(median(&[-1.0, -5.0, 2.0]), Ok(-1.0));
    }

    // --- mode ---

    #[test]
    fn test_mode_clear_majority() {
        assert_eq!(mode(&[1.0, 2.0, 2.0, 3.0]), Ok(2.0));
    }

    #[test]
    fn test_mode_tie_first_encountered() {
        assert_eq!(mode(&[1.0, 1.0, 2.0, 2.0]), Ok(1.0));
        // 1.0 reaches two occurrences before 2.0 does
        assert_eq!(mode(&[2.0, 1.0, 1.0, 2.0]), Ok(1.0));
    }

    #[test]
    fn test_mode_all_distinct_is_first() {
        assert_eq!(mode(&[3.5, 1.0, 2.0]), Ok(3.5));
    }

    #[test]
    fn test_mode_later_value_overtakes() {
        assert_eq!(mode(&[1.0, 2.0, 2.0, 1.0, 2.0]), Ok(2.0));
    }

    #[test]
    fn test_mode_signed_zero_counted_together() {
        assert_eq!(mode(&[1.0, 0.0, -0.0, 1.0, 0.0]), Ok(0.0));
    }

    #[test]
    fn test_mode_empty() {
        assert_eq!(mode(&[]), Err(StatsError::EmptySample));
    }

    // --- summarize ---

    #[test]
    fn test_summarize() {
        let s = summarize(&[2.0, 4.0, 4.0, 10.0]).unwrap();
        assert_eq!(s.mean, 5.0);
        assert_eq!(s.median, 4.0);
        assert_eq!(s.mode, 4.0);
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&[]), Err(StatsError::EmptySample));
    }

    // --- kahan_sum ---

    #[test]
    fn test_kahan_sum_compensates() {
        // 1.0 + 1e100 + 1.0 - 1e100 == 2.0 only with compensation
        assert_eq!(kahan_sum(&[1.0, 1e100, 1.0, -1e100]), 2.0);
    }

    #[test]
    fn test_kahan_sum_empty() {
        assert_eq!(kahan_sum(&[]), 0.0);
    }
}
