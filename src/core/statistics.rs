//! Statistical functions over integer samples.

use serde::Serialize;

use crate::core::error::SampleError;

/// Sample median, kept as the pair of middle order statistics.
///
/// For odd lengths both halves are the same element. For even lengths the
/// true median is the half-integer average of `lower` and `upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Median {
    pub lower: i64,
    pub upper: i64,
}

impl Median {
    /// The conventional median value (average of the middle pair).
    pub fn value(&self) -> f64 {
        (self.lower as f64 + self.upper as f64) / 2.0f64
    }

    /// Integer point at which the linear cost is evaluated.
    ///
    /// Linear cost is constant on `[lower, upper]`, so this gives the same
    /// cost as the half-integer `value()`.
    pub fn alignment_point(&self) -> i64 {
        self.lower
    }
}

/// Calculates the arithmetic mean of a dataset.
pub fn mean(data: &[i64]) -> Result<f64, SampleError> {
    if data.is_empty() {
        Err(SampleError::EmptySample)
    } else {
        let sum: i128 = data.iter().map(|&v| v as i128).sum();
        Ok(sum as f64 / data.len() as f64)
    }
}

/// Calculates the median of a dataset. Sorts `data` in place.
pub fn median(data: &mut [i64]) -> Result<Median, SampleError> {
    if data.is_empty() {
        Err(SampleError::EmptySample)
    } else {
        data.sort_unstable();
        let n = data.len();
        if n % 2 == 0 {
            Ok(Median { lower: data[n / 2 - 1], upper: data[n / 2] })
        } else {
            Ok(Median { lower: data[n / 2], upper: data[n / 2] })
        }
    }
}

/// `round(mean(data) - 1/2)` with ties going to the even neighbour.
///
/// Evaluated exactly as `round((2 * sum - n) / (2 * n))`, no floats involved.
pub fn mean_adjusted(data: &[i64]) -> Result<i64, SampleError> {
    if data.is_empty() {
        return Err(SampleError::EmptySample);
    }
    let n = data.len() as i128;
    let sum: i128 = data.iter().map(|&v| v as i128).sum();
    Ok(round_half_even(2 * sum - n, 2 * n) as i64)
}

/// Rounds `num / den` to the nearest integer, ties to even. `den` must be positive.
fn round_half_even(num: i128, den: i128) -> i128 {
    let q = num.div_euclid(den);
    let r = num.rem_euclid(den);
    match (2 * r).cmp(&den) {
        std::cmp::Ordering::Less => q,
        std::cmp::Ordering::Greater => q + 1,
        std::cmp::Ordering::Equal => {
            if q % 2 == 0 {
                q
            } else {
                q + 1
            }
        }
    }
}
