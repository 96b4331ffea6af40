//! Random integer sample with alignment cost functions.
//!
//! A [`Sample`] holds the raw draws in generation order together with a
//! compressed value → multiplicity map. Costs are evaluated over the map, so
//! duplicated positions are only visited once.

use std::collections::BTreeMap;
use std::fmt;

use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use serde::Serialize;

use crate::core::error::SampleError;
use crate::core::statistics::{self, Median};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sample {
    items: Vec<i64>,
    #[serde(skip)]
    compressed: BTreeMap<i64, u64>,
    lower_bound: i64,
    upper_bound: i64,
}

/// Outcome of a brute-force scan: lowest cost and the first point reaching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    pub point: i64,
    pub cost: i64,
}

/// The two fuel models under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CostKind {
    /// One unit of fuel per step.
    Linear,
    /// The k-th step costs k units.
    Triangular,
}

impl CostKind {
    pub fn evaluate(self, sample: &Sample, target: i64) -> i64 {
        match self {
            CostKind::Linear => sample.linear_cost(target),
            CostKind::Triangular => sample.triangular_cost(target),
        }
    }

    /// Name of the closed-form statistic claimed to minimize this cost.
    pub fn statistic_name(self) -> &'static str {
        match self {
            CostKind::Linear => "Median",
            CostKind::Triangular => "\"Mean\"",
        }
    }

    pub fn fuel_name(self) -> &'static str {
        match self {
            CostKind::Linear => "linear fuel consumption",
            CostKind::Triangular => "arithmetic-progressive fuel consumption",
        }
    }
}

impl Sample {
    /// Draws `count` uniform integers from `[lo, hi]`.
    pub fn generate<R: Rng + ?Sized>(
        count: usize,
        lo: i64,
        hi: i64,
        rng: &mut R,
    ) -> Result<Self, SampleError> {
        if lo > hi {
            return Err(SampleError::InvertedBounds { lo, hi });
        }
        let uniform = Uniform::new_inclusive(lo, hi);
        let mut sample = Sample::empty(lo, hi);
        for _ in 0..count {
            sample.push(uniform.sample(rng));
        }
        Ok(sample)
    }

    /// Builds a sample from known values, checking each against `[lo, hi]`.
    pub fn from_values(values: &[i64], lo: i64, hi: i64) -> Result<Self, SampleError> {
        if lo > hi {
            return Err(SampleError::InvertedBounds { lo, hi });
        }
        let mut sample = Sample::empty(lo, hi);
        for &value in values {
            if value < lo || value > hi {
                return Err(SampleError::OutOfRange { value, lo, hi });
            }
            sample.push(value);
        }
        Ok(sample)
    }

    fn empty(lo: i64, hi: i64) -> Self {
        Sample {
            items: Vec::new(),
            compressed: BTreeMap::new(),
            lower_bound: lo,
            upper_bound: hi,
        }
    }

    fn push(&mut self, value: i64) {
        self.items.push(value);
        *self.compressed.entry(value).or_insert(0) += 1;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[i64] {
        &self.items
    }

    pub fn compressed(&self) -> &BTreeMap<i64, u64> {
        &self.compressed
    }

    pub fn lower_bound(&self) -> i64 {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> i64 {
        self.upper_bound
    }

    /// Total absolute distance from every value to `target`.
    pub fn linear_cost(&self, target: i64) -> i64 {
        self.compressed
            .iter()
            .map(|(&pos, &count)| (pos - target).abs() * count as i64)
            .sum()
    }

    /// Total `|d * (d - 1) / 2|` with `d = value - target`.
    pub fn triangular_cost(&self, target: i64) -> i64 {
        self.compressed
            .iter()
            .map(|(&pos, &count)| {
                let diff = pos - target;
                // d * (d - 1) is a product of consecutive integers, always even
                let raw = diff * (diff - 1) / 2;
                raw.abs() * count as i64
            })
            .sum()
    }

    pub fn median(&self) -> Result<Median, SampleError> {
        let mut sorted = self.items.clone();
        statistics::median(&mut sorted)
    }

    pub fn mean(&self) -> Result<f64, SampleError> {
        statistics::mean(&self.items)
    }

    /// `round(mean - 1/2)`, ties to even.
    pub fn mean_adjusted(&self) -> Result<i64, SampleError> {
        statistics::mean_adjusted(&self.items)
    }

    /// Scans every integer in `[lower_bound, upper_bound)` and keeps the
    /// first point with the lowest cost.
    pub fn scan_minimum<F>(&self, cost: F) -> Result<ScanResult, SampleError>
    where
        F: Fn(&Sample, i64) -> i64,
    {
        let mut best: Option<ScanResult> = None;
        for point in self.lower_bound..self.upper_bound {
            let value = cost(self, point);
            best = match best {
                Some(b) if b.cost <= value => Some(b),
                _ => Some(ScanResult { point, cost: value }),
            };
        }
        best.ok_or(SampleError::EmptyScanDomain {
            lo: self.lower_bound,
            hi: self.upper_bound,
        })
    }

    /// Lowest cost over the scan domain.
    pub fn brute_force_minimum<F>(&self, cost: F) -> Result<i64, SampleError>
    where
        F: Fn(&Sample, i64) -> i64,
    {
        self.scan_minimum(cost).map(|r| r.cost)
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}
