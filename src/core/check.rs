//! Closed-form vs brute-force comparison for a single sample.

use serde::Serialize;

use crate::core::error::SampleError;
use crate::core::sample::{CostKind, Sample, ScanResult};

/// Result of comparing one closed-form statistic against the scanned optimum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CheckOutcome {
    pub kind: CostKind,
    /// Statistic as computed (the median may be a half-integer).
    pub statistic: f64,
    /// Integer point the cost was evaluated at.
    pub target: i64,
    /// Cost achieved at `target`.
    pub achieved: i64,
    pub optimum: ScanResult,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.achieved == self.optimum.cost
    }
}

/// Verdict for one generated sample.
#[derive(Debug, Clone, Serialize)]
pub struct TestReport {
    pub test: usize,
    pub sample: Sample,
    pub checks: Vec<CheckOutcome>,
}

impl TestReport {
    pub fn passed(&self) -> bool {
        self.checks.iter().all(CheckOutcome::passed)
    }
}

pub fn run_check(sample: &Sample, kind: CostKind) -> Result<CheckOutcome, SampleError> {
    let (statistic, target) = match kind {
        CostKind::Linear => {
            let median = sample.median()?;
            (median.value(), median.alignment_point())
        }
        CostKind::Triangular => {
            let target = sample.mean_adjusted()?;
            (target as f64, target)
        }
    };
    let optimum = sample.scan_minimum(|s, x| kind.evaluate(s, x))?;
    Ok(CheckOutcome {
        kind,
        statistic,
        target,
        achieved: kind.evaluate(sample, target),
        optimum,
    })
}

/// Runs both checks, linear first.
pub fn run_all(test: usize, sample: Sample) -> Result<TestReport, SampleError> {
    let checks = [CostKind::Linear, CostKind::Triangular]
        .into_iter()
        .map(|kind| run_check(&sample, kind))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(TestReport { test, sample, checks })
}
