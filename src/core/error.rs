use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    EmptySample,
    InvertedBounds { lo: i64, hi: i64 },
    EmptyScanDomain { lo: i64, hi: i64 },
    OutOfRange { value: i64, lo: i64, hi: i64 },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::EmptySample => write!(f, "Empty Sample: statistic needs at least one value"),
            SampleError::InvertedBounds { lo, hi } => {
                write!(f, "Inverted Bounds: lower bound {} exceeds upper bound {}", lo, hi)
            }
            SampleError::EmptyScanDomain { lo, hi } => {
                write!(f, "Empty Scan Domain: no alignment point in [{}, {})", lo, hi)
            }
            SampleError::OutOfRange { value, lo, hi } => {
                write!(f, "Out Of Range: {} not in [{}, {}]", value, lo, hi)
            }
        }
    }
}

impl std::error::Error for SampleError {}
