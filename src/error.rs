use thiserror::Error;

/// Broad category of a contract violation, for callers that only care whether
/// they passed a bad argument or fed in bad data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    DataIntegrity,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PairError {
    #[error("invalid argument: top_n must be at least 1 (got {0})")]
    InvalidTopN(usize),

    #[error("invalid argument: color count must be non-negative (got {0})")]
    NegativeColorCount(i64),

    #[error("data integrity: zone '{0}' appears more than once in the coordinate table")]
    DuplicateZone(String),

    #[error("data integrity: color ramp could not be built: {0}")]
    InvalidRamp(String),
}

impl PairError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PairError::InvalidTopN(_) | PairError::NegativeColorCount(_) => {
                ErrorKind::InvalidArgument
            }
            PairError::DuplicateZone(_) | PairError::InvalidRamp(_) => ErrorKind::DataIntegrity,
        }
    }
}
