use std::fmt;

/// Rejected simulation input. Raised before any scheduling state exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    Quantum { value: String },
    ZeroQuantum,
    Arrival { pid: String, value: String },
    Burst { pid: String, value: String },
    ZeroBurst { pid: String },
    // Latest arrival plus total burst does not fit in `Ticks`
    Horizon { pid: String },
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quantum { value } => write!(f, "quantum must be an integer, got {value:?}"),
            Self::ZeroQuantum => write!(f, "quantum must be at least 1"),
            Self::Arrival { pid, value } => write!(
                f,
                "{pid}: arrival time must be a non-negative integer, got {value:?}"
            ),
            Self::Burst { pid, value } => {
                write!(f, "{pid}: burst time must be an integer, got {value:?}")
            }
            Self::ZeroBurst { pid } => write!(f, "{pid}: burst time must be at least 1"),
            Self::Horizon { pid } => write!(
                f,
                "{pid}: schedule would run past the largest representable time"
            ),
        }
    }
}

impl std::error::Error for InvalidInput {}
