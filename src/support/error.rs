//! Error types for decision construction, indexing, and value assignment

use std::fmt;

/// Main error type for all decision and architecture operations
///
/// Every fallible operation either succeeds completely or returns one of these
/// variants and leaves the instance exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionError {
    /// Static parameters rejected while building an instance
    ///
    /// Examples:
    /// - A zero alternative count in a combining decision
    /// - Value and alternative vectors of different lengths
    /// - An explicit ordering that is not a permutation
    Construction {
        /// Name of the rejected parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Index argument outside the valid range of the instance
    Bounds {
        /// Which index was out of range (row, column, slot, position, ...)
        axis: &'static str,
        /// The rejected index
        index: usize,
        /// Exclusive upper limit for this axis
        len: usize,
    },

    /// Value argument outside the declared domain of the instance
    Domain {
        /// Name of the rejected value
        parameter: &'static str,
        /// Provided value
        value: String,
        /// Explanation of the violated domain
        reason: String,
    },
}

impl fmt::Display for DecisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Construction {
                parameter,
                value,
                reason,
            } => {
                write!(
                    f,
                    "Invalid construction parameter '{parameter}' = '{value}': {reason}"
                )
            }
            Self::Bounds { axis, index, len } => {
                write!(f, "{axis} index {index} is out of bounds (len: {len})")
            }
            Self::Domain {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Value '{value}' for '{parameter}' is out of domain: {reason}")
            }
        }
    }
}

impl std::error::Error for DecisionError {}

impl DecisionError {
    /// Test for a construction failure
    pub const fn is_construction(&self) -> bool {
        matches!(self, Self::Construction { .. })
    }

    /// Test for an out-of-range index
    pub const fn is_bounds(&self) -> bool {
        matches!(self, Self::Bounds { .. })
    }

    /// Test for an out-of-domain value
    pub const fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }
}

/// Convenience type alias for decision results
pub type Result<T> = std::result::Result<T, DecisionError>;

/// Create a construction error
pub fn construction_error(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> DecisionError {
    DecisionError::Construction {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a domain error
pub fn domain_error(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> DecisionError {
    DecisionError::Domain {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a bounds error
pub const fn bounds_error(axis: &'static str, index: usize, len: usize) -> DecisionError {
    DecisionError::Bounds { axis, index, len }
}

/// Check `index < len`, reporting the offending axis on failure
///
/// # Errors
///
/// Returns [`DecisionError::Bounds`] when `index >= len`
pub const fn check_index(axis: &'static str, index: usize, len: usize) -> Result<usize> {
    if index < len {
        Ok(index)
    } else {
        Err(bounds_error(axis, index, len))
    }
}
