//! Candidate solutions assembled from decisions

/// Tagged union over every decision kind an architecture can hold
pub mod decision;
/// Architecture entity with objectives, constraints and feasibility
pub mod solution;

pub use decision::Decision;
pub use solution::Architecture;
