//! Architectural decision patterns for encoding system design spaces
//!
//! Five canonical encodings (assigning, combining, connecting, down-selecting,
//! permuting) represent combinatorial design choices as variables an external
//! multi-objective search can copy, randomize and compare. An [`Architecture`]
//! aggregates an ordered sequence of decisions with objective and constraint
//! values into one candidate solution.
//!
//! Randomness is always supplied by the caller through a `rand::Rng`, so
//! sampling is reproducible under a fixed seed.

#![forbid(unsafe_code)]

/// Candidate solutions assembled from decisions
pub mod architecture;
/// The five decision-encoding patterns and their shared capabilities
pub mod pattern;
/// Error handling and configuration shared across the crate
pub mod support;
/// General-purpose variables usable alongside the patterns
pub mod variable;

pub use architecture::{Architecture, Decision};
pub use pattern::{
    ArchitecturalDecision, Assigning, Combining, Connecting, DecisionPattern, DownSelecting,
    Permuting, Variable,
};
pub use support::error::{DecisionError, Result};
pub use variable::IntegerVariable;
