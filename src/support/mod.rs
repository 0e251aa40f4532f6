//! Shared support code
//!
//! This module contains functionality used by every encoding:
//! - Error taxonomy and result alias
//! - Encoding constants and seeded random sources

/// Encoding constants and random source defaults
pub mod configuration;
/// Error types and helper constructors
pub mod error;

pub use configuration::seeded_rng;
pub use error::{DecisionError, Result};
