//! General-purpose decision variables usable alongside the patterns

/// Bounded integer variable
pub mod integer;

pub use integer::IntegerVariable;
