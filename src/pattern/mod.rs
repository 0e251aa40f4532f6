//! Architectural decision patterns
//!
//! Each pattern encodes one class of combinatorial design choice:
//! - Assigning: bipartite relation between two sets
//! - Combining: independent bounded selectors
//! - Connecting: directed or undirected graph adjacency
//! - Down-selecting: subset selection with advisory constraints
//! - Permuting: total ordering over a fixed item set

/// Bipartite assignment encoding
pub mod assigning;
/// Bounded-choice selector encoding
pub mod combining;
/// Graph adjacency encoding
pub mod connecting;
/// Pattern tags and shared variable capabilities
pub mod decision;
/// Subset selection encoding
pub mod downselecting;
/// Flat row-major bit matrix backing the relation encodings
pub mod matrix;
/// Total ordering encoding
pub mod permuting;

pub use assigning::Assigning;
pub use combining::Combining;
pub use connecting::Connecting;
pub use decision::{ArchitecturalDecision, DecisionPattern, Variable};
pub use downselecting::DownSelecting;
pub use matrix::BitMatrix;
pub use permuting::Permuting;
