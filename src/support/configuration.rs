//! Encoding constants and random source defaults

use rand::{SeedableRng, rngs::StdRng};

// Safety limit to prevent excessive memory allocation
/// Maximum number of cells in an assigning or connecting bit matrix
pub const MAX_MATRIX_CELLS: usize = 1 << 28;

/// Separator placed between decisions when rendering an architecture
pub const DECISION_SEPARATOR: &str = "::";

// Bit rendering used by every boolean encoding
/// Character for a set bit
pub const SELECTED_CHAR: char = '1';
/// Character for a cleared bit
pub const UNSELECTED_CHAR: char = '0';

/// Fixed seed for reproducible sampling
pub const DEFAULT_SEED: u64 = 42;

/// Create a deterministic random source for `randomize` calls
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
