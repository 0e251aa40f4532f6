use crate::pattern::decision::{ArchitecturalDecision, DecisionPattern, Variable};
use crate::pattern::matrix::BitMatrix;
use crate::support::error::Result;
use rand::Rng;
use std::fmt;
use tracing::{debug, trace};

/// Bipartite assignment between a left set of `m` elements and a right set of `n`
///
/// Each left element may be assigned to any subset of the right elements. The
/// relation is one-directional: assigning `(i, j)` says nothing about `(j, i)`.
///
/// Cell `(i, j)` is bit `i * n + j` of the underlying sequence.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assigning {
    matrix: BitMatrix,
}

impl Assigning {
    /// Create an assignment matrix with nothing assigned
    ///
    /// # Errors
    ///
    /// Returns a construction error if `m_count * n_count` is too large to store
    pub fn new(m_count: usize, n_count: usize) -> Result<Self> {
        let matrix = BitMatrix::new(m_count, n_count)?;
        debug!(m_count, n_count, "created assigning decision");
        Ok(Self { matrix })
    }

    /// Assign left element `i` to right element `j`
    ///
    /// Returns whether the cell was already assigned.
    ///
    /// # Errors
    ///
    /// Returns a bounds error if `i >= m_count` or `j >= n_count`
    pub fn connect(&mut self, i: usize, j: usize) -> Result<bool> {
        self.matrix.replace(i, j, true)
    }

    /// Remove the assignment of left element `i` to right element `j`
    ///
    /// Returns whether the cell was assigned before the call.
    ///
    /// # Errors
    ///
    /// Returns a bounds error if `i >= m_count` or `j >= n_count`
    pub fn disconnect(&mut self, i: usize, j: usize) -> Result<bool> {
        self.matrix.replace(i, j, false)
    }

    /// Test whether left element `i` is assigned to right element `j`
    ///
    /// # Errors
    ///
    /// Returns a bounds error if `i >= m_count` or `j >= n_count`
    pub fn is_connected(&self, i: usize, j: usize) -> Result<bool> {
        self.matrix.get(i, j)
    }

    /// Right elements currently assigned to left element `i`, ascending
    ///
    /// # Errors
    ///
    /// Returns a bounds error if `i >= m_count`
    pub fn assigned_to(&self, i: usize) -> Result<Vec<usize>> {
        Ok(self.matrix.row(i)?.iter_ones().collect())
    }

    /// Number of elements on the left side
    pub const fn number_of_lhs(&self) -> usize {
        self.matrix.rows()
    }

    /// Number of elements on the right side
    pub const fn number_of_rhs(&self) -> usize {
        self.matrix.cols()
    }

    /// Number of assigned cells
    pub fn assignment_count(&self) -> usize {
        self.matrix.count_ones()
    }

    /// Underlying flat bit matrix
    pub const fn matrix(&self) -> &BitMatrix {
        &self.matrix
    }
}

impl Variable for Assigning {
    fn number_of_variables(&self) -> usize {
        1
    }

    /// Independent fair coin flip per cell
    fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.matrix.randomize(rng);
        trace!(
            assigned = self.matrix.count_ones(),
            cells = self.matrix.len(),
            "randomized assigning decision"
        );
    }
}

impl ArchitecturalDecision for Assigning {
    fn pattern(&self) -> DecisionPattern {
        DecisionPattern::Assigning
    }
}

impl fmt::Display for Assigning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.matrix, f)
    }
}
