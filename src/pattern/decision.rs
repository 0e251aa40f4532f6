//! Pattern tags and the capabilities shared by every decision encoding

use rand::Rng;
use std::fmt;
use std::hash::Hash;

/// The five canonical architectural decision patterns
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecisionPattern {
    /// Bipartite relation between a left set and a right set
    Assigning,
    /// Independent bounded-choice selectors
    Combining,
    /// Adjacency relation over one set of nodes
    Connecting,
    /// Subset selection over a set of entities
    DownSelecting,
    /// Total ordering over a fixed set of items
    Permuting,
}

impl DecisionPattern {
    /// Every pattern in declaration order
    pub const ALL: [Self; 5] = [
        Self::Assigning,
        Self::Combining,
        Self::Connecting,
        Self::DownSelecting,
        Self::Permuting,
    ];

    /// Upper-case pattern name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Assigning => "ASSIGNING",
            Self::Combining => "COMBINING",
            Self::Connecting => "CONNECTING",
            Self::DownSelecting => "DOWNSELECTING",
            Self::Permuting => "PERMUTING",
        }
    }
}

impl fmt::Display for DecisionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Variable contract consumed by an external optimization runtime
///
/// Equality and hashing are value-based. `Display` is the human-readable form
/// of the current value.
pub trait Variable: Clone + fmt::Debug + fmt::Display + Eq + Hash {
    /// Number of independent scalar slots this variable represents
    fn number_of_variables(&self) -> usize;

    /// Resample the current value in place from `rng`
    ///
    /// Structural parameters (sizes, bounds, flags) never change.
    fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R);

    /// Deep, independent copy
    #[must_use]
    fn copy(&self) -> Self {
        self.clone()
    }
}

/// A variable encoded by one of the architectural decision patterns
pub trait ArchitecturalDecision: Variable {
    /// The pattern this decision is encoded with
    fn pattern(&self) -> DecisionPattern;
}
