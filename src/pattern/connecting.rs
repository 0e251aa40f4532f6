use crate::pattern::decision::{ArchitecturalDecision, DecisionPattern, Variable};
use crate::pattern::matrix::BitMatrix;
use crate::support::error::{Result, domain_error};
use rand::Rng;
use std::fmt;
use tracing::{debug, trace};

/// Graph adjacency over a single set of nodes
///
/// An architecture fragment is the set of edges between the nodes. The graph
/// may be directed or undirected and may or may not allow self-loops.
///
/// Invariants held after every operation:
/// - Undirected: cell `(i, j)` always equals cell `(j, i)`
/// - Loops disallowed: every diagonal cell `(i, i)` is cleared
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ConnectingRecord"))]
pub struct Connecting {
    matrix: BitMatrix,
    is_directed: bool,
    loop_allowed: bool,
}

impl Connecting {
    /// Create a graph with no edges
    ///
    /// # Errors
    ///
    /// Returns a construction error if `node_count²` is too large to store
    pub fn new(node_count: usize, is_directed: bool, loop_allowed: bool) -> Result<Self> {
        let matrix = BitMatrix::new(node_count, node_count)?;
        debug!(
            node_count,
            is_directed, loop_allowed, "created connecting decision"
        );
        Ok(Self {
            matrix,
            is_directed,
            loop_allowed,
        })
    }

    /// Connect node `i` to node `j`
    ///
    /// Directed graphs gain the edge `i -> j` only; undirected graphs gain both
    /// directions in one step. Returns whether `(i, j)` was connected before.
    ///
    /// # Errors
    ///
    /// - Bounds error if either node is out of range
    /// - Domain error if `i == j` and loops are not allowed
    pub fn connect(&mut self, i: usize, j: usize) -> Result<bool> {
        self.write_edge(i, j, true)
    }

    /// Disconnect node `i` from node `j`
    ///
    /// Undirected graphs lose both directions. Returns whether `(i, j)` was
    /// connected before.
    ///
    /// # Errors
    ///
    /// - Bounds error if either node is out of range
    /// - Domain error if `i == j` and loops are not allowed
    pub fn disconnect(&mut self, i: usize, j: usize) -> Result<bool> {
        self.write_edge(i, j, false)
    }

    /// Test whether node `i` is connected to node `j`
    ///
    /// # Errors
    ///
    /// Returns a bounds error if either node is out of range
    pub fn is_connected(&self, i: usize, j: usize) -> Result<bool> {
        self.matrix.get(i, j)
    }

    /// Number of nodes in the graph
    pub const fn node_count(&self) -> usize {
        self.matrix.rows()
    }

    /// Whether edges are directed
    pub const fn is_directed(&self) -> bool {
        self.is_directed
    }

    /// Whether self-loops may be connected
    pub const fn loop_allowed(&self) -> bool {
        self.loop_allowed
    }

    /// Number of edges
    ///
    /// Counts ordered pairs for directed graphs and unordered pairs for
    /// undirected graphs, with each loop counted once.
    pub fn edge_count(&self) -> usize {
        let ones = self.matrix.count_ones();
        if self.is_directed {
            return ones;
        }
        let loops = (0..self.node_count())
            .filter(|&node| self.matrix.get(node, node).unwrap_or(false))
            .count();
        (ones - loops) / 2 + loops
    }

    /// Underlying flat bit matrix
    pub const fn matrix(&self) -> &BitMatrix {
        &self.matrix
    }

    fn write_edge(&mut self, i: usize, j: usize, value: bool) -> Result<bool> {
        // Validate both cells before touching either
        let index = self.matrix.index(i, j)?;
        if i == j && !self.loop_allowed {
            return Err(domain_error(
                "edge",
                &format!("({i}, {j})"),
                &"loops are not allowed",
            ));
        }

        let previous = self.matrix.replace(i, j, value)?;
        if !self.is_directed {
            self.matrix.write(j, i, value);
        }
        trace!(i, j, value, index, "wrote connecting edge");
        Ok(previous)
    }
}

impl Variable for Connecting {
    fn number_of_variables(&self) -> usize {
        1
    }

    /// Resample every edge, then clear the diagonal when loops are disallowed
    ///
    /// Directed graphs flip one coin per ordered pair. Undirected graphs flip
    /// one coin per unordered pair (upper triangle) and mirror it.
    fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let nodes = self.node_count();
        if self.is_directed {
            self.matrix.randomize(rng);
        } else {
            for i in 0..nodes {
                for j in i..nodes {
                    let value = rng.random::<bool>();
                    self.matrix.write(i, j, value);
                    self.matrix.write(j, i, value);
                }
            }
        }

        if !self.loop_allowed {
            for node in 0..nodes {
                self.matrix.write(node, node, false);
            }
        }
        trace!(edges = self.edge_count(), "randomized connecting decision");
    }
}

impl ArchitecturalDecision for Connecting {
    fn pattern(&self) -> DecisionPattern {
        DecisionPattern::Connecting
    }
}

/// Serialized form, checked against the graph invariants before use
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ConnectingRecord {
    matrix: BitMatrix,
    is_directed: bool,
    loop_allowed: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<ConnectingRecord> for Connecting {
    type Error = crate::support::error::DecisionError;

    fn try_from(record: ConnectingRecord) -> Result<Self> {
        use crate::support::error::construction_error;

        let ConnectingRecord {
            matrix,
            is_directed,
            loop_allowed,
        } = record;
        let nodes = matrix.rows();
        if matrix.cols() != nodes {
            return Err(construction_error(
                "matrix",
                &format!("{nodes}x{}", matrix.cols()),
                &"adjacency matrix must be square",
            ));
        }

        for i in 0..nodes {
            if !loop_allowed && matrix.get(i, i)? {
                return Err(construction_error(
                    "matrix",
                    &format!("({i}, {i})"),
                    &"loop present but loops are not allowed",
                ));
            }
            if is_directed {
                continue;
            }
            for j in (i + 1)..nodes {
                if matrix.get(i, j)? != matrix.get(j, i)? {
                    return Err(construction_error(
                        "matrix",
                        &format!("({i}, {j})"),
                        &"undirected graph must be symmetric",
                    ));
                }
            }
        }

        Ok(Self {
            matrix,
            is_directed,
            loop_allowed,
        })
    }
}

impl fmt::Display for Connecting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.matrix, f)
    }
}
