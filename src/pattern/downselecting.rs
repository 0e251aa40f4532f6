use crate::pattern::decision::{ArchitecturalDecision, DecisionPattern, Variable};
use crate::pattern::matrix::write_bits;
use crate::support::error::{Result, bounds_error, check_index, construction_error};
use bitvec::prelude::*;
use rand::Rng;
use std::fmt;
use tracing::{debug, trace};

/// Subset selection over a set of entities
///
/// Each entity is either selected or not, so the decision is a binary vector.
///
/// Constraint records name groups of entities that must never be selected
/// together. They are stored for an external feasibility evaluator only:
/// [`set`](Self::set) and [`randomize`](Variable::randomize) never consult
/// them and may produce selections that violate a record.
/// [`violated_constraints`](Self::violated_constraints) reports violations
/// without changing anything.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "DownSelectingRecord"))]
pub struct DownSelecting {
    selection: BitVec,
    constraints: Vec<BitVec>,
}

impl DownSelecting {
    /// Create a decision with every entity unselected and no constraints
    pub fn new(entity_count: usize) -> Self {
        debug!(entity_count, "created downselecting decision");
        Self {
            selection: bitvec![0; entity_count],
            constraints: Vec::new(),
        }
    }

    /// Create a decision with every entity unselected and advisory constraints
    ///
    /// Each record lists entity indices that must not all be selected at once.
    ///
    /// # Errors
    ///
    /// Returns a construction error if a record names an entity outside
    /// `[0, entity_count)`
    pub fn with_constraints(entity_count: usize, constraints: &[Vec<usize>]) -> Result<Self> {
        let mut records = Vec::with_capacity(constraints.len());
        for (record_index, record) in constraints.iter().enumerate() {
            let mut bits = bitvec![0; entity_count];
            for &entity in record {
                if entity >= entity_count {
                    return Err(construction_error(
                        "constraints",
                        &format!("{record:?}"),
                        &format!(
                            "record {record_index} names entity {entity} but only {entity_count} entities exist"
                        ),
                    ));
                }
                bits.set(entity, true);
            }
            records.push(bits);
        }

        let mut decision = Self::new(entity_count);
        decision.constraints = records;
        Ok(decision)
    }

    /// Create a decision mirroring a binary vector bit-for-bit
    ///
    /// The entity count is the full length of `bits`.
    pub fn from_bits(bits: &BitSlice) -> Self {
        let mut decision = Self::new(bits.len());
        decision.selection.copy_from_bitslice(bits);
        decision
    }

    /// Create a decision mirroring a boolean slice element-for-element
    pub fn from_bools(selected: &[bool]) -> Self {
        let mut decision = Self::new(selected.len());
        for (index, &value) in selected.iter().enumerate() {
            decision.selection.set(index, value);
        }
        decision
    }

    /// Select or unselect entity `i`
    ///
    /// Constraint records are not consulted.
    ///
    /// # Errors
    ///
    /// Returns a bounds error if `i >= entity_count`
    pub fn set(&mut self, i: usize, selected: bool) -> Result<()> {
        check_index("entity", i, self.selection.len())?;
        self.selection.set(i, selected);
        Ok(())
    }

    /// Test whether entity `i` is selected
    ///
    /// # Errors
    ///
    /// Returns a bounds error if `i >= entity_count`
    pub fn get(&self, i: usize) -> Result<bool> {
        self.selection
            .get(i)
            .map(|bit| *bit)
            .ok_or_else(|| bounds_error("entity", i, self.selection.len()))
    }

    /// Number of entities available to choose from
    pub fn entity_count(&self) -> usize {
        self.selection.len()
    }

    /// Indices of selected entities, ascending
    pub fn selected(&self) -> Vec<usize> {
        self.selection.iter_ones().collect()
    }

    /// Number of selected entities
    pub fn selected_count(&self) -> usize {
        self.selection.count_ones()
    }

    /// Selection as a bit vector
    pub fn as_bitslice(&self) -> &BitSlice {
        &self.selection
    }

    /// Constraint records as entity index lists
    pub fn constraints(&self) -> Vec<Vec<usize>> {
        self.constraints
            .iter()
            .map(|record| record.iter_ones().collect())
            .collect()
    }

    /// Indices of constraint records whose entities are all selected
    ///
    /// Empty records are never reported.
    pub fn violated_constraints(&self) -> Vec<usize> {
        self.constraints
            .iter()
            .enumerate()
            .filter(|(_, record)| {
                record.any() && record.iter_ones().all(|entity| self.get(entity).unwrap_or(false))
            })
            .map(|(index, _)| index)
            .collect()
    }
}

impl Variable for DownSelecting {
    /// One slot per entity
    fn number_of_variables(&self) -> usize {
        self.selection.len()
    }

    /// Independent fair coin flip per entity, ignoring constraint records
    fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for index in 0..self.selection.len() {
            self.selection.set(index, rng.random::<bool>());
        }
        trace!(
            selected = self.selection.count_ones(),
            entities = self.selection.len(),
            "randomized downselecting decision"
        );
    }
}

impl ArchitecturalDecision for DownSelecting {
    fn pattern(&self) -> DecisionPattern {
        DecisionPattern::DownSelecting
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct DownSelectingRecord {
    selection: BitVec,
    constraints: Vec<BitVec>,
}

#[cfg(feature = "serde")]
impl TryFrom<DownSelectingRecord> for DownSelecting {
    type Error = crate::support::error::DecisionError;

    fn try_from(record: DownSelectingRecord) -> Result<Self> {
        let entity_count = record.selection.len();
        if let Some(index) = record
            .constraints
            .iter()
            .position(|bits| bits.len() != entity_count)
        {
            return Err(construction_error(
                "constraints",
                &index,
                &format!("every record must cover exactly {entity_count} entities"),
            ));
        }

        let mut decision = Self::from_bits(&record.selection);
        decision.constraints = record.constraints;
        Ok(decision)
    }
}

impl fmt::Display for DownSelecting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bits(f, &self.selection)
    }
}
