use crate::pattern::decision::{ArchitecturalDecision, DecisionPattern, Variable};
use crate::support::error::{Result, bounds_error, check_index, construction_error};
use bitvec::prelude::*;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use tracing::{debug, trace};

/// Total ordering over a fixed set of items
///
/// Typically schedules `N` items from first to last. Position `p` holds item
/// `items[p]`, and the items are always exactly `0..N` with no repeats.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PermutingRecord"))]
pub struct Permuting {
    items: Vec<usize>,
}

impl Permuting {
    /// Create the identity ordering `0, 1, ..., length - 1`
    pub fn new(length: usize) -> Self {
        debug!(length, "created permuting decision");
        Self {
            items: (0..length).collect(),
        }
    }

    /// Create an explicit ordering
    ///
    /// # Errors
    ///
    /// Returns a construction error unless `items` contains every value in
    /// `0..items.len()` exactly once
    pub fn from_items(items: &[usize]) -> Result<Self> {
        let mut seen = bitvec![0; items.len()];
        for (position, &item) in items.iter().enumerate() {
            let fresh = item < items.len() && !seen.replace(item, true);
            if !fresh {
                return Err(construction_error(
                    "items",
                    &format!("{items:?}"),
                    &format!(
                        "item {item} at position {position} is repeated or outside 0..{}",
                        items.len()
                    ),
                ));
            }
        }

        debug!(length = items.len(), "created permuting decision");
        Ok(Self {
            items: items.to_vec(),
        })
    }

    /// Exchange the items at positions `i` and `j`
    ///
    /// # Errors
    ///
    /// Returns a bounds error if either position is outside `[0, length)`
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        check_index("position", i, self.items.len())?;
        check_index("position", j, self.items.len())?;
        self.items.swap(i, j);
        Ok(())
    }

    /// Item at `position`
    ///
    /// # Errors
    ///
    /// Returns a bounds error if `position >= length`
    pub fn get(&self, position: usize) -> Result<usize> {
        self.items
            .get(position)
            .copied()
            .ok_or_else(|| bounds_error("position", position, self.items.len()))
    }

    /// Position currently holding `item`
    ///
    /// # Errors
    ///
    /// Returns a bounds error if `item >= length`
    pub fn position_of(&self, item: usize) -> Result<usize> {
        check_index("item", item, self.items.len())?;
        self.items
            .iter()
            .position(|&held| held == item)
            .ok_or_else(|| bounds_error("item", item, self.items.len()))
    }

    /// Items in position order
    pub fn items(&self) -> &[usize] {
        &self.items
    }

    /// Number of items in the ordering
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Test if the ordering has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Variable for Permuting {
    fn number_of_variables(&self) -> usize {
        1
    }

    /// Uniformly random ordering via Fisher-Yates shuffle
    fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.items.shuffle(rng);
        trace!(items = ?self.items, "randomized permuting decision");
    }
}

impl ArchitecturalDecision for Permuting {
    fn pattern(&self) -> DecisionPattern {
        DecisionPattern::Permuting
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PermutingRecord {
    items: Vec<usize>,
}

#[cfg(feature = "serde")]
impl TryFrom<PermutingRecord> for Permuting {
    type Error = crate::support::error::DecisionError;

    fn try_from(record: PermutingRecord) -> Result<Self> {
        Self::from_items(&record.items)
    }
}

impl fmt::Display for Permuting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.items)
    }
}
