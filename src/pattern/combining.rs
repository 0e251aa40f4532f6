use crate::pattern::decision::{ArchitecturalDecision, DecisionPattern, Variable};
use crate::support::error::{Result, bounds_error, construction_error, domain_error};
use rand::Rng;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// A row of independent bounded-choice selectors
///
/// Slot `i` holds a zero-indexed alternative in `[0, alternative_counts[i])`.
/// The alternative counts are fixed at construction and shared between copies.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CombiningRecord"))]
pub struct Combining {
    alternative_counts: Arc<[usize]>,
    values: Vec<usize>,
}

impl Combining {
    /// Create selectors with alternative 0 chosen in every slot
    ///
    /// # Errors
    ///
    /// Returns a construction error if any alternative count is zero
    pub fn new(alternative_counts: &[usize]) -> Result<Self> {
        if let Some(slot) = alternative_counts.iter().position(|&count| count == 0) {
            return Err(construction_error(
                "alternative_counts",
                &format!("{alternative_counts:?}"),
                &format!("slot {slot} has no alternatives; every count must be positive"),
            ));
        }

        debug!(
            slots = alternative_counts.len(),
            "created combining decision"
        );
        Ok(Self {
            alternative_counts: Arc::from(alternative_counts),
            values: vec![0; alternative_counts.len()],
        })
    }

    /// Create selectors with explicit initial values
    ///
    /// # Errors
    ///
    /// - Construction error if any alternative count is zero or the two
    ///   slices differ in length
    /// - Domain error if a value is not below its slot's alternative count
    pub fn with_values(alternative_counts: &[usize], values: &[usize]) -> Result<Self> {
        let mut combining = Self::new(alternative_counts)?;
        if alternative_counts.len() != values.len() {
            return Err(construction_error(
                "values",
                &format!("{values:?}"),
                &format!(
                    "expected one value per slot ({} slots, {} values)",
                    alternative_counts.len(),
                    values.len()
                ),
            ));
        }

        for (slot, (&count, &value)) in alternative_counts.iter().zip(values).enumerate() {
            Self::check_value(slot, count, value)?;
        }
        combining.values.copy_from_slice(values);
        Ok(combining)
    }

    /// Choose `value` for the slot at `index`
    ///
    /// # Errors
    ///
    /// - Bounds error if `index` is not a slot
    /// - Domain error if `value` is not below the slot's alternative count
    pub fn set_value(&mut self, index: usize, value: usize) -> Result<()> {
        let count = self.number_of_alternatives(index)?;
        Self::check_value(index, count, value)?;
        let slot = self
            .values
            .get_mut(index)
            .ok_or_else(|| bounds_error("slot", index, self.alternative_counts.len()))?;
        *slot = value;
        Ok(())
    }

    /// Alternative currently chosen at `index`
    ///
    /// # Errors
    ///
    /// Returns a bounds error if `index` is not a slot
    pub fn value(&self, index: usize) -> Result<usize> {
        self.values
            .get(index)
            .copied()
            .ok_or_else(|| bounds_error("slot", index, self.values.len()))
    }

    /// Number of alternatives available at `index`
    ///
    /// # Errors
    ///
    /// Returns a bounds error if `index` is not a slot
    pub fn number_of_alternatives(&self, index: usize) -> Result<usize> {
        self.alternative_counts
            .get(index)
            .copied()
            .ok_or_else(|| bounds_error("slot", index, self.alternative_counts.len()))
    }

    /// All chosen alternatives in slot order
    pub fn values(&self) -> &[usize] {
        &self.values
    }

    /// All alternative counts in slot order
    pub fn alternative_counts(&self) -> &[usize] {
        &self.alternative_counts
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Test if there are no slots
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn check_value(slot: usize, count: usize, value: usize) -> Result<()> {
        if value < count {
            Ok(())
        } else {
            Err(domain_error(
                "value",
                &value,
                &format!("slot {slot} has {count} alternatives (valid values 0..{count})"),
            ))
        }
    }
}

impl Variable for Combining {
    fn number_of_variables(&self) -> usize {
        1
    }

    /// Draw each slot uniformly from its own alternative count
    fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for (value, &count) in self.values.iter_mut().zip(self.alternative_counts.iter()) {
            *value = rng.random_range(0..count);
        }
        trace!(values = ?self.values, "randomized combining decision");
    }
}

impl ArchitecturalDecision for Combining {
    fn pattern(&self) -> DecisionPattern {
        DecisionPattern::Combining
    }
}

/// Serialized form, rebuilt through [`Combining::with_values`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CombiningRecord {
    alternative_counts: Vec<usize>,
    values: Vec<usize>,
}

#[cfg(feature = "serde")]
impl TryFrom<CombiningRecord> for Combining {
    type Error = crate::support::error::DecisionError;

    fn try_from(record: CombiningRecord) -> Result<Self> {
        Self::with_values(&record.alternative_counts, &record.values)
    }
}

impl fmt::Display for Combining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.values)
    }
}
