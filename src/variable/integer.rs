use crate::pattern::decision::Variable;
use crate::support::error::{Result, construction_error, domain_error};
use rand::Rng;
use std::fmt;
use tracing::trace;

/// Bounded scalar integer decision, not tied to any pattern
///
/// Holds `lower_bound <= value <= upper_bound` at all times; both bounds are
/// inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "IntegerRecord"))]
pub struct IntegerVariable {
    value: i64,
    lower_bound: i64,
    upper_bound: i64,
}

impl IntegerVariable {
    /// Create a variable in `[lower_bound, upper_bound]` holding `value`
    ///
    /// # Errors
    ///
    /// - Construction error if `lower_bound > upper_bound`
    /// - Domain error if `value` lies outside the bounds
    pub fn new(value: i64, lower_bound: i64, upper_bound: i64) -> Result<Self> {
        if lower_bound > upper_bound {
            return Err(construction_error(
                "bounds",
                &format!("[{lower_bound}, {upper_bound}]"),
                &"lower bound exceeds upper bound",
            ));
        }
        Self::check_bounds(value, lower_bound, upper_bound)?;
        Ok(Self {
            value,
            lower_bound,
            upper_bound,
        })
    }

    /// Current value
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Replace the current value
    ///
    /// # Errors
    ///
    /// Returns a domain error if `value` lies outside the bounds
    pub fn set_value(&mut self, value: i64) -> Result<()> {
        Self::check_bounds(value, self.lower_bound, self.upper_bound)?;
        self.value = value;
        Ok(())
    }

    /// Inclusive lower bound
    pub const fn lower_bound(&self) -> i64 {
        self.lower_bound
    }

    /// Inclusive upper bound
    pub const fn upper_bound(&self) -> i64 {
        self.upper_bound
    }

    fn check_bounds(value: i64, lower_bound: i64, upper_bound: i64) -> Result<()> {
        if (lower_bound..=upper_bound).contains(&value) {
            Ok(())
        } else {
            Err(domain_error(
                "value",
                &value,
                &format!("value out of bounds (min: {lower_bound}, max: {upper_bound})"),
            ))
        }
    }
}

impl Variable for IntegerVariable {
    fn number_of_variables(&self) -> usize {
        1
    }

    /// Uniform draw over the inclusive range
    fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.value = rng.random_range(self.lower_bound..=self.upper_bound);
        trace!(value = self.value, "randomized integer variable");
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct IntegerRecord {
    value: i64,
    lower_bound: i64,
    upper_bound: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<IntegerRecord> for IntegerVariable {
    type Error = crate::support::error::DecisionError;

    fn try_from(record: IntegerRecord) -> Result<Self> {
        Self::new(record.value, record.lower_bound, record.upper_bound)
    }
}

impl fmt::Display for IntegerVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
