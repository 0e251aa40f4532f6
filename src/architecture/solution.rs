//! Composite candidate solution aggregating architectural decisions

use crate::architecture::decision::Decision;
use crate::pattern::Variable;
use crate::support::configuration::DECISION_SEPARATOR;
use crate::support::error::{Result, bounds_error, domain_error};
use rand::Rng;
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::{debug, trace};

/// A full candidate solution: an ordered set of decisions plus objective and
/// constraint values
///
/// The decision sequence is fixed in length and order once constructed; only
/// the values inside each decision may change. Objective and constraint values
/// start at `0.0` and are filled in by an external evaluator.
///
/// Identity is the decision sequence alone. Two architectures holding equal
/// decisions in the same order are equal regardless of their objective or
/// constraint values, and the same choices in a different order are not equal.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Architecture {
    decisions: Box<[Decision]>,
    objectives: Vec<f64>,
    constraints: Vec<f64>,
}

impl Architecture {
    /// Create an architecture with `objective_count` objectives and no constraints
    pub fn new(decisions: impl IntoIterator<Item = Decision>, objective_count: usize) -> Self {
        Self::with_constraints(decisions, objective_count, 0)
    }

    /// Create an architecture with objective and constraint slots
    pub fn with_constraints(
        decisions: impl IntoIterator<Item = Decision>,
        objective_count: usize,
        constraint_count: usize,
    ) -> Self {
        let decisions: Box<[Decision]> = decisions.into_iter().collect();
        debug!(
            decisions = decisions.len(),
            objective_count, constraint_count, "created architecture"
        );
        Self {
            decisions,
            objectives: vec![0.0; objective_count],
            constraints: vec![0.0; constraint_count],
        }
    }

    /// Test whether every constraint value is at most zero
    ///
    /// Positive values measure violation. No constraints means feasible.
    pub fn is_feasible(&self) -> bool {
        self.constraints.iter().all(|&value| value <= 0.0)
    }

    /// Deep copy, keeping objective and constraint values
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Randomize every decision in order
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for decision in self.decisions.iter_mut() {
            decision.randomize(rng);
        }
        trace!(decisions = self.decisions.len(), "randomized architecture");
    }

    /// Decisions in order
    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    /// Decision at `index`
    ///
    /// # Errors
    ///
    /// Returns a bounds error if `index` is not a decision slot
    pub fn decision(&self, index: usize) -> Result<&Decision> {
        self.decisions
            .get(index)
            .ok_or_else(|| bounds_error("decision", index, self.decisions.len()))
    }

    /// Mutable access to the values inside the decision at `index`
    ///
    /// # Errors
    ///
    /// Returns a bounds error if `index` is not a decision slot
    pub fn decision_mut(&mut self, index: usize) -> Result<&mut Decision> {
        let len = self.decisions.len();
        self.decisions
            .get_mut(index)
            .ok_or_else(|| bounds_error("decision", index, len))
    }

    /// Number of decisions
    pub fn number_of_decisions(&self) -> usize {
        self.decisions.len()
    }

    /// Total scalar slots across every decision
    pub fn number_of_variables(&self) -> usize {
        self.decisions
            .iter()
            .map(Variable::number_of_variables)
            .sum()
    }

    /// Number of objectives
    pub fn number_of_objectives(&self) -> usize {
        self.objectives.len()
    }

    /// Number of constraints
    pub fn number_of_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Objective values in order
    pub fn objectives(&self) -> &[f64] {
        &self.objectives
    }

    /// Objective value at `index`
    ///
    /// # Errors
    ///
    /// Returns a bounds error if `index` is not an objective slot
    pub fn objective(&self, index: usize) -> Result<f64> {
        read_slot(&self.objectives, "objective", index)
    }

    /// Set the objective value at `index`
    ///
    /// # Errors
    ///
    /// Returns a bounds error if `index` is not an objective slot
    pub fn set_objective(&mut self, index: usize, value: f64) -> Result<()> {
        write_slot(&mut self.objectives, "objective", index, value)
    }

    /// Replace every objective value at once
    ///
    /// # Errors
    ///
    /// Returns a domain error if `values` does not have one entry per objective
    pub fn set_objectives(&mut self, values: &[f64]) -> Result<()> {
        write_all(&mut self.objectives, "objectives", values)
    }

    /// Constraint values in order
    pub fn constraints(&self) -> &[f64] {
        &self.constraints
    }

    /// Constraint value at `index`
    ///
    /// # Errors
    ///
    /// Returns a bounds error if `index` is not a constraint slot
    pub fn constraint(&self, index: usize) -> Result<f64> {
        read_slot(&self.constraints, "constraint", index)
    }

    /// Set the constraint value at `index`
    ///
    /// # Errors
    ///
    /// Returns a bounds error if `index` is not a constraint slot
    pub fn set_constraint(&mut self, index: usize, value: f64) -> Result<()> {
        write_slot(&mut self.constraints, "constraint", index, value)
    }

    /// Replace every constraint value at once
    ///
    /// # Errors
    ///
    /// Returns a domain error if `values` does not have one entry per constraint
    pub fn set_constraints(&mut self, values: &[f64]) -> Result<()> {
        write_all(&mut self.constraints, "constraints", values)
    }
}

fn read_slot(slots: &[f64], axis: &'static str, index: usize) -> Result<f64> {
    slots
        .get(index)
        .copied()
        .ok_or_else(|| bounds_error(axis, index, slots.len()))
}

fn write_slot(slots: &mut [f64], axis: &'static str, index: usize, value: f64) -> Result<()> {
    let len = slots.len();
    let slot = slots
        .get_mut(index)
        .ok_or_else(|| bounds_error(axis, index, len))?;
    *slot = value;
    Ok(())
}

fn write_all(slots: &mut [f64], parameter: &'static str, values: &[f64]) -> Result<()> {
    if slots.len() != values.len() {
        return Err(domain_error(
            parameter,
            &format!("{values:?}"),
            &format!("expected {} values, got {}", slots.len(), values.len()),
        ));
    }
    slots.copy_from_slice(values);
    Ok(())
}

impl PartialEq for Architecture {
    fn eq(&self, other: &Self) -> bool {
        self.decisions == other.decisions
    }
}

impl Eq for Architecture {}

impl Hash for Architecture {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.decisions.hash(state);
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, decision) in self.decisions.iter().enumerate() {
            if index > 0 {
                f.write_str(DECISION_SEPARATOR)?;
            }
            fmt::Display::fmt(decision, f)?;
        }
        Ok(())
    }
}
