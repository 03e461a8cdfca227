//! Per-item, per-decision pheromone table.

use super::types::{Candidate, Decision};
use crate::error::AcoError;

/// Lowest value any table entry may take.
///
/// Repeated evaporation can underflow to zero, which would permanently
/// rule out a decision.
pub const PHEROMONE_FLOOR: f64 = 1e-300;

/// Learned desirability of each `(item, decision)` pair.
///
/// Stored row-major as `n × 2`, one row per item with the
/// [`Decision::Exclude`] column first. All entries stay strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneTable {
    trails: Vec<[f64; 2]>,
}

impl PheromoneTable {
    /// Creates a table for `n` items with every entry set to `initial`.
    ///
    /// # Errors
    ///
    /// [`AcoError::InvalidConfig`] if `initial` is not finite and positive.
    pub fn new(n: usize, initial: f64) -> Result<Self, AcoError> {
        if !initial.is_finite() || initial <= 0.0 {
            return Err(AcoError::InvalidConfig(format!(
                "initial pheromone must be finite and positive, got {initial}"
            )));
        }
        Ok(Self {
            trails: vec![[initial; 2]; n],
        })
    }

    /// Number of items (rows).
    pub fn len(&self) -> usize {
        self.trails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }

    #[inline]
    pub fn get(&self, item: usize, decision: Decision) -> f64 {
        self.trails[item][decision.index()]
    }

    /// Iterates `[exclude, include]` rows in item order.
    pub fn iter(&self) -> impl Iterator<Item = &[f64; 2]> {
        self.trails.iter()
    }

    /// Multiplies every entry by `1 - rate`.
    ///
    /// # Errors
    ///
    /// [`AcoError::InvalidConfig`] if `rate` is not in `[0, 1)`.
    pub fn evaporate(&mut self, rate: f64) -> Result<(), AcoError> {
        if !(0.0..1.0).contains(&rate) {
            return Err(AcoError::InvalidConfig(format!(
                "evaporation rate must be in [0, 1), got {rate}"
            )));
        }
        let keep = 1.0 - rate;
        for row in &mut self.trails {
            for tau in row.iter_mut() {
                *tau = (*tau * keep).max(PHEROMONE_FLOOR);
            }
        }
        Ok(())
    }

    /// Deposits `deposit / fitness` on every decision of every candidate
    /// with positive fitness.
    ///
    /// The deposit is inversely proportional to fitness: a low-value
    /// feasible candidate marks its path more strongly than a high-value
    /// one. Candidates with zero fitness contribute nothing.
    ///
    /// # Errors
    ///
    /// [`AcoError::InvalidInput`] if `candidates` and `fitnesses` differ in
    /// length. The table is left untouched.
    pub fn reinforce(
        &mut self,
        candidates: &[Candidate],
        fitnesses: &[f64],
        deposit: f64,
    ) -> Result<(), AcoError> {
        if candidates.len() != fitnesses.len() {
            return Err(AcoError::InvalidInput(format!(
                "{} candidates but {} fitness values",
                candidates.len(),
                fitnesses.len()
            )));
        }
        for (candidate, &fitness) in candidates.iter().zip(fitnesses) {
            if fitness <= 0.0 {
                continue;
            }
            let amount = deposit / fitness;
            for (row, &included) in self.trails.iter_mut().zip(&candidate.decisions) {
                row[Decision::from(included).index()] += amount;
            }
        }
        Ok(())
    }
}
