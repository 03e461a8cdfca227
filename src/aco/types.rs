//! Problem model and candidate representation.

use crate::error::AcoError;

/// Per-item choice made by an ant.
///
/// The discriminant doubles as the column index into the pheromone table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decision {
    /// Leave the item out of the knapsack.
    Exclude = 0,
    /// Put the item into the knapsack.
    Include = 1,
}

impl Decision {
    /// Both decisions, in table-column order.
    pub const ALL: [Decision; 2] = [Decision::Exclude, Decision::Include];

    /// Column index in the pheromone table.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl From<bool> for Decision {
    fn from(include: bool) -> Self {
        if include {
            Decision::Include
        } else {
            Decision::Exclude
        }
    }
}

/// One complete include/exclude assignment over all items.
///
/// `total_weight` and `total_value` are derived from `decisions` by
/// [`KnapsackProblem::evaluate`] and summed in item-index order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// `decisions[i]` is `true` when item `i` is packed.
    pub decisions: Vec<bool>,
    /// Sum of weights of the packed items.
    pub total_weight: f64,
    /// Sum of values of the packed items.
    pub total_value: f64,
}

impl Candidate {
    /// The empty knapsack over `n` items.
    pub fn empty(n: usize) -> Self {
        Self {
            decisions: vec![false; n],
            total_weight: 0.0,
            total_value: 0.0,
        }
    }

    /// Decision taken for item `i`.
    #[inline]
    pub fn decision(&self, i: usize) -> Decision {
        Decision::from(self.decisions[i])
    }

    /// Decisions as a 0/1 vector.
    pub fn bits(&self) -> Vec<u8> {
        self.decisions.iter().map(|&d| u8::from(d)).collect()
    }

    /// Indices of the packed items, ascending.
    pub fn selected_items(&self) -> Vec<usize> {
        self.decisions
            .iter()
            .enumerate()
            .filter_map(|(i, &d)| d.then_some(i))
            .collect()
    }
}

/// A 0/1 knapsack instance.
///
/// Immutable after construction. The value density `value / weight` of
/// every item is computed once here and reused by every ant.
///
/// # Examples
///
/// ```
/// use u_colony::aco::KnapsackProblem;
///
/// let problem = KnapsackProblem::new(vec![10.0, 20.0], vec![60.0, 100.0], 25.0).unwrap();
/// assert_eq!(problem.len(), 2);
/// assert!((problem.density(0) - 6.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct KnapsackProblem {
    weights: Vec<f64>,
    values: Vec<f64>,
    density: Vec<f64>,
    capacity: f64,
}

impl KnapsackProblem {
    /// Builds an instance, rejecting malformed input.
    ///
    /// # Errors
    ///
    /// [`AcoError::InvalidInput`] when the lengths differ, a weight is not
    /// strictly positive, a value is negative, the capacity is negative,
    /// or any number is NaN or infinite.
    pub fn new(weights: Vec<f64>, values: Vec<f64>, capacity: f64) -> Result<Self, AcoError> {
        if weights.len() != values.len() {
            return Err(AcoError::InvalidInput(format!(
                "weights ({}) and values ({}) must have the same length",
                weights.len(),
                values.len()
            )));
        }
        if !capacity.is_finite() || capacity < 0.0 {
            return Err(AcoError::InvalidInput(format!(
                "capacity must be finite and non-negative, got {capacity}"
            )));
        }
        for (i, (&w, &v)) in weights.iter().zip(values.iter()).enumerate() {
            if !w.is_finite() || w <= 0.0 {
                return Err(AcoError::InvalidInput(format!(
                    "weight of item {i} must be finite and positive, got {w}"
                )));
            }
            if !v.is_finite() || v < 0.0 {
                return Err(AcoError::InvalidInput(format!(
                    "value of item {i} must be finite and non-negative, got {v}"
                )));
            }
        }

        let density = weights.iter().zip(values.iter()).map(|(w, v)| v / w).collect();

        Ok(Self {
            weights,
            values,
            density,
            capacity,
        })
    }

    /// Number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the instance has no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    #[inline]
    pub fn weight(&self, i: usize) -> f64 {
        self.weights[i]
    }

    #[inline]
    pub fn value(&self, i: usize) -> f64 {
        self.values[i]
    }

    /// Value per unit of weight for item `i`.
    #[inline]
    pub fn density(&self, i: usize) -> f64 {
        self.density[i]
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Totals a decision vector into a [`Candidate`].
    ///
    /// # Errors
    ///
    /// [`AcoError::InvalidInput`] if `decisions.len() != self.len()`.
    pub fn evaluate(&self, decisions: Vec<bool>) -> Result<Candidate, AcoError> {
        if decisions.len() != self.len() {
            return Err(AcoError::InvalidInput(format!(
                "decision vector has {} entries, instance has {} items",
                decisions.len(),
                self.len()
            )));
        }
        Ok(self.evaluate_unchecked(decisions))
    }

    /// Totals are summed in item-index order. An ant accumulates weight in
    /// its visiting order instead, so with fractional weights a subset it
    /// accepted as fitting can total a few ulps over capacity here and
    /// score zero.
    pub(crate) fn evaluate_unchecked(&self, decisions: Vec<bool>) -> Candidate {
        let (total_weight, total_value) = decisions
            .iter()
            .enumerate()
            .filter(|(_, &d)| d)
            .fold((0.0, 0.0), |(w, v), (i, _)| {
                (w + self.weights[i], v + self.values[i])
            });
        Candidate {
            decisions,
            total_weight,
            total_value,
        }
    }

    /// Total value if the candidate fits, otherwise `0.0`.
    ///
    /// Overweight candidates are discounted entirely rather than
    /// partially penalized.
    #[inline]
    pub fn fitness(&self, candidate: &Candidate) -> f64 {
        if candidate.total_weight > self.capacity {
            0.0
        } else {
            candidate.total_value
        }
    }
}
