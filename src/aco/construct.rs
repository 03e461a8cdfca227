//! Probabilistic construction of a single ant's candidate.

use super::pheromone::PheromoneTable;
use super::types::{Candidate, Decision, KnapsackProblem};
use rand::Rng;

/// Added to the normalizing sum so that two zero scores do not divide
/// by zero. Such an item is then always excluded.
pub const NORMALIZATION_EPSILON: f64 = 1e-10;

/// Builds one candidate by walking the items in a random order.
///
/// For every item that still fits, the unnormalized scores are
///
/// ```text
/// exclude = tau[i, Exclude]^alpha * 1^beta
/// include = tau[i, Include]^alpha * density[i]^beta
/// ```
///
/// and the item is packed with probability `include / (exclude + include + eps)`.
/// An infinite include score against a finite exclude score packs the item.
/// An item that would overflow the remaining capacity is always excluded,
/// so the result never exceeds the capacity.
pub fn construct_candidate<R: Rng>(
    problem: &KnapsackProblem,
    pheromone: &PheromoneTable,
    alpha: f64,
    beta: f64,
    rng: &mut R,
) -> Candidate {
    let n = problem.len();
    let mut decisions = vec![false; n];
    let mut current_weight = 0.0;

    let mut order: Vec<usize> = (0..n).collect();
    u_numflow::random::shuffle(&mut order, rng);

    for i in order {
        let (exclude, include) = if current_weight + problem.weight(i) <= problem.capacity() {
            (
                pheromone.get(i, Decision::Exclude).powf(alpha),
                pheromone.get(i, Decision::Include).powf(alpha) * problem.density(i).powf(beta),
            )
        } else {
            (1.0, 0.0)
        };

        if rng.random_range(0.0..1.0) < include_probability(exclude, include) {
            decisions[i] = true;
            current_weight += problem.weight(i);
        }
    }

    // weight was accumulated in visiting order; evaluate re-sums by index
    problem.evaluate_unchecked(decisions)
}

/// `include / (exclude + include + eps)`, evaluated as a ratio so that
/// scores overflowing to infinity still yield a probability in `[0, 1]`.
fn include_probability(exclude: f64, include: f64) -> f64 {
    if include <= 0.0 {
        return 0.0;
    }
    match (exclude.is_infinite(), include.is_infinite()) {
        (true, true) => 0.5,
        (false, true) => 1.0,
        (true, false) => 0.0,
        (false, false) => 1.0 / (1.0 + exclude / include + NORMALIZATION_EPSILON / include),
    }
}
