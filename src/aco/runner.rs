//! Colony loop execution.
//!
//! [`Colony`] owns the mutable state of one run (pheromone table, best
//! record, iteration counter). [`AcoRunner`] drives a colony from
//! construction to completion and packages the outcome.

use super::config::AcoConfig;
use super::construct::construct_candidate;
use super::pheromone::PheromoneTable;
use super::types::{Candidate, KnapsackProblem};
use crate::error::AcoError;
use rand::Rng;
use std::time::{Duration, Instant};
use u_numflow::random::create_rng;

/// Lifecycle of a [`Colony`]. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColonyState {
    /// Created, no iteration performed yet.
    NotStarted,
    /// At least one iteration performed, budget not yet exhausted.
    Running,
    /// `max_iterations` reached.
    Completed,
}

/// The best candidate seen during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct BestSolution {
    pub candidate: Candidate,
    pub fitness: f64,
    pub weight: f64,
    /// 1-based iteration that produced it; 0 for the initial empty knapsack.
    pub iteration: usize,
}

impl BestSolution {
    fn empty(n: usize) -> Self {
        Self {
            candidate: Candidate::empty(n),
            fitness: 0.0,
            weight: 0.0,
            iteration: 0,
        }
    }
}

/// Result of an ACO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// Best candidate found.
    pub best: Candidate,

    /// Fitness (total value) of the best candidate.
    pub best_value: f64,

    /// Total weight of the best candidate.
    pub best_weight: f64,

    /// Iteration at which the best candidate was found (0 if no ant beat
    /// the empty knapsack).
    pub best_iteration: usize,

    /// Iterations executed.
    pub iterations: usize,

    /// Wall-clock duration of the run.
    pub elapsed: Duration,

    /// Best value before the first iteration and after each iteration.
    pub value_history: Vec<f64>,
}

impl AcoResult {
    /// Best decisions as a 0/1 vector.
    pub fn best_bits(&self) -> Vec<u8> {
        self.best.bits()
    }

    /// Elapsed wall-clock time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// State of a single optimization run.
///
/// Each [`step`](Colony::step) performs one full iteration: construct
/// `num_ants` candidates, score them, update the best record, then
/// evaporate and reinforce the pheromone table.
///
/// ```
/// use u_colony::aco::{AcoConfig, Colony, ColonyState, KnapsackProblem};
/// use u_numflow::random::create_rng;
///
/// let problem = KnapsackProblem::new(vec![2.0, 3.0], vec![3.0, 4.0], 4.0).unwrap();
/// let config = AcoConfig::default().with_max_iterations(3);
/// let mut colony = Colony::new(&problem, &config).unwrap();
/// let mut rng = create_rng(1);
///
/// while colony.step(&mut rng).unwrap() {}
/// assert_eq!(colony.state(), ColonyState::Completed);
/// assert_eq!(colony.iteration(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Colony<'a> {
    problem: &'a KnapsackProblem,
    config: &'a AcoConfig,
    pheromone: PheromoneTable,
    best: BestSolution,
    iteration: usize,
    state: ColonyState,
    value_history: Vec<f64>,
}

impl<'a> Colony<'a> {
    /// Creates a colony with a uniform pheromone table.
    ///
    /// # Errors
    ///
    /// [`AcoError::InvalidConfig`] if the configuration does not validate.
    pub fn new(problem: &'a KnapsackProblem, config: &'a AcoConfig) -> Result<Self, AcoError> {
        config.validate()?;
        let pheromone = PheromoneTable::new(problem.len(), config.initial_pheromone)?;
        let best = BestSolution::empty(problem.len());
        let mut value_history = Vec::with_capacity(config.max_iterations + 1);
        value_history.push(best.fitness);

        Ok(Self {
            problem,
            config,
            pheromone,
            best,
            iteration: 0,
            state: ColonyState::NotStarted,
            value_history,
        })
    }

    pub fn state(&self) -> ColonyState {
        self.state
    }

    /// Iterations performed so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn best(&self) -> &BestSolution {
        &self.best
    }

    pub fn pheromone(&self) -> &PheromoneTable {
        &self.pheromone
    }

    /// Global best after each iteration, preceded by the initial value.
    pub fn value_history(&self) -> &[f64] {
        &self.value_history
    }

    /// Performs one iteration.
    ///
    /// Returns `Ok(false)` without doing any work once the iteration
    /// budget is exhausted; the colony is then [`ColonyState::Completed`].
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> Result<bool, AcoError> {
        if self.iteration >= self.config.max_iterations {
            self.state = ColonyState::Completed;
            return Ok(false);
        }
        self.state = ColonyState::Running;
        self.iteration += 1;

        // 1. Construct
        let candidates = self.construct_batch(rng);

        // 2. Score
        let fitnesses: Vec<f64> = candidates.iter().map(|c| self.problem.fitness(c)).collect();

        // 3. Track best
        let mut iteration_best = 0.0f64;
        for (candidate, &fitness) in candidates.iter().zip(&fitnesses) {
            iteration_best = iteration_best.max(fitness);
            if fitness > self.best.fitness {
                self.best = BestSolution {
                    candidate: candidate.clone(),
                    fitness,
                    weight: candidate.total_weight,
                    iteration: self.iteration,
                };
                tracing::debug!(
                    iteration = self.iteration,
                    value = fitness,
                    weight = candidate.total_weight,
                    "new best candidate"
                );
            }
        }
        self.value_history.push(self.best.fitness);

        // 4. Update trails
        self.pheromone.evaporate(self.config.evaporation_rate)?;
        self.pheromone
            .reinforce(&candidates, &fitnesses, self.config.deposit_constant)?;

        tracing::debug!(
            iteration = self.iteration,
            iteration_best,
            best = self.best.fitness,
            "colony iteration"
        );

        if self.iteration >= self.config.max_iterations {
            self.state = ColonyState::Completed;
        }
        Ok(true)
    }

    fn construct_batch<R: Rng>(&self, rng: &mut R) -> Vec<Candidate> {
        #[cfg(feature = "parallel")]
        {
            if self.config.parallel {
                return self.construct_batch_parallel(rng);
            }
        }

        (0..self.config.num_ants)
            .map(|_| {
                construct_candidate(
                    self.problem,
                    &self.pheromone,
                    self.config.alpha,
                    self.config.beta,
                    rng,
                )
            })
            .collect()
    }

    /// Each ant gets its own generator, seeded in order from `rng`, so the
    /// batch does not depend on thread scheduling.
    #[cfg(feature = "parallel")]
    fn construct_batch_parallel<R: Rng>(&self, rng: &mut R) -> Vec<Candidate> {
        use rayon::prelude::*;

        let seeds: Vec<u64> = (0..self.config.num_ants).map(|_| rng.random()).collect();
        let problem = self.problem;
        let pheromone = &self.pheromone;
        let (alpha, beta) = (self.config.alpha, self.config.beta);

        seeds
            .into_par_iter()
            .map(|seed| {
                let mut ant_rng = create_rng(seed);
                construct_candidate(problem, pheromone, alpha, beta, &mut ant_rng)
            })
            .collect()
    }

    fn into_result(self, elapsed: Duration) -> AcoResult {
        AcoResult {
            best_value: self.best.fitness,
            best_weight: self.best.weight,
            best_iteration: self.best.iteration,
            best: self.best.candidate,
            iterations: self.iteration,
            elapsed,
            value_history: self.value_history,
        }
    }
}

/// Executes the knapsack ant colony.
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the colony with a generator seeded from `config.seed`
    /// (random when `None`).
    ///
    /// # Errors
    ///
    /// [`AcoError::InvalidConfig`] if the configuration does not validate.
    pub fn run(problem: &KnapsackProblem, config: &AcoConfig) -> Result<AcoResult, AcoError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs the colony drawing all randomness from `rng`.
    pub fn run_with_rng<R: Rng>(
        problem: &KnapsackProblem,
        config: &AcoConfig,
        rng: &mut R,
    ) -> Result<AcoResult, AcoError> {
        let start = Instant::now();
        let mut colony = Colony::new(problem, config)?;
        while colony.step(rng)? {}
        let result = colony.into_result(start.elapsed());

        tracing::info!(
            items = problem.len(),
            iterations = result.iterations,
            best_value = result.best_value,
            best_weight = result.best_weight,
            elapsed_secs = result.elapsed_secs(),
            "colony completed"
        );
        Ok(result)
    }

    /// Builds the instance from raw arrays and runs it.
    ///
    /// # Errors
    ///
    /// [`AcoError::InvalidInput`] for a malformed instance,
    /// [`AcoError::InvalidConfig`] for a bad configuration.
    pub fn solve(
        weights: Vec<f64>,
        values: Vec<f64>,
        capacity: f64,
        config: &AcoConfig,
    ) -> Result<AcoResult, AcoError> {
        let problem = KnapsackProblem::new(weights, values, capacity)?;
        Self::run(&problem, config)
    }
}
