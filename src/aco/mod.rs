//! Ant Colony Optimization (ACO) for the 0/1 knapsack problem.
//!
//! Each ant walks the items in a random order and decides, item by item,
//! whether to pack it. The decision is sampled from a two-outcome
//! distribution mixing learned pheromone trails with the item's value
//! density. Items that no longer fit are always skipped, so every
//! candidate is feasible by construction.
//!
//! After all ants of an iteration are scored, the trails evaporate and
//! every feasible candidate deposits `deposit_constant / fitness` on the
//! decisions it took.
//!
//! # Key Types
//!
//! - [`KnapsackProblem`]: validated instance with precomputed densities
//! - [`PheromoneTable`]: per-item, per-[`Decision`] trail levels
//! - [`Colony`]: state of one run, advanced one iteration at a time
//! - [`AcoRunner`]: drives a colony to completion and returns an [`AcoResult`]
//!
//! # Examples
//!
//! ```
//! use u_colony::aco::{AcoConfig, AcoRunner};
//!
//! let config = AcoConfig::default().with_seed(42);
//! let result = AcoRunner::solve(
//!     vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0],
//!     vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0],
//!     20.0,
//!     &config,
//! )
//! .unwrap();
//! assert!(result.best_weight <= 20.0);
//! ```
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Leguizamon & Michalewicz (1999), "A New Version of Ant System for
//!   Subset Problems"

mod config;
mod construct;
mod pheromone;
mod runner;
mod types;

pub use config::AcoConfig;
pub use construct::{construct_candidate, NORMALIZATION_EPSILON};
pub use pheromone::{PheromoneTable, PHEROMONE_FLOOR};
pub use runner::{AcoResult, AcoRunner, BestSolution, Colony, ColonyState};
pub use types::{Candidate, Decision, KnapsackProblem};
