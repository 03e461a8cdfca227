//! Ant colony optimization for the 0/1 knapsack problem.
//!
//! Given item weights, item values and a capacity, the colony searches
//! for a subset of items with maximal total value whose total weight
//! fits. The search is approximate and anytime: every run returns the
//! best feasible subset seen within a fixed iteration budget.
//!
//! - [`aco`]: problem model, pheromone table, solution construction and
//!   the colony loop.
//! - [`AcoError`]: input and configuration errors, raised before the
//!   first iteration.
//!
//! # Architecture
//!
//! Built on the U-Engine foundation layer (`u-numflow`) for seeded random
//! number generation. Randomness is injected through [`rand::Rng`], so a
//! fixed seed reproduces a run exactly.

pub mod aco;
mod error;

pub use error::AcoError;
