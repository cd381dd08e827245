//! Evolutionary search core for the one-dimensional Bin Packing Problem.
//!
//! Given a multiset of positive integer item sizes and a fixed bin
//! capacity, the goal is to partition all items into the fewest possible
//! bins such that no bin's load exceeds the capacity. This crate provides
//! a grouping genetic algorithm for that problem:
//!
//! - **Solutions are sets of bins**, not item permutations. Crossover
//!   inherits whole bins from both parents and repairs the leftover items
//!   with a packing heuristic; mutation empties a few bins and
//!   redistributes their contents.
//! - **Replacement follows Minimal Generation Gap (MGG)**: each generation
//!   mates two parents, ranks parents and offspring together, and writes
//!   the top two back into the parents' population slots. Most of the
//!   population survives each generation unchanged.
//! - **Packing heuristics** (First-Fit, Best-Fit, and their
//!   size-descending variants) double as construction and repair
//!   subroutines and are exposed in [`heuristics`].
//!
//! # Key Types
//!
//! - [`Instance`]: the problem — capacity plus item sizes, validated on
//!   construction
//! - [`Bin`] / [`Solution`]: a capacity-bounded group of items / a full
//!   packing with a cached fitness score
//! - [`ga::GaConfig`]: tunable parameters (population size, operators,
//!   termination)
//! - [`ga::GaRunner`]: executes the evolutionary loop and returns a
//!   [`ga::GaResult`]
//!
//! # Example
//!
//! ```
//! use binpack_ga::ga::{GaConfig, GaRunner};
//! use binpack_ga::Instance;
//!
//! let instance = Instance::new("example", 10, vec![6, 5, 4, 3, 2, 2])?;
//! let config = GaConfig::fast().with_seed(42).with_parallel(false);
//! let result = GaRunner::run(&instance, &config);
//! assert_eq!(result.best_bin_count, instance.lower_bound());
//! # Ok::<(), binpack_ga::Error>(())
//! ```
//!
//! # References
//!
//! - Falkenauer & Delchambre (1992), *A Genetic Algorithm for Bin Packing
//!   and Line Balancing*
//! - Satoh, Yamamura & Kobayashi (1996), *Minimal Generation Gap Model for
//!   GAs Considering Both Exploration and Exploitation*
//! - Martello & Toth (1990), *Knapsack Problems: Algorithms and Computer
//!   Implementations* (lower bounds for BPP)

pub mod error;
pub mod ga;
pub mod heuristics;
pub mod instance;
pub mod model;
pub mod random;

pub use error::{Error, Result};
pub use instance::Instance;
pub use model::{Bin, Solution};
