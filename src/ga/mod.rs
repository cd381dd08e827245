//! Grouping genetic algorithm for bin packing.
//!
//! The search works directly on groups: a chromosome is a set of bins,
//! crossover transmits whole bins between parents, and destructive
//! operators are followed by a heuristic repair step that re-packs any
//! displaced items. Replacement uses the Minimal Generation Gap scheme,
//! which mates one parent pair per generation and writes the two best of
//! {parents, offspring} back into the parents' slots.
//!
//! # Key Types
//!
//! - [`GaConfig`]: algorithm parameters (population, operators,
//!   termination) with presets
//! - [`Selection`]: parent selection strategy (uniform, tournament)
//! - [`FitnessWeights`] / [`Evaluator`]: composite penalty scoring
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`GaResult`]: best solution found plus run statistics
//!
//! # Submodules
//!
//! - [`crossover`]: bin-inheritance recombination with repair
//! - [`mutation`]: bin-disturbance perturbation with repair
//! - [`init`]: mixed-strategy population seeding
//!
//! # References
//!
//! - Falkenauer (1996), *A Hybrid Grouping Genetic Algorithm for Bin
//!   Packing*
//! - Satoh, Yamamura & Kobayashi (1996), *Minimal Generation Gap Model
//!   for GAs Considering Both Exploration and Exploitation*

mod config;
pub mod crossover;
mod fitness;
pub mod init;
pub mod mutation;
mod runner;
mod selection;

pub use config::GaConfig;
pub use fitness::{Evaluator, FitnessWeights};
pub use runner::{GaResult, GaRunner};
pub use selection::Selection;
