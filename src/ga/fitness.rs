//! Fitness evaluation.
//!
//! The crate minimizes a composite penalty: bin count relative to the
//! theoretical lower bound, plus normalized wasted space, plus normalized
//! overflow. Lower is better everywhere — selection, elitism, and
//! replacement all compare with the same convention. The overflow term is
//! zero for every solution the operators publish (placements are rejected
//! before a bin can overflow) and exists to grade transient states should
//! a repair strategy ever produce them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::instance::Instance;
use crate::model::Solution;

/// Weights of the three penalty terms.
///
/// With the defaults, bin count dominates, wasted space rewards headroom,
/// and overflow — which should never survive repair — is penalized
/// hardest.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessWeights {
    /// Weight of `bin_count / lower_bound`.
    pub bin_count: f64,

    /// Weight of `wasted_space / (capacity · bin_count)`.
    pub wasted_space: f64,

    /// Weight of `overflow / (capacity · bin_count)`.
    pub overflow: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            bin_count: 1.0,
            wasted_space: 0.5,
            overflow: 2.0,
        }
    }
}

/// Scores solutions for one instance.
///
/// Built once per run; captures the capacity and lower bound so scoring
/// a solution is a read-only pass over its bins and can run in parallel
/// across solutions.
#[derive(Debug, Clone)]
pub struct Evaluator {
    capacity: u32,
    lower_bound: usize,
    weights: FitnessWeights,
}

impl Evaluator {
    /// Creates an evaluator for the given instance.
    pub fn new(instance: &Instance, weights: FitnessWeights) -> Self {
        Self {
            capacity: instance.capacity(),
            // an empty instance packs into zero bins; avoid 0/0
            lower_bound: instance.lower_bound().max(1),
            weights,
        }
    }

    /// Computes the penalty of a solution. Lower is better.
    pub fn evaluate(&self, solution: &Solution) -> f64 {
        let bins = solution.bin_count();
        if bins == 0 {
            return 0.0;
        }

        let mut waste: u64 = 0;
        let mut overflow: u64 = 0;
        for bin in solution.bins() {
            if bin.load() <= self.capacity {
                waste += u64::from(self.capacity - bin.load());
            } else {
                overflow += u64::from(bin.load() - self.capacity);
            }
        }

        let norm = f64::from(self.capacity) * bins as f64;
        self.weights.bin_count * (bins as f64 / self.lower_bound as f64)
            + self.weights.wasted_space * (waste as f64 / norm)
            + self.weights.overflow * (overflow as f64 / norm)
    }

    /// Evaluates and stores the fitness on the solution.
    pub fn score(&self, solution: &mut Solution) {
        let fitness = self.evaluate(solution);
        solution.set_fitness(fitness);
    }
}
