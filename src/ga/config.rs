//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.
//! Every operator probability and strategy choice is a parameter here —
//! the original design scattered them across near-duplicate experimental
//! variants; this crate treats them as one tunable surface.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::fitness::FitnessWeights;
use super::selection::Selection;
use crate::heuristics::RepairHeuristic;

/// Configuration for the grouping genetic algorithm.
///
/// Controls population size, parent selection, operator strategies and
/// rates, elitism, termination conditions, and parallelism.
///
/// # Defaults
///
/// ```
/// use binpack_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.offspring_per_mating, 20);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use binpack_ga::ga::{GaConfig, Selection};
/// use binpack_ga::heuristics::RepairHeuristic;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_selection(Selection::Tournament(5))
///     .with_crossover_repair(RepairHeuristic::BestFit)
///     .with_mutation_rate(0.2);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of solutions in the population.
    ///
    /// MGG replaces only two slots per generation, so larger populations
    /// mainly add diversity, not per-generation cost. Typical range:
    /// 50–500.
    pub population_size: usize,

    /// Maximum number of generations (mating events) before termination.
    pub max_generations: usize,

    /// Number of offspring produced per mating event.
    pub offspring_per_mating: usize,

    /// Strategy for choosing the two parent slots.
    pub selection: Selection,

    /// Probability that each parent-1 bin is inherited by the child
    /// during crossover (0.0–1.0).
    pub inherit_probability: f64,

    /// Heuristic used to re-pack the remainder set after crossover.
    pub crossover_repair: RepairHeuristic,

    /// Placement rule used to redistribute extracted items after
    /// mutation.
    pub mutation_repair: RepairHeuristic,

    /// Probability of mutating each offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of bins a single mutation empties and redistributes.
    /// Clamped to the solution's bin count at application time.
    pub disturb_bins: usize,

    /// Number of best solutions guaranteed to survive each generation.
    ///
    /// Set to 0 to disable elitism.
    pub elite_count: usize,

    /// Number of generations with no improvement before stopping.
    ///
    /// Set to 0 to disable stagnation-based termination.
    pub stagnation_limit: usize,

    /// Weights of the composite fitness penalty.
    pub weights: FitnessWeights,

    /// Whether to build and score offspring in parallel (effective with
    /// the `parallel` feature).
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked at the start of each generation, so the actual runtime may
    /// exceed the limit by one generation's worth of work. `None`
    /// disables time-based termination (the default).
    pub time_limit_ms: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 500,
            offspring_per_mating: 20,
            selection: Selection::default(),
            inherit_probability: 0.5,
            crossover_repair: RepairHeuristic::FirstFitDecreasing,
            mutation_repair: RepairHeuristic::BestFit,
            mutation_rate: 0.1,
            disturb_bins: 2,
            elite_count: 1,
            stagnation_limit: 50,
            weights: FitnessWeights::default(),
            parallel: true,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the number of offspring per mating event.
    pub fn with_offspring_per_mating(mut self, n: usize) -> Self {
        self.offspring_per_mating = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the bin-inheritance probability of crossover.
    pub fn with_inherit_probability(mut self, p: f64) -> Self {
        self.inherit_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover repair heuristic.
    pub fn with_crossover_repair(mut self, repair: RepairHeuristic) -> Self {
        self.crossover_repair = repair;
        self
    }

    /// Sets the mutation repair heuristic.
    pub fn with_mutation_repair(mut self, repair: RepairHeuristic) -> Self {
        self.mutation_repair = repair;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of bins a mutation disturbs.
    pub fn with_disturb_bins(mut self, k: usize) -> Self {
        self.disturb_bins = k;
        self
    }

    /// Sets the number of elites (0 to disable elitism).
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the fitness weights.
    pub fn with_weights(mut self, weights: FitnessWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Enables or disables parallel offspring generation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Convenience builder for tournament selection.
    ///
    /// Equivalent to `.with_selection(Selection::Tournament(k))`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Preset for quick runs: small population, few generations.
    ///
    /// - Population: 50, Generations: 200, Offspring: 10
    /// - Stagnation limit: 20, Time limit: 10s
    pub fn fast() -> Self {
        Self {
            population_size: 50,
            max_generations: 200,
            offspring_per_mating: 10,
            stagnation_limit: 20,
            time_limit_ms: Some(10_000),
            ..Self::default()
        }
    }

    /// Preset for balanced runs: moderate population and generations.
    ///
    /// - Population: 100, Generations: 1000, Offspring: 20
    /// - Stagnation limit: 50, Time limit: 30s
    pub fn balanced() -> Self {
        Self {
            population_size: 100,
            max_generations: 1000,
            offspring_per_mating: 20,
            stagnation_limit: 50,
            time_limit_ms: Some(30_000),
            ..Self::default()
        }
    }

    /// Preset for quality runs: large population, long search.
    ///
    /// - Population: 150, Generations: 2000, Offspring: 20
    /// - Stagnation limit: 100, Time limit: 60s
    pub fn quality() -> Self {
        Self {
            population_size: 150,
            max_generations: 2000,
            offspring_per_mating: 20,
            stagnation_limit: 100,
            time_limit_ms: Some(60_000),
            ..Self::default()
        }
    }

    /// Automatically selects a preset from the instance item count.
    ///
    /// - `item_count < 50` → [`fast()`](Self::fast)
    /// - `50 ≤ item_count < 200` → [`balanced()`](Self::balanced)
    /// - `item_count ≥ 200` → [`quality()`](Self::quality)
    pub fn auto_select(item_count: usize) -> Self {
        if item_count < 50 {
            Self::fast()
        } else if item_count < 200 {
            Self::balanced()
        } else {
            Self::quality()
        }
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        if self.offspring_per_mating == 0 {
            return Err("offspring_per_mating must be at least 1".into());
        }
        if self.disturb_bins == 0 {
            return Err("disturb_bins must be at least 1".into());
        }
        if self.elite_count >= self.population_size {
            return Err("elite_count must be smaller than population_size".into());
        }
        if !(0.0..=1.0).contains(&self.inherit_probability) {
            return Err("inherit_probability must be in [0, 1]".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err("mutation_rate must be in [0, 1]".into());
        }
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive or None".into());
        }
        Ok(())
    }
}
