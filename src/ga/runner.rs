//! MGG evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete search: initialization →
//! scoring → per-generation mating under the Minimal Generation Gap
//! scheme → termination. One generation selects two parent slots, builds
//! a batch of offspring by crossover and probabilistic mutation, ranks
//! parents and offspring together, and writes the top two back into the
//! parents' slots — the rest of the population is untouched.
//!
//! Every offspring passes a completeness/capacity audit before it may
//! enter the population; a malformed child is discarded and retried,
//! never inserted. Offspring construction and scoring are independent
//! per child (read-only parents, freshly allocated children) and run in
//! parallel under the `parallel` feature, each worker owning a
//! deterministically derived RNG; replacement is applied by the single
//! driver thread.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::Instant;

use log::{debug, warn};
use rand::Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::GaConfig;
use super::crossover::crossover;
use super::fitness::Evaluator;
use super::init::initial_population;
use super::mutation::mutate;
use crate::instance::Instance;
use crate::model::Solution;
use crate::random::create_rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Attempts per offspring slot before falling back to a parent clone.
const OFFSPRING_RETRY_LIMIT: usize = 3;

/// Result of a GA run.
///
/// Contains the best solution found plus statistics about the search.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best solution found during the entire run.
    pub best: Solution,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: f64,

    /// Number of bins of the best solution.
    pub best_bin_count: usize,

    /// Number of generations (mating events) executed.
    pub generations: usize,

    /// Whether the run stopped because of stagnation.
    pub stagnated: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Whether the best solution reaches the theoretical lower bound
    /// `ceil(total_weight / capacity)` — i.e. is provably optimal.
    pub reached_lower_bound: bool,

    /// Best fitness at the end of each generation (index 0 is the
    /// initial population).
    pub fitness_history: Vec<f64>,
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```
/// use binpack_ga::ga::{GaConfig, GaRunner};
/// use binpack_ga::Instance;
///
/// let instance = Instance::new("example", 10, vec![6, 5, 4, 3, 2, 2])?;
/// let config = GaConfig::fast().with_seed(42).with_parallel(false);
/// let result = GaRunner::run(&instance, &config);
/// assert!(result.best.validate(&instance).is_ok());
/// # Ok::<(), binpack_ga::Error>(())
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA on the instance.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(instance: &Instance, config: &GaConfig) -> GaResult {
        Self::run_with_cancel(instance, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the search
    /// stops at the next generation boundary and returns the best
    /// solution found so far. No resource is held across generations, so
    /// cancellation is just "stop issuing new generations".
    pub fn run_with_cancel(
        instance: &Instance,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> GaResult {
        config.validate().expect("invalid GaConfig");

        let evaluator = Evaluator::new(instance, config.weights);
        let master_seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(master_seed);
        let lower_bound = instance.lower_bound();

        // 1. Initialize and score the population
        let mut population = initial_population(instance, config.population_size, &mut rng);
        score_population(&evaluator, &mut population, config.parallel);

        // 2. Track best
        let mut best = find_best(&population).clone();
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(best.fitness());

        let mut stagnation_counter = 0usize;
        let mut generations = 0usize;
        let mut stagnated = false;
        let mut cancelled = false;
        let start = Instant::now();

        // 3. Generational loop
        for generation in 0..config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(AtomicOrdering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if let Some(limit) = config.time_limit_ms {
                if start.elapsed().as_millis() as u64 >= limit {
                    break;
                }
            }
            if best.bin_count() == lower_bound {
                // provably optimal; searching further cannot improve
                break;
            }

            let (slot1, slot2) = select_parents(&population, config, &mut rng);
            let elites = snapshot_elites(&population, config.elite_count);

            // Offspring batch; the seed is drawn on the driver thread so
            // parallel and sequential runs see the same derivation.
            let batch_seed: u64 = rng.random();
            let mut candidates = make_offspring(
                instance,
                &population[slot1],
                &population[slot2],
                config,
                &evaluator,
                batch_seed,
            );

            // Comparison group: offspring plus both parents; the top two
            // take the parents' slots.
            candidates.push(population[slot1].clone());
            candidates.push(population[slot2].clone());
            candidates.sort_by(|a, b| {
                a.fitness()
                    .partial_cmp(&b.fitness())
                    .unwrap_or(Ordering::Equal)
            });
            let mut winners = candidates.into_iter();
            population[slot1] = winners.next().expect("comparison group is non-empty");
            population[slot2] = winners
                .next()
                .expect("comparison group has at least two members");

            reinsert_elites(&mut population, elites);
            generations = generation + 1;

            // 4. Update best and stagnation counter
            let generation_best = find_best(&population);
            if generation_best.fitness() < best.fitness() {
                best = generation_best.clone();
                stagnation_counter = 0;
                debug!(
                    "generation {generation}: best fitness {:.4} ({} bins)",
                    best.fitness(),
                    best.bin_count()
                );
            } else {
                stagnation_counter += 1;
            }
            fitness_history.push(best.fitness());

            if config.stagnation_limit > 0 && stagnation_counter >= config.stagnation_limit {
                stagnated = true;
                break;
            }
        }

        let reached_lower_bound = best.bin_count() == lower_bound;
        GaResult {
            best_fitness: best.fitness(),
            best_bin_count: best.bin_count(),
            best,
            generations,
            stagnated,
            cancelled,
            reached_lower_bound,
            fitness_history,
        }
    }
}

/// Builds and scores one batch of offspring.
///
/// Each child derives its own RNG from `batch_seed` and its slot index,
/// so the batch is reproducible and identical whether it runs
/// sequentially or on worker threads.
fn make_offspring(
    instance: &Instance,
    parent1: &Solution,
    parent2: &Solution,
    config: &GaConfig,
    evaluator: &Evaluator,
    batch_seed: u64,
) -> Vec<Solution> {
    let count = config.offspring_per_mating;

    #[cfg(feature = "parallel")]
    if config.parallel {
        return (0..count)
            .into_par_iter()
            .map(|slot| {
                make_child(
                    instance,
                    parent1,
                    parent2,
                    config,
                    evaluator,
                    batch_seed.wrapping_add(slot as u64),
                )
            })
            .collect();
    }

    (0..count)
        .map(|slot| {
            make_child(
                instance,
                parent1,
                parent2,
                config,
                evaluator,
                batch_seed.wrapping_add(slot as u64),
            )
        })
        .collect()
}

/// Builds one audited, scored child.
///
/// A child that fails the post-operator audit is discarded and rebuilt;
/// after [`OFFSPRING_RETRY_LIMIT`] failures the slot falls back to a
/// clone of parent 1, so corrupted state never enters the population and
/// the run never aborts.
fn make_child(
    instance: &Instance,
    parent1: &Solution,
    parent2: &Solution,
    config: &GaConfig,
    evaluator: &Evaluator,
    seed: u64,
) -> Solution {
    let mut rng = create_rng(seed);

    for attempt in 0..OFFSPRING_RETRY_LIMIT {
        let mut child = crossover(
            instance,
            parent1,
            parent2,
            config.inherit_probability,
            config.crossover_repair,
            &mut rng,
        );
        if rng.random_bool(config.mutation_rate) {
            mutate(
                instance,
                &mut child,
                config.disturb_bins,
                config.mutation_repair,
                &mut rng,
            );
        }

        match child.validate(instance) {
            Ok(()) => {
                evaluator.score(&mut child);
                return child;
            }
            Err(message) => {
                warn!("discarding malformed offspring (attempt {attempt}): {message}");
            }
        }
    }

    parent1.clone()
}

/// Selects two distinct parent slots.
fn select_parents<R: Rng>(
    population: &[Solution],
    config: &GaConfig,
    rng: &mut R,
) -> (usize, usize) {
    let first = config.selection.select(population, rng);
    for _ in 0..8 {
        let second = config.selection.select(population, rng);
        if second != first {
            return (first, second);
        }
    }
    // Strong selection pressure can keep returning the same slot; fall
    // back to a uniform draw over the remaining slots.
    let mut second = rng.random_range(0..population.len() - 1);
    if second >= first {
        second += 1;
    }
    (first, second)
}

/// Clones the `count` best solutions.
fn snapshot_elites(population: &[Solution], count: usize) -> Vec<Solution> {
    if count == 0 {
        return Vec::new();
    }
    let mut indices: Vec<usize> = (0..population.len()).collect();
    indices.sort_by(|&a, &b| {
        population[a]
            .fitness()
            .partial_cmp(&population[b].fitness())
            .unwrap_or(Ordering::Equal)
    });
    indices
        .into_iter()
        .take(count)
        .map(|index| population[index].clone())
        .collect()
}

/// Puts back any elite the replacement step displaced without an equal
/// or better survivor, overwriting the current worst slot.
fn reinsert_elites(population: &mut [Solution], elites: Vec<Solution>) {
    for elite in elites {
        let survived = population
            .iter()
            .any(|solution| solution.fitness() <= elite.fitness());
        if !survived {
            let worst = worst_index(population);
            population[worst] = elite;
        }
    }
}

fn worst_index(population: &[Solution]) -> usize {
    let mut worst = 0;
    for (index, solution) in population.iter().enumerate() {
        if solution.fitness() > population[worst].fitness() {
            worst = index;
        }
    }
    worst
}

/// Scores every solution in place.
fn score_population(evaluator: &Evaluator, population: &mut [Solution], parallel: bool) {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            population
                .par_iter_mut()
                .for_each(|solution| evaluator.score(solution));
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for solution in population.iter_mut() {
        evaluator.score(solution);
    }
}

/// The solution with the lowest fitness.
fn find_best(population: &[Solution]) -> &Solution {
    population
        .iter()
        .min_by(|a, b| {
            a.fitness()
                .partial_cmp(&b.fitness())
                .unwrap_or(Ordering::Equal)
        })
        .expect("population must not be empty")
}
