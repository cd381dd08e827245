//! Parent selection strategies.
//!
//! Selection picks the population slots whose solutions enter a mating
//! event. Uniform selection keeps the selection pressure entirely in the
//! replacement step (the classic MGG setup); tournament selection adds
//! pressure at the front.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rand::Rng;

use crate::model::Solution;

/// Strategy for choosing a parent slot.
///
/// Fitness is minimized crate-wide (lower = better).
///
/// # Examples
///
/// ```
/// use binpack_ga::ga::Selection;
///
/// // Uniform draw — replacement alone applies the pressure.
/// let sel = Selection::Uniform;
///
/// // Tournament of 5 (moderate pressure at the selection front).
/// let sel = Selection::Tournament(5);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Uniform random draw over the population.
    Uniform,

    /// Tournament selection: draw `k` slots at random, keep the best.
    ///
    /// Higher `k` = stronger selection pressure; `k = 1` degenerates to
    /// uniform.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Uniform
    }
}

impl Selection {
    /// Selects a parent slot from the population.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<R: Rng>(&self, population: &[Solution], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Uniform => rng.random_range(0..population.len()),
            Selection::Tournament(k) => tournament(population, *k, rng),
        }
    }
}

fn tournament<R: Rng>(population: &[Solution], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = population.len();

    let mut best_index = rng.random_range(0..n);
    for _ in 1..k {
        let index = rng.random_range(0..n);
        if population[index].fitness() < population[best_index].fitness() {
            best_index = index;
        }
    }
    best_index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn make_population(fitnesses: &[f64]) -> Vec<Solution> {
        fitnesses
            .iter()
            .map(|&f| {
                let mut solution = Solution::new(vec![]);
                solution.set_fitness(f);
                solution
            })
            .collect()
    }

    #[test]
    fn test_uniform_is_roughly_uniform() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[Selection::Uniform.select(&pop, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 2000, "expected roughly uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[Selection::Tournament(4).select(&pop, &mut rng)] += 1;
        }
        // Slot 2 (fitness 1.0) should dominate.
        let best_count = counts[2];
        assert!(
            best_count > 6000,
            "expected best to be selected >60% of the time, got {best_count}/{n}"
        );
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            counts[Selection::Tournament(1).select(&pop, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_single_solution() {
        let pop = make_population(&[5.0]);
        let mut rng = create_rng(42);

        assert_eq!(Selection::Uniform.select(&pop, &mut rng), 0);
        assert_eq!(Selection::Tournament(3).select(&pop, &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Solution> = vec![];
        let mut rng = create_rng(42);
        Selection::Uniform.select(&pop, &mut rng);
    }
}
