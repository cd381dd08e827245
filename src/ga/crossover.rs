//! Bin-inheritance crossover with heuristic repair.
//!
//! A child is assembled from whole bins: a random subset of parent 1's
//! bins is copied in, then every parent-2 bin whose items are all still
//! unclaimed, and finally the remainder — every instance item not yet
//! claimed — is re-packed by the configured repair heuristic and
//! appended. Computing the remainder against the full item range is what
//! keeps the operator complete: items of a skipped parent-2 bin are
//! unclaimed and therefore re-packed, never dropped.
//!
//! Inherited bins are deep copies; a parent that stays in the population
//! never shares a bin with the child.
//!
//! # References
//!
//! - Falkenauer & Delchambre (1992), the grouping crossover this
//!   operator follows

use rand::Rng;

use crate::heuristics::RepairHeuristic;
use crate::instance::Instance;
use crate::model::{Bin, Solution};

/// Builds one child from two parents.
///
/// Each parent-1 bin is inherited independently with
/// `inherit_probability`; the subset is deterministic under a seeded RNG.
/// The child is returned unevaluated.
pub fn crossover<R: Rng>(
    instance: &Instance,
    parent1: &Solution,
    parent2: &Solution,
    inherit_probability: f64,
    repair: RepairHeuristic,
    rng: &mut R,
) -> Solution {
    let mut claimed = vec![false; instance.len()];
    let mut bins: Vec<Bin> = Vec::new();

    // Random subset of parent 1's bins, copied verbatim.
    for bin in parent1.bins() {
        if rng.random_bool(inherit_probability) {
            for &item in bin.items() {
                claimed[item] = true;
            }
            bins.push(bin.clone());
        }
    }

    // Parent-2 bins join only when collision-free.
    for bin in parent2.bins() {
        if bin.items().iter().all(|&item| !claimed[item]) {
            for &item in bin.items() {
                claimed[item] = true;
            }
            bins.push(bin.clone());
        }
    }

    // Everything still unclaimed — including the contents of skipped
    // parent-2 bins — gets re-packed.
    let remainder: Vec<usize> = instance
        .item_ids()
        .filter(|&item| !claimed[item])
        .collect();
    bins.extend(repair.pack(instance, remainder));

    let mut child = Solution::new(bins);
    child.prune_empty_bins();
    child
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::init::initial_population;
    use crate::random::create_rng;

    fn instance() -> Instance {
        Instance::new(
            "t",
            100,
            vec![42, 63, 67, 57, 93, 90, 38, 36, 45, 42, 33, 79, 27, 57, 44, 84, 70, 12, 9, 55],
        )
        .unwrap()
    }

    #[test]
    fn test_child_is_complete_and_valid() {
        let instance = instance();
        let mut rng = create_rng(42);
        let parents = initial_population(&instance, 2, &mut rng);

        for _ in 0..100 {
            let child = crossover(
                &instance,
                &parents[0],
                &parents[1],
                0.5,
                RepairHeuristic::FirstFitDecreasing,
                &mut rng,
            );
            assert!(child.validate(&instance).is_ok());
            assert_eq!(child.total_load(), instance.total_weight());
            assert_eq!(child.item_count(), instance.len());
        }
    }

    #[test]
    fn test_randomized_parent_pairs_never_drop_items() {
        let instance = instance();
        let mut rng = create_rng(7);
        let population = initial_population(&instance, 40, &mut rng);

        for round in 0..100 {
            let p1 = &population[round % population.len()];
            let p2 = &population[(round * 7 + 3) % population.len()];
            let child = crossover(
                &instance,
                p1,
                p2,
                0.5,
                RepairHeuristic::BestFit,
                &mut rng,
            );
            assert_eq!(
                child.total_load(),
                instance.total_weight(),
                "child lost or duplicated weight in round {round}"
            );
            assert!(child.validate(&instance).is_ok());
        }
    }

    #[test]
    fn test_inherit_all_reproduces_parent1() {
        // With p = 1.0 every parent-1 bin is claimed first, every
        // parent-2 bin collides, and the remainder is empty.
        let instance = instance();
        let mut rng = create_rng(42);
        let parents = initial_population(&instance, 2, &mut rng);

        let child = crossover(
            &instance,
            &parents[0],
            &parents[1],
            1.0,
            RepairHeuristic::FirstFitDecreasing,
            &mut rng,
        );
        assert_eq!(child.bins(), parents[0].bins());
    }

    #[test]
    fn test_inherit_none_reproduces_parent2() {
        let instance = instance();
        let mut rng = create_rng(42);
        let parents = initial_population(&instance, 2, &mut rng);

        let child = crossover(
            &instance,
            &parents[0],
            &parents[1],
            0.0,
            RepairHeuristic::FirstFitDecreasing,
            &mut rng,
        );
        assert_eq!(child.bins(), parents[1].bins());
    }

    #[test]
    fn test_child_does_not_alias_parent_bins() {
        let instance = instance();
        let mut rng = create_rng(42);
        let parents = initial_population(&instance, 2, &mut rng);
        let parent1_before = parents[0].clone();

        let mut child = crossover(
            &instance,
            &parents[0],
            &parents[1],
            1.0,
            RepairHeuristic::FirstFit,
            &mut rng,
        );
        // Mutating the child must leave the parent untouched.
        child.bins_mut().clear();
        assert_eq!(parents[0].bins(), parent1_before.bins());
    }

    #[test]
    fn test_seeded_crossover_is_deterministic() {
        let instance = instance();
        let mut setup_rng = create_rng(42);
        let parents = initial_population(&instance, 2, &mut setup_rng);

        let a = crossover(
            &instance,
            &parents[0],
            &parents[1],
            0.5,
            RepairHeuristic::BestFitDecreasing,
            &mut create_rng(99),
        );
        let b = crossover(
            &instance,
            &parents[0],
            &parents[1],
            0.5,
            RepairHeuristic::BestFitDecreasing,
            &mut create_rng(99),
        );
        assert_eq!(a.bins(), b.bins());
    }

    #[test]
    fn test_child_starts_unevaluated() {
        let instance = instance();
        let mut rng = create_rng(42);
        let parents = initial_population(&instance, 2, &mut rng);
        let child = crossover(
            &instance,
            &parents[0],
            &parents[1],
            0.5,
            RepairHeuristic::FirstFitDecreasing,
            &mut rng,
        );
        assert!(!child.is_evaluated());
    }
}
