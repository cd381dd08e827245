//! Population initialization.
//!
//! Seeds diversity with a mix of construction strategies: two
//! deterministic size-descending packings (Best-Fit, then First-Fit —
//! the strongest single-shot constructions) and the remainder from
//! uniformly shuffled item orders, alternating First-Fit and Best-Fit.
//! Every produced solution is a complete, capacity-respecting packing;
//! none is discarded for using too many bins.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::heuristics::{best_fit, first_fit, sort_decreasing};
use crate::instance::Instance;
use crate::model::Solution;

/// Builds `size` complete solutions for the instance.
pub fn initial_population<R: Rng>(
    instance: &Instance,
    size: usize,
    rng: &mut R,
) -> Vec<Solution> {
    let mut population = Vec::with_capacity(size);
    let mut order: Vec<usize> = instance.item_ids().collect();

    sort_decreasing(instance, &mut order);
    if population.len() < size {
        population.push(Solution::new(best_fit(instance, &order)));
    }
    if population.len() < size {
        population.push(Solution::new(first_fit(instance, &order)));
    }

    while population.len() < size {
        order.shuffle(rng);
        let bins = if population.len() % 2 == 0 {
            first_fit(instance, &order)
        } else {
            best_fit(instance, &order)
        };
        population.push(Solution::new(bins));
    }

    population
}
