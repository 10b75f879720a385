//! Binary tournament selection on (rank, crowding distance).
//!
//! NSGA-II's crowded-comparison order: lower Pareto rank wins; within the
//! same rank, the individual in the sparser region (higher crowding
//! distance) wins.

use crate::individual::Individual;
use rand::Rng;

/// Selects one parent index by binary tournament.
///
/// Draws two individuals uniformly at random with replacement. The
/// contender replaces the incumbent only if it is strictly better under
/// the crowded-comparison order; on a full tie the incumbent (first draw)
/// is kept, which makes the rule deterministic under a fixed seed.
///
/// # Panics
///
/// Panics if `population` is empty.
pub fn binary_tournament<R: Rng>(population: &[Individual], rng: &mut R) -> usize {
    assert!(!population.is_empty(), "cannot select from empty population");

    let n = population.len();
    let incumbent = rng.random_range(0..n);
    let contender = rng.random_range(0..n);

    if crowded_compare_better(&population[contender], &population[incumbent]) {
        contender
    } else {
        incumbent
    }
}

/// Crowded-comparison order: is `a` strictly better than `b`?
fn crowded_compare_better(a: &Individual, b: &Individual) -> bool {
    if a.rank != b.rank {
        return a.rank < b.rank;
    }
    a.crowding > b.crowding
}
