//! The candidate-solution record evolved by the optimizer.

use rand::Rng;

/// One candidate solution in the population.
///
/// Genes live in `[0, 1]^n`; objectives are computed by the runner
/// immediately after the genes are created or changed, never supplied by
/// callers. `rank` and `crowding` are assigned by non-dominated sorting and
/// crowding-distance estimation and are only meaningful relative to the
/// cohort they were computed in.
///
/// Domination bookkeeping (counts and dominated-index sets) is deliberately
/// not stored here: it is transient state owned by
/// [`pareto::non_dominated_sort`](crate::pareto::non_dominated_sort).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    /// Decision vector, each entry in `[0, 1]`.
    pub genes: Vec<f64>,

    /// Objective vector, recomputed after every gene change.
    /// `[INFINITY, INFINITY]` until first evaluation.
    pub objectives: [f64; 2],

    /// Index of the Pareto front this individual belongs to (0 = best).
    pub rank: usize,

    /// Crowding distance within this individual's front.
    pub crowding: f64,
}

impl Individual {
    /// Creates an individual with uniformly random genes in `[0, 1]^n`.
    ///
    /// Objectives start at the unevaluated sentinel (`INFINITY`); the
    /// runner evaluates in the same step that creates the individual.
    pub fn random<R: Rng>(num_vars: usize, rng: &mut R) -> Self {
        let genes = (0..num_vars).map(|_| rng.random_range(0.0..1.0)).collect();
        Self::from_genes(genes)
    }

    /// Wraps an offspring gene vector into an unevaluated individual.
    pub fn from_genes(genes: Vec<f64>) -> Self {
        Self {
            genes,
            objectives: [f64::INFINITY; 2],
            rank: 0,
            crowding: 0.0,
        }
    }
}
