//! The NSGA-II generational loop.
//!
//! [`NsgaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → crowding assignment → selection +
//! variation → offspring evaluation → combine + non-dominated sort →
//! truncation, once per generation, for a fixed generation budget.
//!
//! Progress is reported through an observer callback invoked at the end of
//! a generation, after truncation, so an observer never sees a
//! half-finished cohort. Cancellation is checked between generations via a
//! shared flag; a cancelled run returns the last completed generation's
//! rank-0 front.

use crate::config::NsgaConfig;
use crate::individual::Individual;
use crate::pareto::{crowding_distance, non_dominated_sort};
use crate::problem::ZdtProblem;
use crate::selection::binary_tournament;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A progress snapshot emitted at the report cadence.
///
/// Carries only the rank-0 objective vectors, never genes. The event for
/// `generation == generations - 1` doubles as the completion report: it is
/// emitted exactly once, at the end of a full run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressEvent {
    /// Zero-based index of the generation that just finished truncation.
    pub generation: usize,

    /// Objective vectors of the current rank-0 front.
    pub pareto_front: Vec<[f64; 2]>,
}

/// Result of an NSGA-II run.
#[derive(Debug, Clone)]
pub struct NsgaResult {
    /// Objective vectors of the final rank-0 front.
    pub pareto_front: Vec<[f64; 2]>,

    /// The final population, ranks and crowding assigned.
    pub population: Vec<Individual>,

    /// Number of generations fully completed (equals the configured
    /// budget unless cancelled).
    pub generations_run: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

/// Executes the NSGA-II evolutionary loop.
///
/// # Usage
///
/// ```
/// use nsga2_moo::{NsgaConfig, NsgaRunner, ZdtProblem};
///
/// let config = NsgaConfig::default()
///     .with_problem(ZdtProblem::Zdt1)
///     .with_population_size(20)
///     .with_generations(10)
///     .with_seed(42);
/// let result = NsgaRunner::run(&config).unwrap();
/// assert!(!result.pareto_front.is_empty());
/// ```
pub struct NsgaRunner;

impl NsgaRunner {
    /// Runs the optimization to the configured generation budget.
    ///
    /// Returns `Err` with a human-readable message if the configuration is
    /// invalid; in that case the run never starts and no population is
    /// ever observable.
    pub fn run(config: &NsgaConfig) -> Result<NsgaResult, String> {
        Self::run_with_observer(config, |_| {}, None)
    }

    /// Runs the optimization, reporting progress and honoring cancellation.
    ///
    /// `observer` is called after a generation's truncation at the report
    /// cadence ([`NsgaConfig::effective_report_interval`]), and always for
    /// the final generation. If `cancel` is set between generations the
    /// loop stops cleanly and the result carries the last completed
    /// generation's rank-0 front with `cancelled: true`.
    pub fn run_with_observer<F>(
        config: &NsgaConfig,
        mut observer: F,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<NsgaResult, String>
    where
        F: FnMut(ProgressEvent),
    {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        // Generation 0: random genes, evaluated immediately, ranked so the
        // first tournament round has something to compare.
        let mut population: Vec<Individual> = (0..config.population_size)
            .map(|_| Individual::random(config.num_vars, &mut rng))
            .collect();
        evaluate_population(&mut population, config.problem);
        assign_ranks(&mut population);

        let report_interval = config.effective_report_interval();
        let mut generations_run = 0;
        let mut cancelled = false;

        for gen in 0..config.generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // Crowding is recomputed from scratch each generation; the
            // tournament needs it alongside rank.
            assign_crowding(&mut population);

            let offspring = breed_offspring(&population, config, &mut rng);
            debug_assert_eq!(offspring.len(), config.population_size);

            let mut combined = std::mem::take(&mut population);
            combined.extend(offspring);
            population = select_next_generation(combined, config.population_size);
            debug_assert_eq!(population.len(), config.population_size);

            generations_run = gen + 1;

            if gen % report_interval == 0 || gen == config.generations - 1 {
                observer(ProgressEvent {
                    generation: gen,
                    pareto_front: pareto_front_of(&population),
                });
            }
        }

        Ok(NsgaResult {
            pareto_front: pareto_front_of(&population),
            population,
            generations_run,
            cancelled,
        })
    }
}

/// Computes objectives for every individual; genes never carry stale scores.
fn evaluate_population(population: &mut [Individual], problem: ZdtProblem) {
    for ind in population.iter_mut() {
        ind.objectives = problem.evaluate(&ind.genes);
    }
}

/// Non-dominated sort over the cohort, writing ranks back.
fn assign_ranks(population: &mut [Individual]) {
    let objectives: Vec<[f64; 2]> = population.iter().map(|ind| ind.objectives).collect();
    let sorted = non_dominated_sort(&objectives);
    for (ind, rank) in population.iter_mut().zip(sorted.ranks) {
        ind.rank = rank;
    }
}

/// Crowding distance per front, grouped by the ranks already assigned.
fn assign_crowding(population: &mut [Individual]) {
    let max_rank = population.iter().map(|ind| ind.rank).max().unwrap_or(0);
    for rank in 0..=max_rank {
        let members: Vec<usize> = population
            .iter()
            .enumerate()
            .filter(|(_, ind)| ind.rank == rank)
            .map(|(i, _)| i)
            .collect();
        if members.is_empty() {
            continue;
        }
        let objectives: Vec<[f64; 2]> =
            members.iter().map(|&i| population[i].objectives).collect();
        for (&i, d) in members.iter().zip(crowding_distance(&objectives)) {
            population[i].crowding = d;
        }
    }
}

/// Fills an offspring buffer of `population_size` via repeated
/// tournament-select two parents → rate-gated SBX → mutate both children.
fn breed_offspring<R: Rng>(
    population: &[Individual],
    config: &NsgaConfig,
    rng: &mut R,
) -> Vec<Individual> {
    let mut offspring = Vec::with_capacity(config.population_size);

    while offspring.len() < config.population_size {
        let p1 = binary_tournament(population, rng);
        let p2 = binary_tournament(population, rng);

        let (g1, g2) = if rng.random_range(0.0..1.0) < config.crossover_rate {
            crate::operators::sbx_crossover(
                &population[p1].genes,
                &population[p2].genes,
                config.eta_crossover,
                rng,
            )
        } else {
            // Gate failed: both offspring start as clones of the parents.
            (population[p1].genes.clone(), population[p2].genes.clone())
        };

        for mut genes in [g1, g2] {
            if offspring.len() >= config.population_size {
                break;
            }
            crate::operators::polynomial_mutation(
                &mut genes,
                config.mutation_rate,
                config.eta_mutation,
                rng,
            );
            offspring.push(Individual::from_genes(genes));
        }
    }

    evaluate_population(&mut offspring, config.problem);
    offspring
}

/// Environmental selection: sort the combined 2N cohort, take whole fronts
/// while they fit, then crowding-truncate the overflowing front to land on
/// exactly `target` survivors.
fn select_next_generation(mut combined: Vec<Individual>, target: usize) -> Vec<Individual> {
    let objectives: Vec<[f64; 2]> = combined.iter().map(|ind| ind.objectives).collect();
    let sorted = non_dominated_sort(&objectives);
    for (ind, &rank) in combined.iter_mut().zip(sorted.ranks.iter()) {
        ind.rank = rank;
    }

    let mut next = Vec::with_capacity(target);
    for front in &sorted.fronts {
        let front_objs: Vec<[f64; 2]> = front.iter().map(|&i| objectives[i]).collect();
        let distances = crowding_distance(&front_objs);

        if next.len() + front.len() <= target {
            for (&i, d) in front.iter().zip(distances) {
                combined[i].crowding = d;
                next.push(combined[i].clone());
            }
            if next.len() == target {
                break;
            }
        } else {
            // Overflowing front: keep its sparsest members only.
            let mut ranked: Vec<(usize, f64)> = front.iter().copied().zip(distances).collect();
            ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

            let needed = target - next.len();
            for &(i, d) in ranked.iter().take(needed) {
                combined[i].crowding = d;
                next.push(combined[i].clone());
            }
            break;
        }
    }

    next
}

/// Objective vectors of the rank-0 individuals.
fn pareto_front_of(population: &[Individual]) -> Vec<[f64; 2]> {
    population
        .iter()
        .filter(|ind| ind.rank == 0)
        .map(|ind| ind.objectives)
        .collect()
}
