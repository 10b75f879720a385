//! Pareto dominance, fast non-dominated sorting, and crowding distance.
//!
//! The NSGA-II core machinery. All objectives are **minimized**: lower
//! values are better on every axis.
//!
//! The domination graph built during sorting is generation-scoped: it lives
//! in flat index-based adjacency lists local to [`non_dominated_sort`] and
//! is discarded when the call returns. Individuals never hold references to
//! each other.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic
//!   Algorithm: NSGA-II", IEEE Trans. Evolutionary Computation 6(2)

/// Result of non-dominated sorting.
///
/// `ranks[i]` is the Pareto rank of solution `i` (0 = non-dominated front
/// of the cohort). `fronts[k]` lists the indices making up front `k`, so
/// `fronts[0]` is the current Pareto-front approximation.
#[derive(Debug, Clone)]
pub struct SortResult {
    /// Pareto rank for each solution (0 = best front).
    pub ranks: Vec<usize>,

    /// Indices grouped by front, in rank order.
    pub fronts: Vec<Vec<usize>>,
}

/// Dominance comparison result.
#[derive(Debug, PartialEq)]
enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Neither dominates the other.
    Neither,
}

/// Compare two objective vectors for Pareto dominance (minimization).
fn dominance_cmp(a: &[f64], b: &[f64]) -> Dominance {
    debug_assert_eq!(a.len(), b.len(), "objective vectors must have equal arity");

    let mut a_better_in_some = false;
    let mut b_better_in_some = false;

    for (&va, &vb) in a.iter().zip(b.iter()) {
        if va < vb {
            a_better_in_some = true;
        } else if vb < va {
            b_better_in_some = true;
        }
    }

    match (a_better_in_some, b_better_in_some) {
        (true, false) => Dominance::Left,
        (false, true) => Dominance::Right,
        _ => Dominance::Neither,
    }
}

/// Strict Pareto dominance: `a` is no worse than `b` on every axis and
/// strictly better on at least one.
///
/// Irreflexive and asymmetric. Identical vectors dominate each other in
/// neither direction.
pub fn dominates(a: &[f64], b: &[f64]) -> bool {
    dominance_cmp(a, b) == Dominance::Left
}

/// Fast non-dominated sorting (Deb et al., 2002).
///
/// Partitions the cohort into ranked fronts: front 0 is dominated by
/// nobody, front 1 only by front 0, and so on.
///
/// # Complexity
///
/// O(m · n²) objective comparisons plus O(n²) bookkeeping, where m is the
/// number of objectives and n the cohort size.
///
/// # Panics
///
/// Panics if `objectives` is empty.
pub fn non_dominated_sort<O: AsRef<[f64]>>(objectives: &[O]) -> SortResult {
    let n = objectives.len();
    assert!(n > 0, "objectives must not be empty");

    if n == 1 {
        return SortResult {
            ranks: vec![0],
            fronts: vec![vec![0]],
        };
    }

    let mut domination_count = vec![0usize; n];
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut ranks = vec![0usize; n];
    let mut front_0 = Vec::new();

    // Pairwise dominance, each pair visited once.
    for i in 0..n {
        for j in (i + 1)..n {
            match dominance_cmp(objectives[i].as_ref(), objectives[j].as_ref()) {
                Dominance::Left => {
                    dominated_by[i].push(j);
                    domination_count[j] += 1;
                }
                Dominance::Right => {
                    dominated_by[j].push(i);
                    domination_count[i] += 1;
                }
                Dominance::Neither => {}
            }
        }

        if domination_count[i] == 0 {
            ranks[i] = 0;
            front_0.push(i);
        }
    }

    // Peel off subsequent fronts by rank propagation.
    let mut fronts = vec![front_0];
    loop {
        let current = fronts
            .last()
            .expect("fronts is initialized with front_0; never empty");
        let mut next_front = Vec::new();

        for &i in current {
            for &j in &dominated_by[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    ranks[j] = fronts.len();
                    next_front.push(j);
                }
            }
        }

        if next_front.is_empty() {
            break;
        }
        fronts.push(next_front);
    }

    SortResult { ranks, fronts }
}

/// Crowding distance assignment (Deb et al., 2002).
///
/// Estimates how isolated each solution is within one front. Boundary
/// solutions on any objective axis receive `f64::INFINITY`; interior
/// solutions accumulate the normalized gap between their neighbors on each
/// axis. An axis with zero range contributes nothing.
///
/// A front of size ≤ 2 is all boundary: every member gets infinity.
///
/// Meaningful only within a single front; callers group by rank first.
pub fn crowding_distance<O: AsRef<[f64]>>(objectives: &[O]) -> Vec<f64> {
    let n = objectives.len();
    if n <= 2 {
        return vec![f64::INFINITY; n];
    }

    let m = objectives[0].as_ref().len();
    let mut distances = vec![0.0f64; n];

    for obj_idx in 0..m {
        let mut indices: Vec<usize> = (0..n).collect();
        indices.sort_by(|&a, &b| {
            objectives[a].as_ref()[obj_idx]
                .partial_cmp(&objectives[b].as_ref()[obj_idx])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        distances[indices[0]] = f64::INFINITY;
        distances[indices[n - 1]] = f64::INFINITY;

        let min_val = objectives[indices[0]].as_ref()[obj_idx];
        let max_val = objectives[indices[n - 1]].as_ref()[obj_idx];
        let range = max_val - min_val;

        // Degenerate axis: skip rather than divide by zero.
        if range > 0.0 {
            for i in 1..(n - 1) {
                let prev = objectives[indices[i - 1]].as_ref()[obj_idx];
                let next = objectives[indices[i + 1]].as_ref()[obj_idx];
                distances[indices[i]] += (next - prev) / range;
            }
        }
    }

    distances
}
