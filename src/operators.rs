//! Real-coded variation operators for `[0, 1]`-boxed genes.
//!
//! - [`sbx_crossover`] (SBX): Deb & Agrawal (1995) — mimics single-point
//!   binary crossover on continuous variables
//! - [`polynomial_mutation`]: Deb & Goyal (1996) — perturbations biased by
//!   a distribution index, the continuous analogue of bit-flip mutation
//!
//! Both operators clamp every result to `[0, 1]`, so a valid input gene
//! vector can never produce an out-of-bounds offspring.
//!
//! # References
//!
//! - Deb & Agrawal (1995), "Simulated Binary Crossover for Continuous
//!   Search Space"
//! - Deb & Goyal (1996), "A Combined Genetic Adaptive Search (GeneAS) for
//!   Engineering Design"

use rand::Rng;

/// Distribution index (η) used by the reference configuration for both
/// SBX and polynomial mutation. Larger η keeps offspring closer to the
/// parents.
pub const DEFAULT_ETA: f64 = 20.0;

/// Parent values closer than this are copied through unchanged: the spread
/// factor is undefined on a zero-width parent interval.
const SBX_EPS: f64 = 1e-14;

/// Simulated Binary Crossover on two parent gene vectors.
///
/// Each position flips its own fair coin to decide whether it is
/// recombined at all; recombined positions draw a spread factor βq from a
/// fresh uniform and η, producing two children that stay, in expectation,
/// inside the parents' span but can extend slightly beyond it. The spread
/// factor is the zero-bounded form (β computed from the smaller parent's
/// distance to the lower bound), so children rarely need the final clamp.
///
/// The whole-pair crossover-probability gate (cloning both parents) is the
/// caller's responsibility; this function always recombines.
///
/// # Panics
///
/// Panics if the parents have different lengths.
pub fn sbx_crossover<R: Rng>(
    parent1: &[f64],
    parent2: &[f64],
    eta: f64,
    rng: &mut R,
) -> (Vec<f64>, Vec<f64>) {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );

    let mut child1 = parent1.to_vec();
    let mut child2 = parent2.to_vec();

    for i in 0..parent1.len() {
        if rng.random_range(0.0..1.0) > 0.5 {
            continue;
        }

        let (x1, x2) = (parent1[i], parent2[i]);
        if (x1 - x2).abs() <= SBX_EPS {
            continue;
        }

        let y1 = x1.min(x2);
        let y2 = x1.max(x2);
        let span = y2 - y1;

        let u: f64 = rng.random_range(0.0..1.0);
        let beta = 1.0 + 2.0 * y1 / span;
        let alpha = 2.0 - beta.powf(-(eta + 1.0));
        let beta_q = if u <= 1.0 / alpha {
            (u * alpha).powf(1.0 / (eta + 1.0))
        } else {
            (1.0 / (2.0 - u * alpha)).powf(1.0 / (eta + 1.0))
        };

        let c1 = 0.5 * ((y1 + y2) - beta_q * span);
        let c2 = 0.5 * ((y1 + y2) + beta_q * span);

        child1[i] = c1.clamp(0.0, 1.0);
        child2[i] = c2.clamp(0.0, 1.0);
    }

    (child1, child2)
}

/// Polynomial mutation in place.
///
/// Each gene is perturbed with probability `rate`. The perturbation is
/// polynomial in a fresh uniform draw and asymmetric around the current
/// value: draws below 0.5 push toward the lower bound, draws above toward
/// the upper. Results are clamped to `[0, 1]`.
pub fn polynomial_mutation<R: Rng>(genes: &mut [f64], rate: f64, eta: f64, rng: &mut R) {
    let mut_pow = 1.0 / (eta + 1.0);

    for gene in genes.iter_mut() {
        if rng.random_range(0.0..1.0) > rate {
            continue;
        }

        let y = *gene;
        // Normalized distances to the [0, 1] bounds.
        let delta1 = y;
        let delta2 = 1.0 - y;

        let u: f64 = rng.random_range(0.0..1.0);
        let delta_q = if u <= 0.5 {
            let xy = 1.0 - delta1;
            let val = 2.0 * u + (1.0 - 2.0 * u) * xy.powf(eta + 1.0);
            val.powf(mut_pow) - 1.0
        } else {
            let xy = 1.0 - delta2;
            let val = 2.0 * (1.0 - u) + 2.0 * (u - 0.5) * xy.powf(eta + 1.0);
            1.0 - val.powf(mut_pow)
        };

        *gene = (y + delta_q).clamp(0.0, 1.0);
    }
}
