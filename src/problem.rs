//! ZDT benchmark problems.
//!
//! The ZDT family (Zitzler, Deb & Thiele, 2000) is a standard suite of
//! two-objective minimization problems over the box `[0, 1]^n`. All three
//! variants share the same structure:
//!
//! - `f1 = x[0]`
//! - `g  = 1 + 9 · Σ x[1..n] / (n − 1)`
//! - `f2 = g · h(f1, g)` with a variant-specific shaping function `h`
//!
//! ZDT1 has a convex front, ZDT2 a concave front, and ZDT3 a disconnected
//! front (the sine term in `h` breaks it into segments).
//!
//! # References
//!
//! - Zitzler, Deb & Thiele (2000), "Comparison of Multiobjective
//!   Evolutionary Algorithms: Empirical Results"

use std::fmt;
use std::str::FromStr;

/// Number of objectives in the ZDT family.
pub const NUM_OBJECTIVES: usize = 2;

/// Standard decision-vector length for ZDT problems.
pub const DEFAULT_NUM_VARS: usize = 30;

/// A ZDT benchmark problem selecting the shaping function `h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZdtProblem {
    /// Convex Pareto front: `h = 1 − sqrt(f1/g)`.
    Zdt1,
    /// Concave Pareto front: `h = 1 − (f1/g)²`.
    Zdt2,
    /// Disconnected Pareto front: `h = 1 − sqrt(f1/g) − (f1/g)·sin(10π·f1)`.
    Zdt3,
}

impl ZdtProblem {
    /// Evaluates the objective vector `[f1, f2]` for a gene vector.
    ///
    /// Pure function of the genes: no state, no randomness. All genes are
    /// expected to lie in `[0, 1]`.
    ///
    /// # Panics
    ///
    /// Panics if `genes` has fewer than 2 entries (the `g` term needs at
    /// least one tail variable).
    pub fn evaluate(&self, genes: &[f64]) -> [f64; 2] {
        let n = genes.len();
        assert!(n >= 2, "ZDT problems need at least 2 decision variables");

        let f1 = genes[0];
        let tail: f64 = genes[1..].iter().sum();
        let g = 1.0 + 9.0 * tail / (n - 1) as f64;
        let ratio = f1 / g;

        let h = match self {
            ZdtProblem::Zdt1 => 1.0 - ratio.sqrt(),
            ZdtProblem::Zdt2 => 1.0 - ratio * ratio,
            ZdtProblem::Zdt3 => {
                1.0 - ratio.sqrt() - ratio * (10.0 * std::f64::consts::PI * f1).sin()
            }
        };

        [f1, g * h]
    }
}

impl fmt::Display for ZdtProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ZdtProblem::Zdt1 => "ZDT1",
            ZdtProblem::Zdt2 => "ZDT2",
            ZdtProblem::Zdt3 => "ZDT3",
        };
        f.write_str(name)
    }
}

impl FromStr for ZdtProblem {
    type Err = String;

    /// Parses a problem identifier (`"ZDT1"`, `"ZDT2"`, `"ZDT3"`,
    /// case-insensitive). Anything else is rejected with a descriptive
    /// message; this is the only malformed-input path in the crate.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ZDT1" => Ok(ZdtProblem::Zdt1),
            "ZDT2" => Ok(ZdtProblem::Zdt2),
            "ZDT3" => Ok(ZdtProblem::Zdt3),
            other => Err(format!(
                "unknown problem id {other:?} (expected ZDT1, ZDT2, or ZDT3)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zdt1_anchor_points() {
        // All tail genes zero → g = 1, so f2 = 1 - sqrt(f1).
        let mut genes = vec![0.0; 30];
        let [f1, f2] = ZdtProblem::Zdt1.evaluate(&genes);
        assert_eq!(f1, 0.0);
        assert!((f2 - 1.0).abs() < 1e-12);

        genes[0] = 1.0;
        let [f1, f2] = ZdtProblem::Zdt1.evaluate(&genes);
        assert_eq!(f1, 1.0);
        assert!(f2.abs() < 1e-12);
    }

    #[test]
    fn test_zdt2_shaping() {
        // g = 1, f1 = 0.5 → h = 1 - 0.25 = 0.75
        let mut genes = vec![0.0; 30];
        genes[0] = 0.5;
        let [f1, f2] = ZdtProblem::Zdt2.evaluate(&genes);
        assert!((f1 - 0.5).abs() < 1e-12);
        assert!((f2 - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_zdt3_at_origin() {
        // f1 = 0 kills both the sqrt and sine terms → f2 = g.
        let genes = vec![0.0; 30];
        let [f1, f2] = ZdtProblem::Zdt3.evaluate(&genes);
        assert_eq!(f1, 0.0);
        assert!((f2 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_g_term_scaling() {
        // All genes 1.0 → g = 1 + 9 = 10 for every variant.
        let genes = vec![1.0; 30];
        let [f1, f2] = ZdtProblem::Zdt1.evaluate(&genes);
        assert_eq!(f1, 1.0);
        // f2 = 10 * (1 - sqrt(0.1))
        let expected = 10.0 * (1.0 - (0.1f64).sqrt());
        assert!((f2 - expected).abs() < 1e-12);
    }

    #[test]
    fn test_evaluation_is_pure() {
        let genes: Vec<f64> = (0..30).map(|i| i as f64 / 30.0).collect();
        let a = ZdtProblem::Zdt3.evaluate(&genes);
        let b = ZdtProblem::Zdt3.evaluate(&genes);
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_str_accepts_known_ids() {
        assert_eq!("ZDT1".parse::<ZdtProblem>().unwrap(), ZdtProblem::Zdt1);
        assert_eq!("zdt2".parse::<ZdtProblem>().unwrap(), ZdtProblem::Zdt2);
        assert_eq!("Zdt3".parse::<ZdtProblem>().unwrap(), ZdtProblem::Zdt3);
    }

    #[test]
    fn test_from_str_rejects_unknown_id() {
        let err = "ZDT4".parse::<ZdtProblem>().unwrap_err();
        assert!(err.contains("ZDT4"), "message should name the bad id: {err}");
    }

    #[test]
    fn test_display_round_trips() {
        for p in [ZdtProblem::Zdt1, ZdtProblem::Zdt2, ZdtProblem::Zdt3] {
            assert_eq!(p.to_string().parse::<ZdtProblem>().unwrap(), p);
        }
    }

    #[test]
    #[should_panic(expected = "at least 2 decision variables")]
    fn test_too_few_variables_panics() {
        ZdtProblem::Zdt1.evaluate(&[0.5]);
    }
}
