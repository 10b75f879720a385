//! NSGA-II multi-objective evolutionary optimizer.
//!
//! Evolves a population of `[0, 1]`-boxed real vectors toward the
//! Pareto-optimal trade-off front of two competing objectives, using the
//! elitist non-dominated sorting GA of Deb et al. (2002). The ZDT
//! benchmark family (ZDT1/ZDT2/ZDT3) is built in.
//!
//! # Components
//!
//! - [`problem`]: ZDT objective evaluation ([`ZdtProblem`])
//! - [`pareto`]: Pareto dominance, fast non-dominated sort, crowding distance
//! - [`operators`]: SBX crossover and polynomial mutation
//! - [`NsgaConfig`]: run parameters with builder and validation
//! - [`NsgaRunner`]: the generational loop, with progress events and
//!   cooperative cancellation
//!
//! # Example
//!
//! ```
//! use nsga2_moo::{NsgaConfig, NsgaRunner, ZdtProblem};
//!
//! let config = NsgaConfig::default()
//!     .with_problem(ZdtProblem::Zdt1)
//!     .with_population_size(40)
//!     .with_generations(50)
//!     .with_seed(42);
//!
//! let result = NsgaRunner::run(&config).unwrap();
//! for [f1, f2] in &result.pareto_front {
//!     println!("{f1:.4} {f2:.4}");
//! }
//! ```
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective Genetic
//!   Algorithm: NSGA-II*
//! - Zitzler, Deb & Thiele (2000), *Comparison of Multiobjective
//!   Evolutionary Algorithms: Empirical Results*

mod config;
mod individual;
pub mod operators;
pub mod pareto;
pub mod problem;
mod runner;
mod selection;

pub use config::NsgaConfig;
pub use individual::Individual;
pub use problem::ZdtProblem;
pub use runner::{NsgaResult, NsgaRunner, ProgressEvent};
pub use selection::binary_tournament;
