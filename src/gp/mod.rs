//! Tree-based genetic programming.
//!
//! A generic, representation-agnostic optimizer over [`Tree`](crate::tree::Tree)
//! individuals. Users define their problem by implementing [`TreeProblem`]
//! (or by passing two closures to [`Optimizer::new`]), which specifies how
//! to create and score individuals. Variation is fixed: fitness-proportional
//! survival followed by subtree crossover.
//!
//! # Key Types
//!
//! - [`OptimizerConfig`]: Population size, crossover trials, seed
//! - [`Optimizer`]: Executes the generation loop
//! - [`GpResult`]: Best individual and per-generation best scores
//!
//! # Submodules
//!
//! - [`operators`]: Subtree crossover on a population
//! - [`selection`]: Proportional survival and best-individual lookup
//!
//! # References
//!
//! - Koza (1992), *Genetic Programming: On the Programming of Computers by
//!   Means of Natural Selection*
//! - Poli, Langdon & McPhee (2008), *A Field Guide to Genetic Programming*

mod config;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::{OptimizerConfig, DEFAULT_CROSSOVER_TRIALS};
pub use operators::{crossover_at, random_crossover, CrossoverOutcome};
pub use runner::{GpResult, Optimizer};
pub use selection::{best_index, natural_selection, Survivors};
pub use types::{FnProblem, TreeProblem};
