//! Tree-based genetic programming.
//!
//! Evolves a population of tree-shaped candidate solutions toward a
//! caller-defined fitness goal:
//!
//! - **Trees**: Generic ordered trees with positional addressing, pre-order
//!   traversal and uniform random node sampling by reservoir sampling.
//! - **Optimizer**: Population lifecycle (populate, score, select,
//!   crossover) with fixed-generation and target-fitness run modes.
//!
//! # Architecture
//!
//! The crate knows nothing about what the trees mean. Boolean programs,
//! arithmetic expressions or string-building DSLs are defined by consumers
//! through [`gp::TreeProblem`]: a random individual generator and a fitness
//! function.
//!
//! ```
//! use u_treegp::gp::Optimizer;
//! use u_treegp::tree::Tree;
//!
//! let mut optimizer = Optimizer::new(
//!     |t: &Tree<char>| t.size().min(6) as f64 / 6.0,
//!     || Tree::new('x').child(Tree::new('y')),
//!     16,
//! );
//! let result = optimizer.run(5);
//! println!("best {} scored {}", result.best, result.best_score);
//! ```

mod error;
pub mod gp;
pub mod tree;

pub use error::{Error, Result};
