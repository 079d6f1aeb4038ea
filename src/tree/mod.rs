//! Generic ordered trees.
//!
//! [`Tree`] is an owned recursive value: a payload, a kind tag and an
//! ordered list of children. Nodes are addressed by [`Position`], a path
//! of child indices from the root.
//!
//! # Key Operations
//!
//! - [`Tree::get_subtree`] / [`Tree::replace`] / [`Tree::put`]: positional
//!   access and editing
//! - [`Tree::visit`]: exact pre-order traversal with positions
//! - [`Tree::random_position`]: uniform node sampling in one pass
//!   (see [`Reservoir`])

mod node;
mod position;
mod sampler;

pub use node::Tree;
pub use position::Position;
pub use sampler::Reservoir;
