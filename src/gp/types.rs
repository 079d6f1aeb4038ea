//! Contract between the optimizer and a tree representation.
//!
//! [`TreeProblem`] is what a representation implements: how to produce a
//! random individual and how to score one. [`FnProblem`] builds one from
//! two plain closures.

use crate::tree::Tree;
use rand::Rng;
use std::marker::PhantomData;

/// Defines a tree-based optimization problem.
///
/// # Fitness Range
///
/// Higher fitness is better (maximization). Scores must stay strictly
/// above `-1.0`: survival odds are computed as `(s + 1) / (max + 1)`,
/// which is meaningless once `max + 1 <= 0`. The best score must also be
/// finite: a `1 / error` fitness should cap a perfect fit (for example
/// `1 / (1 + error)`) instead of returning `+inf`. The optimizer panics on
/// such a generation rather than silently clamping.
///
/// # Implementing
///
/// ```ignore
/// struct Regression { samples: Vec<(f64, f64)> }
///
/// impl TreeProblem for Regression {
///     type Node = Op;
///     type Kind = ();
///
///     fn random_individual<R: Rng>(&self, rng: &mut R) -> Tree<Op> {
///         random_expression(rng, 4)
///     }
///
///     fn fitness(&self, tree: &Tree<Op>) -> f64 {
///         let err: f64 = self.samples.iter().map(|&(x, y)| (eval(tree, x) - y).abs()).sum();
///         1.0 / (1.0 + err)
///     }
/// }
/// ```
pub trait TreeProblem {
    /// Payload carried by every node.
    type Node: Clone;

    /// Kind tag carried by every node. Use `()` for untyped trees.
    type Kind: Clone;

    /// Creates a random, finite individual.
    ///
    /// Called once per empty population slot.
    fn random_individual<R: Rng>(&self, rng: &mut R) -> Tree<Self::Node, Self::Kind>;

    /// Scores an individual. Higher is better.
    ///
    /// Must be total over every tree the generator and crossover can
    /// produce, including single-node and deeply nested trees.
    fn fitness(&self, individual: &Tree<Self::Node, Self::Kind>) -> f64;

    /// Called after every scoring pass with the generation number and
    /// the best score of that pass. Generation 0 is the initial population.
    ///
    /// The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_score: f64) {}
}

/// A [`TreeProblem`] made of a fitness closure and a zero-argument
/// generator closure.
///
/// The generator does not see the optimizer's random number generator;
/// it brings its own randomness (for instance `rand::rng()`).
pub struct FnProblem<T, K, F, G> {
    fitness: F,
    generator: G,
    _tree: PhantomData<fn() -> Tree<T, K>>,
}

impl<T, K, F, G> FnProblem<T, K, F, G>
where
    F: Fn(&Tree<T, K>) -> f64,
    G: Fn() -> Tree<T, K>,
{
    pub fn new(fitness: F, generator: G) -> Self {
        Self {
            fitness,
            generator,
            _tree: PhantomData,
        }
    }
}

impl<T, K, F, G> TreeProblem for FnProblem<T, K, F, G>
where
    T: Clone,
    K: Clone,
    F: Fn(&Tree<T, K>) -> f64,
    G: Fn() -> Tree<T, K>,
{
    type Node = T;
    type Kind = K;

    fn random_individual<R: Rng>(&self, _rng: &mut R) -> Tree<T, K> {
        (self.generator)()
    }

    fn fitness(&self, individual: &Tree<T, K>) -> f64 {
        (self.fitness)(individual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fn_problem_delegates() {
        let problem = FnProblem::new(
            |t: &Tree<u32>| t.size() as f64,
            || Tree::with_children(1, vec![Tree::new(2)]),
        );
        let mut rng = StdRng::seed_from_u64(0);
        let individual = problem.random_individual(&mut rng);
        assert_eq!(individual.to_string(), "1(2(),)");
        assert!((problem.fitness(&individual) - 2.0).abs() < 1e-12);
    }
}
