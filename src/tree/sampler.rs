//! Uniform random node sampling by reservoir sampling.
//!
//! A reservoir of size one is fed every matching node during a single
//! pre-order pass. After `k` matches each of them has been retained with
//! probability exactly `1/k`, so no list of candidates is ever built.
//!
//! # References
//!
//! - Vitter (1985), "Random Sampling with a Reservoir"

use super::node::Tree;
use super::position::Position;
use rand::Rng;

/// Online reservoir holding at most one value.
///
/// ```
/// use rand::SeedableRng;
/// use u_treegp::tree::Reservoir;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let mut reservoir = Reservoir::new();
/// for value in ["a", "b", "c"] {
///     reservoir.offer(value, &mut rng);
/// }
/// assert_eq!(reservoir.seen(), 3);
/// assert!(reservoir.into_inner().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Reservoir<V> {
    seen: usize,
    chosen: Option<V>,
}

impl<V> Default for Reservoir<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Reservoir<V> {
    pub fn new() -> Self {
        Self {
            seen: 0,
            chosen: None,
        }
    }

    /// Counts `value` as a match and keeps it with probability `1/k`,
    /// where `k` is the number of matches so far.
    pub fn offer<R: Rng>(&mut self, value: V, rng: &mut R) {
        self.offer_with(|| value, rng);
    }

    /// Like [`offer`](Self::offer), but only builds the value when it is
    /// kept.
    pub fn offer_with<R: Rng, F: FnOnce() -> V>(&mut self, make: F, rng: &mut R) {
        self.seen += 1;
        if rng.random::<f64>() < 1.0 / self.seen as f64 {
            self.chosen = Some(make());
        }
    }

    /// Number of values offered so far.
    pub fn seen(&self) -> usize {
        self.seen
    }

    /// The retained value, `None` if nothing was offered.
    pub fn into_inner(self) -> Option<V> {
        self.chosen
    }
}

impl<T, K> Tree<T, K> {
    /// Returns a uniformly random node position.
    ///
    /// Every node, the root included, is equally likely.
    pub fn random_position<R: Rng>(&self, rng: &mut R) -> Position {
        self.random_position_where(|_| true, rng).unwrap_or_default()
    }

    /// Returns a uniformly random position among nodes accepted by
    /// `filter`, or `None` when no node is accepted.
    pub fn random_position_where<R, F>(&self, mut filter: F, rng: &mut R) -> Option<Position>
    where
        R: Rng,
        F: FnMut(&Tree<T, K>) -> bool,
    {
        let mut reservoir = Reservoir::new();
        self.visit(|node, position| {
            if filter(node) {
                reservoir.offer_with(|| position.clone(), rng);
            }
        });
        reservoir.into_inner()
    }
}

impl<T, K: PartialEq> Tree<T, K> {
    /// Returns a uniformly random position among nodes tagged `kind`.
    ///
    /// Small trees from a strict grammar may have no node of the wanted
    /// kind; callers must handle `None`.
    pub fn random_position_of_kind<R: Rng>(&self, kind: &K, rng: &mut R) -> Option<Position> {
        self.random_position_where(|node| node.kind() == kind, rng)
    }
}
