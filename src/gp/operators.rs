//! Subtree crossover.
//!
//! A trial picks two individuals (with replacement) and one random node
//! in each, then exchanges the subtrees rooted there. Individuals never
//! share structure afterwards: subtrees are moved between owners or
//! deep-copied, never linked.
//!
//! # Cases
//!
//! | first position | second position | effect |
//! |---|---|---|
//! | non-root | non-root | two-sided subtree swap, population size unchanged |
//! | root | non-root (or the mirror case) | graft, population grows by one |
//! | root | root | no-op |
//!
//! A graft copies the whole root-side individual into the other one at
//! its sampled position. The subtree displaced by the copy stays in the
//! population: it takes over the root-side individual's slot, and the
//! root-side individual, untouched, moves to the end of the population.
//!
//! # References
//!
//! - Koza (1992), *Genetic Programming: On the Programming of Computers by
//!   Means of Natural Selection*

use crate::error::Result;
use crate::tree::{Position, Tree};
use rand::Rng;

/// What a crossover trial did to the population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossoverOutcome {
    /// Two non-root subtrees exchanged places.
    Swapped,

    /// A whole individual was grafted into another; the population grew
    /// by one.
    Grafted,

    /// Nothing changed: both positions were roots, or both addressed
    /// overlapping parts of the same individual.
    Skipped,
}

/// Runs one crossover trial on random individuals and random positions.
///
/// Both individuals are drawn uniformly with replacement, so an individual
/// may be crossed with itself.
///
/// # Panics
/// Panics if `population` is empty.
pub fn random_crossover<T, K, R>(
    population: &mut Vec<Tree<T, K>>,
    rng: &mut R,
) -> Result<CrossoverOutcome>
where
    T: Clone,
    K: Clone,
    R: Rng,
{
    assert!(!population.is_empty(), "cannot cross over an empty population");

    let n = population.len();
    let first = rng.random_range(0..n);
    let second = rng.random_range(0..n);
    let first_pos = population[first].random_position(rng);
    let second_pos = population[second].random_position(rng);

    let outcome = crossover_at(population, first, &first_pos, second, &second_pos)?;
    log::trace!("crossover #{first}{first_pos} x #{second}{second_pos}: {outcome:?}");
    Ok(outcome)
}

/// Crosses individual `first` at `first_pos` with individual `second` at
/// `second_pos`.
///
/// See the [module documentation](self) for the cases. When `first` and
/// `second` are the same individual and one position lies inside the
/// other's subtree, the exchange is undefined and the trial is skipped.
///
/// # Errors
/// [`Error::OutOfBounds`](crate::Error::OutOfBounds) if either position
/// does not resolve. The population is unchanged in that case.
///
/// # Panics
/// Panics if `first` or `second` is not a valid population index.
pub fn crossover_at<T: Clone, K: Clone>(
    population: &mut Vec<Tree<T, K>>,
    first: usize,
    first_pos: &Position,
    second: usize,
    second_pos: &Position,
) -> Result<CrossoverOutcome> {
    population[first].get_subtree(first_pos)?;
    population[second].get_subtree(second_pos)?;

    match (first_pos.is_root(), second_pos.is_root()) {
        (true, true) => Ok(CrossoverOutcome::Skipped),
        (true, false) => graft(population, first, second, second_pos),
        (false, true) => graft(population, second, first, first_pos),
        (false, false) => swap(population, first, first_pos, second, second_pos),
    }
}

fn swap<T: Clone, K: Clone>(
    population: &mut [Tree<T, K>],
    first: usize,
    first_pos: &Position,
    second: usize,
    second_pos: &Position,
) -> Result<CrossoverOutcome> {
    if first != second {
        let (a, b) = pair_mut(population, first, second);
        std::mem::swap(a.get_subtree_mut(first_pos)?, b.get_subtree_mut(second_pos)?);
        return Ok(CrossoverOutcome::Swapped);
    }

    if first_pos.is_prefix_of(second_pos) || second_pos.is_prefix_of(first_pos) {
        return Ok(CrossoverOutcome::Skipped);
    }

    // Disjoint positions in one tree: editing one leaves the other's path
    // intact.
    let tree = &mut population[first];
    let moved = tree.get_subtree(first_pos)?.clone();
    let displaced = tree.put(second_pos, moved)?;
    tree.put(first_pos, displaced)?;
    Ok(CrossoverOutcome::Swapped)
}

fn graft<T: Clone, K: Clone>(
    population: &mut Vec<Tree<T, K>>,
    root_side: usize,
    host: usize,
    host_pos: &Position,
) -> Result<CrossoverOutcome> {
    let donor = population[root_side].clone();
    let displaced = population[host].put(host_pos, donor)?;
    population.push(displaced);
    if root_side != host {
        let last = population.len() - 1;
        population.swap(root_side, last);
    }
    Ok(CrossoverOutcome::Grafted)
}

/// Two distinct mutable elements of one slice.
fn pair_mut<I>(items: &mut [I], a: usize, b: usize) -> (&mut I, &mut I) {
    debug_assert_ne!(a, b);
    if a < b {
        let (lo, hi) = items.split_at_mut(b);
        (&mut lo[a], &mut hi[0])
    } else {
        let (lo, hi) = items.split_at_mut(a);
        (&mut hi[0], &mut lo[b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    type StrTree = Tree<&'static str>;

    fn leaf(s: &'static str) -> StrTree {
        Tree::new(s)
    }

    fn node(s: &'static str, children: Vec<StrTree>) -> StrTree {
        Tree::with_children(s, children)
    }

    fn pos(path: &[usize]) -> Position {
        Position::from(path)
    }

    fn rendered(population: &[StrTree]) -> Vec<String> {
        population.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_both_roots_is_noop() {
        let mut population = vec![leaf("a"), node("r", vec![leaf("b")])];
        let before = population.clone();
        let outcome = crossover_at(&mut population, 0, &Position::root(), 1, &Position::root()).unwrap();
        assert_eq!(outcome, CrossoverOutcome::Skipped);
        assert_eq!(population, before);
    }

    #[test]
    fn test_two_sided_swap() {
        let mut population = vec![
            node("p", vec![leaf("a"), node("b", vec![leaf("c")])]),
            node("q", vec![leaf("d"), leaf("e")]),
        ];
        let outcome = crossover_at(&mut population, 0, &pos(&[1]), 1, &pos(&[0])).unwrap();
        assert_eq!(outcome, CrossoverOutcome::Swapped);
        assert_eq!(rendered(&population), vec!["p(a(),d(),)", "q(b(c(),),e(),)"]);
    }

    #[test]
    fn test_root_graft_grows_population_by_one() {
        let tree1 = leaf("a");
        let tree2 = node("r", vec![leaf("b"), leaf("c")]);
        let mut population = vec![tree1.clone(), tree2];

        let outcome = crossover_at(&mut population, 0, &Position::root(), 1, &pos(&[1])).unwrap();
        assert_eq!(outcome, CrossoverOutcome::Grafted);
        assert_eq!(population.len(), 3);
        assert_eq!(population[2], tree1);
        assert_eq!(rendered(&population), vec!["c()", "r(b(),a(),)", "a()"]);
    }

    #[test]
    fn test_root_graft_mirror_case() {
        let tree1 = node("r", vec![leaf("b"), leaf("c")]);
        let tree2 = leaf("a");
        let mut population = vec![tree1, tree2.clone()];

        let outcome = crossover_at(&mut population, 0, &pos(&[0]), 1, &Position::root()).unwrap();
        assert_eq!(outcome, CrossoverOutcome::Grafted);
        assert_eq!(population[2], tree2);
        assert_eq!(rendered(&population), vec!["r(a(),c(),)", "b()", "a()"]);
    }

    #[test]
    fn test_graft_copies_do_not_alias() {
        let mut population = vec![node("a", vec![leaf("x")]), node("r", vec![leaf("b")])];
        crossover_at(&mut population, 0, &Position::root(), 1, &pos(&[0])).unwrap();

        // population[1] now holds a copy of the original population[0],
        // which itself moved to population[2].
        *population[1]
            .get_subtree_mut(&pos(&[0, 0]))
            .unwrap()
            .node_mut() = "changed";
        assert_eq!(population[2].to_string(), "a(x(),)");
        assert_eq!(population[1].to_string(), "r(a(changed(),),)");
    }

    #[test]
    fn test_same_individual_overlapping_is_skipped() {
        let mut population = vec![node("r", vec![node("a", vec![leaf("b")]), leaf("c")])];
        let before = population.clone();
        for (p1, p2) in [(vec![0], vec![0, 0]), (vec![0, 0], vec![0]), (vec![1], vec![1])] {
            let outcome = crossover_at(&mut population, 0, &pos(&p1), 0, &pos(&p2)).unwrap();
            assert_eq!(outcome, CrossoverOutcome::Skipped);
            assert_eq!(population, before);
        }
    }

    #[test]
    fn test_same_individual_disjoint_swap() {
        let mut population = vec![node("r", vec![node("a", vec![leaf("b")]), leaf("c")])];
        let outcome = crossover_at(&mut population, 0, &pos(&[0, 0]), 0, &pos(&[1])).unwrap();
        assert_eq!(outcome, CrossoverOutcome::Swapped);
        assert_eq!(rendered(&population), vec!["r(a(c(),),b(),)"]);
    }

    #[test]
    fn test_same_individual_root_graft() {
        let mut population = vec![node("r", vec![leaf("a"), leaf("b")])];
        let outcome = crossover_at(&mut population, 0, &Position::root(), 0, &pos(&[1])).unwrap();
        assert_eq!(outcome, CrossoverOutcome::Grafted);
        assert_eq!(rendered(&population), vec!["r(a(),r(a(),b(),),)", "b()"]);
    }

    #[test]
    fn test_out_of_bounds_leaves_population_untouched() {
        let mut population = vec![node("r", vec![leaf("a")]), node("q", vec![leaf("b")])];
        let before = population.clone();
        let err = crossover_at(&mut population, 0, &pos(&[0]), 1, &pos(&[3])).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { index: 3, len: 1, .. }));
        assert_eq!(population, before);
    }

    #[test]
    fn test_random_crossover_invariants() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut population = vec![
            leaf("a"),
            node("r", vec![leaf("b"), leaf("c")]),
            node("s", vec![node("t", vec![leaf("u")]), leaf("v")]),
        ];
        let mut grafted = 0;
        for _ in 0..300 {
            let len_before = population.len();
            let nodes_before: usize = population.iter().map(Tree::size).sum();
            let outcome = random_crossover(&mut population, &mut rng).unwrap();
            let nodes_after: usize = population.iter().map(Tree::size).sum();
            match outcome {
                CrossoverOutcome::Swapped => {
                    assert_eq!(population.len(), len_before);
                    assert_eq!(nodes_after, nodes_before);
                }
                CrossoverOutcome::Grafted => {
                    grafted += 1;
                    assert_eq!(population.len(), len_before + 1);
                }
                CrossoverOutcome::Skipped => {
                    assert_eq!(population.len(), len_before);
                    assert_eq!(nodes_after, nodes_before);
                }
            }
            // Keep trees small so the loop stays cheap.
            population.retain(|t| t.size() <= 64);
            if population.is_empty() {
                population.push(leaf("a"));
            }
        }
        assert!(grafted > 0, "root positions should come up in 300 trials");
    }

    #[test]
    #[should_panic(expected = "cannot cross over an empty population")]
    fn test_random_crossover_empty_panics() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut population: Vec<StrTree> = Vec::new();
        let _ = random_crossover(&mut population, &mut rng);
    }
}
