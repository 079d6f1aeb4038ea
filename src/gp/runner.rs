//! Generation loop execution.
//!
//! [`Optimizer`] drives the population through repeated generations:
//! populate → score → select → crossover.

use super::config::OptimizerConfig;
use super::operators::{random_crossover, CrossoverOutcome};
use super::selection::{best_index, natural_selection};
use super::types::{FnProblem, TreeProblem};
use crate::error::Result;
use crate::tree::Tree;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Result of an optimizer run.
#[derive(Debug, Clone)]
pub struct GpResult<T, K = ()> {
    /// Highest-scoring individual of the final population.
    pub best: Tree<T, K>,

    /// Score of `best`.
    pub best_score: f64,

    /// Number of select/crossover rounds executed after the initial
    /// population was scored.
    pub generations: usize,

    /// Best score of every scoring pass, initial population first.
    pub score_history: Vec<f64>,
}

/// Tree-based genetic programming optimizer.
///
/// Owns the population, its scores and a random number generator. Each
/// run starts from an empty population; after a run, the final
/// population and its scores stay available through
/// [`population`](Self::population) and [`scores`](Self::scores).
///
/// # Usage
///
/// ```
/// use u_treegp::gp::Optimizer;
/// use u_treegp::tree::Tree;
///
/// // Reward bigger trees, up to ten nodes.
/// let mut optimizer = Optimizer::new(
///     |t: &Tree<u8>| t.size().min(10) as f64,
///     || Tree::with_children(0, vec![Tree::new(1)]),
///     20,
/// );
/// let result = optimizer.run_until_fitness(4.0);
/// assert!(result.best_score >= 4.0);
/// ```
pub struct Optimizer<P: TreeProblem> {
    problem: P,
    config: OptimizerConfig,
    rng: StdRng,
    population: Vec<Tree<P::Node, P::Kind>>,
    scores: Vec<f64>,
}

impl<T, K, F, G> Optimizer<FnProblem<T, K, F, G>>
where
    T: Clone,
    K: Clone,
    F: Fn(&Tree<T, K>) -> f64,
    G: Fn() -> Tree<T, K>,
{
    /// Creates an optimizer from a fitness closure and a zero-argument
    /// random individual closure, with default settings otherwise.
    ///
    /// # Panics
    /// Panics if `population_size` is zero.
    pub fn new(fitness: F, random_individual: G, population_size: usize) -> Self {
        assert!(population_size > 0, "population_size must be at least 1");
        let config = OptimizerConfig::default().with_population_size(population_size);
        Self::build(FnProblem::new(fitness, random_individual), config)
    }
}

impl<P: TreeProblem> Optimizer<P> {
    /// Creates an optimizer for `problem`.
    ///
    /// # Errors
    /// [`Error::InvalidConfig`](crate::Error::InvalidConfig) if the
    /// configuration does not validate.
    pub fn with_config(problem: P, config: OptimizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(problem, config))
    }

    fn build(problem: P, config: OptimizerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self {
            problem,
            config,
            rng,
            population: Vec::new(),
            scores: Vec::new(),
        }
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Current population, in the order matching [`scores`](Self::scores)
    /// right after a scoring pass.
    pub fn population(&self) -> &[Tree<P::Node, P::Kind>] {
        &self.population
    }

    /// Scores from the most recent scoring pass.
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Runs `generations` rounds and returns the best individual of the
    /// final population.
    ///
    /// The initial population is generated and scored first; each round
    /// then selects, crosses over, refills and rescores. `run(0)` returns
    /// the best of a freshly generated population.
    ///
    /// # Panics
    /// Panics if a generation's best score is `-1.0` or lower, infinite,
    /// or if every score is NaN (see [`TreeProblem`]).
    pub fn run(&mut self, generations: usize) -> GpResult<P::Node, P::Kind> {
        let mut history = Vec::with_capacity(generations + 1);
        history.push(self.start());

        for generation in 1..=generations {
            history.push(self.step(generation));
        }

        self.finish(generations, history)
    }

    /// Runs until the best score of a generation reaches `threshold`, and
    /// returns that generation's best individual.
    ///
    /// Never returns below the threshold. There is no generation cap: if
    /// the fitness landscape cannot reach `threshold`, this does not
    /// terminate.
    ///
    /// A generation whose best score is NaN has not reached the threshold.
    ///
    /// # Panics
    /// Same as [`run`](Self::run).
    pub fn run_until_fitness(&mut self, threshold: f64) -> GpResult<P::Node, P::Kind> {
        let mut history = vec![self.start()];
        let mut generation = 0;

        while history.last().is_some_and(|&best| best < threshold || best.is_nan()) {
            generation += 1;
            history.push(self.step(generation));
        }

        self.finish(generation, history)
    }

    /// Discards any previous population, then generates and scores a
    /// fresh one. Returns its best score.
    fn start(&mut self) -> f64 {
        self.population.clear();
        self.scores.clear();
        self.populate();
        self.compute_scores(0)
    }

    /// One round on an already scored population. Returns the new best
    /// score.
    fn step(&mut self, generation: usize) -> f64 {
        self.natural_selection();
        self.cross_over();
        self.populate();
        self.compute_scores(generation)
    }

    fn populate(&mut self) {
        let missing = self.config.population_size.saturating_sub(self.population.len());
        for _ in 0..missing {
            let individual = self.problem.random_individual(&mut self.rng);
            self.population.push(individual);
        }
        log::debug!(
            "populate: {missing} new, {} individuals",
            self.population.len()
        );
    }

    /// Rescores every individual from scratch and returns the best score.
    fn compute_scores(&mut self, generation: usize) -> f64 {
        let problem = &self.problem;
        self.scores = self
            .population
            .iter()
            .map(|individual| problem.fitness(individual))
            .collect();

        let best = best_index(&self.scores)
            .map(|i| self.scores[i])
            .unwrap_or(f64::NEG_INFINITY);
        log::debug!("generation {generation}: best score {best}");
        self.problem.on_generation(generation, best);
        best
    }

    fn natural_selection(&mut self) {
        let survivors = natural_selection(&self.scores, &mut self.rng);
        log::debug!(
            "selection: kept {} of {} after {} pass(es)",
            survivors.count(),
            self.population.len(),
            survivors.passes
        );
        let population = std::mem::take(&mut self.population);
        self.population = survivors.apply(population);
    }

    fn cross_over(&mut self) {
        let (mut swapped, mut grafted, mut skipped) = (0usize, 0usize, 0usize);
        for _ in 0..self.config.crossover_trials {
            let outcome = random_crossover(&mut self.population, &mut self.rng)
                .expect("positions sampled from the current population are in bounds");
            match outcome {
                CrossoverOutcome::Swapped => swapped += 1,
                CrossoverOutcome::Grafted => grafted += 1,
                CrossoverOutcome::Skipped => skipped += 1,
            }
        }
        log::debug!(
            "crossover: {swapped} swapped, {grafted} grafted, {skipped} skipped, {} individuals",
            self.population.len()
        );
    }

    fn finish(&self, generations: usize, score_history: Vec<f64>) -> GpResult<P::Node, P::Kind> {
        let index = best_index(&self.scores).expect("population is never empty after populate");
        let result = GpResult {
            best: self.population[index].clone(),
            best_score: self.scores[index],
            generations,
            score_history,
        };
        log::info!(
            "run finished after {} generation(s): best score {}",
            result.generations,
            result.best_score
        );
        result
    }
}

// ============================================================================
// Tests
// ============================================================================
