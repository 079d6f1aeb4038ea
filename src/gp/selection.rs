//! Fitness-proportional survival.
//!
//! Each generation every individual survives independently with
//! probability `(s + 1) / (max + 1)`, where `s` is its score and `max` the
//! best score of the generation. The `+ 1` shift keeps zero-score
//! individuals alive with a small chance and makes the best individuals
//! survive with certainty.
//!
//! A pass that kills everyone is thrown away and redrawn until something
//! survives, so selection never returns an empty population.

use rand::Rng;

/// Outcome of [`natural_selection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Survivors {
    /// `mask[i]` is `true` when individual `i` survives.
    pub mask: Vec<bool>,

    /// Number of passes drawn, 1 unless an earlier pass killed everyone.
    pub passes: usize,
}

impl Survivors {
    /// Number of surviving individuals.
    pub fn count(&self) -> usize {
        self.mask.iter().filter(|&&kept| kept).count()
    }

    /// Keeps the surviving elements of `population`, preserving order.
    ///
    /// # Panics
    /// Panics if `population` and the mask differ in length.
    pub fn apply<I>(&self, population: Vec<I>) -> Vec<I> {
        assert_eq!(
            population.len(),
            self.mask.len(),
            "survivor mask does not match population"
        );
        population
            .into_iter()
            .zip(&self.mask)
            .filter_map(|(ind, &kept)| kept.then_some(ind))
            .collect()
    }
}

/// Draws survivors for one generation.
///
/// Returns a mask with at least one `true` entry.
///
/// # Panics
/// Panics if `scores` is empty, if the best score is infinite, or if it
/// is not strictly greater than `-1.0` (or every score is NaN). Fitness
/// functions reaching `-1.0` or below, or `+inf`, are outside the
/// supported range. A NaN score never survives.
pub fn natural_selection<R: Rng>(scores: &[f64], rng: &mut R) -> Survivors {
    assert!(!scores.is_empty(), "cannot select from empty population");

    let max_score = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert!(
        max_score != f64::INFINITY,
        "best score is infinite, proportional survival needs finite scores"
    );
    assert!(
        max_score + 1.0 > 0.0,
        "best score {max_score} must be greater than -1 for proportional survival"
    );

    let odds: Vec<f64> = scores
        .iter()
        .map(|&s| (s + 1.0) / (max_score + 1.0))
        .collect();

    let mut passes = 0;
    loop {
        passes += 1;
        let mask: Vec<bool> = odds.iter().map(|&p| rng.random::<f64>() < p).collect();
        if mask.iter().any(|&kept| kept) {
            return Survivors { mask, passes };
        }
        log::trace!("selection pass {passes} kept nobody, redrawing");
    }
}

/// Index of the highest score, first occurrence on ties.
///
/// Returns `None` for an empty slice. NaN scores are never chosen unless
/// every score is NaN, in which case index 0 is returned.
pub fn best_index(scores: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &s) in scores.iter().enumerate() {
        if s.is_nan() {
            continue;
        }
        if best.map_or(true, |(_, b)| s > b) {
            best = Some((i, s));
        }
    }
    match best {
        Some((i, _)) => Some(i),
        None if scores.is_empty() => None,
        None => Some(0),
    }
}
