//! Parent selection strategies.
//!
//! Selection decides which genomes become parents. All strategies here
//! **maximize**: a higher score means a fitter genome.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::fitness::FitnessFunction;
use super::genome::Genome;
use super::types::Selector;
use crate::error::{GaError, Result};
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::{Genome, Selection, Selector};
/// use u_bitga::random::create_rng;
///
/// let population: Vec<Genome> = vec!["00".parse().unwrap(), "11".parse().unwrap()];
/// let scores = [0, 5];
/// let mut rng = create_rng(42);
///
/// // The zero-fitness genome is never drawn while another scores above 0.
/// let (a, b) = Selection::Roulette.select_pair(&population, &scores, &mut rng);
/// assert_eq!((a, b), (1, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// A genome is drawn with probability `score / total`. When every score
    /// is 0, draws are uniform.
    ///
    /// # Complexity
    /// O(n) per draw (cumulative scan)
    #[default]
    Roulette,

    /// Tournament selection: draw `k` genomes uniformly, keep the best.
    ///
    /// Ties keep the genome drawn first. `k = 0` behaves as `k = 1`.
    ///
    /// # Complexity
    /// O(k) per draw
    Tournament(usize),

    /// Linear rank selection.
    ///
    /// Genomes are stable-sorted by score (best first) and drawn with weight
    /// `n - rank`, so only the order of scores matters.
    ///
    /// Reference: Baker (1985), "Adaptive Selection Methods for Genetic
    /// Algorithms"
    ///
    /// # Complexity
    /// O(n log n) to rank once per [`select_pair`](Selector::select_pair)
    /// call, then O(n) per draw
    Rank,
}

impl Selection {
    /// Draws a single parent index.
    ///
    /// # Panics
    /// Panics if `population` is empty or `scores` has another length.
    pub fn select<R: Rng>(&self, population: &[Genome], scores: &[u64], rng: &mut R) -> usize {
        assert_scored(population, scores);

        match self {
            Selection::Roulette => roulette(scores, rng),
            Selection::Tournament(k) => tournament(scores, *k, rng),
            Selection::Rank => rank(&rank_order(scores), rng),
        }
    }
}

impl Selector for Selection {
    fn select_pair<R: Rng>(
        &self,
        population: &[Genome],
        scores: &[u64],
        rng: &mut R,
    ) -> (usize, usize) {
        if let Selection::Rank = self {
            assert_scored(population, scores);
            let order = rank_order(scores);
            return (rank(&order, rng), rank(&order, rng));
        }
        let first = self.select(population, scores, rng);
        let second = self.select(population, scores, rng);
        (first, second)
    }
}

/// Draws two parents with replacement, weighted by fitness.
///
/// Every genome is evaluated once; an all-zero population is sampled
/// uniformly. Fails with [`GaError::EmptyPopulation`] on an empty
/// population and propagates any evaluation error.
pub fn select_pair<F, R>(
    population: &[Genome],
    fitness: &F,
    rng: &mut R,
) -> Result<(Genome, Genome)>
where
    F: FitnessFunction + ?Sized,
    R: Rng,
{
    if population.is_empty() {
        return Err(GaError::EmptyPopulation);
    }
    let scores = population
        .iter()
        .map(|g| fitness.evaluate(g))
        .collect::<Result<Vec<u64>>>()?;

    let (a, b) = Selection::Roulette.select_pair(population, &scores, rng);
    Ok((population[a].clone(), population[b].clone()))
}

fn assert_scored(population: &[Genome], scores: &[u64]) {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    assert_eq!(
        population.len(),
        scores.len(),
        "every genome needs exactly one score"
    );
}

/// Roulette wheel over raw scores, uniform when all are zero.
fn roulette<R: Rng>(scores: &[u64], rng: &mut R) -> usize {
    let n = scores.len();
    let total: u128 = scores.iter().map(|&s| u128::from(s)).sum();
    if total == 0 {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0..total);
    let mut cumulative = 0u128;
    for (i, &s) in scores.iter().enumerate() {
        cumulative += u128::from(s);
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // unreachable: cumulative ends at total > threshold
}

/// Tournament of `k` uniform draws; the first-drawn wins ties.
fn tournament<R: Rng>(scores: &[u64], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = scores.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if scores[idx] > scores[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}

/// Indices stable-sorted by score, best first.
fn rank_order(scores: &[u64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].cmp(&scores[a]));
    order
}

/// Linear ranking over `order`: rank 0 (best) gets weight `n`, the last gets 1.
fn rank<R: Rng>(order: &[usize], rng: &mut R) -> usize {
    let n = order.len();
    if n == 1 {
        return order[0];
    }

    let total = n * (n + 1) / 2;
    let threshold = rng.random_range(0..total);
    let mut cumulative = 0;
    for (rank, &idx) in order.iter().enumerate() {
        cumulative += n - rank;
        if cumulative > threshold {
            return idx;
        }
    }

    order[n - 1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn make_population(n: usize) -> Vec<Genome> {
        (0..n)
            .map(|i| Genome::new((0..4).map(|b| (i >> b) & 1 == 1).collect()))
            .collect()
    }

    fn counts(selection: Selection, scores: &[u64], draws: usize) -> Vec<u32> {
        let pop = make_population(scores.len());
        let mut rng = create_rng(42);
        let mut counts = vec![0u32; scores.len()];
        for _ in 0..draws {
            counts[selection.select(&pop, scores, &mut rng)] += 1;
        }
        counts
    }

    #[test]
    fn test_roulette_proportional() {
        let c = counts(Selection::Roulette, &[10, 30, 60], 20_000);
        // Expected 2000 / 6000 / 12000.
        assert!((1600..2400).contains(&c[0]), "counts: {c:?}");
        assert!((5400..6600).contains(&c[1]), "counts: {c:?}");
        assert!((11_200..12_800).contains(&c[2]), "counts: {c:?}");
    }

    #[test]
    fn test_roulette_never_draws_zero_weight() {
        let c = counts(Selection::Roulette, &[0, 5, 0, 1], 5_000);
        assert_eq!(c[0], 0);
        assert_eq!(c[2], 0);
        assert!(c[1] > c[3]);
    }

    #[test]
    fn test_roulette_all_zero_is_uniform() {
        let c = counts(Selection::Roulette, &[0, 0, 0, 0], 10_000);
        for &x in &c {
            assert!(x > 2000, "expected uniform fallback, got {c:?}");
        }
    }

    #[test]
    fn test_tournament_favors_best() {
        let c = counts(Selection::Tournament(4), &[10, 5, 100, 8], 10_000);
        assert!(c[2] > 6000, "expected best >60%, got {c:?}");
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let c = counts(Selection::Tournament(1), &[10, 5, 100, 8], 10_000);
        for &x in &c {
            assert!(x > 1500, "expected uniform, got {c:?}");
        }
    }

    #[test]
    fn test_rank_favors_best() {
        let c = counts(Selection::Rank, &[100, 50, 1, 80], 10_000);
        assert!(c[0] > c[2], "best should beat worst: {c:?}");
        assert!(c[3] > c[1], "ordering should follow rank: {c:?}");
    }

    #[test]
    fn test_rank_order_is_stable() {
        assert_eq!(rank_order(&[3, 9, 3, 1, 9]), vec![1, 4, 0, 2, 3]);
        assert_eq!(rank_order(&[5]), vec![0]);
    }

    #[test]
    fn test_rank_pair_matches_single_draws() {
        let pop = make_population(6);
        let scores = [4, 0, 7, 7, 1, 3];
        let mut pair_rng = create_rng(5);
        let mut single_rng = create_rng(5);
        for _ in 0..200 {
            let pair = Selection::Rank.select_pair(&pop, &scores, &mut pair_rng);
            let a = Selection::Rank.select(&pop, &scores, &mut single_rng);
            let b = Selection::Rank.select(&pop, &scores, &mut single_rng);
            assert_eq!(pair, (a, b));
        }
    }

    #[test]
    fn test_single_genome() {
        let pop = make_population(1);
        let mut rng = create_rng(42);
        for sel in [Selection::Roulette, Selection::Tournament(3), Selection::Rank] {
            assert_eq!(sel.select_pair(&pop, &[0], &mut rng), (0, 0));
        }
    }

    #[test]
    fn test_pair_can_repeat() {
        let pop = make_population(2);
        let mut rng = create_rng(42);
        // With one viable genome, both draws must land on it.
        let pair = Selection::Roulette.select_pair(&pop, &[0, 7], &mut rng);
        assert_eq!(pair, (1, 1));
    }

    #[test]
    fn test_select_pair_evaluates_fitness() {
        let pop: Vec<Genome> = vec!["000".parse().unwrap(), "101".parse().unwrap()];
        let fitness = |g: &Genome| -> Result<u64> { Ok(g.count_ones() as u64) };
        let mut rng = create_rng(7);
        let (a, b) = select_pair(&pop, &fitness, &mut rng).unwrap();
        assert_eq!(a, pop[1]);
        assert_eq!(b, pop[1]);
    }

    #[test]
    fn test_select_pair_all_zero_does_not_fail() {
        let pop: Vec<Genome> = vec!["00".parse().unwrap(), "11".parse().unwrap()];
        let zero = |_: &Genome| -> Result<u64> { Ok(0) };
        let mut rng = create_rng(7);
        assert!(select_pair(&pop, &zero, &mut rng).is_ok());
    }

    #[test]
    fn test_select_pair_empty() {
        let zero = |_: &Genome| -> Result<u64> { Ok(0) };
        let mut rng = create_rng(7);
        assert_eq!(
            select_pair(&[], &zero, &mut rng),
            Err(GaError::EmptyPopulation)
        );
    }

    #[test]
    fn test_select_pair_propagates_errors() {
        let pop: Vec<Genome> = vec!["00".parse().unwrap()];
        let strict = |g: &Genome| -> Result<u64> {
            Err(GaError::LengthMismatch {
                expected: 3,
                actual: g.len(),
            })
        };
        let mut rng = create_rng(7);
        assert!(matches!(
            select_pair(&pop, &strict, &mut rng),
            Err(GaError::LengthMismatch { .. })
        ));
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let mut rng = create_rng(42);
        Selection::Tournament(3).select(&[], &[], &mut rng);
    }
}
