//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → repeat.

use super::config::GaConfig;
use super::fitness::FitnessFunction;
use super::genome::{Genome, Population};
use super::operators::{BitFlipMutation, RandomInitializer, SinglePointCrossover};
use super::selection::Selection;
use super::types::{Crossover, Initializer, Mutator, Selector};
use crate::error::{GaError, Result};
use crate::random::rng_from_seed;
use log::{debug, info};
use rand::Rng;

/// Number of top genomes copied unchanged into every bred generation.
pub const ELITE_COUNT: usize = 2;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The best genome reached [`GaConfig::fitness_limit`].
    FitnessReached,

    /// [`GaConfig::generation_limit`] generations were bred without reaching
    /// the fitness limit.
    Exhausted,
}

/// Result of a GA run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// Final population, sorted by fitness descending (stable).
    pub population: Population,

    /// Fitness of each genome in `population`, index-aligned.
    pub scores: Vec<u64>,

    /// Generation index at which the run stopped.
    ///
    /// On success this is the index of the generation that reached the
    /// limit; on exhaustion it equals the generation limit.
    pub generations: usize,

    /// Why the run stopped.
    pub termination: Termination,

    /// Best fitness of every evaluated generation, starting with the
    /// initial population.
    pub fitness_history: Vec<u64>,
}

impl GaResult {
    /// The fittest genome of the final population.
    pub fn best(&self) -> Option<&Genome> {
        self.population.first()
    }

    /// Fitness of [`best`](Self::best), 0 for an empty population.
    pub fn best_fitness(&self) -> u64 {
        self.scores.first().copied().unwrap_or(0)
    }

    /// Whether the run reached the fitness limit.
    pub fn is_success(&self) -> bool {
        self.termination == Termination::FitnessReached
    }
}

/// The four pluggable operators the runner is generic over.
///
/// `Operators::default()` uses the built-in implementations; the `with_*`
/// methods swap one operator at a time.
///
/// ```
/// use u_bitga::ga::{BitFlipMutation, Operators, Selection};
///
/// let ops = Operators::default()
///     .with_selector(Selection::Tournament(3))
///     .with_mutator(BitFlipMutation::default().with_count(2));
/// assert_eq!(ops.selector, Selection::Tournament(3));
/// ```
#[derive(Debug, Clone)]
pub struct Operators<
    I = RandomInitializer,
    S = Selection,
    C = SinglePointCrossover,
    M = BitFlipMutation,
> {
    pub initializer: I,
    pub selector: S,
    pub crossover: C,
    pub mutator: M,
}

impl Default for Operators {
    fn default() -> Self {
        Self::new(
            RandomInitializer,
            Selection::default(),
            SinglePointCrossover,
            BitFlipMutation::default(),
        )
    }
}

impl<I, S, C, M> Operators<I, S, C, M> {
    pub fn new(initializer: I, selector: S, crossover: C, mutator: M) -> Self {
        Self {
            initializer,
            selector,
            crossover,
            mutator,
        }
    }

    pub fn with_initializer<I2>(self, initializer: I2) -> Operators<I2, S, C, M> {
        Operators::new(initializer, self.selector, self.crossover, self.mutator)
    }

    pub fn with_selector<S2>(self, selector: S2) -> Operators<I, S2, C, M> {
        Operators::new(self.initializer, selector, self.crossover, self.mutator)
    }

    pub fn with_crossover<C2>(self, crossover: C2) -> Operators<I, S, C2, M> {
        Operators::new(self.initializer, self.selector, crossover, self.mutator)
    }

    pub fn with_mutator<M2>(self, mutator: M2) -> Operators<I, S, C, M2> {
        Operators::new(self.initializer, self.selector, self.crossover, mutator)
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_bitga::ga::{GaConfig, GaRunner, Genome};
///
/// let onemax = |g: &Genome| -> u_bitga::Result<u64> { Ok(g.count_ones() as u64) };
/// let config = GaConfig::new(16)
///     .with_population_size(20)
///     .with_fitness_limit(16)
///     .with_generation_limit(500)
///     .with_seed(42);
///
/// let result = GaRunner::run(&onemax, &config).unwrap();
/// assert!(result.generations <= 500);
/// assert_eq!(result.population.len(), 20);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with the default operators.
    ///
    /// The RNG is seeded from [`GaConfig::seed`].
    pub fn run<F>(fitness: &F, config: &GaConfig) -> Result<GaResult>
    where
        F: FitnessFunction + ?Sized,
    {
        Self::run_with(fitness, config, &Operators::default())
    }

    /// Runs the GA with custom operators.
    ///
    /// The RNG is seeded from [`GaConfig::seed`].
    pub fn run_with<F, I, S, C, M>(
        fitness: &F,
        config: &GaConfig,
        operators: &Operators<I, S, C, M>,
    ) -> Result<GaResult>
    where
        F: FitnessFunction + ?Sized,
        I: Initializer,
        S: Selector,
        C: Crossover,
        M: Mutator,
    {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(fitness, config, operators, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// [`GaConfig::seed`] is ignored.
    ///
    /// # Errors
    /// - [`GaError::InvalidConfig`] if `config` fails validation.
    /// - [`GaError::PopulationSizeMismatch`] / [`GaError::LengthMismatch`]
    ///   if an operator produces a population or genome of the wrong shape.
    /// - [`GaError::SelectionOutOfRange`] if the selector returns an index
    ///   outside the population.
    /// - Any error returned by `fitness` or the crossover operator.
    pub fn run_with_rng<F, I, S, C, M, R>(
        fitness: &F,
        config: &GaConfig,
        operators: &Operators<I, S, C, M>,
        rng: &mut R,
    ) -> Result<GaResult>
    where
        F: FitnessFunction + ?Sized,
        I: Initializer,
        S: Selector,
        C: Crossover,
        M: Mutator,
        R: Rng,
    {
        config.validate()?;

        let population =
            operators
                .initializer
                .initialize(config.population_size, config.genome_length, rng);
        if population.len() != config.population_size {
            return Err(GaError::PopulationSizeMismatch {
                expected: config.population_size,
                actual: population.len(),
            });
        }
        for genome in &population {
            check_length(genome, config.genome_length)?;
        }

        let mut population = population;
        let mut fitness_history = Vec::with_capacity(config.generation_limit + 1);

        for gen in 0..config.generation_limit {
            let (sorted, scores) = rank_population(fitness, population)?;
            let best = scores[0];
            fitness_history.push(best);
            debug!("generation {gen}: best fitness {best}");

            if best >= config.fitness_limit {
                info!(
                    "fitness limit {} reached at generation {gen}",
                    config.fitness_limit
                );
                return Ok(GaResult {
                    population: sorted,
                    scores,
                    generations: gen,
                    termination: Termination::FitnessReached,
                    fitness_history,
                });
            }

            population = breed(&sorted, &scores, config, operators, rng)?;
        }

        let (population, scores) = rank_population(fitness, population)?;
        fitness_history.push(scores[0]);
        info!(
            "generation limit {} exhausted, best fitness {}",
            config.generation_limit, scores[0]
        );

        Ok(GaResult {
            population,
            scores,
            generations: config.generation_limit,
            termination: Termination::Exhausted,
            fitness_history,
        })
    }
}

/// Builds the next generation from a population sorted best first.
fn breed<I, S, C, M, R>(
    sorted: &[Genome],
    scores: &[u64],
    config: &GaConfig,
    operators: &Operators<I, S, C, M>,
    rng: &mut R,
) -> Result<Population>
where
    S: Selector,
    C: Crossover,
    M: Mutator,
    R: Rng,
{
    let mut next = Vec::with_capacity(config.population_size);
    next.extend_from_slice(&sorted[..ELITE_COUNT]);

    for _ in 0..config.breeding_pairs() {
        let (i, j) = operators.selector.select_pair(sorted, scores, rng);
        let (a, b) = operators
            .crossover
            .crossover(parent(sorted, i)?, parent(sorted, j)?, rng)?;
        for child in [a, b] {
            let child = operators.mutator.mutate(child, rng);
            check_length(&child, config.genome_length)?;
            next.push(child);
        }
    }

    Ok(next)
}

/// Evaluates every genome once and stable-sorts by fitness, best first.
fn rank_population<F>(fitness: &F, population: Population) -> Result<(Population, Vec<u64>)>
where
    F: FitnessFunction + ?Sized,
{
    let mut scored = population
        .into_iter()
        .map(|g| fitness.evaluate(&g).map(|s| (g, s)))
        .collect::<Result<Vec<(Genome, u64)>>>()?;
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(scored.into_iter().unzip())
}

fn parent(sorted: &[Genome], index: usize) -> Result<&Genome> {
    sorted.get(index).ok_or(GaError::SelectionOutOfRange {
        index,
        len: sorted.len(),
    })
}

fn check_length(genome: &Genome, expected: usize) -> Result<()> {
    if genome.len() != expected {
        return Err(GaError::LengthMismatch {
            expected,
            actual: genome.len(),
        });
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
