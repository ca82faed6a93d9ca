//! Binary crossover and mutation operators.
//!
//! # Crossover
//!
//! - [`single_point_crossover`]: exchange the suffixes after one random cut
//!
//! # Mutation
//!
//! - [`mutation`]: repeated random-position bit flips
//!
//! [`SinglePointCrossover`] and [`BitFlipMutation`] wrap these functions as
//! the runner's default [`Crossover`] and [`Mutator`].
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use super::genome::{generate_population, Genome, Population};
use super::types::{Crossover, Initializer, Mutator};
use crate::error::{GaError, Result};
use rand::Rng;

// ============================================================================
// Initialization
// ============================================================================

/// Uniformly random initial population.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomInitializer;

impl Initializer for RandomInitializer {
    fn initialize<R: Rng>(&self, size: usize, genome_length: usize, rng: &mut R) -> Population {
        generate_population(size, genome_length, rng)
    }
}

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover.
///
/// Draws a cut `s` uniformly from `[1, len - 1]` on every call and returns
/// `(a[..s] + b[s..], b[..s] + a[s..])`. Genomes shorter than 2 bits have
/// no valid cut and are returned unchanged.
///
/// # Errors
/// [`GaError::LengthMismatch`] if the parents differ in length.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::{single_point_crossover, Genome};
/// use u_bitga::random::create_rng;
///
/// let a: Genome = "0000".parse().unwrap();
/// let b: Genome = "1111".parse().unwrap();
/// let (c, d) = single_point_crossover(&a, &b, &mut create_rng(1)).unwrap();
///
/// assert!(c.to_string().starts_with('0') && c.to_string().ends_with('1'));
/// assert_eq!(c.count_ones() + d.count_ones(), 4);
/// ```
pub fn single_point_crossover<R: Rng>(
    a: &Genome,
    b: &Genome,
    rng: &mut R,
) -> Result<(Genome, Genome)> {
    if a.len() != b.len() {
        return Err(GaError::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    let n = a.len();
    if n < 2 {
        return Ok((a.clone(), b.clone()));
    }

    let split = rng.random_range(1..n);
    Ok((a.splice(b, split), b.splice(a, split)))
}

/// The default [`Crossover`]: [`single_point_crossover`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinglePointCrossover;

impl Crossover for SinglePointCrossover {
    fn crossover<R: Rng>(&self, a: &Genome, b: &Genome, rng: &mut R) -> Result<(Genome, Genome)> {
        single_point_crossover(a, b, rng)
    }
}

// ============================================================================
// Mutation
// ============================================================================

/// Bit-flip mutation.
///
/// Runs `count` independent trials. Each trial picks a uniformly random
/// position (positions may repeat across trials) and flips it when a fresh
/// draw from `[0, 1)` is below `probability`. An empty genome is returned
/// as is.
///
/// # Complexity
/// O(count)
pub fn mutation<R: Rng>(mut genome: Genome, count: usize, probability: f64, rng: &mut R) -> Genome {
    let n = genome.len();
    if n == 0 {
        return genome;
    }
    for _ in 0..count {
        let idx = rng.random_range(0..n);
        if rng.random::<f64>() < probability {
            genome.flip(idx);
        }
    }
    genome
}

/// The default [`Mutator`]: [`mutation`] with fixed parameters.
///
/// ```
/// use u_bitga::ga::BitFlipMutation;
///
/// let m = BitFlipMutation::default();
/// assert_eq!(m.count, 1);
/// assert!((m.probability - 0.5).abs() < 1e-12);
///
/// let m = BitFlipMutation::default().with_count(3).with_probability(1.5);
/// assert_eq!(m.count, 3);
/// assert!((m.probability - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitFlipMutation {
    /// Number of flip trials per genome.
    pub count: usize,

    /// Chance that a trial flips its bit (0.0–1.0).
    pub probability: f64,
}

impl Default for BitFlipMutation {
    fn default() -> Self {
        Self {
            count: 1,
            probability: 0.5,
        }
    }
}

impl BitFlipMutation {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the flip probability, clamped to `[0, 1]`.
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        self
    }
}

impl Mutator for BitFlipMutation {
    fn mutate<R: Rng>(&self, genome: Genome, rng: &mut R) -> Genome {
        mutation(genome, self.count, self.probability, rng)
    }
}
