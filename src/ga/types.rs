//! Operator capability traits.
//!
//! The runner is generic over four operators. Each has a default
//! implementation in this crate, and any of them can be swapped for a
//! user type implementing the same trait:
//!
//! | Trait | Default |
//! |---|---|
//! | [`Initializer`] | [`RandomInitializer`](super::RandomInitializer) |
//! | [`Selector`] | [`Selection::Roulette`](super::Selection::Roulette) |
//! | [`Crossover`] | [`SinglePointCrossover`](super::SinglePointCrossover) |
//! | [`Mutator`] | [`BitFlipMutation`](super::BitFlipMutation) |
//!
//! Fitness evaluation is the fifth seam; see
//! [`FitnessFunction`](super::FitnessFunction).

use super::genome::{Genome, Population};
use crate::error::Result;
use rand::Rng;

/// Produces the starting population.
pub trait Initializer {
    /// Creates `size` genomes of `genome_length` bits each.
    ///
    /// The runner rejects a population of another size or with genomes of
    /// another length.
    fn initialize<R: Rng>(&self, size: usize, genome_length: usize, rng: &mut R) -> Population;
}

/// Picks two parents from a scored population.
pub trait Selector {
    /// Returns the indices of two parents.
    ///
    /// `scores[i]` is the fitness of `population[i]`; both slices have the
    /// same, non-zero length. Draws are independent, so both indices may be
    /// equal. Returned indices must be in range; the runner indexes with them
    /// directly.
    fn select_pair<R: Rng>(
        &self,
        population: &[Genome],
        scores: &[u64],
        rng: &mut R,
    ) -> (usize, usize);
}

/// Recombines two parents into two offspring.
pub trait Crossover {
    /// Fails with [`GaError::LengthMismatch`](crate::GaError::LengthMismatch)
    /// when the parents differ in length.
    fn crossover<R: Rng>(&self, a: &Genome, b: &Genome, rng: &mut R) -> Result<(Genome, Genome)>;
}

/// Perturbs a genome.
///
/// Takes the genome by value and returns the mutated genome.
pub trait Mutator {
    /// Must preserve the genome's length.
    fn mutate<R: Rng>(&self, genome: Genome, rng: &mut R) -> Genome;
}
