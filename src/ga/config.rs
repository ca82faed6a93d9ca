//! GA configuration.
//!
//! [`GaConfig`] holds the parameters that shape one evolutionary run.

use crate::error::{GaError, Result};

/// Configuration for a binary GA run.
///
/// # Defaults
///
/// ```
/// use u_bitga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 10);
/// assert_eq!(config.fitness_limit, 50);
/// assert_eq!(config.generation_limit, 50);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_bitga::ga::GaConfig;
///
/// let config = GaConfig::new(10)
///     .with_population_size(20)
///     .with_fitness_limit(45)
///     .with_generation_limit(100)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of genomes per generation.
    ///
    /// Must be even and at least 2: each generation keeps 2 elites and
    /// breeds `population_size / 2 - 1` pairs of children.
    pub population_size: usize,

    /// Bits per genome. Must match the fitness context.
    pub genome_length: usize,

    /// The run succeeds as soon as the best genome scores at least this.
    pub fitness_limit: u64,

    /// Maximum number of generations before the run is exhausted.
    pub generation_limit: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            genome_length: 0,
            fitness_limit: 50,
            generation_limit: 50,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Creates a default configuration for genomes of `genome_length` bits.
    pub fn new(genome_length: usize) -> Self {
        Self {
            genome_length,
            ..Self::default()
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the genome length.
    pub fn with_genome_length(mut self, n: usize) -> Self {
        self.genome_length = n;
        self
    }

    /// Sets the fitness score that ends the run successfully.
    pub fn with_fitness_limit(mut self, limit: u64) -> Self {
        self.fitness_limit = limit;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_generation_limit(mut self, n: usize) -> Self {
        self.generation_limit = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of crossover pairs bred per generation.
    pub fn breeding_pairs(&self) -> usize {
        (self.population_size / 2).saturating_sub(1)
    }

    /// Validates the configuration.
    ///
    /// Rejects zero-length genomes, populations that are odd or smaller
    /// than 2, and a zero generation limit.
    pub fn validate(&self) -> Result<()> {
        if self.genome_length == 0 {
            return Err(GaError::InvalidConfig(
                "genome_length must be at least 1".into(),
            ));
        }
        if self.population_size < 2 {
            return Err(GaError::InvalidConfig(format!(
                "population_size must be at least 2, got {}",
                self.population_size
            )));
        }
        if self.population_size % 2 != 0 {
            return Err(GaError::InvalidConfig(format!(
                "population_size must be even, got {}",
                self.population_size
            )));
        }
        if self.generation_limit == 0 {
            return Err(GaError::InvalidConfig(
                "generation_limit must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
