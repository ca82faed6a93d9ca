//! Error types shared by every component of the crate.

use thiserror::Error;

/// Errors reported by the GA engine and its default operators.
///
/// Reaching the generation limit is **not** an error; see
/// [`Termination::Exhausted`](crate::ga::Termination::Exhausted).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GaError {
    /// Two sequences that must share a length do not.
    ///
    /// Raised for a genome evaluated against a fitness context of another
    /// length, for crossover parents of unequal length, and for an
    /// initializer that produced genomes of the wrong length.
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// An initializer produced the wrong number of genomes.
    #[error("population size mismatch: expected {expected}, got {actual}")]
    PopulationSizeMismatch { expected: usize, actual: usize },

    /// Rejected configuration or fitness context.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Selection was asked to draw from an empty population.
    #[error("cannot select from empty population")]
    EmptyPopulation,

    /// A selector returned a parent index outside the population.
    #[error("selected index {index} out of range for population of {len}")]
    SelectionOutOfRange { index: usize, len: usize },

    /// A genome was parsed from a character that is not `0` or `1`.
    #[error("invalid bit {0:?}: expected '0' or '1'")]
    InvalidBit(char),

    /// A genome was built from a byte that is not 0 or 1.
    #[error("invalid bit value {0}: expected 0 or 1")]
    InvalidByte(u8),
}

pub type Result<T> = std::result::Result<T, GaError>;
