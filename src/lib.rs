//! Domain-agnostic binary-genome genetic algorithm.
//!
//! Searches a fixed-length bit space for a high-fitness assignment by
//! selection, single-point crossover and bit-flip mutation, with two-genome
//! elitism and a fitness/generation termination policy.
//!
//! - [`ga`]: genome model, operators, configuration and runner
//! - [`random`]: seedable RNG construction for reproducible runs
//! - [`error`]: the [`GaError`] taxonomy
//!
//! # Architecture
//!
//! The crate contains no domain concepts. A problem is described entirely
//! by a fitness function over bit vectors; mapping a genome back to domain
//! objects is left to the caller.

pub mod error;
pub mod ga;
pub mod random;

pub use error::{GaError, Result};
