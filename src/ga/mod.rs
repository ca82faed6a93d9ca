//! Binary-genome Genetic Algorithm.
//!
//! A generic GA over fixed-length bit vectors. The caller supplies a
//! [`FitnessFunction`] and a [`GaConfig`]; the runner handles
//! initialization, elitist generation stepping and termination. Every
//! operator sits behind a trait, so any of them can be replaced.
//!
//! # Core Traits
//!
//! - [`FitnessFunction`]: scores a [`Genome`]; 0 means infeasible
//! - [`Initializer`], [`Selector`], [`Crossover`], [`Mutator`]: the four
//!   pluggable operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Run parameters (population size, limits, seed)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final population, stop generation and [`Termination`]
//! - [`KnapsackFitness`]: 0/1 knapsack evaluator with hard invalidation
//!
//! # Example
//!
//! ```
//! use u_bitga::ga::{GaConfig, GaRunner, Item, KnapsackFitness};
//!
//! let fitness = KnapsackFitness::new(
//!     vec![Item::new(1.0, 4), Item::new(2.0, 5), Item::new(3.0, 9), Item::new(1.0, 1)],
//!     4.0,
//! )
//! .unwrap();
//! let config = GaConfig::new(4)
//!     .with_fitness_limit(13)
//!     .with_generation_limit(200)
//!     .with_seed(7);
//!
//! let result = GaRunner::run(&fitness, &config).unwrap();
//! assert!(result.is_success() || result.generations == 200);
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod fitness;
mod genome;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use fitness::{FitnessFunction, Item, KnapsackFitness};
pub use genome::{generate_genome, generate_population, Genome, Population};
pub use operators::{
    mutation, single_point_crossover, BitFlipMutation, RandomInitializer, SinglePointCrossover,
};
pub use runner::{GaResult, GaRunner, Operators, Termination, ELITE_COUNT};
pub use selection::{select_pair, Selection};
pub use types::{Crossover, Initializer, Mutator, Selector};
