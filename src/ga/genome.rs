//! Binary genome and population model, plus the random generators.
//!
//! A [`Genome`] is a fixed-length vector of bits. A [`Population`] is an
//! ordered collection of genomes that, inside a run, always share one
//! length.

use crate::error::{GaError, Result};
use rand::Rng;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// An ordered, fixed-length sequence of bits.
///
/// Equality, hashing and ordering are by content. Zero-length genomes are
/// representable.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::Genome;
///
/// let g: Genome = "0110".parse().unwrap();
/// assert_eq!(g.len(), 4);
/// assert!(g[1]);
/// assert_eq!(g.count_ones(), 2);
/// assert_eq!(g.to_string(), "0110");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genome {
    bits: Vec<bool>,
}

/// An ordered collection of genomes.
pub type Population = Vec<Genome>;

impl Genome {
    /// Creates a genome from its bits.
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Creates a genome from `0`/`1` byte values.
    ///
    /// Any other value is rejected with [`GaError::InvalidByte`].
    pub fn from_binary(values: &[u8]) -> Result<Self> {
        values
            .iter()
            .map(|&v| match v {
                0 => Ok(false),
                1 => Ok(true),
                other => Err(GaError::InvalidByte(other)),
            })
            .collect::<Result<Vec<bool>>>()
            .map(Self::new)
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the bit at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Number of bits set to 1.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Indices of the bits set to 1, in ascending order.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.as_slice().iter().copied()
    }

    /// Borrows the bits in order.
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// The bits as `0`/`1` bytes.
    pub fn to_binary(&self) -> Vec<u8> {
        self.iter().map(u8::from).collect()
    }

    /// Inverts the bit at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub(crate) fn flip(&mut self, index: usize) {
        self.bits[index] = !self.bits[index];
    }

    /// Joins `self[..split]` with `other[split..]`.
    pub(crate) fn splice(&self, other: &Genome, split: usize) -> Genome {
        let mut bits = Vec::with_capacity(self.len());
        bits.extend_from_slice(&self.as_slice()[..split]);
        bits.extend_from_slice(&other.as_slice()[split..]);
        Genome { bits }
    }
}

impl Index<usize> for Genome {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        &self.bits[index]
    }
}

impl From<Vec<bool>> for Genome {
    fn from(bits: Vec<bool>) -> Self {
        Self::new(bits)
    }
}

impl FromIterator<bool> for Genome {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            f.write_str(if b { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Genome {
    type Err = GaError;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(GaError::InvalidBit(other)),
            })
            .collect()
    }
}

/// Generates a genome of `length` independent, uniformly random bits.
///
/// A `length` of 0 yields an empty genome.
pub fn generate_genome<R: Rng>(length: usize, rng: &mut R) -> Genome {
    (0..length).map(|_| rng.random_bool(0.5)).collect()
}

/// Generates `size` independent random genomes of `genome_length` bits.
///
/// Duplicates are not removed.
pub fn generate_population<R: Rng>(size: usize, genome_length: usize, rng: &mut R) -> Population {
    (0..size)
        .map(|_| generate_genome(genome_length, rng))
        .collect()
}
