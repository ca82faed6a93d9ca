//! Fitness evaluation contract and the knapsack evaluator.
//!
//! Fitness is a non-negative integer; 0 marks an infeasible candidate.
//! Evaluation must be deterministic: the same genome against the same
//! context always scores the same.

use super::genome::Genome;
use crate::error::{GaError, Result};

/// Scores a genome.
///
/// Implemented for any `Fn(&Genome) -> Result<u64>`, so a closure that
/// captures its own domain data can be passed directly:
///
/// ```
/// use u_bitga::ga::{FitnessFunction, Genome};
///
/// let onemax = |g: &Genome| -> u_bitga::Result<u64> { Ok(g.count_ones() as u64) };
/// let g: Genome = "1011".parse().unwrap();
/// assert_eq!(onemax.evaluate(&g).unwrap(), 3);
/// ```
pub trait FitnessFunction {
    /// Returns the genome's score, or an error when the genome does not
    /// fit the evaluator's context.
    fn evaluate(&self, genome: &Genome) -> Result<u64>;
}

impl<F> FitnessFunction for F
where
    F: Fn(&Genome) -> Result<u64>,
{
    fn evaluate(&self, genome: &Genome) -> Result<u64> {
        self(genome)
    }
}

/// One selectable item: the resource it consumes and the value it adds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub cost: f64,
    pub value: u64,
}

impl Item {
    pub fn new(cost: f64, value: u64) -> Self {
        Self { cost, value }
    }
}

/// 0/1 knapsack evaluator with hard invalidation.
///
/// Bit `i` selects `items[i]`. Bits are scanned in order while cost and
/// value accumulate; the moment the accumulated cost exceeds `cost_limit`
/// the whole genome scores 0, even if nothing after that point is set.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::{FitnessFunction, Item, KnapsackFitness};
///
/// let fitness = KnapsackFitness::new(
///     vec![Item::new(2.0, 5), Item::new(3.0, 7), Item::new(4.0, 9)],
///     5.0,
/// )
/// .unwrap();
///
/// assert_eq!(fitness.evaluate(&"110".parse().unwrap()).unwrap(), 12);
/// assert_eq!(fitness.evaluate(&"111".parse().unwrap()).unwrap(), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackFitness {
    items: Vec<Item>,
    cost_limit: f64,
}

impl KnapsackFitness {
    /// Creates the evaluator.
    ///
    /// Costs and the limit must be finite and non-negative.
    pub fn new(items: Vec<Item>, cost_limit: f64) -> Result<Self> {
        if !cost_limit.is_finite() || cost_limit < 0.0 {
            return Err(GaError::InvalidConfig(format!(
                "cost_limit must be finite and non-negative, got {cost_limit}"
            )));
        }
        if let Some((i, item)) = items
            .iter()
            .enumerate()
            .find(|(_, item)| !item.cost.is_finite() || item.cost < 0.0)
        {
            return Err(GaError::InvalidConfig(format!(
                "item {i} has invalid cost {}",
                item.cost
            )));
        }
        Ok(Self { items, cost_limit })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn cost_limit(&self) -> f64 {
        self.cost_limit
    }

    /// Genome length this evaluator accepts.
    pub fn genome_length(&self) -> usize {
        self.items.len()
    }

    /// Total cost of the selected items, regardless of the limit.
    pub fn total_cost(&self, genome: &Genome) -> Result<f64> {
        self.check_length(genome)?;
        Ok(genome.ones().map(|i| self.items[i].cost).sum())
    }

    fn check_length(&self, genome: &Genome) -> Result<()> {
        if genome.len() != self.items.len() {
            return Err(GaError::LengthMismatch {
                expected: self.items.len(),
                actual: genome.len(),
            });
        }
        Ok(())
    }
}

impl FitnessFunction for KnapsackFitness {
    fn evaluate(&self, genome: &Genome) -> Result<u64> {
        self.check_length(genome)?;

        let mut cost = 0.0;
        let mut value = 0u64;
        for (selected, item) in genome.iter().zip(&self.items) {
            if selected {
                cost += item.cost;
                value = value.saturating_add(item.value);
            }
            if cost > self.cost_limit {
                return Ok(0);
            }
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn items() -> Vec<Item> {
        vec![
            Item::new(1.5, 8),
            Item::new(2.0, 8),
            Item::new(0.5, 10),
            Item::new(0.5, 6),
            Item::new(2.0, 4),
        ]
    }

    fn genome(s: &str) -> Genome {
        s.parse().unwrap()
    }

    #[test]
    fn test_value_within_limit() {
        let f = KnapsackFitness::new(items(), 6.0).unwrap();
        assert_eq!(f.evaluate(&genome("11110")).unwrap(), 32);
        assert_eq!(f.evaluate(&genome("00000")).unwrap(), 0);
    }

    #[test]
    fn test_exactly_at_limit_is_valid() {
        let f = KnapsackFitness::new(items(), 4.0).unwrap();
        // 1.5 + 2.0 + 0.5 == 4.0, not strictly above.
        assert_eq!(f.evaluate(&genome("11100")).unwrap(), 26);
    }

    #[test]
    fn test_over_limit_scores_zero() {
        let f = KnapsackFitness::new(items(), 6.0).unwrap();
        assert_eq!(f.evaluate(&genome("11111")).unwrap(), 0);
    }

    #[test]
    fn test_length_mismatch() {
        let f = KnapsackFitness::new(items(), 6.0).unwrap();
        assert_eq!(
            f.evaluate(&genome("111")),
            Err(GaError::LengthMismatch {
                expected: 5,
                actual: 3
            })
        );
        assert!(f.total_cost(&genome("111111")).is_err());
    }

    #[test]
    fn test_rejects_bad_context() {
        assert!(KnapsackFitness::new(items(), -1.0).is_err());
        assert!(KnapsackFitness::new(items(), f64::NAN).is_err());
        assert!(KnapsackFitness::new(vec![Item::new(f64::INFINITY, 1)], 1.0).is_err());
        assert!(KnapsackFitness::new(vec![Item::new(-0.5, 1)], 1.0).is_err());
    }

    #[test]
    fn test_empty_context() {
        let f = KnapsackFitness::new(vec![], 1.0).unwrap();
        assert_eq!(f.evaluate(&Genome::default()).unwrap(), 0);
        assert_eq!(f.genome_length(), 0);
    }

    #[test]
    fn test_total_cost() {
        let f = KnapsackFitness::new(items(), 6.0).unwrap();
        assert!((f.total_cost(&genome("10101")).unwrap() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_closure_fitness() {
        let onemax = |g: &Genome| -> Result<u64> { Ok(g.count_ones() as u64) };
        assert_eq!(onemax.evaluate(&genome("0111")).unwrap(), 3);
    }

    fn arb_items() -> impl Strategy<Value = Vec<Item>> {
        proptest::collection::vec((0u32..8, 0u64..20), 1..16).prop_map(|v| {
            v.into_iter()
                .map(|(c, value)| Item::new(f64::from(c) * 0.5, value))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_deterministic(items in arb_items(), bits in proptest::collection::vec(any::<bool>(), 16)) {
            let n = items.len();
            let f = KnapsackFitness::new(items, 6.0).unwrap();
            let g = Genome::new(bits[..n].to_vec());
            prop_assert_eq!(f.evaluate(&g).unwrap(), f.evaluate(&g).unwrap());
        }

        #[test]
        fn prop_prefix_invalidation(
            items in arb_items(),
            bits in proptest::collection::vec(any::<bool>(), 16),
            limit in 0u32..10,
        ) {
            let n = items.len();
            let limit = f64::from(limit);
            let f = KnapsackFitness::new(items.clone(), limit).unwrap();
            let g = Genome::new(bits[..n].to_vec());

            let mut cost = 0.0;
            let mut overflowed = false;
            for (selected, item) in g.iter().zip(&items) {
                if selected {
                    cost += item.cost;
                }
                if cost > limit {
                    overflowed = true;
                    break;
                }
            }

            let score = f.evaluate(&g).unwrap();
            if overflowed {
                prop_assert_eq!(score, 0);
            } else {
                let expected: u64 = g.ones().map(|i| items[i].value).sum();
                prop_assert_eq!(score, expected);
            }
        }
    }
}
