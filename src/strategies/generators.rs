// Built-in strategy generators: random tables for real runs, replayed tables
// for hand-built scenarios.

use super::{Strategy, StrategyGenerator};
use crate::choice::Choice;
use crate::error::{GameError, Result};
use crate::memory::MAX_MEMORY_LENGTH;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

fn check_key_length(key_length: usize) -> Result<()> {
    if key_length == 0 || key_length > MAX_MEMORY_LENGTH {
        return Err(GameError::InvalidMemoryLength {
            length: key_length,
            max: MAX_MEMORY_LENGTH,
        });
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct RandomStrategyGenerator<R: Rng = StdRng> {
    rng: R,
}

impl RandomStrategyGenerator<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomStrategyGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send + std::fmt::Debug> StrategyGenerator for RandomStrategyGenerator<R> {
    fn generate(&mut self, key_length: usize) -> Result<Strategy> {
        check_key_length(key_length)?;
        let table = (0..1usize << key_length)
            .map(|_| {
                if self.rng.gen_bool(0.5) {
                    Choice::B
                } else {
                    Choice::A
                }
            })
            .collect();
        Strategy::new(table)
    }
}

/// Hands out a fixed list of tables in order, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct TableStrategyGenerator {
    tables: VecDeque<Vec<Choice>>,
}

impl TableStrategyGenerator {
    pub fn new(tables: Vec<Vec<Choice>>) -> Self {
        Self {
            tables: tables.into(),
        }
    }
}

impl StrategyGenerator for TableStrategyGenerator {
    fn generate(&mut self, key_length: usize) -> Result<Strategy> {
        check_key_length(key_length)?;
        let table = self
            .tables
            .pop_front()
            .ok_or(GameError::EmptyStrategyCollection)?;
        self.tables.push_back(table.clone());

        let strategy = Strategy::new(table)?;
        if strategy.key_length() != key_length {
            return Err(GameError::MismatchedKeyLength {
                expected: key_length,
                found: strategy.key_length(),
            });
        }
        Ok(strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Choice::{A, B};

    #[test]
    fn random_tables_cover_every_key() {
        let mut generator = RandomStrategyGenerator::seeded(7);
        let strategy = generator.generate(4).unwrap();
        assert_eq!(strategy.table().len(), 16);
        assert_eq!(strategy.key_length(), 4);
    }

    #[test]
    fn same_seed_same_tables() {
        let mut first = RandomStrategyGenerator::seeded(99);
        let mut second = RandomStrategyGenerator::seeded(99);
        assert_eq!(
            first.generate_many(5, 3).unwrap(),
            second.generate_many(5, 3).unwrap()
        );
    }

    #[test]
    fn random_generator_rejects_zero_length() {
        let mut generator = RandomStrategyGenerator::seeded(1);
        assert!(generator.generate(0).is_err());
    }

    #[test]
    fn table_generator_cycles() {
        let mut generator = TableStrategyGenerator::new(vec![vec![A, B], vec![B, B]]);
        let tables: Vec<Vec<Choice>> = (0..3)
            .map(|_| generator.generate(1).unwrap().table().to_vec())
            .collect();
        assert_eq!(tables, vec![vec![A, B], vec![B, B], vec![A, B]]);
    }

    #[test]
    fn table_generator_checks_length() {
        let mut generator = TableStrategyGenerator::new(vec![vec![A, B]]);
        assert!(matches!(
            generator.generate(2),
            Err(GameError::MismatchedKeyLength { expected: 2, found: 1 })
        ));
    }
}
