pub mod collection;
pub mod generators;

pub use collection::StrategyCollection;
pub use generators::{RandomStrategyGenerator, TableStrategyGenerator};

use crate::choice::Choice;
use crate::error::{GameError, Result};
use std::fmt;

/// A fixed lookup table from memory key to predicted minority choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strategy {
    table: Vec<Choice>,
    key_length: usize,
    score: u64,
}

impl Strategy {
    pub fn new(table: Vec<Choice>) -> Result<Self> {
        let len = table.len();
        if len < 2 || !len.is_power_of_two() {
            return Err(GameError::InvalidStrategyTable { len });
        }
        Ok(Self {
            key_length: len.trailing_zeros() as usize,
            table,
            score: 0,
        })
    }

    pub fn key_length(&self) -> usize {
        self.key_length
    }

    pub fn table(&self) -> &[Choice] {
        &self.table
    }

    pub fn predict(&self, key: usize) -> Result<Choice> {
        self.table
            .get(key)
            .copied()
            .ok_or(GameError::KeyOutOfRange {
                key,
                table_len: self.table.len(),
            })
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn increment_score(&mut self) {
        self.score += 1;
    }

    pub fn score_against(&mut self, key: usize, outcome: Choice) -> Result<bool> {
        let hit = self.predict(key)? == outcome;
        if hit {
            self.increment_score();
        }
        Ok(hit)
    }

    pub fn fresh_copy(&self) -> Self {
        Self {
            table: self.table.clone(),
            key_length: self.key_length,
            score: 0,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for choice in &self.table {
            write!(f, "{}", choice)?;
        }
        write!(f, " ({})", self.score)
    }
}

pub trait StrategyGenerator: Send + fmt::Debug {
    fn generate(&mut self, key_length: usize) -> Result<Strategy>;

    fn generate_many(&mut self, key_length: usize, count: usize) -> Result<Vec<Strategy>> {
        (0..count).map(|_| self.generate(key_length)).collect()
    }
}
