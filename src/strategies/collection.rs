use super::Strategy;
use crate::choice::Choice;
use crate::error::{GameError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyCollection {
    strategies: Vec<Strategy>,
}

impl StrategyCollection {
    pub fn new(strategies: Vec<Strategy>) -> Result<Self> {
        let first = strategies
            .first()
            .ok_or(GameError::EmptyStrategyCollection)?;
        let expected = first.key_length();
        if let Some(odd) = strategies.iter().find(|s| s.key_length() != expected) {
            return Err(GameError::MismatchedKeyLength {
                expected,
                found: odd.key_length(),
            });
        }
        Ok(Self { strategies })
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    pub fn key_length(&self) -> usize {
        self.strategies[0].key_length()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Strategy> {
        self.strategies.iter()
    }

    /// Index of the highest-scoring strategy; the earliest one wins ties.
    pub fn best_index(&self) -> usize {
        let mut best = 0;
        for (idx, strategy) in self.strategies.iter().enumerate().skip(1) {
            if strategy.score() > self.strategies[best].score() {
                best = idx;
            }
        }
        best
    }

    pub fn best_strategy(&self) -> &Strategy {
        &self.strategies[self.best_index()]
    }

    pub fn update_scores(&mut self, key: usize, outcome: Choice) -> Result<()> {
        for strategy in &mut self.strategies {
            strategy.score_against(key, outcome)?;
        }
        Ok(())
    }

    pub fn fresh_copy(&self) -> Self {
        Self {
            strategies: self.strategies.iter().map(Strategy::fresh_copy).collect(),
        }
    }
}
