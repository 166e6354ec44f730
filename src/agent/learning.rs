use super::{Agent, AgentCore, AgentId};
use crate::choice::Choice;
use crate::error::{GameError, InvalidState, Result};
use crate::memory::ChoiceMemory;
use crate::strategies::StrategyCollection;
use tracing::trace;

/// Follows whichever of its private strategies has predicted the minority
/// best so far.
#[derive(Debug, Clone)]
pub struct LearningAgent {
    core: AgentCore,
    strategies: StrategyCollection,
    memory: ChoiceMemory,
    prepared: bool,
}

impl LearningAgent {
    pub fn new(id: AgentId, strategies: StrategyCollection, memory: ChoiceMemory) -> Result<Self> {
        if strategies.key_length() != memory.length() {
            return Err(GameError::MismatchedKeyLength {
                expected: memory.length(),
                found: strategies.key_length(),
            });
        }
        Ok(Self {
            core: AgentCore::new(id),
            strategies,
            memory,
            prepared: false,
        })
    }

    pub fn strategies(&self) -> &StrategyCollection {
        &self.strategies
    }

    pub fn memory(&self) -> &ChoiceMemory {
        &self.memory
    }

    pub fn adopt_strategies(&mut self, strategies: StrategyCollection) -> Result<()> {
        if strategies.key_length() != self.memory.length() {
            return Err(GameError::MismatchedKeyLength {
                expected: self.memory.length(),
                found: strategies.key_length(),
            });
        }
        self.strategies = strategies;
        self.prepared = false;
        Ok(())
    }
}

impl Agent for LearningAgent {
    fn core(&self) -> &AgentCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AgentCore {
        &mut self.core
    }

    fn prepare(&mut self) -> Result<()> {
        let key = self.memory.current_key();
        let prediction = self.strategies.best_strategy().predict(key)?;
        self.core.set_prediction(prediction);
        self.prepared = true;
        Ok(())
    }

    fn choose(&mut self) -> Result<Choice> {
        if !self.prepared {
            return Err(InvalidState::NotPrepared.into());
        }
        let choice = self.core.prediction()?;
        self.core.set_choice(choice);
        Ok(choice)
    }

    fn update(&mut self, minority: Choice) -> Result<()> {
        let won = self.core.update(minority);

        // score against the key the prediction was made from, then move on
        let key = self.memory.current_key();
        self.strategies.update_scores(key, minority)?;
        self.memory.record(minority);

        if won {
            self.core.increment_correct_prediction_count();
        }
        self.prepared = false;

        trace!(
            agent = %self.core.id(),
            key,
            %minority,
            won,
            best = self.strategies.best_index(),
            "learning agent updated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::Strategy;
    use Choice::{A, B};

    // key length 1: tables map key 0 / key 1
    fn agent(tables: &[[Choice; 2]]) -> LearningAgent {
        let strategies = StrategyCollection::new(
            tables
                .iter()
                .map(|t| Strategy::new(t.to_vec()).unwrap())
                .collect(),
        )
        .unwrap();
        LearningAgent::new(AgentId::new(1), strategies, ChoiceMemory::new(1).unwrap()).unwrap()
    }

    fn scores(agent: &LearningAgent) -> Vec<u64> {
        agent.strategies().iter().map(Strategy::score).collect()
    }

    #[test]
    fn key_lengths_must_agree() {
        let strategies =
            StrategyCollection::new(vec![Strategy::new(vec![A, B, A, B]).unwrap()]).unwrap();
        let result = LearningAgent::new(AgentId::new(1), strategies, ChoiceMemory::new(3).unwrap());
        assert!(matches!(
            result,
            Err(GameError::MismatchedKeyLength { expected: 3, found: 2 })
        ));
    }

    #[test]
    fn prepare_predicts_with_best_strategy() {
        let mut agent = agent(&[[B, A], [A, A]]);
        agent.prepare().unwrap();
        // empty memory -> key 0, first strategy wins the tie
        assert_eq!(agent.prediction().unwrap(), B);
    }

    #[test]
    fn choose_adopts_prediction() {
        let mut agent = agent(&[[A, B]]);
        agent.prepare().unwrap();
        assert_eq!(agent.choose().unwrap(), agent.prediction().unwrap());
        assert_eq!(agent.choice().unwrap(), A);
    }

    #[test]
    fn choose_without_prepare_is_invalid() {
        let mut agent = agent(&[[A, B]]);
        assert!(matches!(
            agent.choose(),
            Err(GameError::InvalidState(InvalidState::NotPrepared))
        ));
    }

    #[test]
    fn each_round_needs_a_fresh_prepare() {
        let mut agent = agent(&[[A, B]]);
        agent.prepare().unwrap();
        agent.choose().unwrap();
        agent.update(B).unwrap();
        assert!(agent.choose().unwrap_err().is_invalid_state());
    }

    #[test]
    fn update_scores_every_matching_strategy() {
        let mut agent = agent(&[[A, B], [B, B], [A, A]]);
        agent.prepare().unwrap();
        agent.choose().unwrap();

        // pre-update key is 0, only the second strategy says B there
        agent.update(B).unwrap();
        assert_eq!(scores(&agent), vec![0, 1, 0]);
        assert_eq!(agent.memory().current_key(), 1);
    }

    #[test]
    fn agent_switches_to_better_strategy() {
        let mut agent = agent(&[[A, A], [B, B]]);
        for _ in 0..2 {
            agent.prepare().unwrap();
            agent.choose().unwrap();
            agent.update(B).unwrap();
        }
        agent.prepare().unwrap();
        assert_eq!(agent.strategies().best_index(), 1);
        assert_eq!(agent.choose().unwrap(), B);
    }

    #[test]
    fn winning_counts_score_and_correct_prediction() {
        let mut agent = agent(&[[A, B]]);
        agent.prepare().unwrap();
        agent.choose().unwrap();
        agent.update(A).unwrap();
        assert_eq!(agent.score(), 1);
        assert_eq!(agent.correct_prediction_count(), 1);

        agent.prepare().unwrap();
        // key now 0 again -> A, lose to B
        agent.choose().unwrap();
        agent.update(B).unwrap();
        assert_eq!(agent.score(), 1);
        assert_eq!(agent.correct_prediction_count(), 1);
    }

    #[test]
    fn adopt_strategies_checks_key_length() {
        let mut agent = agent(&[[A, B]]);
        let wider =
            StrategyCollection::new(vec![Strategy::new(vec![A, B, A, B]).unwrap()]).unwrap();
        assert!(agent.adopt_strategies(wider).is_err());

        let same = StrategyCollection::new(vec![Strategy::new(vec![B, B]).unwrap()]).unwrap();
        agent.adopt_strategies(same).unwrap();
        agent.prepare().unwrap();
        assert_eq!(agent.prediction().unwrap(), B);
    }
}
