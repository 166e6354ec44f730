use super::AgentId;
use crate::choice::Choice;
use crate::error::{InvalidState, Result};
use crate::network::{Neighbourhood, SocialNetwork};
use std::sync::Arc;

/// Choice and prediction are unset until the matching phase first runs and
/// are overwritten every round after that. Both counters only grow.
#[derive(Debug, Clone)]
pub struct AgentCore {
    id: AgentId,
    neighbourhood: Option<Neighbourhood>,
    choice: Option<Choice>,
    prediction: Option<Choice>,
    score: u64,
    correct_prediction_count: u64,
}

impl AgentCore {
    pub fn new(id: AgentId) -> Self {
        Self {
            id,
            neighbourhood: None,
            choice: None,
            prediction: None,
            score: 0,
            correct_prediction_count: 0,
        }
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn choice(&self) -> Result<Choice> {
        self.choice.ok_or(InvalidState::ChoiceNotMade.into())
    }

    pub fn set_choice(&mut self, choice: Choice) {
        self.choice = Some(choice);
    }

    pub fn prediction(&self) -> Result<Choice> {
        self.prediction.ok_or(InvalidState::PredictionNotMade.into())
    }

    pub fn set_prediction(&mut self, prediction: Choice) {
        self.prediction = Some(prediction);
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn correct_prediction_count(&self) -> u64 {
        self.correct_prediction_count
    }

    pub fn increment_score(&mut self) {
        self.score += 1;
    }

    pub fn increment_correct_prediction_count(&mut self) {
        self.correct_prediction_count += 1;
    }

    pub fn neighbourhood(&self) -> Option<&Neighbourhood> {
        self.neighbourhood.as_ref()
    }

    pub fn set_neighbourhood(&mut self, neighbourhood: Option<Neighbourhood>) {
        self.neighbourhood = neighbourhood;
    }

    pub fn friends(&self) -> Result<Vec<AgentId>> {
        Ok(self.attached()?.friends())
    }

    pub fn social_network(&self) -> Result<&Arc<SocialNetwork>> {
        Ok(self.attached()?.social_network())
    }

    /// Rewards the agent if it sat on the minority side.
    /// Returns whether it did; an agent that never chose is not rewarded.
    pub fn update(&mut self, minority: Choice) -> bool {
        let won = self.choice == Some(minority);
        if won {
            self.increment_score();
        }
        won
    }

    fn attached(&self) -> Result<&Neighbourhood> {
        self.neighbourhood
            .as_ref()
            .ok_or(InvalidState::NoNeighbourhood.into())
    }
}
