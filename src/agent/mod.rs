pub mod base;
pub mod ids;
pub mod learning;
pub mod simple;

pub use base::AgentCore;
pub use ids::{IdSource, RandomIds, SequentialIds};
pub use learning::LearningAgent;
pub use simple::{FixedAgent, RandomAgent};

use crate::choice::Choice;
use crate::error::Result;
use crate::network::{Neighbourhood, SocialNetwork};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(u64);

impl AgentId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Per round the driver calls `prepare`, then `choose`, then `update` once
/// with the minority side.
pub trait Agent: Send + Sync + fmt::Debug {
    fn core(&self) -> &AgentCore;

    fn core_mut(&mut self) -> &mut AgentCore;

    fn choose(&mut self) -> Result<Choice>;

    fn prepare(&mut self) -> Result<()> {
        Ok(())
    }

    /// Feeds the round's minority side back. Calling it twice in one round
    /// double-counts.
    fn update(&mut self, minority: Choice) -> Result<()> {
        self.core_mut().update(minority);
        Ok(())
    }

    fn id(&self) -> AgentId {
        self.core().id()
    }

    fn choice(&self) -> Result<Choice> {
        self.core().choice()
    }

    fn prediction(&self) -> Result<Choice> {
        self.core().prediction()
    }

    fn score(&self) -> u64 {
        self.core().score()
    }

    fn correct_prediction_count(&self) -> u64 {
        self.core().correct_prediction_count()
    }

    fn increment_score(&mut self) {
        self.core_mut().increment_score();
    }

    fn increment_correct_prediction_count(&mut self) {
        self.core_mut().increment_correct_prediction_count();
    }

    fn neighbourhood(&self) -> Option<&Neighbourhood> {
        self.core().neighbourhood()
    }

    fn set_neighbourhood(&mut self, neighbourhood: Option<Neighbourhood>) {
        self.core_mut().set_neighbourhood(neighbourhood);
    }

    fn friends(&self) -> Result<Vec<AgentId>> {
        self.core().friends()
    }

    fn social_network(&self) -> Result<&Arc<SocialNetwork>> {
        self.core().social_network()
    }

    fn best_friend(&self) -> AgentId {
        self.id()
    }

    /// Total order by id; only an agent compared with itself is `Equal`.
    fn compare_to(&self, other: &dyn Agent) -> Ordering {
        self.id().cmp(&other.id())
    }
}
