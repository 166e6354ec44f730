use super::SocialNetwork;
use crate::agent::AgentId;
use crate::error::{GameError, Result};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Neighbourhood {
    network: Arc<SocialNetwork>,
    owner: AgentId,
}

impl Neighbourhood {
    pub fn new(network: Arc<SocialNetwork>, owner: AgentId) -> Result<Self> {
        if !network.contains(owner) {
            return Err(GameError::UnknownAgent(owner));
        }
        Ok(Self { network, owner })
    }

    pub fn owner(&self) -> AgentId {
        self.owner
    }

    pub fn friends(&self) -> Vec<AgentId> {
        // owner membership is checked in new()
        self.network.friends_of(self.owner).unwrap_or_default()
    }

    pub fn social_network(&self) -> &Arc<SocialNetwork> {
        &self.network
    }

    pub fn best_friend(&self) -> AgentId {
        self.owner
    }

    /// Highest-scoring agent among the owner and its friends, lowest id on
    /// ties. Friends without a known score are skipped.
    pub fn best_scoring_friend<F>(&self, score_of: F) -> AgentId
    where
        F: Fn(AgentId) -> Option<u64>,
    {
        let mut best = self.owner;
        let mut best_score = score_of(self.owner).unwrap_or(0);

        for friend in self.friends() {
            let Some(score) = score_of(friend) else {
                continue;
            };
            if score > best_score || (score == best_score && friend < best) {
                best = friend;
                best_score = score;
            }
        }
        best
    }
}
