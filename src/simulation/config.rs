use crate::choice::Choice;
use serde::{Deserialize, Serialize};

/// What a round with equal A and B counts resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TiePolicy {
    #[default]
    NoMinority,
    Favour(Choice),
}

impl TiePolicy {
    pub fn resolve(self) -> Option<Choice> {
        match self {
            TiePolicy::NoMinority => None,
            TiePolicy::Favour(choice) => Some(choice),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub name: String,
    pub game_type: String,
    pub num_agents: usize,
    pub memory_length: usize,
    pub strategies_per_agent: usize,
    pub rounds: u64,
    pub seed: u64,
    pub tie_policy: TiePolicy,
    /// Rounds between strategy replacements in evolutionary games.
    pub evolution_interval: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            name: "default_game".to_string(),
            game_type: "standard".to_string(),
            num_agents: 101,
            memory_length: 3,
            strategies_per_agent: 2,
            rounds: 500,
            seed: 42,
            tie_policy: TiePolicy::NoMinority,
            evolution_interval: 50,
        }
    }
}

impl GameConfig {
    pub fn with_game_type(mut self, game_type: impl Into<String>) -> Self {
        self.game_type = game_type.into();
        self
    }

    pub fn with_agents(mut self, num_agents: usize) -> Self {
        self.num_agents = num_agents;
        self
    }

    pub fn with_memory(mut self, memory_length: usize, strategies_per_agent: usize) -> Self {
        self.memory_length = memory_length;
        self.strategies_per_agent = strategies_per_agent;
        self
    }

    pub fn with_rounds(mut self, rounds: u64) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_tie_policy(mut self, tie_policy: TiePolicy) -> Self {
        self.tie_policy = tie_policy;
        self
    }

    pub fn with_evolution_interval(mut self, interval: u64) -> Self {
        self.evolution_interval = interval;
        self
    }
}
