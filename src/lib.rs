pub mod agent;
pub mod choice;
pub mod error;
pub mod factories;
pub mod memory;
pub mod metrics;
pub mod network;
pub mod simulation;
pub mod strategies;

pub use agent::{Agent, AgentId, LearningAgent};
pub use choice::Choice;
pub use error::{GameError, Result};
pub use memory::ChoiceMemory;
pub use network::{Neighbourhood, SocialNetwork};
pub use simulation::{GameConfig, RoundResolver, Simulation};
pub use strategies::{Strategy, StrategyCollection};
pub use metrics::MetricsCollector;

pub mod prelude {
    pub use crate::agent::{Agent, AgentCore, AgentId, IdSource, LearningAgent, SequentialIds};
    pub use crate::choice::Choice;
    pub use crate::error::{GameError, InvalidState};
    pub use crate::factories::{
        AgentFactory, CompleteSocialNetworkFactory, LearningAgentFactory, Population,
        SocialNetworkFactory,
    };
    pub use crate::memory::ChoiceMemory;
    pub use crate::network::{Friendship, Neighbourhood, SocialNetwork};
    pub use crate::simulation::{GameConfig, GameRegistry, RoundOutcome, RoundResolver, Simulation, TiePolicy};
    pub use crate::strategies::{Strategy, StrategyCollection, StrategyGenerator};
    pub use crate::metrics::RoundSnapshot;
}
