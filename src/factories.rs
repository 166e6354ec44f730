// Builders for populations: agents first, then the friendship graph between
// them, then each agent's neighbourhood.

use crate::agent::{Agent, IdSource, LearningAgent};
use crate::error::{GameError, Result};
use crate::memory::ChoiceMemory;
use crate::network::{Friendship, Neighbourhood, SocialNetwork};
use crate::strategies::{StrategyCollection, StrategyGenerator};
use std::sync::Arc;
use tracing::info;

pub trait AgentFactory {
    type Agent: Agent;

    fn create(&mut self) -> Result<Self::Agent>;
}

#[derive(Debug)]
pub struct LearningAgentFactory<G: StrategyGenerator> {
    ids: Arc<dyn IdSource>,
    generator: G,
    memory_length: usize,
    strategies_per_agent: usize,
}

impl<G: StrategyGenerator> LearningAgentFactory<G> {
    pub fn new(
        ids: Arc<dyn IdSource>,
        generator: G,
        memory_length: usize,
        strategies_per_agent: usize,
    ) -> Self {
        Self {
            ids,
            generator,
            memory_length,
            strategies_per_agent,
        }
    }

    pub fn strategy_collection(&mut self) -> Result<StrategyCollection> {
        let strategies = self
            .generator
            .generate_many(self.memory_length, self.strategies_per_agent)?;
        StrategyCollection::new(strategies)
    }
}

impl<G: StrategyGenerator> AgentFactory for LearningAgentFactory<G> {
    type Agent = LearningAgent;

    fn create(&mut self) -> Result<LearningAgent> {
        let memory = ChoiceMemory::new(self.memory_length)?;
        let strategies = self.strategy_collection()?;
        LearningAgent::new(self.ids.next_id(), strategies, memory)
    }
}

/// Agents together with the network they live in. Every agent's
/// neighbourhood points into `network`.
#[derive(Debug)]
pub struct Population<A: Agent> {
    pub agents: Vec<A>,
    pub network: Arc<SocialNetwork>,
}

impl<A: Agent> Population<A> {
    pub fn connect<I>(mut agents: Vec<A>, friendships: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        if agents.is_empty() {
            return Err(GameError::EmptyPopulation);
        }

        let mut network = SocialNetwork::with_capacity(agents.len(), 0);
        for agent in &agents {
            network.add_agent(agent.id())?;
        }
        for (a, b) in friendships {
            let (Some(first), Some(second)) = (agents.get(a), agents.get(b)) else {
                continue;
            };
            network.add_friendship(first.id(), second.id(), Friendship)?;
        }

        let network = Arc::new(network);
        for agent in &mut agents {
            let neighbourhood = Neighbourhood::new(network.clone(), agent.id())?;
            agent.set_neighbourhood(Some(neighbourhood));
        }
        Ok(Self { agents, network })
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

pub trait SocialNetworkFactory {
    type Agent: Agent;

    fn create(&mut self) -> Result<Population<Self::Agent>>;
}

#[derive(Debug)]
pub struct CompleteSocialNetworkFactory<F: AgentFactory> {
    agent_factory: F,
    number_of_agents: usize,
}

impl<F: AgentFactory> CompleteSocialNetworkFactory<F> {
    pub fn new(agent_factory: F, number_of_agents: usize) -> Self {
        Self {
            agent_factory,
            number_of_agents,
        }
    }

    pub fn into_agent_factory(self) -> F {
        self.agent_factory
    }
}

impl<F: AgentFactory> SocialNetworkFactory for CompleteSocialNetworkFactory<F> {
    type Agent = F::Agent;

    fn create(&mut self) -> Result<Population<F::Agent>> {
        let n = self.number_of_agents;
        let agents = (0..n)
            .map(|_| self.agent_factory.create())
            .collect::<Result<Vec<_>>>()?;

        let pairs = (0..n).flat_map(|a| (a + 1..n).map(move |b| (a, b)));
        let population = Population::connect(agents, pairs)?;

        info!(
            "Complete social network: {} agents, {} friendships",
            population.network.vertex_count(),
            population.network.edge_count()
        );
        Ok(population)
    }
}
