use super::config::GameConfig;
use super::resolver::{AgentStanding, RoundOutcome, RoundResolver};
use crate::agent::{Agent, AgentId, LearningAgent, SequentialIds};
use crate::error::Result;
use crate::factories::{
    CompleteSocialNetworkFactory, LearningAgentFactory, SocialNetworkFactory,
};
use crate::strategies::RandomStrategyGenerator;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::info;

pub trait Game: Send + fmt::Debug {
    fn play_round(&mut self) -> Result<RoundOutcome>;
    fn round(&self) -> u64;
    fn standings(&self) -> Vec<AgentStanding>;
    fn name(&self) -> &str;
}

type Factory = LearningAgentFactory<RandomStrategyGenerator>;

// Learning agents over a complete network, seeded from the config. Returns
// the agent factory too so callers can keep drawing strategies.
fn learning_population(config: &GameConfig) -> Result<(RoundResolver<LearningAgent>, Factory)> {
    let factory = LearningAgentFactory::new(
        Arc::new(SequentialIds::new()),
        RandomStrategyGenerator::seeded(config.seed),
        config.memory_length,
        config.strategies_per_agent,
    );
    let mut network_factory = CompleteSocialNetworkFactory::new(factory, config.num_agents);
    let population = network_factory.create()?;
    let resolver = RoundResolver::new(population, config.tie_policy);
    Ok((resolver, network_factory.into_agent_factory()))
}

#[derive(Debug)]
pub struct StandardGame {
    resolver: RoundResolver<LearningAgent>,
}

impl StandardGame {
    pub fn new(config: &GameConfig) -> Result<Self> {
        let (resolver, _) = learning_population(config)?;
        info!(
            "Standard game: {} agents, memory {}, {} strategies each",
            resolver.agents().len(),
            config.memory_length,
            config.strategies_per_agent
        );
        Ok(Self { resolver })
    }

    pub fn resolver(&self) -> &RoundResolver<LearningAgent> {
        &self.resolver
    }
}

impl Game for StandardGame {
    fn play_round(&mut self) -> Result<RoundOutcome> {
        self.resolver.play_round()
    }

    fn round(&self) -> u64 {
        self.resolver.round()
    }

    fn standings(&self) -> Vec<AgentStanding> {
        self.resolver.standings()
    }

    fn name(&self) -> &str {
        "standard"
    }
}

/// Standard game where, every `evolution_interval` rounds, the worst agent
/// gives up its strategies. It copies those of its best-scoring friend, or
/// draws fresh ones when no friend does better.
#[derive(Debug)]
pub struct EvolutionaryGame {
    resolver: RoundResolver<LearningAgent>,
    factory: Factory,
    interval: u64,
}

impl EvolutionaryGame {
    pub fn new(config: &GameConfig) -> Result<Self> {
        let (resolver, factory) = learning_population(config)?;
        info!(
            "Evolutionary game: {} agents, evolving every {} rounds",
            resolver.agents().len(),
            config.evolution_interval
        );
        Ok(Self {
            resolver,
            factory,
            interval: config.evolution_interval,
        })
    }

    pub fn resolver(&self) -> &RoundResolver<LearningAgent> {
        &self.resolver
    }

    /// Replaces the worst agent's strategies. Returns who was replaced and
    /// whose strategies it took (itself when fresh ones were drawn).
    pub fn evolve(&mut self) -> Result<Option<(AgentId, AgentId)>> {
        let Some(worst_idx) = self
            .resolver
            .agents()
            .iter()
            .enumerate()
            .min_by_key(|(_, agent)| (agent.score(), agent.id()))
            .map(|(idx, _)| idx)
        else {
            return Ok(None);
        };

        let scores: HashMap<AgentId, u64> = self
            .resolver
            .agents()
            .iter()
            .map(|agent| (agent.id(), agent.score()))
            .collect();

        let worst = &self.resolver.agents()[worst_idx];
        let worst_id = worst.id();
        let model_id = match worst.neighbourhood() {
            Some(neighbourhood) => neighbourhood.best_scoring_friend(|id| scores.get(&id).copied()),
            None => worst_id,
        };

        let strategies = match self.resolver.agent(model_id) {
            Some(model) if model_id != worst_id => model.strategies().fresh_copy(),
            _ => self.factory.strategy_collection()?,
        };
        self.resolver.agents_mut()[worst_idx].adopt_strategies(strategies)?;

        info!(
            "Round {}: agent {} (score {}) adopted strategies of {}",
            self.resolver.round(),
            worst_id,
            scores.get(&worst_id).copied().unwrap_or(0),
            model_id
        );
        Ok(Some((worst_id, model_id)))
    }
}

impl Game for EvolutionaryGame {
    fn play_round(&mut self) -> Result<RoundOutcome> {
        let outcome = self.resolver.play_round()?;
        if self.interval > 0 && outcome.round % self.interval == 0 {
            self.evolve()?;
        }
        Ok(outcome)
    }

    fn round(&self) -> u64 {
        self.resolver.round()
    }

    fn standings(&self) -> Vec<AgentStanding> {
        self.resolver.standings()
    }

    fn name(&self) -> &str {
        "evolutionary"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::Strategy;

    fn small_config() -> GameConfig {
        GameConfig::default()
            .with_agents(9)
            .with_memory(2, 2)
            .with_seed(5)
            .with_evolution_interval(3)
    }

    #[test]
    fn standard_game_plays_rounds() {
        let mut game = StandardGame::new(&small_config()).unwrap();
        for _ in 0..5 {
            let outcome = game.play_round().unwrap();
            // odd population never ties
            assert!(outcome.minority.is_some());
            assert_eq!(outcome.count_a + outcome.count_b, 9);
        }
        assert_eq!(game.round(), 5);
        assert_eq!(game.standings().len(), 9);
    }

    #[test]
    fn even_population_with_favoured_side_always_has_a_minority() {
        let config = small_config()
            .with_agents(8)
            .with_tie_policy(crate::simulation::TiePolicy::Favour(crate::choice::Choice::A));
        let mut game = StandardGame::new(&config).unwrap();
        for _ in 0..30 {
            let outcome = game.play_round().unwrap();
            assert!(outcome.minority.is_some());
            if outcome.count_a == outcome.count_b {
                assert_eq!(outcome.minority, Some(crate::choice::Choice::A));
            }
        }
    }

    #[test]
    fn same_seed_same_history() {
        let mut first = StandardGame::new(&small_config()).unwrap();
        let mut second = StandardGame::new(&small_config()).unwrap();
        for _ in 0..20 {
            assert_eq!(first.play_round().unwrap(), second.play_round().unwrap());
        }
    }

    #[test]
    fn evolve_copies_best_friend_strategies() {
        let mut game = EvolutionaryGame::new(&small_config()).unwrap();
        for _ in 0..6 {
            game.resolver.play_round().unwrap();
        }
        let (worst, model) = game.evolve().unwrap().unwrap();

        let worst_agent = game.resolver().agent(worst).unwrap();
        assert!(worst_agent.strategies().iter().all(|s| s.score() == 0));
        if worst != model {
            let model_agent = game.resolver().agent(model).unwrap();
            let copied: Vec<&[_]> = worst_agent.strategies().iter().map(Strategy::table).collect();
            let original: Vec<&[_]> = model_agent.strategies().iter().map(Strategy::table).collect();
            assert_eq!(copied, original);
            assert!(model_agent.score() >= worst_agent.score());
        }
    }

    #[test]
    fn evolutionary_game_keeps_playing() {
        let mut game = EvolutionaryGame::new(&small_config()).unwrap();
        for _ in 0..10 {
            game.play_round().unwrap();
        }
        assert_eq!(game.round(), 10);
        assert_eq!(game.name(), "evolutionary");
    }
}
