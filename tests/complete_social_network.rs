//! Population building through the public factories.

use minority_game::agent::{FixedAgent, RandomIds};
use minority_game::prelude::*;
use minority_game::strategies::RandomStrategyGenerator;
use std::collections::HashSet;
use std::sync::Arc;

const NUMBER_OF_AGENTS: usize = 101;

fn learning_factory(ids: Arc<dyn IdSource>) -> LearningAgentFactory<RandomStrategyGenerator> {
    LearningAgentFactory::new(ids, RandomStrategyGenerator::seeded(2024), 3, 2)
}

#[test]
fn network_contains_every_agent() {
    let mut factory = CompleteSocialNetworkFactory::new(
        learning_factory(Arc::new(SequentialIds::new())),
        NUMBER_OF_AGENTS,
    );
    let population = factory.create().unwrap();

    assert_eq!(population.len(), NUMBER_OF_AGENTS);
    assert_eq!(population.network.vertex_count(), NUMBER_OF_AGENTS);
}

#[test]
fn network_has_n_times_n_minus_one_over_two_friendships() {
    let mut factory = CompleteSocialNetworkFactory::new(
        learning_factory(Arc::new(SequentialIds::new())),
        NUMBER_OF_AGENTS,
    );
    let population = factory.create().unwrap();

    assert_eq!(
        population.network.edge_count(),
        NUMBER_OF_AGENTS * (NUMBER_OF_AGENTS - 1) / 2
    );
    assert_eq!(population.network.edge_count(), 5050);
}

#[test]
fn every_agent_is_attached_and_befriends_all_others() {
    let mut factory = CompleteSocialNetworkFactory::new(
        learning_factory(Arc::new(SequentialIds::new())),
        NUMBER_OF_AGENTS,
    );
    let population = factory.create().unwrap();

    for agent in &population.agents {
        let friends = agent.friends().unwrap();
        assert_eq!(friends.len(), NUMBER_OF_AGENTS - 1);
        assert!(!friends.contains(&agent.id()));
        assert!(Arc::ptr_eq(agent.social_network().unwrap(), &population.network));
    }
}

#[test]
fn random_ids_are_pairwise_distinct() {
    let mut factory = CompleteSocialNetworkFactory::new(
        learning_factory(Arc::new(RandomIds::seeded(17))),
        NUMBER_OF_AGENTS,
    );
    let population = factory.create().unwrap();

    let ids: HashSet<AgentId> = population.agents.iter().map(|a| a.id()).collect();
    assert_eq!(ids.len(), NUMBER_OF_AGENTS);
}

#[test]
fn hand_built_population_uses_given_friendships() {
    let agents = vec![
        FixedAgent::new(AgentId::new(10), Choice::A),
        FixedAgent::new(AgentId::new(20), Choice::B),
        FixedAgent::new(AgentId::new(30), Choice::A),
    ];
    // a line: 10 - 20 - 30, index 7 is ignored
    let population = Population::connect(agents, [(0, 1), (1, 2), (2, 7)]).unwrap();

    assert_eq!(population.network.edge_count(), 2);
    assert_eq!(
        population.agents[1].friends().unwrap(),
        vec![AgentId::new(10), AgentId::new(30)]
    );
    assert_eq!(population.agents[0].friends().unwrap(), vec![AgentId::new(20)]);
}
