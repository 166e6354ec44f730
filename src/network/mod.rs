pub mod neighbourhood;

pub use neighbourhood::Neighbourhood;

use crate::agent::AgentId;
use crate::error::{GameError, Result};
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Friendship;

/// Undirected, simple friendship graph over agent ids.
#[derive(Debug, Clone, Default)]
pub struct SocialNetwork {
    graph: UnGraph<AgentId, Friendship>,
    nodes: HashMap<AgentId, NodeIndex>,
    // (low, high) id pairs, keeps duplicate checks O(1) on dense graphs
    pairs: HashSet<(AgentId, AgentId)>,
}

impl SocialNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(agents: usize, friendships: usize) -> Self {
        Self {
            graph: UnGraph::with_capacity(agents, friendships),
            nodes: HashMap::with_capacity(agents),
            pairs: HashSet::with_capacity(friendships),
        }
    }

    pub fn add_agent(&mut self, id: AgentId) -> Result<()> {
        if self.nodes.contains_key(&id) {
            return Err(GameError::DuplicateAgent(id));
        }
        let node = self.graph.add_node(id);
        self.nodes.insert(id, node);
        Ok(())
    }

    /// Connects two agents. Returns false if they already were friends or
    /// `a == b`, since the graph stays simple.
    pub fn add_friendship(&mut self, a: AgentId, b: AgentId, friendship: Friendship) -> Result<bool> {
        let from = self.node(a)?;
        let to = self.node(b)?;
        if from == to || !self.pairs.insert(ordered(a, b)) {
            return Ok(false);
        }
        self.graph.add_edge(from, to, friendship);
        Ok(true)
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, id: AgentId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn are_friends(&self, a: AgentId, b: AgentId) -> bool {
        self.pairs.contains(&ordered(a, b))
    }

    pub fn friends_of(&self, id: AgentId) -> Result<Vec<AgentId>> {
        let node = self.node(id)?;
        let mut friends: Vec<AgentId> = self.graph.neighbors(node).map(|n| self.graph[n]).collect();
        friends.sort_unstable();
        Ok(friends)
    }

    pub fn agents(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.graph.node_indices().map(move |n| self.graph[n])
    }

    fn node(&self, id: AgentId) -> Result<NodeIndex> {
        self.nodes.get(&id).copied().ok_or(GameError::UnknownAgent(id))
    }
}

fn ordered(a: AgentId, b: AgentId) -> (AgentId, AgentId) {
    if a <= b { (a, b) } else { (b, a) }
}
