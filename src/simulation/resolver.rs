// Lock-step round resolution over a whole population.
//
// prepare and choose run for every agent before the tally; the minority is
// fixed before any update starts. Agents only touch their own state inside a
// phase, so each phase runs in parallel.

use super::config::TiePolicy;
use crate::agent::{Agent, AgentId};
use crate::choice::Choice;
use crate::error::{InvalidState, Result};
use crate::factories::Population;
use crate::network::SocialNetwork;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub a: usize,
    pub b: usize,
}

impl Tally {
    pub fn add(mut self, choice: Choice) -> Self {
        match choice {
            Choice::A => self.a += 1,
            Choice::B => self.b += 1,
        }
        self
    }

    pub fn merge(self, other: Tally) -> Self {
        Self {
            a: self.a + other.a,
            b: self.b + other.b,
        }
    }

    pub fn is_tie(&self) -> bool {
        self.a == self.b
    }

    pub fn minority(&self, tie_policy: TiePolicy) -> Option<Choice> {
        if self.a < self.b {
            Some(Choice::A)
        } else if self.b < self.a {
            Some(Choice::B)
        } else {
            tie_policy.resolve()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub round: u64,
    pub count_a: usize,
    pub count_b: usize,
    /// `None` when a tie resolved to no minority.
    pub minority: Option<Choice>,
}

impl RoundOutcome {
    pub fn winners(&self) -> usize {
        match self.minority {
            Some(Choice::A) => self.count_a,
            Some(Choice::B) => self.count_b,
            None => 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentStanding {
    pub id: AgentId,
    pub score: u64,
    pub correct_prediction_count: u64,
}

// Where the current round stands. The tally is taken once, when choose_all
// completes, and consumed by resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Prepared,
    Chosen(Tally),
}

#[derive(Debug)]
pub struct RoundResolver<A: Agent> {
    agents: Vec<A>,
    network: Arc<SocialNetwork>,
    tie_policy: TiePolicy,
    round: u64,
    phase: Phase,
}

impl<A: Agent> RoundResolver<A> {
    pub fn new(population: Population<A>, tie_policy: TiePolicy) -> Self {
        Self {
            agents: population.agents,
            network: population.network,
            tie_policy,
            round: 0,
            phase: Phase::Idle,
        }
    }

    pub fn agents(&self) -> &[A] {
        &self.agents
    }

    pub fn agents_mut(&mut self) -> &mut [A] {
        &mut self.agents
    }

    pub fn agent(&self, id: AgentId) -> Option<&A> {
        self.agents.iter().find(|agent| agent.id() == id)
    }

    pub fn network(&self) -> &Arc<SocialNetwork> {
        &self.network
    }

    pub fn tie_policy(&self) -> TiePolicy {
        self.tie_policy
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn prepare_all(&mut self) -> Result<()> {
        self.phase = Phase::Idle;
        self.agents.par_iter_mut().try_for_each(|agent| agent.prepare())?;
        self.phase = Phase::Prepared;
        Ok(())
    }

    pub fn choose_all(&mut self) -> Result<Tally> {
        if self.phase != Phase::Prepared {
            return Err(InvalidState::NotPrepared.into());
        }
        let tally = self
            .agents
            .par_iter_mut()
            .map(|agent| agent.choose().map(|choice| Tally::default().add(choice)))
            .try_reduce(Tally::default, |x, y| Ok(x.merge(y)))?;
        self.phase = Phase::Chosen(tally);
        Ok(tally)
    }

    /// Pays out the tally taken by the last `choose_all`. Only valid once per
    /// round, after every agent has chosen.
    pub fn resolve(&mut self) -> Result<RoundOutcome> {
        let Phase::Chosen(tally) = self.phase else {
            return Err(InvalidState::ChoiceNotMade.into());
        };
        self.phase = Phase::Idle;

        let minority = tally.minority(self.tie_policy);
        if tally.is_tie() {
            warn!(
                "Round {} tied at {} each, resolved to {:?}",
                self.round + 1,
                tally.a,
                minority
            );
        }
        if let Some(side) = minority {
            self.agents
                .par_iter_mut()
                .try_for_each(|agent| agent.update(side))?;
        }

        self.round += 1;
        let outcome = RoundOutcome {
            round: self.round,
            count_a: tally.a,
            count_b: tally.b,
            minority,
        };
        debug!(
            "Round {}: A={} B={} minority={:?}",
            outcome.round, outcome.count_a, outcome.count_b, outcome.minority
        );
        Ok(outcome)
    }

    pub fn play_round(&mut self) -> Result<RoundOutcome> {
        self.prepare_all()?;
        self.choose_all()?;
        self.resolve()
    }

    pub fn run(&mut self, rounds: u64) -> Result<Vec<RoundOutcome>> {
        (0..rounds).map(|_| self.play_round()).collect()
    }

    pub fn standings(&self) -> Vec<AgentStanding> {
        let mut standings: Vec<AgentStanding> = self
            .agents
            .iter()
            .map(|agent| AgentStanding {
                id: agent.id(),
                score: agent.score(),
                correct_prediction_count: agent.correct_prediction_count(),
            })
            .collect();
        standings.sort_by_key(|s| s.id);
        standings
    }
}
