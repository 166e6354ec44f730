// Agents without a learning model. Useful as baselines and for building
// exact scenarios by hand.

use super::{Agent, AgentCore, AgentId};
use crate::choice::Choice;
use crate::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone)]
pub struct FixedAgent {
    core: AgentCore,
    side: Choice,
}

impl FixedAgent {
    pub fn new(id: AgentId, side: Choice) -> Self {
        Self {
            core: AgentCore::new(id),
            side,
        }
    }
}

impl Agent for FixedAgent {
    fn core(&self) -> &AgentCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AgentCore {
        &mut self.core
    }

    fn choose(&mut self) -> Result<Choice> {
        self.core.set_choice(self.side);
        Ok(self.side)
    }
}

#[derive(Debug, Clone)]
pub struct RandomAgent {
    core: AgentCore,
    rng: StdRng,
}

impl RandomAgent {
    pub fn seeded(id: AgentId, seed: u64) -> Self {
        Self {
            core: AgentCore::new(id),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn core(&self) -> &AgentCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AgentCore {
        &mut self.core
    }

    fn choose(&mut self) -> Result<Choice> {
        let choice = if self.rng.gen_bool(0.5) {
            Choice::B
        } else {
            Choice::A
        };
        self.core.set_choice(choice);
        Ok(choice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{IdSource, SequentialIds};
    use std::cmp::Ordering;

    #[test]
    fn prepare_is_a_no_op() {
        let mut agent = FixedAgent::new(AgentId::new(1), Choice::A);
        agent.prepare().unwrap();
        assert!(agent.prediction().unwrap_err().is_invalid_state());
    }

    #[test]
    fn choice_readable_only_after_choose() {
        let mut agent = FixedAgent::new(AgentId::new(1), Choice::B);
        assert!(agent.choice().unwrap_err().is_invalid_state());
        assert_eq!(agent.choose().unwrap(), Choice::B);
        assert_eq!(agent.choice().unwrap(), Choice::B);
    }

    #[test]
    fn update_scores_matching_minority() {
        let mut agent = FixedAgent::new(AgentId::new(1), Choice::A);
        agent.choose().unwrap();
        agent.update(Choice::B).unwrap();
        assert_eq!(agent.score(), 0);
        agent.update(agent.choice().unwrap()).unwrap();
        assert_eq!(agent.score(), 1);
    }

    #[test]
    fn best_friend_is_itself() {
        let agent = FixedAgent::new(AgentId::new(4), Choice::A);
        assert_eq!(agent.best_friend(), agent.id());
    }

    #[test]
    fn compare_to_orders_by_id() {
        let ids = SequentialIds::new();
        let first = FixedAgent::new(ids.next_id(), Choice::A);
        let second = RandomAgent::seeded(ids.next_id(), 0);

        assert_eq!(first.compare_to(&second), Ordering::Less);
        assert_eq!(second.compare_to(&first), Ordering::Greater);
        assert_eq!(first.compare_to(&first), Ordering::Equal);
    }

    #[test]
    fn seeded_random_agents_repeat() {
        let mut a = RandomAgent::seeded(AgentId::new(1), 11);
        let mut b = RandomAgent::seeded(AgentId::new(2), 11);
        for _ in 0..20 {
            assert_eq!(a.choose().unwrap(), b.choose().unwrap());
        }
    }
}
