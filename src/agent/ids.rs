use super::AgentId;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out agent ids. Implementations never return the same id twice, even
/// when agents are built from several threads.
pub trait IdSource: Send + Sync + fmt::Debug {
    fn next_id(&self) -> AgentId;
}

#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> AgentId {
        AgentId::new(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug)]
pub struct RandomIds {
    inner: Mutex<RandomIdsInner>,
}

#[derive(Debug)]
struct RandomIdsInner {
    rng: StdRng,
    issued: HashSet<AgentId>,
}

impl RandomIds {
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: Mutex::new(RandomIdsInner {
                rng: StdRng::seed_from_u64(seed),
                issued: HashSet::new(),
            }),
        }
    }
}

impl IdSource for RandomIds {
    fn next_id(&self) -> AgentId {
        let mut inner = self.inner.lock();
        loop {
            let id = AgentId::new(inner.rng.gen_range(1..u64::MAX));
            if inner.issued.insert(id) {
                return id;
            }
        }
    }
}
