pub mod logger;

use crate::choice::Choice;
use crate::simulation::RoundOutcome;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use parking_lot::RwLock;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub round: u64,
    pub elapsed_s: f64,
    pub count_a: usize,
    pub count_b: usize,
    pub minority: Option<Choice>,
    pub winners: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub rounds: u64,
    pub tied_rounds: u64,
    pub total_winners: u64,
    pub minority_a: u64,
    pub minority_b: u64,
}

/// Shared sink for round outcomes. Clones share the same storage.
#[derive(Debug, Clone)]
pub struct MetricsCollector {
    inner: Arc<RwLock<MetricsInner>>,
    start_time: Instant,
}

#[derive(Debug, Default)]
struct MetricsInner {
    summary: MetricsSummary,
    snapshots: Vec<RoundSnapshot>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MetricsInner::default())),
            start_time: Instant::now(),
        }
    }

    pub fn record(&self, outcome: &RoundOutcome) {
        let mut inner = self.inner.write();

        if let Some(last) = inner.snapshots.last() {
            if outcome.round <= last.round {
                warn!(
                    "Round {} recorded after round {} - ignoring out of order outcome",
                    outcome.round, last.round
                );
                return;
            }
        }

        let winners = outcome.winners();
        let summary = &mut inner.summary;
        summary.rounds += 1;
        summary.total_winners += winners as u64;
        match outcome.minority {
            Some(Choice::A) => summary.minority_a += 1,
            Some(Choice::B) => summary.minority_b += 1,
            None => summary.tied_rounds += 1,
        }

        let snapshot = RoundSnapshot {
            round: outcome.round,
            elapsed_s: self.start_time.elapsed().as_secs_f64(),
            count_a: outcome.count_a,
            count_b: outcome.count_b,
            minority: outcome.minority,
            winners,
        };
        inner.snapshots.push(snapshot);
    }

    pub fn summary(&self) -> MetricsSummary {
        self.inner.read().summary.clone()
    }

    pub fn get_snapshots(&self) -> Vec<RoundSnapshot> {
        self.inner.read().snapshots.clone()
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}
