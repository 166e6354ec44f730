pub mod config;
pub mod game;
pub mod registry;
pub mod resolver;

pub use config::{GameConfig, TiePolicy};
pub use game::{EvolutionaryGame, Game, StandardGame};
pub use registry::GameRegistry;
pub use resolver::{AgentStanding, RoundOutcome, RoundResolver, Tally};

use crate::metrics::logger::RoundLog;
use crate::metrics::{MetricsCollector, MetricsSummary};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Serialize)]
struct ResultsReport<'a> {
    config: &'a GameConfig,
    summary: MetricsSummary,
    standings: &'a [AgentStanding],
}

pub struct Simulation {
    config: GameConfig,
    pub metrics: MetricsCollector,
    standings: Vec<AgentStanding>,
    show_progress: bool,
}

impl Simulation {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            metrics: MetricsCollector::new(),
            standings: Vec::new(),
            show_progress: true,
        }
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn standings(&self) -> &[AgentStanding] {
        &self.standings
    }

    pub fn run(&mut self) -> Result<()> {
        info!("Starting game: {}", self.config.name);
        info!("Type: {}", self.config.game_type);
        info!(
            "Agents: {}, Memory: {}, Strategies per agent: {}",
            self.config.num_agents, self.config.memory_length, self.config.strategies_per_agent
        );
        info!("Rounds: {}, Seed: {}", self.config.rounds, self.config.seed);

        let mut game = GameRegistry::global().create(&self.config.game_type, &self.config)?;

        let pb = if self.show_progress {
            ProgressBar::new(self.config.rounds)
        } else {
            ProgressBar::hidden()
        };
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.orange/yellow} {pos}/{len} rounds {msg}")?
                .progress_chars("█▓░"),
        );

        for _ in 0..self.config.rounds {
            let outcome = game.play_round()?;
            self.metrics.record(&outcome);
            pb.inc(1);
            pb.set_message(format!(
                "A: {} | B: {} | minority: {}",
                outcome.count_a,
                outcome.count_b,
                outcome
                    .minority
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "-".to_string())
            ));
        }

        pb.finish_with_message("Game complete");
        self.standings = game.standings();

        let summary = self.metrics.summary();
        info!(
            "Rounds: {}, tied: {}, minority A/B: {}/{}",
            summary.rounds, summary.tied_rounds, summary.minority_a, summary.minority_b
        );
        if let Some(best) = self.standings.iter().max_by_key(|s| (s.score, std::cmp::Reverse(s.id))) {
            info!("Top agent: {} with score {}", best.id, best.score);
        }
        Ok(())
    }

    /// Writes the round history as CSV and the standings as JSON into `dir`.
    /// Returns the two paths.
    pub fn save_results(&self, dir: impl AsRef<Path>) -> Result<(PathBuf, PathBuf)> {
        let dir = dir.as_ref();
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");

        std::fs::create_dir_all(dir)?;

        let csv_path = dir.join(format!("{}_{}_rounds.csv", self.config.name, timestamp));
        let mut log = RoundLog::create(&csv_path)?;
        for snapshot in self.metrics.get_snapshots() {
            log.append(&snapshot)?;
        }
        let rows = log.finish()?;
        info!("{} rounds saved to: {}", rows, csv_path.display());

        let report = ResultsReport {
            config: &self.config,
            summary: self.metrics.summary(),
            standings: &self.standings,
        };
        let json_path = dir.join(format!("{}_{}_standings.json", self.config.name, timestamp));
        std::fs::write(&json_path, serde_json::to_string_pretty(&report)?)?;
        info!("Standings saved to: {}", json_path.display());

        Ok((csv_path, json_path))
    }
}
