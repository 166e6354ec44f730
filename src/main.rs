// Minority game driver: builds a population, plays it for a number of rounds
// and writes the round history and final standings to disk.

// Copyright 2025 Servus Altissimi (Pseudonym)

// Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the "Software"), to deal in the Software without restriction, including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so, subject to the following conditions:
// The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use minority_game::choice::Choice;
use minority_game::simulation::{GameConfig, GameRegistry, Simulation, TiePolicy};

use clap::{Parser, Subcommand};
use anyhow::Result;
use std::time::Instant;
use tracing::{info, Level};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    Run {
        #[arg(short = 't', long = "type", default_value = "standard")]
        game_type: String,
        #[arg(short = 'n', long, default_value_t = 101)]
        agents: usize,
        #[arg(short, long, default_value_t = 3)]
        memory: usize,
        #[arg(short, long, default_value_t = 2)]
        strategies: usize,
        #[arg(short, long, default_value_t = 500)]
        rounds: u64,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value = "no-minority")]
        tie: String,
        #[arg(long, default_value_t = 50)]
        evolution_interval: u64,
        /// JSON config file; overrides every other run flag
        #[arg(short, long)]
        config: Option<String>,
        #[arg(short, long, default_value = "results")]
        output: String,
    },

    List,
}

fn main() -> Result<()> {
    let program_start = Instant::now();

    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Run {
            game_type,
            agents,
            memory,
            strategies,
            rounds,
            seed,
            tie,
            evolution_interval,
            config,
            output,
        } => {
            let config = match config {
                Some(path) => load_config(&path)?,
                None => GameConfig {
                    name: format!("{}_{}", game_type, agents),
                    game_type,
                    num_agents: agents,
                    memory_length: memory,
                    strategies_per_agent: strategies,
                    rounds,
                    seed,
                    tie_policy: parse_tie_policy(&tie)?,
                    evolution_interval,
                },
            };
            run_game(config, &output)?;
        }

        Commands::List => {
            println!("\nAvailable Game Types");

            for name in GameRegistry::global().list() {
                println!("  - {}", name);
            }

            println!("\nUsage: cargo run -- run --type <name>");
            println!("Example: cargo run -- run --type evolutionary -n 301\n");
        }
    }

    let total_time = program_start.elapsed();
    info!("Total runtime: {:.2}s", total_time.as_secs_f64());

    Ok(())
}

fn run_game(config: GameConfig, output: &str) -> Result<()> {
    info!("Minority Game: Single Run");

    let mut sim = Simulation::new(config);
    sim.run()?;
    sim.save_results(output)?;

    Ok(())
}

fn load_config(path: &str) -> Result<GameConfig> {
    info!("Loading config from: {}", path);
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn parse_tie_policy(name: &str) -> Result<TiePolicy> {
    match name.to_lowercase().as_str() {
        "no-minority" | "none" => Ok(TiePolicy::NoMinority),
        "a" => Ok(TiePolicy::Favour(Choice::A)),
        "b" => Ok(TiePolicy::Favour(Choice::B)),
        _ => anyhow::bail!("Unknown tie policy: {}. Use: no-minority, a or b", name),
    }
}
