use crate::config::{
    ColonyConfig, DeadEndPolicy, DEFAULT_EVAPORATION_AMOUNT, DEFAULT_EVAPORATION_INTERVAL,
    DEFAULT_EXPLORATION_PROBABILITY,
};
use clap::Parser;

/// CLI arguments for the colony simulation
#[derive(Parser, Debug)]
#[command(
    name = "ant_colony_optimization",
    about = "🐜 Ant colony optimization on a weighted graph"
)]
pub struct Args {
    /// Path to the instance file
    #[arg(short = 'i', long = "instance")]
    pub instance: String,

    /// Number of ticks to simulate
    #[arg(short = 't', long = "ticks", default_value_t = 1_000)]
    pub ticks: u64,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Chance that an ant ignores pheromone when choosing an edge
    #[arg(long, default_value_t = DEFAULT_EXPLORATION_PROBABILITY)]
    pub exploration: f64,

    /// Ticks between pheromone evaporation passes
    #[arg(long, default_value_t = DEFAULT_EVAPORATION_INTERVAL)]
    pub evaporation_interval: u64,

    /// Pheromone removed from each edge per evaporation pass
    #[arg(long, default_value_t = DEFAULT_EVAPORATION_AMOUNT)]
    pub evaporation_amount: u32,

    /// Let ants wait at dead ends instead of aborting the run
    #[arg(long, default_value_t = false)]
    pub wait_on_dead_end: bool,

    /// Print colony status every N ticks (0 disables)
    #[arg(long, default_value_t = 0)]
    pub status_every: u64,

    /// Write one JSON snapshot per tick to this file
    #[arg(long)]
    pub telemetry: Option<String>,

    /// Suppress status output (for benchmarks)
    #[arg(long, default_value_t = false)]
    pub suppress_events: bool,
}

impl Args {
    pub fn colony_config(&self) -> ColonyConfig {
        ColonyConfig {
            exploration_probability: self.exploration,
            evaporation_interval: self.evaporation_interval,
            evaporation_amount: self.evaporation_amount,
            dead_end: if self.wait_on_dead_end {
                DeadEndPolicy::Wait
            } else {
                DeadEndPolicy::Fail
            },
            seed: self.seed,
        }
    }
}
