use crate::cli::Args;
use crate::colony::{Colony, RunSummary, TickObserver};
use crate::error::Error;
use crate::graph::Graph;
use crate::simulation::report::{JsonLinesTelemetry, StatusPrinter};
use colored::Colorize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// Drives a colony over its graph for the binary: wires up the status
/// printer and telemetry sink, times the run, prints the summary.
pub struct SimulationEngine {
    cancel: Arc<AtomicBool>,
}

/// Every consumer attached to a run
struct Observers {
    status: Option<StatusPrinter>,
    telemetry: Option<JsonLinesTelemetry>,
}

impl TickObserver for Observers {
    fn on_tick(&mut self, tick: u64, colony: &Colony, graph: &Graph) {
        if let Some(status) = self.status.as_mut() {
            status.on_tick(tick, colony, graph);
        }
        if let Some(telemetry) = self.telemetry.as_mut() {
            telemetry.on_tick(tick, colony, graph);
        }
    }
}

impl SimulationEngine {
    pub fn new() -> Self {
        Self {
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag that stops the run at the next tick boundary once set
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Run the complete simulation
    pub fn run_simulation(
        &mut self,
        graph: &mut Graph,
        colony: &mut Colony,
        args: &Args,
    ) -> Result<(RunSummary, Duration), Error> {
        let status = (!args.suppress_events && args.status_every > 0)
            .then(|| StatusPrinter::new(args.status_every));
        let telemetry = args
            .telemetry
            .as_deref()
            .map(JsonLinesTelemetry::create)
            .transpose()?;
        let mut observers = Observers { status, telemetry };

        info!(
            ants = colony.ants().len(),
            vertices = graph.vertex_count(),
            edges = graph.edges().len(),
            ticks = args.ticks,
            "simulation started"
        );

        let sim_start = Instant::now();
        let summary = colony.run(graph, args.ticks, &self.cancel, &mut observers)?;
        let elapsed = sim_start.elapsed();

        if let Some(telemetry) = observers.telemetry.as_mut() {
            telemetry.finish()?;
        }
        info!(
            ticks = summary.ticks,
            food = summary.food_collected,
            cancelled = summary.cancelled,
            "simulation finished"
        );

        Ok((summary, elapsed))
    }

    /// Print simulation summary
    pub fn print_summary(
        &self,
        graph: &Graph,
        colony: &Colony,
        summary: &RunSummary,
        simulation_time: Duration,
    ) {
        let trail = graph
            .strongest_trail()
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join("->");

        println!(
            "\n{}\n{} {:.3} ms {} {} {} {} {} {}",
            "===".bright_blue().bold(),
            "⏱️  Simulation Latency:".green().bold(),
            simulation_time.as_secs_f64() * 1000.0,
            "(instance loaded)".dimmed(),
            "|".dimmed(),
            format!("ants={}", colony.ants().len()).cyan(),
            format!("ticks={}", summary.ticks).cyan(),
            format!("food={}", summary.food_collected).cyan(),
            format!("best_trail={}", trail).cyan(),
        );
        if summary.cancelled {
            println!("{}", "run cancelled before the tick limit".yellow());
        }
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColonyConfig;
    use crate::graph::Edge;
    use clap::Parser;
    use std::sync::atomic::Ordering;

    fn setup() -> (Graph, Colony) {
        let graph = Graph::new(2, vec![Edge::new(0, 1, 1)], 0, 1).unwrap();
        let colony = Colony::new(2, 0, ColonyConfig::default().with_seed(7));
        (graph, colony)
    }

    #[test]
    fn test_cancel_handle_stops_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ticks.jsonl");
        let args = Args::parse_from([
            "aco",
            "-i",
            "unused",
            "--suppress-events",
            "--telemetry",
            path.to_str().unwrap(),
        ]);
        let (mut graph, mut colony) = setup();
        let mut engine = SimulationEngine::new();

        engine.cancel_handle().store(true, Ordering::Relaxed);
        let (summary, _) = engine.run_simulation(&mut graph, &mut colony, &args).unwrap();

        assert!(summary.cancelled);
        assert_eq!(summary.ticks, 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_run_to_tick_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ticks.jsonl");
        let args = Args::parse_from([
            "aco",
            "-i",
            "unused",
            "-t",
            "5",
            "--suppress-events",
            "--telemetry",
            path.to_str().unwrap(),
        ]);
        let (mut graph, mut colony) = setup();
        let mut engine = SimulationEngine::default();

        let (summary, _) = engine.run_simulation(&mut graph, &mut colony, &args).unwrap();

        assert!(!summary.cancelled);
        assert_eq!(summary.ticks, 5);
        assert_eq!(std::fs::read_to_string(&path).unwrap().lines().count(), 5);
    }
}
