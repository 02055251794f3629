use ant_colony_optimization::graph::parse_instance;
use ant_colony_optimization::prelude::*;
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let config = args.colony_config();
    config.validate()?;

    // Load instance and release the ants
    let instance = parse_instance(&args.instance)?;
    let mut colony = instance.colony(config);
    let mut graph = instance.graph;

    // Run simulation
    let mut engine = SimulationEngine::new();
    let (summary, simulation_time) = engine.run_simulation(&mut graph, &mut colony, args)?;

    // Print results
    engine.print_summary(&graph, &colony, &summary, simulation_time);

    Ok(())
}
