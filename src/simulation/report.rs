use crate::colony::{Colony, TickObserver};
use crate::graph::Graph;
use colored::Colorize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::warn;

/// Prints the colony state to stdout every `every` ticks
pub struct StatusPrinter {
    every: u64,
}

impl StatusPrinter {
    pub fn new(every: u64) -> Self {
        Self { every }
    }

    fn print(&self, tick: u64, colony: &Colony, graph: &Graph) {
        println!("{}", "----------------------------------".dimmed());
        println!("{}\t\t{}", "Time stamp:".bold(), tick);
        println!("{}\t{}", "Position of the colony:".bold(), graph.colony().to_string().blue());
        println!("{}\t{}", "Position of the food:".bold(), graph.food().to_string().green());
        println!("{}\t\t{}", "Food found:".bold(), colony.food_collected().to_string().yellow());
        println!("{}", "----------------------------------".dimmed());
        for ant in colony.ants() {
            let food = if ant.found_food() { "*".yellow() } else { "-".dimmed() };
            println!("{}", format!("Ant {}:", ant.id + 1).cyan());
            println!("\tPosition:\t{}", ant.position);
            println!("\tFood:\t\t{}", food);
            println!("\tWaiting:\t{}", ant.waiting());
        }
    }
}

impl TickObserver for StatusPrinter {
    fn on_tick(&mut self, tick: u64, colony: &Colony, graph: &Graph) {
        if self.every > 0 && tick % self.every == 0 {
            self.print(tick, colony, graph);
        }
    }
}

/// Streams one JSON snapshot per line. A write failure is logged once and
/// turns the sink off; the simulation keeps going.
pub struct JsonLinesTelemetry {
    out: Option<BufWriter<File>>,
}

impl JsonLinesTelemetry {
    pub fn create(path: &str) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            out: Some(BufWriter::with_capacity(64 * 1024, file)),
        })
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.out.is_some()
    }

    /// Flush buffered lines to disk
    pub fn finish(&mut self) -> io::Result<()> {
        match self.out.as_mut() {
            Some(out) => out.flush(),
            None => Ok(()),
        }
    }
}

impl TickObserver for JsonLinesTelemetry {
    fn on_tick(&mut self, tick: u64, colony: &Colony, graph: &Graph) {
        let Some(out) = self.out.as_mut() else {
            return;
        };
        let snapshot = colony.snapshot(graph, tick);
        let written = serde_json::to_writer(&mut *out, &snapshot)
            .map_err(io::Error::from)
            .and_then(|()| out.write_all(b"\n"));
        if let Err(err) = written {
            warn!(tick, error = %err, "telemetry disabled");
            self.out = None;
        }
    }
}
