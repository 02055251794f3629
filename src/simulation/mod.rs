pub mod engine;
pub mod report;

pub use engine::SimulationEngine;
pub use report::{JsonLinesTelemetry, StatusPrinter};
