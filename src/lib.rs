//! # Ant Colony Optimization
//!
//! Ants leave their colony, wander a weighted graph until one of them finds
//! the food vertex, then retrace a loop-free version of their walk home and
//! mark every edge they use with pheromone. Later ants mostly follow the
//! strongest trail, and pheromone slowly evaporates.
//!
//! The core is [`Graph`], [`Ant`] and [`Colony`]; the loader, the status
//! printer and the binary's engine sit on top of their public API.

pub mod ant;
pub mod cli;
pub mod colony;
pub mod config;
pub mod error;
pub mod graph;
pub mod simulation;
pub mod snapshot;

pub use ant::{Ant, Leg, Phase};
pub use cli::Args;
pub use colony::{Colony, NoopObserver, RunSummary, TickObserver};
pub use config::{ColonyConfig, DeadEndPolicy};
pub use error::{ConfigError, Error, InputError, Result, SimulationError};
pub use graph::{Graph, Instance, VertexId};
pub use simulation::SimulationEngine;
pub use snapshot::ColonySnapshot;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Ant, Args, Colony, ColonyConfig, ColonySnapshot, Error, Graph, Instance, InputError,
        SimulationEngine, SimulationError, TickObserver,
    };
}
