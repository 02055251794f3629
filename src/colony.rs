use crate::ant::Ant;
use crate::config::ColonyConfig;
use crate::error::SimulationError;
use crate::graph::{Graph, VertexId};
use crate::snapshot::ColonySnapshot;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Receives read-only access to the colony after every completed tick
pub trait TickObserver {
    fn on_tick(&mut self, tick: u64, colony: &Colony, graph: &Graph);
}

/// Observer that ignores every tick
pub struct NoopObserver;

impl TickObserver for NoopObserver {
    #[inline]
    fn on_tick(&mut self, _tick: u64, _colony: &Colony, _graph: &Graph) {}
}

/// Outcome of `Colony::run`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub food_collected: u64,
    pub cancelled: bool,
}

/// A fixed group of ants sharing one graph and one random source
pub struct Colony {
    ants: Vec<Ant>,
    food_collected: u64,
    config: ColonyConfig,
    rng: fastrand::Rng,
}

impl Colony {
    /// Create `ant_count` ants waiting at `start`
    pub fn new(ant_count: usize, start: VertexId, config: ColonyConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        let ants = (0..ant_count).map(|i| Ant::new(i as u32, start)).collect();
        Self {
            ants,
            food_collected: 0,
            config,
            rng,
        }
    }

    #[inline]
    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    #[inline]
    pub fn food_collected(&self) -> u64 {
        self.food_collected
    }

    #[inline]
    pub fn config(&self) -> &ColonyConfig {
        &self.config
    }

    /// Advance every ant by one tick and evaporate on interval boundaries.
    /// Returns the food delivered during this tick.
    pub fn step(&mut self, graph: &mut Graph, tick: u64) -> Result<u32, SimulationError> {
        let mut delivered = 0;
        for ant in &mut self.ants {
            // drop-offs before a failing ant still count
            let food = ant.travel(graph, &mut self.rng, &self.config)?;
            delivered += food;
            self.food_collected += u64::from(food);
        }

        let interval = self.config.evaporation_interval;
        if interval > 0 && tick % interval == 0 {
            graph.evaporate(self.config.evaporation_amount);
            debug!(tick, remaining = graph.total_pheromone(), "evaporation");
        }

        Ok(delivered)
    }

    /// Step ticks `1..=max_ticks`, stopping early once `cancel` is set
    pub fn run(
        &mut self,
        graph: &mut Graph,
        max_ticks: u64,
        cancel: &AtomicBool,
        observer: &mut dyn TickObserver,
    ) -> Result<RunSummary, SimulationError> {
        let mut ticks = 0;
        for tick in 1..=max_ticks {
            if cancel.load(Ordering::Relaxed) {
                debug!(tick, "run cancelled");
                return Ok(self.summary(ticks, true));
            }
            self.step(graph, tick)?;
            ticks = tick;
            observer.on_tick(tick, self, graph);
        }
        Ok(self.summary(ticks, false))
    }

    pub fn snapshot(&self, graph: &Graph, tick: u64) -> ColonySnapshot {
        ColonySnapshot::capture(tick, self.food_collected, &self.ants, graph)
    }

    fn summary(&self, ticks: u64, cancelled: bool) -> RunSummary {
        RunSummary {
            ticks,
            food_collected: self.food_collected,
            cancelled,
        }
    }
}
