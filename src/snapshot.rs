use crate::ant::Ant;
use crate::graph::{Edge, Graph, VertexId};
use serde::Serialize;

/// Read-only view of one ant after a completed tick
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AntSnapshot {
    pub id: u32,
    pub position: VertexId,
    pub previous_position: VertexId,
    pub waiting: u32,
    pub total_cost_of_current_edge: u32,
    pub found_food: bool,
}

impl From<&Ant> for AntSnapshot {
    fn from(ant: &Ant) -> Self {
        Self {
            id: ant.id,
            position: ant.position,
            previous_position: ant.previous_position,
            waiting: ant.waiting(),
            total_cost_of_current_edge: ant.total_cost_of_current_edge(),
            found_food: ant.found_food(),
        }
    }
}

impl AntSnapshot {
    /// Point between the previous and current vertex matching the progress
    /// along the edge. `coords` is indexed by vertex id.
    pub fn position_on_screen(&self, coords: &[(i32, i32)]) -> Option<(f64, f64)> {
        let (tx, ty) = *coords.get(self.position as usize)?;
        let (tx, ty) = (f64::from(tx), f64::from(ty));
        if self.waiting == 0 || self.total_cost_of_current_edge == 0 {
            return Some((tx, ty));
        }
        let (fx, fy) = *coords.get(self.previous_position as usize)?;
        let (fx, fy) = (f64::from(fx), f64::from(fy));
        let done = (self.total_cost_of_current_edge - self.waiting.min(self.total_cost_of_current_edge))
            as f64
            / self.total_cost_of_current_edge as f64;
        Some((fx + done * (tx - fx), fy + done * (ty - fy)))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EdgeSnapshot {
    pub origin: VertexId,
    pub dest: VertexId,
    pub cost: u32,
    pub pheromone: u32,
}

impl From<&Edge> for EdgeSnapshot {
    fn from(edge: &Edge) -> Self {
        Self {
            origin: edge.origin,
            dest: edge.dest,
            cost: edge.cost,
            pheromone: edge.pheromone(),
        }
    }
}

/// Everything a renderer or telemetry sink may see of a tick
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColonySnapshot {
    pub tick: u64,
    pub colony: VertexId,
    pub food: VertexId,
    pub food_collected: u64,
    pub ants: Vec<AntSnapshot>,
    pub edges: Vec<EdgeSnapshot>,
}

impl ColonySnapshot {
    pub fn capture(tick: u64, food_collected: u64, ants: &[Ant], graph: &Graph) -> Self {
        Self {
            tick,
            colony: graph.colony(),
            food: graph.food(),
            food_collected,
            ants: ants.iter().map(AntSnapshot::from).collect(),
            edges: graph.edges().iter().map(EdgeSnapshot::from).collect(),
        }
    }
}
