use crate::config::{ColonyConfig, DeadEndPolicy};
use crate::error::SimulationError;
use crate::graph::{Graph, Neighbor, VertexId};
use tracing::{debug, trace};

/// Where an ant is relative to the vertices of the graph
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Leg {
    /// Standing on `position`; `cost` is the edge that brought it there (0 at start)
    Arrived { cost: u32 },
    /// Walking an edge towards `position`, `remaining` > 0 ticks left
    Travelling { remaining: u32, total: u32 },
}

impl Leg {
    #[inline]
    fn over(cost: u32) -> Self {
        if cost == 0 {
            Leg::Arrived { cost }
        } else {
            Leg::Travelling {
                remaining: cost,
                total: cost,
            }
        }
    }
}

/// Coarse view of the state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Travelling,
    Deciding,
    Returning,
}

#[derive(Clone, Debug)]
pub struct Ant {
    pub id: u32,
    pub position: VertexId,
    pub previous_position: VertexId,
    path: Vec<VertexId>,
    leg: Leg,
    found_food: bool,
}

impl Ant {
    /// Create a new ant standing at the given vertex
    pub fn new(id: u32, position: VertexId) -> Self {
        Self {
            id,
            position,
            previous_position: position,
            path: Vec::new(),
            leg: Leg::Arrived { cost: 0 },
            found_food: false,
        }
    }

    #[inline]
    pub fn leg(&self) -> Leg {
        self.leg
    }

    /// Ticks left on the current edge, 0 when standing on a vertex
    #[inline]
    pub fn waiting(&self) -> u32 {
        match self.leg {
            Leg::Travelling { remaining, .. } => remaining,
            Leg::Arrived { .. } => 0,
        }
    }

    /// Cost of the edge being walked, or of the last one walked
    #[inline]
    pub fn total_cost_of_current_edge(&self) -> u32 {
        match self.leg {
            Leg::Travelling { total, .. } => total,
            Leg::Arrived { cost } => cost,
        }
    }

    #[inline]
    pub fn found_food(&self) -> bool {
        self.found_food
    }

    /// Vertices visited since leaving the colony (or left to retrace)
    #[inline]
    pub fn path(&self) -> &[VertexId] {
        &self.path
    }

    pub fn phase(&self) -> Phase {
        match (self.leg, self.found_food) {
            (Leg::Travelling { .. }, _) => Phase::Travelling,
            (Leg::Arrived { .. }, false) => Phase::Deciding,
            (Leg::Arrived { .. }, true) => Phase::Returning,
        }
    }

    /// Advance this ant by one tick. Returns the food delivered (0 or 1).
    pub fn travel(
        &mut self,
        graph: &Graph,
        rng: &mut fastrand::Rng,
        config: &ColonyConfig,
    ) -> Result<u32, SimulationError> {
        // Mid-edge: nothing to decide until the countdown runs out
        if let Leg::Travelling { remaining, total } = self.leg {
            self.leg = if remaining > 1 {
                Leg::Travelling {
                    remaining: remaining - 1,
                    total,
                }
            } else {
                Leg::Arrived { cost: total }
            };
            return Ok(0);
        }

        if self.found_food && graph.is_home(self.position) {
            self.found_food = false;
            debug!(ant = self.id, vertex = self.position, "food delivered");
            return Ok(1);
        }

        if !self.found_food {
            self.found_food = graph.is_food(self.position);
            if self.found_food {
                debug!(ant = self.id, steps = self.path.len(), "found food");
            }
        }

        if self.found_food {
            self.fix_backtrack_path();
            self.backtrack(graph)?;
        } else {
            self.select_path(graph, rng, config)?;
        }
        Ok(0)
    }

    /// Pick the next edge: mostly the strongest trail, sometimes any edge
    pub fn select_path(
        &mut self,
        graph: &Graph,
        rng: &mut fastrand::Rng,
        config: &ColonyConfig,
    ) -> Result<(), SimulationError> {
        let options = graph.neighbors(self.position);
        if options.is_empty() {
            return match config.dead_end {
                DeadEndPolicy::Fail => Err(SimulationError::DeadEnd {
                    ant: self.id,
                    vertex: self.position,
                }),
                DeadEndPolicy::Wait => {
                    debug!(ant = self.id, vertex = self.position, "dead end, waiting");
                    Ok(())
                }
            };
        }

        let choice = if rng.f64() >= config.exploration_probability {
            let strongest = options.iter().map(|n| n.pheromone).max().unwrap_or(0);
            let candidates: Vec<&Neighbor> = options
                .iter()
                .filter(|n| n.pheromone == strongest)
                .collect();
            *candidates[rng.usize(..candidates.len())]
        } else {
            options[rng.usize(..options.len())]
        };

        // May close a cycle; the path is cleaned before it is retraced
        self.move_to(choice.vertex, choice.cost);
        Ok(())
    }

    /// Step onto the edge towards `position`, remembering where we came from
    pub fn move_to(&mut self, position: VertexId, cost: u32) {
        trace!(ant = self.id, from = self.position, to = position, cost, "move");
        self.path.push(self.position);
        self.previous_position = self.position;
        self.position = position;
        self.leg = Leg::over(cost);
    }

    /// Collapse cycles in the path, keeping the leftmost occurrence of each
    /// vertex and whatever followed its last occurrence.
    pub fn fix_backtrack_path(&mut self) {
        let mut cursor = 0;
        while cursor < self.path.len() {
            let here = self.path[cursor];
            let last = self
                .path
                .iter()
                .rposition(|&v| v == here)
                .unwrap_or(cursor);
            self.path.drain(cursor..last);
            cursor += 1;
        }
    }

    /// Retrace one edge of the path, marking it with pheromone
    pub fn backtrack(&mut self, graph: &Graph) -> Result<(), SimulationError> {
        let Some(move_to) = self.path.pop() else {
            return Err(SimulationError::LostTrail {
                ant: self.id,
                vertex: self.position,
            });
        };
        let Some(edge) = graph.edge_between(self.position, move_to) else {
            return Err(SimulationError::MissingEdge {
                ant: self.id,
                from: self.position,
                to: move_to,
            });
        };
        let cost = edge.cost;
        graph.reinforce(self.position, move_to);

        trace!(ant = self.id, from = self.position, to = move_to, cost, "backtrack");
        self.leg = Leg::over(cost);
        self.previous_position = self.position;
        self.position = move_to;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    fn greedy() -> ColonyConfig {
        ColonyConfig {
            exploration_probability: 0.0,
            ..ColonyConfig::default()
        }
    }

    fn line_graph() -> Graph {
        Graph::new(2, vec![Edge::new(0, 1, 3)], 0, 1).unwrap()
    }

    /// Hub 0 joined to 1, 2 and 3; food far away at 4 behind 3
    fn star_graph() -> Graph {
        let edges = vec![
            Edge::new(0, 1, 1),
            Edge::new(0, 2, 1),
            Edge::new(0, 3, 1),
            Edge::new(3, 4, 1),
        ];
        Graph::new(5, edges, 0, 4).unwrap()
    }

    #[test]
    fn test_ant_creation() {
        let ant = Ant::new(42, 7);

        assert_eq!(ant.id, 42);
        assert_eq!(ant.position, 7);
        assert_eq!(ant.previous_position, 7);
        assert_eq!(ant.waiting(), 0);
        assert!(!ant.found_food());
        assert!(ant.path().is_empty());
        assert_eq!(ant.phase(), Phase::Deciding);
    }

    #[test]
    fn test_ant_movement() {
        let mut ant = Ant::new(1, 10);

        ant.move_to(20, 4);
        assert_eq!(ant.position, 20);
        assert_eq!(ant.previous_position, 10);
        assert_eq!(ant.waiting(), 4);
        assert_eq!(ant.total_cost_of_current_edge(), 4);
        assert_eq!(ant.path(), &[10]);
        assert_eq!(ant.phase(), Phase::Travelling);

        ant.move_to(30, 1);
        assert_eq!(ant.path(), &[10, 20]);
        assert_eq!(ant.previous_position, 20);
    }

    #[test]
    fn test_waiting_countdown() {
        let graph = line_graph();
        let mut rng = fastrand::Rng::with_seed(1);
        let config = greedy();
        let mut ant = Ant::new(0, 0);

        ant.travel(&graph, &mut rng, &config).unwrap();
        assert_eq!(ant.position, 1);
        assert_eq!(ant.waiting(), 3);

        for expected in [2, 1, 0] {
            assert_eq!(ant.travel(&graph, &mut rng, &config), Ok(0));
            assert_eq!(ant.waiting(), expected);
            assert_eq!(ant.position, 1);
            assert!(!ant.found_food());
        }
        assert_eq!(ant.total_cost_of_current_edge(), 3);

        // Arrived: notices the food and heads back on the same tick
        ant.travel(&graph, &mut rng, &config).unwrap();
        assert!(ant.found_food());
        assert_eq!(ant.position, 0);
        assert_eq!(ant.waiting(), 3);
        assert_eq!(graph.pheromone(0, 1), Some(1));
    }

    #[test]
    fn test_food_only_counted_at_home() {
        let graph = line_graph();
        let mut rng = fastrand::Rng::with_seed(9);
        let config = greedy();
        let mut ant = Ant::new(0, 0);

        let mut delivered = Vec::new();
        for tick in 1..=9 {
            if ant.travel(&graph, &mut rng, &config).unwrap() == 1 {
                delivered.push(tick);
            }
        }

        // 1 tick to leave, 3 on the edge, 1 to turn, 3 back, then drop off
        assert_eq!(delivered, vec![9]);
        assert!(!ant.found_food());
        assert_eq!(ant.position, 0);
        assert_eq!(ant.phase(), Phase::Deciding);
    }

    #[test]
    fn test_fix_backtrack_path_collapses_cycles() {
        let (a, b, c, d) = (0, 1, 2, 3);
        let mut ant = Ant::new(0, 9);
        ant.path = vec![a, b, c, a, b, c, b, d];

        ant.fix_backtrack_path();

        assert_eq!(ant.path(), &[a, b, d]);
    }

    #[test]
    fn test_fix_backtrack_path_leftmost_canonical() {
        let mut ant = Ant::new(0, 9);
        ant.path = vec![0, 1, 2, 1, 3, 2, 4];

        ant.fix_backtrack_path();

        // 2 survives after 3 even though 0-1-2-4 would be shorter
        assert_eq!(ant.path(), &[0, 1, 3, 2, 4]);
    }

    #[test]
    fn test_fix_backtrack_path_keeps_simple_path() {
        let mut ant = Ant::new(0, 9);
        ant.path = vec![4, 2, 7, 1];

        ant.fix_backtrack_path();
        assert_eq!(ant.path(), &[4, 2, 7, 1]);

        ant.path = vec![5, 5, 5];
        ant.fix_backtrack_path();
        assert_eq!(ant.path(), &[5]);
    }

    #[test]
    fn test_exploit_follows_strongest_edge() {
        let graph = star_graph();
        graph.reinforce(0, 2);
        let config = greedy();

        for seed in 0..50 {
            let mut rng = fastrand::Rng::with_seed(seed);
            let mut ant = Ant::new(0, 0);
            ant.select_path(&graph, &mut rng, &config).unwrap();
            assert_eq!(ant.position, 2);
        }
    }

    #[test]
    fn test_exploit_breaks_ties_randomly() {
        let graph = star_graph();
        let config = greedy();
        let mut rng = fastrand::Rng::with_seed(3);
        let mut seen = [false; 5];

        for _ in 0..200 {
            let mut ant = Ant::new(0, 0);
            ant.select_path(&graph, &mut rng, &config).unwrap();
            seen[ant.position as usize] = true;
        }

        assert_eq!(seen, [false, true, true, true, false]);
    }

    #[test]
    fn test_explore_ignores_pheromone() {
        let graph = star_graph();
        graph.reinforce(0, 2);
        let config = ColonyConfig {
            exploration_probability: 1.0,
            ..ColonyConfig::default()
        };
        let mut rng = fastrand::Rng::with_seed(11);
        let mut seen = [false; 5];

        for _ in 0..200 {
            let mut ant = Ant::new(0, 0);
            ant.select_path(&graph, &mut rng, &config).unwrap();
            seen[ant.position as usize] = true;
        }

        assert_eq!(seen, [false, true, true, true, false]);
    }

    #[test]
    fn test_dead_end_policies() {
        let graph = Graph::new(3, vec![Edge::new(0, 1, 1)], 0, 1).unwrap();
        let mut rng = fastrand::Rng::with_seed(5);
        let mut ant = Ant::new(7, 2);

        let err = ant.travel(&graph, &mut rng, &greedy()).unwrap_err();
        assert_eq!(err, SimulationError::DeadEnd { ant: 7, vertex: 2 });

        let waiting = ColonyConfig {
            dead_end: DeadEndPolicy::Wait,
            ..greedy()
        };
        assert_eq!(ant.travel(&graph, &mut rng, &waiting), Ok(0));
        assert_eq!(ant.position, 2);
        assert_eq!(ant.phase(), Phase::Deciding);
    }

    #[test]
    fn test_backtrack_reinforces_cleaned_path() {
        let edges = vec![
            Edge::new(0, 1, 1),
            Edge::new(1, 2, 1),
            Edge::new(2, 0, 1),
            Edge::new(1, 3, 2),
        ];
        let graph = Graph::new(4, edges, 0, 3).unwrap();
        let mut ant = Ant::new(0, 0);
        for (to, cost) in [(1, 1), (2, 1), (0, 1), (1, 1), (3, 2)] {
            ant.move_to(to, cost);
        }
        ant.leg = Leg::Arrived { cost: 2 };

        let mut rng = fastrand::Rng::with_seed(0);
        let config = greedy();
        ant.travel(&graph, &mut rng, &config).unwrap();

        assert_eq!(ant.path(), &[0]);
        assert_eq!(ant.position, 1);
        assert_eq!(ant.previous_position, 3);
        assert_eq!(ant.waiting(), 2);
        assert_eq!(graph.pheromone(1, 3), Some(1));
        assert_eq!(graph.pheromone(0, 2), Some(0));
        assert_eq!(graph.pheromone(1, 2), Some(0));
    }

    #[test]
    fn test_backtrack_without_path() {
        let graph = line_graph();
        let mut ant = Ant::new(3, 1);

        assert_eq!(
            ant.backtrack(&graph),
            Err(SimulationError::LostTrail { ant: 3, vertex: 1 })
        );
    }

    #[test]
    fn test_backtrack_without_edge() {
        let graph = Graph::new(3, vec![Edge::new(0, 1, 1)], 0, 1).unwrap();
        let mut ant = Ant::new(3, 1);
        ant.path = vec![2];

        assert_eq!(
            ant.backtrack(&graph),
            Err(SimulationError::MissingEdge { ant: 3, from: 1, to: 2 })
        );
    }
}
