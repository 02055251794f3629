use crate::error::{InputError, Result};
use crate::graph::edge::{Edge, VertexId};

/// One entry of a neighbor query
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbor {
    pub vertex: VertexId,
    pub cost: u32,
    pub pheromone: u32,
}

/// Weighted undirected graph with a colony and a food vertex
#[derive(Clone, Debug)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
    incident: Vec<Vec<u32>>, // per vertex, edge indices in edge-list order
    colony: VertexId,
    food: VertexId,
}

impl Graph {
    /// Build a graph, rejecting out-of-range vertices and zero-cost edges
    pub fn new(
        vertex_count: usize,
        edges: Vec<Edge>,
        colony: VertexId,
        food: VertexId,
    ) -> Result<Self> {
        if vertex_count == 0 {
            return Err(InputError::EmptyGraph);
        }
        check_vertex("colony", colony, vertex_count)?;
        check_vertex("food", food, vertex_count)?;
        if colony == food {
            return Err(InputError::ColonyIsFood(colony));
        }

        let mut incident = vec![Vec::new(); vertex_count];
        for (idx, edge) in edges.iter().enumerate() {
            check_vertex("edge", edge.origin, vertex_count)?;
            check_vertex("edge", edge.dest, vertex_count)?;
            if edge.cost == 0 {
                return Err(InputError::NonPositiveCost {
                    origin: edge.origin,
                    dest: edge.dest,
                    cost: 0,
                });
            }
            if edge.origin == edge.dest {
                return Err(InputError::SelfLoop(edge.origin));
            }
            incident[edge.origin as usize].push(idx as u32);
            incident[edge.dest as usize].push(idx as u32);
        }

        Ok(Self {
            vertex_count,
            edges,
            incident,
            colony,
            food,
        })
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    pub fn colony(&self) -> VertexId {
        self.colony
    }

    #[inline]
    pub fn food(&self) -> VertexId {
        self.food
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn is_food(&self, v: VertexId) -> bool {
        v == self.food
    }

    #[inline]
    pub fn is_home(&self, v: VertexId) -> bool {
        v == self.colony
    }

    /// All edges touching `v`, in edge-list order. Empty means dead end.
    pub fn neighbors(&self, v: VertexId) -> Vec<Neighbor> {
        let Some(incident) = self.incident.get(v as usize) else {
            return Vec::new();
        };
        incident
            .iter()
            .filter_map(|&idx| {
                let edge = &self.edges[idx as usize];
                edge.other_end(v).map(|vertex| Neighbor {
                    vertex,
                    cost: edge.cost,
                    pheromone: edge.pheromone(),
                })
            })
            .collect()
    }

    /// First edge joining `a` and `b`
    pub fn edge_between(&self, a: VertexId, b: VertexId) -> Option<&Edge> {
        self.incident
            .get(a as usize)?
            .iter()
            .map(|&idx| &self.edges[idx as usize])
            .find(|edge| edge.connects(a, b))
    }

    /// Pheromone on the edge joining `a` and `b`
    pub fn pheromone(&self, a: VertexId, b: VertexId) -> Option<u32> {
        self.edge_between(a, b).map(Edge::pheromone)
    }

    /// Add one unit of pheromone to the edge joining `a` and `b`.
    /// Returns `false` if the vertices are not adjacent.
    pub fn reinforce(&self, a: VertexId, b: VertexId) -> bool {
        let edge = self.edge_between(a, b);
        debug_assert!(edge.is_some(), "reinforce on missing edge {a}-{b}");
        match edge {
            Some(edge) => {
                edge.deposit();
                true
            }
            None => false,
        }
    }

    /// Decay every edge by `amount`, floored at zero
    pub fn evaporate(&mut self, amount: u32) {
        for edge in &mut self.edges {
            edge.evaporate(amount);
        }
    }

    pub fn total_pheromone(&self) -> u64 {
        self.edges.iter().map(|e| e.pheromone() as u64).sum()
    }

    /// Greedy walk from the colony along the heaviest unvisited edges.
    /// Stops at the food, or when no marked edge leads anywhere new.
    pub fn strongest_trail(&self) -> Vec<VertexId> {
        let mut visited = vec![false; self.vertex_count];
        let mut trail = vec![self.colony];
        let mut current = self.colony;
        visited[current as usize] = true;

        while !self.is_food(current) {
            let next = self
                .neighbors(current)
                .into_iter()
                .filter(|n| n.pheromone > 0 && !visited[n.vertex as usize])
                .fold(None::<Neighbor>, |best, n| match best {
                    Some(b) if b.pheromone >= n.pheromone => Some(b),
                    _ => Some(n),
                });
            let Some(next) = next else { break };
            current = next.vertex;
            visited[current as usize] = true;
            trail.push(current);
        }

        trail
    }
}

fn check_vertex(what: &'static str, index: VertexId, vertices: usize) -> Result<()> {
    if (index as usize) < vertices {
        Ok(())
    } else {
        Err(InputError::VertexOutOfRange {
            what,
            index,
            vertices,
        })
    }
}
