use std::sync::atomic::{AtomicU32, Ordering};

/// Vertex index in `[0, V)`
pub type VertexId = u32;

/// Undirected weighted edge with its pheromone counter
#[derive(Debug)]
pub struct Edge {
    pub origin: VertexId,
    pub dest: VertexId,
    pub cost: u32,
    pheromone: AtomicU32, // shared by every ant, bumped through `&Graph`
}

impl Edge {
    /// Create a new edge with no pheromone
    #[inline]
    pub fn new(origin: VertexId, dest: VertexId, cost: u32) -> Self {
        Self {
            origin,
            dest,
            cost,
            pheromone: AtomicU32::new(0),
        }
    }

    /// The opposite endpoint if `vertex` touches this edge
    #[inline]
    pub fn other_end(&self, vertex: VertexId) -> Option<VertexId> {
        if vertex == self.origin {
            Some(self.dest)
        } else if vertex == self.dest {
            Some(self.origin)
        } else {
            None
        }
    }

    /// Check whether this edge joins `a` and `b` in either orientation
    #[inline]
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.origin == a && self.dest == b) || (self.origin == b && self.dest == a)
    }

    #[inline]
    pub fn pheromone(&self) -> u32 {
        self.pheromone.load(Ordering::Relaxed)
    }

    /// Add one unit of pheromone
    #[inline]
    pub fn deposit(&self) {
        self.pheromone.fetch_add(1, Ordering::Relaxed);
    }

    /// Remove `amount`, never going below zero
    #[inline]
    pub fn evaporate(&mut self, amount: u32) {
        let level = self.pheromone.get_mut();
        *level = level.saturating_sub(amount);
    }
}

impl Clone for Edge {
    fn clone(&self) -> Self {
        Self {
            origin: self.origin,
            dest: self.dest,
            cost: self.cost,
            pheromone: AtomicU32::new(self.pheromone()),
        }
    }
}
