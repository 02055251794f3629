use crate::colony::Colony;
use crate::config::ColonyConfig;
use crate::error::{InputError, Result};
use crate::graph::edge::{Edge, VertexId};
use crate::graph::graph::Graph;
use std::fs;
use std::str::FromStr;

/// Matrix value meaning "no edge"
pub const NO_EDGE: i64 = -1;

/// A loaded problem: the graph, how many ants to release, and vertex coordinates
#[derive(Clone, Debug)]
pub struct Instance {
    pub graph: Graph,
    pub ant_count: usize,
    /// Screen coordinates per vertex, only meaningful to renderers
    pub positions: Vec<(i32, i32)>,
}

impl Instance {
    /// Colony of `ant_count` ants waiting at the graph's colony vertex
    pub fn colony(&self, config: ColonyConfig) -> Colony {
        Colony::new(self.ant_count, self.graph.colony(), config)
    }
}

/// Parse an instance from a file path
pub fn parse_instance(path: &str) -> Result<Instance> {
    let src = fs::read_to_string(path)?;
    parse_instance_str(&src)
}

/// Parse an instance from its text form
pub fn parse_instance_str(src: &str) -> Result<Instance> {
    let mut lines: Vec<&str> = src.lines().collect();
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    let reader = Lines(&lines);

    let colony: VertexId = reader.field(0, "colony vertex")?;
    let ant_count: usize = reader.field(1, "number of ants")?;
    let food: VertexId = reader.field(2, "food vertex")?;
    let vertex_count: usize = reader.field(3, "number of vertices")?;

    let mut matrix: Vec<Vec<i64>> = Vec::new();
    for row in 0..vertex_count {
        let idx = 4 + row;
        let costs: Vec<i64> = reader.row(idx, "adjacency row", "edge cost")?;
        if costs.len() != vertex_count {
            return Err(InputError::RowLength {
                line: idx + 1,
                expected: vertex_count,
                found: costs.len(),
            });
        }
        matrix.push(costs);
    }

    let mut positions = Vec::new();
    for row in 0..vertex_count {
        let idx = 4 + vertex_count + row;
        let coords: Vec<i32> = reader.row(idx, "coordinate row", "coordinate")?;
        match coords[..] {
            [x, y] => positions.push((x, y)),
            _ => {
                return Err(InputError::RowLength {
                    line: idx + 1,
                    expected: 2,
                    found: coords.len(),
                })
            }
        }
    }

    let consumed = 4 + 2 * vertex_count;
    if let Some(extra) = lines
        .iter()
        .skip(consumed)
        .position(|l| !l.trim().is_empty())
    {
        return Err(InputError::TrailingContent {
            line: consumed + extra + 1,
        });
    }

    let edges = edges_from_matrix(&matrix)?;
    let graph = Graph::new(vertex_count, edges, colony, food)?;

    Ok(Instance {
        graph,
        ant_count,
        positions,
    })
}

/// One undirected edge per connected pair, in row-major first-seen order
fn edges_from_matrix(matrix: &[Vec<i64>]) -> Result<Vec<Edge>> {
    let mut edges = Vec::new();

    for (i, row) in matrix.iter().enumerate() {
        for (j, &cost) in row.iter().enumerate() {
            let (origin, dest) = (i as VertexId, j as VertexId);
            if cost == NO_EDGE {
                continue;
            }
            if i == j && cost == 0 {
                continue;
            }
            if cost <= 0 {
                return Err(InputError::NonPositiveCost { origin, dest, cost });
            }
            if i == j {
                return Err(InputError::SelfLoop(origin));
            }
            let cost = u32::try_from(cost).map_err(|_| InputError::InvalidNumber {
                line: 5 + i,
                what: "edge cost",
                value: cost.to_string(),
            })?;

            if j < i {
                let mirrored = matrix[j][i];
                if mirrored != NO_EDGE {
                    // added while reading row j
                    if mirrored != cost as i64 {
                        return Err(InputError::AsymmetricCost {
                            origin: dest,
                            dest: origin,
                            forward: mirrored as u32,
                            backward: cost,
                        });
                    }
                    continue;
                }
            }
            edges.push(Edge::new(origin, dest, cost));
        }
    }

    Ok(edges)
}

/// Zero-indexed line access with 1-based error reporting
struct Lines<'a>(&'a [&'a str]);

impl Lines<'_> {
    fn get(&self, idx: usize, what: &'static str) -> Result<&str> {
        self.0
            .get(idx)
            .map(|l| l.trim())
            .ok_or(InputError::MissingLine {
                line: idx + 1,
                what,
            })
    }

    fn field<T: FromStr>(&self, idx: usize, what: &'static str) -> Result<T> {
        let text = self.get(idx, what)?;
        parse_token(text, idx, what)
    }

    fn row<T: FromStr>(&self, idx: usize, what: &'static str, item: &'static str) -> Result<Vec<T>> {
        self.get(idx, what)?
            .split_whitespace()
            .map(|tok| parse_token(tok, idx, item))
            .collect()
    }
}

fn parse_token<T: FromStr>(tok: &str, idx: usize, what: &'static str) -> Result<T> {
    tok.parse().map_err(|_| InputError::InvalidNumber {
        line: idx + 1,
        what,
        value: tok.to_string(),
    })
}
