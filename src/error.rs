use crate::graph::VertexId;
use thiserror::Error;

/// Errors raised while building a graph or loading an instance file
#[derive(Debug, Error)]
pub enum InputError {
    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The file ended before a required line
    #[error("line {line}: missing {what}")]
    MissingLine { line: usize, what: &'static str },
    /// Non-blank lines after the coordinate block
    #[error("line {line}: unexpected content after the last coordinate row")]
    TrailingContent { line: usize },
    /// A token that is not an integer (or not in range for its field)
    #[error("line {line}: invalid {what} `{value}`")]
    InvalidNumber {
        line: usize,
        what: &'static str,
        value: String,
    },
    /// A row with the wrong number of columns
    #[error("line {line}: expected {expected} values, found {found}")]
    RowLength {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// The graph has no vertices
    #[error("graph must contain at least one vertex")]
    EmptyGraph,
    /// A designated vertex outside `[0, V)`
    #[error("{what} vertex {index} is out of range for {vertices} vertices")]
    VertexOutOfRange {
        what: &'static str,
        index: VertexId,
        vertices: usize,
    },
    /// Colony and food share the same vertex
    #[error("colony and food must be different vertices (both are {0})")]
    ColonyIsFood(VertexId),
    /// Edge cost that is zero or below the `-1` "no edge" marker
    #[error("edge {origin}-{dest} has non-positive cost {cost}")]
    NonPositiveCost {
        origin: VertexId,
        dest: VertexId,
        cost: i64,
    },
    /// Positive cost on the matrix diagonal
    #[error("vertex {0} has an edge to itself")]
    SelfLoop(VertexId),
    /// Mirrored matrix entries disagree
    #[error("edge {origin}-{dest} has cost {forward} one way and {backward} the other")]
    AsymmetricCost {
        origin: VertexId,
        dest: VertexId,
        forward: u32,
        backward: u32,
    },
}

/// Rejected simulation parameters
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("exploration probability {0} must be between 0.0 and 1.0")]
    ExplorationProbability(f64),
    #[error("evaporation interval must be at least one tick")]
    ZeroEvaporationInterval,
}

/// Failures surfaced by `Colony::step`
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    /// An ant had to choose a move at a vertex with no edges
    #[error("ant {ant} reached dead end at vertex {vertex}")]
    DeadEnd { ant: u32, vertex: VertexId },
    /// Backtracking asked for an edge that does not exist
    #[error("ant {ant} cannot backtrack from {from} to {to}: no such edge")]
    MissingEdge { ant: u32, from: VertexId, to: VertexId },
    /// A food-carrying ant ran out of path before reaching home
    #[error("ant {ant} carries food at vertex {vertex} but has no path home")]
    LostTrail { ant: u32, vertex: VertexId },
}

/// Top level error for the binary
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    #[error("telemetry: {0}")]
    Telemetry(#[from] std::io::Error),
}

/// Result type alias for instance loading
pub type Result<T, E = InputError> = std::result::Result<T, E>;
