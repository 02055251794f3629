pub mod edge;
pub mod graph;
pub mod parser;

pub use edge::{Edge, VertexId};
pub use graph::{Graph, Neighbor};
pub use parser::{parse_instance, parse_instance_str, Instance};
