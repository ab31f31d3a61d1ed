//! Graph model, loading and shortest paths.
//!
//! Nothing in here touches the browser; the canvas component drives it.

mod error;
mod loader;
mod path;
mod store;
mod types;

pub use error::{GraphError, GraphResult};
pub use loader::parse_graph;
pub use path::{Path, PathEdge, shortest_path};
pub use store::{Graph, GraphStore};
pub use types::{Edge, EdgeIndex, GraphData, Node, NodeId, Point};
