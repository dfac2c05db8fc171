//! Re-exports of the most commonly used items in `sp_core`.
pub use crate::error::GraphError;
pub use crate::search_params::{SearchParams, SelectionStrategy};

pub use crate::search;
pub use crate::search::dijkstra::Dijkstra;
pub use crate::search::find_shortest_path;
pub use crate::search::shortest_path::ShortestPath;

pub use crate::graph::node_index;
pub use crate::graph::Graph;
pub use crate::graph::NodeIndex;
