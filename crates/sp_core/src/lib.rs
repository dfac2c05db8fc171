//! Crate to compute shortest paths in small undirected weighted graphs.
//!
//! # Basic usage
//! ```
//! use sp_core::prelude::*;
//!
//! // Create a graph with the vertices 0..4
//! let mut g = Graph::with_nodes(4).expect("4 vertices fit into the graph");
//!
//! g.add_edge(0, 1, 2).unwrap();
//! g.add_edge(1, 2, 2).unwrap();
//! g.add_edge(0, 2, 5).unwrap();
//! g.add_edge(2, 3, 1).unwrap();
//!
//! // Run the search
//! let sp = find_shortest_path(&g, node_index(0), node_index(3))
//!     .expect("both vertices exist")
//!     .expect("3 is reachable from 0");
//!
//! assert_eq!(sp.weight, 5);
//! assert_eq!(sp.nodes, vec![node_index(0), node_index(1), node_index(2), node_index(3)]);
//!```
//! [`Graph`]: crate::graph::Graph
pub mod constants;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod priority_queue;
pub mod search;
pub mod search_params;
pub mod statistics;
pub mod util;
