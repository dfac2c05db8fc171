use crate::{constants::Distance, graph::NodeIndex};

/// Vertices from source to target (both included) and the summed edge weight
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ShortestPath {
    pub nodes: Vec<NodeIndex>,
    pub weight: Distance,
}

impl ShortestPath {
    pub fn new(nodes: Vec<NodeIndex>, weight: Distance) -> Self {
        ShortestPath { nodes, weight }
    }

    pub fn source(&self) -> Option<NodeIndex> {
        self.nodes.first().copied()
    }

    pub fn target(&self) -> Option<NodeIndex> {
        self.nodes.last().copied()
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}
