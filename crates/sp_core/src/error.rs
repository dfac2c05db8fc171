//! Errors raised while building a graph or querying it.
use std::fmt;

use thiserror::Error;

/// Why an edge was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeFault {
    UnknownVertex,
    SelfLoop,
    NonPositiveWeight,
    WeightTooLarge,
}

impl fmt::Display for EdgeFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            EdgeFault::UnknownVertex => "endpoint is not a vertex of the graph",
            EdgeFault::SelfLoop => "both endpoints are the same vertex",
            EdgeFault::NonPositiveWeight => "weight must be greater than zero",
            EdgeFault::WeightTooLarge => "weight does not fit into the weight type",
        };
        f.write_str(msg)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex {id} is out of range (max {max_nodes} vertices)")]
    InvalidVertex { id: usize, max_nodes: usize },

    #[error("vertex {id} already exists")]
    DuplicateVertex { id: usize },

    #[error("invalid edge {from} -- {to} (weight {weight}): {reason}")]
    InvalidEdge {
        from: usize,
        to: usize,
        weight: i64,
        reason: EdgeFault,
    },

    #[error("vertex {id} is not part of the graph")]
    InvalidQuery { id: usize },
}

impl GraphError {
    /// True for both kinds of rejected vertex registration
    pub fn is_invalid_vertex(&self) -> bool {
        matches!(
            self,
            GraphError::InvalidVertex { .. } | GraphError::DuplicateVertex { .. }
        )
    }

    pub fn is_invalid_edge(&self) -> bool {
        matches!(self, GraphError::InvalidEdge { .. })
    }
}
