use crate::constants::Distance;
use crate::error::GraphError;
use crate::graph::{Graph, NodeIndex};

use self::dijkstra::Dijkstra;
use self::shortest_path::ShortestPath;

pub mod dijkstra;
pub mod shortest_path;

/// Computes the shortest path from `source` to `target` with the default
/// search parameters.
///
/// `Ok(None)` means that `target` cannot be reached from `source`. Vertices
/// that are not part of `g` are rejected with [`GraphError::InvalidQuery`].
pub fn find_shortest_path(
    g: &Graph,
    source: NodeIndex,
    target: NodeIndex,
) -> Result<Option<ShortestPath>, GraphError> {
    Dijkstra::new(g).search(source, target)
}

/// Follows the predecessor links from `target` back to `source`.
///
/// Returns `None` if `target` was never reached or the chain does not end in
/// `source`.
pub fn reconstruct_path(
    target: NodeIndex,
    source: NodeIndex,
    distance: &[Option<Distance>],
    predecessor: &[Option<NodeIndex>],
) -> Option<ShortestPath> {
    let weight = (*distance.get(target.index())?)?;

    let mut path = vec![target];
    let mut current = target;
    while current != source {
        current = (*predecessor.get(current.index())?)?;
        path.push(current);

        // A chain longer than the table would have to contain a cycle
        if path.len() > predecessor.len() {
            return None;
        }
    }
    path.reverse();
    Some(ShortestPath::new(path, weight))
}

#[cfg(test)]
pub(crate) fn assert_no_path(path: Result<Option<ShortestPath>, GraphError>) {
    assert_eq!(Ok(None), path);
}

#[cfg(test)]
pub(crate) fn assert_path(
    expected_path: Vec<usize>,
    expected_weight: Distance,
    path: Result<Option<ShortestPath>, GraphError>,
) {
    let expected_path = expected_path
        .into_iter()
        .map(crate::graph::node_index)
        .collect();
    assert_eq!(
        Ok(Some(ShortestPath::new(expected_path, expected_weight))),
        path
    );
}
