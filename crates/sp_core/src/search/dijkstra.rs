use crate::constants::Distance;
use crate::error::GraphError;
use crate::graph::*;
use crate::priority_queue::{Candidate, PriorityQueue};
use crate::search::shortest_path::ShortestPath;
use crate::search_params::{SearchParams, SelectionStrategy};
use crate::statistics::SearchStats;
use log::{debug, info};

/// Per-query bookkeeping, indexed by vertex id
#[derive(Debug)]
pub(crate) struct SearchState {
    pub(crate) distance: Vec<Option<Distance>>,
    pub(crate) predecessor: Vec<Option<NodeIndex>>,
    pub(crate) visited: Vec<bool>,
}

impl SearchState {
    pub(crate) fn new(num_nodes: usize, source: NodeIndex) -> Self {
        let mut distance = vec![None; num_nodes];
        distance[source.index()] = Some(0);

        Self {
            distance,
            predecessor: vec![None; num_nodes],
            visited: vec![false; num_nodes],
        }
    }

    /// Unvisited vertex with the smallest known distance, lowest index on ties
    fn closest_unvisited(&self) -> Option<NodeIndex> {
        self.distance
            .iter()
            .zip(&self.visited)
            .enumerate()
            .filter(|(_, (_, visited))| !**visited)
            .filter_map(|(idx, (distance, _))| distance.map(|d| (d, idx)))
            .min_by_key(|(d, _)| *d)
            .map(|(_, idx)| node_index(idx))
    }

    /// Lowers the distance of `edge.target` if going through `edge.source` is
    /// strictly shorter. Returns the new distance on improvement.
    fn relax(&mut self, edge: &Edge) -> Option<Distance> {
        let from = self.distance[edge.source.index()]?;
        let new_distance = from + Distance::from(edge.weight);

        match self.distance[edge.target.index()] {
            Some(old) if old <= new_distance => None,
            _ => {
                self.distance[edge.target.index()] = Some(new_distance);
                self.predecessor[edge.target.index()] = Some(edge.source);
                Some(new_distance)
            }
        }
    }
}

pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    params: SearchParams,
    g: &'a Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self::with_params(graph, SearchParams::default())
    }

    pub fn with_params(graph: &'a Graph, params: SearchParams) -> Self {
        Dijkstra {
            g: graph,
            params,
            stats: SearchStats::default(),
        }
    }

    /// Searches the shortest path from `source` to `target`.
    ///
    /// Returns `Ok(None)` if `target` is unreachable.
    pub fn search(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
    ) -> Result<Option<ShortestPath>, GraphError> {
        for node_idx in [source, target] {
            if !self.g.contains_node(node_idx) {
                return Err(GraphError::InvalidQuery {
                    id: node_idx.index(),
                });
            }
        }

        self.stats.init();

        if source == target {
            self.stats.nodes_settled += 1;
            self.stats.finish();
            return Ok(Some(ShortestPath::new(vec![source], 0)));
        }

        let mut state = SearchState::new(self.g.node_bound(), source);

        let reached = match self.params.strategy {
            SelectionStrategy::LinearScan => self.run_linear_scan(&mut state, target),
            SelectionStrategy::BinaryHeap => self.run_binary_heap(&mut state, source, target),
            SelectionStrategy::LocalGreedy => self.run_local_greedy(&mut state, source, target),
        };
        self.stats.finish();

        let sp = if reached {
            super::reconstruct_path(target, source, &state.distance, &state.predecessor)
        } else {
            None
        };

        if sp.is_some() {
            debug!("Path found: {:?}", sp);
            info!("Path found ({}): {}", self.params.strategy, self.stats);
        } else {
            info!("No path found ({}): {}", self.params.strategy, self.stats);
        }

        Ok(sp)
    }

    /// Relaxes every edge from `node_idx` to an unvisited neighbour. `f` is
    /// called for each of those edges with the neighbour's new distance if it
    /// improved.
    fn relax_edges(
        &mut self,
        state: &mut SearchState,
        node_idx: NodeIndex,
        mut f: impl FnMut(&Edge, Option<Distance>),
    ) {
        let g = self.g;
        for (_, edge) in g.edges_incident_to(node_idx) {
            if state.visited[edge.target.index()] {
                continue;
            }
            let improved = state.relax(&edge);
            if improved.is_some() {
                self.stats.edges_relaxed += 1;
            }
            f(&edge, improved);
        }
    }

    fn settle(&mut self, state: &mut SearchState, node_idx: NodeIndex) {
        state.visited[node_idx.index()] = true;
        self.stats.nodes_settled += 1;
    }

    fn run_linear_scan(&mut self, state: &mut SearchState, target: NodeIndex) -> bool {
        while let Some(node_idx) = state.closest_unvisited() {
            self.settle(state, node_idx);

            if node_idx == target {
                return true;
            }

            self.relax_edges(state, node_idx, |_, _| {});
        }
        false
    }

    fn run_binary_heap(
        &mut self,
        state: &mut SearchState,
        source: NodeIndex,
        target: NodeIndex,
    ) -> bool {
        let mut queue = PriorityQueue::new();
        queue.push(Candidate::new(source, 0));

        while let Some(Candidate { node_idx, .. }) = queue.pop() {
            // Stale entry, the vertex was settled through a shorter distance
            if state.visited[node_idx.index()] {
                continue;
            }
            self.settle(state, node_idx);

            if node_idx == target {
                return true;
            }

            self.relax_edges(state, node_idx, |edge, improved| {
                if let Some(distance) = improved {
                    queue.push(Candidate::new(edge.target, distance));
                }
            });
        }
        false
    }

    /// Moves along the cheapest edge to an unvisited neighbour of the current
    /// vertex instead of settling the globally closest vertex.
    fn run_local_greedy(
        &mut self,
        state: &mut SearchState,
        source: NodeIndex,
        target: NodeIndex,
    ) -> bool {
        let mut current = source;

        loop {
            self.settle(state, current);

            if current == target {
                return true;
            }

            let mut next: Option<Edge> = None;
            self.relax_edges(state, current, |edge, _| {
                if next.map_or(true, |n| edge.weight < n.weight) {
                    next = Some(*edge);
                }
            });

            match next {
                Some(edge) => current = edge.target,
                None => {
                    debug!("Dead end at {}", current);
                    return false;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::edge;
    use crate::search::{assert_no_path, assert_path};
    use crate::util::test_graphs::{
        dead_end_graph, diamond_graph, generate_complex_graph, greedy_trap_graph, two_components,
    };

    use super::*;

    const ALL_STRATEGIES: [SelectionStrategy; 3] = [
        SelectionStrategy::LinearScan,
        SelectionStrategy::BinaryHeap,
        SelectionStrategy::LocalGreedy,
    ];

    const EXACT_STRATEGIES: [SelectionStrategy; 2] =
        [SelectionStrategy::LinearScan, SelectionStrategy::BinaryHeap];

    fn init_log() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn dijkstra(g: &Graph, strategy: SelectionStrategy) -> Dijkstra<'_> {
        Dijkstra::with_params(g, SearchParams::new().strategy(strategy))
    }

    #[test]
    fn simple_path() {
        //      7 -- 8 -- 9
        //      |         |
        // 0 -- 5 -- 6 -  |
        // |         |  \ |
        // 1 -- 2 -- 3 -- 4
        init_log();
        let mut g = Graph::with_nodes(10).unwrap();

        edge!(g, 0, 1, 1);
        edge!(g, 1, 2, 1);
        edge!(g, 2, 3, 1);
        edge!(g, 3, 4, 20);
        edge!(g, 0, 5, 5);
        edge!(g, 5, 6, 1);
        edge!(g, 6, 4, 20);
        edge!(g, 6, 3, 20);
        edge!(g, 5, 7, 5);
        edge!(g, 7, 8, 1);
        edge!(g, 8, 9, 1);
        edge!(g, 9, 4, 1);

        for strategy in EXACT_STRATEGIES {
            let mut d = dijkstra(&g, strategy);

            assert_path(vec![0, 5, 7, 8, 9, 4], 13, d.search(0.into(), 4.into()));
            assert_path(vec![4, 9, 8, 7, 5, 0], 13, d.search(4.into(), 0.into()));
            assert_path(vec![6, 5, 0, 1, 2, 3], 9, d.search(6.into(), 3.into()));
            assert_path(vec![4], 0, d.search(4.into(), 4.into()));
            assert_path(vec![1, 2, 3], 2, d.search(1.into(), 3.into()));
        }
    }

    #[test]
    fn disconnected_graph() {
        // 0 -- 1 -- 2
        // 3 -- 4 -- 5
        init_log();
        let g = two_components();

        for strategy in ALL_STRATEGIES {
            let mut d = dijkstra(&g, strategy);

            assert_no_path(d.search(0.into(), 3.into()));
            assert_no_path(d.search(3.into(), 0.into()));
            assert_path(vec![0, 1, 2], 2, d.search(0.into(), 2.into()));
            assert_path(vec![3, 4, 5], 4, d.search(3.into(), 5.into()));
        }
    }

    #[test]
    fn go_around() {
        // 0 -- 1
        // |    |
        // 2 -- 3
        let mut g = Graph::with_nodes(4).unwrap();
        edge!(g, 0, 1, 10);
        edge!(g, 0, 2, 1);
        edge!(g, 2, 3, 1);
        edge!(g, 3, 1, 1);

        for strategy in ALL_STRATEGIES {
            let mut d = dijkstra(&g, strategy);
            assert_path(vec![0, 2, 3, 1], 3, d.search(0.into(), 1.into()));
        }
    }

    #[test]
    fn diamond() {
        init_log();
        let g = diamond_graph();

        for strategy in ALL_STRATEGIES {
            let mut d = dijkstra(&g, strategy);
            assert_path(vec![0, 1, 2, 3], 5, d.search(0.into(), 3.into()));
            assert_path(vec![3, 2, 1, 0], 5, d.search(3.into(), 0.into()));
        }
    }

    #[test]
    fn same_source_and_target() {
        let g = diamond_graph();

        for strategy in ALL_STRATEGIES {
            let mut d = dijkstra(&g, strategy);
            assert_path(vec![2], 0, d.search(2.into(), 2.into()));
        }
    }

    #[test]
    fn parallel_edges_use_cheapest() {
        let mut g = Graph::with_nodes(3).unwrap();
        edge!(g, 0, 1, 9);
        edge!(g, 0, 1, 2);
        edge!(g, 1, 2, 1);
        edge!(g, 1, 2, 4);

        for strategy in ALL_STRATEGIES {
            let mut d = dijkstra(&g, strategy);
            assert_path(vec![0, 1, 2], 3, d.search(0.into(), 2.into()));
        }
    }

    #[test]
    fn ties_prefer_lowest_index() {
        // 0 -- 1 -- 3
        // |         |
        // 2 ------- +
        let mut g = Graph::with_nodes(4).unwrap();
        edge!(g, 0, 2, 1);
        edge!(g, 0, 1, 1);
        edge!(g, 2, 3, 1);
        edge!(g, 1, 3, 1);

        for strategy in EXACT_STRATEGIES {
            let mut d = dijkstra(&g, strategy);
            assert_path(vec![0, 1, 3], 2, d.search(0.into(), 3.into()));
        }
    }

    #[test]
    fn complex_graph() {
        let g = generate_complex_graph();

        for strategy in EXACT_STRATEGIES {
            let mut d = dijkstra(&g, strategy);
            // A -> K -> J -> H -> F
            assert_path(vec![0, 10, 9, 7, 5], 10, d.search(0.into(), 5.into()));
            // B -> C -> J -> E
            assert_path(vec![1, 2, 9, 4], 8, d.search(1.into(), 4.into()));
        }
    }

    #[test]
    fn local_greedy_takes_longer_path() {
        init_log();
        let g = greedy_trap_graph();

        let mut exact = dijkstra(&g, SelectionStrategy::LinearScan);
        assert_path(vec![0, 2, 3], 4, exact.search(0.into(), 3.into()));

        let mut greedy = dijkstra(&g, SelectionStrategy::LocalGreedy);
        assert_path(vec![0, 1, 3], 11, greedy.search(0.into(), 3.into()));
    }

    #[test]
    fn local_greedy_gets_stuck() {
        init_log();
        let g = dead_end_graph();

        let mut exact = dijkstra(&g, SelectionStrategy::LinearScan);
        assert_path(vec![0, 2, 3], 6, exact.search(0.into(), 3.into()));

        let mut greedy = dijkstra(&g, SelectionStrategy::LocalGreedy);
        assert_no_path(greedy.search(0.into(), 3.into()));
    }

    #[test]
    fn invalid_query() {
        let g = diamond_graph();

        for strategy in ALL_STRATEGIES {
            let mut d = dijkstra(&g, strategy);
            assert_eq!(
                d.search(0.into(), 4.into()),
                Err(GraphError::InvalidQuery { id: 4 })
            );
            assert_eq!(
                d.search(NodeIndex::end(), 0.into()),
                Err(GraphError::InvalidQuery {
                    id: NodeIndex::end().index()
                })
            );
        }
    }

    #[test]
    fn search_is_idempotent() {
        let g = generate_complex_graph();

        for strategy in ALL_STRATEGIES {
            let mut d = dijkstra(&g, strategy);
            let first = d.search(10.into(), 6.into());
            let second = d.search(10.into(), 6.into());
            assert_eq!(first, second);
        }
    }
}
