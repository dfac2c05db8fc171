use crate::constants::{Weight, MAX_NODES};
use crate::error::{EdgeFault, GraphError};
use anyhow::Context;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::{fs::File, io, io::BufWriter, path::Path};

/// Default integer type for node and edge indices
pub type DefaultIdx = u32;

/// Node identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct NodeIndex(DefaultIdx);

impl NodeIndex {
    /// Indices that do not fit into [`DefaultIdx`] collapse to [`NodeIndex::end`],
    /// which is never registered in a graph.
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(DefaultIdx::try_from(x).unwrap_or(DefaultIdx::MAX))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn end() -> Self {
        NodeIndex(DefaultIdx::MAX)
    }
}

impl From<usize> for NodeIndex {
    fn from(ix: usize) -> Self {
        NodeIndex::new(ix)
    }
}

impl std::fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Edge identifier.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize,
)]
pub struct EdgeIndex(DefaultIdx);

impl EdgeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        EdgeIndex(DefaultIdx::try_from(x).unwrap_or(DefaultIdx::MAX))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// An invalid `EdgeIndex` used to denote absence of an edge.
    #[inline]
    pub fn end() -> Self {
        EdgeIndex(DefaultIdx::MAX)
    }
}

/// Undirected weighted edge. `source` and `target` only describe the
/// orientation in which the edge was handed out, see
/// [`Graph::edges_incident_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: NodeIndex, target: NodeIndex, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }

    pub(crate) fn reverse(&self) -> Self {
        Edge {
            source: self.target,
            target: self.source,
            weight: self.weight,
        }
    }
}

/// One row of an edge list file: `source,target,weight`.
///
/// Signed so that negative input can be reported instead of failing the parse.
#[derive(Debug, Deserialize)]
struct EdgeRecord {
    source: i64,
    target: i64,
    weight: i64,
}

/// Undirected multigraph over dense vertex indices.
///
/// Every edge is stored once and referenced from the incidence lists of both
/// endpoints. Parallel edges are kept.
#[derive(Debug, Clone)]
pub struct Graph {
    present: Vec<bool>,
    incidence: Vec<Vec<EdgeIndex>>,
    edges: Vec<Edge>,
    num_nodes: usize,
    max_nodes: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::with_max_nodes(MAX_NODES)
    }

    /// Creates an empty graph which accepts vertex ids in `0..max_nodes`.
    /// `max_nodes` is capped at [`MAX_NODES`].
    pub fn with_max_nodes(max_nodes: usize) -> Self {
        Self {
            present: Vec::new(),
            incidence: Vec::new(),
            edges: Vec::new(),
            num_nodes: 0,
            max_nodes: max_nodes.min(MAX_NODES),
        }
    }

    /// Creates a graph with the vertices `0..num_nodes`
    pub fn with_nodes(num_nodes: usize) -> Result<Self, GraphError> {
        let mut g = Self::new();
        g.add_nodes(num_nodes)?;
        Ok(g)
    }

    /// Registers a vertex.
    ///
    /// Fails if `id` is outside `0..max_nodes` or already registered.
    pub fn add_node(&mut self, id: usize) -> Result<NodeIndex, GraphError> {
        if id >= self.max_nodes {
            return Err(GraphError::InvalidVertex {
                id,
                max_nodes: self.max_nodes,
            });
        }
        if self.present.get(id).copied().unwrap_or(false) {
            return Err(GraphError::DuplicateVertex { id });
        }

        if id >= self.present.len() {
            self.present.resize(id + 1, false);
            self.incidence.resize_with(id + 1, Vec::new);
        }
        self.present[id] = true;
        self.num_nodes += 1;

        Ok(NodeIndex::new(id))
    }

    /// Registers the vertices `0..num_nodes`. Nothing is added if any of them
    /// would be rejected.
    pub fn add_nodes(&mut self, num_nodes: usize) -> Result<(), GraphError> {
        if num_nodes > self.max_nodes {
            return Err(GraphError::InvalidVertex {
                id: self.max_nodes,
                max_nodes: self.max_nodes,
            });
        }
        if let Some(id) = (0..num_nodes).find(|&id| self.contains_id(id)) {
            return Err(GraphError::DuplicateVertex { id });
        }
        for id in 0..num_nodes {
            self.add_node(id)?;
        }
        Ok(())
    }

    /// Adds an undirected edge between `a` and `b`.
    ///
    /// Returns the index of the new edge. On error the graph is unchanged.
    pub fn add_edge(&mut self, a: usize, b: usize, weight: i64) -> Result<EdgeIndex, GraphError> {
        let invalid = |reason| GraphError::InvalidEdge {
            from: a,
            to: b,
            weight,
            reason,
        };

        if !self.contains_id(a) || !self.contains_id(b) {
            return Err(invalid(EdgeFault::UnknownVertex));
        }
        if a == b {
            return Err(invalid(EdgeFault::SelfLoop));
        }
        if weight <= 0 {
            return Err(invalid(EdgeFault::NonPositiveWeight));
        }
        let weight = Weight::try_from(weight).map_err(|_| invalid(EdgeFault::WeightTooLarge))?;

        let edge_idx = EdgeIndex::new(self.edges.len());
        assert!(
            EdgeIndex::end() != edge_idx,
            "Maximum number of edges for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        self.incidence[a].push(edge_idx);
        self.incidence[b].push(edge_idx);
        self.edges
            .push(Edge::new(NodeIndex::new(a), NodeIndex::new(b), weight));

        Ok(edge_idx)
    }

    fn contains_id(&self, id: usize) -> bool {
        self.present.get(id).copied().unwrap_or(false)
    }

    pub fn contains_node(&self, node_idx: NodeIndex) -> bool {
        self.contains_id(node_idx.index())
    }

    /// Number of registered vertices
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn max_nodes(&self) -> usize {
        self.max_nodes
    }

    /// One past the highest registered vertex id. Per-vertex tables of a
    /// search are allocated with this length.
    pub(crate) fn node_bound(&self) -> usize {
        self.present.len()
    }

    /// Returns an iterator over all registered vertices in ascending order
    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.present
            .iter()
            .enumerate()
            .filter(|(_, present)| **present)
            .map(|(id, _)| NodeIndex::new(id))
    }

    /// Returns an iterator over all edges of the graph in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn edge(&self, edge_idx: EdgeIndex) -> Option<&Edge> {
        self.edges.get(edge_idx.index())
    }

    /// Number of edge endpoints at `node_idx`. Parallel edges count separately.
    pub fn degree(&self, node_idx: NodeIndex) -> usize {
        self.incidence
            .get(node_idx.index())
            .map_or(0, |edges| edges.len())
    }

    /// All edges touching `node_idx`, oriented so that `edge.source == node_idx`.
    ///
    /// Iteration follows insertion order. Unknown vertices have no edges.
    pub fn edges_incident_to(
        &self,
        node_idx: NodeIndex,
    ) -> impl Iterator<Item = (EdgeIndex, Edge)> + '_ {
        self.incidence
            .get(node_idx.index())
            .into_iter()
            .flatten()
            .map(move |edge_idx| {
                let edge = &self.edges[edge_idx.index()];
                if edge.source == node_idx {
                    (*edge_idx, *edge)
                } else {
                    (*edge_idx, edge.reverse())
                }
            })
    }

    /// Reads an edge list with a `source,target,weight` header into the empty
    /// graph `g`, which decides the vertex ceiling.
    ///
    /// The vertices `0..num_nodes` are created first; without `num_nodes` the
    /// count is inferred from the largest index in the file. Rows that would
    /// produce an invalid edge are skipped with a warning.
    pub fn from_csv(
        path_to_edges: &Path,
        num_nodes: Option<usize>,
        g: Graph,
    ) -> anyhow::Result<Self> {
        info!("Reading edge list: {:?}", path_to_edges);

        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path_to_edges)
            .with_context(|| format!("Could not open {:?}", path_to_edges))?;

        Self::from_csv_reader(reader, num_nodes, g)
    }

    /// Same as [`Graph::from_csv`] but reads from any CSV source
    pub fn from_csv_reader<R: io::Read>(
        mut reader: csv::Reader<R>,
        num_nodes: Option<usize>,
        mut g: Graph,
    ) -> anyhow::Result<Self> {
        let mut records = Vec::new();
        for (i, result) in reader.deserialize().enumerate() {
            let record: EdgeRecord =
                result.with_context(|| format!("Failed to parse edge in row {}", i + 1))?;
            records.push(record);
        }

        let num_nodes = match num_nodes {
            Some(n) => n,
            None => records
                .iter()
                .flat_map(|r| [r.source, r.target])
                .filter_map(|id| usize::try_from(id).ok())
                .max()
                .map_or(0, |max| max + 1),
        };
        g.add_nodes(num_nodes)
            .context("Could not create the vertices of the graph")?;

        for (i, record) in records.iter().enumerate() {
            let (Ok(source), Ok(target)) = (
                usize::try_from(record.source),
                usize::try_from(record.target),
            ) else {
                warn!("Skipping row {}: negative vertex index", i + 1);
                continue;
            };
            if let Err(e) = g.add_edge(source, target, record.weight) {
                warn!("Skipping row {}: {}", i + 1, e);
            }
        }

        info!(
            "Graph has {} nodes and {} edges",
            g.num_nodes(),
            g.num_edges()
        );
        Ok(g)
    }

    /// Writes the graph as Graphviz DOT to `path`
    pub fn export_dot(&self, path: &Path) -> anyhow::Result<()> {
        let file = File::create(path).with_context(|| format!("Could not create {:?}", path))?;
        let mut wtr = BufWriter::new(file);

        debug!("BEGIN writing dot file");
        crate::util::dot::write_dot(self, &mut wtr)?;
        io::Write::flush(&mut wtr)?;
        debug!("FINISHED writing dot file");

        Ok(())
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

/// Macro to add an undirected edge to a graph, panicking on invalid input
///
/// edge!(g, 0, 1, 3) Adds the edge 0 -- 1 with weight 3
#[macro_export]
macro_rules! edge {
    ($g:expr, $a:expr, $b:expr, $weight:expr) => {
        $g.add_edge($a, $b, $weight)
            .expect("edge must be valid for this graph")
    };
}
