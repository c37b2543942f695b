//! Undirected adjacency-list graph over a fixed vertex range

use serde::{Deserialize, Serialize};

use crate::error::{Endpoint, Error, Result};
use crate::limits;

/// Vertex identifier in `[0, vertex_count)`
pub type VertexId = usize;

/// Undirected graph with a fixed number of vertices.
///
/// Each vertex owns a list of neighbor ids. Insertion appends to the list and
/// [`Graph::neighbors`] walks it back to front, so neighbors come out most
/// recent first. Parallel edges are kept as inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<VertexId>>,
    /// Accepted edges in insertion order
    edges: Vec<(VertexId, VertexId)>,
}

/// One row of the adjacency dump
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjacency {
    pub vertex: VertexId,
    pub neighbors: Vec<VertexId>,
}

impl Graph {
    /// Create a graph with `vertex_count` isolated vertices
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edges: Vec::new(),
        }
    }

    /// Like [`Graph::new`], but reports allocation failure instead of aborting
    pub fn try_new(vertex_count: usize) -> Result<Self> {
        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(vertex_count)?;
        adjacency.resize_with(vertex_count, Vec::new);
        Ok(Self {
            adjacency,
            edges: Vec::new(),
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of successful `add_edge` calls
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex < self.adjacency.len()
    }

    pub(crate) fn check_vertex(&self, vertex: VertexId, endpoint: Endpoint) -> Result<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::invalid_vertex(vertex, endpoint, self.vertex_count()))
        }
    }

    /// Insert an undirected edge between `src` and `dest`.
    ///
    /// Both endpoints are validated, and both lists have room reserved, before
    /// either list is touched. On error the graph is unchanged.
    pub fn add_edge(&mut self, src: VertexId, dest: VertexId) -> Result<()> {
        self.check_vertex(src, Endpoint::Source)?;
        self.check_vertex(dest, Endpoint::Destination)?;

        // A self-loop lands in the same list twice
        let slots = if src == dest { 2 } else { 1 };
        self.edges.try_reserve(1)?;
        self.adjacency[src].try_reserve(slots)?;
        self.adjacency[dest].try_reserve(1)?;

        self.adjacency[src].push(dest);
        self.adjacency[dest].push(src);
        self.edges.push((src, dest));
        Ok(())
    }

    /// Neighbors of `vertex`, most recently inserted first.
    ///
    /// An out-of-range vertex has no neighbors.
    pub fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency
            .get(vertex)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
            .iter()
            .rev()
            .copied()
    }

    pub fn degree(&self, vertex: VertexId) -> usize {
        self.adjacency.get(vertex).map_or(0, Vec::len)
    }

    /// Adjacency dump for debugging, one entry per vertex in id order
    pub fn describe(&self) -> Vec<Adjacency> {
        (0..self.vertex_count())
            .map(|vertex| Adjacency {
                vertex,
                neighbors: self.neighbors(vertex).collect(),
            })
            .collect()
    }

    /// Edge list that rebuilds this graph, including neighbor order
    pub fn to_spec(&self) -> GraphSpec {
        GraphSpec {
            vertices: self.vertex_count(),
            edges: self.edges.clone(),
        }
    }
}

/// Serializable description of a graph: vertex count plus edge list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSpec {
    pub vertices: usize,
    #[serde(default)]
    pub edges: Vec<(VertexId, VertexId)>,
}

/// An edge `GraphSpec::build` left out, with the reason
#[derive(Debug)]
pub struct RejectedEdge {
    pub src: VertexId,
    pub dest: VertexId,
    pub error: Error,
}

/// Graph built leniently, with the edges that were skipped
#[derive(Debug)]
pub struct BuiltGraph {
    pub graph: Graph,
    pub rejected: Vec<RejectedEdge>,
}

impl GraphSpec {
    pub fn new(vertices: usize) -> Self {
        Self {
            vertices,
            edges: Vec::new(),
        }
    }

    pub fn with_edge(mut self, src: VertexId, dest: VertexId) -> Self {
        self.edges.push((src, dest));
        self
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    fn validate(&self) -> Result<()> {
        limits::validate_vertex_count(self.vertices)?;
        limits::validate_edge_count(self.edges.len())?;
        Ok(())
    }

    /// Build the graph, skipping out-of-range edges.
    ///
    /// Skipped edges are returned in [`BuiltGraph::rejected`] for the caller
    /// to report.
    pub fn build(&self) -> Result<BuiltGraph> {
        self.validate()?;
        let mut graph = Graph::try_new(self.vertices)?;
        let mut rejected = Vec::new();

        for &(src, dest) in &self.edges {
            match graph.add_edge(src, dest) {
                Ok(()) => {}
                Err(error) if error.is_invalid_vertex() => {
                    tracing::debug!("Skipping edge ({}, {}): {}", src, dest, error);
                    rejected.push(RejectedEdge { src, dest, error });
                }
                Err(err) => return Err(err),
            }
        }

        tracing::debug!(
            "Built graph with {} vertices, {} edges ({} rejected)",
            graph.vertex_count(),
            graph.edge_count(),
            rejected.len()
        );

        Ok(BuiltGraph { graph, rejected })
    }

    /// Build the graph, failing on the first out-of-range edge
    pub fn build_strict(&self) -> Result<Graph> {
        self.validate()?;
        let mut graph = Graph::try_new(self.vertices)?;
        for &(src, dest) in &self.edges {
            graph.add_edge(src, dest)?;
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_graph_is_empty() {
        let graph = Graph::new(4);
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 0);
        assert!((0..4).all(|v| graph.neighbors(v).next().is_none()));

        let empty = Graph::new(0);
        assert_eq!(empty.vertex_count(), 0);
        assert!(!empty.contains_vertex(0));
    }

    #[test]
    fn test_try_new() {
        let graph = Graph::try_new(3).unwrap();
        assert_eq!(graph, Graph::new(3));
    }

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 2).unwrap();

        assert!(graph.neighbors(0).any(|v| v == 2));
        assert!(graph.neighbors(2).any(|v| v == 0));
        assert_eq!(graph.degree(1), 0);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_neighbors_most_recent_first() {
        let mut graph = Graph::new(4);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 2).unwrap();
        graph.add_edge(3, 0).unwrap();

        assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_out_of_range_edge_rejected() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1).unwrap();
        let before = graph.clone();

        let err = graph.add_edge(3, 1).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidVertex {
                vertex: 3,
                endpoint: Endpoint::Source,
                vertex_count: 3
            }
        ));

        let err = graph.add_edge(1, 7).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidVertex {
                vertex: 7,
                endpoint: Endpoint::Destination,
                ..
            }
        ));

        assert_eq!(graph, before);
    }

    #[test]
    fn test_parallel_edges_kept() {
        let mut graph = Graph::new(2);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 0).unwrap();

        assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![1, 1]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_neighbors_of_unknown_vertex() {
        let graph = Graph::new(2);
        assert_eq!(graph.neighbors(10).count(), 0);
        assert_eq!(graph.degree(10), 0);
    }

    #[test]
    fn test_describe() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 2).unwrap();

        let dump = graph.describe();
        assert_eq!(dump.len(), 3);
        assert_eq!(dump[0].neighbors, vec![2, 1]);
        assert_eq!(dump[1].neighbors, vec![0]);
        assert_eq!(dump[2].neighbors, vec![0]);
    }

    #[test]
    fn test_spec_round_trip_preserves_order() {
        let spec = GraphSpec::new(4)
            .with_edge(2, 1)
            .with_edge(0, 1)
            .with_edge(3, 3)
            .with_edge(1, 3);
        let graph = spec.build_strict().unwrap();
        let rebuilt = graph.to_spec().build_strict().unwrap();

        assert_eq!(rebuilt.describe(), graph.describe());
        assert_eq!(rebuilt.edge_count(), 4);
    }

    #[test]
    fn test_lenient_build_skips_bad_edges() {
        let spec = GraphSpec::new(3)
            .with_edge(0, 1)
            .with_edge(0, 9)
            .with_edge(1, 2);
        let built = spec.build().unwrap();

        assert_eq!(built.graph.edge_count(), 2);
        assert_eq!(built.rejected.len(), 1);
        let rejected = &built.rejected[0];
        assert_eq!((rejected.src, rejected.dest), (0, 9));
        assert!(matches!(
            rejected.error,
            Error::InvalidVertex {
                vertex: 9,
                endpoint: Endpoint::Destination,
                ..
            }
        ));

        assert!(spec.build_strict().is_err());
    }

    #[test]
    fn test_spec_from_json_and_toml() {
        let json = r#"{ "vertices": 3, "edges": [[0, 1], [1, 2]] }"#;
        let spec = GraphSpec::from_json_str(json).unwrap();
        assert_eq!(spec, GraphSpec::new(3).with_edge(0, 1).with_edge(1, 2));

        let toml = "vertices = 3\nedges = [[0, 1], [1, 2]]\n";
        assert_eq!(GraphSpec::from_toml_str(toml).unwrap(), spec);

        assert!(GraphSpec::from_json_str(r#"{ "edges": [] }"#).is_err());
    }

    #[test]
    fn test_spec_limits() {
        let spec = GraphSpec::new(limits::MAX_VERTEX_COUNT + 1);
        assert!(matches!(spec.build(), Err(Error::Validation(_))));
    }
}
