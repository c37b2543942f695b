//! Enumeration of fixed-length simple paths by backtracking DFS

use serde::{Deserialize, Serialize};

use crate::error::{Endpoint, Result};
use crate::graph::{Graph, VertexId};

/// Receiver for completed paths.
///
/// `emit` is called once per qualifying path, at the moment it completes, with
/// the vertices in start-to-end order. The slice is only valid for the call.
pub trait PathSink {
    fn emit(&mut self, path: &[VertexId]);
}

impl<F> PathSink for F
where
    F: FnMut(&[VertexId]),
{
    fn emit(&mut self, path: &[VertexId]) {
        self(path)
    }
}

/// A simple path found by the enumerator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplePath {
    /// Vertices from the start vertex onward, pairwise distinct
    pub vertices: Vec<VertexId>,

    /// Number of edges (vertices - 1)
    pub length: usize,
}

impl SimplePath {
    fn from_slice(vertices: &[VertexId]) -> Self {
        Self {
            length: vertices.len().saturating_sub(1),
            vertices: vertices.to_vec(),
        }
    }
}

/// Sink that keeps every emitted path
#[derive(Debug, Default)]
pub struct PathCollector {
    paths: Vec<SimplePath>,
}

impl PathCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paths(&self) -> &[SimplePath] {
        &self.paths
    }

    pub fn into_paths(self) -> Vec<SimplePath> {
        self.paths
    }
}

impl PathSink for PathCollector {
    fn emit(&mut self, path: &[VertexId]) {
        self.paths.push(SimplePath::from_slice(path));
    }
}

/// Enumeration statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationSummary {
    pub start: VertexId,
    pub length: usize,
    pub paths_found: usize,
    /// Times a vertex was pushed onto the in-progress path
    pub vertices_entered: usize,
    /// Deepest edge count reached by the in-progress path
    pub max_depth_reached: usize,
}

/// Collected paths plus statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathReport {
    pub paths: Vec<SimplePath>,
    pub summary: EnumerationSummary,
}

/// Per-call search state. Never shared between calls.
struct SearchState<'a, S: ?Sized> {
    graph: &'a Graph,
    /// Path size (in vertices) that completes a path
    target_vertices: usize,
    on_path: Vec<bool>,
    path: Vec<VertexId>,
    sink: &'a mut S,
    summary: EnumerationSummary,
}

impl<'a, S: PathSink + ?Sized> SearchState<'a, S> {
    fn try_new(graph: &'a Graph, start: VertexId, length: usize, sink: &'a mut S) -> Result<Self> {
        let mut on_path = Vec::new();
        on_path.try_reserve_exact(graph.vertex_count())?;
        on_path.resize(graph.vertex_count(), false);

        let mut path = Vec::new();
        path.try_reserve_exact(length + 1)?;

        Ok(Self {
            graph,
            target_vertices: length + 1,
            on_path,
            path,
            sink,
            summary: EnumerationSummary {
                start,
                length,
                ..Default::default()
            },
        })
    }

    fn visit(&mut self, vertex: VertexId) {
        self.on_path[vertex] = true;
        self.path.push(vertex);
        self.summary.vertices_entered += 1;
        self.summary.max_depth_reached = self.summary.max_depth_reached.max(self.path.len() - 1);

        if self.path.len() == self.target_vertices {
            tracing::trace!("Path complete: {:?}", self.path);
            self.sink.emit(&self.path);
            self.summary.paths_found += 1;
        } else {
            let graph = self.graph;
            for next in graph.neighbors(vertex) {
                if !self.on_path[next] {
                    self.visit(next);
                }
            }
        }

        // backtrack
        self.path.pop();
        self.on_path[vertex] = false;
    }
}

/// Simple-path enumeration engine
pub struct PathEnumerator;

impl PathEnumerator {
    /// Emit every simple path of exactly `length` edges starting at `start`.
    ///
    /// Paths reach `sink` in depth-first discovery order, following
    /// [`Graph::neighbors`] order at each vertex. Returns the summary, whose
    /// `paths_found` is the total count. An out-of-range `start` is an
    /// `InvalidVertex` error and nothing is emitted.
    pub fn enumerate<S>(
        graph: &Graph,
        start: VertexId,
        length: usize,
        sink: &mut S,
    ) -> Result<EnumerationSummary>
    where
        S: PathSink + ?Sized,
    {
        graph.check_vertex(start, Endpoint::Start)?;

        tracing::debug!(
            "Enumerating simple paths: start={}, length={}, vertices={}",
            start,
            length,
            graph.vertex_count()
        );

        // A simple path has at most vertex_count - 1 edges
        if length >= graph.vertex_count() {
            tracing::debug!("Length {} cannot fit in {} vertices", length, graph.vertex_count());
            return Ok(EnumerationSummary {
                start,
                length,
                ..Default::default()
            });
        }

        let mut state = SearchState::try_new(graph, start, length, sink)?;
        state.visit(start);

        tracing::debug!(
            "Found {} paths, entered {} vertices",
            state.summary.paths_found,
            state.summary.vertices_entered
        );

        Ok(state.summary)
    }

    /// Enumerate and keep all paths
    pub fn collect(graph: &Graph, start: VertexId, length: usize) -> Result<PathReport> {
        let mut collector = PathCollector::new();
        let summary = Self::enumerate(graph, start, length, &mut collector)?;
        Ok(PathReport {
            paths: collector.into_paths(),
            summary,
        })
    }

    /// Enumerate and return only the count
    pub fn count(graph: &Graph, start: VertexId, length: usize) -> Result<usize> {
        let summary = Self::enumerate(graph, start, length, &mut |_: &[VertexId]| {})?;
        Ok(summary.paths_found)
    }
}
