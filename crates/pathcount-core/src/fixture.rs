//! Demo dataset: a partially connected 3x3 mesh labeled A..I
//!
//! ```text
//! A - B - C
//! | X | X |
//! D - E - F
//! | X | X |
//! G - H - I
//! ```
//!
//! Not every diagonal is present. The exact edge set is [`DEMO_EDGES`].

use crate::graph::{Graph, GraphSpec, VertexId};

/// Vertices in the demo mesh
pub const DEMO_VERTICES: usize = 9;

/// Demo start vertex (A)
pub const DEMO_START: VertexId = 0;

/// Demo path length in edges
pub const DEMO_LENGTH: usize = 3;

/// Demo edges, in insertion order
pub const DEMO_EDGES: [(VertexId, VertexId); 20] = [
    (0, 1),
    (0, 3),
    (0, 4),
    (1, 2),
    (1, 3),
    (1, 4),
    (1, 5),
    (2, 4),
    (2, 5),
    (3, 4),
    (3, 6),
    (3, 7),
    (4, 5),
    (4, 6),
    (4, 7),
    (4, 8),
    (5, 7),
    (5, 8),
    (6, 7),
    (7, 8),
];

pub fn demo_spec() -> GraphSpec {
    GraphSpec {
        vertices: DEMO_VERTICES,
        edges: DEMO_EDGES.to_vec(),
    }
}

/// Build the demo mesh
pub fn demo_mesh() -> Graph {
    let mut graph = Graph::new(DEMO_VERTICES);
    for (src, dest) in DEMO_EDGES {
        let added = graph.add_edge(src, dest);
        debug_assert!(added.is_ok(), "demo edge ({}, {}) out of range", src, dest);
    }
    graph
}
