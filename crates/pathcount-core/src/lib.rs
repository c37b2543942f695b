//! Pathcount Core - Simple-path enumeration over undirected graphs
//!
//! This crate provides the adjacency-list graph store and the backtracking
//! enumerator that reports every simple path of a given edge length from a
//! start vertex.

pub mod error;
pub mod fixture;
pub mod graph;
pub mod label;
pub mod limits;
pub mod paths;

pub use error::{Endpoint, Error, Result};
pub use graph::{Adjacency, BuiltGraph, Graph, GraphSpec, RejectedEdge, VertexId};
pub use label::{letter_label, parse_vertex, LabelStyle};
pub use paths::{EnumerationSummary, PathCollector, PathEnumerator, PathReport, PathSink, SimplePath};
