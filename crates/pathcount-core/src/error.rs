//! Error types for Pathcount Core

use std::collections::TryReserveError;
use std::fmt;

use thiserror::Error;

/// Result type alias using Pathcount's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Which argument of an operation named the offending vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Destination,
    Start,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => write!(f, "Source"),
            Self::Destination => write!(f, "Destination"),
            Self::Start => write!(f, "Start"),
        }
    }
}

/// Pathcount error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("{endpoint} vertex {vertex} out of range (graph has {vertex_count} vertices)")]
    InvalidVertex {
        vertex: usize,
        endpoint: Endpoint,
        vertex_count: usize,
    },

    #[error("Allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn invalid_vertex(vertex: usize, endpoint: Endpoint, vertex_count: usize) -> Self {
        Self::InvalidVertex {
            vertex,
            endpoint,
            vertex_count,
        }
    }

    /// True for the recoverable out-of-range condition
    pub fn is_invalid_vertex(&self) -> bool {
        matches!(self, Self::InvalidVertex { .. })
    }
}

impl From<crate::limits::ValidationError> for Error {
    fn from(err: crate::limits::ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}
