//! Input validation limits for loaded graphs and path requests

/// Maximum vertices in a loaded graph description (4096)
pub const MAX_VERTEX_COUNT: usize = 4096;

/// Maximum edges in a loaded graph description (65536)
pub const MAX_EDGE_COUNT: usize = 64 * 1024;

/// Maximum requested path length in edges (64)
pub const MAX_PATH_LENGTH: usize = 64;

/// Validation error type
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    TooManyVertices { count: usize, max: usize },
    TooManyEdges { count: usize, max: usize },
    PathLengthTooLarge { length: usize, max: usize },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooManyVertices { count, max } => {
                write!(f, "Too many vertices: {} (max {})", count, max)
            }
            Self::TooManyEdges { count, max } => {
                write!(f, "Too many edges: {} (max {})", count, max)
            }
            Self::PathLengthTooLarge { length, max } => {
                write!(f, "Path length too large: {} (max {})", length, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate vertex count of a graph description
pub fn validate_vertex_count(count: usize) -> Result<(), ValidationError> {
    if count > MAX_VERTEX_COUNT {
        return Err(ValidationError::TooManyVertices {
            count,
            max: MAX_VERTEX_COUNT,
        });
    }
    Ok(())
}

/// Validate edge count of a graph description
pub fn validate_edge_count(count: usize) -> Result<(), ValidationError> {
    if count > MAX_EDGE_COUNT {
        return Err(ValidationError::TooManyEdges {
            count,
            max: MAX_EDGE_COUNT,
        });
    }
    Ok(())
}

/// Validate a requested path length
pub fn validate_path_length(length: usize) -> Result<(), ValidationError> {
    if length > MAX_PATH_LENGTH {
        return Err(ValidationError::PathLengthTooLarge {
            length,
            max: MAX_PATH_LENGTH,
        });
    }
    Ok(())
}
