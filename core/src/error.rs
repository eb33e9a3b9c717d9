//! Error types for synset-core.

use thiserror::Error;

use crate::graph::VertexId;

/// Errors produced by graph construction and ancestor queries.
///
/// Every variant is a caller error: the engine stays usable after any of
/// them, and nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaError {
    /// A vertex id outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        vertex: VertexId,
        vertex_count: usize,
    },

    /// A vertex subset that must be non-empty was empty.
    #[error("vertex subset {argument} is empty")]
    EmptySubset { argument: &'static str },
}
