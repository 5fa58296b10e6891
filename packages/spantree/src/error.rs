//! Input-boundary errors.
//!
//! The engine assumes a pre-validated graph (simple, symmetric, positive
//! weights); errors exist only where an input cannot even be constructed or
//! addressed.

use thiserror::Error;

use crate::core::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("adjacency matrix is not square: row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("vertex {vertex:?} is out of range for a graph of order {order}")]
    VertexOutOfRange { vertex: NodeId, order: usize },
}
