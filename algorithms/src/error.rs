use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgoError {
    #[error("input is empty")]
    EmptyInput,
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("vertex {vertex} out of range for graph with {count} vertices")]
    VertexOutOfRange { vertex: usize, count: usize },
    #[error("graph contains a negative-weight cycle")]
    NegativeCycle,
    #[error("graph contains a cycle")]
    CycleDetected,
    #[error("graph is disconnected")]
    Disconnected,
    #[error("capacity {capacity} exceeded")]
    CapacityExceeded { capacity: usize },
    #[error("value range {range} exceeds limit {limit}")]
    RangeTooLarge { range: u64, limit: u64 },
    #[error("input contains NaN")]
    NotANumber,
    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, AlgoError>;

/// Returns `IndexOutOfRange` unless `index < len`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(AlgoError::IndexOutOfRange { index, len })
    }
}

/// Returns `VertexOutOfRange` unless `vertex < count`.
pub(crate) fn check_vertex(vertex: usize, count: usize) -> Result<()> {
    if vertex < count {
        Ok(())
    } else {
        Err(AlgoError::VertexOutOfRange { vertex, count })
    }
}
