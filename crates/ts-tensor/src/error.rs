use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TensorError {
    #[error("shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch { expected: Vec<usize>, got: Vec<usize> },
    #[error("invalid axis {axis} for tensor with {ndim} dimensions")]
    InvalidAxis { axis: usize, ndim: usize },
    #[error("index {index} out of bounds for axis of size {size}")]
    IndexOutOfBounds { index: usize, size: usize },
}

pub type Result<T> = std::result::Result<T, TensorError>;
