//! `ts-tensor` - Logits container for token-sampling.
//!
//! This crate provides:
//! - A `Tensor` type backed by CPU storage (F32 or F16)
//! - Shape utilities
//! - Row access along the leading (batch) axis as contiguous f32 data

pub mod error;
pub mod shape;
pub mod storage;
pub mod tensor;

// Re-export primary types at the crate root for convenience.
pub use error::{Result, TensorError};
pub use shape::Shape;
pub use storage::CpuStorage;
pub use tensor::Tensor;
