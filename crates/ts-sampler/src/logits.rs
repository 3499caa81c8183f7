use std::borrow::Cow;

use ts_tensor::Tensor;

use crate::error::{Result, SamplerError};

/// Read-only view of a `[batch, 1, vocab_size]` logits buffer.
pub trait Logits {
    /// Dimension sizes of the buffer.
    fn dims(&self) -> &[usize];

    /// Logits of batch element `batch` as one contiguous f32 row.
    fn row(&self, batch: usize) -> ts_tensor::Result<Cow<'_, [f32]>>;
}

impl Logits for Tensor {
    fn dims(&self) -> &[usize] {
        self.shape().dims()
    }

    fn row(&self, batch: usize) -> ts_tensor::Result<Cow<'_, [f32]>> {
        Tensor::row(self, batch)
    }
}

/// Splits logits dimensions into `(batch, vocab_size)`.
pub(crate) fn batch_and_vocab(dims: &[usize]) -> Result<(usize, usize)> {
    match *dims {
        [_, 1, 0] => Err(SamplerError::invalid_argument("vocab_size must be at least 1")),
        [batch, 1, vocab_size] => Ok((batch, vocab_size)),
        _ => Err(SamplerError::invalid_argument(format!(
            "expected logits of shape [batch, 1, vocab_size], got {dims:?}"
        ))),
    }
}
