use std::borrow::Cow;

use half::f16;

use crate::error::{Result, TensorError};
use crate::shape::Shape;
use crate::storage::CpuStorage;

/// A tensor backed by CPU storage.
///
/// Holds contiguous, row-major data with an associated shape. The sampler
/// only ever reads it, one leading-axis row at a time.
#[derive(Debug, Clone)]
pub struct Tensor {
    storage: CpuStorage,
    shape: Shape,
}

impl Tensor {
    /// Create a new tensor from f32 data and a shape.
    ///
    /// # Errors
    /// Returns `ShapeMismatch` if `data.len() != shape.numel()`.
    pub fn new(data: Vec<f32>, shape: Shape) -> Result<Self> {
        Self::from_storage(CpuStorage::from_f32_vec(data), shape)
    }

    /// Create a new half-precision tensor.
    pub fn from_f16(data: Vec<f16>, shape: Shape) -> Result<Self> {
        Self::from_storage(CpuStorage::from_f16_vec(data), shape)
    }

    fn from_storage(storage: CpuStorage, shape: Shape) -> Result<Self> {
        if storage.len() != shape.numel() {
            return Err(TensorError::ShapeMismatch {
                expected: shape.dims().to_vec(),
                got: vec![storage.len()],
            });
        }
        Ok(Tensor { storage, shape })
    }

    /// Stack equally sized logits rows into a `[batch, 1, vocab_size]` tensor.
    pub fn from_rows(rows: &[Vec<f32>]) -> Result<Self> {
        let vocab_size = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * vocab_size);
        for row in rows {
            if row.len() != vocab_size {
                return Err(TensorError::ShapeMismatch {
                    expected: vec![vocab_size],
                    got: vec![row.len()],
                });
            }
            data.extend_from_slice(row);
        }
        Self::new(data, Shape::logits(rows.len(), vocab_size))
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Reads entry `index` along axis 0 as a contiguous f32 sequence of
    /// `numel / dim(0)` values.
    pub fn row(&self, index: usize) -> Result<Cow<'_, [f32]>> {
        let rows = self.shape.dim(0).ok_or(TensorError::InvalidAxis {
            axis: 0,
            ndim: self.shape.ndim(),
        })?;
        if index >= rows {
            return Err(TensorError::IndexOutOfBounds { index, size: rows });
        }
        let stride = self.shape.strides()[0];
        let start = index * stride;
        self.storage.read_f32(start..start + stride)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_new_tensor() {
        let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], Shape::logits(2, 3)).unwrap();
        assert_eq!(t.shape().dims(), &[2, 1, 3]);
        assert_eq!(t.storage.len(), 6);
    }

    #[test]
    fn test_new_shape_mismatch() {
        let err = Tensor::new(vec![1.0, 2.0], Shape::new(vec![3])).unwrap_err();
        assert_eq!(
            err,
            TensorError::ShapeMismatch {
                expected: vec![3],
                got: vec![2]
            }
        );
    }

    #[test]
    fn test_row_access() {
        let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], Shape::logits(2, 3)).unwrap();
        assert_eq!(&*t.row(0).unwrap(), &[1.0, 2.0, 3.0]);
        assert_eq!(&*t.row(1).unwrap(), &[4.0, 5.0, 6.0]);
        assert_eq!(
            t.row(2).unwrap_err(),
            TensorError::IndexOutOfBounds { index: 2, size: 2 }
        );
    }

    #[test]
    fn test_row_of_scalar_is_invalid_axis() {
        let t = Tensor::new(vec![1.0], Shape::new(vec![])).unwrap();
        assert_eq!(
            t.row(0).unwrap_err(),
            TensorError::InvalidAxis { axis: 0, ndim: 0 }
        );
    }

    #[test]
    fn test_f16_row() {
        let data: Vec<f16> = [0.25f32, 1.5, -3.0, 8.0]
            .iter()
            .map(|&x| f16::from_f32(x))
            .collect();
        let t = Tensor::from_f16(data, Shape::logits(2, 2)).unwrap();
        let row = t.row(1).unwrap();
        assert_abs_diff_eq!(row[0], -3.0);
        assert_abs_diff_eq!(row[1], 8.0);
    }

    #[test]
    fn test_from_rows() {
        let t = Tensor::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        assert_eq!(t.shape().dims(), &[3, 1, 2]);
        assert_eq!(&*t.row(2).unwrap(), &[5.0, 6.0]);

        assert!(Tensor::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_err());
    }
}
