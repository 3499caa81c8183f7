use std::borrow::Cow;
use std::ops::Range;

use half::f16;

use crate::error::{Result, TensorError};

/// CPU-side tensor storage.
#[derive(Debug, Clone)]
pub enum CpuStorage {
    F32(Vec<f32>),
    F16(Vec<f16>),
}

impl CpuStorage {
    /// Number of elements in this storage.
    pub fn len(&self) -> usize {
        match self {
            CpuStorage::F32(v) => v.len(),
            CpuStorage::F16(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads `range` as f32 values. F32 storage is borrowed; F16 storage is
    /// widened into an owned buffer.
    ///
    /// # Errors
    /// Returns an error if `range` lies outside the storage.
    pub fn read_f32(&self, range: Range<usize>) -> Result<Cow<'_, [f32]>> {
        if range.start > range.end || range.end > self.len() {
            return Err(TensorError::IndexOutOfBounds {
                index: range.end,
                size: self.len(),
            });
        }
        match self {
            CpuStorage::F32(v) => Ok(Cow::Borrowed(&v[range])),
            CpuStorage::F16(v) => Ok(Cow::Owned(v[range].iter().map(|x| x.to_f32()).collect())),
        }
    }

    pub fn from_f32_vec(data: Vec<f32>) -> Self {
        CpuStorage::F32(data)
    }

    pub fn from_f16_vec(data: Vec<f16>) -> Self {
        CpuStorage::F16(data)
    }
}
