/// A tensor shape, wrapping a vector of dimension sizes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    pub fn new(dims: Vec<usize>) -> Self {
        Shape { dims }
    }

    /// Logits layout used by the decoder: `[batch, 1, vocab_size]`.
    pub fn logits(batch: usize, vocab_size: usize) -> Self {
        Shape {
            dims: vec![batch, 1, vocab_size],
        }
    }

    /// Number of dimensions (rank).
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Total number of elements (product of all dimension sizes).
    pub fn numel(&self) -> usize {
        self.dims.iter().product()
    }

    /// Returns the size of dimension `i`, or `None` when `i >= ndim()`.
    pub fn dim(&self, i: usize) -> Option<usize> {
        self.dims.get(i).copied()
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Computes row-major contiguous strides for this shape.
    ///
    /// For a shape [d0, d1, d2], the strides are [d1*d2, d2, 1].
    pub fn strides(&self) -> Vec<usize> {
        let mut strides = vec![1usize; self.dims.len()];
        for i in (0..self.dims.len().saturating_sub(1)).rev() {
            strides[i] = strides[i + 1] * self.dims[i + 1];
        }
        strides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logits_shape() {
        let s = Shape::logits(4, 32000);
        assert_eq!(s.ndim(), 3);
        assert_eq!(s.numel(), 128000);
        assert_eq!(s.dim(0), Some(4));
        assert_eq!(s.dim(1), Some(1));
        assert_eq!(s.dim(2), Some(32000));
        assert_eq!(s.dim(3), None);
    }

    #[test]
    fn test_strides() {
        let s = Shape::new(vec![2, 1, 5]);
        assert_eq!(s.strides(), vec![5, 5, 1]);
    }

    #[test]
    fn test_scalar_shape() {
        let s = Shape::new(vec![]);
        assert_eq!(s.ndim(), 0);
        assert_eq!(s.numel(), 1); // product of empty = 1
        assert!(s.strides().is_empty());
    }

    #[test]
    fn test_zero_vocab_has_no_elements() {
        let s = Shape::logits(3, 0);
        assert_eq!(s.numel(), 0);
        assert_eq!(s.strides(), vec![0, 0, 1]);
    }
}
