use super::*;

/// Translates between a multi-dimensional index and an offset into a flat row-major buffer.
///
/// Only the total size and the strides of all but the last dimension are stored: the last
/// dimension always has stride 1, and the shape itself can be recovered from these values.
/// A translator with size 0 is unallocated and has rank 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndexTranslator<const N: usize = 4> {
    size: usize,
    strides: SmallVec<usize, N>,
}

impl<const N: usize> IndexTranslator<N> {
    /// Creates a translator for the given shape.
    /// An empty shape produces the unallocated translator.
    /// Returns an error if any extent is zero or the total size does not fit into `usize`.
    pub fn new(shape: &[usize]) -> Result<Self> {
        let Some((&last, leading)) = shape.split_last() else {
            return Ok(Self::empty());
        };

        if shape.contains(&0) {
            return Err(ArrayError::InvalidShape(format!(
                "Shape {shape:?} has a zero-sized dimension"
            )));
        }

        let mut size = last;
        let mut strides: SmallVec<usize, N> = small_vec![0; leading.len()];
        for (dim, &extent) in leading.iter().enumerate().rev() {
            strides[dim] = size;
            size = size.checked_mul(extent).ok_or_else(|| {
                ArrayError::InvalidShape(format!("Shape {shape:?} overflows the addressable size"))
            })?;
        }

        Ok(Self { size, strides })
    }

    /// Returns the unallocated translator.
    pub fn empty() -> Self {
        Self {
            size: 0,
            strides: SmallVec::new(),
        }
    }

    /// Rank-1 translator over `len` elements.
    pub(crate) fn linear(len: usize) -> Self {
        debug_assert!(len > 0, "linear translator needs at least one element");
        Self {
            size: len,
            strides: SmallVec::new(),
        }
    }

    /// Clears the translator back to the unallocated state.
    pub fn reset(&mut self) {
        self.size = 0;
        self.strides.clear();
    }

    pub fn rank(&self) -> usize {
        if self.size == 0 { 0 } else { self.strides.len() + 1 }
    }

    /// Total number of addressable elements.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Strides of all dimensions except the last one.
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Recovers the extents of every dimension.
    pub fn shape(&self) -> SmallVec<usize, N> {
        let mut shape = SmallVec::new();
        if self.size == 0 {
            return shape;
        }

        let mut remaining = self.size;
        for &stride in self.strides.iter() {
            let extent = remaining / stride;
            shape.push(extent);
            remaining /= extent;
        }
        shape.push(remaining);

        shape
    }

    /// Converts a flat offset back into per-dimension indices.
    ///
    /// The offset must be below [`IndexTranslator::size`]. The result for larger offsets is
    /// unspecified, and debug builds assert on them.
    pub fn indices(&self, offset: usize) -> SmallVec<usize, N> {
        let mut indices = SmallVec::new();
        if self.size == 0 {
            return indices;
        }
        debug_assert!(offset < self.size, "offset {offset} exceeds size {}", self.size);

        let mut remaining = offset;
        for &stride in self.strides.iter() {
            if remaining >= stride {
                let index = remaining / stride;
                remaining -= index * stride;
                indices.push(index);
            } else {
                indices.push(0);
            }
        }
        indices.push(remaining);

        indices
    }

    /// Converts per-dimension indices into a flat offset.
    ///
    /// Only the number of indices is validated: an index outside of its dimension yields
    /// the offset of some other element. See [`IndexTranslator::checked_composite_index`].
    pub fn composite_index(&self, indices: &[usize]) -> Result<usize> {
        self.check_rank(indices)?;

        let Some((&last, leading)) = indices.split_last() else {
            return Ok(0);
        };

        Ok(leading
            .iter()
            .zip(self.strides.iter())
            .fold(last, |offset, (&index, &stride)| {
                offset.wrapping_add(index.wrapping_mul(stride))
            }))
    }

    /// Like [`IndexTranslator::composite_index`], but also requires every index to be
    /// within its dimension.
    pub fn checked_composite_index(&self, indices: &[usize]) -> Result<usize> {
        self.check_rank(indices)?;

        if self.size == 0 {
            return Err(ArrayError::IndexOutOfBounds(
                "Cannot index an unallocated array".to_string(),
            ));
        }

        for (dim, (&index, &extent)) in indices.iter().zip(self.shape().iter()).enumerate() {
            if index >= extent {
                return Err(ArrayError::IndexOutOfBounds(format!(
                    "Index {index} out of bounds for dimension {dim} with size {extent}"
                )));
            }
        }

        self.composite_index(indices)
    }

    fn check_rank(&self, indices: &[usize]) -> Result<()> {
        if indices.len() != self.rank() {
            return Err(ArrayError::RankMismatch(format!(
                "Index dimension mismatch: {} != {}",
                indices.len(),
                self.rank()
            )));
        }
        Ok(())
    }
}
