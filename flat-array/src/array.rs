use super::*;

impl<T, const N: usize> Array<T, N> {
    /// Creates an unallocated array.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            translator: IndexTranslator::empty(),
        }
    }

    /// Creates an array of the given shape filled with default values.
    pub fn with_shape(shape: &[usize]) -> Result<Self>
    where
        T: Default,
    {
        let mut array = Self::new();
        array.allocate(shape)?;
        Ok(array)
    }

    /// Replaces the contents with a default-filled buffer of the given shape.
    ///
    /// The old buffer is released before the new shape is validated, so on error the
    /// array is left unallocated rather than in its previous state.
    pub fn allocate(&mut self, shape: &[usize]) -> Result<()>
    where
        T: Default,
    {
        self.deallocate();

        let translator = IndexTranslator::new(shape)?;
        let mut data = Vec::with_capacity(translator.size());
        data.resize_with(translator.size(), T::default);

        self.data = data;
        self.translator = translator;
        Ok(())
    }

    /// Drops all elements and returns to the unallocated state.
    pub fn deallocate(&mut self) {
        self.data = Vec::new();
        self.translator.reset();
    }

    pub fn is_allocated(&self) -> bool {
        !self.data.is_empty()
    }

    pub fn rank(&self) -> usize {
        self.translator.rank()
    }

    // Get shape
    pub fn shape(&self) -> SmallVec<usize, N> {
        self.translator.shape()
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // Get element at multi-dimensional index
    pub fn get(&self, indices: &[usize]) -> Result<&T> {
        let offset = self.translator.checked_composite_index(indices)?;
        Ok(&self.data[offset])
    }

    pub fn get_mut(&mut self, indices: &[usize]) -> Result<&mut T> {
        let offset = self.translator.checked_composite_index(indices)?;
        Ok(&mut self.data[offset])
    }

    /// Overwrites the element at the given multi-dimensional index.
    pub fn set(&mut self, indices: &[usize], value: T) -> Result<()> {
        *self.get_mut(indices)? = value;
        Ok(())
    }

    /// Returns an iterator over the elements in row-major order.
    pub fn elements(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T, const N: usize> Default for Array<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
