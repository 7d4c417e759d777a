use super::*;

impl<T, const N: usize> Array<T, N> {
    /// Creates a rank-1 array holding a copy of the given elements.
    /// An empty slice produces an unallocated array.
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from(values.to_vec())
    }

    /// Returns a copy of the elements of a rank-1 array.
    pub fn to_vec(&self) -> Result<Vec<T>>
    where
        T: Clone,
    {
        self.check_vector()?;
        Ok(self.data.clone())
    }

    /// Consumes a rank-1 array and returns its buffer.
    pub fn into_vec(self) -> Result<Vec<T>> {
        self.check_vector()?;
        Ok(self.data)
    }

    fn check_vector(&self) -> Result<()> {
        if self.rank() != 1 {
            return Err(ArrayError::RankMismatch(format!(
                "Flat conversion requires a rank 1 array, but got rank {}",
                self.rank()
            )));
        }
        Ok(())
    }
}

impl<T, const N: usize> From<Vec<T>> for Array<T, N> {
    fn from(data: Vec<T>) -> Self {
        if data.is_empty() {
            return Self::new();
        }

        let translator = IndexTranslator::linear(data.len());
        Self { data, translator }
    }
}

impl<T, const N: usize, const M: usize> From<[T; M]> for Array<T, N> {
    fn from(values: [T; M]) -> Self {
        Self::from(Vec::from(values))
    }
}

impl<T, const N: usize> TryFrom<Array<T, N>> for Vec<T> {
    type Error = ArrayError;

    fn try_from(array: Array<T, N>) -> Result<Self> {
        array.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec() -> Result<()> {
        let array = Array::<i32>::from(vec![1, 2, 3]);

        assert_eq!(array.rank(), 1);
        assert_eq!(array.shape(), [3]);
        assert_eq!(*array.get(&[2])?, 3);
        assert_eq!(array.to_vec()?, vec![1, 2, 3]);

        Ok(())
    }

    #[test]
    fn test_from_literal() -> Result<()> {
        let array: Array<&str> = Array::from(["a", "b"]);

        assert_eq!(array.rank(), 1);
        assert_eq!(Vec::<&str>::try_from(array)?, vec!["a", "b"]);

        Ok(())
    }

    #[test]
    fn test_from_slice_copies() -> Result<()> {
        let values = vec![1.5, 2.5];
        let mut array = Array::<f64>::from_slice(&values);
        array.set(&[0], 0.5)?;

        assert_eq!(values, vec![1.5, 2.5]);
        assert_eq!(array.into_vec()?, vec![0.5, 2.5]);

        Ok(())
    }

    #[test]
    fn test_from_empty_is_unallocated() {
        let array = Array::<i32>::from(Vec::new());

        assert!(!array.is_allocated());
        assert!(matches!(array.to_vec(), Err(ArrayError::RankMismatch(_))));
    }

    #[test]
    fn test_to_vec_requires_rank_one() -> Result<()> {
        let array = Array::<i32>::with_shape(&[2, 2])?;

        assert!(matches!(array.to_vec(), Err(ArrayError::RankMismatch(_))));
        assert!(matches!(
            Vec::<i32>::try_from(array),
            Err(ArrayError::RankMismatch(_))
        ));

        Ok(())
    }
}
