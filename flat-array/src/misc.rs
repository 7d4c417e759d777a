use super::*;
use std::fmt;

impl<T: PartialEq, const N: usize> PartialEq for Array<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.translator == other.translator && self.data == other.data
    }
}

impl<T: Eq, const N: usize> Eq for Array<T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Array<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("shape", &self.shape())
            .field("elements", &self.data)
            .finish()
    }
}
