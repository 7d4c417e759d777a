use std::ops::{Deref, DerefMut};

/// A vector of `Copy` values that keeps up to N elements inline
/// and moves them to the heap once that capacity is exceeded.
///
/// Meant for short sequences such as array extents and strides, so elements are
/// required to be `Copy + Default`: unused inline slots simply hold the default value.
#[derive(Clone)]
pub struct SmallVec<T: Copy + Default, const N: usize> {
    storage: Storage<T, N>,
}

#[derive(Clone)]
enum Storage<T, const N: usize> {
    Inline { items: [T; N], len: usize },
    Heap(Vec<T>),
}

impl<T: Copy + Default, const N: usize> SmallVec<T, N> {
    /// Creates a new empty SmallVec
    pub fn new() -> Self {
        Self {
            storage: Storage::Inline {
                items: [T::default(); N],
                len: 0,
            },
        }
    }

    /// Returns the number of elements in the SmallVec
    pub fn len(&self) -> usize {
        match &self.storage {
            Storage::Inline { len, .. } => *len,
            Storage::Heap(vec) => vec.len(),
        }
    }

    /// Returns true if the SmallVec is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds an element to the end of the SmallVec
    pub fn push(&mut self, value: T) {
        let spilled = match &mut self.storage {
            Storage::Inline { items, len } if *len < N => {
                items[*len] = value;
                *len += 1;
                None
            }
            Storage::Inline { items, len } => {
                let mut vec = Vec::with_capacity(N * 2 + 1);
                vec.extend_from_slice(&items[..*len]);
                vec.push(value);
                Some(vec)
            }
            Storage::Heap(vec) => {
                vec.push(value);
                None
            }
        };

        if let Some(vec) = spilled {
            self.storage = Storage::Heap(vec);
        }
    }

    /// Removes all elements and returns to inline storage
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl<T: Copy + Default, const N: usize> Default for SmallVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default, const N: usize> Deref for SmallVec<T, N> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        match &self.storage {
            Storage::Inline { items, len } => &items[..*len],
            Storage::Heap(vec) => vec.as_slice(),
        }
    }
}

impl<T: Copy + Default, const N: usize> DerefMut for SmallVec<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match &mut self.storage {
            Storage::Inline { items, len } => &mut items[..*len],
            Storage::Heap(vec) => vec.as_mut_slice(),
        }
    }
}

impl<T: Copy + Default + PartialEq, const N: usize> PartialEq for SmallVec<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.deref() == other.deref()
    }
}

impl<T: Copy + Default + Eq, const N: usize> Eq for SmallVec<T, N> {}

impl<T: Copy + Default + PartialEq, const N: usize, const M: usize> PartialEq<[T; M]>
    for SmallVec<T, N>
{
    fn eq(&self, other: &[T; M]) -> bool {
        self.deref() == other.as_slice()
    }
}

impl<T: Copy + Default + std::fmt::Debug, const N: usize> std::fmt::Debug for SmallVec<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[macro_export]
macro_rules! small_vec {
    ($($elem:expr),* $(,)?) => {
        {
            let mut sv = $crate::SmallVec::new();
            $(sv.push($elem);)*
            sv
        }
    };
    ($elem:expr; $n:expr) => {
        {
            let mut sv = $crate::SmallVec::new();
            for _ in 0..$n {
                sv.push($elem);
            }
            sv
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_index() {
        let mut sv: SmallVec<usize, 4> = SmallVec::new();
        assert!(sv.is_empty());

        sv.push(2);
        sv.push(3);
        sv.push(4);
        assert_eq!(sv.len(), 3);
        assert_eq!(sv[0], 2);
        assert_eq!(sv[2], 4);
        assert!(matches!(sv.storage, Storage::Inline { .. }));
    }

    #[test]
    fn test_spill_to_heap() {
        let mut sv: SmallVec<usize, 2> = small_vec![1, 2];
        assert!(matches!(sv.storage, Storage::Inline { .. }));

        sv.push(3);
        assert!(matches!(sv.storage, Storage::Heap(_)));
        assert_eq!(sv, [1, 2, 3]);

        sv.clear();
        assert!(matches!(sv.storage, Storage::Inline { .. }));
        assert!(sv.is_empty());
    }

    #[test]
    fn test_index_mut() {
        let mut sv: SmallVec<usize, 2> = small_vec![0; 3];
        sv[2] = 9;
        sv[0] = 1;

        assert_eq!(sv, [1, 0, 9]);
    }

    #[test]
    fn test_macro_repeat() {
        let sv: SmallVec<usize, 4> = small_vec![0; 3];
        assert_eq!(sv.len(), 3);
        assert!(sv.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_equality() {
        let a: SmallVec<usize, 4> = small_vec![2, 3, 4];
        let b: SmallVec<usize, 4> = small_vec![2, 3, 4];
        let c: SmallVec<usize, 4> = small_vec![2, 3];

        assert_eq!(a, b);
        assert_eq!(a.clone(), b);
        assert_ne!(a, c);
        assert_eq!(format!("{c:?}"), "[2, 3]");
    }
}
