//! Library crate for flat_array
//!

use small_vec::{SmallVec, small_vec};

mod array;
mod convert;
mod error;
mod misc;
mod translator;
mod types;

pub use crate::error::ArrayError;
pub use crate::translator::IndexTranslator;
pub use crate::types::*;

pub type Result<T> = std::result::Result<T, error::ArrayError>;

/// Represents a multi-dimensional array with generic element type T whose rank is chosen at runtime.
///
/// Elements live in a single contiguous buffer in row-major order. Every indexed access goes through
/// an [`IndexTranslator`] which maps the per-dimension indices to an offset into that buffer. Up to N
/// dimensions are described without heap allocation.
///
/// An array is either unallocated (rank 0, no elements) or allocated with a fixed shape. Allocating
/// again replaces the whole buffer: previous contents are never carried over.
///
/// Arrays move by default; use `clone` to get an independent deep copy.
#[derive(Clone)]
pub struct Array<T, const N: usize = 4> {
    data: Vec<T>,
    translator: IndexTranslator<N>,
}
