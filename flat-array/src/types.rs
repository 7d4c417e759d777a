//! Aliases for arrays of common element kinds.

use super::Array;

pub type BoolArray = Array<bool>;
pub type IntArray = Array<i64>;
pub type FloatArray = Array<f64>;
pub type StringArray = Array<String>;
