use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    IndexOutOfBounds(String),
    InvalidShape(String),
    RankMismatch(String),
}

impl std::error::Error for ArrayError {}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayError::IndexOutOfBounds(msg) => write!(f, "Index Out of Bounds: {}", msg),
            ArrayError::InvalidShape(msg) => write!(f, "Invalid Shape: {}", msg),
            ArrayError::RankMismatch(msg) => write!(f, "Rank Mismatch: {}", msg),
        }
    }
}
