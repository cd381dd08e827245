//! Error types for instance construction.
//!
//! All variants describe configuration errors: problems that make an
//! instance unpackable by construction and must be reported before any
//! search starts. Invariant violations inside the search are handled at
//! the generation level by the runner and never surface as errors.

use std::fmt;

/// Error constructing a problem instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The bin capacity is zero; no item can ever be placed.
    ZeroCapacity,

    /// An item has size zero. Item sizes must be positive.
    ZeroItemSize {
        /// Index of the offending item.
        item: usize,
    },

    /// An item is larger than the bin capacity and can never be packed.
    ItemExceedsCapacity {
        /// Index of the offending item.
        item: usize,
        /// Size of the offending item.
        size: u32,
        /// The bin capacity it exceeds.
        capacity: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ZeroCapacity => write!(f, "bin capacity must be positive"),
            Error::ZeroItemSize { item } => {
                write!(f, "item {item} has size 0; item sizes must be positive")
            }
            Error::ItemExceedsCapacity {
                item,
                size,
                capacity,
            } => write!(
                f,
                "item {item} has size {size}, exceeding bin capacity {capacity}"
            ),
        }
    }
}

impl std::error::Error for Error {}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
