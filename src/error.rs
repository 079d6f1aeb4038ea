//! Error type shared by the tree and optimizer modules.

use thiserror::Error;

/// Errors raised by tree addressing and optimizer configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A position names a child index that does not exist.
    ///
    /// `depth` is the offset into the position where the walk failed,
    /// `index` the requested child and `len` the number of children
    /// actually present at that node.
    #[error("position {position} out of bounds at depth {depth}: child {index} of {len}")]
    OutOfBounds {
        position: String,
        depth: usize,
        index: usize,
        len: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
