//! Error types for building and reporting on Huffman codes.

use thiserror::Error;

/// Error variants for Huffman code construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// There is nothing to count or to build a tree from.
    #[error("empty input")]
    EmptyInput,

    /// A minimum was requested from a heap holding no elements.
    #[error("no element in heap")]
    EmptyContainer,

    /// A symbol of the input has no entry in the code table.
    #[error("no code for symbol {0:?}")]
    MissingCode(String),
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
