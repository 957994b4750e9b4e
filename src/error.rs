//! Error types for huffcodes.

use std::fmt;

/// Result type for huffcodes operations.
pub type Result<T> = std::result::Result<T, HuffError>;

/// Errors that can occur while counting, building, or looking up codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffError {
    /// No symbols were supplied, so there is no tree to build.
    EmptyInput,
    /// Internal fault during tree construction. Should not happen.
    MalformedTree {
        /// Description
        reason: &'static str,
    },
    /// The same symbol was supplied in more than one frequency entry.
    DuplicateSymbol {
        /// Debug rendering of the symbol
        symbol: String,
    },
    /// Symbol is not covered by the code mapping or table.
    SymbolNotFound {
        /// Debug rendering of the symbol
        symbol: String,
    },
    /// Summed weights or weighted code lengths no longer fit in a u64.
    WeightOverflow,
    /// Bit-string is not a sequence of codes from the mapping.
    InvalidCode {
        /// Offset of the first bit that could not be decoded
        position: usize,
    },
}

impl fmt::Display for HuffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HuffError::EmptyInput => write!(f, "no symbols supplied"),
            HuffError::MalformedTree { reason } => write!(f, "malformed huffman tree: {}", reason),
            HuffError::DuplicateSymbol { symbol } => {
                write!(f, "symbol {} appears in more than one entry", symbol)
            }
            HuffError::WeightOverflow => write!(f, "symbol weights overflow a 64 bit count"),
            HuffError::SymbolNotFound { symbol } => write!(f, "symbol {} has no code", symbol),
            HuffError::InvalidCode { position } => {
                write!(f, "invalid code starting at bit {}", position)
            }
        }
    }
}

impl std::error::Error for HuffError {}

impl From<HuffError> for std::io::Error {
    fn from(e: HuffError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    }
}
