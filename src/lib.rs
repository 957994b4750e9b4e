//! Huffman prefix code construction.
//!
//! Builds variable length prefix codes from any stream of hashable symbols, and carries the
//! standard JPEG DC/AC huffman tables for callers that need the fixed codes instead.
//!
//! Basic usage:
//!
//! ```
//! use huffcodes::huffman_coding::huffman::huffman_codes;
//!
//! let codes = huffman_codes("AAAABBC".chars()).unwrap();
//! assert!(codes.is_prefix_free());
//! let bits = codes.encode(&['A', 'C']).unwrap();
//! assert_eq!(codes.decode(&bits).unwrap(), vec!['A', 'C']);
//! ```
//!
//! Reading symbols out of an image or file and packing the codes into bytes is left to the
//! caller.
//!
pub mod error;
pub mod huffman_coding;
pub mod tables;
pub mod tools;

pub use error::{HuffError, Result};
pub use huffman_coding::code_map::CodeMap;
pub use huffman_coding::huffman::{build_codes, huffman_codes, huffman_codes_batch, HuffmanTree};
pub use tables::jpeg::{StaticTable, TableKind};
pub use tools::freq_count::{byte_frequencies, frequencies, FrequencyEntry};
