//! The tools module provides the helpers that sit around the huffman builder.
//!
//! The tools are:
//! - cli: Command line interface for huffcodes.
//! - freq_count: Frequency count of the input symbols, the first step before any tree is built.
//!
pub mod cli;
pub mod freq_count;
