//! The huffman module builds variable length prefix codes from a multiset of symbols.
//!
//! Each distinct symbol becomes a leaf weighted by its count. The two lightest nodes are merged
//! under a new parent until a single tree remains, and every leaf is then given the path from
//! the root as its code ('0' for a left branch, '1' for a right one). Lighter symbols end up
//! deeper in the tree and so get longer codes.
//!
//! When two nodes have the same weight the order they are merged in is not fixed, so the exact
//! bit patterns can differ between runs of equal input. The code lengths are always optimal
//! for the counts given.
//!
//! The builder does not apply any format specific limits such as a maximum code length. Where
//! a format needs those, use a fixed table from the tables module.
//!

pub mod code_map;
pub mod huffman;
