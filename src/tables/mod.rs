//! Fixed prefix-code tables that are supplied as data rather than built from input.

pub mod jpeg;
