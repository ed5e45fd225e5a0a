// rfr-aio/src/lib.rs
//! Filesystem helpers for rfr (text files, output artifact paths)
pub mod fs;

pub use fs::*;
