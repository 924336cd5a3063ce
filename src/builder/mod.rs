//! Tools for building a formula, from individual lines or from some reader.

pub mod parse;
pub mod read;

pub use read::ParserInfo;
