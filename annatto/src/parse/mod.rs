//! Parsers turning heterogeneous tool output streams into the uniform
//! annotation model.
//!
//! Three grammar shapes are supported, one per external tool family:
//! descriptor+table ([`genefinder`]), flat columnar ([`rfam`]) and nested
//! two-level blocks ([`terminator`]), plus the tabular homology hit list
//! ([`hits`]). All of them build on the generic [`RecordSplitter`].
//!
//! Every parser fails the whole record on a malformed line rather than
//! silently skipping it; the caller decides whether to abort the pipeline
//! or skip the sequence.

pub mod genefinder;
pub mod hits;
pub mod rfam;
pub mod splitter;
pub mod terminator;

pub use splitter::{group_by_field, RecordSplitter};

use std::io::BufRead;

use crate::error::Result;

/// Reads all lines of a reader eagerly; tool outputs are small enough.
pub fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    Ok(reader.lines().collect::<std::io::Result<_>>()?)
}

#[cfg(test)]
mod tests;
