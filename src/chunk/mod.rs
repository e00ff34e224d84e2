// src/chunk/mod.rs

//! File chunking: split a byte source into bounded, ordered chunks and
//! merge transformed chunks back into a single output file.

pub(crate) mod merge;
pub(crate) mod split;

pub use merge::merge_chunks;
pub use split::{split_file, split_reader};

/// An ordered, bounded-size span of bytes taken from a larger stream.
///
/// Chunks are positionally ordered; concatenating them (after any per-chunk
/// transformation) reconstructs the full output stream. Every chunk's size
/// is at most the configured maximum except possibly the final one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChunk {
    /// The chunk's bytes.
    pub data: Vec<u8>,
}

impl FileChunk {
    /// Size of the chunk in bytes.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.data.len()
    }
}
