// src/chunk/split.rs

//! Splitting a byte source into ordered, bounded chunks.

use crate::chunk::FileChunk;
use crate::consts::DEFAULT_CHUNK_SIZE;
use crate::error::ChunkcryptError;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Split a reader into chunks of at most `chunk_size` bytes, in stream
/// order. A `chunk_size` of zero falls back to [`DEFAULT_CHUNK_SIZE`].
///
/// The final chunk holds the remainder; an empty source yields an empty
/// vector. All chunks are materialized in memory, which bounds usable
/// input size to available memory.
pub fn split_reader<R>(mut source: R, chunk_size: usize) -> Result<Vec<FileChunk>, ChunkcryptError>
where
    R: Read,
{
    let chunk_size = if chunk_size == 0 {
        DEFAULT_CHUNK_SIZE
    } else {
        chunk_size
    };

    let mut chunks = Vec::new();
    loop {
        let mut data = vec![0u8; chunk_size];
        let mut filled = 0;

        // Short reads don't end a chunk; only EOF does.
        while filled < chunk_size {
            let n = source.read(&mut data[filled..])?;
            if n == 0 {
                break;
            }
            filled += n;
        }

        if filled == 0 {
            break;
        }
        data.truncate(filled);
        chunks.push(FileChunk { data });

        if filled < chunk_size {
            break; // EOF mid-chunk
        }
    }

    Ok(chunks)
}

/// Split the file at `path` into chunks. See [`split_reader`].
pub fn split_file<P>(path: P, chunk_size: usize) -> Result<Vec<FileChunk>, ChunkcryptError>
where
    P: AsRef<Path>,
{
    let file = File::open(path.as_ref())?;
    split_reader(BufReader::new(file), chunk_size)
}
