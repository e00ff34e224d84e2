// src/pipeline.rs

//! Pipeline orchestration: split -> per-chunk transform -> merge.

use crate::chunk::{merge_chunks, split_file, FileChunk};
use crate::cipher::CipherContext;
use crate::consts::{BLOCK_LEN, DEFAULT_CHUNK_SIZE};
use crate::error::ChunkcryptError;
use std::path::Path;
use std::str::FromStr;

/// Operation selector for a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Split plaintext, encrypt each chunk, merge ciphertext.
    Encrypt,
    /// Split ciphertext, decrypt each chunk, merge plaintext.
    Decrypt,
}

impl FromStr for Mode {
    type Err = ChunkcryptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "encrypt" => Ok(Mode::Encrypt),
            "decrypt" => Ok(Mode::Decrypt),
            other => Err(ChunkcryptError::Config(format!(
                "invalid mode {other:?} (expected \"encrypt\" or \"decrypt\")"
            ))),
        }
    }
}

/// Ciphertext length of one full `chunk_size`-byte plaintext chunk.
///
/// Encryption pads every chunk up to the next block boundary, always adding
/// at least one byte, so a full plaintext chunk grows to this size. The
/// decrypt direction must split at *this* boundary, not at `chunk_size`,
/// or every chunk after the first would start mid-message and unpad
/// garbage.
#[inline(always)]
pub fn encrypted_chunk_size(chunk_size: usize) -> usize {
    chunk_size - chunk_size % BLOCK_LEN + BLOCK_LEN
}

/// Run the full pipeline: split `input`, transform every chunk in order
/// with `ctx` according to `mode`, and merge the results into `output`.
///
/// A `chunk_size` of zero falls back to the default (5 MiB). All chunks
/// are transformed before anything is written; a per-chunk failure aborts
/// the whole run and reports the failing chunk index.
pub fn run_pipeline<P, Q>(
    mode: Mode,
    ctx: &CipherContext,
    input: P,
    output: Q,
    chunk_size: usize,
) -> Result<usize, ChunkcryptError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let chunk_size = if chunk_size == 0 {
        DEFAULT_CHUNK_SIZE
    } else {
        chunk_size
    };
    let split_size = match mode {
        Mode::Encrypt => chunk_size,
        Mode::Decrypt => encrypted_chunk_size(chunk_size),
    };
    let chunks = split_file(input, split_size)?;

    let mut transformed = Vec::with_capacity(chunks.len());
    for (index, chunk) in chunks.iter().enumerate() {
        let data = match mode {
            Mode::Encrypt => ctx.encrypt(&chunk.data),
            Mode::Decrypt => ctx.decrypt(&chunk.data).map_err(|e| ChunkcryptError::Chunk {
                index,
                source: Box::new(e),
            })?,
        };
        transformed.push(FileChunk { data });
    }

    merge_chunks(&transformed, output)?;
    Ok(transformed.len())
}
