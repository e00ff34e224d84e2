// src/chunk/merge.rs

//! Merging ordered chunks into a single output file.

use crate::chunk::FileChunk;
use crate::error::ChunkcryptError;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `chunks` to `destination` in sequence order, with no gaps or
/// overlaps.
///
/// Missing parent directories are created; an existing file at the
/// destination is truncated. On failure the destination may be left
/// partially written (there is no atomic-rename step).
pub fn merge_chunks<P>(chunks: &[FileChunk], destination: P) -> Result<(), ChunkcryptError>
where
    P: AsRef<Path>,
{
    let destination = destination.as_ref();

    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = BufWriter::new(File::create(destination)?);
    for chunk in chunks {
        writer.write_all(&chunk.data)?;
    }
    writer.flush()?;

    Ok(())
}
