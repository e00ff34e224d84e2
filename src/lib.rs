// src/lib.rs

//! # chunkcrypt-rs
//!
//! Chunked AES-256-CBC file encryption: split input into bounded chunks,
//! transform each chunk independently under a fixed key/IV, merge the
//! results. Round trips are byte-exact; every chunk is its own CBC message
//! seeded with the same IV, so chaining state never crosses a chunk
//! boundary (see [`CipherContext::encrypt`]).

pub mod aliases;
pub mod chunk;
pub mod cipher;
pub mod consts;
pub mod error;
pub mod pipeline;
pub mod utils;

// High-level API — this is what most users import
pub use chunk::{merge_chunks, split_file, split_reader, FileChunk};
pub use cipher::CipherContext;
pub use error::ChunkcryptError;
pub use pipeline::{encrypted_chunk_size, run_pipeline, Mode};

#[cfg(feature = "rand")]
pub use cipher::generate_key_iv;
