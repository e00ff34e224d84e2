//! # Constants
//!
//! Fixed sizes for the AES-256-CBC engine and the chunking layer.

/// AES-256 key length in bytes.
///
/// Keys are supplied base64-encoded at the boundary and must decode to
/// exactly this many bytes.
pub const KEY_LEN: usize = 32;

/// Initialization vector length in bytes.
///
/// Must equal [`BLOCK_LEN`]; CBC seeds the first block's chaining with it.
pub const IV_LEN: usize = 16;

/// AES block length in bytes.
pub const BLOCK_LEN: usize = 16;

/// Default chunk size: 5 MiB (5,242,880 bytes).
///
/// The splitter falls back to this when the configured chunk size is zero.
/// Every chunk except possibly the last holds exactly this many bytes.
pub const DEFAULT_CHUNK_SIZE: usize = 5 * 1024 * 1024;
