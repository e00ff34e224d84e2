//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All fallible operations return [`Result<T, ChunkcryptError>`](ChunkcryptError).

use thiserror::Error;

/// The error type for all chunkcrypt operations.
///
/// Covers configuration problems, key/IV decoding, cipher construction,
/// I/O failures, and ciphertext validation during decryption.
#[derive(Error, Debug)]
pub enum ChunkcryptError {
    /// I/O error occurred during file operations.
    ///
    /// Wraps [`std::io::Error`]; created automatically when chunk reads,
    /// directory creation, or output writes fail.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration (unknown operation mode, missing input path).
    #[error("config error: {0}")]
    Config(String),

    /// Key is not valid standard base64, or decodes to a length other than 32 bytes.
    #[error("key decode error: {0}")]
    KeyDecode(String),

    /// IV is not valid standard base64, or decodes to a length other than 16 bytes.
    #[error("iv decode error: {0}")]
    IvDecode(String),

    /// The AES-256 primitive could not be constructed from the key.
    #[error("cipher init error: {0}")]
    CipherInit(String),

    /// Decrypt input length is not a multiple of the AES block size.
    #[error("ciphertext length {len} is not a multiple of the block size")]
    InvalidLength {
        /// Length of the offending ciphertext.
        len: usize,
    },

    /// PKCS#7 padding is malformed: the padding byte is outside `1..=16`,
    /// exceeds the buffer length, or the trailing padding bytes disagree
    /// with it.
    #[error("invalid PKCS#7 padding (pad byte {pad:#04x})")]
    InvalidPadding {
        /// The padding length byte read from the decrypted buffer.
        pad: u8,
    },

    /// Malformed base64 (or non-UTF-8 plaintext) in the text convenience API.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// A per-chunk transform failed; carries the zero-based chunk index.
    #[error("chunk {index} failed: {source}")]
    Chunk {
        /// Zero-based index of the chunk that failed.
        index: usize,
        /// The underlying failure.
        source: Box<ChunkcryptError>,
    },
}
