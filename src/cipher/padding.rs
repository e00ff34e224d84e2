// src/cipher/padding.rs

//! PKCS#7 padding.
//!
//! Padding always adds between 1 and [`BLOCK_LEN`] bytes: a buffer that is
//! already block-aligned (including the empty buffer) gains a full block of
//! padding. Unpadding is strict: the trailing `p` bytes must all equal `p`.

use crate::consts::BLOCK_LEN;
use crate::error::ChunkcryptError;

/// Append PKCS#7 padding, returning a buffer whose length is a positive
/// multiple of [`BLOCK_LEN`].
pub(crate) fn pkcs7_pad(data: &[u8]) -> Vec<u8> {
    let pad = BLOCK_LEN - data.len() % BLOCK_LEN;
    let mut padded = Vec::with_capacity(data.len() + pad);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad, pad as u8);
    padded
}

/// Strip PKCS#7 padding from a decrypted buffer.
///
/// Fails with [`ChunkcryptError::InvalidPadding`] if the padding byte is 0,
/// greater than [`BLOCK_LEN`], greater than the buffer length, or if any of
/// the trailing padding bytes disagrees with it.
pub(crate) fn pkcs7_unpad(data: &[u8]) -> Result<&[u8], ChunkcryptError> {
    let pad = match data.last() {
        Some(&last) => last,
        None => return Err(ChunkcryptError::InvalidPadding { pad: 0 }),
    };

    let pad_len = pad as usize;
    if pad_len == 0 || pad_len > BLOCK_LEN || pad_len > data.len() {
        return Err(ChunkcryptError::InvalidPadding { pad });
    }

    let body_len = data.len() - pad_len;
    if data[body_len..].iter().any(|&b| b != pad) {
        return Err(ChunkcryptError::InvalidPadding { pad });
    }

    Ok(&data[..body_len])
}
