// src/cipher/cbc.rs

//! Hand-rolled AES-256-CBC chaining loops.
//!
//! Operates on already-padded input (encrypt) and block-aligned input
//! (decrypt). Padding itself lives in `padding.rs`; the public surface is
//! `CipherContext` in `context.rs`.

use crate::consts::BLOCK_LEN;
use crate::error::ChunkcryptError;
use crate::utils::xor_blocks;
use aes::cipher::{BlockDecrypt, BlockEncrypt};
use aes::{Aes256Dec, Aes256Enc, Block as AesBlock};

/// CBC-encrypt a padded buffer. `padded.len()` must be a multiple of the
/// block size (guaranteed by the caller, which pads first).
#[inline(always)]
pub(crate) fn cbc_encrypt(cipher: &Aes256Enc, iv: &[u8; BLOCK_LEN], padded: &[u8]) -> Vec<u8> {
    debug_assert_eq!(padded.len() % BLOCK_LEN, 0);

    let mut ciphertext = Vec::with_capacity(padded.len());
    let mut prev_block: [u8; BLOCK_LEN] = *iv;

    for block in padded.chunks_exact(BLOCK_LEN) {
        // XOR with previous ciphertext block (IV for the first)
        let mut xored = [0u8; BLOCK_LEN];
        xor_blocks(block, &prev_block, &mut xored);

        let mut aes_block = AesBlock::from(xored);
        cipher.encrypt_block(&mut aes_block);

        prev_block.copy_from_slice(aes_block.as_slice());
        ciphertext.extend_from_slice(&prev_block);
    }

    ciphertext
}

/// CBC-decrypt a buffer. Fails with [`ChunkcryptError::InvalidLength`] if
/// the input is not block-aligned. Padding is *not* stripped here.
#[inline(always)]
pub(crate) fn cbc_decrypt(
    cipher: &Aes256Dec,
    iv: &[u8; BLOCK_LEN],
    ciphertext: &[u8],
) -> Result<Vec<u8>, ChunkcryptError> {
    if ciphertext.len() % BLOCK_LEN != 0 {
        return Err(ChunkcryptError::InvalidLength {
            len: ciphertext.len(),
        });
    }

    let mut plaintext = Vec::with_capacity(ciphertext.len());
    let mut prev_block: [u8; BLOCK_LEN] = *iv;

    for block in ciphertext.chunks_exact(BLOCK_LEN) {
        let mut block_bytes = [0u8; BLOCK_LEN];
        block_bytes.copy_from_slice(block);

        let mut aes_block = AesBlock::from(block_bytes);
        cipher.decrypt_block(&mut aes_block);

        // Inverse permutation, then XOR with previous ciphertext block (IV for the first)
        let mut plain_block = [0u8; BLOCK_LEN];
        xor_blocks(aes_block.as_slice(), &prev_block, &mut plain_block);

        plaintext.extend_from_slice(&plain_block);
        prev_block = block_bytes;
    }

    Ok(plaintext)
}
