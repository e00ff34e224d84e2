// src/cipher/context.rs

//! Cipher context construction and the buffer-level encrypt/decrypt API.

use crate::aliases::{Aes256Key32, Iv16};
#[cfg(feature = "rand")]
use crate::aliases::SecureRandomExt;
use crate::cipher::cbc::{cbc_decrypt, cbc_encrypt};
use crate::cipher::padding::{pkcs7_pad, pkcs7_unpad};
use crate::consts::{IV_LEN, KEY_LEN};
use crate::error::ChunkcryptError;
use aes::cipher::KeyInit;
use aes::{Aes256Dec, Aes256Enc};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use zeroize::Zeroize;

/// A validated (key, IV) pair bound to the AES-256 encrypt and decrypt
/// primitives.
///
/// Key and IV lengths are checked once at construction; every buffer
/// operation afterwards assumes that validation passed. The context is
/// stateless across buffers: CBC is re-seeded with the same IV for each
/// call, so identical inputs produce identical outputs.
#[derive(Debug)]
pub struct CipherContext {
    enc: Aes256Enc,
    dec: Aes256Dec,
    iv: [u8; IV_LEN],
}

impl CipherContext {
    /// Construct a context from a raw 32-byte key and 16-byte IV.
    pub fn new(key: &Aes256Key32, iv: &Iv16) -> Result<Self, ChunkcryptError> {
        let enc = Aes256Enc::new_from_slice(&key[..])
            .map_err(|e| ChunkcryptError::CipherInit(e.to_string()))?;
        let dec = Aes256Dec::new_from_slice(&key[..])
            .map_err(|e| ChunkcryptError::CipherInit(e.to_string()))?;
        Ok(Self { enc, dec, iv: **iv })
    }

    /// Construct a context from standard-base64 key and IV strings.
    ///
    /// Fails with [`ChunkcryptError::KeyDecode`] / [`ChunkcryptError::IvDecode`]
    /// on malformed base64 or wrong decoded length (key must be 32 bytes,
    /// IV must be 16 bytes).
    pub fn from_base64(key_b64: &str, iv_b64: &str) -> Result<Self, ChunkcryptError> {
        let mut key_bytes = STANDARD
            .decode(key_b64)
            .map_err(|e| ChunkcryptError::KeyDecode(e.to_string()))?;
        if key_bytes.len() != KEY_LEN {
            let got = key_bytes.len();
            key_bytes.zeroize();
            return Err(ChunkcryptError::KeyDecode(format!(
                "key must be {KEY_LEN} bytes (256 bits), got {got}"
            )));
        }

        let mut iv_bytes = STANDARD
            .decode(iv_b64)
            .map_err(|e| ChunkcryptError::IvDecode(e.to_string()))?;
        if iv_bytes.len() != IV_LEN {
            let got = iv_bytes.len();
            key_bytes.zeroize();
            iv_bytes.zeroize();
            return Err(ChunkcryptError::IvDecode(format!(
                "iv must be {IV_LEN} bytes (128 bits), got {got}"
            )));
        }

        let mut key = Aes256Key32::new([0u8; KEY_LEN]);
        key.copy_from_slice(&key_bytes);
        key_bytes.zeroize();

        let mut iv = Iv16::new([0u8; IV_LEN]);
        iv.copy_from_slice(&iv_bytes);
        iv_bytes.zeroize();

        Self::new(&key, &iv)
    }

    /// Encrypt a buffer: PKCS#7-pad to a multiple of the block size, then
    /// CBC-encrypt seeded with the context IV.
    ///
    /// The output length is always a positive multiple of 16, even for
    /// empty input (padding adds between 1 and 16 bytes).
    ///
    /// Each call is an independent CBC message: the first block is always
    /// chained against the fixed IV, never against a previous call's last
    /// ciphertext block. Encrypting chunks independently is therefore *not*
    /// equivalent to encrypting their concatenation, and that is the wire
    /// format this crate is committed to.
    pub fn encrypt(&self, buffer: &[u8]) -> Vec<u8> {
        let padded = pkcs7_pad(buffer);
        cbc_encrypt(&self.enc, &self.iv, &padded)
    }

    /// Decrypt a buffer: CBC-decrypt seeded with the context IV, then strip
    /// PKCS#7 padding.
    ///
    /// Fails with [`ChunkcryptError::InvalidLength`] if the input is not a
    /// multiple of 16, and [`ChunkcryptError::InvalidPadding`] if the
    /// padding is malformed. An empty input decrypts to an empty output:
    /// zero CBC blocks carry zero plaintext and no padding byte to inspect,
    /// which is what a 0-byte encrypted file round-trips through.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, ChunkcryptError> {
        if ciphertext.is_empty() {
            return Ok(Vec::new());
        }
        let padded = cbc_decrypt(&self.dec, &self.iv, ciphertext)?;
        let plaintext = pkcs7_unpad(&padded)?.to_vec();
        Ok(plaintext)
    }
}

/// Generate a fresh random key and IV, returned in their standard-base64
/// forms so the caller can report them (nothing here persists them).
#[cfg(feature = "rand")]
pub fn generate_key_iv() -> (String, String) {
    let key = Aes256Key32::random();
    let iv = Iv16::random();
    (STANDARD.encode(&key[..]), STANDARD.encode(&iv[..]))
}
