// src/cipher/text.rs

//! String convenience wrappers: same engine, base64-armored output.

use crate::cipher::context::CipherContext;
use crate::error::ChunkcryptError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

impl CipherContext {
    /// Encrypt a string and return the ciphertext as standard base64.
    pub fn encrypt_text(&self, plaintext: &str) -> String {
        STANDARD.encode(self.encrypt(plaintext.as_bytes()))
    }

    /// Decrypt a base64-encoded ciphertext back to a string.
    ///
    /// Fails with [`ChunkcryptError::Encoding`] on malformed base64 input
    /// or if the decrypted bytes are not valid UTF-8.
    pub fn decrypt_text(&self, encoded: &str) -> Result<String, ChunkcryptError> {
        let ciphertext = STANDARD
            .decode(encoded)
            .map_err(|e| ChunkcryptError::Encoding(e.to_string()))?;
        let plaintext = self.decrypt(&ciphertext)?;
        String::from_utf8(plaintext).map_err(|e| ChunkcryptError::Encoding(e.to_string()))
    }
}
