//! tests/common.rs
//! Shared constants and helpers for the integration tests.

use chunkcrypt_rs::CipherContext;

/// Base64 of 32 zero bytes (the all-zero AES-256 key).
#[allow(dead_code)] // used by some test files, not all
pub const TEST_KEY_B64: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";

/// Base64 of 16 zero bytes (the all-zero IV).
#[allow(dead_code)] // used by some test files, not all
pub const TEST_IV_B64: &str = "AAAAAAAAAAAAAAAAAAAAAA==";

/// Context keyed with the all-zero key and IV; matches the known-answer
/// vectors produced with `openssl enc -aes-256-cbc`.
#[allow(dead_code)] // used by some test files, not all
pub fn zero_ctx() -> CipherContext {
    CipherContext::from_base64(TEST_KEY_B64, TEST_IV_B64).expect("zero key/iv must validate")
}

/// Decode a lowercase hex string (test vectors only).
#[allow(dead_code)] // used by some test files, not all
pub fn from_hex(hex: &str) -> Vec<u8> {
    assert_eq!(hex.len() % 2, 0, "odd hex length");
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("invalid hex"))
        .collect()
}

/// Deterministic pseudo-random bytes for round-trip tests.
#[allow(dead_code)] // used by some test files, not all
pub fn patterned(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}
