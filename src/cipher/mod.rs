// src/cipher/mod.rs

//! AES-256-CBC cipher engine.
//!
//! Core API: [`CipherContext`] pairs a validated key and IV with the AES-256
//! primitives and transforms byte buffers in both directions. Every buffer
//! is an independent CBC message seeded with the same IV; chaining state
//! never crosses buffer boundaries (see [`CipherContext::encrypt`]).

pub(crate) mod cbc;
pub(crate) mod context;
pub(crate) mod padding;
pub(crate) mod text;

pub use context::CipherContext;
#[cfg(feature = "rand")]
pub use context::generate_key_iv;
