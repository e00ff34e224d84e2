//! # Zeroizing Secret Aliases
//!
//! Fixed-size secret buffers used across the library. Everything here wipes
//! its memory on drop via [`zeroize::Zeroizing`], so key material never
//! outlives the pipeline run that created it.
//!
//! ## Types
//! - [`SpanBuffer<N>`] - generic zeroizing stack buffer for any size `N`
//! - [`Aes256Key32`] - 32-byte AES-256 key
//! - [`Iv16`] - 16-byte initialization vector
//!
//! With the `rand` feature, every alias additionally gains
//! [`SecureRandomExt::random`] for cryptographically fresh instances.

#[cfg(feature = "rand")]
use rand::{rngs::OsRng, TryRngCore};
#[cfg(feature = "rand")]
use std::cell::RefCell;
use zeroize::Zeroizing;

/// Generic zeroizing stack buffer.
pub type SpanBuffer<const N: usize> = Zeroizing<[u8; N]>;

/// 32-byte AES-256 key.
pub type Aes256Key32 = SpanBuffer<32>;

/// 16-byte initialization vector.
pub type Iv16 = SpanBuffer<16>;

/// Extension trait - gives `.random()` to all fixed-size secret buffers.
#[cfg(feature = "rand")]
pub trait SecureRandomExt {
    /// Generate a cryptographically secure random instance of this type.
    fn random() -> Self;
}

// Thread-local OsRng wrapped in RefCell so we can mutably borrow it.
#[cfg(feature = "rand")]
thread_local! {
    static RNG: RefCell<OsRng> = const { RefCell::new(OsRng) };
}

#[cfg(feature = "rand")]
impl<const N: usize> SecureRandomExt for Zeroizing<[u8; N]> {
    #[inline(always)]
    fn random() -> Self {
        RNG.with(|rng_cell| {
            let mut rng = rng_cell.borrow_mut();
            let mut bytes = [0u8; N];
            // An OS entropy failure is unrecoverable; a silently zeroed key
            // would be far worse than aborting.
            rng.try_fill_bytes(&mut bytes)
                .expect("OS random number generator failed");
            Zeroizing::new(bytes)
        })
    }
}
