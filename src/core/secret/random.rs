//! Random byte sources for secret generation.
//!
//! The OS source is used for every generated secret. The clock-seeded
//! fallback exists only for environments where the OS source cannot be
//! read and is NOT suitable for production secrets.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use tracing::warn;

/// Source of random bytes.
///
/// Abstracts the byte source so secret generation can be driven by a
/// deterministic source in tests.
pub trait ByteSource {
    /// Fill `buf` with random bytes. Never fails.
    fn fill(&mut self, buf: &mut [u8]);
}

/// OS cryptographic random source.
///
/// Falls back to [`Fallback`] if the OS source cannot be read.
#[derive(Debug, Default, Clone, Copy)]
pub struct System;

impl ByteSource for System {
    fn fill(&mut self, buf: &mut [u8]) {
        if OsRng.try_fill_bytes(buf).is_err() {
            warn!("os random source unavailable, using clock-seeded prng");
            Fallback::new().fill(buf);
        }
    }
}

/// Clock-seeded PRNG fallback.
///
/// Weaker than the OS source; only used when the OS source is
/// unavailable.
#[derive(Debug)]
pub struct Fallback {
    rng: StdRng,
}

impl Fallback {
    pub fn new() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        let seed = nanos ^ u64::from(std::process::id());
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for Fallback {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteSource for Fallback {
    fn fill(&mut self, buf: &mut [u8]) {
        self.rng.fill_bytes(buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_source_fills_buffer() {
        let mut buf = [0u8; 32];
        System.fill(&mut buf);
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_fallback_source_fills_buffer() {
        let mut buf = [0u8; 32];
        Fallback::new().fill(&mut buf);
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_fallback_successive_fills_differ() {
        let mut source = Fallback::new();
        let mut a = [0u8; 16];
        let mut b = [0u8; 16];
        source.fill(&mut a);
        source.fill(&mut b);
        assert_ne!(a, b);
    }
}
