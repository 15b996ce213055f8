//! `rand`-backed randomness for sessions.

use battle_core::RngSource;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Adapter exposing a [`StdRng`] as an engine [`RngSource`].
#[derive(Clone, Debug)]
pub struct StdRngSource {
    inner: StdRng,
}

impl StdRngSource {
    /// Seeded from the operating system; battles are not reproducible.
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    /// Reproducible stream for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RngSource for StdRngSource {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }
}
