//! Server id derivation for quick-start configurations.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lowest server id handed out by [`derive_server_id`].
pub const SERVER_ID_BASE: u32 = 1001;

/// Number of distinct server ids [`derive_server_id`] can produce.
pub const SERVER_ID_SPAN: u32 = 1000;

/// Source of wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> SystemTime;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Clock that always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub SystemTime);

impl FixedClock {
    /// Clock frozen at `secs` seconds after the Unix epoch.
    pub fn from_unix_secs(secs: u64) -> Self {
        Self(UNIX_EPOCH + std::time::Duration::from_secs(secs))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        self.0
    }
}

/// Pick a server id in `[SERVER_ID_BASE, SERVER_ID_BASE + SERVER_ID_SPAN)`.
///
/// The generator is seeded with the clock's Unix seconds, so clients started
/// in different seconds usually get different ids. This is not a uniqueness
/// guarantee; set `server_id` explicitly when several clients share a source.
pub fn derive_server_id(clock: &dyn Clock) -> u32 {
    // Clocks before the epoch collapse to seed 0.
    let seed = clock
        .now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let mut rng = StdRng::seed_from_u64(seed);
    SERVER_ID_BASE + rng.gen_range(0..SERVER_ID_SPAN)
}
