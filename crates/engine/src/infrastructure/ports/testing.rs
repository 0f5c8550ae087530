//! Testability ports for injecting time and randomness.

use chrono::{DateTime, Utc};
use uuid::Uuid;

// =============================================================================
// Testability Ports
// =============================================================================

pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Non-cryptographic randomness.
#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Uniform draw from `[0, upper)`. `upper` is always at least 1.
    fn gen_index(&self, upper: u64) -> u64;
    fn gen_uuid(&self) -> Uuid;
}
