//! Fixed retry policy for the two API endpoints.
//!
//! These values are reproduced from observed API behavior, not tunables. The
//! 120 second rate-limit cooldown was established empirically against the
//! live service.

use std::time::Duration;

/// Maximum attempts per request before giving up.
pub const MAX_ATTEMPTS: u32 = 5;

/// Cooldowns applied between attempts, per failure class.
#[derive(Debug, Clone, Copy)]
pub struct Cooldowns {
    /// Sleep after an HTTP 429.
    pub rate_limited: Duration,
    /// Sleep after any other non-2xx status.
    pub http_error: Duration,
    /// Sleep after an invalid-JSON body or a shape-decode failure.
    pub bad_body: Duration,
    /// Sleep after a transport-level error (skipped on the last attempt).
    pub transport: Duration,
}

impl Cooldowns {
    /// Policy for the customer list endpoint.
    pub fn list() -> Self {
        Self {
            rate_limited: Duration::from_secs(120),
            http_error: Duration::from_secs(120),
            bad_body: Duration::from_secs(120),
            transport: Duration::from_secs(1),
        }
    }

    /// Policy for the customer detail endpoint. Non-rate-limit HTTP errors
    /// use a shorter cooldown than the list endpoint.
    pub fn detail() -> Self {
        Self {
            http_error: Duration::from_secs(60),
            ..Self::list()
        }
    }
}
