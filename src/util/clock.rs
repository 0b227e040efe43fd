//! Wall clock in milliseconds since epoch.

/// Current wall-clock time in milliseconds.
///
/// Browser builds read `Date.now()`; native builds fall back to system
/// time (and to zero if the clock is before the epoch).
#[must_use]
pub fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}
