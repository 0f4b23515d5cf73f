//! Wall-clock time in whole seconds since the Unix epoch.
//!
//! `std::time::SystemTime` panics on `wasm32-unknown-unknown`, so the browser
//! build reads `Date.now()` instead.

#[cfg(all(test, not(feature = "hydrate")))]
#[path = "clock_test.rs"]
mod clock_test;

/// Current time in epoch seconds.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_epoch_secs() -> u64 {
    (js_sys::Date::now() / 1000.0).floor().max(0.0) as u64
}

/// Current time in epoch seconds.
#[cfg(not(feature = "hydrate"))]
pub fn now_epoch_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}
