//! Clock arithmetic for roll animations
//!
//! All functions take `now` explicitly so a roll can be driven by any
//! clock, including a fixed one in tests.

use std::time::{Duration, Instant};

/// Progress in [0.0, 1.0] of an animation started at `start`
#[inline]
pub fn progress_at(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

#[inline]
pub fn is_complete_at(start: Instant, duration: Duration, now: Instant) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Settle time of each of `count` tracks, left to right
///
/// The first track gets `total - count * step` (never less than `min`),
/// each following one `step` longer, so tracks settle in cascade.
pub fn staggered_durations(
    total: Duration,
    step: Duration,
    min: Duration,
    count: usize,
) -> Vec<Duration> {
    let spread = step.saturating_mul(count as u32);
    let base = total.saturating_sub(spread).max(min);

    (0..count)
        .map(|i| base + step.saturating_mul(i as u32))
        .collect()
}
