//! Timing Policy
//!
//! Ready-window rolls and the reaction judgement. A reaction wins when its
//! latency is at most the current cap; equal counts as a win.

use std::time::Duration;

use crate::config::RulesConfig;
use crate::core::rng::SessionRng;

/// Roll the wait before the Start cue, uniform in
/// `[ready_window_min, ready_window_min + ready_window_span)` seconds.
pub fn roll_ready_threshold(rng: &mut SessionRng, rules: &RulesConfig) -> f64 {
    rng.next_f64_range(
        rules.ready_window_min,
        rules.ready_window_min + rules.ready_window_span,
    )
}

/// Does a reaction of `latency` seconds beat `cap`?
#[inline]
pub fn evaluate(latency: f64, cap: f64) -> bool {
    latency <= cap
}

/// Cap for the round after a win. Never reaches zero.
#[inline]
pub fn halve_cap(cap: f64) -> f64 {
    (cap / 2.0).max(f64::MIN_POSITIVE)
}

/// Seconds between two clock readings; 0 if the clock went backwards.
#[inline]
pub fn elapsed_secs(since: Duration, now: Duration) -> f64 {
    now.saturating_sub(since).as_secs_f64()
}
