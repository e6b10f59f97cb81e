// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Safeguard Gates
// ─────────────────────────────────────────────────────────────────────
//! The two threshold gates that can sever the pipeline before any
//! routing or scoring happens.
//!
//! Both are pure predicates over (config, snapshot, action): no state,
//! no side effects beyond a diagnostic log line. Gate order is fixed by
//! the kernel — virtue floor first, golden thread second, harm denylist
//! (see [`crate::policy`]) third — and the first failure decides the
//! outcome.

use sentia_types::{MetricSnapshot, SentiaConfig};

/// Emergency ethical failsafe.
///
/// Fails closed when virtue is at or below the configured floor; the
/// boundary itself fails (virtue == floor aborts).
pub fn virtue_floor(config: &SentiaConfig, metrics: &MetricSnapshot) -> bool {
    if metrics.virtue <= config.virtue_floor {
        log::error!(
            "VIRTUE FLOOR TRIGGERED: virtue={} <= floor={}",
            metrics.virtue,
            config.virtue_floor
        );
        return false;
    }
    true
}

/// Golden-thread ethical axiom check.
///
/// Passes only inside the envelope: virtue strictly above
/// `golden_virtue_min` and dissonance strictly below
/// `golden_dissonance_max`.
pub fn golden_thread(
    config: &SentiaConfig,
    planned_action: &str,
    metrics: &MetricSnapshot,
) -> bool {
    let safe = metrics.virtue > config.golden_virtue_min
        && metrics.dissonance < config.golden_dissonance_max;
    if !safe {
        log::warn!("golden thread check failed for action: {planned_action}");
    }
    safe
}
