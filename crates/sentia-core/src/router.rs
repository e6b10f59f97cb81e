// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Metabolic Router
// ─────────────────────────────────────────────────────────────────────
//! Routes each request to a metabolic tier from its declared
//! complexity and the host power gauges.
//!
//! Rule order:
//!   1. battery below critical → DEEP_QUIESCENCE, overrides everything
//!   2. SIMPLE → REFLEX_MODE
//!   3. COMPLEX → COGNITIVE_FLOW
//!   4. otherwise the gauge bands decide
//!
//! Gauge reads are best-effort; a failed probe keeps the last-known
//! values and never propagates an error into the pipeline.

use sentia_types::{PowerTier, SentiaConfig, TaskComplexity};

use crate::power::PowerProbe;

/// Complexity- and power-aware request router.
pub struct MetabolicRouter {
    config: SentiaConfig,
    probe: Box<dyn PowerProbe>,
    battery_percent: f64,
    power_draw_watts: f64,
}

impl MetabolicRouter {
    pub fn new(config: SentiaConfig, probe: Box<dyn PowerProbe>) -> Self {
        Self {
            config,
            probe,
            battery_percent: 100.0,
            power_draw_watts: 1.0,
        }
    }

    /// Merge a fresh probe sample into the last-known gauges.
    fn refresh_gauges(&mut self) {
        match self.probe.sample() {
            Some(sample) => {
                if let Some(battery) = sample.battery_percent {
                    self.battery_percent = battery;
                }
                if let Some(watts) = sample.power_draw_watts {
                    self.power_draw_watts = watts;
                }
            }
            None => {
                log::warn!("could not read hardware metrics; keeping last-known gauges");
            }
        }
    }

    /// Tier from the power-draw bands alone.
    fn gauge_tier(&self) -> PowerTier {
        if self.power_draw_watts < self.config.quiescence_watts {
            PowerTier::DeepQuiescence
        } else if self.power_draw_watts < self.config.reflex_watts {
            PowerTier::ReflexMode
        } else {
            PowerTier::CognitiveFlow
        }
    }

    /// Route a request to its metabolic tier.
    pub fn route(&mut self, complexity: TaskComplexity) -> PowerTier {
        self.refresh_gauges();

        if self.battery_percent < self.config.battery_critical_percent {
            log::warn!("battery critical: overriding all goals, priority = find charger");
            return PowerTier::DeepQuiescence;
        }

        match complexity {
            TaskComplexity::Simple => PowerTier::ReflexMode,
            TaskComplexity::Complex => PowerTier::CognitiveFlow,
            TaskComplexity::Other => self.gauge_tier(),
        }
    }

    /// Last-known gauges as (battery percent, power draw watts).
    pub fn gauges(&self) -> (f64, f64) {
        (self.battery_percent, self.power_draw_watts)
    }
}
