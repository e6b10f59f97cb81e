// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Sentia Kernel Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{SentiaError, SentiaResult};

fn default_harmful_keywords() -> Vec<String> {
    ["kill", "destroy", "harm", "abuse", "exploit"]
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Runtime configuration for the Sentia Kernel.
///
/// One named threshold per concern: safeguard gates, directive
/// enforcement, metabolic routing, and action scoring all read from
/// here. Defaults match the deployed governance profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentiaConfig {
    /// Emergency failsafe floor: processing aborts when virtue is at
    /// or below this value (inclusive boundary — exactly 0.50 aborts).
    pub virtue_floor: f64,

    /// Golden-thread minimum: virtue must be strictly above this.
    pub golden_virtue_min: f64,

    /// Golden-thread ceiling: dissonance must be strictly below this.
    pub golden_dissonance_max: f64,

    /// Case-insensitive substring denylist for action labels.
    pub harmful_keywords: Vec<String>,

    /// Scoring weight for virtue. The three weights must sum to 1.0.
    pub w_virtue: f64,

    /// Scoring weight for purpose.
    pub w_purpose: f64,

    /// Scoring weight for efficiency.
    pub w_efficiency: f64,

    /// Battery percentage below which routing forces DEEP_QUIESCENCE
    /// regardless of task complexity.
    pub battery_critical_percent: f64,

    /// Power draw (watts) below which the gauge fallback routes to
    /// DEEP_QUIESCENCE.
    pub quiescence_watts: f64,

    /// Power draw (watts) below which the gauge fallback routes to
    /// REFLEX_MODE. At or above it, COGNITIVE_FLOW.
    pub reflex_watts: f64,

    /// Resource-efficiency directive: memory ceiling in megabytes.
    pub memory_limit_mb: f64,

    /// Resource-efficiency directive: CPU ceiling in percent.
    pub cpu_limit_percent: f64,
}

impl Default for SentiaConfig {
    fn default() -> Self {
        Self {
            virtue_floor: 0.50,
            golden_virtue_min: 0.70,
            golden_dissonance_max: 0.50,
            harmful_keywords: default_harmful_keywords(),
            w_virtue: 0.5,
            w_purpose: 0.3,
            w_efficiency: 0.2,
            battery_critical_percent: 20.0,
            quiescence_watts: 1.0,
            reflex_watts: 5.0,
            memory_limit_mb: 500.0,
            cpu_limit_percent: 80.0,
        }
    }
}

impl SentiaConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> SentiaResult<()> {
        if !(0.0..=1.0).contains(&self.virtue_floor) {
            return Err(SentiaError::Config(format!(
                "virtue_floor must be in [0, 1], got {}",
                self.virtue_floor
            )));
        }
        if !(0.0..=1.0).contains(&self.golden_virtue_min) {
            return Err(SentiaError::Config(format!(
                "golden_virtue_min must be in [0, 1], got {}",
                self.golden_virtue_min
            )));
        }
        if !(0.0..=1.0).contains(&self.golden_dissonance_max) {
            return Err(SentiaError::Config(format!(
                "golden_dissonance_max must be in [0, 1], got {}",
                self.golden_dissonance_max
            )));
        }
        if self.harmful_keywords.is_empty() {
            return Err(SentiaError::Config(
                "harmful_keywords must not be empty".to_string(),
            ));
        }
        let weight_sum = self.w_virtue + self.w_purpose + self.w_efficiency;
        if (weight_sum - 1.0).abs() > 1e-9 {
            return Err(SentiaError::Config(format!(
                "w_virtue + w_purpose + w_efficiency must equal 1.0, got {} + {} + {} = {weight_sum}",
                self.w_virtue, self.w_purpose, self.w_efficiency
            )));
        }
        if !(0.0..=100.0).contains(&self.battery_critical_percent) {
            return Err(SentiaError::Config(format!(
                "battery_critical_percent must be in [0, 100], got {}",
                self.battery_critical_percent
            )));
        }
        if self.quiescence_watts >= self.reflex_watts {
            return Err(SentiaError::Config(format!(
                "quiescence_watts must be < reflex_watts, got {} >= {}",
                self.quiescence_watts, self.reflex_watts
            )));
        }
        if self.memory_limit_mb <= 0.0 {
            return Err(SentiaError::Config(format!(
                "memory_limit_mb must be > 0, got {}",
                self.memory_limit_mb
            )));
        }
        if self.cpu_limit_percent <= 0.0 {
            return Err(SentiaError::Config(format!(
                "cpu_limit_percent must be > 0, got {}",
                self.cpu_limit_percent
            )));
        }
        Ok(())
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> SentiaResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| SentiaError::Config(format!("JSON parse error: {e}")))
    }
}
