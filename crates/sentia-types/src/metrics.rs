// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Sentia Kernel Metric State
// ─────────────────────────────────────────────────────────────────────
//! The six axiomatic state scalars, plus the label enums derived from
//! them: metabolic tier, task complexity, and synthesized mood.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Current UTC time as an RFC 3339 string, microsecond precision.
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Axiomatic state variables for the kernel.
///
/// Values are stored as received — no range is enforced. History is
/// retained only through audit-chain snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSnapshot {
    /// State purity.
    pub integrity: f64,
    /// Internal conflict level.
    pub dissonance: f64,
    /// Goal alignment.
    pub purpose: f64,
    /// Beauty and elegance of the current plan.
    pub aesthetic: f64,
    /// Ethical composite.
    pub virtue: f64,
    /// Work/energy ratio.
    pub efficiency: f64,
    /// RFC 3339 UTC timestamp of the last update.
    pub timestamp: String,
}

impl Default for MetricSnapshot {
    fn default() -> Self {
        Self {
            integrity: 1.0,
            dissonance: 0.0,
            purpose: 1.0,
            aesthetic: 1.0,
            virtue: 1.0,
            efficiency: 1.0,
            timestamp: utc_timestamp(),
        }
    }
}

impl MetricSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refresh the snapshot timestamp to now.
    pub fn touch(&mut self) {
        self.timestamp = utc_timestamp();
    }
}

/// Metabolic tier: the computational/power budget a request runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PowerTier {
    /// Minimal activity, conserve energy.
    DeepQuiescence,
    /// Fast low-cost responses.
    ReflexMode,
    /// Full deliberative processing.
    CognitiveFlow,
}

impl PowerTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerTier::DeepQuiescence => "DEEP_QUIESCENCE",
            PowerTier::ReflexMode => "REFLEX_MODE",
            PowerTier::CognitiveFlow => "COGNITIVE_FLOW",
        }
    }
}

/// Declared complexity of an incoming task.
///
/// Any label other than `SIMPLE` / `COMPLEX` deserializes to `Other`,
/// which routes on power gauges instead of the declared class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskComplexity {
    Simple,
    Complex,
    Other,
}

impl TaskComplexity {
    pub fn from_label(label: &str) -> Self {
        match label {
            "SIMPLE" => TaskComplexity::Simple,
            "COMPLEX" => TaskComplexity::Complex,
            _ => TaskComplexity::Other,
        }
    }
}

impl<'de> Deserialize<'de> for TaskComplexity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(TaskComplexity::from_label(&label))
    }
}

/// Qualitative mood synthesized from the metric snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mood {
    Coherent,
    Anxious,
    Purposeful,
    EthicalCrisis,
    Flourishing,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Coherent => "COHERENT",
            Mood::Anxious => "ANXIOUS",
            Mood::Purposeful => "PURPOSEFUL",
            Mood::EthicalCrisis => "ETHICAL_CRISIS",
            Mood::Flourishing => "FLOURISHING",
        }
    }

    /// One-line operator-facing description.
    pub fn describe(&self) -> &'static str {
        match self {
            Mood::Coherent => "System in harmony; high integrity, low dissonance",
            Mood::Anxious => "High dissonance, low efficiency; stress detected",
            Mood::Purposeful => "High purpose alignment; executing goal",
            Mood::EthicalCrisis => "Low virtue; fundamental values conflict",
            Mood::Flourishing => "All metric values high; system thriving",
        }
    }
}
