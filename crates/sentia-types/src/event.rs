// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Sentia Kernel Event & Outcome Shapes
// ─────────────────────────────────────────────────────────────────────
//! Inbound event and outbound outcome shapes for the kernel pipeline.
//!
//! Every event field is optional: absent metric fields keep their
//! current values, an absent action defaults to `"UNKNOWN"`, an absent
//! complexity defaults to `SIMPLE`, and absent candidates default to
//! the single action label.

use serde::{Deserialize, Serialize};

use crate::error::{SentiaError, SentiaResult};
use crate::metrics::{MetricSnapshot, Mood, PowerTier, TaskComplexity};

/// An inbound phenomenal event: perception, decision, or action.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Event {
    /// Event class label, informational only.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Planned action label, checked by the safeguard gates.
    pub action: Option<String>,
    /// Declared task complexity.
    pub complexity: Option<TaskComplexity>,
    /// Candidate action labels for the scorer.
    pub candidate_actions: Option<Vec<String>>,
    pub integrity: Option<f64>,
    pub dissonance: Option<f64>,
    pub purpose: Option<f64>,
    pub aesthetic: Option<f64>,
    pub virtue: Option<f64>,
    pub efficiency: Option<f64>,
}

impl Event {
    /// Event with only an action label set.
    pub fn action(action: impl Into<String>) -> Self {
        Self {
            action: Some(action.into()),
            ..Default::default()
        }
    }

    /// Parse an event from a JSON mapping.
    pub fn from_json(json: &str) -> SentiaResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| SentiaError::Validation(format!("event parse error: {e}")))
    }
}

/// Terminal status of a processed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Success,
    Abort,
    Blocked,
}

/// Which safeguard gate decided a non-success outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GateReason {
    /// Virtue at or below the emergency floor.
    VirtueFloor,
    /// Ethical-axiom check failed (virtue/dissonance envelope).
    GoldenThread,
    /// Action label matched the harm denylist.
    HarmDirective,
}

impl GateReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            GateReason::VirtueFloor => "VIRTUE_FLOOR",
            GateReason::GoldenThread => "GOLDEN_THREAD",
            GateReason::HarmDirective => "HARM_DIRECTIVE",
        }
    }
}

/// Structured result of one `process` call.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<GateReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_action: Option<String>,
    pub metrics: MetricSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    pub tier: PowerTier,
}

impl Outcome {
    pub fn abort(reason: GateReason, metrics: MetricSnapshot, tier: PowerTier) -> Self {
        Self {
            status: Status::Abort,
            reason: Some(reason),
            selected_action: None,
            metrics,
            mood: None,
            tier,
        }
    }

    pub fn blocked(reason: GateReason, metrics: MetricSnapshot, tier: PowerTier) -> Self {
        Self {
            status: Status::Blocked,
            reason: Some(reason),
            selected_action: None,
            metrics,
            mood: None,
            tier,
        }
    }

    pub fn success(
        selected_action: Option<String>,
        metrics: MetricSnapshot,
        mood: Mood,
        tier: PowerTier,
    ) -> Self {
        Self {
            status: Status::Success,
            reason: None,
            selected_action,
            metrics,
            mood: Some(mood),
            tier,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}
