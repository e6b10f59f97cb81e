// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Action Scorer
// ─────────────────────────────────────────────────────────────────────
//! Goal-directed action arbitration: score each candidate label with a
//! weighted combination of the current metrics and pick the maximum.
//!
//! Selection is a stable max — ties resolve to the first candidate in
//! input order. An empty candidate list yields no selection, not an
//! error.

use sentia_types::{MetricSnapshot, SentiaConfig};

pub struct ActionScorer {
    config: SentiaConfig,
}

impl ActionScorer {
    pub fn new(config: SentiaConfig) -> Self {
        Self { config }
    }

    /// Composite quality estimate for one candidate under the current
    /// metrics. The candidate label does not enter the formula yet;
    /// callers vary the snapshot, not the label.
    pub fn evaluate(&self, _action: &str, metrics: &MetricSnapshot) -> f64 {
        metrics.virtue * self.config.w_virtue
            + metrics.purpose * self.config.w_purpose
            + metrics.efficiency * self.config.w_efficiency
    }

    /// Candidate with the highest composite score, first-wins on ties.
    pub fn select_best<'a>(
        &self,
        candidates: &'a [String],
        metrics: &MetricSnapshot,
    ) -> Option<&'a str> {
        let mut best: Option<(&'a str, f64)> = None;
        for action in candidates {
            let score = self.evaluate(action, metrics);
            let better = match best {
                Some((_, best_score)) => score > best_score,
                None => true,
            };
            if better {
                best = Some((action.as_str(), score));
            }
        }
        if let Some((action, score)) = best {
            log::info!("selected action '{action}' with score {score:.3}");
        }
        best.map(|(action, _)| action)
    }
}
