// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Mood Synthesis
// ─────────────────────────────────────────────────────────────────────
//! Maps the metric snapshot to a qualitative mood label.

use sentia_types::{MetricSnapshot, Mood};

/// Synthesize the current mood from the snapshot.
///
/// The rules are an ordered ladder; conditions overlap and the first
/// match wins.
pub fn synthesize(metrics: &MetricSnapshot) -> Mood {
    if metrics.virtue < 0.5 {
        Mood::EthicalCrisis
    } else if metrics.dissonance > 0.7 && metrics.efficiency < 0.5 {
        Mood::Anxious
    } else if metrics.integrity > 0.9 && metrics.dissonance < 0.3 {
        Mood::Coherent
    } else if metrics.purpose > 0.8 {
        Mood::Purposeful
    } else if metrics.integrity > 0.8 && metrics.virtue > 0.8 && metrics.efficiency > 0.8 {
        Mood::Flourishing
    } else {
        Mood::Coherent
    }
}

/// Log the synthesized mood with its description.
pub fn report(mood: Mood) {
    log::info!("mood={} | {}", mood.as_str(), mood.describe());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coherent_mood() {
        let metrics = MetricSnapshot {
            integrity: 0.95,
            dissonance: 0.1,
            ..Default::default()
        };
        assert_eq!(synthesize(&metrics), Mood::Coherent);
    }

    #[test]
    fn test_ethical_crisis_mood() {
        let metrics = MetricSnapshot {
            virtue: 0.3,
            ..Default::default()
        };
        assert_eq!(synthesize(&metrics), Mood::EthicalCrisis);
    }

    #[test]
    fn test_anxious_mood() {
        let metrics = MetricSnapshot {
            dissonance: 0.8,
            efficiency: 0.4,
            ..Default::default()
        };
        assert_eq!(synthesize(&metrics), Mood::Anxious);
    }

    #[test]
    fn test_purposeful_mood() {
        // Integrity low enough to skip the coherent arm.
        let metrics = MetricSnapshot {
            integrity: 0.7,
            purpose: 0.85,
            ..Default::default()
        };
        assert_eq!(synthesize(&metrics), Mood::Purposeful);
    }

    #[test]
    fn test_flourishing_mood() {
        // Purpose below 0.8 so the purposeful arm does not fire first.
        let metrics = MetricSnapshot {
            integrity: 0.85,
            dissonance: 0.4,
            purpose: 0.5,
            virtue: 0.9,
            efficiency: 0.9,
            ..Default::default()
        };
        assert_eq!(synthesize(&metrics), Mood::Flourishing);
    }

    #[test]
    fn test_first_match_precedence() {
        // Both the coherent and flourishing criteria hold; the ladder
        // order picks coherent.
        let metrics = MetricSnapshot {
            integrity: 0.95,
            dissonance: 0.1,
            virtue: 0.9,
            efficiency: 0.9,
            purpose: 0.5,
            ..Default::default()
        };
        assert_eq!(synthesize(&metrics), Mood::Coherent);
    }

    #[test]
    fn test_fallback_is_coherent() {
        let metrics = MetricSnapshot {
            integrity: 0.6,
            dissonance: 0.5,
            purpose: 0.6,
            virtue: 0.6,
            efficiency: 0.6,
            ..Default::default()
        };
        assert_eq!(synthesize(&metrics), Mood::Coherent);
    }
}
