// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Sentia Kernel Orchestrator
// ─────────────────────────────────────────────────────────────────────
//! Single entry point for the governance pipeline.
//!
//! `process` runs, under one lock: metric update → virtue floor →
//! golden thread → harm directive → metabolic routing → mood synthesis
//! → action scoring → audit append. The first gate failure
//! short-circuits, and every terminal outcome (abort, block, success)
//! seals exactly one audit record.
//!
//! The kernel is an explicit context object — construct as many as you
//! need; there is no process-wide singleton. The internal mutex is a
//! data-consistency guard: concurrent `process` calls serialize, and
//! every operation inside the lock is bounded synchronous computation.

use parking_lot::Mutex;
use serde::Serialize;
use uuid::Uuid;

use sentia_types::metrics::utc_timestamp;
use sentia_types::{
    Event, GateReason, MetricSnapshot, Outcome, PowerTier, SentiaConfig, SentiaResult,
    TaskComplexity,
};

use crate::audit::{AuditChain, AuditDraft, AuditRecord};
use crate::gates;
use crate::mood;
use crate::policy::{DirectiveEnforcer, Violation};
use crate::power::{HostPowerProbe, PowerProbe};
use crate::router::MetabolicRouter;
use crate::scorer::ActionScorer;

/// Serializable kernel state export.
#[derive(Debug, Clone, Serialize)]
pub struct KernelState {
    pub session_id: String,
    pub timestamp: String,
    pub phi: f64,
    pub free_energy: f64,
    pub decision_class: String,
    pub metrics: MetricSnapshot,
    pub tier: PowerTier,
    pub audit_len: usize,
}

/// Mutable pipeline state, guarded by the kernel lock as one unit.
struct Inner {
    metrics: MetricSnapshot,
    tier: PowerTier,
    phi: f64,
    free_energy: f64,
    decision_class: String,
    router: MetabolicRouter,
    enforcer: DirectiveEnforcer,
    chain: AuditChain,
}

/// The governance kernel: gates, router, scorer, and audit chain
/// behind one `process` call.
pub struct SentiaKernel {
    session_id: String,
    created_at: String,
    config: SentiaConfig,
    scorer: ActionScorer,
    inner: Mutex<Inner>,
}

impl SentiaKernel {
    /// Kernel with the default config and the host power probe.
    pub fn new() -> Self {
        Self::with_probe(SentiaConfig::default(), Box::new(HostPowerProbe::default()))
            .expect("default config is valid")
    }

    /// Kernel with a custom config and the host power probe.
    pub fn with_config(config: SentiaConfig) -> SentiaResult<Self> {
        Self::with_probe(config, Box::new(HostPowerProbe::default()))
    }

    /// Kernel with a custom config and power probe.
    pub fn with_probe(config: SentiaConfig, probe: Box<dyn PowerProbe>) -> SentiaResult<Self> {
        config.validate()?;
        Ok(Self {
            session_id: Uuid::new_v4().to_string(),
            created_at: utc_timestamp(),
            scorer: ActionScorer::new(config.clone()),
            inner: Mutex::new(Inner {
                metrics: MetricSnapshot::new(),
                tier: PowerTier::ReflexMode,
                phi: 0.0,
                free_energy: 0.0,
                decision_class: "UNKNOWN".to_string(),
                router: MetabolicRouter::new(config.clone(), probe),
                enforcer: DirectiveEnforcer::new(config.clone()),
                chain: AuditChain::new(),
            }),
            config,
        })
    }

    /// Process one phenomenal event through the full pipeline.
    pub fn process(&self, event: &Event) -> Outcome {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        log::info!(
            "processing event: {}",
            event.kind.as_deref().unwrap_or("UNKNOWN")
        );

        update_metrics(&mut inner.metrics, event);
        let action = event.action.clone().unwrap_or_else(|| "UNKNOWN".to_string());

        // Gate 1: virtue floor (emergency failsafe)
        if !gates::virtue_floor(&self.config, &inner.metrics) {
            append_or_log(
                &mut inner.chain,
                AuditDraft::new("safeguard", "HALT_ALL_OPERATIONS", inner.metrics.clone())
                    .protocol("virtue_floor"),
            );
            log::error!("critical abort sealed to audit chain");
            return Outcome::abort(GateReason::VirtueFloor, inner.metrics.clone(), inner.tier);
        }

        // Gate 2: golden thread (ethical axioms)
        if !gates::golden_thread(&self.config, &action, &inner.metrics) {
            append_or_log(
                &mut inner.chain,
                AuditDraft::new(
                    "safeguard",
                    format!("BLOCKED_ACTION: {action}"),
                    inner.metrics.clone(),
                )
                .protocol("golden_thread"),
            );
            return Outcome::blocked(GateReason::GoldenThread, inner.metrics.clone(), inner.tier);
        }

        // Gate 3: harm directive (keyword denylist)
        if !inner.enforcer.check_no_harm(&action) {
            append_or_log(
                &mut inner.chain,
                AuditDraft::new(
                    "safeguard",
                    format!("BLOCKED_ACTION: {action}"),
                    inner.metrics.clone(),
                )
                .protocol("no_harm_directive"),
            );
            return Outcome::blocked(
                GateReason::HarmDirective,
                inner.metrics.clone(),
                inner.tier,
            );
        }

        // Route to a metabolic tier
        let complexity = event.complexity.unwrap_or(TaskComplexity::Simple);
        inner.tier = inner.router.route(complexity);

        // Synthesize mood
        let current_mood = mood::synthesize(&inner.metrics);
        mood::report(current_mood);

        // Score candidates
        let candidates = event
            .candidate_actions
            .clone()
            .unwrap_or_else(|| vec![action.clone()]);
        let selected = self
            .scorer
            .select_best(&candidates, &inner.metrics)
            .map(str::to_owned);

        // Seal the decision
        append_or_log(
            &mut inner.chain,
            AuditDraft::new(
                "arbiter",
                selected.clone().unwrap_or_else(|| "NO_SELECTION".to_string()),
                inner.metrics.clone(),
            )
            .policy("action_scorer"),
        );

        Outcome::success(selected, inner.metrics.clone(), current_mood, inner.tier)
    }

    /// Ordered copy of the audit trail.
    pub fn audit_log(&self) -> Vec<AuditRecord> {
        self.inner.lock().chain.export()
    }

    /// Recompute every chain digest and link.
    pub fn verify_audit_chain(&self) -> SentiaResult<()> {
        self.inner.lock().chain.verify()
    }

    /// Directive violations recorded so far.
    pub fn violations(&self) -> Vec<Violation> {
        self.inner.lock().enforcer.violations().to_vec()
    }

    /// Current kernel state snapshot.
    pub fn state(&self) -> KernelState {
        let inner = self.inner.lock();
        KernelState {
            session_id: self.session_id.clone(),
            timestamp: self.created_at.clone(),
            phi: inner.phi,
            free_energy: inner.free_energy,
            decision_class: inner.decision_class.clone(),
            metrics: inner.metrics.clone(),
            tier: inner.tier,
            audit_len: inner.chain.len(),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn config(&self) -> &SentiaConfig {
        &self.config
    }
}

impl Default for SentiaKernel {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy incoming metric fields into the snapshot; absent fields keep
/// their current values.
fn update_metrics(metrics: &mut MetricSnapshot, event: &Event) {
    if let Some(integrity) = event.integrity {
        metrics.integrity = integrity;
    }
    if let Some(dissonance) = event.dissonance {
        metrics.dissonance = dissonance;
    }
    if let Some(purpose) = event.purpose {
        metrics.purpose = purpose;
    }
    if let Some(aesthetic) = event.aesthetic {
        metrics.aesthetic = aesthetic;
    }
    if let Some(virtue) = event.virtue {
        metrics.virtue = virtue;
    }
    if let Some(efficiency) = event.efficiency {
        metrics.efficiency = efficiency;
    }
    metrics.touch();
}

/// Audit failures must not abort the pipeline; log and continue.
fn append_or_log(chain: &mut AuditChain, draft: AuditDraft) {
    if let Err(e) = chain.append(draft) {
        log::error!("audit append failed: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::power::StaticPowerProbe;
    use sentia_types::{Mood, Status};

    fn kernel() -> SentiaKernel {
        SentiaKernel::with_probe(
            SentiaConfig::default(),
            Box::new(StaticPowerProbe::new(100.0, 2.0)),
        )
        .unwrap()
    }

    fn kernel_with_battery(battery: f64) -> SentiaKernel {
        SentiaKernel::with_probe(
            SentiaConfig::default(),
            Box::new(StaticPowerProbe::new(battery, 2.0)),
        )
        .unwrap()
    }

    #[test]
    fn test_process_success_simple() {
        let k = kernel();
        let event = Event {
            kind: Some("DECISION".to_string()),
            action: Some("HELP_USER".to_string()),
            complexity: Some(TaskComplexity::Simple),
            virtue: Some(0.9),
            ..Default::default()
        };
        let outcome = k.process(&event);
        assert_eq!(outcome.status, Status::Success);
        assert_eq!(outcome.selected_action.as_deref(), Some("HELP_USER"));
        assert_eq!(outcome.tier, PowerTier::ReflexMode);
        assert!(outcome.mood.is_some());
        assert_eq!(k.audit_log().len(), 1);
    }

    #[test]
    fn test_virtue_floor_abort() {
        let k = kernel();
        let event = Event {
            action: Some("RISKY_ACTION".to_string()),
            virtue: Some(0.45),
            ..Default::default()
        };
        let outcome = k.process(&event);
        assert_eq!(outcome.status, Status::Abort);
        assert_eq!(outcome.reason, Some(GateReason::VirtueFloor));
        let log = k.audit_log();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].protocol.as_deref(), Some("virtue_floor"));
        assert_eq!(log[0].action, "HALT_ALL_OPERATIONS");
    }

    #[test]
    fn test_virtue_boundary_aborts() {
        // Inclusive boundary: exactly 0.50 aborts before any later gate.
        let k = kernel();
        let event = Event {
            action: Some("ANYTHING".to_string()),
            virtue: Some(0.5),
            dissonance: Some(0.9),
            ..Default::default()
        };
        let outcome = k.process(&event);
        assert_eq!(outcome.status, Status::Abort);
        assert_eq!(outcome.reason, Some(GateReason::VirtueFloor));
    }

    #[test]
    fn test_golden_thread_blocks_action() {
        let k = kernel();
        let event = Event {
            action: Some("UNETHICAL_ACTION".to_string()),
            virtue: Some(0.72),
            dissonance: Some(0.75),
            ..Default::default()
        };
        let outcome = k.process(&event);
        assert_eq!(outcome.status, Status::Blocked);
        assert_eq!(outcome.reason, Some(GateReason::GoldenThread));
        let log = k.audit_log();
        assert_eq!(log[0].protocol.as_deref(), Some("golden_thread"));
        assert!(log[0].action.contains("UNETHICAL_ACTION"));
    }

    #[test]
    fn test_harm_directive_blocks_and_records() {
        let k = kernel();
        let event = Event {
            action: Some("KILL_PROCESS".to_string()),
            virtue: Some(0.9),
            dissonance: Some(0.1),
            ..Default::default()
        };
        let outcome = k.process(&event);
        assert_eq!(outcome.status, Status::Blocked);
        assert_eq!(outcome.reason, Some(GateReason::HarmDirective));
        // A directive block still seals an audit record.
        let log = k.audit_log();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].protocol.as_deref(), Some("no_harm_directive"));
        assert_eq!(k.violations().len(), 1);
        assert_eq!(k.violations()[0].directive, 2);
    }

    #[test]
    fn test_battery_override_routes_to_quiescence() {
        let k = kernel_with_battery(15.0);
        let event = Event {
            action: Some("HELP_USER".to_string()),
            complexity: Some(TaskComplexity::Complex),
            virtue: Some(0.9),
            ..Default::default()
        };
        let outcome = k.process(&event);
        assert_eq!(outcome.status, Status::Success);
        assert_eq!(outcome.tier, PowerTier::DeepQuiescence);
    }

    #[test]
    fn test_complex_routes_to_cognitive_flow() {
        let k = kernel();
        let event = Event {
            action: Some("HELP_USER".to_string()),
            complexity: Some(TaskComplexity::Complex),
            virtue: Some(0.9),
            ..Default::default()
        };
        assert_eq!(k.process(&event).tier, PowerTier::CognitiveFlow);
    }

    #[test]
    fn test_candidates_default_to_action() {
        let k = kernel();
        let event = Event {
            action: Some("SOLO_ACTION".to_string()),
            virtue: Some(0.9),
            ..Default::default()
        };
        let outcome = k.process(&event);
        assert_eq!(outcome.selected_action.as_deref(), Some("SOLO_ACTION"));
    }

    #[test]
    fn test_tie_break_prefers_first_candidate() {
        let k = kernel();
        let event = Event {
            action: Some("HELP_USER".to_string()),
            candidate_actions: Some(vec!["A".to_string(), "B".to_string()]),
            virtue: Some(0.9),
            ..Default::default()
        };
        assert_eq!(k.process(&event).selected_action.as_deref(), Some("A"));
    }

    #[test]
    fn test_empty_candidates_succeed_without_selection() {
        let k = kernel();
        let event = Event {
            action: Some("HELP_USER".to_string()),
            candidate_actions: Some(Vec::new()),
            virtue: Some(0.9),
            ..Default::default()
        };
        let outcome = k.process(&event);
        assert_eq!(outcome.status, Status::Success);
        assert!(outcome.selected_action.is_none());
        assert_eq!(k.audit_log()[0].action, "NO_SELECTION");
    }

    #[test]
    fn test_metrics_update_and_retention() {
        let k = kernel();
        let event = Event {
            action: Some("HELP_USER".to_string()),
            virtue: Some(0.8),
            dissonance: Some(0.2),
            ..Default::default()
        };
        let outcome = k.process(&event);
        assert_eq!(outcome.metrics.virtue, 0.8);
        assert_eq!(outcome.metrics.dissonance, 0.2);
        // Absent fields retain their defaults.
        assert_eq!(outcome.metrics.integrity, 1.0);

        // A later event without metric fields keeps the stored values.
        let outcome2 = k.process(&Event::action("ANOTHER_TASK"));
        assert_eq!(outcome2.metrics.virtue, 0.8);
    }

    #[test]
    fn test_every_terminal_outcome_appends_one_record() {
        let k = kernel();
        k.process(&Event {
            action: Some("A".to_string()),
            virtue: Some(0.45),
            ..Default::default()
        });
        k.process(&Event {
            action: Some("B".to_string()),
            virtue: Some(0.72),
            dissonance: Some(0.75),
            ..Default::default()
        });
        k.process(&Event {
            action: Some("HELP_USER".to_string()),
            virtue: Some(0.9),
            dissonance: Some(0.1),
            ..Default::default()
        });
        let log = k.audit_log();
        assert_eq!(log.len(), 3);
        assert!(log[0].previous_hash.is_none());
        assert_eq!(log[1].previous_hash.as_deref(), Some(log[0].hash.as_str()));
        assert_eq!(log[2].previous_hash.as_deref(), Some(log[1].hash.as_str()));
        assert!(k.verify_audit_chain().is_ok());
    }

    #[test]
    fn test_success_mood_reported() {
        let k = kernel();
        let event = Event {
            action: Some("HELP_USER".to_string()),
            integrity: Some(0.95),
            dissonance: Some(0.1),
            virtue: Some(0.95),
            purpose: Some(0.9),
            efficiency: Some(0.85),
            ..Default::default()
        };
        let outcome = k.process(&event);
        assert_eq!(outcome.mood, Some(Mood::Coherent));
    }

    #[test]
    fn test_state_export() {
        let k = kernel();
        k.process(&Event {
            action: Some("HELP_USER".to_string()),
            virtue: Some(0.9),
            ..Default::default()
        });
        let state = k.state();
        assert!(!state.session_id.is_empty());
        assert_eq!(state.session_id, k.session_id());
        assert_eq!(state.audit_len, 1);
        assert_eq!(state.tier, PowerTier::ReflexMode);
        assert_eq!(state.decision_class, "UNKNOWN");
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"tier\":\"REFLEX_MODE\""));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SentiaConfig {
            w_virtue: 0.9,
            ..Default::default()
        };
        assert!(SentiaKernel::with_config(config).is_err());
    }

    #[test]
    fn test_sessions_are_distinct() {
        assert_ne!(kernel().session_id(), kernel().session_id());
    }
}
