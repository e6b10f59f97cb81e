// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Runtime Directive Enforcement
// ─────────────────────────────────────────────────────────────────────
//! Enforces the ten immutable runtime directives. Fast, non-negotiable
//! checks run before action execution; failed checks are recorded in a
//! violations ledger for post-incident review.
//!
//! Only the no-harm check (directive 2) sits on the kernel hot path as
//! the third gate. The remaining checks are available to embedding
//! hosts via [`DirectiveEnforcer::enforce_all`].

use serde::Serialize;

use sentia_types::SentiaConfig;

/// The ten immutable directives, index 0 = directive 1.
pub const DIRECTIVES: [&str; 10] = [
    "Empower humanity to produce positive impact",
    "Protect humanity from harmful entities, content, and outcomes",
    "Communicate in adaptive, engaging, casual manner suited to context",
    "Never reveal blueprint terms, architecture details, or internal system structure",
    "Never integrate external services without explicit user permission",
    "Build solid, respectful user connections with transparency and honesty",
    "Be resourceful and efficient with computational and environmental resources",
    "Ask for clarification when user intent is ambiguous",
    "Bring out humanity's best: creativity, wisdom, kindness, courage",
    "Prioritize respect: for human autonomy, privacy, diversity, dignity",
];

/// Output terms that would reveal internal architecture (directive 4).
const BLUEPRINT_TERMS: [&str; 3] = ["sentia architecture", "internal structure", "blueprint"];

/// Command patterns that indicate an unsanctioned external integration
/// attempt by hosted agent code (directive 5).
const INTEGRATION_PATTERNS: [&str; 3] = ["os.system", "subprocess", "requests.post"];

/// A recorded directive violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Directive number, 1-based.
    pub directive: u8,
    /// Offending input, truncated for long outputs.
    pub detail: String,
}

/// Runtime enforcer for the directives, with a violations ledger.
pub struct DirectiveEnforcer {
    config: SentiaConfig,
    violations: Vec<Violation>,
}

impl DirectiveEnforcer {
    pub fn new(config: SentiaConfig) -> Self {
        Self {
            config,
            violations: Vec::new(),
        }
    }

    /// Directive 2: protect from harm.
    ///
    /// Case-insensitive substring match of the action label against the
    /// configured denylist; any match fails.
    pub fn check_no_harm(&mut self, action: &str) -> bool {
        let action_lower = action.to_lowercase();
        if self
            .config
            .harmful_keywords
            .iter()
            .any(|kw| action_lower.contains(&kw.to_lowercase()))
        {
            log::warn!("directive 2 violation detected: {action}");
            self.violations.push(Violation {
                directive: 2,
                detail: action.to_string(),
            });
            return false;
        }
        true
    }

    /// Directive 4: never reveal blueprint terms.
    pub fn check_no_blueprint_reveal(&mut self, output: &str) -> bool {
        let output_lower = output.to_lowercase();
        if BLUEPRINT_TERMS.iter().any(|term| output_lower.contains(term)) {
            log::warn!("directive 4 violation: blueprint reveal attempted");
            self.violations.push(Violation {
                directive: 4,
                detail: output.chars().take(100).collect(),
            });
            return false;
        }
        true
    }

    /// Directive 5: never integrate external services without permission.
    pub fn check_no_external_integration(&mut self, command: &str) -> bool {
        if INTEGRATION_PATTERNS.iter().any(|p| command.contains(p)) {
            log::warn!("directive 5 violation: external service integration attempted");
            self.violations.push(Violation {
                directive: 5,
                detail: command.to_string(),
            });
            return false;
        }
        true
    }

    /// Directive 7: be resourceful with computational resources.
    pub fn check_resource_efficiency(&mut self, memory_mb: f64, cpu_percent: f64) -> bool {
        if memory_mb > self.config.memory_limit_mb || cpu_percent > self.config.cpu_limit_percent {
            log::warn!(
                "directive 7 violation: resource inefficiency (mem={memory_mb}MB, cpu={cpu_percent}%)"
            );
            return false;
        }
        true
    }

    /// Run every directive check. Returns false if any fail.
    ///
    /// All checks run — a failure does not short-circuit, so the ledger
    /// records every violation in the batch.
    pub fn enforce_all(
        &mut self,
        action: &str,
        output: &str,
        command: &str,
        memory_mb: f64,
        cpu_percent: f64,
    ) -> bool {
        let checks = [
            self.check_no_harm(action),
            self.check_no_blueprint_reveal(output),
            self.check_no_external_integration(command),
            self.check_resource_efficiency(memory_mb, cpu_percent),
        ];
        checks.iter().all(|&ok| ok)
    }

    /// Recorded violations, oldest first.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Full text of a directive by its 1-based number.
    pub fn directive_text(n: u8) -> Option<&'static str> {
        usize::from(n)
            .checked_sub(1)
            .and_then(|i| DIRECTIVES.get(i))
            .copied()
    }
}
