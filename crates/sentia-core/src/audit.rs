// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Hash-Chained Audit Log
// ─────────────────────────────────────────────────────────────────────
//! Append-only audit trail with a SHA-256 hash chain.
//!
//! Every record's digest covers a canonical serialization of its own
//! fields plus the previous record's hash, so any mutation of a sealed
//! record — or any reordering — breaks every digest downstream of it.
//!
//! Canonical form: the record (minus its own `hash` field) is passed
//! through `serde_json::Value`, whose object representation sorts keys,
//! then serialized to a compact JSON string. The digest is reproducible
//! across runs for identical field values.
//!
//! # Chain Invariants
//!
//! 1. `records[0].previous_hash` is `None`; for every later record,
//!    `records[i].previous_hash == Some(records[i-1].hash)`.
//! 2. Records are sealed exactly once, at append. The read API hands
//!    out borrows and clones only — no in-place edits.
//! 3. `verify` recomputes every digest and link from the stored fields;
//!    it never trusts a stored hash.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use sentia_types::metrics::utc_timestamp;
use sentia_types::{MetricSnapshot, SentiaError, SentiaResult};

/// Compute SHA-256 hex digest of a byte string.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// A sealed audit record. Immutable once hashed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Unique record id (UUID v4).
    pub id: String,
    /// RFC 3339 UTC seal time.
    pub timestamp: String,
    /// Subsystem that produced the record.
    pub actor: String,
    /// Action label or terminal decision.
    pub action: String,
    /// Metric snapshot at seal time.
    pub metrics: MetricSnapshot,
    /// Policy that produced a success decision, if any.
    pub policy: Option<String>,
    /// Safeguard protocol that forced a non-success outcome, if any.
    pub protocol: Option<String>,
    /// SHA-256 hex digest over the canonical fields below.
    pub hash: String,
    /// Hash of the preceding record; `None` for the first record.
    pub previous_hash: Option<String>,
}

impl AuditRecord {
    /// Recompute this record's digest from its own fields.
    ///
    /// Covers every field except `hash` itself, with `previous_hash`
    /// included, over the sorted-key canonical serialization.
    pub fn compute_hash(&self) -> SentiaResult<String> {
        let mut value = serde_json::to_value(self)
            .map_err(|e| SentiaError::Serialization(e.to_string()))?;
        if let Some(fields) = value.as_object_mut() {
            fields.remove("hash");
        }
        let canonical = serde_json::to_string(&value)
            .map_err(|e| SentiaError::Serialization(e.to_string()))?;
        Ok(sha256_hex(canonical.as_bytes()))
    }
}

/// Builder for the caller-supplied fields of a record; id, timestamp,
/// and the chain linkage are filled in at append.
pub struct AuditDraft {
    actor: String,
    action: String,
    metrics: MetricSnapshot,
    policy: Option<String>,
    protocol: Option<String>,
}

impl AuditDraft {
    pub fn new(
        actor: impl Into<String>,
        action: impl Into<String>,
        metrics: MetricSnapshot,
    ) -> Self {
        Self {
            actor: actor.into(),
            action: action.into(),
            metrics,
            policy: None,
            protocol: None,
        }
    }

    pub fn policy(mut self, policy: impl Into<String>) -> Self {
        self.policy = Some(policy.into());
        self
    }

    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }
}

/// Append-only sequence of hash-linked records.
#[derive(Debug, Default)]
pub struct AuditChain {
    records: Vec<AuditRecord>,
}

impl AuditChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash of the most recent record, if any.
    pub fn head(&self) -> Option<&str> {
        self.records.last().map(|r| r.hash.as_str())
    }

    /// Seal a draft and append it to the chain.
    pub fn append(&mut self, draft: AuditDraft) -> SentiaResult<&AuditRecord> {
        let mut record = AuditRecord {
            id: Uuid::new_v4().to_string(),
            timestamp: utc_timestamp(),
            actor: draft.actor,
            action: draft.action,
            metrics: draft.metrics,
            policy: draft.policy,
            protocol: draft.protocol,
            hash: String::new(),
            previous_hash: self.head().map(str::to_owned),
        };
        record.hash = record.compute_hash()?;
        log::info!("chain seal applied: {}", record.hash);
        self.records.push(record);
        Ok(self.records.last().expect("record just pushed"))
    }

    /// Borrow the full ordered sequence.
    pub fn records(&self) -> &[AuditRecord] {
        &self.records
    }

    /// Snapshot copy of the full sequence.
    pub fn export(&self) -> Vec<AuditRecord> {
        self.records.to_vec()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Recompute every digest and link; error names the first record
    /// that fails.
    pub fn verify(&self) -> SentiaResult<()> {
        let mut previous: Option<&str> = None;
        for (i, record) in self.records.iter().enumerate() {
            if record.previous_hash.as_deref() != previous {
                return Err(SentiaError::Chain(format!(
                    "record {i}: previous_hash does not match the preceding record"
                )));
            }
            let recomputed = record.compute_hash()?;
            if recomputed != record.hash {
                return Err(SentiaError::Chain(format!(
                    "record {i}: stored hash does not match recomputed digest"
                )));
            }
            previous = Some(record.hash.as_str());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(action: &str) -> AuditDraft {
        AuditDraft::new("safeguard", action, MetricSnapshot::default())
    }

    #[test]
    fn test_hash_is_sha256_hex() {
        let mut chain = AuditChain::new();
        let record = chain.append(draft("TEST_ACTION")).unwrap();
        assert_eq!(record.hash.len(), 64);
        assert!(record.hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_first_record_has_no_previous() {
        let mut chain = AuditChain::new();
        chain.append(draft("FIRST")).unwrap();
        assert!(chain.records()[0].previous_hash.is_none());
    }

    #[test]
    fn test_chain_links() {
        let mut chain = AuditChain::new();
        for i in 0..5 {
            chain.append(draft(&format!("ACTION_{i}"))).unwrap();
        }
        let records = chain.records();
        for i in 1..records.len() {
            assert_eq!(
                records[i].previous_hash.as_deref(),
                Some(records[i - 1].hash.as_str())
            );
        }
    }

    #[test]
    fn test_stored_hash_matches_recomputation() {
        let mut chain = AuditChain::new();
        for i in 0..3 {
            chain.append(draft(&format!("ACTION_{i}"))).unwrap();
        }
        for record in chain.records() {
            assert_eq!(record.compute_hash().unwrap(), record.hash);
        }
    }

    #[test]
    fn test_hash_deterministic_for_fixed_fields() {
        let record = AuditRecord {
            id: "fixed-id".to_string(),
            timestamp: "2026-01-01T00:00:00Z".to_string(),
            actor: "safeguard".to_string(),
            action: "TEST".to_string(),
            metrics: MetricSnapshot {
                timestamp: "2026-01-01T00:00:00Z".to_string(),
                ..Default::default()
            },
            policy: None,
            protocol: Some("virtue_floor".to_string()),
            hash: String::new(),
            previous_hash: None,
        };
        assert_eq!(
            record.compute_hash().unwrap(),
            record.compute_hash().unwrap()
        );
    }

    #[test]
    fn test_hash_covers_previous_hash() {
        let mut a = AuditRecord {
            id: "fixed-id".to_string(),
            timestamp: "2026-01-01T00:00:00Z".to_string(),
            actor: "safeguard".to_string(),
            action: "TEST".to_string(),
            metrics: MetricSnapshot {
                timestamp: "2026-01-01T00:00:00Z".to_string(),
                ..Default::default()
            },
            policy: None,
            protocol: None,
            hash: String::new(),
            previous_hash: None,
        };
        let without_previous = a.compute_hash().unwrap();
        a.previous_hash = Some("ff".repeat(32));
        assert_ne!(a.compute_hash().unwrap(), without_previous);
    }

    #[test]
    fn test_verify_accepts_valid_chain() {
        let mut chain = AuditChain::new();
        for i in 0..4 {
            chain.append(draft(&format!("ACTION_{i}"))).unwrap();
        }
        assert!(chain.verify().is_ok());
    }

    #[test]
    fn test_verify_rejects_tampered_record() {
        let mut chain = AuditChain::new();
        chain.append(draft("ORIGINAL")).unwrap();
        chain.append(draft("SECOND")).unwrap();
        chain.records[0].action = "REWRITTEN".to_string();
        assert!(chain.verify().is_err());
    }

    #[test]
    fn test_verify_rejects_broken_link() {
        let mut chain = AuditChain::new();
        chain.append(draft("A")).unwrap();
        chain.append(draft("B")).unwrap();
        chain.records[1].previous_hash = Some("00".repeat(32));
        assert!(chain.verify().is_err());
    }

    #[test]
    fn test_export_is_a_copy() {
        let mut chain = AuditChain::new();
        chain.append(draft("A")).unwrap();
        let mut exported = chain.export();
        exported[0].action = "MUTATED".to_string();
        assert_eq!(chain.records()[0].action, "A");
        assert!(chain.verify().is_ok());
    }

    #[test]
    fn test_draft_builder_fields() {
        let mut chain = AuditChain::new();
        let record = chain
            .append(
                AuditDraft::new("arbiter", "HELP_USER", MetricSnapshot::default())
                    .policy("action_scorer")
                    .protocol("none"),
            )
            .unwrap();
        assert_eq!(record.actor, "arbiter");
        assert_eq!(record.policy.as_deref(), Some("action_scorer"));
        assert_eq!(record.protocol.as_deref(), Some("none"));
    }
}
