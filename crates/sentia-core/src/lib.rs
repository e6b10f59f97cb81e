// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Sentia Kernel Core Engine
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Safeguard gates, metabolic routing, action scoring, and the
//! hash-chained audit log behind a single `process` entry point.
//!
//! # Pipeline Invariants
//!
//! 1. **Gate order is fixed**: virtue floor → golden thread → harm
//!    directive. The first failure decides the outcome and no later
//!    gate runs.
//!
//! 2. **Every terminal outcome is sealed**: abort, block, and success
//!    each append exactly one record to the audit chain, and for every
//!    record after the first, `previous_hash` equals the preceding
//!    record's digest.
//!
//! 3. **One lock, no suspension points**: `process` holds the kernel
//!    mutex for the whole pipeline; calls serialize and every step is
//!    bounded synchronous computation over in-memory data.
//!
//! 4. **The host probe is advisory**: power gauge reads never block,
//!    never fail the pipeline, and fall back to last-known values.

pub mod audit;
pub mod gates;
pub mod kernel;
pub mod mood;
pub mod policy;
pub mod power;
pub mod router;
pub mod scorer;

pub use audit::{AuditChain, AuditDraft, AuditRecord};
pub use kernel::{KernelState, SentiaKernel};
pub use policy::{DirectiveEnforcer, Violation, DIRECTIVES};
pub use power::{ExternalPowerProbe, HostPowerProbe, PowerProbe, PowerSample, StaticPowerProbe};
pub use router::MetabolicRouter;
pub use scorer::ActionScorer;
