// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Sentia Kernel Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Type definitions, configuration, and error hierarchy for the
//! Sentia Kernel — the in-process governance core for Director-Class AI.

pub mod config;
pub mod error;
pub mod event;
pub mod metrics;

pub use config::SentiaConfig;
pub use error::{SentiaError, SentiaResult};
pub use event::{Event, GateReason, Outcome, Status};
pub use metrics::{MetricSnapshot, Mood, PowerTier, TaskComplexity};
