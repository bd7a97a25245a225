//! Per-process imitation context
//!
//! Built once at process attach and shared by reference with the attestation
//! and feature-query paths for the rest of the process lifetime.

use std::sync::Arc;

use super::applier::{apply, ApplyReport};
use super::features::FeatureSuppressor;
use super::guard::AttestationGuard;
use super::identity::IdentityContext;
use super::selector::{select, SpoofDecision};
use super::traits::{CallStackInspector, IdentityWriter, ProcessInfo};
use crate::config::Config;
use crate::Result;

/// Imitation state of one process
///
/// Immutable after [`PropImitation::attach`]; hand it to other threads through
/// an `Arc`, which publishes the committed decision to them.
pub struct PropImitation {
    identity: Option<IdentityContext>,
    decision: SpoofDecision,
    report: ApplyReport,
    guard: AttestationGuard,
    suppressor: FeatureSuppressor,
}

impl PropImitation {
    /// Resolve, select and apply in one pass.
    ///
    /// An unresolvable identity yields an inert context: nothing is written,
    /// attestation is allowed and feature queries pass through.
    pub fn attach(
        process: &dyn ProcessInfo,
        config: &Config,
        writer: &dyn IdentityWriter,
        inspector: Arc<dyn CallStackInspector>,
    ) -> Self {
        let identity = match IdentityContext::resolve(process) {
            Ok(identity) => Some(identity),
            Err(e) => {
                tracing::trace!("Skipping prop imitation: {}", e);
                None
            }
        };

        let decision = identity
            .as_ref()
            .map(|identity| select(identity, config))
            .unwrap_or_else(SpoofDecision::inert);

        let report = apply(&decision, writer);

        Self {
            guard: AttestationGuard::new(&decision, inspector),
            suppressor: FeatureSuppressor::new(&decision),
            identity,
            decision,
            report,
        }
    }

    /// Called right before a certificate chain is generated
    pub fn guard_key_attestation(&self) -> Result<()> {
        self.guard.guard_key_attestation()
    }

    /// Called with the platform's answer to a system feature query
    pub fn has_system_feature(&self, name: &str, def: bool) -> bool {
        self.suppressor.filter_feature(name, def)
    }

    pub fn identity(&self) -> Option<&IdentityContext> {
        self.identity.as_ref()
    }

    pub fn decision(&self) -> &SpoofDecision {
        &self.decision
    }

    /// Outcome of the attach-time write
    pub fn apply_report(&self) -> &ApplyReport {
        &self.report
    }
}
