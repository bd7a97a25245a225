//! Key attestation gating

use std::sync::Arc;

use super::profiles::INTEGRITY_MARKER;
use super::selector::SpoofDecision;
use super::traits::CallStackInspector;
use crate::error::BlockReason;
use crate::{Error, Result};

/// Attestation guard
///
/// Vetoes certificate chain generation for the app-store client, and for the
/// security-check client while the integrity-check subsystem is on the stack.
pub struct AttestationGuard {
    is_security_check_client: bool,
    is_market_client: bool,
    inspector: Arc<dyn CallStackInspector>,
}

impl AttestationGuard {
    /// Create a new guard for a decided process
    pub fn new(decision: &SpoofDecision, inspector: Arc<dyn CallStackInspector>) -> Self {
        Self {
            is_security_check_client: decision.is_security_check_client,
            is_market_client: decision.is_market_client,
            inspector,
        }
    }

    /// Check a key attestation request.
    ///
    /// The stack is inspected on every call; the same process issues both
    /// guarded and unguarded requests depending on the initiating subsystem.
    pub fn guard_key_attestation(&self) -> Result<()> {
        let reason = if self.is_integrity_check_caller() {
            Some(BlockReason::IntegrityCheck)
        } else if self.is_market_client {
            Some(BlockReason::MarketClient)
        } else {
            None
        };

        match reason {
            Some(reason) => {
                tracing::debug!(
                    "Blocked key attestation is_gms={} is_finsky={}",
                    self.is_security_check_client,
                    self.is_market_client
                );
                Err(Error::attestation_blocked(reason))
            }
            None => Ok(()),
        }
    }

    fn is_integrity_check_caller(&self) -> bool {
        self.is_security_check_client
            && self.inspector.current_call_stack_contains(INTEGRITY_MARKER)
    }
}
