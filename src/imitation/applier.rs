//! Property override application

use super::profiles::IdentityField;
use super::selector::SpoofDecision;
use super::traits::IdentityWriter;

/// Result of committing a decision to the device identity state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Fields written successfully
    pub applied: Vec<IdentityField>,
    /// Fields the host refused, with the cause
    pub failed: Vec<(IdentityField, String)>,
}

impl ApplyReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Overwrite every field of the decision's outcome through `writer`.
///
/// A field the host cannot write is logged and skipped; the rest of the
/// batch is still attempted. Writes are plain overwrites, so applying the
/// same decision again yields the same state.
pub fn apply(decision: &SpoofDecision, writer: &dyn IdentityWriter) -> ApplyReport {
    let mut report = ApplyReport::default();

    for (field, value) in decision.outcome.overrides() {
        tracing::debug!("Setting prop {} to {}", field, value);

        match writer.set_identity_field(field, value) {
            Ok(()) => report.applied.push(field),
            Err(e) => {
                tracing::error!(field = %field, error = %e, "Failed to set prop");
                report.failed.push((field, e.to_string()));
            }
        }
    }

    report
}
