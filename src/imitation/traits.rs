//! Host capability traits
//!
//! This module defines the interfaces the host platform implements so the
//! imitation policy stays independent of any in-process identity representation.

use super::profiles::IdentityField;

// ============================================================================
// Process Info
// ============================================================================

/// Process info trait
///
/// Reports who the running application instance is.
pub trait ProcessInfo: Send + Sync {
    /// Package name of the application, if known
    fn package_name(&self) -> Option<String>;

    /// Name of the current process, if known
    fn process_name(&self) -> Option<String>;
}

// ============================================================================
// Identity Writer
// ============================================================================

/// Identity writer trait
///
/// Overwrites one device identity field in the host's process-wide state.
pub trait IdentityWriter: Send + Sync {
    /// Set an identity field, failing when the field is missing or not writable
    fn set_identity_field(&self, field: IdentityField, value: &str) -> Result<(), crate::Error>;
}

// ============================================================================
// Call Stack Inspector
// ============================================================================

/// Call stack inspector trait
///
/// Searches the live call stack of the calling thread.
pub trait CallStackInspector: Send + Sync {
    /// Whether any frame's originating component name contains `marker`
    fn current_call_stack_contains(&self, marker: &str) -> bool;
}

impl<F> CallStackInspector for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn current_call_stack_contains(&self, marker: &str) -> bool {
        self(marker)
    }
}
