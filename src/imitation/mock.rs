//! In-memory host implementations for testing
//!
//! This module provides fake host capabilities for development and testing.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::RwLock;

use super::profiles::IdentityField;
use super::traits::*;
use crate::Error;

/// Fixed process identity
#[derive(Debug, Clone, Default)]
pub struct StaticProcessInfo {
    package_name: Option<String>,
    process_name: Option<String>,
}

impl StaticProcessInfo {
    /// Create process info reporting both names
    pub fn new<P: Into<String>, Q: Into<String>>(package_name: P, process_name: Q) -> Self {
        Self {
            package_name: Some(package_name.into()),
            process_name: Some(process_name.into()),
        }
    }

    /// Process info that reports no names at all
    pub fn unknown() -> Self {
        Self::default()
    }
}

impl ProcessInfo for StaticProcessInfo {
    fn package_name(&self) -> Option<String> {
        self.package_name.clone()
    }

    fn process_name(&self) -> Option<String> {
        self.process_name.clone()
    }
}

/// In-memory device identity state
#[derive(Debug, Default)]
pub struct InMemoryIdentity {
    fields: RwLock<BTreeMap<IdentityField, String>>,
    locked: BTreeSet<IdentityField>,
}

impl InMemoryIdentity {
    /// Create identity state seeded with real device values
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = (IdentityField, S)>,
        S: Into<String>,
    {
        Self {
            fields: RwLock::new(fields.into_iter().map(|(f, v)| (f, v.into())).collect()),
            locked: BTreeSet::new(),
        }
    }

    /// Refuse writes to `field`, as a platform lacking it would
    pub fn with_locked(mut self, field: IdentityField) -> Self {
        self.locked.insert(field);
        self
    }

    /// Current value of a field
    pub fn get(&self, field: IdentityField) -> Option<String> {
        self.read().get(&field).cloned()
    }

    /// Copy of the whole state
    pub fn snapshot(&self) -> BTreeMap<IdentityField, String> {
        self.read().clone()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, BTreeMap<IdentityField, String>> {
        self.fields.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl IdentityWriter for InMemoryIdentity {
    fn set_identity_field(&self, field: IdentityField, value: &str) -> Result<(), Error> {
        if self.locked.contains(&field) {
            return Err(Error::field_unavailable(field.as_str(), "field is not writable"));
        }

        let mut fields = self.fields.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        fields.insert(field, value.to_string());
        Ok(())
    }
}

/// Call stack made of a fixed list of frame component names
#[derive(Debug, Clone, Default)]
pub struct StaticCallStack {
    frames: Vec<String>,
}

impl StaticCallStack {
    pub fn new<I, S>(frames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            frames: frames.into_iter().map(Into::into).collect(),
        }
    }
}

impl CallStackInspector for StaticCallStack {
    fn current_call_stack_contains(&self, marker: &str) -> bool {
        self.frames.iter().any(|frame| frame.contains(marker))
    }
}
