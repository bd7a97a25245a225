//! Identity context resolution

use super::traits::ProcessInfo;
use crate::{Error, Result};

/// Package/process pair identifying the running application instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityContext {
    package_name: String,
    process_name: String,
}

impl IdentityContext {
    /// Build a context from already known names
    pub fn new<P: Into<String>, Q: Into<String>>(package_name: P, process_name: Q) -> Self {
        Self {
            package_name: package_name.into(),
            process_name: process_name.into(),
        }
    }

    /// Resolve the identity of the current process.
    ///
    /// Fails with [`Error::UnresolvedIdentity`] when either name is missing or
    /// empty; callers treat that as "spoofing disabled" rather than a fault.
    pub fn resolve(process: &dyn ProcessInfo) -> Result<Self> {
        let package_name = process
            .package_name()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| Error::unresolved_identity("package name unavailable"))?;

        let process_name = process
            .process_name()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| Error::unresolved_identity("process name unavailable"))?;

        Ok(Self {
            package_name,
            process_name,
        })
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn process_name(&self) -> &str {
        &self.process_name
    }
}
