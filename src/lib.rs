//! Prop-Imitation: device identity imitation policy engine
//!
//! This library decides which device identity a caller sees and gates key
//! attestation and system feature queries for specific caller identities.

pub mod error;
pub mod config;
pub mod logging;

pub mod imitation;

// Re-exports
pub use error::{BlockReason, Error, Result};

/// Prop-Imitation library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
