//! # Prop imitation engine
//!
//! Decides, once per process, which device identity a caller should see, and
//! gates key attestation and system feature queries on that decision.
//!
//! ## Flow
//! 1. `identity`: resolve package and process name at process attach
//! 2. `selector`: pick at most one override from a fixed priority chain
//! 3. `applier`: write the override through the host's `IdentityWriter`
//! 4. `guard` / `features`: consult the decision on every later query
//!
//! `hooks::PropImitation` runs steps 1-3 and owns the result.
//!
//! ## Usage
//! ```rust
//! use prop_imitation::config::Config;
//! use prop_imitation::imitation::{PropImitation, IdentityField};
//! use prop_imitation::imitation::mock::{InMemoryIdentity, StaticCallStack, StaticProcessInfo};
//! use std::sync::Arc;
//!
//! let process = StaticProcessInfo::new("com.android.vending", "com.android.vending");
//! let device = InMemoryIdentity::new([(IdentityField::Model, "Pixel 8")]);
//! let imitation = PropImitation::attach(
//!     &process,
//!     &Config::default(),
//!     &device,
//!     Arc::new(StaticCallStack::default()),
//! );
//!
//! assert!(imitation.guard_key_attestation().is_err());
//! ```

pub mod traits;
pub mod identity;
pub mod profiles;
pub mod selector;
pub mod applier;
pub mod guard;
pub mod features;
pub mod hooks;
pub mod mock;


pub use traits::{CallStackInspector, IdentityWriter, ProcessInfo};

pub use applier::{apply, ApplyReport};
pub use features::FeatureSuppressor;
pub use guard::AttestationGuard;
pub use hooks::PropImitation;
pub use identity::IdentityContext;
pub use profiles::{IdentityField, SpoofProfile, FEATURE_BLACKLIST, PIXEL_6_PRO, PIXEL_XL};
pub use selector::{select, Outcome, SpoofDecision};
