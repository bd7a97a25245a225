//! Profile selection
//!
//! Picks at most one identity override for a process from a fixed priority
//! chain, and classifies the process for the attestation guard and the
//! feature suppressor.

use super::identity::IdentityContext;
use super::profiles::*;
use crate::config::Config;

/// The single override chosen for a process
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Certified fingerprint and model for the security-check client
    CertifiedFingerprint { fingerprint: String, model: String },
    /// Stock fingerprint for the AR platform
    StockFingerprint { fingerprint: String },
    /// A full registered profile
    Profile(&'static SpoofProfile),
    /// Leave the device identity alone
    NoSpoofing,
}

impl Outcome {
    /// Field overrides this outcome writes, in application order
    pub fn overrides(&self) -> Vec<(IdentityField, &str)> {
        match self {
            Outcome::CertifiedFingerprint { fingerprint, model } => vec![
                (IdentityField::Fingerprint, fingerprint.as_str()),
                (IdentityField::Model, model.as_str()),
            ],
            Outcome::StockFingerprint { fingerprint } => {
                vec![(IdentityField::Fingerprint, fingerprint.as_str())]
            }
            Outcome::Profile(profile) => profile.fields.to_vec(),
            Outcome::NoSpoofing => Vec::new(),
        }
    }

    pub fn is_spoofing(&self) -> bool {
        !matches!(self, Outcome::NoSpoofing)
    }
}

/// Write-once classification of the current process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpoofDecision {
    /// Override applied at attach time
    pub outcome: Outcome,
    /// Package and process are the security-check client
    pub is_security_check_client: bool,
    /// Package is the app-store client
    pub is_market_client: bool,
    /// Process receives the Pixel XL profile and has its features filtered
    pub is_photos_spoof_target: bool,
}

impl SpoofDecision {
    /// Decision for a process whose identity could not be resolved
    pub fn inert() -> Self {
        Self {
            outcome: Outcome::NoSpoofing,
            is_security_check_client: false,
            is_market_client: false,
            is_photos_spoof_target: false,
        }
    }
}

/// Select the override for `ctx`.
///
/// Predicates are tried in priority order and the first match wins. The
/// client classifications are recorded whatever the outcome.
pub fn select(ctx: &IdentityContext, cfg: &Config) -> SpoofDecision {
    let package = ctx.package_name();

    let is_security_check_client =
        package == PACKAGE_GMS && ctx.process_name() == PROCESS_GMS_UNSTABLE;
    let is_market_client = package == PACKAGE_FINSKY;
    let is_photos_spoof_target = cfg.spoof_google_apps && package == PACKAGE_GPHOTOS;

    let outcome = match (cfg.certified_fingerprint(), cfg.stock_fingerprint()) {
        (Some(fingerprint), _) if is_security_check_client => {
            tracing::debug!("Setting certified fingerprint/model for GMS");
            Outcome::CertifiedFingerprint {
                fingerprint: fingerprint.to_string(),
                model: cfg.certified_model.clone().unwrap_or_default(),
            }
        }
        (_, Some(fingerprint)) if package == PACKAGE_ARCORE => {
            tracing::debug!("Setting stock fingerprint for: {}", package);
            Outcome::StockFingerprint {
                fingerprint: fingerprint.to_string(),
            }
        }
        _ if is_photos_spoof_target => {
            tracing::debug!("Spoofing Pixel XL for Google Photos");
            Outcome::Profile(&PIXEL_XL)
        }
        _ if cfg.spoof_google_apps
            && (package == PACKAGE_VELVET || package == PACKAGE_WALLPAPERS) =>
        {
            tracing::debug!("Spoofing Pixel 6 Pro for: {}", package);
            Outcome::Profile(&PIXEL_6_PRO)
        }
        _ => Outcome::NoSpoofing,
    };

    SpoofDecision {
        outcome,
        is_security_check_client,
        is_market_client,
        is_photos_spoof_target,
    }
}
