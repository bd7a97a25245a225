//! Common test utilities
//!
//! This module provides shared test helpers and fixtures for all integration tests.

#![allow(dead_code)]

use prop_imitation::config::Config;
use prop_imitation::imitation::mock::{InMemoryIdentity, StaticCallStack, StaticProcessInfo};
use prop_imitation::imitation::{IdentityField, PropImitation};
use std::sync::{Arc, Once};

static TRACING: Once = Once::new();

/// Route engine logs to the test harness output
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("prop_imitation=trace")
            .with_test_writer()
            .try_init();
    });
}

/// Device identity state of an unspoofed, non-Google device
pub fn stock_device() -> InMemoryIdentity {
    InMemoryIdentity::new([
        (IdentityField::Brand, "fairphone"),
        (IdentityField::Manufacturer, "Fairphone"),
        (IdentityField::Device, "FP5"),
        (IdentityField::Product, "FP5"),
        (IdentityField::Model, "FP5"),
        (
            IdentityField::Fingerprint,
            "Fairphone/FP5/FP5:14/FP5.TP2Q.240802.001/2024081400:user/release-keys",
        ),
    ])
}

/// Attach an imitation context for the given identity with an empty call stack
pub fn attach(
    package: &str,
    process: &str,
    config: &Config,
    device: &InMemoryIdentity,
) -> PropImitation {
    init_tracing();
    PropImitation::attach(
        &StaticProcessInfo::new(package, process),
        config,
        device,
        Arc::new(StaticCallStack::default()),
    )
}

/// Config as shipped with a certified fingerprint and google app spoofing on
pub fn shipped_config() -> anyhow::Result<Config> {
    let config = Config::from_toml(
        r#"
        certified_fingerprint = "google/marlin/marlin:7.1.2/NJH47F/4146041:user/release-keys"
        certified_model = "Pixel XL"
        stock_fingerprint = "Fairphone/FP5/FP5:14/FP5.TP2Q.240802.001/2024081400:user/release-keys"
        spoof_google_apps = true
        "#,
    )?;
    Ok(config)
}
