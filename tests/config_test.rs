//! Configuration loading tests

use prop_imitation::config::Config;
use prop_imitation::Error;
use std::env;

// Environment is process-global, so every env case lives in this one test.
#[test]
fn test_from_env() {
    env::set_var("PROP_IMITATION_CERTIFIED_FINGERPRINT", "google/sailfish/sailfish:8.1.0/OPM1.171019.011/4448085:user/release-keys");
    env::set_var("PROP_IMITATION_CERTIFIED_MODEL", "Pixel");
    env::set_var("PROP_IMITATION_SPOOF_GAPPS", "false");
    env::set_var("PROP_IMITATION_LOG_LEVEL", "debug");
    env::remove_var("PROP_IMITATION_STOCK_FINGERPRINT");

    let config = Config::from_env().unwrap();
    assert_eq!(
        config.certified_fingerprint(),
        Some("google/sailfish/sailfish:8.1.0/OPM1.171019.011/4448085:user/release-keys")
    );
    assert_eq!(config.certified_model(), Some("Pixel"));
    assert!(config.stock_fingerprint().is_none());
    assert!(!config.spoof_google_apps);
    assert_eq!(config.log_level, "debug");

    env::set_var("PROP_IMITATION_SPOOF_GAPPS", "yes");
    assert!(matches!(Config::from_env(), Err(Error::Configuration(_))));

    for key in [
        "PROP_IMITATION_CERTIFIED_FINGERPRINT",
        "PROP_IMITATION_CERTIFIED_MODEL",
        "PROP_IMITATION_SPOOF_GAPPS",
        "PROP_IMITATION_LOG_LEVEL",
    ] {
        env::remove_var(key);
    }
}

#[test]
fn test_from_file() {
    let path = env::temp_dir().join(format!("prop-imitation-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        "stock_fingerprint = \"google/husky/husky:14/AP1A.240305.019.A1/11445699:user/release-keys\"\n",
    )
    .unwrap();

    let config = Config::from_file(path.to_str().unwrap()).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(config.certified_fingerprint().is_none());
    assert_eq!(
        config.stock_fingerprint(),
        Some("google/husky/husky:14/AP1A.240305.019.A1/11445699:user/release-keys")
    );
    assert!(config.spoof_google_apps);
}
