//! Spoof profile registry
//!
//! Static identity profiles, the caller identities they target, and the
//! feature blacklist tied to the Pixel XL profile.

use phf::phf_map;
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Security-check client package
pub const PACKAGE_GMS: &str = "com.google.android.gms";
/// Security-check client process
pub const PROCESS_GMS_UNSTABLE: &str = "com.google.android.gms.unstable";
/// App-store client package
pub const PACKAGE_FINSKY: &str = "com.android.vending";
/// AR platform package
pub const PACKAGE_ARCORE: &str = "com.google.ar.core";
/// Gallery package
pub const PACKAGE_GPHOTOS: &str = "com.google.android.apps.photos";
/// Search assistant package
pub const PACKAGE_VELVET: &str = "com.google.android.quicksearchbox";
/// Wallpaper package
pub const PACKAGE_WALLPAPERS: &str = "com.google.android.apps.wallpaper";

/// Component name fragment identifying the integrity-check subsystem
pub const INTEGRITY_MARKER: &str = "DroidGuard";

/// Device identity field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IdentityField {
    Brand,
    Manufacturer,
    Device,
    Product,
    Model,
    Fingerprint,
}

impl IdentityField {
    /// All fields in declaration order
    pub const ALL: [IdentityField; 6] = [
        IdentityField::Brand,
        IdentityField::Manufacturer,
        IdentityField::Device,
        IdentityField::Product,
        IdentityField::Model,
        IdentityField::Fingerprint,
    ];

    /// Platform field name
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentityField::Brand => "BRAND",
            IdentityField::Manufacturer => "MANUFACTURER",
            IdentityField::Device => "DEVICE",
            IdentityField::Product => "PRODUCT",
            IdentityField::Model => "MODEL",
            IdentityField::Fingerprint => "FINGERPRINT",
        }
    }
}

impl fmt::Display for IdentityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentityField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IdentityField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| Error::configuration(format!("Unknown identity field: {}", s)))
    }
}

/// Named, immutable set of identity field values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpoofProfile {
    /// Registry name
    pub name: &'static str,
    /// Field values, applied in order
    pub fields: &'static [(IdentityField, &'static str)],
}

/// Pixel XL identity, used for the gallery app
pub const PIXEL_XL: SpoofProfile = SpoofProfile {
    name: "pixel-xl",
    fields: &[
        (IdentityField::Brand, "google"),
        (IdentityField::Manufacturer, "Google"),
        (IdentityField::Device, "marlin"),
        (IdentityField::Product, "marlin"),
        (IdentityField::Model, "Pixel XL"),
        (
            IdentityField::Fingerprint,
            "google/marlin/marlin:10/QP1A.191005.007.A3/5972272:user/release-keys",
        ),
    ],
};

/// Pixel 6 Pro identity, used for search and wallpapers
pub const PIXEL_6_PRO: SpoofProfile = SpoofProfile {
    name: "pixel-6-pro",
    fields: &[
        (IdentityField::Brand, "google"),
        (IdentityField::Manufacturer, "Google"),
        (IdentityField::Device, "raven"),
        (IdentityField::Product, "raven"),
        (IdentityField::Model, "Pixel 6 Pro"),
        (
            IdentityField::Fingerprint,
            "google/raven/raven:13/TP1A.220624.021/8877034:user/release-keys",
        ),
    ],
};

static PROFILES: phf::Map<&'static str, SpoofProfile> = phf_map! {
    "pixel-xl" => PIXEL_XL,
    "pixel-6-pro" => PIXEL_6_PRO,
};

/// Features hidden from the Pixel XL spoof target
pub const FEATURE_BLACKLIST: &[&str] = &[
    "PIXEL_2017_PRELOAD",
    "PIXEL_2018_PRELOAD",
    "PIXEL_2019_MIDYEAR_PRELOAD",
    "PIXEL_2019_PRELOAD",
    "PIXEL_2020_EXPERIENCE",
    "PIXEL_2020_MIDYEAR_EXPERIENCE",
    "PIXEL_2021_EXPERIENCE",
    "PIXEL_2021_MIDYEAR_EXPERIENCE",
];

impl SpoofProfile {
    /// Look up a registered profile by name
    pub fn by_name(name: &str) -> Option<&'static SpoofProfile> {
        PROFILES.get(name)
    }

    /// All registered profiles
    pub fn all() -> impl Iterator<Item = &'static SpoofProfile> {
        PROFILES.values()
    }

    /// Value for a single field, if the profile sets it
    pub fn get(&self, field: IdentityField) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| *v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_cover_all_fields() {
        for profile in SpoofProfile::all() {
            for field in IdentityField::ALL {
                assert!(profile.get(field).is_some(), "{} misses {}", profile.name, field);
            }
        }
    }

    #[test]
    fn test_by_name() {
        assert_eq!(SpoofProfile::by_name("pixel-xl"), Some(&PIXEL_XL));
        assert_eq!(SpoofProfile::by_name("pixel-6-pro"), Some(&PIXEL_6_PRO));
        assert!(SpoofProfile::by_name("pixel-9").is_none());
    }

    #[test]
    fn test_field_names_parse() {
        assert_eq!("FINGERPRINT".parse::<IdentityField>().unwrap(), IdentityField::Fingerprint);
        assert_eq!(IdentityField::Manufacturer.to_string(), "MANUFACTURER");
        assert!(matches!(
            "SERIAL".parse::<IdentityField>(),
            Err(Error::Configuration(msg)) if msg.contains("SERIAL")
        ));
    }
}
