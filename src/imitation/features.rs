//! System feature suppression

use super::profiles::FEATURE_BLACKLIST;
use super::selector::SpoofDecision;

/// Hides Pixel-exclusive features from the Pixel XL spoof target
#[derive(Debug, Clone, Copy)]
pub struct FeatureSuppressor {
    active: bool,
}

impl FeatureSuppressor {
    pub fn new(decision: &SpoofDecision) -> Self {
        Self {
            active: decision.is_photos_spoof_target,
        }
    }

    /// Final answer for a "has system feature" query whose platform answer is `reported_present`
    pub fn filter_feature(&self, name: &str, reported_present: bool) -> bool {
        if self.active
            && reported_present
            && FEATURE_BLACKLIST.iter().any(|blocked| name.contains(blocked))
        {
            tracing::debug!("Blocked system feature {} for Google Photos", name);
            return false;
        }
        reported_present
    }
}
