//! Fusion Weights & Verdict Thresholds
//!
//! Constants and configuration for score fusion. No fusion logic here.

use serde::{Deserialize, Serialize};

// ============================================================================
// FUSION WEIGHTS
// ============================================================================

/// ML weight for the fake-news task (heuristics dominate)
pub const NEWS_ML_WEIGHT: f32 = 0.4;

/// Heuristic weight for the fake-news task
pub const NEWS_HEURISTIC_WEIGHT: f32 = 0.6;

/// ML weight for the scam task
pub const SCAM_ML_WEIGHT: f32 = 0.3;

/// Scam-heuristic weight for the scam task
pub const SCAM_HEURISTIC_WEIGHT: f32 = 0.7;

// ============================================================================
// VERDICT BANDS
// ============================================================================

/// Below this final score = real
pub const REAL_MAX: f32 = 0.3;

/// At or above this final score = fake; between the two = suspicious
pub const FAKE_MIN: f32 = 0.6;

/// Midpoint of the suspicious band, used by its confidence formula
pub const SUSPICIOUS_MIDPOINT: f32 = 0.45;

// ============================================================================
// CONFIGURABLE THRESHOLDS
// ============================================================================

/// Verdict band edges (configurable, half-open interval semantics)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictThresholds {
    /// final < real_max  => real
    pub real_max: f32,
    /// final >= fake_min => fake, between = suspicious
    pub fake_min: f32,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self {
            real_max: REAL_MAX,
            fake_min: FAKE_MIN,
        }
    }
}

impl VerdictThresholds {
    /// Stricter bands - flags more messages as suspicious/fake
    pub fn high_sensitivity() -> Self {
        Self {
            real_max: 0.2,
            fake_min: 0.5,
        }
    }

    /// Looser bands - fewer alerts
    pub fn low_sensitivity() -> Self {
        Self {
            real_max: 0.4,
            fake_min: 0.7,
        }
    }
}
