//! Score Fusion & Verdict Engine
//!
//! Combines the heuristic score and the ML probability with fixed weights,
//! then thresholds the fused score into a three-way verdict with a
//! synthesized confidence value. This is the only place verdicts are
//! assigned; both tasks share the same band semantics.

pub mod rules;
pub mod types;

use rules::{VerdictThresholds, SUSPICIOUS_MIDPOINT};
use types::Verdict;

/// Fused score plus the verdict/confidence it thresholds into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FusedVerdict {
    pub final_score: f32,
    pub verdict: Verdict,
    pub confidence: f32,
}

/// Weighted fusion of ML confidence and heuristic score.
pub fn fuse(ml_confidence: f32, heuristic_score: f32, ml_weight: f32, heuristic_weight: f32) -> f32 {
    ml_confidence * ml_weight + heuristic_score * heuristic_weight
}

/// Threshold a fused score into a verdict.
///
/// Band semantics are half-open: a final score of exactly `real_max` is
/// suspicious, exactly `fake_min` is fake. The suspicious-band confidence
/// formula stays within [0.5, 0.65] for the default bands; the upper clamp
/// is kept anyway.
pub fn assign_verdict(final_score: f32, thresholds: &VerdictThresholds) -> FusedVerdict {
    let (verdict, confidence) = if final_score < thresholds.real_max {
        (Verdict::Real, 1.0 - final_score)
    } else if final_score < thresholds.fake_min {
        (
            Verdict::Suspicious,
            0.5 + (final_score - SUSPICIOUS_MIDPOINT).abs(),
        )
    } else {
        (Verdict::Fake, final_score)
    };

    FusedVerdict {
        final_score,
        verdict,
        confidence: confidence.min(1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::rules::*;
    use super::types::Verdict;
    use super::*;

    fn verdict_of(score: f32) -> FusedVerdict {
        assign_verdict(score, &VerdictThresholds::default())
    }

    #[test]
    fn test_fuse_weighted_sum() {
        let fused = fuse(0.5, 0.0, NEWS_ML_WEIGHT, NEWS_HEURISTIC_WEIGHT);
        assert!((fused - 0.2).abs() < 1e-6);

        let fused = fuse(0.5, 1.0, SCAM_ML_WEIGHT, SCAM_HEURISTIC_WEIGHT);
        assert!((fused - 0.85).abs() < 1e-6);
    }

    #[test]
    fn test_real_band() {
        let v = verdict_of(0.1);
        assert_eq!(v.verdict, Verdict::Real);
        assert!((v.confidence - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_boundary_real_max_is_suspicious() {
        // Exactly 0.3 falls in the suspicious band, not real
        let v = verdict_of(0.3);
        assert_eq!(v.verdict, Verdict::Suspicious);
        assert!((v.confidence - 0.65).abs() < 1e-6);
    }

    #[test]
    fn test_boundary_fake_min_is_fake() {
        // Exactly 0.6 is fake, not suspicious
        let v = verdict_of(0.6);
        assert_eq!(v.verdict, Verdict::Fake);
        assert!((v.confidence - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_suspicious_midpoint_confidence() {
        let v = verdict_of(0.45);
        assert_eq!(v.verdict, Verdict::Suspicious);
        assert!((v.confidence - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_suspicious_confidence_bounded() {
        for score in [0.3, 0.35, 0.4, 0.45, 0.5, 0.55, 0.599] {
            let v = verdict_of(score);
            assert_eq!(v.verdict, Verdict::Suspicious);
            assert!(v.confidence >= 0.5 && v.confidence <= 0.65);
        }
    }

    #[test]
    fn test_confidence_upper_clamp() {
        let v = verdict_of(1.2);
        assert_eq!(v.verdict, Verdict::Fake);
        assert!(v.confidence <= 1.0);
    }

    #[test]
    fn test_confidence_always_in_unit_interval() {
        let mut score = 0.0;
        while score <= 1.0 {
            let v = verdict_of(score);
            assert!(v.confidence >= 0.0 && v.confidence <= 1.0, "score {}", score);
            score += 0.01;
        }
    }
}
