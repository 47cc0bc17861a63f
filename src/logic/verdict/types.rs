//! Verdict Types
//!
//! Data structures produced by the fusion engine. No logic here.

use serde::{Deserialize, Serialize};

use crate::logic::features::FeatureRecord;
use crate::logic::url_intel::UrlInfo;

// ============================================================================
// VERDICT
// ============================================================================

/// Three-way classification outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// No significant red flags
    Real,
    /// Some elements raise concerns, recommend caution
    Suspicious,
    /// Strong fake/scam signal
    Fake,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Real => "real",
            Verdict::Suspicious => "suspicious",
            Verdict::Fake => "fake",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            Verdict::Real => 0,
            Verdict::Suspicious => 1,
            Verdict::Fake => 2,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SCAM TYPE
// ============================================================================

/// Scam category, first-match-wins over the ordered rule list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScamType {
    LotteryScam,
    PhishingScam,
    InvestmentScam,
    RomanceScam,
    AdvanceFeeScam,
    TechSupportScam,
    /// Default when no rule matches
    GeneralScam,
}

impl ScamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScamType::LotteryScam => "lottery_scam",
            ScamType::PhishingScam => "phishing_scam",
            ScamType::InvestmentScam => "investment_scam",
            ScamType::RomanceScam => "romance_scam",
            ScamType::AdvanceFeeScam => "advance_fee_scam",
            ScamType::TechSupportScam => "tech_support_scam",
            ScamType::GeneralScam => "general_scam",
        }
    }
}

impl std::fmt::Display for ScamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// ANALYSIS DETAILS
// ============================================================================

/// Structured breakdown for a fake-news verdict
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsDetails {
    pub ml_confidence: f32,
    pub heuristic_score: f32,
    pub features: FeatureRecord,
    pub url_analysis: Option<UrlInfo>,
    pub reasons: Vec<String>,
}

/// Structured breakdown for a scam verdict
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScamDetails {
    pub ml_confidence: f32,
    pub scam_score: f32,
    pub features: FeatureRecord,
    pub scam_type: ScamType,
    pub reasons: Vec<String>,
}

/// Per-task detail payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisDetails {
    News(NewsDetails),
    Scam(ScamDetails),
}

impl AnalysisDetails {
    /// Ordered explanation strings regardless of task
    pub fn reasons(&self) -> &[String] {
        match self {
            AnalysisDetails::News(d) => &d.reasons,
            AnalysisDetails::Scam(d) => &d.reasons,
        }
    }
}

// ============================================================================
// DETECTION RESULT
// ============================================================================

/// Final output of one detection call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResult {
    pub verdict: Verdict,
    /// Synthesized confidence in the verdict, clamped to [0, 1]
    pub confidence: f32,
    pub details: AnalysisDetails,
}

// ============================================================================
// COMBINED TRIAGE
// ============================================================================

/// Severity routing for a message run through both detectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    /// High-confidence scam
    ScamAlert,
    /// High-confidence fake news
    FakeNewsAlert,
    /// Either task returned a suspicious verdict
    Suspicious,
    /// No significant red flags on either task
    Safe,
}

/// Both detection results plus their combined severity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageReport {
    pub news: DetectionResult,
    pub scam: DetectionResult,
    pub alert: AlertLevel,
}
