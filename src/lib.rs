//! Message Triage - Detection & Scoring Core
//!
//! Classifies incoming message text as fake news, scam, or safe by combining
//! a trained statistical classifier with hand-written heuristic rules.
//! The pipeline is deterministic and explainable: every verdict carries the
//! score breakdown and the human-readable reasons that produced it.
//!
//! Entry points: [`Detector::detect_fake_news`], [`Detector::detect_scam`],
//! [`Detector::analyze`].

pub mod constants;
pub mod logic;

pub use logic::detector::{Detector, DetectorConfig};
pub use logic::features::FeatureRecord;
pub use logic::lexicon::RuleTables;
pub use logic::url_intel::UrlInfo;
pub use logic::verdict::types::{
    AlertLevel, AnalysisDetails, DetectionResult, ScamType, TriageReport, Verdict,
};
