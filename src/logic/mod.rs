//! Detection engine modules

pub mod detector;
pub mod features;
pub mod heuristics;
pub mod lexicon;
pub mod model;
pub mod normalize;
pub mod scam_type;
pub mod url_intel;
pub mod verdict;
