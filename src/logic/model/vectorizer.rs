//! TF-IDF Vectorizer
//!
//! Rust-side counterpart of the fitted vectorizer exported by the offline
//! training job: a term -> column mapping plus per-column idf weights.
//! Transform = term-frequency count x idf, L2-normalized.

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::ArtifactError;

/// Fitted vectorizer artifact (`vectorizer.json`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// term -> column index
    pub vocabulary: HashMap<String, usize>,
    /// idf weight per column
    pub idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Number of columns in the output vector
    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    /// Reject artifacts whose vocabulary points outside the idf table.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        for (term, &idx) in &self.vocabulary {
            if idx >= self.idf.len() {
                return Err(ArtifactError(format!(
                    "vocabulary term {:?} maps to column {} but idf has {} entries",
                    term,
                    idx,
                    self.idf.len()
                )));
            }
        }
        Ok(())
    }

    /// Vectorize normalized text into a dense L2-normalized tf-idf row.
    ///
    /// Out-of-vocabulary tokens contribute nothing; all-OOV text yields the
    /// zero vector.
    pub fn transform(&self, normalized_text: &str) -> Array1<f32> {
        let mut row = Array1::<f32>::zeros(self.dimension());

        for token in normalized_text.split_whitespace() {
            if let Some(&idx) = self.vocabulary.get(token) {
                if idx < self.idf.len() {
                    row[idx] += self.idf[idx];
                }
            }
        }

        let norm = row.dot(&row).sqrt();
        if norm > 0.0 {
            row.mapv_inplace(|v| v / norm);
        }
        row
    }
}
