//! Linear Model Inference
//!
//! Logistic-regression artifact exported by the offline training job.
//! `predict_proba` mirrors the trained classifier's contract: a
//! `[p_negative, p_positive]` pair for the binary task.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::ArtifactError;

/// Trained binary classifier artifact (`*_model.json`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    /// One weight per vectorizer column
    pub weights: Vec<f32>,
    pub intercept: f32,
}

fn sigmoid(z: f32) -> f32 {
    1.0 / (1.0 + (-z).exp())
}

impl LinearModel {
    pub fn dimension(&self) -> usize {
        self.weights.len()
    }

    /// Probability pair `[p_negative, p_positive]` for one tf-idf row.
    pub fn predict_proba(&self, row: &Array1<f32>) -> Result<[f32; 2], ArtifactError> {
        if row.len() != self.weights.len() {
            return Err(ArtifactError(format!(
                "input has {} columns, model expects {}",
                row.len(),
                self.weights.len()
            )));
        }

        let z: f32 = self
            .weights
            .iter()
            .zip(row.iter())
            .map(|(w, v)| w * v)
            .sum::<f32>()
            + self.intercept;

        let positive = sigmoid(z);
        Ok([1.0 - positive, positive])
    }
}
