//! Classifier Adapter
//!
//! Wraps the externally trained classifiers (plus their shared vectorizer)
//! behind a loaded/unavailable variant. Artifacts are JSON files exported
//! by the offline training job; absence is a valid, non-fatal state and
//! every inference-time failure degrades to the neutral default rather
//! than surfacing to the scoring pipeline.

pub mod inference;
pub mod vectorizer;

use parking_lot::RwLock;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use inference::LinearModel;
use serde::{Deserialize, Serialize};
use vectorizer::TfidfVectorizer;

/// Probability returned whenever no usable model is available
pub const NEUTRAL_CONFIDENCE: f32 = 0.5;

const VECTORIZER_FILE: &str = "vectorizer.json";
const NEWS_MODEL_FILE: &str = "news_model.json";
const SCAM_MODEL_FILE: &str = "scam_model.json";
const MANIFEST_FILE: &str = "manifest.json";

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug)]
pub struct ArtifactError(pub String);

impl std::fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ArtifactError: {}", self.0)
    }
}

impl std::error::Error for ArtifactError {}

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Which classification task a model serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    News,
    Scam,
}

impl Task {
    fn artifact_file(&self) -> &'static str {
        match self {
            Task::News => NEWS_MODEL_FILE,
            Task::Scam => SCAM_MODEL_FILE,
        }
    }
}

/// Optional checksum manifest (`manifest.json`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtifactManifest {
    /// file name -> expected sha256 hex digest
    pub files: HashMap<String, String>,
}

/// Loaded artifact pair for one task
pub struct TaskModel {
    pub vectorizer: Arc<TfidfVectorizer>,
    pub model: LinearModel,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

/// Classifier availability, an explicit variant instead of a null check
#[derive(Default)]
pub enum ModelState {
    Loaded(TaskModel),
    #[default]
    Unavailable,
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Read-only-after-init holder for both task models
pub struct ModelRegistry {
    news: RwLock<ModelState>,
    scam: RwLock<ModelState>,
}

/// Process-wide registry used by [`crate::Detector`]
pub static REGISTRY: ModelRegistry = ModelRegistry::new();

impl ModelRegistry {
    pub const fn new() -> Self {
        Self {
            news: RwLock::new(ModelState::Unavailable),
            scam: RwLock::new(ModelState::Unavailable),
        }
    }

    fn slot(&self, task: Task) -> &RwLock<ModelState> {
        match task {
            Task::News => &self.news,
            Task::Scam => &self.scam,
        }
    }

    /// Load both task models from an artifact directory.
    ///
    /// Idempotent and retry-safe: a failed load leaves the affected task
    /// `Unavailable` and a later call may succeed. An unreadable vectorizer
    /// fails the whole load since both tasks depend on it; a single broken
    /// task model only disables that task.
    pub fn load_artifacts(&self, dir: &Path) -> Result<(), ArtifactError> {
        let manifest = read_manifest(dir);

        let vectorizer: TfidfVectorizer =
            read_artifact(dir, VECTORIZER_FILE, manifest.as_ref())?;
        vectorizer.validate()?;
        let vectorizer = Arc::new(vectorizer);
        log::info!(
            "Vectorizer loaded from {} ({} terms, {} columns)",
            dir.display(),
            vectorizer.vocabulary.len(),
            vectorizer.dimension()
        );

        for task in [Task::News, Task::Scam] {
            let state = match load_task_model(dir, task, &vectorizer, manifest.as_ref()) {
                Ok(model) => {
                    log::info!("{} model loaded", task.artifact_file());
                    ModelState::Loaded(model)
                }
                Err(e) => {
                    log::warn!("{} not loaded: {}", task.artifact_file(), e);
                    ModelState::Unavailable
                }
            };
            *self.slot(task).write() = state;
        }

        Ok(())
    }

    /// Drop both models, returning to the neutral-default path.
    pub fn unload(&self) {
        *self.news.write() = ModelState::Unavailable;
        *self.scam.write() = ModelState::Unavailable;
        log::info!("Model artifacts unloaded");
    }

    pub fn is_loaded(&self, task: Task) -> bool {
        matches!(&*self.slot(task).read(), ModelState::Loaded(_))
    }

    /// P(positive class) for normalized text, or the neutral default.
    ///
    /// Never fails: the unavailable variant and any inference error both
    /// degrade to [`NEUTRAL_CONFIDENCE`].
    pub fn classify(&self, normalized_text: &str, task: Task) -> f32 {
        match &*self.slot(task).read() {
            ModelState::Loaded(task_model) => {
                let row = task_model.vectorizer.transform(normalized_text);
                match task_model.model.predict_proba(&row) {
                    Ok(proba) => proba[1],
                    Err(e) => {
                        log::debug!("inference failed ({}), using neutral default", e);
                        NEUTRAL_CONFIDENCE
                    }
                }
            }
            ModelState::Unavailable => NEUTRAL_CONFIDENCE,
        }
    }
}

// ============================================================================
// ARTIFACT LOADING
// ============================================================================

fn read_manifest(dir: &Path) -> Option<ArtifactManifest> {
    let path = dir.join(MANIFEST_FILE);
    if !path.exists() {
        return None;
    }
    match std::fs::read_to_string(&path).map_err(|e| e.to_string()).and_then(|raw| {
        serde_json::from_str::<ArtifactManifest>(&raw).map_err(|e| e.to_string())
    }) {
        Ok(manifest) => Some(manifest),
        Err(e) => {
            log::warn!("manifest unreadable, skipping checksum verification: {}", e);
            None
        }
    }
}

fn read_artifact<T: serde::de::DeserializeOwned>(
    dir: &Path,
    file: &str,
    manifest: Option<&ArtifactManifest>,
) -> Result<T, ArtifactError> {
    let path = dir.join(file);
    let bytes = std::fs::read(&path)
        .map_err(|e| ArtifactError(format!("read {}: {}", path.display(), e)))?;

    if let Some(expected) = manifest.and_then(|m| m.files.get(file)) {
        let digest = hex::encode(Sha256::digest(&bytes));
        if !digest.eq_ignore_ascii_case(expected) {
            return Err(ArtifactError(format!(
                "checksum mismatch for {}: expected {}, got {}",
                file, expected, digest
            )));
        }
    }

    serde_json::from_slice(&bytes)
        .map_err(|e| ArtifactError(format!("parse {}: {}", path.display(), e)))
}

fn load_task_model(
    dir: &Path,
    task: Task,
    vectorizer: &Arc<TfidfVectorizer>,
    manifest: Option<&ArtifactManifest>,
) -> Result<TaskModel, ArtifactError> {
    let model: LinearModel = read_artifact(dir, task.artifact_file(), manifest)?;

    if model.dimension() != vectorizer.dimension() {
        return Err(ArtifactError(format!(
            "{} has {} weights but vectorizer has {} columns",
            task.artifact_file(),
            model.dimension(),
            vectorizer.dimension()
        )));
    }

    Ok(TaskModel {
        vectorizer: Arc::clone(vectorizer),
        model,
        loaded_at: chrono::Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn write_artifacts(dir: &Path) {
        let vectorizer = TfidfVectorizer {
            vocabulary: HashMap::from([
                ("prize".to_string(), 0),
                ("winner".to_string(), 1),
                ("economy".to_string(), 2),
            ]),
            idf: vec![2.0, 2.0, 1.0],
        };
        let scammy = LinearModel {
            weights: vec![3.0, 3.0, -2.0],
            intercept: -1.0,
        };
        std::fs::write(
            dir.join(VECTORIZER_FILE),
            serde_json::to_string(&vectorizer).unwrap(),
        )
        .unwrap();
        std::fs::write(
            dir.join(NEWS_MODEL_FILE),
            serde_json::to_string(&scammy).unwrap(),
        )
        .unwrap();
        std::fs::write(
            dir.join(SCAM_MODEL_FILE),
            serde_json::to_string(&scammy).unwrap(),
        )
        .unwrap();
    }

    #[test]
    fn test_unloaded_registry_returns_neutral() {
        let registry = ModelRegistry::new();
        assert!(!registry.is_loaded(Task::News));
        assert_eq!(registry.classify("anything at all", Task::News), NEUTRAL_CONFIDENCE);
        assert_eq!(registry.classify("", Task::Scam), NEUTRAL_CONFIDENCE);
    }

    #[test]
    fn test_load_and_classify() {
        let dir = tempfile::tempdir().unwrap();
        write_artifacts(dir.path());

        let registry = ModelRegistry::new();
        registry.load_artifacts(dir.path()).unwrap();
        assert!(registry.is_loaded(Task::News));
        assert!(registry.is_loaded(Task::Scam));

        let scammy = registry.classify("prize winner", Task::Scam);
        let plain = registry.classify("economy", Task::Scam);
        assert!((0.0..=1.0).contains(&scammy));
        assert!(scammy > plain);
    }

    #[test]
    fn test_load_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        write_artifacts(dir.path());

        let registry = ModelRegistry::new();
        registry.load_artifacts(dir.path()).unwrap();
        let first = registry.classify("prize winner", Task::News);
        registry.load_artifacts(dir.path()).unwrap();
        assert_eq!(registry.classify("prize winner", Task::News), first);
    }

    #[test]
    fn test_unload_returns_to_neutral() {
        let dir = tempfile::tempdir().unwrap();
        write_artifacts(dir.path());

        let registry = ModelRegistry::new();
        registry.load_artifacts(dir.path()).unwrap();
        registry.unload();
        assert!(!registry.is_loaded(Task::News));
        assert_eq!(registry.classify("prize winner", Task::News), NEUTRAL_CONFIDENCE);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let registry = ModelRegistry::new();
        assert!(registry.load_artifacts(Path::new("/nonexistent")).is_err());
        assert!(!registry.is_loaded(Task::News));
    }

    #[test]
    fn test_checksum_mismatch_disables_task() {
        let dir = tempfile::tempdir().unwrap();
        write_artifacts(dir.path());

        let manifest = ArtifactManifest {
            files: HashMap::from([(NEWS_MODEL_FILE.to_string(), "deadbeef".to_string())]),
        };
        std::fs::write(
            dir.path().join(MANIFEST_FILE),
            serde_json::to_string(&manifest).unwrap(),
        )
        .unwrap();

        let registry = ModelRegistry::new();
        registry.load_artifacts(dir.path()).unwrap();
        // News fails verification, scam (not in manifest) still loads
        assert!(!registry.is_loaded(Task::News));
        assert!(registry.is_loaded(Task::Scam));
        assert_eq!(registry.classify("prize winner", Task::News), NEUTRAL_CONFIDENCE);
    }

    #[test]
    fn test_dimension_mismatch_disables_task() {
        let dir = tempfile::tempdir().unwrap();
        write_artifacts(dir.path());
        let short = LinearModel {
            weights: vec![1.0],
            intercept: 0.0,
        };
        std::fs::write(
            dir.path().join(SCAM_MODEL_FILE),
            serde_json::to_string(&short).unwrap(),
        )
        .unwrap();

        let registry = ModelRegistry::new();
        registry.load_artifacts(dir.path()).unwrap();
        assert!(registry.is_loaded(Task::News));
        assert!(!registry.is_loaded(Task::Scam));
    }

    #[test]
    fn test_malformed_vectorizer_fails_load() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(VECTORIZER_FILE), "not json").unwrap();

        let registry = ModelRegistry::new();
        assert!(registry.load_artifacts(dir.path()).is_err());
        assert!(!registry.is_loaded(Task::News));
    }
}
