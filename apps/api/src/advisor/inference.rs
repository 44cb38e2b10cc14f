//! Shared pieces of the model-first, heuristic-second resolution.
//!
//! Each resolver attempts the model path as a `Resolution<T>`. An `Err`
//! carries the reason the pipeline fell back; it is a designed state, not an
//! error returned to the client.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::artifacts::Scaler;
use crate::features::builder::FeatureRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    ModelDerived,
    HeuristicFallback,
}

/// Why the model path was not taken.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FallbackReason {
    #[error("model not available")]
    ModelUnavailable,

    #[error("feature schema not available")]
    SchemaUnavailable,

    #[error("model inference failed: {0}")]
    InferenceFailed(String),

    #[error("model returned an unusable value: {0}")]
    InvalidPrediction(String),
}

pub type Resolution<T> = Result<T, FallbackReason>;

/// Applies the scaler if one is registered. Scaling is optional: on failure
/// the unscaled row is returned.
pub fn scale_best_effort(scaler: Option<&dyn Scaler>, row: FeatureRow) -> FeatureRow {
    let Some(scaler) = scaler else {
        return row;
    };
    match scaler.transform(&row) {
        Ok(scaled) if scaled.columns() == row.columns() => scaled,
        Ok(_) => {
            debug!("Scaler changed column identity; proceeding unscaled");
            row
        }
        Err(e) => {
            debug!("Scaling skipped: {e}");
            row
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Artifact doubles for failure injection.

    use crate::artifacts::{ArtifactError, Prediction, Predictor, Scaler};
    use crate::features::builder::FeatureRow;

    pub struct FailingPredictor;

    impl Predictor for FailingPredictor {
        fn predict(&self, _row: &FeatureRow) -> Result<Prediction, ArtifactError> {
            Err(ArtifactError::Invalid("internal model error".to_string()))
        }
    }

    /// Returns a fixed prediction regardless of the row.
    pub struct FixedPredictor(pub Prediction);

    impl Predictor for FixedPredictor {
        fn predict(&self, _row: &FeatureRow) -> Result<Prediction, ArtifactError> {
            Ok(self.0.clone())
        }
    }

    pub struct FailingScaler;

    impl Scaler for FailingScaler {
        fn transform(&self, row: &FeatureRow) -> Result<FeatureRow, ArtifactError> {
            Err(ArtifactError::ShapeMismatch {
                expected: 99,
                actual: row.len(),
            })
        }
    }

    /// Scaler that renames columns, violating column identity.
    pub struct RenamingScaler;

    impl Scaler for RenamingScaler {
        fn transform(&self, row: &FeatureRow) -> Result<FeatureRow, ArtifactError> {
            Ok(row.iter().map(|(n, v)| (format!("{n}_scaled"), v)).collect())
        }
    }
}
