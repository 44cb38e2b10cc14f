//! Predictive artifacts — capability traits for models, encoders and scalers,
//! the JSON formats that implement them, and the process-wide registry.
//!
//! Artifacts are optional. Nothing in this module surfaces a load failure to a
//! caller: a missing or unreadable artifact is simply absent from the registry,
//! and the advisor pipeline branches on `ArtifactRegistry::has`.

use std::fmt;

use thiserror::Error;

use crate::features::builder::FeatureRow;

pub mod formats;
pub mod registry;

pub use registry::ArtifactRegistry;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown label '{0}'")]
    UnknownLabel(String),

    #[error("Label code {0} out of range")]
    CodeOutOfRange(i64),

    #[error("Missing column '{0}'")]
    MissingColumn(String),

    #[error("Shape mismatch: expected {expected} columns, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Invalid artifact: {0}")]
    Invalid(String),
}

/// Raw model output: a number (regression value or integer class code) or a
/// class name.
#[derive(Debug, Clone, PartialEq)]
pub enum Prediction {
    Numeric(f64),
    Label(String),
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Integer codes print without a trailing ".0"
            Prediction::Numeric(v) if v.fract() == 0.0 && v.is_finite() => {
                write!(f, "{}", *v as i64)
            }
            Prediction::Numeric(v) => write!(f, "{v}"),
            Prediction::Label(s) => f.write_str(s),
        }
    }
}

/// A fitted model over one feature row.
pub trait Predictor: Send + Sync {
    fn predict(&self, row: &FeatureRow) -> Result<Prediction, ArtifactError>;
}

/// Categorical encoder mapping labels to integer codes and back.
pub trait Encoder: Send + Sync {
    fn transform(&self, value: &str) -> Result<f64, ArtifactError>;
    fn inverse_transform(&self, code: i64) -> Result<String, ArtifactError>;
}

/// Feature scaler. Implementations must preserve column names and order.
pub trait Scaler: Send + Sync {
    fn transform(&self, row: &FeatureRow) -> Result<FeatureRow, ArtifactError>;
}

/// Every artifact slot the registry knows about.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    SalaryModel,
    CareerModel,
    Scaler,
    SalarySchema,
    CareerSchema,
    Encoder(String),
}

impl ArtifactKind {
    /// File name of this artifact inside the asset directory.
    pub fn file_name(&self) -> String {
        match self {
            ArtifactKind::SalaryModel => "salary_model.json".to_string(),
            ArtifactKind::CareerModel => "career_recommender.json".to_string(),
            ArtifactKind::Scaler => "scaler.json".to_string(),
            ArtifactKind::SalarySchema => "feature_columns_salary.json".to_string(),
            ArtifactKind::CareerSchema => "feature_columns_career.json".to_string(),
            ArtifactKind::Encoder(name) => format!("{name}_encoder.json"),
        }
    }
}

/// Feature names for which an encoder file is looked up at startup.
pub const ENCODER_FEATURES: &[&str] = &[
    "current_job_title",
    "target_job_title",
    "education_level",
    "portfolio_strength",
    "certifications",
    "language_proficiency",
    "remote_work_preference",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_match_asset_layout() {
        assert_eq!(ArtifactKind::SalaryModel.file_name(), "salary_model.json");
        assert_eq!(
            ArtifactKind::CareerModel.file_name(),
            "career_recommender.json"
        );
        assert_eq!(
            ArtifactKind::Encoder("education_level".to_string()).file_name(),
            "education_level_encoder.json"
        );
    }

    #[test]
    fn test_prediction_display_drops_integer_fraction() {
        assert_eq!(Prediction::Numeric(3.0).to_string(), "3");
        assert_eq!(Prediction::Numeric(2.5).to_string(), "2.5");
        assert_eq!(Prediction::Label("MBA".to_string()).to_string(), "MBA");
    }
}
