#![allow(dead_code)]

//! JSON artifact formats.
//!
//! Every artifact file carries a `kind` tag so one loader handles all of them:
//!
//! ```json
//! { "kind": "linear_regression", "intercept": 12000.0,
//!   "coefficients": { "years_of_experience": 2500.0 } }
//! ```

use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::artifacts::{ArtifactError, Encoder, Prediction, Predictor, Scaler};
use crate::features::builder::FeatureRow;
use crate::features::schema::FeatureSchema;

/// A deserializable artifact with a post-parse consistency check.
pub trait ArtifactFormat: DeserializeOwned {
    fn validate(&self) -> Result<(), ArtifactError> {
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    LinearRegression(LinearRegression),
    LinearClassifier(LinearClassifier),
}

impl ArtifactFormat for ModelArtifact {
    fn validate(&self) -> Result<(), ArtifactError> {
        match self {
            ModelArtifact::LinearRegression(m) => m.validate(),
            ModelArtifact::LinearClassifier(m) => m.validate(),
        }
    }
}

impl Predictor for ModelArtifact {
    fn predict(&self, row: &FeatureRow) -> Result<Prediction, ArtifactError> {
        match self {
            ModelArtifact::LinearRegression(m) => m.predict(row),
            ModelArtifact::LinearClassifier(m) => m.predict(row),
        }
    }
}

/// `intercept + Σ weight × feature`. Every weighted column must be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegression {
    #[serde(default)]
    pub intercept: f64,
    pub coefficients: BTreeMap<String, f64>,
}

impl LinearRegression {
    fn validate(&self) -> Result<(), ArtifactError> {
        if !self.intercept.is_finite() || self.coefficients.values().any(|w| !w.is_finite()) {
            return Err(ArtifactError::Invalid(
                "linear_regression weights must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

impl Predictor for LinearRegression {
    fn predict(&self, row: &FeatureRow) -> Result<Prediction, ArtifactError> {
        Ok(Prediction::Numeric(weighted_sum(
            self.intercept,
            &self.coefficients,
            row,
        )?))
    }
}

/// Class label as stored by the trainer: an integer code or a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassLabel {
    Code(i64),
    Name(String),
}

/// One-vs-rest linear scores; predicts the highest-scoring class
/// (first class wins ties).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearClassifier {
    pub classes: Vec<ClassLabel>,
    pub intercepts: Vec<f64>,
    pub coefficients: Vec<BTreeMap<String, f64>>,
}

impl LinearClassifier {
    fn validate(&self) -> Result<(), ArtifactError> {
        if self.classes.is_empty() {
            return Err(ArtifactError::Invalid(
                "linear_classifier has no classes".to_string(),
            ));
        }
        if self.intercepts.len() != self.classes.len()
            || self.coefficients.len() != self.classes.len()
        {
            return Err(ArtifactError::Invalid(format!(
                "linear_classifier has {} classes but {} intercepts and {} coefficient sets",
                self.classes.len(),
                self.intercepts.len(),
                self.coefficients.len()
            )));
        }
        Ok(())
    }
}

impl Predictor for LinearClassifier {
    fn predict(&self, row: &FeatureRow) -> Result<Prediction, ArtifactError> {
        self.validate()?;

        let mut best: Option<(usize, f64)> = None;
        for (i, (intercept, weights)) in self.intercepts.iter().zip(&self.coefficients).enumerate()
        {
            let score = weighted_sum(*intercept, weights, row)?;
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((i, score)),
            }
        }

        let (index, _) = best.ok_or_else(|| {
            ArtifactError::Invalid("linear_classifier produced no score".to_string())
        })?;

        Ok(match &self.classes[index] {
            ClassLabel::Code(code) => Prediction::Numeric(*code as f64),
            ClassLabel::Name(name) => Prediction::Label(name.clone()),
        })
    }
}

fn weighted_sum(
    intercept: f64,
    weights: &BTreeMap<String, f64>,
    row: &FeatureRow,
) -> Result<f64, ArtifactError> {
    let mut total = intercept;
    for (feature, weight) in weights {
        let value = row
            .get(feature)
            .ok_or_else(|| ArtifactError::MissingColumn(feature.clone()))?;
        total += weight * value;
    }
    Ok(total)
}

// ────────────────────────────────────────────────────────────────────────────
// Encoders
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EncoderArtifact {
    Label(LabelEncoder),
}

impl ArtifactFormat for EncoderArtifact {
    fn validate(&self) -> Result<(), ArtifactError> {
        match self {
            EncoderArtifact::Label(e) => e.validate(),
        }
    }
}

impl Encoder for EncoderArtifact {
    fn transform(&self, value: &str) -> Result<f64, ArtifactError> {
        match self {
            EncoderArtifact::Label(e) => e.transform(value),
        }
    }

    fn inverse_transform(&self, code: i64) -> Result<String, ArtifactError> {
        match self {
            EncoderArtifact::Label(e) => e.inverse_transform(code),
        }
    }
}

/// Label ↔ index encoder over a fixed class list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEncoder {
    pub classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    fn validate(&self) -> Result<(), ArtifactError> {
        if self.classes.is_empty() {
            return Err(ArtifactError::Invalid("label encoder has no classes".to_string()));
        }
        for (i, class) in self.classes.iter().enumerate() {
            if self.classes[..i].contains(class) {
                return Err(ArtifactError::Invalid(format!(
                    "label encoder has duplicate class '{class}'"
                )));
            }
        }
        Ok(())
    }
}

impl Encoder for LabelEncoder {
    fn transform(&self, value: &str) -> Result<f64, ArtifactError> {
        self.classes
            .iter()
            .position(|c| c == value)
            .map(|i| i as f64)
            .ok_or_else(|| ArtifactError::UnknownLabel(value.to_string()))
    }

    fn inverse_transform(&self, code: i64) -> Result<String, ArtifactError> {
        usize::try_from(code)
            .ok()
            .and_then(|i| self.classes.get(i))
            .cloned()
            .ok_or(ArtifactError::CodeOutOfRange(code))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scalers
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScalerArtifact {
    Standard(StandardScaler),
}

impl ArtifactFormat for ScalerArtifact {
    fn validate(&self) -> Result<(), ArtifactError> {
        match self {
            ScalerArtifact::Standard(s) => s.validate(),
        }
    }
}

impl Scaler for ScalerArtifact {
    fn transform(&self, row: &FeatureRow) -> Result<FeatureRow, ArtifactError> {
        match self {
            ScalerArtifact::Standard(s) => s.transform(row),
        }
    }
}

/// `(x - mean) / scale` per named column. A zero scale leaves the centred
/// value unscaled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub feature_names: Vec<String>,
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    fn validate(&self) -> Result<(), ArtifactError> {
        let n = self.feature_names.len();
        if self.mean.len() != n || self.scale.len() != n {
            return Err(ArtifactError::Invalid(format!(
                "standard scaler has {n} features but {} means and {} scales",
                self.mean.len(),
                self.scale.len()
            )));
        }
        Ok(())
    }
}

impl Scaler for StandardScaler {
    fn transform(&self, row: &FeatureRow) -> Result<FeatureRow, ArtifactError> {
        if row.len() != self.feature_names.len() {
            return Err(ArtifactError::ShapeMismatch {
                expected: self.feature_names.len(),
                actual: row.len(),
            });
        }

        let mut scaled = FeatureRow::new();
        for (name, value) in row.iter() {
            let i = self
                .feature_names
                .iter()
                .position(|f| f == name)
                .ok_or_else(|| ArtifactError::MissingColumn(name.to_string()))?;
            let scale = if self.scale[i] == 0.0 { 1.0 } else { self.scale[i] };
            scaled.push(name, (value - self.mean[i]) / scale);
        }
        Ok(scaled)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Feature schemas
// ────────────────────────────────────────────────────────────────────────────

impl ArtifactFormat for FeatureSchema {
    fn validate(&self) -> Result<(), ArtifactError> {
        if self.is_empty() {
            return Err(ArtifactError::Invalid("feature schema is empty".to_string()));
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
