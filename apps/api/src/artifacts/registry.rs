#![allow(dead_code)]

//! Artifact Registry — best-effort, load-once holder of the optional models,
//! scaler, encoders and feature schemas.
//!
//! Loading never fails the caller. A missing file is logged at debug, an
//! unreadable or invalid one at warn, and both leave the slot empty.
//! After construction the registry is read-only and shared behind an `Arc`.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::artifacts::formats::{ArtifactFormat, EncoderArtifact, ModelArtifact, ScalerArtifact};
use crate::artifacts::{ArtifactError, ArtifactKind, Encoder, Predictor, Scaler, ENCODER_FEATURES};
use crate::features::schema::FeatureSchema;

pub type EncoderMap = HashMap<String, Arc<dyn Encoder>>;

/// Reads and validates one artifact file.
pub fn try_load<T: ArtifactFormat>(path: &Path) -> Result<T, ArtifactError> {
    let raw = std::fs::read_to_string(path)?;
    let artifact: T = serde_json::from_str(&raw)?;
    artifact.validate()?;
    Ok(artifact)
}

/// Best-effort load: any read, parse or validation error yields `None`.
pub fn load<T: ArtifactFormat>(path: &Path) -> Option<T> {
    if !path.exists() {
        debug!("Artifact not found: {}", path.display());
        return None;
    }
    match try_load(path) {
        Ok(artifact) => {
            debug!("Loaded artifact {}", path.display());
            Some(artifact)
        }
        Err(e) => {
            warn!("Ignoring artifact {}: {e}", path.display());
            None
        }
    }
}

#[derive(Default, Clone)]
pub struct ArtifactRegistry {
    salary_model: Option<Arc<dyn Predictor>>,
    career_model: Option<Arc<dyn Predictor>>,
    scaler: Option<Arc<dyn Scaler>>,
    salary_schema: Option<FeatureSchema>,
    career_schema: Option<FeatureSchema>,
    encoders: EncoderMap,
}

/// Availability report for health checks.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ArtifactStatus {
    pub salary_model: bool,
    pub career_model: bool,
    pub scaler: bool,
    pub feature_columns_salary: bool,
    pub feature_columns_career: bool,
    pub encoders: Vec<String>,
}

impl ArtifactRegistry {
    /// A registry with nothing loaded. Every prediction takes the heuristic path.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Attempts every known artifact exactly once from `dir`.
    pub fn load_from_dir(dir: &Path) -> Self {
        let file = |kind: ArtifactKind| dir.join(kind.file_name());

        let mut registry = Self {
            salary_model: load::<ModelArtifact>(&file(ArtifactKind::SalaryModel))
                .map(|m| Arc::new(m) as Arc<dyn Predictor>),
            career_model: load::<ModelArtifact>(&file(ArtifactKind::CareerModel))
                .map(|m| Arc::new(m) as Arc<dyn Predictor>),
            scaler: load::<ScalerArtifact>(&file(ArtifactKind::Scaler))
                .map(|s| Arc::new(s) as Arc<dyn Scaler>),
            salary_schema: load::<FeatureSchema>(&file(ArtifactKind::SalarySchema)),
            career_schema: load::<FeatureSchema>(&file(ArtifactKind::CareerSchema)),
            encoders: HashMap::new(),
        };

        for &name in ENCODER_FEATURES {
            let path = file(ArtifactKind::Encoder(name.to_string()));
            if let Some(encoder) = load::<EncoderArtifact>(&path) {
                registry
                    .encoders
                    .insert(name.to_string(), Arc::new(encoder) as Arc<dyn Encoder>);
            }
        }

        let status = registry.status();
        info!(
            "Artifacts from {}: salary_model={} career_model={} scaler={} salary_schema={} career_schema={} encoders={:?}",
            dir.display(),
            status.salary_model,
            status.career_model,
            status.scaler,
            status.feature_columns_salary,
            status.feature_columns_career,
            status.encoders
        );

        registry
    }

    pub fn with_salary_model(mut self, model: Arc<dyn Predictor>) -> Self {
        self.salary_model = Some(model);
        self
    }

    pub fn with_career_model(mut self, model: Arc<dyn Predictor>) -> Self {
        self.career_model = Some(model);
        self
    }

    pub fn with_scaler(mut self, scaler: Arc<dyn Scaler>) -> Self {
        self.scaler = Some(scaler);
        self
    }

    pub fn with_salary_schema(mut self, schema: FeatureSchema) -> Self {
        self.salary_schema = Some(schema);
        self
    }

    pub fn with_career_schema(mut self, schema: FeatureSchema) -> Self {
        self.career_schema = Some(schema);
        self
    }

    pub fn with_encoder(mut self, feature: impl Into<String>, encoder: Arc<dyn Encoder>) -> Self {
        self.encoders.insert(feature.into(), encoder);
        self
    }

    pub fn has(&self, kind: &ArtifactKind) -> bool {
        match kind {
            ArtifactKind::SalaryModel => self.salary_model.is_some(),
            ArtifactKind::CareerModel => self.career_model.is_some(),
            ArtifactKind::Scaler => self.scaler.is_some(),
            ArtifactKind::SalarySchema => self.salary_schema.is_some(),
            ArtifactKind::CareerSchema => self.career_schema.is_some(),
            ArtifactKind::Encoder(name) => self.encoders.contains_key(name),
        }
    }

    pub fn salary_model(&self) -> Option<&dyn Predictor> {
        self.salary_model.as_deref()
    }

    pub fn career_model(&self) -> Option<&dyn Predictor> {
        self.career_model.as_deref()
    }

    pub fn scaler(&self) -> Option<&dyn Scaler> {
        self.scaler.as_deref()
    }

    pub fn salary_schema(&self) -> Option<&FeatureSchema> {
        self.salary_schema.as_ref()
    }

    pub fn career_schema(&self) -> Option<&FeatureSchema> {
        self.career_schema.as_ref()
    }

    pub fn encoder(&self, feature: &str) -> Option<&dyn Encoder> {
        self.encoders.get(feature).map(|e| e.as_ref())
    }

    pub fn encoders(&self) -> &EncoderMap {
        &self.encoders
    }

    pub fn status(&self) -> ArtifactStatus {
        let mut encoders: Vec<String> = self.encoders.keys().cloned().collect();
        encoders.sort();
        ArtifactStatus {
            salary_model: self.has(&ArtifactKind::SalaryModel),
            career_model: self.has(&ArtifactKind::CareerModel),
            scaler: self.has(&ArtifactKind::Scaler),
            feature_columns_salary: self.has(&ArtifactKind::SalarySchema),
            feature_columns_career: self.has(&ArtifactKind::CareerSchema),
            encoders,
        }
    }
}
