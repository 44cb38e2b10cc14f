#![allow(dead_code)]

//! Feature Builder — turns a validated `Profile` into one numeric feature row
//! matching a model's schema.
//!
//! Resolution order for each schema column:
//! 1. Label columns of the task are skipped
//! 2. Column has a registered resolver:
//!    - categorical → fitted encoder if one is registered under the column
//!      name (failure → 0), otherwise the resolver's fallback
//!      (ordinal table, certification flag, or 0)
//!    - numeric → copied from the profile
//!    - constant → the constant
//! 3. No resolver (engineered/unknown column) → 0
//!
//! Building never fails. A column that cannot be resolved degrades to 0.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::artifacts::registry::EncoderMap;
use crate::features::ordinal::{
    OrdinalMap, LANGUAGE_PROFICIENCY, PORTFOLIO_STRENGTH, REMOTE_WORK_PREFERENCE,
};
use crate::features::schema::{FeatureSchema, PredictionTask};
use crate::models::profile::{NumericField, Profile, TextField};

// ────────────────────────────────────────────────────────────────────────────
// Feature row
// ────────────────────────────────────────────────────────────────────────────

/// One ordered row of named numeric features.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeatureRow {
    columns: Vec<String>,
    values: Vec<f64>,
}

impl FeatureRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column. A name already present keeps its first value.
    pub fn push(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        if self.columns.contains(&name) {
            return;
        }
        self.columns.push(name);
        self.values.push(value);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.columns
            .iter()
            .position(|c| c == name)
            .map(|i| self.values[i])
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for FeatureRow {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut row = FeatureRow::new();
        for (name, value) in iter {
            row.push(name, value);
        }
        row
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resolvers
// ────────────────────────────────────────────────────────────────────────────

/// Value used for a categorical column when no encoder is registered for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fallback {
    Zero,
    Ordinal(OrdinalMap),
    /// 1 when the profile holds any certification other than "None".
    CertificationFlag,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolver {
    Categorical { field: TextField, fallback: Fallback },
    Numeric(NumericField),
    Constant(f64),
}

/// Feature name → resolution strategy for one prediction task.
#[derive(Debug, Clone, Default)]
pub struct ResolverTable {
    resolvers: HashMap<String, Resolver>,
}

impl ResolverTable {
    pub fn empty() -> Self {
        Self {
            resolvers: HashMap::new(),
        }
    }

    pub fn register(mut self, feature: impl Into<String>, resolver: Resolver) -> Self {
        self.resolvers.insert(feature.into(), resolver);
        self
    }

    pub fn for_task(task: PredictionTask) -> Self {
        match task {
            PredictionTask::Salary => Self::salary(),
            PredictionTask::Career => Self::career(),
        }
    }

    /// Full profile coverage for the salary regressor.
    pub fn salary() -> Self {
        Self::empty()
            .register("current_job_title", categorical(TextField::CurrentJobTitle, Fallback::Zero))
            .register("target_job_title", categorical(TextField::TargetJobTitle, Fallback::Zero))
            .register("education_level", categorical(TextField::EducationLevel, Fallback::Zero))
            .register(
                "portfolio_strength",
                categorical(TextField::PortfolioStrength, Fallback::Ordinal(PORTFOLIO_STRENGTH)),
            )
            .register(
                "certifications",
                categorical(TextField::Certifications, Fallback::CertificationFlag),
            )
            .register(
                "language_proficiency",
                categorical(
                    TextField::LanguageProficiency,
                    Fallback::Ordinal(LANGUAGE_PROFICIENCY),
                ),
            )
            .register(
                "remote_work_preference",
                categorical(
                    TextField::RemoteWorkPreference,
                    Fallback::Ordinal(REMOTE_WORK_PREFERENCE),
                ),
            )
            .register(
                "years_of_experience",
                Resolver::Numeric(NumericField::YearsOfExperience),
            )
            .register(
                "projects_completed",
                Resolver::Numeric(NumericField::ProjectsCompleted),
            )
            .register(
                "communication_skills_rating",
                Resolver::Numeric(NumericField::CommunicationRating),
            )
    }

    /// The career preview only feeds current role and experience; the label
    /// column and everything else are zeroed.
    pub fn career() -> Self {
        Self::empty()
            .register("current_job_title", categorical(TextField::CurrentJobTitle, Fallback::Zero))
            .register(
                "years_of_experience",
                Resolver::Numeric(NumericField::YearsOfExperience),
            )
            .register("target_job_title", Resolver::Constant(0.0))
    }

    pub fn get(&self, feature: &str) -> Option<&Resolver> {
        self.resolvers.get(feature)
    }
}

fn categorical(field: TextField, fallback: Fallback) -> Resolver {
    Resolver::Categorical { field, fallback }
}

// ────────────────────────────────────────────────────────────────────────────
// Builder
// ────────────────────────────────────────────────────────────────────────────

/// Holds one resolver table per task. Constructed once and shared read-only.
#[derive(Debug, Clone)]
pub struct FeatureBuilder {
    salary: ResolverTable,
    career: ResolverTable,
}

impl Default for FeatureBuilder {
    fn default() -> Self {
        Self::new(
            ResolverTable::for_task(PredictionTask::Salary),
            ResolverTable::for_task(PredictionTask::Career),
        )
    }
}

impl FeatureBuilder {
    pub fn new(salary: ResolverTable, career: ResolverTable) -> Self {
        Self { salary, career }
    }

    fn table(&self, task: PredictionTask) -> &ResolverTable {
        match task {
            PredictionTask::Salary => &self.salary,
            PredictionTask::Career => &self.career,
        }
    }

    /// Builds the feature row for `task` in schema order.
    pub fn build(
        &self,
        profile: &Profile,
        schema: &FeatureSchema,
        task: PredictionTask,
        encoders: &EncoderMap,
    ) -> FeatureRow {
        let table = self.table(task);
        let mut row = FeatureRow::new();

        for feature in schema.names() {
            if task.is_target_column(feature) {
                continue;
            }
            let value = match table.get(feature) {
                Some(resolver) => resolve(resolver, feature, profile, encoders),
                None => 0.0,
            };
            row.push(feature.as_str(), value);
        }

        row
    }
}

fn resolve(resolver: &Resolver, feature: &str, profile: &Profile, encoders: &EncoderMap) -> f64 {
    match resolver {
        Resolver::Constant(value) => *value,
        Resolver::Numeric(field) => profile.number(*field),
        Resolver::Categorical { field, fallback } => {
            let text = profile.text(*field);
            if let Some(encoder) = encoders.get(feature) {
                return match encoder.transform(text) {
                    Ok(code) if code.is_finite() => code,
                    Ok(code) => {
                        debug!("Encoder for '{feature}' returned non-finite code {code}; using 0");
                        0.0
                    }
                    Err(e) => {
                        debug!("Encoder for '{feature}' rejected '{text}': {e}; using 0");
                        0.0
                    }
                };
            }
            match fallback {
                Fallback::Zero => 0.0,
                Fallback::Ordinal(map) => map.value(text),
                Fallback::CertificationFlag => {
                    if profile.has_certification() {
                        1.0
                    } else {
                        0.0
                    }
                }
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
