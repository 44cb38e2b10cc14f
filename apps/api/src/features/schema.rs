#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// Ordered feature names a model expects, loaded from `feature_columns_*.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSchema(Vec<String>);

impl FeatureSchema {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The two independent prediction tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionTask {
    Salary,
    Career,
}

impl PredictionTask {
    /// Label columns the task predicts. These never appear in a feature row.
    pub fn target_columns(&self) -> &'static [&'static str] {
        match self {
            PredictionTask::Salary => &["estimated_salary_usd"],
            // The career model's label column (target_job_title) stays in the
            // row as a zeroed placeholder; see `ResolverTable::career`.
            PredictionTask::Career => &[],
        }
    }

    pub fn is_target_column(&self, feature: &str) -> bool {
        self.target_columns().contains(&feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_deserializes_from_plain_list() {
        let schema: FeatureSchema =
            serde_json::from_str(r#"["years_of_experience", "portfolio_strength"]"#).unwrap();
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.names()[1], "portfolio_strength");
    }

    #[test]
    fn test_salary_target_column_is_skipped() {
        assert!(PredictionTask::Salary.is_target_column("estimated_salary_usd"));
        assert!(!PredictionTask::Salary.is_target_column("years_of_experience"));
        assert!(!PredictionTask::Career.is_target_column("target_job_title"));
    }
}
