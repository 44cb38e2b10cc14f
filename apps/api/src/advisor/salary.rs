//! Salary resolution.
//!
//! Model path: schema → feature row → best-effort scaling → predict (USD) →
//! INR at a fixed rate. Any missing artifact or failed stage falls back to
//! the heuristic. Exactly one of the two paths produces the estimate.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::advisor::heuristics::HeuristicEngine;
use crate::advisor::inference::{scale_best_effort, FallbackReason, Provenance, Resolution};
use crate::artifacts::{ArtifactRegistry, Prediction};
use crate::features::builder::FeatureBuilder;
use crate::features::schema::PredictionTask;
use crate::models::profile::Profile;

/// Fixed conversion for model output. No live rate lookup.
pub const USD_TO_INR: f64 = 82.0;

pub const CURRENCY: &str = "INR";

/// Output of a successful model path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelDerivedSalary {
    pub salary_usd: f64,
    pub amount_inr: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryEstimate {
    pub amount_inr: i64,
    pub currency: String,
    pub provenance: Provenance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}

/// Attempts the model path only.
pub fn predict_salary_with_model(
    registry: &ArtifactRegistry,
    builder: &FeatureBuilder,
    profile: &Profile,
) -> Resolution<ModelDerivedSalary> {
    let model = registry
        .salary_model()
        .ok_or(FallbackReason::ModelUnavailable)?;
    let schema = registry
        .salary_schema()
        .ok_or(FallbackReason::SchemaUnavailable)?;

    let row = builder.build(profile, schema, PredictionTask::Salary, registry.encoders());
    let row = scale_best_effort(registry.scaler(), row);

    let prediction = model
        .predict(&row)
        .map_err(|e| FallbackReason::InferenceFailed(e.to_string()))?;

    let salary_usd = match &prediction {
        Prediction::Numeric(v) => *v,
        Prediction::Label(label) => label
            .trim()
            .parse::<f64>()
            .map_err(|_| FallbackReason::InvalidPrediction(format!("non-numeric '{label}'")))?,
    };
    if !salary_usd.is_finite() || salary_usd < 0.0 {
        return Err(FallbackReason::InvalidPrediction(salary_usd.to_string()));
    }

    let salary_inr = salary_usd * USD_TO_INR;
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    if salary_inr >= i64::MAX as f64 {
        return Err(FallbackReason::InvalidPrediction(format!(
            "{salary_usd} USD overflows the INR amount"
        )));
    }

    Ok(ModelDerivedSalary {
        salary_usd,
        amount_inr: salary_inr as i64,
    })
}

/// Model first, heuristic on any fallback. Never fails.
pub fn resolve_salary(
    registry: &ArtifactRegistry,
    builder: &FeatureBuilder,
    heuristics: &HeuristicEngine,
    profile: &Profile,
) -> SalaryEstimate {
    match predict_salary_with_model(registry, builder, profile) {
        Ok(derived) => {
            debug!(
                "Salary model predicted {:.2} USD → {} INR",
                derived.salary_usd, derived.amount_inr
            );
            SalaryEstimate {
                amount_inr: derived.amount_inr,
                currency: CURRENCY.to_string(),
                provenance: Provenance::ModelDerived,
                fallback_reason: None,
            }
        }
        Err(reason) => {
            info!("Salary heuristic fallback: {reason}");
            SalaryEstimate {
                amount_inr: heuristics.salary(&profile.target_role, profile.years_of_experience),
                currency: CURRENCY.to_string(),
                provenance: Provenance::HeuristicFallback,
                fallback_reason: Some(reason.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;

    use super::*;
    use crate::advisor::inference::test_support::{FailingPredictor, FailingScaler, FixedPredictor};
    use crate::artifacts::formats::{LabelEncoder, LinearRegression, StandardScaler};
    use crate::artifacts::{Encoder, Predictor, Scaler};
    use crate::features::schema::FeatureSchema;
    use crate::models::profile::{LanguageProficiency, PortfolioStrength, RemotePreference};

    fn profile(target: &str, years: u32) -> Profile {
        Profile {
            current_role: "Frontend Developer".to_string(),
            target_role: target.to_string(),
            education: "Bachelor's in Computer Science".to_string(),
            portfolio_strength: PortfolioStrength::High,
            certifications: "None".to_string(),
            language_proficiency: LanguageProficiency::Intermediate,
            remote_preference: RemotePreference::Onsite,
            years_of_experience: years,
            projects_completed: 3,
            communication_rating: 6,
            skills: vec![],
        }
    }

    fn schema() -> FeatureSchema {
        FeatureSchema::new([
            "target_job_title",
            "years_of_experience",
            "portfolio_strength",
            "estimated_salary_usd",
        ])
    }

    fn linear_model() -> Arc<dyn Predictor> {
        Arc::new(LinearRegression {
            intercept: 10_000.0,
            coefficients: BTreeMap::from([
                ("years_of_experience".to_string(), 1_000.0),
                ("portfolio_strength".to_string(), 500.0),
            ]),
        })
    }

    fn resolve(registry: &ArtifactRegistry, p: &Profile) -> SalaryEstimate {
        resolve_salary(registry, &FeatureBuilder::default(), &HeuristicEngine::builtin(), p)
    }

    #[test]
    fn test_product_manager_without_artifacts() {
        let estimate = resolve(&ArtifactRegistry::empty(), &profile("Product Manager", 10));
        assert_eq!(estimate.amount_inr, 1_600_000);
        assert_eq!(estimate.currency, "INR");
        assert_eq!(estimate.provenance, Provenance::HeuristicFallback);
        assert_eq!(estimate.fallback_reason.as_deref(), Some("model not available"));
    }

    #[test]
    fn test_unknown_target_role_uses_default_base() {
        let estimate = resolve(&ArtifactRegistry::empty(), &profile("Astronaut", 0));
        assert_eq!(estimate.amount_inr, 450_000);
    }

    #[test]
    fn test_model_without_schema_falls_back() {
        let registry = ArtifactRegistry::empty().with_salary_model(linear_model());
        let estimate = resolve(&registry, &profile("Data Scientist", 2));
        assert_eq!(estimate.provenance, Provenance::HeuristicFallback);
        assert_eq!(
            estimate.fallback_reason.as_deref(),
            Some("feature schema not available")
        );
    }

    #[test]
    fn test_model_path_converts_usd_to_inr() {
        let registry = ArtifactRegistry::empty()
            .with_salary_model(linear_model())
            .with_salary_schema(schema());
        let estimate = resolve(&registry, &profile("Data Scientist", 4));
        // 10000 + 4×1000 + 2×500 = 15000 USD → × 82
        assert_eq!(estimate.amount_inr, 1_230_000);
        assert_eq!(estimate.provenance, Provenance::ModelDerived);
        assert!(estimate.fallback_reason.is_none());
    }

    #[test]
    fn test_failing_model_matches_no_model_result() {
        let p = profile("UI/UX Designer", 7);
        let without = resolve(&ArtifactRegistry::empty(), &p);
        let failing = resolve(
            &ArtifactRegistry::empty()
                .with_salary_model(Arc::new(FailingPredictor))
                .with_salary_schema(schema()),
            &p,
        );
        assert_eq!(failing.amount_inr, without.amount_inr);
        assert_eq!(failing.provenance, Provenance::HeuristicFallback);
        assert!(failing
            .fallback_reason
            .unwrap()
            .starts_with("model inference failed"));
    }

    #[test]
    fn test_missing_model_column_falls_back() {
        let registry = ArtifactRegistry::empty()
            .with_salary_model(linear_model())
            .with_salary_schema(FeatureSchema::new(["years_of_experience"]));
        let estimate = resolve(&registry, &profile("Frontend Engineer", 1));
        assert_eq!(estimate.provenance, Provenance::HeuristicFallback);
        assert_eq!(estimate.amount_inr, 742_000);
    }

    #[test]
    fn test_scaler_failure_still_uses_model() {
        let registry = ArtifactRegistry::empty()
            .with_salary_model(linear_model())
            .with_salary_schema(schema())
            .with_scaler(Arc::new(FailingScaler) as Arc<dyn Scaler>);
        let estimate = resolve(&registry, &profile("Data Scientist", 4));
        assert_eq!(estimate.provenance, Provenance::ModelDerived);
        assert_eq!(estimate.amount_inr, 1_230_000);
    }

    #[test]
    fn test_scaler_is_applied_before_predict() {
        let scaler = StandardScaler {
            feature_names: vec![
                "target_job_title".to_string(),
                "years_of_experience".to_string(),
                "portfolio_strength".to_string(),
            ],
            mean: vec![0.0, 4.0, 0.0],
            scale: vec![1.0, 1.0, 1.0],
        };
        let registry = ArtifactRegistry::empty()
            .with_salary_model(linear_model())
            .with_salary_schema(schema())
            .with_scaler(Arc::new(scaler) as Arc<dyn Scaler>);
        let estimate = resolve(&registry, &profile("Data Scientist", 4));
        // years centred to 0 → 10000 + 2×500 = 11000 USD
        assert_eq!(estimate.amount_inr, 902_000);
    }

    #[test]
    fn test_encoder_feeds_target_role_code() {
        let model: Arc<dyn Predictor> = Arc::new(LinearRegression {
            intercept: 0.0,
            coefficients: BTreeMap::from([("target_job_title".to_string(), 1_000.0)]),
        });
        let registry = ArtifactRegistry::empty()
            .with_salary_model(model)
            .with_salary_schema(schema())
            .with_encoder(
                "target_job_title",
                Arc::new(LabelEncoder::new(["Data Scientist", "Product Manager"]))
                    as Arc<dyn Encoder>,
            );
        let estimate = resolve(&registry, &profile("Product Manager", 0));
        assert_eq!(estimate.amount_inr, 82_000);
    }

    #[test]
    fn test_unusable_predictions_fall_back() {
        for bad in [
            Prediction::Numeric(f64::NAN),
            Prediction::Numeric(-5.0),
            Prediction::Numeric(1e300),
            Prediction::Label("high".to_string()),
        ] {
            let registry = ArtifactRegistry::empty()
                .with_salary_model(Arc::new(FixedPredictor(bad)))
                .with_salary_schema(schema());
            let estimate = resolve(&registry, &profile("Marketing Analyst", 0));
            assert_eq!(estimate.provenance, Provenance::HeuristicFallback);
            assert_eq!(estimate.amount_inr, 350_000);
        }
    }

    #[test]
    fn test_oversized_prediction_is_rejected() {
        let registry = ArtifactRegistry::empty()
            .with_salary_model(Arc::new(FixedPredictor(Prediction::Numeric(1e300))))
            .with_salary_schema(schema());
        let result = predict_salary_with_model(
            &registry,
            &FeatureBuilder::default(),
            &profile("Product Manager", 10),
        );
        assert!(matches!(result, Err(FallbackReason::InvalidPrediction(_))));

        let estimate = resolve(&registry, &profile("Product Manager", 10));
        assert_eq!(estimate.provenance, Provenance::HeuristicFallback);
        assert_eq!(estimate.amount_inr, 1_600_000);
    }

    #[test]
    fn test_numeric_label_prediction_is_accepted() {
        let registry = ArtifactRegistry::empty()
            .with_salary_model(Arc::new(FixedPredictor(Prediction::Label("1000".to_string()))))
            .with_salary_schema(schema());
        let estimate = resolve(&registry, &profile("Marketing Analyst", 0));
        assert_eq!(estimate.provenance, Provenance::ModelDerived);
        assert_eq!(estimate.amount_inr, 82_000);
    }
}
