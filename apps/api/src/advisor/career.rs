//! Career suggestion.
//!
//! The user's chosen target role is always the recommendation. The career
//! model, when present, only contributes an informational preview that is
//! decoded to a role name through the target-role encoder if one exists.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::advisor::inference::{scale_best_effort, FallbackReason, Resolution};
use crate::artifacts::{ArtifactRegistry, Encoder, Prediction};
use crate::features::builder::FeatureBuilder;
use crate::features::schema::PredictionTask;
use crate::models::profile::Profile;

/// Encoder used to decode the career model's class codes.
const TARGET_ROLE_ENCODER: &str = "target_job_title";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ModelPreview {
    Available { role: String },
    Unavailable { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerSuggestion {
    /// Always the user's target role.
    pub recommended_role: String,
    pub model_preview: ModelPreview,
}

pub fn predict_career_with_model(
    registry: &ArtifactRegistry,
    builder: &FeatureBuilder,
    profile: &Profile,
) -> Resolution<String> {
    let model = registry
        .career_model()
        .ok_or(FallbackReason::ModelUnavailable)?;
    let schema = registry
        .career_schema()
        .ok_or(FallbackReason::SchemaUnavailable)?;

    let row = builder.build(profile, schema, PredictionTask::Career, registry.encoders());
    let row = scale_best_effort(registry.scaler(), row);

    let prediction = model
        .predict(&row)
        .map_err(|e| FallbackReason::InferenceFailed(e.to_string()))?;

    Ok(decode_role(&prediction, registry.encoder(TARGET_ROLE_ENCODER)))
}

/// Maps a class code back to a role name. Names pass through, and a code the
/// encoder cannot invert is shown as-is.
fn decode_role(prediction: &Prediction, encoder: Option<&dyn Encoder>) -> String {
    let Some(encoder) = encoder else {
        return prediction.to_string();
    };
    let code = match prediction {
        Prediction::Numeric(v) if v.is_finite() => Some(v.trunc() as i64),
        Prediction::Numeric(_) => None,
        Prediction::Label(label) => label.trim().parse::<i64>().ok(),
    };
    code.and_then(|c| match encoder.inverse_transform(c) {
        Ok(role) => Some(role),
        Err(e) => {
            debug!("Could not decode career label {c}: {e}");
            None
        }
    })
    .unwrap_or_else(|| prediction.to_string())
}

/// Never fails: the recommendation is the target role and the preview
/// degrades to `Unavailable`.
pub fn suggest_career(
    registry: &ArtifactRegistry,
    builder: &FeatureBuilder,
    profile: &Profile,
) -> CareerSuggestion {
    let model_preview = match predict_career_with_model(registry, builder, profile) {
        Ok(role) => {
            debug!("Career model preview: {role}");
            ModelPreview::Available { role }
        }
        Err(reason) => {
            info!("Career preview unavailable: {reason}");
            ModelPreview::Unavailable {
                reason: reason.to_string(),
            }
        }
    };

    CareerSuggestion {
        recommended_role: profile.target_role.clone(),
        model_preview,
    }
}
