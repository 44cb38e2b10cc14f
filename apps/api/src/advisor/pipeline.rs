//! Career Advisor — one pass per submission:
//! validate → salary (model or heuristic) → career preview → role content.
//!
//! Holds only read-only state, so a single instance is shared across requests.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::advisor::career::suggest_career;
use crate::advisor::content::ContentError;
use crate::advisor::heuristics::HeuristicEngine;
use crate::advisor::salary::resolve_salary;
use crate::advisor::validation::{validate_profile, FieldError};
use crate::artifacts::registry::ArtifactStatus;
use crate::artifacts::ArtifactRegistry;
use crate::features::builder::FeatureBuilder;
use crate::models::profile::{
    LanguageProficiency, PortfolioStrength, Profile, ProfileForm, RemotePreference,
    CERTIFICATION_OPTIONS, EDUCATION_OPTIONS, MAX_COMMUNICATION_RATING, MAX_PROJECTS_COMPLETED,
    MAX_YEARS_OF_EXPERIENCE, MIN_COMMUNICATION_RATING,
};
use crate::models::report::{CareerReport, ProfileSummary, RoadmapEntry};

/// Selector option lists for form clients.
#[derive(Debug, Clone, Serialize)]
pub struct FormOptions {
    pub roles: Vec<String>,
    pub education: Vec<String>,
    pub portfolio_strength: Vec<String>,
    pub certifications: Vec<String>,
    pub language_proficiency: Vec<String>,
    pub remote_preference: Vec<String>,
    pub years_of_experience: NumericBounds,
    pub projects_completed: NumericBounds,
    pub communication_rating: NumericBounds,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NumericBounds {
    pub min: i64,
    pub max: i64,
}

pub struct CareerAdvisor {
    registry: Arc<ArtifactRegistry>,
    builder: FeatureBuilder,
    heuristics: HeuristicEngine,
}

impl CareerAdvisor {
    /// Fails only when the content tables cannot serve every known role.
    pub fn new(
        registry: Arc<ArtifactRegistry>,
        builder: FeatureBuilder,
        heuristics: HeuristicEngine,
    ) -> Result<Self, ContentError> {
        heuristics.content().verify()?;
        Ok(Self {
            registry,
            builder,
            heuristics,
        })
    }

    pub fn artifact_status(&self) -> ArtifactStatus {
        self.registry.status()
    }

    /// Validates the form and, only if it passes, runs the full analysis.
    pub fn analyze(&self, form: &ProfileForm) -> Result<CareerReport, Vec<FieldError>> {
        let profile = validate_profile(form)?;
        Ok(self.analyze_profile(&profile))
    }

    pub fn analyze_profile(&self, profile: &Profile) -> CareerReport {
        let salary = resolve_salary(&self.registry, &self.builder, &self.heuristics, profile);
        let career = suggest_career(&self.registry, &self.builder, profile);

        let role = profile.target_role.as_str();
        let skill_gaps = self.heuristics.skill_gaps(role).to_vec();
        let courses = self.heuristics.courses(role).to_vec();
        let roadmap = self
            .heuristics
            .roadmap(role)
            .map(|r| {
                r.stages()
                    .into_iter()
                    .map(|(stage, text)| RoadmapEntry {
                        stage,
                        text: text.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        info!(
            "Analysis {} → {}: salary {} INR ({:?})",
            profile.current_role, profile.target_role, salary.amount_inr, salary.provenance
        );

        CareerReport {
            analysis_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            profile_summary: ProfileSummary {
                current_role: profile.current_role.clone(),
                target_role: profile.target_role.clone(),
                years_of_experience: profile.years_of_experience,
                projects_completed: profile.projects_completed,
                skill_count: profile.skills.len(),
                skills: profile.skills.clone(),
                portfolio_strength: profile.portfolio_strength.label().to_string(),
                certifications: profile.certifications.clone(),
            },
            salary,
            career,
            skill_gaps,
            courses,
            roadmap,
        }
    }

    pub fn form_options(&self) -> FormOptions {
        let labels =
            |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
        FormOptions {
            roles: self.heuristics.content().roles().to_vec(),
            education: labels(EDUCATION_OPTIONS),
            portfolio_strength: PortfolioStrength::ALL
                .iter()
                .map(|l| l.label().to_string())
                .collect(),
            certifications: labels(CERTIFICATION_OPTIONS),
            language_proficiency: LanguageProficiency::ALL
                .iter()
                .map(|l| l.label().to_string())
                .collect(),
            remote_preference: RemotePreference::ALL
                .iter()
                .map(|l| l.label().to_string())
                .collect(),
            years_of_experience: NumericBounds {
                min: 0,
                max: MAX_YEARS_OF_EXPERIENCE,
            },
            projects_completed: NumericBounds {
                min: 0,
                max: MAX_PROJECTS_COMPLETED,
            },
            communication_rating: NumericBounds {
                min: MIN_COMMUNICATION_RATING,
                max: MAX_COMMUNICATION_RATING,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::advisor::career::ModelPreview;
    use crate::advisor::content::{RoadmapStage, RoleContentTables, DEFAULT_ROLE};
    use crate::advisor::heuristics::SalaryTable;
    use crate::advisor::inference::Provenance;

    fn advisor() -> CareerAdvisor {
        CareerAdvisor::new(
            Arc::new(ArtifactRegistry::empty()),
            FeatureBuilder::default(),
            HeuristicEngine::builtin(),
        )
        .unwrap()
    }

    fn form(target: &str, years: i64) -> ProfileForm {
        ProfileForm {
            current_job: Some("Technical Support Engineer".to_string()),
            target_job: Some(target.to_string()),
            education: Some("MBA".to_string()),
            portfolio_strength: Some("Medium".to_string()),
            certifications: Some("Select...".to_string()),
            language_proficiency: Some("Intermediate".to_string()),
            remote_preference: Some("Hybrid".to_string()),
            years_of_experience: years,
            projects_completed: 2,
            communication_rating: 8,
            skills: "Jira, SQL, ".to_string(),
        }
    }

    #[test]
    fn test_product_manager_scenario() {
        let report = advisor().analyze(&form("Product Manager", 10)).unwrap();

        assert_eq!(report.salary.amount_inr, 1_600_000);
        assert_eq!(report.salary.provenance, Provenance::HeuristicFallback);
        assert_eq!(report.career.recommended_role, "Product Manager");
        assert!(matches!(
            report.career.model_preview,
            ModelPreview::Unavailable { .. }
        ));
        assert_eq!(
            report.skill_gaps,
            vec![
                "User research & product discovery",
                "Roadmapping & prioritization",
                "Stakeholder communication",
                "Metrics & experimentation",
                "Basic data analysis",
            ]
        );
        let build = report
            .roadmap
            .iter()
            .find(|e| e.stage == RoadmapStage::Build)
            .unwrap();
        assert_eq!(build.text, "Create 2 product case studies + a product roadmap.");
        assert_eq!(report.roadmap.len(), 5);
        assert_eq!(report.roadmap[0].stage, RoadmapStage::Assess);
    }

    #[test]
    fn test_unknown_target_role_scenario() {
        let a = advisor();
        let report = a.analyze(&form("Astronaut", 0)).unwrap();
        assert_eq!(report.salary.amount_inr, 450_000);
        assert_eq!(report.career.recommended_role, "Astronaut");
        assert_eq!(
            report.skill_gaps,
            a.heuristics.skill_gaps(DEFAULT_ROLE).to_vec()
        );
        assert_eq!(report.courses, a.heuristics.courses(DEFAULT_ROLE).to_vec());
        assert_eq!(
            report.roadmap[0].text,
            "Review Python, SQL, portfolio, machine learning basics."
        );
    }

    #[test]
    fn test_validation_failure_blocks_analysis() {
        let mut f = form("Product Manager", 3);
        f.remote_preference = Some("Select...".to_string());
        let errors = advisor().analyze(&f).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Select remote preference.");
    }

    #[test]
    fn test_profile_summary() {
        let report = advisor().analyze(&form("Data Scientist", 1)).unwrap();
        let summary = &report.profile_summary;
        assert_eq!(summary.skill_count, 2);
        assert_eq!(summary.skills, vec!["Jira".to_string(), "SQL".to_string()]);
        assert_eq!(summary.certifications, "None");
        assert_eq!(summary.portfolio_strength, "Medium");
    }

    #[test]
    fn test_content_is_deterministic_for_every_role() {
        let a = advisor();
        for role in a.heuristics.content().roles().to_vec() {
            let first = a.analyze(&form(&role, 4)).unwrap();
            let second = a.analyze(&form(&role, 4)).unwrap();
            assert!(!first.skill_gaps.is_empty());
            assert!(!first.courses.is_empty());
            assert_eq!(first.roadmap.len(), 5);
            assert_eq!(first.skill_gaps, second.skill_gaps);
            assert_eq!(first.courses, second.courses);
            assert_eq!(first.roadmap, second.roadmap);
            assert_eq!(first.salary, second.salary);
        }
    }

    #[test]
    fn test_new_rejects_unusable_content() {
        let content = RoleContentTables::new(
            vec!["Chef".to_string()],
            "Chef",
            HashMap::new(),
            HashMap::new(),
            HashMap::new(),
        );
        let heuristics = HeuristicEngine::new(SalaryTable::builtin(), Arc::new(content));
        let result = CareerAdvisor::new(
            Arc::new(ArtifactRegistry::empty()),
            FeatureBuilder::default(),
            heuristics,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_form_options() {
        let options = advisor().form_options();
        assert_eq!(options.roles.len(), 10);
        assert_eq!(options.roles[0], "Data Scientist");
        assert_eq!(options.portfolio_strength, vec!["Low", "Medium", "High"]);
        assert_eq!(options.remote_preference, vec!["Onsite", "Hybrid", "Remote"]);
        assert_eq!(options.certifications[0], "None");
        assert_eq!(options.communication_rating.max, 10);
    }
}
