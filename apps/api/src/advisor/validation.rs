//! Profile validation — gates the prediction pipeline.
//!
//! A selector is unselected when it is absent, blank, or still holds a
//! "Select…" placeholder. Every problem is collected; the pipeline runs only
//! when the list is empty.

use serde::{Deserialize, Serialize};

use crate::models::profile::{
    parse_skills, LanguageProficiency, PortfolioStrength, Profile, ProfileForm, RemotePreference,
    MAX_COMMUNICATION_RATING, MAX_PROJECTS_COMPLETED, MAX_YEARS_OF_EXPERIENCE,
    MIN_COMMUNICATION_RATING, NO_CERTIFICATION,
};

const PLACEHOLDER_PREFIX: &str = "Select";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

pub fn is_placeholder(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        None => true,
        Some(v) => v.is_empty() || v.starts_with(PLACEHOLDER_PREFIX),
    }
}

/// Validates a raw form into a `Profile`, or returns every field-level error
/// in form order.
pub fn validate_profile(form: &ProfileForm) -> Result<Profile, Vec<FieldError>> {
    let mut errors = Vec::new();

    let current_role = select_text(
        form.current_job.as_deref(),
        "current_job",
        "Choose your current job.",
        &mut errors,
    );
    let target_role = select_text(
        form.target_job.as_deref(),
        "target_job",
        "Choose your target job.",
        &mut errors,
    );
    let education = select_text(
        form.education.as_deref(),
        "education",
        "Select your education level.",
        &mut errors,
    );
    let portfolio_strength = select_level(
        form.portfolio_strength.as_deref(),
        "portfolio_strength",
        "Select portfolio strength.",
        PortfolioStrength::from_label,
        &mut errors,
    );
    // Certifications may be left unselected; that means none held.
    let certifications = if is_placeholder(form.certifications.as_deref()) {
        NO_CERTIFICATION.to_string()
    } else {
        form.certifications.as_deref().unwrap_or_default().trim().to_string()
    };
    let language_proficiency = select_level(
        form.language_proficiency.as_deref(),
        "language_proficiency",
        "Select language proficiency.",
        LanguageProficiency::from_label,
        &mut errors,
    );
    let remote_preference = select_level(
        form.remote_preference.as_deref(),
        "remote_preference",
        "Select remote preference.",
        RemotePreference::from_label,
        &mut errors,
    );

    let years = in_range(
        form.years_of_experience,
        0,
        MAX_YEARS_OF_EXPERIENCE,
        "years_of_experience",
        &mut errors,
    );
    let projects = in_range(
        form.projects_completed,
        0,
        MAX_PROJECTS_COMPLETED,
        "projects_completed",
        &mut errors,
    );
    let rating = in_range(
        form.communication_rating,
        MIN_COMMUNICATION_RATING,
        MAX_COMMUNICATION_RATING,
        "communication_rating",
        &mut errors,
    );

    match (
        current_role,
        target_role,
        education,
        portfolio_strength,
        language_proficiency,
        remote_preference,
        years,
        projects,
        rating,
    ) {
        (
            Some(current_role),
            Some(target_role),
            Some(education),
            Some(portfolio_strength),
            Some(language_proficiency),
            Some(remote_preference),
            Some(years),
            Some(projects),
            Some(rating),
        ) if errors.is_empty() => Ok(Profile {
            current_role,
            target_role,
            education,
            portfolio_strength,
            certifications,
            language_proficiency,
            remote_preference,
            // Bounds checked above
            years_of_experience: years as u32,
            projects_completed: projects as u32,
            communication_rating: rating as u8,
            skills: parse_skills(&form.skills),
        }),
        _ => Err(errors),
    }
}

fn select_text(
    value: Option<&str>,
    field: &str,
    missing: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    if is_placeholder(value) {
        errors.push(FieldError::new(field, missing));
        return None;
    }
    value.map(|v| v.trim().to_string())
}

fn select_level<T>(
    value: Option<&str>,
    field: &str,
    missing: &str,
    parse: fn(&str) -> Option<T>,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    let text = select_text(value, field, missing, errors)?;
    let level = parse(&text);
    if level.is_none() {
        errors.push(FieldError::new(
            field,
            format!("'{text}' is not a valid {}.", field.replace('_', " ")),
        ));
    }
    level
}

fn in_range(
    value: i64,
    min: i64,
    max: i64,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<i64> {
    if (min..=max).contains(&value) {
        Some(value)
    } else {
        errors.push(FieldError::new(
            field,
            format!(
                "{} must be between {min} and {max} (got {value}).",
                field.replace('_', " ")
            ),
        ));
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> ProfileForm {
        ProfileForm {
            current_job: Some("Junior Data Analyst".to_string()),
            target_job: Some("Data Scientist".to_string()),
            education: Some("Bachelor's in Statistics".to_string()),
            portfolio_strength: Some("Medium".to_string()),
            certifications: Some("DataCamp Track".to_string()),
            language_proficiency: Some("Advanced".to_string()),
            remote_preference: Some("Hybrid".to_string()),
            years_of_experience: 2,
            projects_completed: 5,
            communication_rating: 7,
            skills: "Python, SQL".to_string(),
        }
    }

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_complete_form_passes() {
        let profile = validate_profile(&complete_form()).unwrap();
        assert_eq!(profile.target_role, "Data Scientist");
        assert_eq!(profile.portfolio_strength, PortfolioStrength::Medium);
        assert_eq!(profile.remote_preference, RemotePreference::Hybrid);
        assert_eq!(profile.years_of_experience, 2);
        assert_eq!(profile.skills, vec!["Python".to_string(), "SQL".to_string()]);
        assert!(profile.has_certification());
    }

    #[test]
    fn test_untouched_form_reports_every_selector() {
        let errors = validate_profile(&ProfileForm::default()).unwrap_err();
        let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Choose your current job.",
                "Choose your target job.",
                "Select your education level.",
                "Select portfolio strength.",
                "Select language proficiency.",
                "Select remote preference.",
            ]
        );
    }

    #[test]
    fn test_placeholder_strings_count_as_unselected() {
        let mut form = complete_form();
        form.current_job = Some("Select current job".to_string());
        form.portfolio_strength = Some("Select...".to_string());
        form.education = Some("   ".to_string());
        let errors = validate_profile(&form).unwrap_err();
        assert_eq!(
            fields(&errors),
            vec!["current_job", "education", "portfolio_strength"]
        );
    }

    #[test]
    fn test_each_single_missing_field_is_reported() {
        let clear: [fn(&mut ProfileForm); 6] = [
            |f| f.current_job = None,
            |f| f.target_job = None,
            |f| f.education = None,
            |f| f.portfolio_strength = None,
            |f| f.language_proficiency = None,
            |f| f.remote_preference = None,
        ];
        let expected = [
            "current_job",
            "target_job",
            "education",
            "portfolio_strength",
            "language_proficiency",
            "remote_preference",
        ];
        for (clear_field, field) in clear.iter().zip(expected) {
            let mut form = complete_form();
            clear_field(&mut form);
            let errors = validate_profile(&form).unwrap_err();
            assert_eq!(fields(&errors), vec![field]);
        }
    }

    #[test]
    fn test_unselected_certification_becomes_none() {
        let mut form = complete_form();
        form.certifications = Some("Select...".to_string());
        let profile = validate_profile(&form).unwrap();
        assert_eq!(profile.certifications, "None");
        assert!(!profile.has_certification());

        form.certifications = None;
        assert_eq!(validate_profile(&form).unwrap().certifications, "None");
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let mut form = complete_form();
        form.language_proficiency = Some("Fluent".to_string());
        let errors = validate_profile(&form).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "language_proficiency");
        assert!(errors[0].message.contains("Fluent"));
    }

    #[test]
    fn test_numeric_bounds() {
        let mut form = complete_form();
        form.years_of_experience = -1;
        form.projects_completed = 51;
        form.communication_rating = 0;
        let errors = validate_profile(&form).unwrap_err();
        assert_eq!(
            fields(&errors),
            vec!["years_of_experience", "projects_completed", "communication_rating"]
        );

        form.years_of_experience = 40;
        form.projects_completed = 0;
        form.communication_rating = 10;
        assert!(validate_profile(&form).is_ok());
    }

    #[test]
    fn test_is_placeholder() {
        assert!(is_placeholder(None));
        assert!(is_placeholder(Some("")));
        assert!(is_placeholder(Some("Select target job")));
        assert!(!is_placeholder(Some("Product Manager")));
    }
}
