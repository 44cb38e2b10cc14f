//! Career profile — the raw form submitted by a client and the validated
//! `Profile` consumed by the prediction pipeline.

use serde::{Deserialize, Serialize};

pub const MAX_YEARS_OF_EXPERIENCE: i64 = 40;
pub const MAX_PROJECTS_COMPLETED: i64 = 50;
pub const MIN_COMMUNICATION_RATING: i64 = 1;
pub const MAX_COMMUNICATION_RATING: i64 = 10;
pub const DEFAULT_COMMUNICATION_RATING: i64 = 5;

/// Certification value meaning "no certification held".
pub const NO_CERTIFICATION: &str = "None";

pub const EDUCATION_OPTIONS: &[&str] = &[
    "Associate Degree in IT",
    "Bachelor's in IT",
    "Bachelor's in Computer Science",
    "Bachelor's in Design",
    "Bachelor's in Marketing",
    "MBA",
    "Bachelor's in Statistics",
];

pub const CERTIFICATION_OPTIONS: &[&str] = &[
    NO_CERTIFICATION,
    "AWS Certified",
    "Certified UX Designer",
    "DataCamp Track",
];

// ────────────────────────────────────────────────────────────────────────────
// Categorical levels
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortfolioStrength {
    Low,
    Medium,
    High,
}

impl PortfolioStrength {
    pub const ALL: [PortfolioStrength; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.label() == value.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageProficiency {
    Beginner,
    Intermediate,
    Advanced,
}

impl LanguageProficiency {
    pub const ALL: [LanguageProficiency; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.label() == value.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RemotePreference {
    Onsite,
    Hybrid,
    Remote,
}

impl RemotePreference {
    pub const ALL: [RemotePreference; 3] = [Self::Onsite, Self::Hybrid, Self::Remote];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Onsite => "Onsite",
            Self::Hybrid => "Hybrid",
            Self::Remote => "Remote",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.label() == value.trim())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Raw form (pre-validation)
// ────────────────────────────────────────────────────────────────────────────

/// Profile exactly as submitted. Selector fields may be missing or still hold a
/// "Select…" placeholder; numeric fields are signed so out-of-range input is
/// reported by validation rather than rejected by the deserializer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileForm {
    pub current_job: Option<String>,
    pub target_job: Option<String>,
    pub education: Option<String>,
    pub portfolio_strength: Option<String>,
    pub certifications: Option<String>,
    pub language_proficiency: Option<String>,
    pub remote_preference: Option<String>,
    #[serde(default)]
    pub years_of_experience: i64,
    #[serde(default)]
    pub projects_completed: i64,
    #[serde(default = "default_communication_rating")]
    pub communication_rating: i64,
    #[serde(default)]
    pub skills: String,
}

fn default_communication_rating() -> i64 {
    DEFAULT_COMMUNICATION_RATING
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            current_job: None,
            target_job: None,
            education: None,
            portfolio_strength: None,
            certifications: None,
            language_proficiency: None,
            remote_preference: None,
            years_of_experience: 0,
            projects_completed: 0,
            communication_rating: DEFAULT_COMMUNICATION_RATING,
            skills: String::new(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Validated profile
// ────────────────────────────────────────────────────────────────────────────

/// A fully selected profile. Only `advisor::validation` constructs these from
/// user input, so every selector holds a concrete value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub current_role: String,
    pub target_role: String,
    pub education: String,
    pub portfolio_strength: PortfolioStrength,
    pub certifications: String,
    pub language_proficiency: LanguageProficiency,
    pub remote_preference: RemotePreference,
    pub years_of_experience: u32,
    pub projects_completed: u32,
    pub communication_rating: u8,
    pub skills: Vec<String>,
}

/// Categorical profile attributes addressable by feature resolvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    CurrentJobTitle,
    TargetJobTitle,
    EducationLevel,
    PortfolioStrength,
    Certifications,
    LanguageProficiency,
    RemoteWorkPreference,
}

/// Numeric profile attributes copied verbatim into feature rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    YearsOfExperience,
    ProjectsCompleted,
    CommunicationRating,
}

impl Profile {
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::CurrentJobTitle => &self.current_role,
            TextField::TargetJobTitle => &self.target_role,
            TextField::EducationLevel => &self.education,
            TextField::PortfolioStrength => self.portfolio_strength.label(),
            TextField::Certifications => &self.certifications,
            TextField::LanguageProficiency => self.language_proficiency.label(),
            TextField::RemoteWorkPreference => self.remote_preference.label(),
        }
    }

    pub fn number(&self, field: NumericField) -> f64 {
        match field {
            NumericField::YearsOfExperience => self.years_of_experience as f64,
            NumericField::ProjectsCompleted => self.projects_completed as f64,
            NumericField::CommunicationRating => self.communication_rating as f64,
        }
    }

    /// Any value other than exactly "None" counts as held.
    pub fn has_certification(&self) -> bool {
        self.certifications != NO_CERTIFICATION
    }
}

/// Splits comma-separated skills, trimming whitespace and dropping empties.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
