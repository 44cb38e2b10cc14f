use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::advisor::career::CareerSuggestion;
use crate::advisor::content::{Course, RoadmapStage};
use crate::advisor::salary::SalaryEstimate;

/// Echo of the validated profile shown above the analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub current_role: String,
    pub target_role: String,
    pub years_of_experience: u32,
    pub projects_completed: u32,
    pub skills: Vec<String>,
    pub skill_count: usize,
    pub portfolio_strength: String,
    pub certifications: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapEntry {
    pub stage: RoadmapStage,
    pub text: String,
}

/// Full result of one analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerReport {
    pub analysis_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub profile_summary: ProfileSummary,
    pub salary: SalaryEstimate,
    pub career: CareerSuggestion,
    pub skill_gaps: Vec<String>,
    pub courses: Vec<Course>,
    pub roadmap: Vec<RoadmapEntry>,
}
