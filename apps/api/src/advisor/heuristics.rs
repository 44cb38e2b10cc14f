//! Heuristic Engine — deterministic, model-free fallbacks.
//!
//! Salary: role base (INR/year) × (1 + min(years, 10) × 0.06), truncated.
//! Content: role → skill gaps / courses / roadmap with default-role fallback.

use std::collections::HashMap;
use std::sync::Arc;

use crate::advisor::content::{Course, Roadmap, RoleContentTables};

/// Base used for roles absent from the salary table.
pub const DEFAULT_BASE_SALARY_INR: i64 = 450_000;

/// Experience beyond this many years adds nothing.
pub const EXPERIENCE_CAP_YEARS: u32 = 10;

/// Salary uplift per credited year.
const UPLIFT_PER_YEAR: f64 = 0.06;

const BASE_SALARY_INR: &[(&str, i64)] = &[
    ("Data Scientist", 900_000),
    ("Frontend Engineer", 700_000),
    ("System Administrator", 500_000),
    ("UI/UX Designer", 600_000),
    ("Product Manager", 1_000_000),
    ("Junior Data Analyst", 350_000),
    ("Frontend Developer", 650_000),
    ("Technical Support Engineer", 300_000),
    ("Junior UI/UX Designer", 350_000),
    ("Marketing Analyst", 350_000),
];

/// Role → yearly base salary in INR.
#[derive(Debug, Clone)]
pub struct SalaryTable {
    bases: HashMap<String, i64>,
    default_base: i64,
}

impl SalaryTable {
    pub fn new(bases: HashMap<String, i64>, default_base: i64) -> Self {
        Self {
            bases,
            default_base,
        }
    }

    pub fn builtin() -> Self {
        Self::new(
            BASE_SALARY_INR
                .iter()
                .map(|(role, base)| (role.to_string(), *base))
                .collect(),
            DEFAULT_BASE_SALARY_INR,
        )
    }

    pub fn base_for(&self, role: &str) -> i64 {
        self.bases.get(role).copied().unwrap_or(self.default_base)
    }
}

#[derive(Debug, Clone)]
pub struct HeuristicEngine {
    salaries: SalaryTable,
    content: Arc<RoleContentTables>,
}

impl HeuristicEngine {
    pub fn new(salaries: SalaryTable, content: Arc<RoleContentTables>) -> Self {
        Self { salaries, content }
    }

    pub fn builtin() -> Self {
        Self::new(SalaryTable::builtin(), Arc::new(RoleContentTables::builtin()))
    }

    pub fn content(&self) -> &RoleContentTables {
        &self.content
    }

    /// Fully reproducible from (role, years). The multiplier is computed in
    /// floating point and the product truncated toward zero, so some years
    /// land one rupee below the exact decimal value (1_000_000 × 1.36 gives
    /// 1_359_999).
    pub fn salary(&self, target_role: &str, years_of_experience: u32) -> i64 {
        let base = self.salaries.base_for(target_role);
        let credited = years_of_experience.min(EXPERIENCE_CAP_YEARS) as f64;
        (base as f64 * (1.0 + credited * UPLIFT_PER_YEAR)) as i64
    }

    pub fn skill_gaps(&self, role: &str) -> &[String] {
        self.content.skill_gaps(role)
    }

    pub fn courses(&self, role: &str) -> &[Course] {
        self.content.courses(role)
    }

    pub fn roadmap(&self, role: &str) -> Option<&Roadmap> {
        self.content.roadmap(role)
    }
}
