#![allow(dead_code)]

//! Role content tables — skill gaps, courses and roadmaps per role.
//!
//! The built-in tables are static data. Construction fills every role that is
//! missing from a table with the default role's entry, and `verify` checks at
//! startup that every known role resolves to non-empty content.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role whose content stands in for roles without their own entry.
pub const DEFAULT_ROLE: &str = "Data Scientist";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub platform: String,
    pub course: String,
    pub duration: String,
}

impl Course {
    fn new(platform: &str, course: &str, duration: &str) -> Self {
        Self {
            platform: platform.to_string(),
            course: course.to_string(),
            duration: duration.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoadmapStage {
    Assess,
    Learn,
    Build,
    Profile,
    Apply,
}

impl RoadmapStage {
    pub const ORDER: [RoadmapStage; 5] = [
        Self::Assess,
        Self::Learn,
        Self::Build,
        Self::Profile,
        Self::Apply,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap {
    pub assess: String,
    pub learn: String,
    pub build: String,
    pub profile: String,
    pub apply: String,
}

impl Roadmap {
    fn new(stages: [&str; 5]) -> Self {
        let [assess, learn, build, profile, apply] = stages.map(str::to_string);
        Self {
            assess,
            learn,
            build,
            profile,
            apply,
        }
    }

    pub fn stage(&self, stage: RoadmapStage) -> &str {
        match stage {
            RoadmapStage::Assess => &self.assess,
            RoadmapStage::Learn => &self.learn,
            RoadmapStage::Build => &self.build,
            RoadmapStage::Profile => &self.profile,
            RoadmapStage::Apply => &self.apply,
        }
    }

    /// Stages in presentation order.
    pub fn stages(&self) -> Vec<(RoadmapStage, &str)> {
        RoadmapStage::ORDER
            .into_iter()
            .map(|s| (s, self.stage(s)))
            .collect()
    }

    fn is_complete(&self) -> bool {
        RoadmapStage::ORDER
            .into_iter()
            .all(|s| !self.stage(s).trim().is_empty())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ContentError {
    #[error("Default role '{0}' has no {1} entry")]
    DefaultRoleMissing(String, &'static str),

    #[error("Role '{0}' resolves to empty {1}")]
    EmptyContent(String, &'static str),
}

/// Immutable role → content mappings, constructed once at startup.
#[derive(Debug, Clone)]
pub struct RoleContentTables {
    roles: Vec<String>,
    default_role: String,
    skill_gaps: HashMap<String, Vec<String>>,
    courses: HashMap<String, Vec<Course>>,
    roadmaps: HashMap<String, Roadmap>,
}

impl RoleContentTables {
    /// `roles` is the ordered role enumeration offered to users. Roles missing
    /// from `courses` or `roadmaps` get the default role's entry.
    pub fn new(
        roles: Vec<String>,
        default_role: impl Into<String>,
        skill_gaps: HashMap<String, Vec<String>>,
        mut courses: HashMap<String, Vec<Course>>,
        mut roadmaps: HashMap<String, Roadmap>,
    ) -> Self {
        let default_role = default_role.into();

        if let Some(fallback) = courses.get(&default_role).cloned() {
            for role in &roles {
                courses.entry(role.clone()).or_insert_with(|| fallback.clone());
            }
        }
        if let Some(fallback) = roadmaps.get(&default_role).cloned() {
            for role in &roles {
                roadmaps.entry(role.clone()).or_insert_with(|| fallback.clone());
            }
        }

        Self {
            roles,
            default_role,
            skill_gaps,
            courses,
            roadmaps,
        }
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    pub fn default_role(&self) -> &str {
        &self.default_role
    }

    pub fn skill_gaps(&self, role: &str) -> &[String] {
        self.skill_gaps
            .get(role)
            .or_else(|| self.skill_gaps.get(&self.default_role))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn courses(&self, role: &str) -> &[Course] {
        self.courses
            .get(role)
            .or_else(|| self.courses.get(&self.default_role))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn roadmap(&self, role: &str) -> Option<&Roadmap> {
        self.roadmaps
            .get(role)
            .or_else(|| self.roadmaps.get(&self.default_role))
    }

    /// Startup check: the default role has all three entries and every known
    /// role resolves to non-empty content.
    pub fn verify(&self) -> Result<(), ContentError> {
        let default = &self.default_role;
        if !self.skill_gaps.contains_key(default) {
            return Err(ContentError::DefaultRoleMissing(default.clone(), "skill gap"));
        }
        if !self.courses.contains_key(default) {
            return Err(ContentError::DefaultRoleMissing(default.clone(), "course"));
        }
        if !self.roadmaps.contains_key(default) {
            return Err(ContentError::DefaultRoleMissing(default.clone(), "roadmap"));
        }

        for role in self.roles.iter().chain(std::iter::once(default)) {
            if self.skill_gaps(role).is_empty() {
                return Err(ContentError::EmptyContent(role.clone(), "skill gaps"));
            }
            if self.courses(role).is_empty() {
                return Err(ContentError::EmptyContent(role.clone(), "courses"));
            }
            if !self.roadmap(role).is_some_and(Roadmap::is_complete) {
                return Err(ContentError::EmptyContent(role.clone(), "roadmap"));
            }
        }
        Ok(())
    }

    /// The built-in catalog of ten roles.
    pub fn builtin() -> Self {
        let roles: Vec<String> = SKILL_GAPS.iter().map(|(r, _)| r.to_string()).collect();

        let skill_gaps = SKILL_GAPS
            .iter()
            .map(|(role, gaps)| {
                (
                    role.to_string(),
                    gaps.iter().map(|g| g.to_string()).collect(),
                )
            })
            .collect();

        let courses = HashMap::from([
            (
                "Data Scientist".to_string(),
                vec![
                    Course::new("Coursera", "Python for Data Science", "4 weeks"),
                    Course::new("Udemy", "Machine Learning Bootcamp", "6 weeks"),
                    Course::new("YouTube", "Data Viz with Tableau", "3 weeks"),
                ],
            ),
            (
                "UI/UX Designer".to_string(),
                vec![
                    Course::new("Coursera", "UI/UX Specialization", "6 weeks"),
                    Course::new("YouTube", "Design system tutorials", "2 weeks"),
                    Course::new("Udemy", "Figma practical projects", "4 weeks"),
                ],
            ),
        ]);

        let roadmaps = ROADMAPS
            .iter()
            .map(|(role, stages)| (role.to_string(), Roadmap::new(*stages)))
            .collect();

        Self::new(roles, DEFAULT_ROLE, skill_gaps, courses, roadmaps)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Built-in data
// ────────────────────────────────────────────────────────────────────────────

const SKILL_GAPS: &[(&str, [&str; 5])] = &[
    (
        "Data Scientist",
        [
            "Python (Pandas, NumPy)",
            "SQL & Data querying",
            "Machine Learning fundamentals",
            "Data visualization (Matplotlib/Seaborn)",
            "Model deployment (Flask/Streamlit)",
        ],
    ),
    (
        "Frontend Engineer",
        [
            "JavaScript (ES6+)",
            "React fundamentals",
            "HTML/CSS responsive design",
            "Web performance & accessibility",
            "Frontend testing (Jest)",
        ],
    ),
    (
        "System Administrator",
        [
            "Linux fundamentals",
            "Shell scripting",
            "Networking basics",
            "Cloud fundamentals (AWS/GCP)",
            "Monitoring & troubleshooting",
        ],
    ),
    (
        "UI/UX Designer",
        [
            "Design thinking & user research",
            "Figma/Sketch/Adobe XD",
            "Wireframing & prototyping",
            "Interaction design",
            "Storytelling & presentation",
        ],
    ),
    (
        "Product Manager",
        [
            "User research & product discovery",
            "Roadmapping & prioritization",
            "Stakeholder communication",
            "Metrics & experimentation",
            "Basic data analysis",
        ],
    ),
    (
        "Junior Data Analyst",
        [
            "Excel & spreadsheets",
            "SQL basics",
            "Data cleaning & EDA",
            "Basic visualization",
            "Presentation skills",
        ],
    ),
    (
        "Frontend Developer",
        [
            "HTML/CSS/JS",
            "React or Vue",
            "Component architecture",
            "State management",
            "Testing",
        ],
    ),
    (
        "Technical Support Engineer",
        [
            "Troubleshooting fundamentals",
            "Customer communication",
            "Product knowledge",
            "Basic networking",
            "Scripting for automation",
        ],
    ),
    (
        "Junior UI/UX Designer",
        [
            "Figma basics",
            "Wireframing",
            "Basic prototyping",
            "Usability heuristics",
            "Design critique",
        ],
    ),
    (
        "Marketing Analyst",
        [
            "Excel & Google Sheets",
            "Basic statistics",
            "Data visualization",
            "Marketing analytics tools",
            "Campaign measurement",
        ],
    ),
];

/// Stage text in Assess, Learn, Build, Profile, Apply order.
const ROADMAPS: &[(&str, [&str; 5])] = &[
    (
        "Data Scientist",
        [
            "Review Python, SQL, portfolio, machine learning basics.",
            "Complete ML courses (Supervised, Unsupervised), Stats, EDA.",
            "Create 4 ML projects — Regression, Classification, NLP, Deployment.",
            "Publish Kaggle notebooks, GitHub repos & LinkedIn posts.",
            "Apply to DS roles, practice ML system design interviews.",
        ],
    ),
    (
        "Frontend Engineer",
        [
            "Evaluate HTML, CSS, JS, React fundamentals.",
            "Master React, Hooks, State mgmt, API integration.",
            "Build 3–5 responsive websites + React apps.",
            "Deploy on Netlify/Vercel, share UI case studies.",
            "Apply with live websites + GitHub portfolio.",
        ],
    ),
    (
        "System Administrator",
        [
            "Check Linux knowledge, shell scripting, networking basics.",
            "Study Linux, Bash, AWS, monitoring tools.",
            "Build server configs, automate tasks, deploy scripts.",
            "Document troubleshooting cases, publish scripts on GitHub.",
            "Apply to SysAdmin/IT roles & take tech support interviews.",
        ],
    ),
    (
        "UI/UX Designer",
        [
            "Evaluate Figma, wireframing, user research skills.",
            "Practice UX case studies, interaction design, heuristics.",
            "Create 3 UI/UX case studies + mobile/web prototypes.",
            "Publish Dribbble/Figma/Behance portfolio.",
            "Apply for UI/UX Intern/Junior roles with strong portfolio.",
        ],
    ),
    (
        "Product Manager",
        [
            "Check communication, research, analytics & docs skills.",
            "Study PRDs, user stories, Agile, prioritization frameworks.",
            "Create 2 product case studies + a product roadmap.",
            "Publish PM case studies & feature breakdowns.",
            "Apply for APM roles, complete PM interview practice.",
        ],
    ),
    (
        "Junior Data Analyst",
        [
            "Assess Excel, SQL, dashboarding skills.",
            "Take courses in SQL, Power BI/Tableau, statistics.",
            "Create 3 dashboards + 2 data cleaning projects.",
            "Upload dashboards to LinkedIn & GitHub.",
            "Apply for Data Analyst Intern/Junior roles.",
        ],
    ),
    (
        "Frontend Developer",
        [
            "Check React, HTML, JS, responsiveness knowledge.",
            "React advanced concepts + CSS frameworks (Tailwind).",
            "Build 4–6 UI clones & dynamic web apps.",
            "Deploy projects, share UI/UX improvements.",
            "Apply with portfolio & GitHub repos.",
        ],
    ),
    (
        "Technical Support Engineer",
        [
            "Assess troubleshooting, communication & software basics.",
            "Study OS basics, networking, ticket systems.",
            "Create documentation tutorials & automation scripts.",
            "Show real scenarios & solutions in resume.",
            "Apply to L1 support roles, practice customer interaction.",
        ],
    ),
    (
        "Junior UI/UX Designer",
        [
            "Check Figma basics, wireframing, UX research understanding.",
            "Learn design principles, layouts, typography.",
            "Make 3 beginner-friendly app/web redesigns.",
            "Publish Behance/Figma case studies.",
            "Apply for entry UI/UX roles.",
        ],
    ),
    (
        "Marketing Analyst",
        [
            "Check analytics tools, Excel, reports knowledge.",
            "Study Google Analytics, basic statistics, dashboards.",
            "Create 3–5 campaign analysis projects.",
            "Publish dashboard snapshots & insights.",
            "Apply for junior marketing/analytics roles.",
        ],
    ),
];
