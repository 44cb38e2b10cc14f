// Career advisor: profile validation, model-first salary and career
// resolution with heuristic fallbacks, and role content lookups.
// Artifacts are read-only after startup; every request is a single
// synchronous pass with no shared mutable state.

pub mod career;
pub mod content;
pub mod handlers;
pub mod heuristics;
pub mod inference;
pub mod pipeline;
pub mod salary;
pub mod validation;

pub use pipeline::CareerAdvisor;
