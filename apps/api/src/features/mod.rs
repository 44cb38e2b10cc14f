// Feature construction for the salary and career models.
// Schemas are external configuration; resolvers are a registered table keyed
// by feature name, so supporting a new column is a table entry, not a branch.

pub mod builder;
pub mod ordinal;
pub mod schema;

pub use builder::FeatureBuilder;
