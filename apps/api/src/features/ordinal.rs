//! Fixed ordinal encodings used when no fitted encoder is registered.

/// Label → level table with a per-field default for unrecognised labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrdinalMap {
    levels: &'static [(&'static str, f64)],
    default: f64,
}

impl OrdinalMap {
    pub fn value(&self, label: &str) -> f64 {
        self.levels
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, level)| *level)
            .unwrap_or(self.default)
    }
}

/// Unknown strength maps to the middle level.
pub const PORTFOLIO_STRENGTH: OrdinalMap = OrdinalMap {
    levels: &[("Low", 0.0), ("Medium", 1.0), ("High", 2.0)],
    default: 1.0,
};

/// Unknown proficiency maps to the middle level.
pub const LANGUAGE_PROFICIENCY: OrdinalMap = OrdinalMap {
    levels: &[("Beginner", 0.0), ("Intermediate", 1.0), ("Advanced", 2.0)],
    default: 1.0,
};

/// Unknown preference maps to the lowest level (Onsite).
pub const REMOTE_WORK_PREFERENCE: OrdinalMap = OrdinalMap {
    levels: &[("Onsite", 0.0), ("Hybrid", 1.0), ("Remote", 2.0)],
    default: 0.0,
};
