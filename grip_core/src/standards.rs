use crate::stats::StrengthLevel;

/// One row of the performance standards table.
#[derive(Debug, Clone, PartialEq)]
pub struct Standard {
    pub level: StrengthLevel,
    pub range: &'static str,
    pub min: f64,
    pub max: f64,
    pub description: &'static str,
}

/// Fixed six-tier table with inclusive integer kilogram bounds.
pub const PERFORMANCE_STANDARDS: [Standard; 6] = [
    Standard {
        level: StrengthLevel::Beginner,
        range: "0-20 kg",
        min: 0.0,
        max: 20.0,
        description: "Starting out or returning to training",
    },
    Standard {
        level: StrengthLevel::Novice,
        range: "21-30 kg",
        min: 21.0,
        max: 30.0,
        description: "Basic strength development",
    },
    Standard {
        level: StrengthLevel::Intermediate,
        range: "31-40 kg",
        min: 31.0,
        max: 40.0,
        description: "Good functional strength",
    },
    Standard {
        level: StrengthLevel::Advanced,
        range: "41-50 kg",
        min: 41.0,
        max: 50.0,
        description: "Strong grip strength",
    },
    Standard {
        level: StrengthLevel::Elite,
        range: "51-60 kg",
        min: 51.0,
        max: 60.0,
        description: "Professional level strength",
    },
    Standard {
        level: StrengthLevel::Exceptional,
        range: "61+ kg",
        min: 61.0,
        max: 200.0,
        description: "World-class grip strength",
    },
];

/// The tier whose inclusive range contains the value. Fractional values
/// between two rows' integer bounds (20.5, say) match no tier, and neither
/// does anything above 200kg.
pub fn current_standard(strength: f64) -> Option<&'static Standard> {
    PERFORMANCE_STANDARDS
        .iter()
        .find(|s| strength >= s.min && strength <= s.max)
}
