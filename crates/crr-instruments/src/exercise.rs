//! Option exercise styles.
//!
//! Only the two styles a recombining lattice prices directly are modelled:
//! exercise at expiry, or at any lattice date up to expiry.

use std::fmt;

/// Type of exercise right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExerciseType {
    /// Can only be exercised at expiry.
    European,
    /// Can be exercised at any time up to expiry.
    #[default]
    American,
}

impl ExerciseType {
    /// Whether exercise before expiry is allowed.
    pub fn allows_early_exercise(self) -> bool {
        matches!(self, ExerciseType::American)
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseType::European => write!(f, "European"),
            ExerciseType::American => write!(f, "American"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn early_exercise_flag() {
        assert!(ExerciseType::American.allows_early_exercise());
        assert!(!ExerciseType::European.allows_early_exercise());
    }

    #[test]
    fn american_is_default() {
        assert_eq!(ExerciseType::default(), ExerciseType::American);
        assert_eq!(ExerciseType::default().to_string(), "American");
    }
}
