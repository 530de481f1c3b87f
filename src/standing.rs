//! Academic standing derived from CGPA
//!
//! Every view that shows standing goes through `derive_status`; nothing
//! else compares a CGPA against the threshold.

use colored::{ColoredString, Colorize};
use std::fmt;

/// Inclusive lower bound for good standing
pub const GOOD_STANDING_THRESHOLD: f64 = 2.0;

/// Display color token for good standing
pub const GOOD_STANDING_COLOR: &str = "#059669";

/// Display color token for probation
pub const PROBATION_COLOR: &str = "#dc2626";

/// Academic standing classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcademicStanding {
    GoodStanding,
    Probation,
}

impl AcademicStanding {
    pub fn label(&self) -> &'static str {
        match self {
            AcademicStanding::GoodStanding => "Good Standing",
            AcademicStanding::Probation => "Probation",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            AcademicStanding::GoodStanding => GOOD_STANDING_COLOR,
            AcademicStanding::Probation => PROBATION_COLOR,
        }
    }
}

impl fmt::Display for AcademicStanding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label plus color token for the standing KPI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub standing: AcademicStanding,
    pub label: &'static str,
    pub color: &'static str,
}

impl StatusBadge {
    /// Label painted with the terminal equivalent of the color token
    pub fn paint(&self) -> ColoredString {
        match self.standing {
            AcademicStanding::GoodStanding => self.label.green().bold(),
            AcademicStanding::Probation => self.label.red().bold(),
        }
    }
}

/// Classify a CGPA. NaN never reaches good standing.
pub fn derive_status(cgpa: f64) -> StatusBadge {
    let standing = if cgpa >= GOOD_STANDING_THRESHOLD {
        AcademicStanding::GoodStanding
    } else {
        AcademicStanding::Probation
    };

    StatusBadge {
        standing,
        label: standing.label(),
        color: standing.color(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_boundary_is_good_standing() {
        let badge = derive_status(2.0);
        assert_eq!(badge.standing, AcademicStanding::GoodStanding);
        assert_eq!(badge.label, "Good Standing");
        assert_eq!(badge.color, "#059669");
    }

    #[test]
    fn test_just_below_boundary_is_probation() {
        let badge = derive_status(1.99);
        assert_eq!(badge.label, "Probation");
        assert_eq!(badge.color, "#dc2626");
    }

    #[test]
    fn test_extremes() {
        assert_eq!(derive_status(0.0).standing, AcademicStanding::Probation);
        assert_eq!(derive_status(4.0).standing, AcademicStanding::GoodStanding);
    }

    #[test]
    fn test_nan_is_probation() {
        assert_eq!(derive_status(f64::NAN).standing, AcademicStanding::Probation);
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(AcademicStanding::Probation.to_string(), "Probation");
    }

    #[quickcheck]
    fn prop_at_or_above_threshold_is_good(offset: u16) -> bool {
        let cgpa = GOOD_STANDING_THRESHOLD + f64::from(offset) / 1000.0;
        derive_status(cgpa).label == "Good Standing"
    }

    #[quickcheck]
    fn prop_below_threshold_is_probation(offset: u16) -> bool {
        let cgpa = GOOD_STANDING_THRESHOLD - (f64::from(offset) + 1.0) / 1000.0;
        derive_status(cgpa).label == "Probation"
    }

    #[quickcheck]
    fn prop_color_follows_standing(cgpa: f64) -> bool {
        let badge = derive_status(cgpa);
        badge.color == badge.standing.color() && badge.label == badge.standing.label()
    }
}
