//! BIS 2190:2024 hazard standard table

use std::sync::LazyLock;

use firequote_domain::model::{HazardStandard, HazardStandards};

/// Placement standards per hazard level.
/// Coverage tightens and travel distance shortens as hazard rises.
static BIS_STANDARDS: LazyLock<HazardStandards> = LazyLock::new(|| HazardStandards {
    low: HazardStandard {
        rating: "2A".to_string(),
        coverage_area_m2: 300.0,
        max_travel_distance_m: 20.0,
    },
    moderate: HazardStandard {
        rating: "3A".to_string(),
        coverage_area_m2: 150.0,
        max_travel_distance_m: 20.0,
    },
    high: HazardStandard {
        rating: "4A".to_string(),
        coverage_area_m2: 100.0,
        max_travel_distance_m: 15.0,
    },
});

/// The default BIS standard table
pub fn bis_standards() -> &'static HazardStandards {
    &BIS_STANDARDS
}

#[cfg(test)]
mod tests {
    use super::*;
    use firequote_domain::model::HazardLevel;

    #[test]
    fn test_coverage_decreases_as_hazard_increases() {
        let s = bis_standards();
        assert!(s.low.coverage_area_m2 > s.moderate.coverage_area_m2);
        assert!(s.moderate.coverage_area_m2 > s.high.coverage_area_m2);
    }

    #[test]
    fn test_all_figures_positive() {
        let s = bis_standards();
        for level in [HazardLevel::Low, HazardLevel::Moderate, HazardLevel::High] {
            let standard = s.for_level(level);
            assert!(standard.coverage_area_m2 > 0.0);
            assert!(standard.max_travel_distance_m > 0.0);
        }
    }

    #[test]
    fn test_ratings() {
        let s = bis_standards();
        assert_eq!(s.low.rating, "2A");
        assert_eq!(s.moderate.rating, "3A");
        assert_eq!(s.high.rating, "4A");
    }
}
