//! Letter grading with proportionally scaled boundaries.
//!
//! The bands are defined in points for a 45-question quiz and scaled to
//! whatever length the attempted quiz actually has.

use std::fmt;

/// Letter grades, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

/// A scored point range mapped to a letter, at the reference scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeBand {
    pub grade: Grade,
    pub min: u32,
    pub max: u32,
}

/// Reference total the bands are defined against.
pub const REFERENCE_TOTAL: u32 = 45;

/// Grade boundaries in points for a 45-question quiz, in descending
/// score order. Contiguous and non-overlapping over `[0, 45]`.
pub const GRADE_BANDS: [GradeBand; 6] = [
    GradeBand { grade: Grade::A, min: 40, max: 45 },
    GradeBand { grade: Grade::B, min: 35, max: 39 },
    GradeBand { grade: Grade::C, min: 29, max: 34 },
    GradeBand { grade: Grade::D, min: 24, max: 28 },
    GradeBand { grade: Grade::E, min: 19, max: 23 },
    GradeBand { grade: Grade::F, min: 0, max: 18 },
];

/// Guard against floating-point rounding when a scaled boundary lands
/// exactly on an integer.
const EPSILON: f64 = 1e-9;

/// Maps a raw score to a letter grade for a quiz of `total` questions.
///
/// Each band's point range is scaled by `total / 45`; bands are checked
/// top-down, so when rounding makes two scaled ranges overlap the higher
/// grade wins. A score above the scaled A maximum still grades as A, and
/// a score falling into a rounding gap resolves to the nearest band
/// below it. Returns `None` when `total` is zero, since no grade is
/// definable.
pub fn grade(score: usize, total: usize) -> Option<Grade> {
    if total == 0 {
        return None;
    }

    let scale = total as f64 / REFERENCE_TOTAL as f64;
    let score = score as i64;
    for band in &GRADE_BANDS {
        let min_scaled = (band.min as f64 * scale - EPSILON).ceil() as i64;
        let max_scaled = (band.max as f64 * scale + EPSILON).floor() as i64;
        if score >= min_scaled && score <= max_scaled {
            return Some(band.grade);
        }
    }

    // Explicit fallbacks. Past the scaled maximum of the top band the
    // score clamps to the top grade. A score landing in a rounding gap
    // between two scaled bands resolves to the nearest band below it.
    let top = &GRADE_BANDS[0];
    let top_max = (top.max as f64 * scale + EPSILON).floor() as i64;
    if score > top_max {
        return Some(top.grade);
    }
    for band in &GRADE_BANDS {
        let max_scaled = (band.max as f64 * scale + EPSILON).floor() as i64;
        if score > max_scaled {
            return Some(band.grade);
        }
    }
    Some(Grade::F)
}

/// A band's scaled point boundaries expressed as percentages of `total`,
/// for display next to the result.
pub fn boundary_percent(band: &GradeBand, total: usize) -> (f64, f64) {
    if total == 0 {
        return (0.0, 0.0);
    }
    let scale = total as f64 / REFERENCE_TOTAL as f64;
    let min_pct = band.min as f64 * scale / total as f64 * 100.0;
    let max_pct = band.max as f64 * scale / total as f64 * 100.0;
    (min_pct, max_pct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_total_reproduces_the_base_table() {
        for score in 0..=45 {
            let expected = GRADE_BANDS
                .iter()
                .find(|band| score >= band.min && score <= band.max)
                .map(|band| band.grade)
                .unwrap();
            assert_eq!(grade(score as usize, 45), Some(expected), "score {}", score);
        }
    }

    #[test]
    fn base_table_spot_checks() {
        assert_eq!(grade(45, 45), Some(Grade::A));
        assert_eq!(grade(40, 45), Some(Grade::A));
        assert_eq!(grade(39, 45), Some(Grade::B));
        assert_eq!(grade(35, 45), Some(Grade::B));
        assert_eq!(grade(34, 45), Some(Grade::C));
        assert_eq!(grade(29, 45), Some(Grade::C));
        assert_eq!(grade(28, 45), Some(Grade::D));
        assert_eq!(grade(24, 45), Some(Grade::D));
        assert_eq!(grade(23, 45), Some(Grade::E));
        assert_eq!(grade(19, 45), Some(Grade::E));
        assert_eq!(grade(18, 45), Some(Grade::F));
        assert_eq!(grade(0, 45), Some(Grade::F));
    }

    #[test]
    fn score_above_the_top_band_clamps_to_a() {
        assert_eq!(grade(46, 45), Some(Grade::A));
        assert_eq!(grade(100, 45), Some(Grade::A));
        assert_eq!(grade(4, 3), Some(Grade::A));
    }

    #[test]
    fn zero_total_has_no_grade() {
        assert_eq!(grade(0, 0), None);
        assert_eq!(grade(5, 0), None);
    }

    #[test]
    fn every_score_is_mapped_for_any_total() {
        for total in 1..=120 {
            let mut previous: Option<Grade> = None;
            for score in 0..=total {
                let g = grade(score, total);
                assert!(g.is_some(), "score {}/{} unmapped", score, total);
                // Grades never get worse as the score rises.
                if let (Some(prev), Some(curr)) = (previous, g) {
                    assert!(
                        rank(curr) <= rank(prev),
                        "grade dropped from {} to {} at {}/{}",
                        prev,
                        curr,
                        score,
                        total
                    );
                }
                previous = g;
            }
            assert_eq!(grade(0, total), Some(Grade::F));
            assert_eq!(grade(total, total), Some(Grade::A));
        }
    }

    fn rank(grade: Grade) -> u8 {
        match grade {
            Grade::A => 0,
            Grade::B => 1,
            Grade::C => 2,
            Grade::D => 3,
            Grade::E => 4,
            Grade::F => 5,
        }
    }

    #[test]
    fn rounding_gaps_resolve_to_the_band_below() {
        // total = 90 scales B to [70, 78] and A to [80, 90], leaving 79
        // in a gap; it must grade as B, not fall through to F.
        assert_eq!(grade(78, 90), Some(Grade::B));
        assert_eq!(grade(79, 90), Some(Grade::B));
        assert_eq!(grade(80, 90), Some(Grade::A));
    }

    #[test]
    fn short_quiz_scales_through_the_bands() {
        // total = 3, scale = 1/15: A covers {3}, C covers {2}, F {0, 1}.
        assert_eq!(grade(3, 3), Some(Grade::A));
        assert_eq!(grade(2, 3), Some(Grade::C));
        assert_eq!(grade(1, 3), Some(Grade::F));
        assert_eq!(grade(0, 3), Some(Grade::F));
    }

    #[test]
    fn boundary_percentages_are_total_independent() {
        // min * scale / total cancels total out, so the percentages are
        // the reference boundaries over 45.
        for total in [3usize, 25, 45, 90] {
            let (min_pct, max_pct) = boundary_percent(&GRADE_BANDS[0], total);
            assert!((min_pct - 40.0 / 45.0 * 100.0).abs() < 1e-6);
            assert!((max_pct - 100.0).abs() < 1e-6);
        }
        assert_eq!(boundary_percent(&GRADE_BANDS[0], 0), (0.0, 0.0));
    }
}
