//! Grade statistics: mean, highest and lowest.
//!
//! Per-student figures come from [`GradeStats::compute`]; roster-wide figures
//! from [`overall`], which always rescans every grade.

use crate::roster::Roster;

/// Arithmetic mean of `grades`, or `0.0` for an empty slice.
pub fn average(grades: &[f64]) -> f64 {
    if grades.is_empty() {
        return 0.0;
    }
    grades.iter().sum::<f64>() / grades.len() as f64
}

/// Largest grade, or `None` for an empty slice.
pub fn highest(grades: &[f64]) -> Option<f64> {
    grades.iter().copied().reduce(f64::max)
}

/// Smallest grade, or `None` for an empty slice.
pub fn lowest(grades: &[f64]) -> Option<f64> {
    grades.iter().copied().reduce(f64::min)
}

/// Mean, highest and lowest of a non-empty set of grades.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeStats {
    pub average: f64,
    pub highest: f64,
    pub lowest: f64,
}

impl GradeStats {
    /// Returns `None` when there are no grades.
    pub fn compute(grades: &[f64]) -> Option<GradeStats> {
        Some(GradeStats {
            average: average(grades),
            highest: highest(grades)?,
            lowest: lowest(grades)?,
        })
    }
}

/// Statistics over every grade of every student in the roster.
///
/// Returns `None` if the roster holds no grades at all.
pub fn overall(roster: &Roster) -> Option<GradeStats> {
    let mut sum = 0.0;
    let mut count = 0usize;
    let mut high = f64::NEG_INFINITY;
    let mut low = f64::INFINITY;

    for grade in roster.iter().flat_map(|s| s.grades().iter().copied()) {
        sum += grade;
        count += 1;
        high = high.max(grade);
        low = low.min(grade);
    }

    if count == 0 {
        return None;
    }
    Some(GradeStats {
        average: sum / count as f64,
        highest: high,
        lowest: low,
    })
}
