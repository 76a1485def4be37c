//! Display model: the student table and the summary report text.
//!
//! Both are rebuilt from the roster on every call; nothing is cached between
//! renders.

use crate::roster::{Roster, Student};
use crate::statistics::{self, GradeStats};

/// Column headers of the student table.
pub const COLUMNS: [&str; 5] = ["Name", "Grades", "Average", "Highest", "Lowest"];

/// Cell text shown in statistic columns for a student without grades.
pub const PLACEHOLDER: &str = "-";

/// One row of the student table, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub name: String,
    pub grades: String,
    pub average: String,
    pub highest: String,
    pub lowest: String,
}

impl TableRow {
    /// Build the row for one student.
    pub fn for_student(student: &Student) -> TableRow {
        let grades = if student.has_grades() {
            grade_list(student.grades())
        } else {
            String::new()
        };
        let (average, highest, lowest) = match GradeStats::compute(student.grades()) {
            Some(stats) => (
                two_decimals(stats.average),
                two_decimals(stats.highest),
                two_decimals(stats.lowest),
            ),
            None => (
                PLACEHOLDER.to_string(),
                PLACEHOLDER.to_string(),
                PLACEHOLDER.to_string(),
            ),
        };
        TableRow {
            name: student.name().to_string(),
            grades,
            average,
            highest,
            lowest,
        }
    }

    /// Cells in column order.
    pub fn cells(&self) -> [&str; 5] {
        [
            self.name.as_str(),
            self.grades.as_str(),
            self.average.as_str(),
            self.highest.as_str(),
            self.lowest.as_str(),
        ]
    }
}

/// The full student table, one row per student in roster order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableView {
    pub rows: Vec<TableRow>,
}

impl TableView {
    /// Rebuild the table from the current roster contents.
    pub fn render(roster: &Roster) -> TableView {
        TableView {
            rows: roster.iter().map(TableRow::for_student).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Render grades as a bracketed list literal, e.g. `[90.0, 72.5]`.
///
/// Values keep their stored precision; see [`grade_literal`].
pub fn grade_list(grades: &[f64]) -> String {
    let items: Vec<String> = grades.iter().map(|&g| grade_literal(g)).collect();
    format!("[{}]", items.join(", "))
}

/// Shortest round-trip form of a grade with at least one decimal.
///
/// Magnitudes in `[1e-3, 1e7)` and zero print plainly (`90.0`, `0.001`);
/// anything else uses an upper-case exponent with a decimal mantissa
/// (`1.0E-5`, `2.5E-4`).
pub fn grade_literal(value: f64) -> String {
    let magnitude = value.abs();
    if !value.is_finite() || value == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return format!("{value:?}");
    }
    let sci = format!("{value:e}");
    match sci.split_once('e') {
        Some((mantissa, exp)) if mantissa.contains('.') => format!("{mantissa}E{exp}"),
        Some((mantissa, exp)) => format!("{mantissa}.0E{exp}"),
        None => sci,
    }
}

/// Format a statistic with exactly two decimals.
///
/// Rounds half-up on the shortest decimal form of `value`, so `85.625`
/// becomes `85.63` even though its binary value sits just below the tie.
pub fn two_decimals(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value:.2}");
    }

    let plain = value.abs().to_string();
    let (int_part, frac) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac.bytes().chain(std::iter::repeat(b'0')).take(2))
        .collect();

    if frac.as_bytes().get(2).is_some_and(|&d| d >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - 2;
    let mut out = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|&d| char::from(d)));
    out.push('.');
    out.extend(digits[split..].iter().map(|&d| char::from(d)));
    out
}

/// Build the summary report text, or `None` if the roster is empty.
///
/// Each student contributes a header line with the raw grade list followed by
/// either their statistics or a "no grades" note. Roster-wide figures are
/// appended only when at least one grade exists.
pub fn summary_report(roster: &Roster) -> Option<String> {
    if roster.is_empty() {
        return None;
    }

    let mut out = String::new();
    for student in roster {
        out.push_str(&format!(
            "{} {}\n",
            student.name(),
            grade_list(student.grades())
        ));
        match GradeStats::compute(student.grades()) {
            Some(stats) => out.push_str(&format!(
                "  Avg: {}  High: {}  Low: {}\n",
                two_decimals(stats.average),
                two_decimals(stats.highest),
                two_decimals(stats.lowest)
            )),
            None => out.push_str("  (No grades yet)\n"),
        }
    }

    if let Some(stats) = statistics::overall(roster) {
        out.push_str(&format!("\nOverall Average: {}", two_decimals(stats.average)));
        out.push_str(&format!("\nOverall Highest: {}", two_decimals(stats.highest)));
        out.push_str(&format!("\nOverall Lowest : {}", two_decimals(stats.lowest)));
    }

    Some(out)
}
