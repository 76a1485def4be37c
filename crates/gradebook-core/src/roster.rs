//! The in-memory roster of students and their grades.
//!
//! Students are kept in insertion order. Names are unique under a
//! case-insensitive comparison, and every stored grade lies in `[0, 100]`.

use tracing::debug;

use crate::error::{InputProblem, RosterError};

/// Lowest accepted grade.
pub const MIN_GRADE: f64 = 0.0;
/// Highest accepted grade.
pub const MAX_GRADE: f64 = 100.0;

/// A single student and the grades recorded for them, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    name: String,
    grades: Vec<f64>,
}

impl Student {
    fn new(name: String) -> Self {
        Self {
            name,
            grades: Vec::new(),
        }
    }

    /// The student's name as it was entered (trimmed).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Grades in the order they were added.
    pub fn grades(&self) -> &[f64] {
        &self.grades
    }

    /// Returns `true` if no grade has been recorded yet.
    pub fn has_grades(&self) -> bool {
        !self.grades.is_empty()
    }
}

/// Ordered collection of students.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a student with no grades at the end of the roster.
    ///
    /// Surrounding whitespace is stripped from `name` before it is checked and
    /// stored.
    pub fn add_student(&mut self, name: &str) -> Result<&Student, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InputProblem::EmptyName.into());
        }
        if self.position(name).is_some() {
            return Err(RosterError::DuplicateStudent(name.to_string()));
        }

        self.students.push(Student::new(name.to_string()));
        debug!(student = name, count = self.students.len(), "student added");
        Ok(&self.students[self.students.len() - 1])
    }

    /// Look up a student by case-insensitive name.
    ///
    /// The name is compared as given; callers trim it first.
    pub fn find_student(&self, name: &str) -> Option<&Student> {
        self.position(name).map(|idx| &self.students[idx])
    }

    /// Parse `raw` as a grade and append it to the named student's list.
    ///
    /// The student is looked up first, then the text is parsed, then the value
    /// is range-checked. On any error the grade list is left untouched.
    pub fn add_grade(&mut self, name: &str, raw: &str) -> Result<f64, RosterError> {
        let idx = self
            .position(name)
            .ok_or_else(|| RosterError::NotFound(name.to_string()))?;
        let value = parse_grade(raw)?;
        self.push_grade(idx, value)
    }

    /// Append an already numeric grade to the named student's list.
    pub fn append_grade(&mut self, name: &str, value: f64) -> Result<f64, RosterError> {
        let idx = self
            .position(name)
            .ok_or_else(|| RosterError::NotFound(name.to_string()))?;
        if value.is_nan() {
            return Err(InputProblem::NotANumber(value.to_string()).into());
        }
        self.push_grade(idx, value)
    }

    /// Remove the named student, keeping the order of everyone else.
    pub fn remove_student(&mut self, name: &str) -> Result<Student, RosterError> {
        let idx = self
            .position(name)
            .ok_or_else(|| RosterError::NotFound(name.to_string()))?;
        let removed = self.students.remove(idx);
        debug!(student = removed.name(), count = self.students.len(), "student removed");
        Ok(removed)
    }

    /// Remove every student.
    pub fn clear(&mut self) {
        let dropped = self.students.len();
        self.students.clear();
        debug!(dropped, "roster cleared");
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Students in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }

    /// Total number of grades across all students.
    pub fn total_grades(&self) -> usize {
        self.students.iter().map(|s| s.grades.len()).sum()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.students.iter().position(|s| same_name(&s.name, name))
    }

    fn push_grade(&mut self, idx: usize, value: f64) -> Result<f64, RosterError> {
        if !(MIN_GRADE..=MAX_GRADE).contains(&value) {
            return Err(RosterError::OutOfRange(value));
        }
        let student = &mut self.students[idx];
        student.grades.push(value);
        debug!(
            student = student.name(),
            grade = value,
            count = student.grades.len(),
            "grade added"
        );
        Ok(value)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Parse grade text into a number.
///
/// Surrounding whitespace is ignored. `NaN` is rejected here; infinities parse
/// and are left for the range check.
pub fn parse_grade(raw: &str) -> Result<f64, RosterError> {
    let text = raw.trim();
    match text.parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => Err(InputProblem::NotANumber(text.to_string()).into()),
    }
}

/// Character-wise case-insensitive comparison. Two characters match when
/// their upper-case or lower-case forms agree, so final and medial sigma
/// both match capital sigma.
fn same_name(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| {
            x == y
                || x.to_uppercase().eq(y.to_uppercase())
                || x.to_lowercase().eq(y.to_lowercase())
        })
}
