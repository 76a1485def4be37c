//! Roster error types.
//!
//! Every failure in this crate is a rejected user input; there are no system
//! faults. The control layer turns each variant into a single message.

use thiserror::Error;

/// Errors returned by [`Roster`](crate::roster::Roster) operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RosterError {
    /// A required field was empty or the grade text was not a number.
    #[error("invalid input: {0}")]
    InvalidInput(InputProblem),

    /// A student with a case-insensitively equal name already exists.
    #[error("student already exists: {0}")]
    DuplicateStudent(String),

    /// No student matches the given name.
    #[error("student not found: {0}")]
    NotFound(String),

    /// The grade lies outside `[0, 100]`.
    #[error("grade {0} is outside 0..=100")]
    OutOfRange(f64),
}

/// What exactly was wrong with an [`RosterError::InvalidInput`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputProblem {
    #[error("student name is empty")]
    EmptyName,

    #[error("student name and grade are both required")]
    MissingFields,

    #[error("not a number: {0:?}")]
    NotANumber(String),
}

/// The four categories of rejected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    DuplicateStudent,
    NotFound,
    OutOfRange,
}

impl RosterError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RosterError::InvalidInput(_) => ErrorKind::InvalidInput,
            RosterError::DuplicateStudent(_) => ErrorKind::DuplicateStudent,
            RosterError::NotFound(_) => ErrorKind::NotFound,
            RosterError::OutOfRange(_) => ErrorKind::OutOfRange,
        }
    }
}

impl From<InputProblem> for RosterError {
    fn from(problem: InputProblem) -> Self {
        RosterError::InvalidInput(problem)
    }
}
