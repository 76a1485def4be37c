//! Control layer: input fields, named action handlers, and dispatch.
//!
//! Every action runs validate → mutate → render and yields exactly one piece
//! of feedback. Rejected input never escapes as an error; it becomes a
//! message and the roster is left as it was.

use gradebook_core::error::{InputProblem, RosterError};
use gradebook_core::roster::Roster;
use gradebook_core::view::{summary_report, TableView};
use tracing::{debug, info};

/// The two free-text input fields. Actions read them but never clear them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pub name: String,
    pub grade: String,
}

/// The five user commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    AddStudent,
    AddGrade,
    RemoveStudent,
    Summary,
    ClearAll,
}

/// Command words and the action each one triggers.
const ACTION_WORDS: &[(&str, Action)] = &[
    ("add-student", Action::AddStudent),
    ("as", Action::AddStudent),
    ("add-grade", Action::AddGrade),
    ("ag", Action::AddGrade),
    ("remove", Action::RemoveStudent),
    ("remove-student", Action::RemoveStudent),
    ("rm", Action::RemoveStudent),
    ("summary", Action::Summary),
    ("report", Action::Summary),
    ("clear", Action::ClearAll),
    ("clear-all", Action::ClearAll),
];

impl Action {
    /// Look up an action by command word (case-insensitive).
    pub fn from_word(word: &str) -> Option<Action> {
        ACTION_WORDS
            .iter()
            .find(|(w, _)| w.eq_ignore_ascii_case(word))
            .map(|&(_, action)| action)
    }

    /// The handler bound to this action.
    fn handler(self) -> Handler {
        match self {
            Action::AddStudent => Controller::add_student,
            Action::AddGrade => Controller::add_grade,
            Action::RemoveStudent => Controller::remove_student,
            Action::Summary => Controller::summary,
            Action::ClearAll => Controller::clear_all,
        }
    }

    /// Button-style label, e.g. "Add Student".
    pub fn label(self) -> &'static str {
        match self {
            Action::AddStudent => "Add Student",
            Action::AddGrade => "Add Grade",
            Action::RemoveStudent => "Remove Student",
            Action::Summary => "Summary Report",
            Action::ClearAll => "Clear All",
        }
    }
}

/// What the user sees after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// A single-line confirmation or error message.
    Notice(String),
    /// The multi-line summary report.
    Report(String),
}

impl Feedback {
    pub fn text(&self) -> &str {
        match self {
            Feedback::Notice(text) | Feedback::Report(text) => text,
        }
    }
}

/// Result of running one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub feedback: Feedback,
    /// Freshly rendered table, present when the roster changed.
    pub table: Option<TableView>,
    /// `false` when the input was rejected.
    pub accepted: bool,
}

impl Outcome {
    fn changed(message: &str, table: TableView) -> Self {
        Self {
            feedback: Feedback::Notice(message.to_string()),
            table: Some(table),
            accepted: true,
        }
    }

    fn rejected(err: &RosterError) -> Self {
        Self {
            feedback: Feedback::Notice(user_message(err).to_string()),
            table: None,
            accepted: false,
        }
    }
}

type Handler = fn(&mut Controller) -> Outcome;

/// Owns the roster and the input fields for one session.
#[derive(Debug, Default)]
pub struct Controller {
    roster: Roster,
    form: Form,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    /// Run the handler bound to `action`.
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let outcome = (action.handler())(self);
        if outcome.accepted {
            debug!(action = action.label(), "action accepted");
        } else {
            info!(
                action = action.label(),
                message = outcome.feedback.text(),
                "action rejected"
            );
        }
        outcome
    }

    pub fn add_student(&mut self) -> Outcome {
        let roster = &mut self.roster;
        let result =
            validate_name(&self.form).and_then(|name| roster.add_student(name).map(|_| ()));
        match result {
            Ok(()) => Outcome::changed("Student added successfully.", self.render()),
            Err(err) => Outcome::rejected(&err),
        }
    }

    pub fn add_grade(&mut self) -> Outcome {
        let roster = &mut self.roster;
        let result = validate_name_and_grade(&self.form)
            .and_then(|(name, grade)| roster.add_grade(name, grade).map(|_| ()));
        match result {
            Ok(()) => Outcome::changed("Grade added successfully.", self.render()),
            Err(err) => Outcome::rejected(&err),
        }
    }

    /// Remove the student named in the name field.
    ///
    /// An empty name is not treated specially: it simply matches nobody.
    pub fn remove_student(&mut self) -> Outcome {
        let name = self.form.name.trim();
        match self.roster.remove_student(name) {
            Ok(_) => Outcome::changed("Student removed successfully.", self.render()),
            Err(err) => Outcome::rejected(&err),
        }
    }

    pub fn summary(&mut self) -> Outcome {
        let feedback = match summary_report(&self.roster) {
            Some(report) => Feedback::Report(report),
            None => Feedback::Notice("No students available.".to_string()),
        };
        Outcome {
            feedback,
            table: None,
            accepted: true,
        }
    }

    pub fn clear_all(&mut self) -> Outcome {
        self.roster.clear();
        Outcome::changed("All data cleared.", self.render())
    }

    fn render(&self) -> TableView {
        TableView::render(&self.roster)
    }
}

fn validate_name(form: &Form) -> Result<&str, RosterError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(InputProblem::EmptyName.into());
    }
    Ok(name)
}

fn validate_name_and_grade(form: &Form) -> Result<(&str, &str), RosterError> {
    let name = form.name.trim();
    let grade = form.grade.trim();
    if name.is_empty() || grade.is_empty() {
        return Err(InputProblem::MissingFields.into());
    }
    Ok((name, grade))
}

/// The message shown for a rejected action.
pub fn user_message(err: &RosterError) -> &'static str {
    match err {
        RosterError::InvalidInput(InputProblem::EmptyName) => "Enter a student name.",
        RosterError::InvalidInput(InputProblem::MissingFields) => {
            "Enter both student name and grade."
        }
        RosterError::InvalidInput(InputProblem::NotANumber(_)) => {
            "Enter a valid number for grade."
        }
        RosterError::DuplicateStudent(_) => "Student already exists.",
        RosterError::NotFound(_) => "Student not found.",
        RosterError::OutOfRange(_) => "Grade must be between 0 and 100.",
    }
}
