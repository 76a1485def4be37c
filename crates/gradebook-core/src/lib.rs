//! gradebook-core — Roster store, grade statistics, and display model.
//!
//! This crate holds everything about the grade tracker that does not touch a
//! terminal: the ordered roster of students, the mean/high/low reductions, and
//! the formatted table and summary report built from them.

pub mod error;
pub mod roster;
pub mod statistics;
pub mod view;

pub use error::{ErrorKind, InputProblem, RosterError};
pub use roster::{Roster, Student};
pub use statistics::GradeStats;
pub use view::{summary_report, TableRow, TableView};
