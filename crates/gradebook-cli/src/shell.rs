//! Line-oriented front end over the controller.
//!
//! Each input line is either a field assignment (`name ...`, `grade ...`), an
//! action word optionally followed by values for the fields, or a shell
//! command (`table`, `fields`, `help`, `quit`). Lines starting with `#` are
//! comments.

use std::io::{self, BufRead, Write};

use tracing::info;

use crate::config::GradebookConfig;
use crate::controller::{Action, Controller, Feedback, Form, Outcome};
use crate::render::student_table;
use gradebook_core::view::TableView;

const HELP: &str = "\
Fields:
  name <text>               set the student name field
  grade <text>              set the grade field
  fields                    show both fields

Actions (arguments fill the fields first):
  add-student [name]        add a student with no grades
  add-grade [name] [grade]  append a grade; the last word is the grade
  remove [name]             remove a student
  summary                   per-student and overall statistics
  clear                     remove every student

Other:
  table                     print the student table
  help                      show this text
  quit                      end the session";

/// How an action line fills the form before the action runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fill {
    Keep,
    Name(String),
    Grade(String),
    NameAndGrade(String, String),
}

impl Fill {
    fn apply(self, form: &mut Form) {
        match self {
            Fill::Keep => {}
            Fill::Name(name) => form.name = name,
            Fill::Grade(grade) => form.grade = grade,
            Fill::NameAndGrade(name, grade) => {
                form.name = name;
                form.grade = grade;
            }
        }
    }
}

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Blank,
    SetName(String),
    SetGrade(String),
    Run { action: Action, fill: Fill },
    Table,
    Fields,
    Help,
    Quit,
}

/// Parse one input line. Returns the unrecognised word on failure.
pub fn parse_line(line: &str) -> Result<Command, String> {
    let line = line.trim_start();
    if line.is_empty() || line.starts_with('#') {
        return Ok(Command::Blank);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (line, ""),
    };
    let has_args = !rest.trim().is_empty();

    let command = match word.to_ascii_lowercase().as_str() {
        "name" => Command::SetName(rest.to_string()),
        "grade" => Command::SetGrade(rest.to_string()),
        "table" | "list" => Command::Table,
        "fields" => Command::Fields,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => {
            let action = Action::from_word(word).ok_or_else(|| word.to_string())?;
            let fill = match action {
                _ if !has_args => Fill::Keep,
                Action::AddStudent | Action::RemoveStudent => Fill::Name(rest.to_string()),
                Action::AddGrade => match rest.trim_end().rsplit_once(char::is_whitespace) {
                    Some((name, grade)) => {
                        Fill::NameAndGrade(name.to_string(), grade.to_string())
                    }
                    None => Fill::Grade(rest.to_string()),
                },
                Action::Summary | Action::ClearAll => Fill::Keep,
            };
            Command::Run { action, fill }
        }
    };
    Ok(command)
}

/// Counters for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Actions dispatched to the controller.
    pub actions: usize,
    /// Rejected actions plus unrecognised commands.
    pub rejected: usize,
}

/// Whether the read loop should continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Reads commands from `input` and writes everything the user sees to
/// `output`.
pub struct Shell<R, W> {
    controller: Controller,
    config: GradebookConfig,
    input: R,
    output: W,
    interactive: bool,
    echo: bool,
    stats: SessionStats,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(config: GradebookConfig, input: R, output: W) -> Self {
        Self {
            controller: Controller::new(),
            config,
            input,
            output,
            interactive: false,
            echo: false,
            stats: SessionStats::default(),
        }
    }

    /// Print a banner and a prompt before each line.
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Repeat each command line before its output.
    pub fn echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Run until end of input or `quit`.
    pub fn run(&mut self) -> io::Result<SessionStats> {
        if self.interactive {
            writeln!(
                self.output,
                "Student Grade Tracker. Type `help` for commands, `quit` to leave."
            )?;
        }

        let mut line = String::new();
        loop {
            if self.interactive {
                write!(self.output, "{}", self.config.prompt)?;
                self.output.flush()?;
            }
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            let command_line = line.trim_end_matches(['\r', '\n']);
            let trimmed = command_line.trim_start();
            if self.echo && !trimmed.is_empty() && !trimmed.starts_with('#') {
                writeln!(self.output, "> {command_line}")?;
            }
            if self.execute_line(command_line)? == Flow::Quit {
                break;
            }
        }

        self.output.flush()?;
        Ok(self.stats)
    }

    fn execute_line(&mut self, line: &str) -> io::Result<Flow> {
        let command = match parse_line(line) {
            Ok(command) => command,
            Err(word) => {
                self.stats.rejected += 1;
                info!(command = %word, "unknown command");
                writeln!(
                    self.output,
                    "Unknown command: {word}. Type `help` for a list of commands."
                )?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::Blank => {}
            Command::SetName(name) => self.controller.form_mut().name = name,
            Command::SetGrade(grade) => self.controller.form_mut().grade = grade,
            Command::Run { action, fill } => {
                fill.apply(self.controller.form_mut());
                let outcome = self.controller.dispatch(action);
                self.stats.actions += 1;
                if !outcome.accepted {
                    self.stats.rejected += 1;
                }
                self.show(&outcome)?;
            }
            Command::Table => {
                let view = TableView::render(self.controller.roster());
                self.print_table(&view)?;
            }
            Command::Fields => {
                let form = self.controller.form();
                writeln!(self.output, "name:  {:?}", form.name)?;
                writeln!(self.output, "grade: {:?}", form.grade)?;
            }
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn show(&mut self, outcome: &Outcome) -> io::Result<()> {
        if let Some(view) = &outcome.table {
            if self.config.auto_table {
                self.print_table(view)?;
            }
        }
        match &outcome.feedback {
            Feedback::Notice(text) => writeln!(self.output, "{text}"),
            Feedback::Report(text) => {
                writeln!(self.output, "===== {} =====", Action::Summary.label())?;
                writeln!(self.output, "{text}")?;
                writeln!(self.output, "=====")
            }
        }
    }

    fn print_table(&mut self, view: &TableView) -> io::Result<()> {
        let table = student_table(view, self.config.table_style);
        writeln!(self.output, "{table}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(script: &str) -> (String, SessionStats) {
        session_with(GradebookConfig::default(), script)
    }

    fn session_with(config: GradebookConfig, script: &str) -> (String, SessionStats) {
        let mut out = Vec::new();
        let stats = Shell::new(config, script.as_bytes(), &mut out)
            .run()
            .unwrap();
        (String::from_utf8(out).unwrap(), stats)
    }

    #[test]
    fn parse_field_assignments() {
        assert_eq!(parse_line("name  Mary Ann"), Ok(Command::SetName("Mary Ann".into())));
        assert_eq!(parse_line("grade 88"), Ok(Command::SetGrade("88".into())));
        assert_eq!(parse_line("name"), Ok(Command::SetName(String::new())));
    }

    #[test]
    fn parse_actions_with_arguments() {
        assert_eq!(
            parse_line("add-student Mary Ann"),
            Ok(Command::Run {
                action: Action::AddStudent,
                fill: Fill::Name("Mary Ann".into())
            })
        );
        assert_eq!(
            parse_line("add-grade Mary Ann 91.5"),
            Ok(Command::Run {
                action: Action::AddGrade,
                fill: Fill::NameAndGrade("Mary Ann".into(), "91.5".into())
            })
        );
        assert_eq!(
            parse_line("ag 70"),
            Ok(Command::Run {
                action: Action::AddGrade,
                fill: Fill::Grade("70".into())
            })
        );
        assert_eq!(
            parse_line("summary"),
            Ok(Command::Run {
                action: Action::Summary,
                fill: Fill::Keep
            })
        );
    }

    #[test]
    fn parse_blank_comment_and_unknown() {
        assert_eq!(parse_line("   "), Ok(Command::Blank));
        assert_eq!(parse_line("# roster for period 3"), Ok(Command::Blank));
        assert_eq!(parse_line("frobnicate now"), Err("frobnicate".into()));
    }

    #[test]
    fn scenario_add_and_grade() {
        let (out, stats) = session("add-student Alice\nadd-grade Alice 90\nadd-grade Alice 70\n");
        assert!(out.contains("Student added successfully."));
        assert!(out.contains("Grade added successfully."));
        assert!(out.contains("80.00"));
        assert_eq!(stats, SessionStats { actions: 3, rejected: 0 });
    }

    #[test]
    fn rejected_actions_are_counted() {
        let (out, stats) = session("add-student Alice\nadd-student alice\nadd-grade Alice 105\nbogus\n");
        assert!(out.contains("Student already exists."));
        assert!(out.contains("Grade must be between 0 and 100."));
        assert!(out.contains("Unknown command: bogus"));
        assert_eq!(stats, SessionStats { actions: 3, rejected: 3 });
    }

    #[test]
    fn fields_persist_between_actions() {
        let (out, _) = session("name Bob\nadd-student\ngrade 64\nadd-grade\nadd-grade\nfields\n");
        assert_eq!(out.matches("Grade added successfully.").count(), 2);
        assert!(out.contains("name:  \"Bob\""));
        assert!(out.contains("grade: \"64\""));
        assert!(out.contains("[64.0, 64.0]"));
    }

    #[test]
    fn remove_with_empty_name_field() {
        let (out, _) = session("add-student Alice\nname\nremove\n");
        assert!(out.ends_with("Student not found.\n"), "{out}");
    }

    #[test]
    fn summary_is_framed() {
        let (out, _) = session("summary\nadd-student Alice\nsummary\n");
        assert!(out.contains("No students available.\n"));
        assert!(out.contains("===== Summary Report =====\nAlice []\n  (No grades yet)\n"));
    }

    #[test]
    fn quit_stops_reading() {
        let (out, stats) = session("add-student Alice\nquit\nadd-student Bob\n");
        assert!(!out.contains("Bob"));
        assert_eq!(stats.actions, 1);
    }

    #[test]
    fn auto_table_can_be_disabled() {
        let config = GradebookConfig {
            auto_table: false,
            ..GradebookConfig::default()
        };
        let (out, _) = session_with(config, "add-student Alice\n");
        assert_eq!(out, "Student added successfully.\n");
    }

    #[test]
    fn echo_and_prompt() {
        let config = GradebookConfig {
            prompt: "$ ".into(),
            auto_table: false,
            ..GradebookConfig::default()
        };
        let mut out = Vec::new();
        Shell::new(config, "clear\n".as_bytes(), &mut out)
            .interactive(true)
            .echo(true)
            .run()
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("$ > clear\nAll data cleared.\n$ "), "{out}");
    }
}
