//! Terminal rendering of the student table.

use comfy_table::presets::{ASCII_FULL, ASCII_MARKDOWN, UTF8_FULL};
use comfy_table::{Cell, Table};

use gradebook_core::view::{TableView, COLUMNS};

use crate::config::TableStyle;

/// Build a printable table with the fixed `Name, Grades, Average, Highest,
/// Lowest` header and one row per student.
pub fn student_table(view: &TableView, style: TableStyle) -> Table {
    let mut table = Table::new();
    table.load_preset(match style {
        TableStyle::Utf8 => UTF8_FULL,
        TableStyle::Ascii => ASCII_FULL,
        TableStyle::Markdown => ASCII_MARKDOWN,
    });
    table.set_header(COLUMNS.to_vec());

    for row in &view.rows {
        table.add_row(row.cells().into_iter().map(Cell::new).collect::<Vec<_>>());
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradebook_core::roster::Roster;

    #[test]
    fn header_always_present() {
        let text = student_table(&TableView::default(), TableStyle::Ascii).to_string();
        for column in COLUMNS {
            assert!(text.contains(column), "missing {column} in\n{text}");
        }
    }

    #[test]
    fn rows_carry_formatted_cells() {
        let mut roster = Roster::new();
        roster.add_student("Alice").unwrap();
        roster.add_student("Bob").unwrap();
        roster.add_grade("Alice", "90").unwrap();
        roster.add_grade("Alice", "70").unwrap();

        let text = student_table(&TableView::render(&roster), TableStyle::Markdown).to_string();
        assert!(text.contains("[90.0, 70.0]"));
        assert!(text.contains("80.00"));
        let bob = text.lines().find(|l| l.contains("Bob")).unwrap();
        assert_eq!(bob.matches(" - ").count(), 3, "{bob}");
    }
}
