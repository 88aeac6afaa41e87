//! Pipe-delimited, fixed-width result rows.

use crate::student::Student;
use std::io::{self, Write};

/// One printable column of a result row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    Grade,
    Classroom,
    Bus,
    Teacher,
}

impl Column {
    /// Minimum width; longer values are printed in full.
    pub fn width(self) -> usize {
        match self {
            Column::Name => 18,
            Column::Grade => 2,
            Column::Classroom => 4,
            Column::Bus => 3,
            Column::Teacher => 19,
        }
    }

    fn value(self, student: &Student) -> String {
        match self {
            Column::Name => student.display_name(),
            Column::Grade => student.grade.to_string(),
            Column::Classroom => student.classroom.to_string(),
            Column::Bus => student.bus.to_string(),
            Column::Teacher => student.teacher.display_name(),
        }
    }
}

/// Render `student` as `|value|value|...|`, each value left-justified.
pub fn format_row(student: &Student, columns: &[Column]) -> String {
    let mut row = String::from("|");
    for column in columns {
        row.push_str(&format!(
            "{:<width$}|",
            column.value(student),
            width = column.width()
        ));
    }
    row
}

/// Print one row per student followed by a single blank line.
///
/// The blank line is written even when `students` is empty.
pub fn write_results(
    out: &mut dyn Write,
    students: &[&Student],
    columns: &[Column],
) -> io::Result<()> {
    for student in students {
        writeln!(out, "{}", format_row(student, columns))?;
    }
    writeln!(out)
}
