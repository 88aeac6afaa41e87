//! Tokenizing and classifying one line of user input.
//!
//! A line is stripped of spaces and split on `:`. The first token selects the
//! command by its leading letter; the remaining tokens carry a qualifier and/or
//! the value to search for. The result is a [`Query`] that knows both how to
//! select students and which columns to print.

use crate::report::Column;
use crate::student::Student;
use thiserror::Error;

/// User errors detected while interpreting a command line. None of these are fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command letter, misspelled command word or unexpected token count.
    #[error("You've entered the wrong command. Please choose again")]
    WrongCommand,
    /// A classroom or bus number that is not an integer.
    #[error("'{0}' is not a valid number.")]
    NotANumber(String),
}

/// The four searchable command families, keyed by their leading letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Student,
    Teacher,
    Classroom,
    Bus,
}

impl CommandKind {
    /// Look up a command family by the first character of a token.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'S' => Some(Self::Student),
            'T' => Some(Self::Teacher),
            'C' => Some(Self::Classroom),
            'B' => Some(Self::Bus),
            _ => None,
        }
    }

    pub fn full_name(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Teacher => "Teacher",
            Self::Classroom => "Classroom",
            Self::Bus => "Bus",
        }
    }
}

/// A fully interpreted search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// `S:<lastName>`
    StudentLastName(String),
    /// `S:B:<lastName>`, same selection with the bus column added.
    StudentLastNameWithBus(String),
    /// `T:<lastName>`
    TeacherLastName(String),
    /// `C:<number>`
    Classroom(i32),
    /// `B:<number>`
    Bus(i32),
}

impl Query {
    /// Whether `student` belongs in the result set. Name comparisons ignore case.
    pub fn matches(&self, student: &Student) -> bool {
        match self {
            Self::StudentLastName(name) | Self::StudentLastNameWithBus(name) => {
                same_name(&student.last_name, name)
            }
            Self::TeacherLastName(name) => same_name(&student.teacher.last_name, name),
            Self::Classroom(number) => student.classroom == *number,
            Self::Bus(number) => student.bus == *number,
        }
    }

    /// Columns printed for each matching student.
    pub fn columns(&self) -> &'static [Column] {
        use Column::*;
        match self {
            Self::StudentLastName(_) => &[Name, Grade, Classroom, Teacher],
            Self::StudentLastNameWithBus(_) => &[Name, Grade, Classroom, Bus, Teacher],
            Self::TeacherLastName(_) => &[Name, Teacher],
            Self::Classroom(_) => &[Name, Classroom],
            Self::Bus(_) => &[Name, Grade, Classroom, Bus],
        }
    }
}

/// Quit words accepted by the interactive loop. Matching is exact and case-sensitive.
pub fn is_quit(line: &str) -> bool {
    line == "Q" || line == "Quit"
}

/// Remove every space, then split on `:`.
pub fn tokenize(line: &str) -> Vec<String> {
    line.replace(' ', "").split(':').map(str::to_string).collect()
}

/// A token names a command if it is the single shorthand letter or the exact full word.
///
/// `"S"` and `"Student"` match `"Student"`; `"Stu"` and `""` do not. Callers
/// dispatch on the first letter before asking, so the shorthand letter is
/// already known to be the right one.
pub fn matches_name(token: &str, full_name: &str) -> bool {
    token.chars().count() == 1 || token == full_name
}

/// Interpret a raw input line.
pub fn parse(line: &str) -> Result<Query, CommandError> {
    let tokens = tokenize(line);
    let primary = tokens[0].as_str();

    let kind = primary
        .chars()
        .next()
        .and_then(CommandKind::from_letter)
        .ok_or(CommandError::WrongCommand)?;
    if !matches_name(primary, kind.full_name()) {
        return Err(CommandError::WrongCommand);
    }

    match (kind, tokens.as_slice()) {
        (CommandKind::Student, [_, qualifier, name]) => {
            if qualifier.starts_with('B') && matches_name(qualifier, CommandKind::Bus.full_name()) {
                Ok(Query::StudentLastNameWithBus(name.clone()))
            } else {
                Err(CommandError::WrongCommand)
            }
        }
        (CommandKind::Student, [_, name]) => Ok(Query::StudentLastName(name.clone())),
        (CommandKind::Teacher, [_, name]) => Ok(Query::TeacherLastName(name.clone())),
        (CommandKind::Classroom, [_, number]) => Ok(Query::Classroom(parse_number(number)?)),
        (CommandKind::Bus, [_, number]) => Ok(Query::Bus(parse_number(number)?)),
        _ => Err(CommandError::WrongCommand),
    }
}

fn parse_number(token: &str) -> Result<i32, CommandError> {
    token
        .parse()
        .map_err(|_| CommandError::NotANumber(token.to_string()))
}

fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
