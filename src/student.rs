//! Student records parsed from one comma-separated roster line.

use std::fmt;
use thiserror::Error;

/// Errors produced while turning a roster line into a [`Student`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The line had neither 5 nor 7 fields.
    #[error("expected 5 or 7 fields, found {0}")]
    FieldCount(usize),
    /// A numeric column did not hold an integer.
    #[error("field `{field}` is not an integer: '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    /// A required text column was blank.
    #[error("field `{0}` is empty")]
    EmptyField(&'static str),
}

/// The teacher a student is assigned to.
///
/// Owned by value: two students of the same teacher simply carry equal copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    pub last_name: String,
    pub first_name: Option<String>,
}

impl Teacher {
    /// Canonical rendering used in result rows.
    pub fn display_name(&self) -> String {
        display_name(&self.last_name, self.first_name.as_deref())
    }
}

/// One roster entry. Fields are set once during parsing and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub last_name: String,
    pub first_name: Option<String>,
    pub grade: i32,
    pub classroom: i32,
    pub bus: i32,
    pub teacher: Teacher,
}

impl Student {
    /// Build a student from already split fields.
    ///
    /// The layout is picked by field count, and every field is trimmed before use:
    /// - 5 fields: `StLastName, Grade, Classroom, Bus, TLastName`
    /// - 7 fields: `StLastName, StFirstName, Grade, Classroom, Bus, TLastName, TFirstName`
    pub fn from_fields(fields: &[&str]) -> Result<Self, ParseError> {
        let fields: Vec<&str> = fields.iter().map(|f| f.trim()).collect();

        let (last, first, numbers, t_last, t_first) = match fields.as_slice() {
            [last, grade, classroom, bus, t_last] => {
                (*last, None, [*grade, *classroom, *bus], *t_last, None)
            }
            [last, first, grade, classroom, bus, t_last, t_first] => (
                *last,
                Some(*first),
                [*grade, *classroom, *bus],
                *t_last,
                Some(*t_first),
            ),
            other => return Err(ParseError::FieldCount(other.len())),
        };

        if last.is_empty() {
            return Err(ParseError::EmptyField("StLastName"));
        }
        if t_last.is_empty() {
            return Err(ParseError::EmptyField("TLastName"));
        }

        let [grade, classroom, bus] = numbers;
        Ok(Student {
            last_name: last.to_string(),
            first_name: non_empty(first),
            grade: parse_int("Grade", grade)?,
            classroom: parse_int("Classroom", classroom)?,
            bus: parse_int("Bus", bus)?,
            teacher: Teacher {
                last_name: t_last.to_string(),
                first_name: non_empty(t_first),
            },
        })
    }

    /// Parse a raw roster line by splitting it on `,`.
    pub fn parse_line(line: &str) -> Result<Self, ParseError> {
        let fields: Vec<&str> = line.split(',').collect();
        Self::from_fields(&fields)
    }

    /// Canonical rendering used in result rows: `First Last`, or just `Last`.
    pub fn display_name(&self) -> String {
        display_name(&self.last_name, self.first_name.as_deref())
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

fn display_name(last: &str, first: Option<&str>) -> String {
    match first {
        Some(first) => format!("{first} {last}"),
        None => last.to_string(),
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

fn parse_int(field: &'static str, value: &str) -> Result<i32, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
