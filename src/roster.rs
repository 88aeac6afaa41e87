//! Loading the roster file and scanning it.

use crate::student::{ParseError, Student};
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that prevent a roster from being loaded.
///
/// Any of these is fatal: a roster is either loaded completely or not at all.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The configured path was empty or only whitespace.
    #[error("the roster file name is invalid")]
    InvalidPath,
    /// Nothing exists at the configured path.
    #[error("roster file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The file exists but could not be read.
    #[error("failed to read roster file {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    /// A non-blank line did not describe a student.
    #[error("malformed roster line {line}: {source}")]
    Parse { line: usize, source: ParseError },
}

/// The ordered, read-only list of students loaded at startup.
///
/// Order matches the non-blank lines of the source file.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Validate `path` and load every student it describes.
    ///
    /// The path is checked before any read is attempted.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        if path.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(LoadError::InvalidPath);
        }
        if !path.exists() {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }

        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let roster = Self::parse(&text)?;
        info!("loaded {} students from {}", roster.len(), path.display());
        Ok(roster)
    }

    /// Parse roster text: one student per non-blank line.
    ///
    /// A leading UTF-8 byte order mark is ignored. Stops at the first malformed
    /// line; line numbers in errors are 1-based.
    pub fn parse(text: &str) -> Result<Self, LoadError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut students = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                debug!("skipping blank line {}", idx + 1);
                continue;
            }
            let student = Student::parse_line(line).map_err(|source| LoadError::Parse {
                line: idx + 1,
                source,
            })?;
            students.push(student);
        }
        Ok(Self { students })
    }

    /// Every student satisfying `predicate`, in roster order.
    pub fn find<P>(&self, predicate: P) -> Vec<&Student>
    where
        P: Fn(&Student) -> bool,
    {
        self.students.iter().filter(|s| predicate(s)).collect()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
