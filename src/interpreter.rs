use crate::command::{self, CommandError};
use crate::io_adapters::LineReader;
use crate::report;
use crate::roster::{LoadError, Roster};
use anyhow::Result;
use log::debug;
use std::io::{self, Write};
use std::path::Path;

/// Menu printed before every read.
pub const MENU: &str = "\
Choose your action (divided by ':'):
S[tudent]: <lastName> - find all students with this last name.
S[tudent]:B[us]: <lastName> - find all students with this last name, including their bus route.
T[eacher]: <lastName> - find all students taught by the teacher with this last name.
C[lassroom]: <number> - find all students in this classroom.
B[us]: <number> - find all students who take this bus route.
Q[uit] - quit the program.
";

/// What the loop does after handling one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Query front-end over a loaded roster.
///
/// The roster is loaded once in [`SchoolSearch::new`] and is read-only afterwards,
/// so every command sees the same data.
///
/// Example
/// ```
/// use school_search::{Roster, SchoolSearch};
/// let roster = Roster::parse("Smith,9,101,5,Jones\n").unwrap();
/// let search = SchoolSearch::from_roster(roster);
/// let mut out = Vec::new();
/// search.execute("S:Smith", &mut out).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "|Smith             |9 |101 |Jones              |\n\n"
/// );
/// ```
pub struct SchoolSearch {
    roster: Roster,
}

impl SchoolSearch {
    /// Load the roster at `path`. Fails before any interaction if the path is
    /// blank, missing, unreadable or holds a malformed line.
    pub fn new(path: &Path) -> Result<Self, LoadError> {
        Ok(Self::from_roster(Roster::load(path)?))
    }

    pub fn from_roster(roster: Roster) -> Self {
        Self { roster }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Interpret one command line and print its results or the error message.
    ///
    /// User mistakes are reported on `out`; only write failures are returned.
    pub fn execute(&self, line: &str, out: &mut dyn Write) -> io::Result<()> {
        match command::parse(line) {
            Ok(query) => {
                debug!("running {:?}", query);
                let students = self.roster.find(|s| query.matches(s));
                report::write_results(out, &students, query.columns())
            }
            Err(err) => {
                debug!("rejected command {:?}: {}", line, err);
                write_error(out, &err)
            }
        }
    }

    /// Handle one line read by the loop.
    pub fn step(&self, line: &str, out: &mut dyn Write) -> io::Result<Flow> {
        if line.is_empty() {
            write_error(out, &CommandError::WrongCommand)?;
            return Ok(Flow::Continue);
        }
        if command::is_quit(line) {
            return Ok(Flow::Quit);
        }
        self.execute(line, out)?;
        Ok(Flow::Continue)
    }

    /// Run a batch of commands in order, stopping early at a quit command.
    pub fn run_commands<I, S>(&self, commands: I, out: &mut dyn Write) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in commands {
            if self.step(line.as_ref(), out)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Interactive loop: print the menu, read a line, handle it, until quit or end of input.
    pub fn repl(&self, input: &mut dyn LineReader, out: &mut dyn Write) -> Result<()> {
        loop {
            write!(out, "{MENU}")?;
            out.flush()?;

            let Some(line) = input.read_line()? else {
                debug!("input closed");
                break;
            };
            if self.step(&line, out)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }
}

fn write_error(out: &mut dyn Write, err: &CommandError) -> io::Result<()> {
    writeln!(out, "\n{err}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io_adapters::{BufLineReader, ScriptReader};
    use std::io::Cursor;

    const ROSTER: &str = "\
Smith,9,101,5,Jones
Brown,10,102,6,Jones

SMITH,11,101,7,Nguyen
COOKUS,XUAN,3,107,52,FAFARD,ROCIO
";

    const WRONG: &str = "\nYou've entered the wrong command. Please choose again\n\n";

    fn search() -> SchoolSearch {
        SchoolSearch::from_roster(Roster::parse(ROSTER).unwrap())
    }

    fn run(search: &SchoolSearch, line: &str) -> String {
        let mut out = Vec::new();
        search.execute(line, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn repl(search: &SchoolSearch, lines: &[&str]) -> String {
        let mut input = ScriptReader::new(lines.iter().map(|l| l.to_string()).collect());
        let mut out = Vec::new();
        search.repl(&mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_student_by_last_name() {
        let s = search();
        assert_eq!(
            run(&s, "S:Smith"),
            "|Smith             |9 |101 |Jones              |\n\
             |SMITH             |11|101 |Nguyen             |\n\n"
        );
        assert_eq!(run(&s, "Student:smith"), run(&s, "S:SMITH"));
    }

    #[test]
    fn test_student_with_bus_column() {
        let s = search();
        assert_eq!(
            run(&s, "S:B:Cookus"),
            "|XUAN COOKUS       |3 |107 |52 |ROCIO FAFARD       |\n\n"
        );
    }

    #[test]
    fn test_teacher_classroom_and_bus() {
        let s = search();
        assert_eq!(
            run(&s, "T:jones"),
            "|Smith             |Jones              |\n\
             |Brown             |Jones              |\n\n"
        );
        assert_eq!(
            run(&s, "C:101"),
            "|Smith             |101 |\n|SMITH             |101 |\n\n"
        );
        assert_eq!(run(&s, "B : 6"), "|Brown             |10|102 |6  |\n\n");
    }

    #[test]
    fn test_no_match_prints_only_blank_line() {
        assert_eq!(run(&search(), "T:Nobody"), "\n");
        assert_eq!(run(&search(), "C:999"), "\n");
    }

    #[test]
    fn test_user_errors_are_reported_not_fatal() {
        let s = search();
        assert_eq!(run(&s, "X:Smith"), WRONG);
        assert_eq!(run(&s, "Stu:Smith"), WRONG);
        assert_eq!(run(&s, "S:Bx:Smith"), WRONG);
        assert_eq!(run(&s, "C:abc"), "\n'abc' is not a valid number.\n\n");
    }

    #[test]
    fn test_step_handles_empty_and_quit() {
        let s = search();
        let mut out = Vec::new();
        assert_eq!(s.step("", &mut out).unwrap(), Flow::Continue);
        assert_eq!(String::from_utf8(out).unwrap(), WRONG);

        let mut out = Vec::new();
        assert_eq!(s.step("Q", &mut out).unwrap(), Flow::Quit);
        assert_eq!(s.step("Quit", &mut out).unwrap(), Flow::Quit);
        assert!(out.is_empty());

        assert_eq!(s.step("quit", &mut out).unwrap(), Flow::Continue);
    }

    #[test]
    fn test_repl_prints_menu_before_each_read() {
        let out = repl(&search(), &["", "C:107", "Q", "S:Smith"]);
        let expected = format!("{MENU}{WRONG}{MENU}|XUAN COOKUS       |107 |\n\n{MENU}");
        assert_eq!(out, expected);
    }

    #[test]
    fn test_repl_stops_at_end_of_input() {
        let out = repl(&search(), &["B:5"]);
        let expected = format!("{MENU}|Smith             |9 |101 |5  |\n\n{MENU}");
        assert_eq!(out, expected);
    }

    #[test]
    fn test_repl_survives_invalid_utf8_input() {
        let mut input = BufLineReader::new(Cursor::new(b"\xff\nS:Smith\nQ\n".to_vec()));
        let mut out = Vec::new();
        search().repl(&mut input, &mut out).unwrap();
        let expected = format!(
            "{MENU}{WRONG}{MENU}|Smith             |9 |101 |Jones              |\n\
             |SMITH             |11|101 |Nguyen             |\n\n{MENU}"
        );
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_quit_ignores_roster_contents() {
        let empty = SchoolSearch::from_roster(Roster::default());
        assert_eq!(repl(&empty, &["Quit"]), MENU);
    }

    #[test]
    fn test_run_commands_stops_at_quit() {
        let s = search();
        let mut out = Vec::new();
        s.run_commands(["C:102", "Q", "C:101"], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "|Brown             |102 |\n\n");
    }

    #[test]
    fn test_new_loads_from_file() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, "{ROSTER}")?;
        let s = SchoolSearch::new(file.path())?;
        assert_eq!(s.roster().len(), 4);
        Ok(())
    }

    #[test]
    fn test_new_fails_fast_on_malformed_file() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "Smith,9,101,5,Jones")?;
        writeln!(file, "Brown,ten,102,6,Jones")?;
        let err = SchoolSearch::new(file.path()).err().unwrap();
        assert!(matches!(err, LoadError::Parse { line: 2, .. }));
        Ok(())
    }
}
