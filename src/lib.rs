//! An interactive search tool over a comma-separated school roster.
//!
//! The roster file is loaded once into a read-only [`Roster`]; every command the
//! user types is turned into a [`command::Query`], matched against the roster in
//! file order and printed as fixed-width rows.
//!
//! The main entry point is [`SchoolSearch`], which owns the roster and runs the
//! read-dispatch loop over any [`io_adapters::LineReader`].

pub mod command;
pub mod config;
mod interpreter;
pub mod io_adapters;
pub mod report;
pub mod roster;
pub mod student;

pub use interpreter::{Flow, MENU, SchoolSearch};
pub use roster::{LoadError, Roster};
pub use student::{ParseError, Student, Teacher};
