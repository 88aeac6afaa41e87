use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{self, BufRead};

/// Source of command lines for the interactive loop.
///
/// `Ok(None)` means the input is closed and no further lines will arrive.
/// Returned lines never carry the trailing line terminator. Bytes that are not
/// valid UTF-8 are replaced rather than reported, so a garbled line reaches the
/// interpreter as an unknown command.
pub trait LineReader {
    fn read_line(&mut self) -> Result<Option<String>>;
}

/// Terminal-backed reader with line editing and in-session history.
pub struct TerminalReader {
    editor: DefaultEditor,
    prompt: String,
}

impl TerminalReader {
    pub fn new(prompt: impl Into<String>) -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            prompt: prompt.into(),
        })
    }
}

impl LineReader for TerminalReader {
    fn read_line(&mut self) -> Result<Option<String>> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                if !line.is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            }
            // Ctrl-C behaves like an empty line: the loop reprompts.
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Io(err)) if err.kind() == io::ErrorKind::InvalidData => {
                Ok(Some(String::new()))
            }
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Reader over any buffered stream, used for piped stdin and in tests.
pub struct BufLineReader<R> {
    inner: R,
}

impl<R: BufRead> BufLineReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: BufRead> LineReader for BufLineReader<R> {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.inner.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// Replays a fixed list of lines, then reports closed input.
pub struct ScriptReader {
    lines: std::vec::IntoIter<String>,
}

impl ScriptReader {
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            lines: lines.into_iter(),
        }
    }
}

impl LineReader for ScriptReader {
    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.next())
    }
}
