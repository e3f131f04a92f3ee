//! Line-oriented input/output boundary used by the human player and the game loop.

use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use tracing::{instrument, trace};

/// Blocking text console.
pub trait Console {
    /// Shows `prompt` and blocks until one line of input arrives.
    ///
    /// The returned line has its line terminator stripped.
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError>;

    /// Prints one message followed by a newline.
    fn say(&mut self, message: &str) -> Result<(), ConsoleError>;
}

/// [`Console`] over any buffered reader and writer, e.g. stdin/stdout.
#[derive(Debug)]
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    /// Wraps an input and output stream.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gives the streams back.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    #[instrument(skip(self))]
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::new(ConsoleErrorKind::Closed));
        }
        let line = line.trim_end_matches(['\r', '\n']).to_string();
        trace!(%line, "Read console line");
        Ok(line)
    }

    fn say(&mut self, message: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;
        Ok(())
    }
}

/// What went wrong at the console.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConsoleErrorKind {
    /// Input reached end of file.
    #[display("input closed")]
    Closed,
    /// Underlying stream failed.
    #[display("I/O failure: {}", _0)]
    Io(String),
}

/// Console error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Console error: {} at {}:{}", kind, file, line)]
pub struct ConsoleError {
    /// Error category.
    pub kind: ConsoleErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConsoleError {
    /// Creates a new console error with caller location tracking.
    #[track_caller]
    pub fn new(kind: ConsoleErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// True when the input stream has ended.
    pub fn is_closed(&self) -> bool {
        self.kind == ConsoleErrorKind::Closed
    }
}

impl From<std::io::Error> for ConsoleError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(ConsoleErrorKind::Io(err.to_string()))
    }
}
