use crate::error::ShellError;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Result of one blocking read from the input stream.
#[derive(Debug)]
pub enum ReadOutcome {
    /// A full line, terminator excluded.
    Line(String),
    /// The stream ended with nothing left to read.
    EndOfInput,
    /// The read was interrupted (Ctrl-C); nothing was consumed.
    Interrupted,
}

pub struct LineReader {
    editor: DefaultEditor,
}

impl LineReader {
    pub fn new() -> Result<Self, ShellError> {
        Ok(LineReader {
            editor: DefaultEditor::new()?,
        })
    }

    /// Block until a line terminator, end of stream, or an interrupt.
    ///
    /// The reader only reports what it saw; deciding whether the session
    /// ends is the caller's job.
    pub fn read(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadOutcome::Line(line)),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::EndOfInput),
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(e) => Err(e.into()),
        }
    }
}
