use std::env;

use crate::core::commands::CommandExecutor;
use crate::core::state::{Continuation, ShellState};
use crate::error::ShellError;
use crate::flags::Flags;
use crate::highlight::PromptStyler;
use crate::input::tokenizer;
use crate::input::{LineReader, ReadOutcome};

pub struct Shell {
    reader: LineReader,
    executor: CommandExecutor,
    styler: PromptStyler,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        Ok(Shell {
            reader: LineReader::new()?,
            executor: CommandExecutor::new(&flags),
            styler: PromptStyler::new(),
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        let mut state = ShellState::Running;
        while state.is_running() {
            let prompt = self.render_prompt();
            let continuation = match self.reader.read(&prompt) {
                Ok(ReadOutcome::Line(line)) => self.dispatch(&line),
                Ok(ReadOutcome::EndOfInput) => Continuation::Terminate,
                Ok(ReadOutcome::Interrupted) => Continuation::Continue,
                Err(e) => {
                    // An unreadable input stream ends the session; it is
                    // not a failure of the interpreter itself.
                    eprintln!("rill: {}", e);
                    Continuation::Terminate
                }
            };
            state = state.apply(continuation);
        }
        Ok(())
    }

    /// One full iteration over a raw line: tokenize, then dispatch.
    fn dispatch(&mut self, line: &str) -> Continuation {
        let argv = tokenizer::split_line(line);
        self.executor.execute(&argv)
    }

    fn render_prompt(&self) -> String {
        let cwd = env::current_dir()
            .map(|dir| dir.to_string_lossy().into_owned())
            .unwrap_or_else(|_| String::from("?"));
        format!("{} > ", self.styler.prompt_dir(&cwd))
    }
}
