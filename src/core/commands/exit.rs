use super::{Command, CommandError};
use crate::core::state::Continuation;

#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    /// Does nothing except ask the loop to shut down; the process then
    /// ends with a success status from `main`.
    fn execute(&self, _argv: &[&str]) -> Result<Continuation, CommandError> {
        Ok(Continuation::Terminate)
    }
}
