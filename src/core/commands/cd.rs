use super::{Command, CommandError};
use crate::core::state::Continuation;
use std::env;

#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, argv: &[&str]) -> Result<Continuation, CommandError> {
        let path = argv.get(1).ok_or(CommandError::MissingArgument("cd"))?;
        env::set_current_dir(path)?;
        Ok(Continuation::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Both cases share one test because they observe the process-wide
    // working directory; parallel test threads would race otherwise.
    #[test]
    fn changes_directory_but_not_on_failure() {
        let cmd = CdCommand::new();
        let target = tempfile::tempdir().expect("temp dir");
        let target_path = target.path().canonicalize().expect("canonicalize");

        let result = cmd.execute(&["cd", &target_path.to_string_lossy()]);
        assert!(matches!(result, Ok(Continuation::Continue)));
        assert_eq!(
            env::current_dir()
                .expect("cwd")
                .canonicalize()
                .expect("canonicalize"),
            target_path
        );

        let result = cmd.execute(&["cd", "/nonexistent-path-xyz"]);
        assert!(matches!(result, Err(CommandError::Io(_))));
        assert_eq!(
            env::current_dir()
                .expect("cwd")
                .canonicalize()
                .expect("canonicalize"),
            target_path
        );

        // Leave a directory that outlives the tempdir, or later reads of
        // the cwd in this process would fail.
        env::set_current_dir(env::temp_dir()).expect("restore cwd");
    }

    #[test]
    fn missing_argument_is_a_usage_error() {
        let cmd = CdCommand::new();
        let result = cmd.execute(&["cd"]);
        assert!(matches!(result, Err(CommandError::MissingArgument("cd"))));
    }
}
