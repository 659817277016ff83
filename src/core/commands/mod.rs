use std::collections::BTreeMap;

mod cd;
mod exit;

pub use cd::CdCommand;
pub use exit::ExitCommand;

use crate::core::state::Continuation;
use crate::process::{ProcessError, ProcessExecutor};

#[derive(Debug)]
pub enum CommandError {
    MissingArgument(&'static str),
    Io(std::io::Error),
    Process(ProcessError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::MissingArgument(cmd) => {
                write!(f, "expected an argument to \"{}\"", cmd)
            }
            CommandError::Io(err) => write!(f, "{}", err),
            CommandError::Process(err) => write!(f, "{}", err),
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::Io(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::Process(err)
    }
}

pub trait Command {
    /// `argv[0]` is the command's own name, the rest its arguments.
    fn execute(&self, argv: &[&str]) -> Result<Continuation, CommandError>;
}

/// The closed set of built-in commands. Built-ins run in-process because a
/// child cannot change its parent's working directory or make it exit.
#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Exit(ExitCommand),
}

impl Command for CommandType {
    fn execute(&self, argv: &[&str]) -> Result<Continuation, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(argv),
            CommandType::Exit(cmd) => cmd.execute(argv),
        }
    }
}

#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<String, CommandType>,
    process_executor: ProcessExecutor,
}

impl CommandExecutor {
    pub fn new(flags: &crate::flags::Flags) -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd".to_string(), CommandType::Cd(CdCommand::new()));
        commands.insert("exit".to_string(), CommandType::Exit(ExitCommand::new()));

        CommandExecutor {
            commands,
            process_executor: ProcessExecutor::new(flags),
        }
    }

    /// Dispatch one invocation: builtin lookup first, external launch as
    /// the fallback. An empty `argv` is a no-op.
    ///
    /// Failures are reported here, so the caller always gets a usable
    /// continuation signal back.
    pub fn execute(&self, argv: &[&str]) -> Continuation {
        let Some(name) = argv.first() else {
            return Continuation::Continue;
        };

        let result = match self.commands.get(*name) {
            Some(cmd) => cmd.execute(argv),
            None => self
                .process_executor
                .spawn_process(argv)
                .map(|_| Continuation::Continue)
                .map_err(CommandError::from),
        };

        result.unwrap_or_else(|e| {
            eprintln!("rill: {}", e);
            Continuation::Continue
        })
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }
}
