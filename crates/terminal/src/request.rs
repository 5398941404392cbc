use crate::env::Env;
use crate::quote::{self, Dialect};
use std::path::PathBuf;

/// The command to run inside the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandLine {
    /// A command string that is already quoted for the target shell.
    Raw(String),
    /// Program followed by its arguments, quoted on demand.
    Args(Vec<String>),
}

impl CommandLine {
    /// The command as one string for a POSIX shell.
    pub fn to_posix(&self) -> String {
        match self {
            Self::Raw(line) => line.clone(),
            Self::Args(args) => quote::join(args, Dialect::Posix),
        }
    }

    /// The command as separate tokens, splitting a raw string the way `cmd.exe` would.
    pub fn to_tokens(&self) -> Vec<String> {
        match self {
            Self::Raw(line) => quote::split_cmd(line),
            Self::Args(args) => args.clone(),
        }
    }
}

impl From<&str> for CommandLine {
    fn from(line: &str) -> Self {
        Self::Raw(line.to_string())
    }
}

impl From<String> for CommandLine {
    fn from(line: String) -> Self {
        Self::Raw(line)
    }
}

impl From<Vec<String>> for CommandLine {
    fn from(args: Vec<String>) -> Self {
        Self::Args(args)
    }
}

impl From<&[&str]> for CommandLine {
    fn from(args: &[&str]) -> Self {
        Self::Args(args.iter().map(ToString::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for CommandLine {
    fn from(args: [&str; N]) -> Self {
        Self::from(args.as_slice())
    }
}

/// Everything needed to open one terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub cmd: CommandLine,
    /// Starting directory of the terminal.
    pub cwd: PathBuf,
    /// Environment of the terminal. `None` inherits the caller's.
    pub env: Option<Env>,
    /// Leave an interactive shell behind once the command exits.
    pub keep_open: bool,
}

impl Request {
    pub fn new(cmd: impl Into<CommandLine>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            cmd: cmd.into(),
            cwd: cwd.into(),
            env: None,
            keep_open: false,
        }
    }

    #[must_use]
    pub fn with_env(mut self, env: Option<Env>) -> Self {
        self.env = env;
        self
    }

    #[must_use]
    pub fn with_keep_open(mut self, keep_open: bool) -> Self {
        self.keep_open = keep_open;
        self
    }
}
