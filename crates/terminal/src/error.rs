use std::io;
use thiserror::Error;

/// Error type for terminal launch operations.
#[derive(Error, Debug)]
pub enum TerminalError {
    /// The host OS has no launch strategy.
    #[error("can't launch terminal in {0}")]
    UnsupportedPlatform(String),

    /// None of the known Linux terminal emulators is installed.
    #[error(
        "no terminal emulator found. Install x-terminal-emulator, gnome-terminal, xfce4-terminal, lxterminal, or xterm."
    )]
    NoTerminalFound,

    /// The command has no program to run.
    #[error("command is empty")]
    EmptyCommand,

    /// A variable the launch strategy depends on is not in the environment.
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    /// The spawn call itself failed.
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}
