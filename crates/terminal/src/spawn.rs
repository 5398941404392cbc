use crate::env::Env;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

#[cfg(windows)]
const CREATE_NEW_CONSOLE: u32 = 0x0000_0010;

/// How the launch process is started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Run a program directly, attached to a brand-new console window.
    Console { program: String, args: Vec<String> },
    /// Hand a composed command line to the platform shell.
    Shell { command_line: String },
}

impl Invocation {
    /// First program named on the command line, for diagnostics.
    pub fn program(&self) -> &str {
        match self {
            Self::Console { program, .. } => program,
            Self::Shell { command_line } => {
                command_line.split_whitespace().next().unwrap_or_default()
            }
        }
    }

    /// Executable that is actually spawned: the program itself, or the
    /// platform shell for a composed command line.
    pub fn host(&self) -> String {
        match self {
            Self::Console { program, .. } => program.clone(),
            Self::Shell { .. } => shell_program(),
        }
    }
}

/// A fully composed launch, ready to be spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spawn {
    pub invocation: Invocation,
    /// Working directory of the spawned process.
    pub cwd: Option<PathBuf>,
    /// Complete environment of the spawned process. `None` inherits ours.
    pub env: Option<Env>,
}

/// Starts processes. Implementations must not wait for the child.
pub trait Spawner: fmt::Debug {
    /// Spawn the process described by `spawn` and return immediately.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying spawn primitive.
    fn spawn(&self, spawn: &Spawn) -> io::Result<()>;
}

/// Finds installed binaries.
pub trait Locator: fmt::Debug {
    /// Full path of `bin` on the search path, if installed.
    fn which(&self, bin: &str) -> Option<PathBuf>;

    /// `path` with every symbolic link resolved.
    fn canonicalize(&self, path: &Path) -> PathBuf;
}

/// Spawns real OS processes and never waits on them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessSpawner;

impl Spawner for ProcessSpawner {
    fn spawn(&self, spawn: &Spawn) -> io::Result<()> {
        let mut command = match &spawn.invocation {
            Invocation::Console { program, args } => console_command(program, args),
            Invocation::Shell { command_line } => shell_command(command_line),
        };

        if let Some(cwd) = &spawn.cwd {
            command.current_dir(cwd);
        }

        if let Some(env) = &spawn.env {
            command.env_clear().envs(env);
        }

        let child = command.spawn()?;
        log::debug!(
            "spawned {} for {} (pid {})",
            spawn.invocation.host(),
            spawn.invocation.program(),
            child.id()
        );

        // The terminal outlives us; the handle is dropped without waiting
        Ok(())
    }
}

fn console_command(program: &str, args: &[String]) -> Command {
    let mut command = Command::new(program);
    command.args(args);

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        command.creation_flags(CREATE_NEW_CONSOLE);
    }

    command
}

#[cfg(windows)]
fn shell_program() -> String {
    std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
}

#[cfg(not(windows))]
fn shell_program() -> String {
    "/bin/sh".to_string()
}

#[cfg(windows)]
fn shell_command(command_line: &str) -> Command {
    use std::os::windows::process::CommandExt;

    let mut command = Command::new(shell_program());
    command.raw_arg(format!("/c \"{command_line}\""));
    command
}

#[cfg(not(windows))]
fn shell_command(command_line: &str) -> Command {
    let mut command = Command::new(shell_program());
    command.arg("-c").arg(command_line);
    command
}

/// Looks binaries up on `PATH` with the `which` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocator;

impl Locator for SystemLocator {
    fn which(&self, bin: &str) -> Option<PathBuf> {
        which::which(bin).ok()
    }

    fn canonicalize(&self, path: &Path) -> PathBuf {
        std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_of_console() {
        let invocation = Invocation::Console {
            program: "python".into(),
            args: vec!["-i".into()],
        };
        assert_eq!(invocation.program(), "python");
    }

    #[test]
    fn test_program_of_shell() {
        let invocation = Invocation::Shell {
            command_line: "xterm -e top".into(),
        };
        assert_eq!(invocation.program(), "xterm");
    }

    #[test]
    fn test_host_of_console_is_program() {
        let invocation = Invocation::Console {
            program: "python".into(),
            args: vec![],
        };
        assert_eq!(invocation.host(), "python");
    }

    #[test]
    fn test_host_of_shell_is_platform_shell() {
        let invocation = Invocation::Shell {
            command_line: r#"start "Shell for py" /D "C:\w" /W cmd /K "py""#.into(),
        };
        let host = invocation.host();

        assert_ne!(host, "start");
        #[cfg(unix)]
        assert_eq!(host, "/bin/sh");
        #[cfg(windows)]
        assert!(host.to_lowercase().ends_with("cmd.exe"));
    }

    #[test]
    fn test_system_locator_misses_unknown_binary() {
        assert!(
            SystemLocator
                .which("termlaunch-no-such-binary-3f9a")
                .is_none()
        );
    }

    #[test]
    fn test_system_locator_canonicalize_missing_path_is_identity() {
        let path = Path::new("/nonexistent/termlaunch/bin");
        assert_eq!(SystemLocator.canonicalize(path), path);
    }

    #[cfg(unix)]
    #[test]
    fn test_process_spawner_runs_shell_line() {
        let dir = std::env::temp_dir();
        let spawn = Spawn {
            invocation: Invocation::Shell {
                command_line: "true".into(),
            },
            cwd: Some(dir),
            env: None,
        };
        assert!(ProcessSpawner.spawn(&spawn).is_ok());
    }

    #[test]
    fn test_process_spawner_reports_missing_program() {
        let spawn = Spawn {
            invocation: Invocation::Console {
                program: "termlaunch-no-such-binary-3f9a".into(),
                args: vec![],
            },
            cwd: None,
            env: None,
        };
        assert!(ProcessSpawner.spawn(&spawn).is_err());
    }
}
