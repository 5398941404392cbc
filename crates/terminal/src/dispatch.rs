use crate::env::Env;
use crate::error::TerminalError;
use crate::linux::{LinuxLauncher, Terminal};
use crate::macos::MacLauncher;
use crate::platform::Platform;
use crate::request::{CommandLine, Request};
use crate::spawn::{Locator, ProcessSpawner, Spawn, Spawner, SystemLocator};
use crate::windows::WindowsLauncher;
use std::fmt;
use std::path::PathBuf;

/// A platform strategy for opening a terminal.
pub trait Launcher: fmt::Debug {
    /// Compose the process launch for `request` without starting anything.
    ///
    /// # Errors
    ///
    /// Returns an error if no terminal can be found or the request cannot
    /// be expressed on this platform.
    fn prepare(&self, request: &Request) -> Result<Spawn, TerminalError>;
}

/// Picks the launcher for a platform and spawns what it composes.
#[derive(Debug)]
pub struct Dispatcher {
    platform: Platform,
    spawner: Box<dyn Spawner>,
    locator: Box<dyn Locator>,
    terminal: Terminal,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self {
            platform: Platform::current(),
            spawner: Box::new(ProcessSpawner),
            locator: Box::new(SystemLocator),
            terminal: Terminal::Default,
        }
    }
}

impl Dispatcher {
    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    #[must_use]
    pub fn with_spawner(mut self, spawner: impl Spawner + 'static) -> Self {
        self.spawner = Box::new(spawner);
        self
    }

    #[must_use]
    pub fn with_locator(mut self, locator: impl Locator + 'static) -> Self {
        self.locator = Box::new(locator);
        self
    }

    /// Linux emulator to try before the usual search order.
    #[must_use]
    pub fn with_terminal(mut self, terminal: Terminal) -> Self {
        self.terminal = terminal;
        self
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Compose the launch for `request` on the configured platform.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedPlatform` for an OS without a strategy, or
    /// whatever the platform launcher reports.
    pub fn prepare(&self, request: &Request) -> Result<Spawn, TerminalError> {
        match &self.platform {
            Platform::Windows => WindowsLauncher.prepare(request),
            Platform::Linux => {
                LinuxLauncher::new(self.locator.as_ref(), self.terminal).prepare(request)
            }
            Platform::MacOs => MacLauncher.prepare(request),
            Platform::Other(name) => Err(TerminalError::UnsupportedPlatform(name.clone())),
        }
    }

    /// Open a terminal running `request` and return without waiting for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the launch cannot be composed or the spawn fails.
    pub fn run(&self, request: &Request) -> Result<(), TerminalError> {
        let spawn = self.prepare(request)?;
        log::debug!("launching {:?} in {:?}", spawn.invocation, spawn.cwd);

        self.spawner
            .spawn(&spawn)
            .map_err(|source| TerminalError::Spawn {
                program: spawn.invocation.host(),
                source,
            })
    }
}

/// Run `cmd` in a new, visible terminal window.
///
/// `env` replaces the environment of the terminal; `None` inherits ours.
/// With `keep_open` the window drops into an interactive shell once the
/// command finishes.
///
/// # Errors
///
/// Returns an error on an unsupported OS, when no terminal emulator is
/// installed, or when spawning the launch process fails.
pub fn run_in_terminal(
    cmd: impl Into<CommandLine>,
    cwd: impl Into<PathBuf>,
    env: Option<Env>,
    keep_open: bool,
) -> Result<(), TerminalError> {
    let request = Request::new(cmd, cwd)
        .with_env(env)
        .with_keep_open(keep_open);
    Dispatcher::default().run(&request)
}
