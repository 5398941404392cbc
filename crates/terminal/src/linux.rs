use crate::dispatch::Launcher;
use crate::error::TerminalError;
use crate::quote::{Dialect, quote};
use crate::request::Request;
use crate::spawn::{Invocation, Locator, Spawn};
use std::path::Path;

/// Shell left running in the window when the terminal is kept open.
const INTERACTIVE_SHELL: &str = "bash";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Terminal {
    #[default]
    Default,
    XTerminalEmulator,
    Gnome,
    Xfce4,
    Lx,
    Xterm,
}

impl Terminal {
    fn bin(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::XTerminalEmulator => Some("x-terminal-emulator"),
            Self::Gnome => Some("gnome-terminal"),
            Self::Xfce4 => Some("xfce4-terminal"),
            Self::Lx => Some("lxterminal"),
            Self::Xterm => Some("xterm"),
        }
    }

    /// Named emulators tried after `x-terminal-emulator`, in preference order.
    fn fallbacks() -> &'static [Terminal] {
        &[Self::Gnome, Self::Xfce4, Self::Lx, Self::Xterm]
    }

    fn is_available(self, locator: &dyn Locator) -> bool {
        self.bin().is_some_and(|bin| locator.which(bin).is_some())
    }

    /// Pick the emulator to launch, preferring `self` when it is installed.
    fn detect(self, locator: &dyn Locator) -> Option<Terminal> {
        if !matches!(self, Self::Default | Self::XTerminalEmulator)
            && self.is_available(locator)
        {
            return Some(self);
        }

        if let Some(path) = locator.which("x-terminal-emulator") {
            return Some(resolve_alternative(&path, locator));
        }

        Self::fallbacks()
            .iter()
            .copied()
            .find(|t| t.is_available(locator))
    }

    /// Full command line that opens this emulator running `in_term_cmd`.
    fn command_line(self, in_term_cmd: &str) -> String {
        let quoted = quote(in_term_cmd, Dialect::Posix);
        match self {
            // lxterminal only understands the `--command=` form
            Self::Lx => format!("lxterminal --command={quoted}"),
            other => format!("{} -e {quoted}", other.bin().unwrap_or("xterm")),
        }
    }
}

/// `x-terminal-emulator` is an alternatives link. When it points at
/// lxterminal, call lxterminal by name so its own flag syntax applies.
fn resolve_alternative(path: &Path, locator: &dyn Locator) -> Terminal {
    if locator.canonicalize(path).ends_with("lxterminal")
        && Terminal::Lx.is_available(locator)
    {
        Terminal::Lx
    } else {
        Terminal::XTerminalEmulator
    }
}

impl From<&str> for Terminal {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "x-terminal-emulator" => Self::XTerminalEmulator,
            "gnome-terminal" => Self::Gnome,
            "xfce4-terminal" => Self::Xfce4,
            "lxterminal" => Self::Lx,
            "xterm" => Self::Xterm,
            _ => Self::Default,
        }
    }
}

/// Opens the first installed Linux terminal emulator.
#[derive(Debug, Clone, Copy)]
pub struct LinuxLauncher<'a> {
    locator: &'a dyn Locator,
    terminal: Terminal,
}

impl<'a> LinuxLauncher<'a> {
    pub fn new(locator: &'a dyn Locator, terminal: Terminal) -> Self {
        Self { locator, terminal }
    }
}

impl Launcher for LinuxLauncher<'_> {
    fn prepare(&self, request: &Request) -> Result<Spawn, TerminalError> {
        let terminal = self
            .terminal
            .detect(self.locator)
            .ok_or(TerminalError::NoTerminalFound)?;
        log::info!(
            "using {} as terminal emulator",
            terminal.bin().unwrap_or_default()
        );

        let cmd = request.cmd.to_posix();
        let in_term_cmd = if request.keep_open {
            let core_cmd = format!("{cmd}; exec {INTERACTIVE_SHELL} -i");
            format!(
                "{INTERACTIVE_SHELL} -c {}",
                quote(&core_cmd, Dialect::Posix)
            )
        } else {
            cmd
        };

        Ok(Spawn {
            invocation: Invocation::Shell {
                command_line: terminal.command_line(&in_term_cmd),
            },
            cwd: Some(request.cwd.clone()),
            env: request.env.clone(),
        })
    }
}
