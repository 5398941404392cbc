//! Open a visible terminal window running a command, on Windows, Linux and
//! macOS.
//!
//! Each platform has its own [`Launcher`] that composes a [`Spawn`]; the
//! [`Dispatcher`] picks one for the running OS and hands the result to a
//! [`Spawner`]. Composition is pure, so every launcher can be exercised on
//! any host.

mod dispatch;
mod env;
mod error;
mod linux;
mod macos;
mod platform;
mod quote;
mod request;
mod spawn;
#[cfg(test)]
mod testing;
mod windows;

pub use dispatch::{Dispatcher, Launcher, run_in_terminal};
pub use env::{Env, add_to_path, inherited};
pub use error::TerminalError;
pub use linux::{LinuxLauncher, Terminal};
pub use macos::MacLauncher;
pub use platform::Platform;
pub use quote::{Dialect, join, quote, split_cmd};
pub use request::{CommandLine, Request};
pub use spawn::{Invocation, Locator, ProcessSpawner, Spawn, Spawner, SystemLocator};
pub use windows::WindowsLauncher;
