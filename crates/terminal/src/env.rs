use crate::platform::Platform;
use std::collections::HashMap;

/// Environment handed to a spawned terminal, variable name to value.
pub type Env = HashMap<String, String>;

/// Prepend `directory` to a `PATH`-style list unless it is already there.
///
/// Entries are compared case-insensitively on Windows. An empty `path`
/// yields just the directory.
pub fn add_to_path(directory: &str, path: &str, platform: &Platform) -> String {
    let separator = platform.path_separator();

    let present = path.split(separator).any(|entry| {
        if *platform == Platform::Windows {
            entry.eq_ignore_ascii_case(directory)
        } else {
            entry == directory
        }
    });

    if present {
        path.to_string()
    } else if path.is_empty() {
        directory.to_string()
    } else {
        format!("{directory}{separator}{path}")
    }
}

/// Snapshot of the current process environment.
pub fn inherited() -> Env {
    std::env::vars().collect()
}
