use std::fmt;

/// Operating system a launch is composed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
    /// Anything without a launch strategy, carrying the detected OS name.
    Other(String),
}

impl Platform {
    /// The platform this binary is running on.
    pub fn current() -> Self {
        Self::from(std::env::consts::OS)
    }

    /// Separator between entries of a `PATH`-style variable.
    pub fn path_separator(&self) -> char {
        match self {
            Self::Windows => ';',
            _ => ':',
        }
    }
}

impl From<&str> for Platform {
    fn from(os: &str) -> Self {
        match os {
            "windows" => Self::Windows,
            "linux" => Self::Linux,
            "macos" => Self::MacOs,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::Linux => write!(f, "linux"),
            Self::MacOs => write!(f, "macos"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}
