use std::env;
use std::path::PathBuf;

/// Name of the history file the shell keeps in its working directory.
pub const DEFAULT_HISTORY_FILE: &str = "sh_history";

/// Environment variable that overrides the history file location.
pub const HISTORY_FILE_VAR: &str = "HISTORY_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_HISTORY_FILE),
        }
    }
}

impl Config {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads `HISTORY_FILE`, falling back to `sh_history` relative to the
    /// current directory when it is unset or empty.
    pub fn from_env() -> Self {
        Self::from_var(env::var_os(HISTORY_FILE_VAR))
    }

    fn from_var(value: Option<std::ffi::OsString>) -> Self {
        value
            .filter(|v| !v.is_empty())
            .map_or_else(Self::default, Self::with_path)
    }
}
