//! # Configuration
//!
//! fated has no config file. The two switches the commands care about come
//! from the command line and are passed around as a [`Config`] value.

use std::path::PathBuf;

/// Directory name used under the user cache dir.
const APP_DIR: &str = "fated";
const LOG_FILE: &str = "fated.log";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Keep rolling in a full-screen session instead of printing once.
    pub interactive: bool,
    /// Print underlying error detail and write a debug log.
    pub debug: bool,
}

impl Config {
    pub fn new(interactive: bool, debug: bool) -> Self {
        Self { interactive, debug }
    }
}

/// Returns the path to `<cache dir>/fated/fated.log`.
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(APP_DIR).join(LOG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_one_shot_and_quiet() {
        let config = Config::default();
        assert!(!config.interactive);
        assert!(!config.debug);
    }

    #[test]
    fn test_new_sets_flags() {
        let config = Config::new(true, false);
        assert!(config.interactive);
        assert!(!config.debug);
    }

    #[test]
    fn test_log_path_file_name() {
        if let Some(path) = log_path() {
            assert!(path.ends_with("fated/fated.log"));
        }
    }
}
