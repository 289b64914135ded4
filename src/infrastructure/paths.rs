//! Platform path resolution.
//!
//! Follows the XDG base directory layout with `$HOME` fallbacks:
//!
//! | Purpose | Variable | Fallback |
//! |---------|----------|----------|
//! | config file | `$XDG_CONFIG_HOME/podshelf/config.toml` | `~/.config/podshelf/config.toml` |
//! | trace log | `$XDG_STATE_HOME/podshelf/podshelf.log` | `~/.local/state/podshelf/podshelf.log` |
//!
//! When neither variable nor `$HOME` is set, paths are relative to the working
//! directory.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "podshelf";

fn base_dir(xdg_var: &str, home_suffix: &[&str]) -> PathBuf {
    resolve_base(
        env::var_os(xdg_var).map(PathBuf::from),
        env::var_os("HOME").map(PathBuf::from),
        home_suffix,
    )
}

fn resolve_base(xdg: Option<PathBuf>, home: Option<PathBuf>, home_suffix: &[&str]) -> PathBuf {
    if let Some(dir) = xdg.filter(|d| d.is_absolute()) {
        return dir.join(APP_DIR);
    }
    let mut dir = home.unwrap_or_default();
    for part in home_suffix {
        dir.push(part);
    }
    dir.join(APP_DIR)
}

/// Directory holding `config.toml`.
#[must_use]
pub fn get_config_dir() -> PathBuf {
    base_dir("XDG_CONFIG_HOME", &[".config"])
}

/// Default location of the configuration file.
#[must_use]
pub fn default_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Directory for runtime state such as the trace log.
#[must_use]
pub fn get_state_dir() -> PathBuf {
    base_dir("XDG_STATE_HOME", &[".local", "state"])
}

/// Default location of the trace log.
#[must_use]
pub fn default_log_path() -> PathBuf {
    get_state_dir().join("podshelf.log")
}

/// Expands a leading `~` to `$HOME`.
///
/// # Examples
///
/// ```
/// use podshelf::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix('~'), env::var_os("HOME")) {
        (Some(rest), Some(home)) if rest.is_empty() || rest.starts_with('/') => {
            PathBuf::from(home).join(rest.trim_start_matches('/'))
        }
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xdg_directory_wins_over_home() {
        let dir = resolve_base(
            Some(PathBuf::from("/xdg/config")),
            Some(PathBuf::from("/home/ana")),
            &[".config"],
        );
        assert_eq!(dir, PathBuf::from("/xdg/config/podshelf"));
    }

    #[test]
    fn relative_xdg_directory_is_ignored() {
        let dir = resolve_base(
            Some(PathBuf::from("relative")),
            Some(PathBuf::from("/home/ana")),
            &[".local", "state"],
        );
        assert_eq!(dir, PathBuf::from("/home/ana/.local/state/podshelf"));
    }

    #[test]
    fn no_home_falls_back_to_working_directory() {
        assert_eq!(resolve_base(None, None, &[".config"]), PathBuf::from(".config/podshelf"));
    }

    #[test]
    fn config_file_lives_in_config_dir() {
        assert!(default_config_path().ends_with("podshelf/config.toml"));
        assert!(default_log_path().ends_with("podshelf/podshelf.log"));
    }
}
