// SPDX-License-Identifier: MPL-2.0
//! Path resolution for the config directory and the project root.
//!
//! # Resolution Order
//!
//! Both locations follow the same priority:
//! 1. **Explicit override** - parameter to the `_with_override()` functions
//! 2. **CLI arguments** (`--config-dir`, `--root`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`SIMVLA_PAGE_CONFIG_DIR`, `SIMVLA_PAGE_ROOT`)
//! 4. **Default** - platform config dir via `dirs`, or the current directory
//!    for the project root
//!
//! The project root is the directory holding the paper sources (`simVLA.pdf`,
//! `paper/`) and the served `public/` directory.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "SimVLAPage";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "SIMVLA_PAGE_CONFIG_DIR";

/// Environment variable to override the project root.
pub const ENV_ROOT_DIR: &str = "SIMVLA_PAGE_ROOT";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_ROOT_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` and `--root` CLI values.
///
/// Only the first call has an effect; later calls are ignored so that the
/// launcher and tests cannot race each other into a panic.
pub fn init_cli_overrides(config_dir: Option<String>, root_dir: Option<String>) {
    let _ = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from));
    let _ = CLI_ROOT_DIR.set(root_dir.map(PathBuf::from));
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the directory holding `settings.toml`.
///
/// Returns `None` if no platform config directory exists (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = CLI_CONFIG_DIR.get().and_then(Clone::clone) {
        return Some(path);
    }

    if let Some(path) = env_path(ENV_CONFIG_DIR) {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the project root used for image resolution and asset sync.
pub fn project_root() -> PathBuf {
    project_root_with_override(None)
}

pub fn project_root_with_override(override_path: Option<PathBuf>) -> PathBuf {
    if let Some(path) = override_path {
        return path;
    }

    if let Some(path) = CLI_ROOT_DIR.get().and_then(Clone::clone) {
        return path;
    }

    if let Some(path) = env_path(ENV_ROOT_DIR) {
        return path;
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/test/config/dir");

        let result = get_app_config_dir();
        assert_eq!(result, Some(PathBuf::from("/test/config/dir")));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_falls_back_to_current_dir_for_root() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_ROOT_DIR, "");

        let root = project_root();
        if let Ok(cwd) = std::env::current_dir() {
            assert_eq!(root, cwd);
        }

        std::env::remove_var(ENV_ROOT_DIR);
    }

    #[test]
    fn env_var_sets_project_root() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_ROOT_DIR, "/srv/simvla");

        assert_eq!(project_root(), PathBuf::from("/srv/simvla"));

        std::env::remove_var(ENV_ROOT_DIR);
    }

    #[test]
    fn override_wins_over_env_var_for_root() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_ROOT_DIR, "/env/root");

        let result = project_root_with_override(Some(PathBuf::from("/override/root")));
        assert_eq!(result, PathBuf::from("/override/root"));

        std::env::remove_var(ENV_ROOT_DIR);
    }
}
