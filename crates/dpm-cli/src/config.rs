//! CLI configuration - load `config.toml` from disk.
//!
//! The file lives in the platform-specific configuration folder:
//! - macOS: ~/Library/Application Support/org.dicom-pipeline-monitor.DICOM-Pipeline-Monitor/
//! - Windows: %APPDATA%/dicom-pipeline-monitor/DICOM Pipeline Monitor/config/
//! - Linux: ~/.config/dicompipelinemonitor/
//!
//! Every field is optional; missing sections take their defaults.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "dicom-pipeline-monitor";
const APP_NAME: &str = "DICOM Pipeline Monitor";
const CONFIG_FILENAME: &str = "config.toml";

/// Viewport width assumed when none is configured.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

/// Session timeout shown by `session show` when none is configured.
pub const DEFAULT_SESSION_TIMEOUT_SECS: u64 = 3600;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub viewport: ViewportConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding `storage.json`; the platform data dir when unset.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Displayed only; sessions are not expired.
    pub session_timeout_secs: u64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            session_timeout_secs: DEFAULT_SESSION_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Storage directory from the file, falling back to the platform data dir.
    pub fn storage_dir(&self) -> Option<PathBuf> {
        self.storage.dir.clone().or_else(default_storage_dir)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
}

/// Get the path to the default config file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Platform data directory used for `storage.json`.
pub fn default_storage_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Load the config from `explicit`, or from [`config_path`] when `None`.
///
/// Returns defaults if:
/// - The config file doesn't exist
/// - The config file cannot be parsed
/// - The platform-specific directory cannot be determined
pub fn load_config(explicit: Option<&Path>) -> Config {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match config_path() {
            Some(path) => path,
            None => {
                tracing::warn!("Could not determine config path, using defaults");
                return Config::default();
            }
        },
    };
    load_config_from(&path)
}

fn load_config_from(path: &Path) -> Config {
    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Failed to parse config file: {}, using defaults", e);
                Config::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file found at {:?}, using defaults", path);
            Config::default()
        }
        Err(e) => {
            tracing::warn!("Failed to read config file: {}, using defaults", e);
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir(prefix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("{prefix}-{nanos}"));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_config_path_exists() {
        let path = config_path();
        if let Some(p) = path {
            assert!(p.to_string_lossy().contains("config.toml"));
        }
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = unique_temp_dir("dpm-config");
        let path = dir.join(CONFIG_FILENAME);
        fs::write(&path, "[viewport]\nwidth = 375\n").unwrap();

        let config = load_config(Some(&path));
        assert_eq!(config.viewport.width, 375);
        assert_eq!(config.security.session_timeout_secs, 3600);
        assert_eq!(config.storage.dir, None);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn storage_dir_from_file_wins() {
        let dir = unique_temp_dir("dpm-config");
        let path = dir.join(CONFIG_FILENAME);
        fs::write(&path, "[storage]\ndir = \"/var/lib/dpm\"\n").unwrap();

        let config = load_config(Some(&path));
        assert_eq!(config.storage_dir(), Some(PathBuf::from("/var/lib/dpm")));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn missing_or_broken_file_gives_defaults() {
        let dir = unique_temp_dir("dpm-config");
        assert_eq!(load_config(Some(&dir.join("absent.toml"))), Config::default());

        let path = dir.join(CONFIG_FILENAME);
        fs::write(&path, "[viewport\nwidth = ").unwrap();
        assert_eq!(load_config(Some(&path)), Config::default());
        let _ = fs::remove_dir_all(dir);
    }
}
