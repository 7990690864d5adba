//! Startup-time resolution of the dailies directory.
//!
//! Precedence: the `DAILY_DIR` environment variable, then `dailies_dir` in
//! `~/.daily/config.toml`, then the default `~/.daily/dailies`. The
//! environment is read once by the binary and handed in here; core logic
//! only ever sees the resolved path.

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Errors from configuration and directory resolution.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("cannot determine home directory")]
    #[diagnostic(
        code(daily::config::no_home),
        help("Set the HOME environment variable or ensure a valid user profile exists.")
    )]
    NoHome,

    #[error("failed to create directory: {path}")]
    #[diagnostic(
        code(daily::config::create_dir),
        help("Check that the parent directory exists and you have write permissions.")
    )]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config file: {path}")]
    #[diagnostic(
        code(daily::config::write),
        help("Ensure you have write permissions to the config directory.")
    )]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// User configuration, persisted as TOML at `~/.daily/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Directory where daily notes are stored. A leading `~` expands to
    /// the home directory.
    #[serde(default)]
    pub dailies_dir: Option<String>,
}

impl Config {
    /// `~/.daily/`
    pub fn config_dir() -> ConfigResult<PathBuf> {
        let home = std::env::var("HOME")
            .map(PathBuf::from)
            .map_err(|_| ConfigError::NoHome)?;
        Ok(home.join(".daily"))
    }

    /// `~/.daily/config.toml`
    pub fn config_file() -> ConfigResult<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from the default location. A missing or
    /// unparseable file yields the defaults: config problems never block
    /// note-taking.
    pub fn load() -> Self {
        match Self::config_file() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Self::default(),
        }
    }

    /// Load from an explicit path, defaulting on any read or parse failure.
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unparseable config");
                Self::default()
            }
        }
    }

    /// Write a commented default config file at the default location,
    /// unless one already exists. Returns the config file path either way.
    pub fn write_default() -> ConfigResult<PathBuf> {
        Self::write_default_to(&Self::config_dir()?)
    }

    /// Write a commented default `config.toml` into `dir`, unless one
    /// already exists. An existing file is never touched.
    pub fn write_default_to(dir: &Path) -> ConfigResult<PathBuf> {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir {
            path: dir.display().to_string(),
            source: e,
        })?;

        let path = dir.join("config.toml");
        if !path.exists() {
            let default_dir = dir.join("dailies");
            let content = format!(
                "# daily configuration\n\
                 \n\
                 # Directory where daily notes are stored.\n\
                 # A leading ~ expands to your home directory.\n\
                 dailies_dir = \"{}\"\n",
                default_dir.display()
            );
            std::fs::write(&path, content).map_err(|e| ConfigError::Write {
                path: path.display().to_string(),
                source: e,
            })?;
        }
        Ok(path)
    }

    /// Resolve the dailies directory and create it if absent.
    ///
    /// `env_dir` is the value of `DAILY_DIR` as read by the binary at
    /// startup; it wins over the config file, which wins over the default.
    pub fn resolve_dailies_dir(env_dir: Option<&str>) -> ConfigResult<PathBuf> {
        let config = Self::load();
        let home = std::env::var("HOME")
            .map(PathBuf::from)
            .map_err(|_| ConfigError::NoHome)?;

        let dir = dailies_dir_from(env_dir, &config, &home);
        std::fs::create_dir_all(&dir).map_err(|e| ConfigError::CreateDir {
            path: dir.display().to_string(),
            source: e,
        })?;
        Ok(dir)
    }
}

/// Pure precedence logic: environment override, then config file, then the
/// default `<home>/.daily/dailies`.
pub fn dailies_dir_from(env_dir: Option<&str>, config: &Config, home: &Path) -> PathBuf {
    if let Some(dir) = env_dir.filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    if let Some(dir) = config.dailies_dir.as_deref().filter(|d| !d.is_empty()) {
        return expand_tilde(dir, home);
    }
    home.join(".daily").join("dailies")
}

/// Expand a leading `~` or `~/` to the home directory.
fn expand_tilde(path: &str, home: &Path) -> PathBuf {
    if path == "~" {
        home.to_path_buf()
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}
