//! Configuration for nullscope.
//!
//! The config file lives at `~/.nullscope/config.toml` unless
//! `NULLSCOPE_CONFIG` points elsewhere. Every field is optional:
//!
//! ```toml
//! [profile]
//! name = "Jon"
//! age = 34
//! email = "${USER}@example.com"
//!
//! [log]
//! level = "debug"
//! ```
//!
//! String values may reference environment variables as `${VAR}`. Values are
//! trimmed after expansion, and a blank one is treated as absent.

use serde::Deserialize;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "NULLSCOPE_CONFIG";

#[derive(Debug, Default, Deserialize)]
pub struct NullscopeConfig {
    pub profile: Option<ProfileConfig>,
    pub log: Option<LogConfig>,
}

/// The `[profile]` table.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProfileConfig {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter directive, e.g. `debug` or `nullscope_core=trace`.
    pub level: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl ProfileConfig {
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.name.as_deref().and_then(resolve)
    }

    #[must_use]
    pub fn age(&self) -> Option<u32> {
        self.age
    }

    #[must_use]
    pub fn email(&self) -> Option<String> {
        self.email.as_deref().and_then(resolve)
    }
}

fn resolve(raw: &str) -> Option<String> {
    let value = expand_env_vars(raw);
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Replace `${VAR}` references with the variable's value (empty when unset).
#[must_use]
pub fn expand_env_vars(value: &str) -> String {
    expand_vars_with(value, |var| env::var(var).ok())
}

/// Like [`expand_env_vars`], but resolving variables through `lookup`.
#[must_use]
pub fn expand_vars_with(value: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let var = &after[..end];
                if !var.is_empty() {
                    out.push_str(&lookup(var).unwrap_or_default());
                }
                rest = &after[end + 1..];
            }
            None => {
                // Unterminated reference: keep it verbatim.
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

impl NullscopeConfig {
    /// Load the config from its default location.
    ///
    /// A missing file is not an error: it yields `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file");
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    /// Load the config from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "Loaded config");
                Ok(config)
            }
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn log_level(&self) -> Option<&str> {
        self.log
            .as_ref()
            .and_then(|log| log.level.as_deref())
            .map(str::trim)
            .filter(|level| !level.is_empty())
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV).filter(|path| !path.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".nullscope").join("config.toml"))
}
