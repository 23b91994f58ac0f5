//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level psikotest configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PsikotestConfig {
    /// Directory holding the session state.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Directory reports are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Report formats used when `--format` is not given.
    #[serde(default = "default_format")]
    pub default_format: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./.psikotest")
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./psikotest-reports")
}
fn default_format() -> String {
    "html".to_string()
}

impl Default for PsikotestConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            output_dir: default_output_dir(),
            default_format: default_format(),
        }
    }
}

impl PsikotestConfig {
    /// Apply a `--data-dir` flag, which beats every other source.
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not rescanned.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. the explicit path, which must exist
/// 2. `psikotest.toml` in the current directory
/// 3. `~/.config/psikotest/config.toml`
///
/// Environment variable overrides: `PSIKOTEST_DATA_DIR`, `PSIKOTEST_OUTPUT_DIR`.
pub fn load_config_from(path: Option<&Path>) -> Result<PsikotestConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("psikotest.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<PsikotestConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "config loaded");
            config
        }
        None => PsikotestConfig::default(),
    };

    // Apply env var overrides
    if let Ok(dir) = std::env::var("PSIKOTEST_DATA_DIR") {
        config.data_dir = PathBuf::from(dir);
    }
    if let Ok(dir) = std::env::var("PSIKOTEST_OUTPUT_DIR") {
        config.output_dir = PathBuf::from(dir);
    }

    config.data_dir = resolve_path(&config.data_dir);
    config.output_dir = resolve_path(&config.output_dir);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("psikotest"))
}
