use crate::conf::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// What to do with a command that fails to parse or names an unknown
/// timestamp or category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop the batch and report the error.
    #[default]
    Abort,
    /// Log a warning, write an `Error: ...` line for the command, continue.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MonitorConfig {
    #[serde(default = "default_input")]
    pub input: PathBuf,

    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Append to an existing output file instead of truncating it.
    #[serde(default = "default_append")]
    pub append: bool,

    #[serde(default)]
    pub on_error: ErrorPolicy,
}

fn default_input() -> PathBuf {
    PathBuf::from("input.txt")
}

fn default_output() -> PathBuf {
    PathBuf::from("output.txt")
}

fn default_append() -> bool {
    true
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            append: default_append(),
            on_error: ErrorPolicy::default(),
        }
    }
}

impl MonitorConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let cfg: Self = toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if same_path(&self.input, &self.output) {
            return Err(ConfigError::SameInputOutput {
                path: self.input.clone(),
            });
        }
        Ok(())
    }
}

// `./in.txt` and `in.txt` name the same file. Symlinks and `..` are only
// resolved when both files already exist.
fn same_path(a: &Path, b: &Path) -> bool {
    if let (Ok(a), Ok(b)) = (fs::canonicalize(a), fs::canonicalize(b)) {
        return a == b;
    }
    match (std::path::absolute(a), std::path::absolute(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

impl FromStr for MonitorConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cfg: Self = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }
}
