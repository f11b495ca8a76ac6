use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::Deserialize;
use thiserror::Error;

const CONFIG_FILE: &str = "config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not find a config file, looked in: {0:?}")]
    NotFound(Vec<PathBuf>),
    #[error("Could not read config file: {0}")]
    Unreadable(#[from] std::io::Error),
    #[error("Config file is not valid: {0}")]
    Invalid(#[from] serde_json::Error),
    #[error("Config file must contain both runner1 and runner2")]
    MissingRunner,
    #[error("currentSeasonNumber must be at least 1, got {0}")]
    InvalidSeason(u32),
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RunnerConfig {
    pub runner1: String,
    pub runner2: String,
    pub current_season_number: u32,
}

impl RunnerConfig {
    /// Loads the first config file found in [`candidate_paths`]
    pub fn load() -> Result<RunnerConfig, ConfigError> {
        let candidates = candidate_paths();
        match locate(&candidates) {
            Some(path) => RunnerConfig::from_file(&path),
            None => Err(ConfigError::NotFound(candidates)),
        }
    }

    pub fn from_file(path: &Path) -> Result<RunnerConfig, ConfigError> {
        tracing::info!("Reading config from {}", path.display());
        let file_content = fs::read_to_string(path)?;
        RunnerConfig::from_json(&file_content)
    }

    pub fn from_json(json: &str) -> Result<RunnerConfig, ConfigError> {
        let config = serde_json::from_str::<RunnerConfig>(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.runner1.trim().is_empty() || self.runner2.trim().is_empty() {
            return Err(ConfigError::MissingRunner);
        }

        if self.current_season_number < 1 {
            return Err(ConfigError::InvalidSeason(self.current_season_number));
        }

        Ok(())
    }

    pub fn runners(&self) -> [&str; 2] {
        [self.runner1.as_str(), self.runner2.as_str()]
    }
}

/// Returns the first candidate that exists as a file
pub fn locate(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|path| path.is_file()).cloned()
}

/// Config locations in lookup order: `RUNNER_CONFIG`, the working directory,
/// the directory of the executable and finally the one shipped with the crate
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(path) = env::var("RUNNER_CONFIG") {
        candidates.push(PathBuf::from(path));
    }

    candidates.push(PathBuf::from(CONFIG_FILE));

    if let Some(dir) = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(dir.join(CONFIG_FILE));
    }

    candidates.push(Path::new(env!("CARGO_MANIFEST_DIR")).join(CONFIG_FILE));
    candidates
}

/// Directory the reports are written to, `REPORT_DIR` or the working directory
pub fn report_dir() -> PathBuf {
    env::var("REPORT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}
