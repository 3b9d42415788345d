use crate::errors::{AppError, AppResult};
use crate::models::HoursRange;
use crate::utils::date::is_valid_format;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input file name patterns, tried in order.
    pub file_patterns: Vec<String>,
    pub archive_folder_name: String,
    pub log_file_prefix: String,
    pub result_file_prefix: String,
    /// Name of the per-run archive subfolder.
    pub folder_date_format: String,
    /// Timestamp of each run-log line.
    pub log_date_format: String,
    /// Timestamps shown in the report and the log header.
    pub result_date_format: String,
    pub min_hours_per_day: f64,
    pub max_hours_per_day: f64,
    /// Pause before copying the original, in case another program still holds it.
    pub copy_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_patterns: vec![
                "WorkingTimeTracker*.csv".to_string(),
                "WorkingTimeTracker*.xlsx".to_string(),
            ],
            archive_folder_name: "Archive".to_string(),
            log_file_prefix: "Log".to_string(),
            result_file_prefix: "Result".to_string(),
            folder_date_format: "%Y.%m.%d_%H.%M.%S".to_string(),
            log_date_format: "%Y-%m-%d %H:%M:%S".to_string(),
            result_date_format: "%d.%m.%Y %H:%M:%S".to_string(),
            min_hours_per_day: 0.0,
            max_hours_per_day: 24.0,
            copy_delay_ms: 1000,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rworktime")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rworktime")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworktime.conf")
    }

    /// Load configuration from `path`, or return defaults if the file does not exist
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write the configuration as YAML, creating the parent folder if needed
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.file_patterns.is_empty() {
            return Err(AppError::Config("file_patterns must not be empty".into()));
        }
        for (field, fmt) in [
            ("folder_date_format", &self.folder_date_format),
            ("log_date_format", &self.log_date_format),
            ("result_date_format", &self.result_date_format),
        ] {
            if !is_valid_format(fmt) {
                return Err(AppError::Config(format!("{field}: invalid format '{fmt}'")));
            }
        }
        if self.min_hours_per_day.partial_cmp(&self.max_hours_per_day) != Some(Ordering::Less) {
            return Err(AppError::Config(format!(
                "min_hours_per_day ({}) must be below max_hours_per_day ({})",
                self.min_hours_per_day, self.max_hours_per_day
            )));
        }
        Ok(())
    }

    pub fn hours_range(&self) -> HoursRange {
        HoursRange::new(self.min_hours_per_day, self.max_hours_per_day)
    }

    pub fn log_file_name(&self) -> String {
        format!("{}.txt", self.log_file_prefix)
    }

    pub fn result_file_name(&self) -> String {
        format!("{}.txt", self.result_file_prefix)
    }
}
