//! Dashboard Configuration
//! Optional JSON settings file; every field has a default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("slider_step_kg must be positive, got {0}")]
    InvalidStep(f64),
    #[error("axis_margin_kg must be finite and non-negative, got {0}")]
    InvalidMargin(f64),
}

/// Source column names for each record field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub site: String,
    pub payload_mass: String,
    pub outcome: String,
    pub booster_category: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            site: "Launch Site".to_string(),
            payload_mass: "Payload Mass (kg)".to_string(),
            outcome: "class".to_string(),
            booster_category: "Booster Version Category".to_string(),
        }
    }
}

/// Dashboard settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// CSV loaded at startup.
    pub data_path: PathBuf,
    pub columns: ColumnMapping,
    /// Scatter x-axis padding on each side of the selected range.
    pub axis_margin_kg: f64,
    /// Payload slider step.
    pub slider_step_kg: f64,
    /// Where PNG exports are written. Defaults to the working directory.
    pub export_dir: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("spacex_launch_dash.csv"),
            columns: ColumnMapping::default(),
            axis_margin_kg: crate::stats::AXIS_MARGIN_KG,
            slider_step_kg: 1000.0,
            export_dir: None,
        }
    }
}

impl DashboardConfig {
    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.slider_step_kg.is_finite() && self.slider_step_kg > 0.0) {
            return Err(ConfigError::InvalidStep(self.slider_step_kg));
        }
        if !(self.axis_margin_kg.is_finite() && self.axis_margin_kg >= 0.0) {
            return Err(ConfigError::InvalidMargin(self.axis_margin_kg));
        }
        Ok(())
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
