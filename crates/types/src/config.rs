use std::path::PathBuf;

use crate::error::CoreError;

/// End-to-end pipeline configuration
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PipelineConfig {
    /// Input table location and column selection
    pub input: InputConfig,
    /// Output locations
    pub output: OutputConfig,
    /// Minimum-order search parameters
    #[serde(default)]
    pub stationarity: StationarityConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PipelineConfig {
    /// Validates every section of the configuration.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] describing the first invalid field.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.input.timestamp_column.trim().is_empty() {
            return Err(CoreError::Config(
                "input.timestamp_column is empty".to_string(),
            ));
        }
        if let Some(columns) = &self.input.columns
            && columns.is_empty()
        {
            return Err(CoreError::Config(
                "input.columns must not be an empty list".to_string(),
            ));
        }
        self.stationarity.validate()
    }
}

/// Input table configuration
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct InputConfig {
    /// Parquet file holding the timestamp-indexed table
    pub path: PathBuf,
    /// Name of the timestamp column
    #[serde(default = "default_timestamp_column")]
    pub timestamp_column: String,
    /// Columns to process (`None` = every numeric column)
    #[serde(default)]
    pub columns: Option<Vec<String>>,
}

fn default_timestamp_column() -> String {
    "timestamp".to_string()
}

/// Output configuration
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct OutputConfig {
    /// Delimited `name;value` file receiving the minimum-order table
    pub min_order_path: PathBuf,
    /// Parquet file receiving the stationarized table (skipped when `None`)
    #[serde(default)]
    pub table_path: Option<PathBuf>,
    /// Keep `<name>_orig` copies of transformed columns in the output table
    #[serde(default)]
    pub keep_originals: bool,
}

/// Grid scan strategy for a single column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanMode {
    /// Ascending scan, stop at the first passing order
    #[default]
    EarlyExit,
    /// Evaluate every grid point, then pick the smallest passing order
    FullGrid,
}

/// Minimum-order search parameters
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StationarityConfig {
    /// Weight magnitude below which older lags are dropped
    #[serde(default = "default_weight_threshold")]
    pub weight_threshold: f64,
    /// ADF p-value cut-off
    #[serde(default = "default_significance")]
    pub significance: f64,
    /// Number of equally spaced orders on `[0, 1]`
    #[serde(default = "default_grid_points")]
    pub grid_points: usize,
    /// Fixed augmentation lag of the ADF regression
    #[serde(default = "default_adf_max_lag")]
    pub adf_max_lag: usize,
    /// Grid scan strategy
    #[serde(default)]
    pub scan_mode: ScanMode,
    /// Search columns on the rayon pool
    #[serde(default = "default_true")]
    pub parallel_columns: bool,
}

fn default_weight_threshold() -> f64 {
    1e-4
}

fn default_significance() -> f64 {
    0.05
}

fn default_grid_points() -> usize {
    16
}

fn default_adf_max_lag() -> usize {
    1
}

fn default_true() -> bool {
    true
}

impl Default for StationarityConfig {
    fn default() -> Self {
        Self {
            weight_threshold: default_weight_threshold(),
            significance: default_significance(),
            grid_points: default_grid_points(),
            adf_max_lag: default_adf_max_lag(),
            scan_mode: ScanMode::default(),
            parallel_columns: true,
        }
    }
}

impl StationarityConfig {
    /// Validates parameter ranges.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] when a parameter is out of range.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.weight_threshold.is_nan()
            || self.weight_threshold <= 0.0
            || self.weight_threshold > 1.0
        {
            return Err(CoreError::Config(format!(
                "weight_threshold must be in (0, 1], got {}",
                self.weight_threshold
            )));
        }
        if self.significance.is_nan() || self.significance <= 0.0 || self.significance >= 1.0 {
            return Err(CoreError::Config(format!(
                "significance must be in (0, 1), got {}",
                self.significance
            )));
        }
        if self.grid_points < 2 {
            return Err(CoreError::Config(format!(
                "grid_points must be >= 2, got {}",
                self.grid_points
            )));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct LoggingConfig {
    /// Emit a debug event for every evaluated candidate order
    #[serde(default)]
    pub log_candidates: bool,
}
