//! Pipeline entry points.

use std::path::PathBuf;

use fracdiff_data::{load_and_validate, write_min_order_table, write_table_parquet};
use fracdiff_search::{OrderSearch, stationarize_with_orders};
use fracdiff_types::{OrderResolution, PipelineConfig};

use crate::error::PipelineError;

/// Per-column line of the run summary.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ColumnSummary {
    /// Column name
    pub name: String,
    /// Minimum order or failure reason
    #[serde(flatten)]
    pub resolution: OrderResolution,
    /// Filter applications spent on this column
    pub filter_evaluations: usize,
}

/// Written stationarized table.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TableSummary {
    /// Parquet output path
    pub path: PathBuf,
    /// Rows written
    pub rows: usize,
    /// Leading rows dropped
    pub dropped_rows: usize,
    /// Columns written, in order
    pub columns: Vec<String>,
}

/// Result of a pipeline run.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RunSummary {
    /// Rows in the input table
    pub rows: usize,
    /// Per-column results, in input column order
    pub columns: Vec<ColumnSummary>,
    /// Number of resolved columns
    pub resolved: usize,
    /// Number of unresolved columns
    pub unresolved: usize,
    /// Total filter applications
    pub filter_evaluations: usize,
    /// Minimum-order table path
    pub min_order_path: PathBuf,
    /// Stationarized table, when requested
    pub table: Option<TableSummary>,
}

/// Runs the pipeline from a JSON config and returns a JSON summary.
///
/// # Errors
/// Returns [`PipelineError`] for invalid config, data errors or search errors.
pub fn run_pipeline_from_json(config_json: &str) -> Result<String, PipelineError> {
    let config: PipelineConfig = serde_json::from_str(config_json)
        .map_err(|e| PipelineError::ConfigParse(e.to_string()))?;

    config
        .validate()
        .map_err(|e| PipelineError::ConfigValidation(e.to_string()))?;

    let summary = run_pipeline(&config)?;

    serde_json::to_string(&summary).map_err(|e| PipelineError::ResultSerialize(e.to_string()))
}

/// Runs the pipeline for a parsed config.
///
/// # Errors
/// Returns [`PipelineError`] for data errors or search errors.
pub fn run_pipeline(config: &PipelineConfig) -> Result<RunSummary, PipelineError> {
    let table = load_and_validate(
        &config.input.path,
        &config.input.timestamp_column,
        config.input.columns.as_deref(),
    )?;

    let search = OrderSearch::from_config(&config.stationarity)?
        .with_candidate_logging(config.logging.log_candidates);
    let report = search.search_table(&table)?;
    let orders = report.orders();

    write_min_order_table(&config.output.min_order_path, &orders)?;

    let table_summary = match &config.output.table_path {
        Some(path) => {
            let output = stationarize_with_orders(
                &table,
                &orders,
                report.threshold,
                config.output.keep_originals,
            )?;
            write_table_parquet(path, &output.table, &config.input.timestamp_column)?;
            Some(TableSummary {
                path: path.clone(),
                rows: output.table.len(),
                dropped_rows: output.dropped_rows,
                columns: output
                    .table
                    .column_names()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            })
        }
        None => None,
    };

    let columns: Vec<ColumnSummary> = report
        .columns
        .iter()
        .map(|c| ColumnSummary {
            name: c.name.clone(),
            resolution: c.resolution,
            filter_evaluations: c.filter_evaluations,
        })
        .collect();
    let resolved = report.resolved_count();

    tracing::info!(
        "Pipeline finished: {} rows, {}/{} columns resolved, orders written to {}",
        table.len(),
        resolved,
        columns.len(),
        config.output.min_order_path.display()
    );

    Ok(RunSummary {
        rows: table.len(),
        unresolved: columns.len() - resolved,
        resolved,
        filter_evaluations: report.filter_evaluations(),
        columns,
        min_order_path: config.output.min_order_path.clone(),
        table: table_summary,
    })
}
