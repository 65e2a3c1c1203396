//! Record batch exporters.
//!
//! A generated batch is only useful to a consumer once it leaves the process;
//! the exporters write it as line-delimited JSON or CSV and report throughput
//! metrics.

pub mod csv;
pub mod jsonl;

use std::time::Duration;

/// Default buffer size for export writers.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Errors that can occur while exporting a batch.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] ::csv::Error),
}

/// Metrics from an export operation.
#[derive(Debug, Clone, Default)]
pub struct ExportMetrics {
    /// Number of rows written.
    pub rows_written: u64,
    /// Total time taken.
    pub duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl ExportMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.duration.as_secs_f64()
        } else {
            0.0
        }
    }
}
