//! CSV exporter.

use crate::export::{ExportError, ExportMetrics, DEFAULT_BUFFER_SIZE};
use metrics_core::StoreMetricsRecord;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Write a record batch as CSV with a header row.
///
/// Headers are the serialized camelCase field names, so a spreadsheet import
/// lines up with the dashboard contract.
pub fn export_csv<P: AsRef<Path>>(
    records: &[StoreMetricsRecord],
    output_path: P,
) -> Result<ExportMetrics, ExportError> {
    let start_time = Instant::now();
    let output_path = output_path.as_ref();
    let mut metrics = ExportMetrics::default();

    info!(
        "Writing {} records to CSV file '{}'",
        records.len(),
        output_path.display()
    );

    let file = File::create(output_path)?;
    let mut writer = csv::Writer::from_writer(BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file));

    for record in records {
        writer.serialize(record)?;

        metrics.rows_written += 1;
        if metrics.rows_written % 10_000 == 0 {
            debug!("Written {} rows", metrics.rows_written);
        }
    }

    writer.flush().map_err(ExportError::Io)?;
    drop(writer);

    metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
    metrics.duration = start_time.elapsed();

    info!(
        "CSV export complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
        metrics.rows_written,
        metrics.file_size_bytes,
        metrics.duration,
        metrics.rows_per_second()
    );

    Ok(metrics)
}
