//! Line-delimited JSON exporter.

use crate::export::{ExportError, ExportMetrics, DEFAULT_BUFFER_SIZE};
use metrics_core::StoreMetricsRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Write a record batch as one JSON object per line.
///
/// Field names in the output are the camelCase identifiers the dashboard
/// frontend consumes.
pub fn export_jsonl<P: AsRef<Path>>(
    records: &[StoreMetricsRecord],
    output_path: P,
) -> Result<ExportMetrics, ExportError> {
    let start_time = Instant::now();
    let output_path = output_path.as_ref();
    let mut metrics = ExportMetrics::default();

    info!(
        "Writing {} records to JSONL file '{}'",
        records.len(),
        output_path.display()
    );

    let file = File::create(output_path)?;
    let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);

    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writeln!(writer)?;

        metrics.rows_written += 1;
        if metrics.rows_written % 10_000 == 0 {
            debug!("Written {} rows", metrics.rows_written);
        }
    }

    writer.flush()?;
    drop(writer);

    metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
    metrics.duration = start_time.elapsed();

    info!(
        "JSONL export complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
        metrics.rows_written,
        metrics.file_size_bytes,
        metrics.duration,
        metrics.rows_per_second()
    );

    Ok(metrics)
}
