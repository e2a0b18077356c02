use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde_json::{Map as JsonMap, Value as JsonValue};

use super::frame::FeatureFrame;

// ---------------------------------------------------------------------------
// Arrow conversion
// ---------------------------------------------------------------------------

/// Convert a frame into an Arrow [`RecordBatch`] of Float64 columns.
pub fn to_record_batch(frame: &FeatureFrame) -> Result<RecordBatch, ArrowError> {
    let fields: Vec<Field> = frame
        .columns()
        .iter()
        .map(|label| Field::new(label, DataType::Float64, false))
        .collect();

    let arrays: Vec<ArrayRef> = (0..frame.columns().len())
        .map(|col| {
            let values = frame.rows().iter().map(|row| row[col]);
            Arc::new(Float64Array::from_iter_values(values)) as ArrayRef
        })
        .collect();

    RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)
}

// ---------------------------------------------------------------------------
// CSV writer
// ---------------------------------------------------------------------------

/// Write the frame as CSV: a header row of feature names, then one record
/// per row.
pub fn write_csv<W: Write>(frame: &FeatureFrame, writer: W) -> Result<()> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record(frame.columns()).context("writing CSV header")?;

    for (row_no, row) in frame.rows().iter().enumerate() {
        w.write_record(row.iter().map(|v| v.to_string()))
            .with_context(|| format!("writing CSV row {row_no}"))?;
    }
    w.flush().context("flushing CSV output")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// JSON writer
// ---------------------------------------------------------------------------

/// Write the frame as records-oriented JSON, the shape Pandas produces with
/// `df.to_json(orient='records')`:
///
/// ```json
/// [
///   { "alpha Kamlet-Taft": 1.17, "SPP Katalan": 0.96 },
///   ...
/// ]
/// ```
pub fn write_json<W: Write>(frame: &FeatureFrame, writer: W) -> Result<()> {
    let records: Vec<JsonMap<String, JsonValue>> = frame
        .rows()
        .iter()
        .map(|row| {
            frame
                .columns()
                .iter()
                .zip(row)
                .map(|(label, value)| (label.clone(), JsonValue::from(*value)))
                .collect()
        })
        .collect();

    serde_json::to_writer(writer, &records).context("serializing JSON records")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Parquet writer
// ---------------------------------------------------------------------------

/// Write the frame to a Parquet file readable by both Pandas
/// (`pd.read_parquet`) and Polars (`pl.read_parquet`).
pub fn write_parquet(frame: &FeatureFrame, path: &Path) -> Result<()> {
    let batch = to_record_batch(frame).context("building record batch")?;

    let file = std::fs::File::create(path)
        .with_context(|| format!("creating parquet file {}", path.display()))?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)
        .context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}
