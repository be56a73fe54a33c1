use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Dataset export
// ---------------------------------------------------------------------------

/// The chosen file name carries an extension we cannot write.
#[derive(Debug, Error)]
#[error("unsupported export extension: .{extension}")]
pub struct UnsupportedFormat {
    pub extension: String,
}

/// Write `rows` to `path`, dispatching on the file extension.
///
/// Supported formats:
/// * `.csv`  – header row from the record's field names
/// * `.json` – pretty-printed array of records
pub fn export_records<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => write_csv(path, rows),
        "json" => write_json(path, rows),
        other => Err(UnsupportedFormat {
            extension: other.to_string(),
        }
        .into()),
    }
}

fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    for row in rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV file")?;
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let file = File::create(path).context("creating JSON file")?;
    serde_json::to_writer_pretty(BufWriter::new(file), rows).context("writing JSON")?;
    Ok(())
}
