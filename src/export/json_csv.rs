// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::io;

/// Pretty-printed JSON bytes.
pub(crate) fn render_json<T: Serialize + ?Sized>(value: &T) -> AppResult<Vec<u8>> {
    serde_json::to_vec_pretty(value)
        .map_err(|e| AppError::from(io::Error::other(format!("JSON serialization error: {e}"))))
}

/// CSV bytes; the header row comes from the serde field names.
pub(crate) fn render_csv<T: Serialize>(rows: &[T], headers: &[&str]) -> AppResult<Vec<u8>> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(!rows.is_empty())
        .from_writer(Vec::new());

    // an empty data set still gets its header line
    if rows.is_empty() {
        wtr.write_record(headers)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    for item in rows {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))
}
