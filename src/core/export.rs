//! CSV export of listing records

use crate::core::error::StorageError;
use serde::{Deserialize, Serialize};

/// Records that can be written as CSV rows
pub trait Exportable {
    /// Fixed header labels, in column order
    fn csv_headers() -> &'static [&'static str];

    /// One cell per header, already formatted
    fn csv_row(&self) -> Vec<String>;

    /// Download file name
    fn csv_file_name() -> &'static str {
        "export.csv"
    }
}

/// How cells are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CsvMode {
    /// Cells joined with `,` and no escaping.
    ///
    /// A cell containing a comma, quote or newline corrupts the row. This is
    /// the historical export format and stays the default.
    #[default]
    Verbatim,

    /// RFC 4180 quoting
    Quoted,
}

/// Render records as CSV text, header line first
pub fn export_csv<T: Exportable>(records: &[T], mode: CsvMode) -> Result<String, StorageError> {
    match mode {
        CsvMode::Verbatim => Ok(export_verbatim(records)),
        CsvMode::Quoted => export_quoted(records),
    }
}

fn export_verbatim<T: Exportable>(records: &[T]) -> String {
    let mut out = T::csv_headers().join(",");
    out.push('\n');

    for record in records {
        out.push_str(&record.csv_row().join(","));
        out.push('\n');
    }

    out
}

fn export_quoted<T: Exportable>(records: &[T]) -> Result<String, StorageError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let to_storage = |e: csv::Error| StorageError::Unavailable {
        message: format!("csv export failed: {}", e),
    };

    writer.write_record(T::csv_headers()).map_err(to_storage)?;
    for record in records {
        writer.write_record(record.csv_row()).map_err(to_storage)?;
    }

    let bytes = writer.into_inner().map_err(|e| StorageError::Unavailable {
        message: format!("csv export failed: {}", e),
    })?;

    String::from_utf8(bytes).map_err(|e| StorageError::Unavailable {
        message: format!("csv export produced invalid utf-8: {}", e),
    })
}
