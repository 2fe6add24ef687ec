//! Serializers for the two export formats.
//!
//! `to_csv` is fully quoted and round-trips through any standard CSV reader.
//! `to_tsv` deliberately leaves embedded tabs and newlines unescaped; that
//! is the clipboard contract of the original tool, kept as-is rather than
//! silently "fixed".

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use crate::net::types::Connection;

/// File name offered for the CSV download.
pub const CSV_EXPORT_FILE_NAME: &str = "wire_connections.csv";
/// MIME type of the CSV download.
pub const CSV_MIME_TYPE: &str = "text/csv";

/// Render `records` as CSV under a `From,To,Description` header. Every data
/// field is double-quoted with embedded quotes doubled, so commas, quotes,
/// and newlines inside fields survive a round trip.
///
/// Total: an empty slice yields the header-only string. The caller guards
/// against exporting an empty store; this function does not.
#[must_use]
pub fn to_csv(records: &[Connection]) -> String {
    let mut out = String::from("From,To,Description");
    for record in records {
        out.push('\n');
        out.push_str(&csv_quote(&record.from));
        out.push(',');
        out.push_str(&csv_quote(&record.to));
        out.push(',');
        out.push_str(&csv_quote(&record.description));
    }
    out
}

fn csv_quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Render `records` as tab-separated lines: three fields joined by `\t`,
/// rows joined by `\n`, no header, no escaping.
#[must_use]
pub fn to_tsv(records: &[Connection]) -> String {
    records
        .iter()
        .map(|r| format!("{}\t{}\t{}", r.from, r.to, r.description))
        .collect::<Vec<_>>()
        .join("\n")
}
