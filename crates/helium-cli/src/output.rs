// Rust guideline compliant 2026-10-14

//! Output formatting module for the Helium CLI.
//!
//! Records are rendered through a [`FieldMap`] in one of three formats:
//! tabular (human-readable table), CSV with a header row, or a JSON array of
//! objects keyed by column header.

use crate::context::OutputContext;
use crate::fields::FieldMap;
use helium_core::{Error, ErrorCode, OutputFormat, Record};
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::Write;
use tabled::{builder::Builder, settings::Style};

/// Writes `records` through `map` in the context's format.
///
/// Nothing is written when there are no records or no columns.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn tabulate(
    records: &[Record],
    map: &FieldMap,
    ctx: &OutputContext,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    if records.is_empty() || map.is_empty() {
        return Ok(());
    }
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| map.iter().map(|column| column.value(record, ctx)).collect())
        .collect();

    match ctx.format {
        OutputFormat::Tabular => write_tabular(map, &rows, out)?,
        OutputFormat::Csv => write_csv(map, &rows, out)?,
        OutputFormat::Json => write_json(map, &rows, out)?,
    }
    Ok(())
}

fn write_tabular(map: &FieldMap, rows: &[Vec<String>], out: &mut dyn Write) -> anyhow::Result<()> {
    let mut builder = Builder::default();
    builder.push_record(map.iter().map(|column| column.header()));
    for row in rows {
        builder.push_record(row.iter().map(String::as_str));
    }

    let mut table = builder.build();
    table.with(Style::modern());
    writeln!(out, "{}", table)?;
    Ok(())
}

fn write_csv(map: &FieldMap, rows: &[Vec<String>], out: &mut dyn Write) -> anyhow::Result<()> {
    let header: Vec<String> = map.iter().map(|column| csv_field(column.header())).collect();
    writeln!(out, "{}", header.join(","))?;
    for row in rows {
        let fields: Vec<String> = row.iter().map(|value| csv_field(value)).collect();
        writeln!(out, "{}", fields.join(","))?;
    }
    Ok(())
}

fn write_json(map: &FieldMap, rows: &[Vec<String>], out: &mut dyn Write) -> anyhow::Result<()> {
    let entries: Vec<Value> = rows
        .iter()
        .map(|row| {
            let object: Map<String, Value> = map
                .iter()
                .zip(row)
                .map(|(column, value)| (column.header().to_string(), Value::String(value.clone())))
                .collect();
            Value::Object(object)
        })
        .collect();
    writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
    Ok(())
}

/// Quotes a CSV field when it contains a delimiter, quote or line break.
pub fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Sorts records by the rendered value of a column.
///
/// # Arguments
///
/// * `records` - Records to sort in place
/// * `map` - Field map the column is looked up in
/// * `column` - Column header, matched case-insensitively
/// * `reverse` - Whether to reverse the order
/// * `ctx` - Output context used to render the column
///
/// # Errors
///
/// Returns `Error::InvalidInput` if the column is not part of the map.
pub fn sort_records(
    records: &mut [Record],
    map: &FieldMap,
    column: &str,
    reverse: bool,
    ctx: &OutputContext,
) -> helium_core::Result<()> {
    let column = map
        .iter()
        .find(|c| c.header().eq_ignore_ascii_case(column))
        .ok_or_else(|| {
            let choices: Vec<&str> = map.iter().map(|c| c.header()).collect();
            Error::InvalidInput(format!(
                "unknown sort column '{}' (choose from {})",
                column,
                choices.join(", ")
            ))
        })?;
    records.sort_by_cached_key(|record| column.value(record, ctx));
    if reverse {
        records.reverse();
    }
    Ok(())
}

/// Structured error output used with `--format json`.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Stable error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorEnvelope {
    /// Creates an envelope from any error, using the core error code when
    /// the root cause is a Helium error.
    #[must_use]
    pub fn from_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<Error>() {
            Some(core) => Self {
                code: core.code(),
                message: format!("{:#}", error),
                details: core.details(),
            },
            None => Self {
                code: ErrorCode::Unknown,
                message: format!("{:#}", error),
                details: None,
            },
        }
    }
}

/// Formats an error for display in the given format.
///
/// Ambiguous references get a hint telling the user how to narrow them.
pub fn format_error(error: &anyhow::Error, format: OutputFormat) -> String {
    if format == OutputFormat::Json {
        let envelope = ErrorEnvelope::from_error(error);
        return serde_json::to_string(&envelope)
            .unwrap_or_else(|_| serde_json::json!({ "error": error.to_string() }).to_string());
    }

    let mut message = format!("{:#}", error);
    if let Some(Error::AmbiguousReference { .. }) = error.downcast_ref::<Error>() {
        message.push_str("\nUse more characters or the full id to select one resource.");
    }
    message
}
