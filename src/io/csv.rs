use std::{io::Cursor, sync::Arc};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReadOptions, CsvReader, DataType, Field, Schema, SchemaRef}};

/// Read a CSV from bytes, forcing `string_columns` to be read as strings so
/// identifiers keep their leading and trailing zeros.
pub(crate) fn read_csv_bytes(bytes: &[u8], string_columns: &[&str]) -> Result<DataFrame> {
    let options = CsvReadOptions::default()
        .with_has_header(true)
        .with_schema_overwrite(Some(string_schema(string_columns)));

    CsvReader::new(Cursor::new(bytes))
        .with_options(options)
        .finish()
        .context("[io::csv] Failed to read CSV from bytes")
}

fn string_schema(columns: &[&str]) -> SchemaRef {
    Arc::new(Schema::from_iter(
        columns.iter().map(|&name| Field::new(name.into(), DataType::String)),
    ))
}
