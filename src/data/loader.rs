use anyhow::{Context, Result};
use polars::{frame::DataFrame, prelude::DataType};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    catalog::AttributeSpec,
    geo::{GeoKey, normalize_tract_key},
    io::csv::read_csv_bytes,
    source::DataSource,
};

/// One tract's value for the selected attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeRow {
    pub geo_key: GeoKey,
    pub value: f64,
    pub tooltip: String,
}

/// Read the table behind `spec` and turn it into normalized, formatted rows.
///
/// Not cached: attribute selection changes on most interactions. The function
/// has no side effects besides logging, so a cache keyed by attribute can be
/// layered on top without changing callers.
pub fn load_attribute_data(source: &dyn DataSource, spec: &AttributeSpec) -> Result<Vec<AttributeRow>> {
    let bytes = source.get(spec.source)
        .with_context(|| format!("[data::load_attribute_data] Failed to read '{}' for {:?}", spec.source, spec.name))?;
    let df = read_csv_bytes(&bytes, &[spec.id_column])
        .with_context(|| format!("[data::load_attribute_data] Invalid attribute table '{}'", spec.source))?;

    let rows = attribute_rows(&df, spec)?;
    info!(attribute = spec.name, rows = rows.len(), "loaded attribute data");
    Ok(rows)
}

/// Normalize keys and format tooltips for an already-read attribute table.
/// Rows with a malformed identifier or a null or non-finite value are dropped.
pub fn attribute_rows(df: &DataFrame, spec: &AttributeSpec) -> Result<Vec<AttributeRow>> {
    let ids = df.column(spec.id_column)
        .with_context(|| format!("[data::attribute_rows] '{}' has no identifier column '{}'", spec.source, spec.id_column))?
        .cast(&DataType::String)?;
    let values = df.column(spec.value_column)
        .with_context(|| format!("[data::attribute_rows] '{}' has no value column '{}'", spec.source, spec.value_column))?
        .cast(&DataType::Float64)
        .with_context(|| format!("[data::attribute_rows] Value column '{}' is not numeric", spec.value_column))?;

    let mut rows = Vec::with_capacity(df.height());
    let (mut malformed, mut missing) = (0usize, 0usize);

    for (raw, value) in ids.str()?.into_iter().zip(values.f64()?.into_iter()) {
        // NaN and infinities count as missing values
        let (Some(raw), Some(value)) = (raw, value.filter(|v| v.is_finite())) else {
            missing += 1;
            continue;
        };
        match normalize_tract_key(raw) {
            Ok(geo_key) => rows.push(AttributeRow { geo_key, value, tooltip: spec.tooltip.apply(value) }),
            Err(err) => {
                malformed += 1;
                debug!(%err, attribute = spec.name, "dropping attribute row");
            }
        }
    }

    if malformed + missing > 0 {
        warn!(attribute = spec.name, malformed, missing, kept = rows.len(), "dropped attribute rows");
    }
    Ok(rows)
}
