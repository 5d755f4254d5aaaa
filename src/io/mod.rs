//! Format-specific reading and writing.
//!
//! - `csv` - attribute tables and the permit series, read with Polars
//! - `geojson` - tract and county polygons in, render frames out

pub(crate) mod csv;
pub(crate) mod geojson;
