//! Typed failures of the pipeline.
//!
//! Functions return `anyhow::Result`; these types travel inside the
//! `anyhow::Error` and can be recovered with `downcast_ref` when a caller
//! needs to tell a configuration error from a data-integrity error.

use thiserror::Error;

/// A raw identifier that cannot be turned into a canonical `GeoKey`.
/// The offending row is dropped; the rest of the dataset still joins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed geographic identifier {raw:?}: {reason}")]
pub struct MalformedKeyError {
    pub raw: String,
    pub reason: &'static str,
}

/// Attribute name not present in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown attribute {0:?}")]
pub struct UnknownAttributeError(pub String);

/// County name not present in the county registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown county {0:?}")]
pub struct UnknownCountyError(pub String);

/// Requested county has no polygon in the outline source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no outline geometry for county {county:?} in {path}")]
pub struct GeometryNotFoundError {
    pub county: String,
    pub path: String,
}
