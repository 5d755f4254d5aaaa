use std::{fmt, sync::Arc};

use serde::{Serialize, Serializer};

use crate::errors::MalformedKeyError;

/// Width of a county FIPS code (2 state digits + 3 county digits).
pub const COUNTY_FIPS_WIDTH: usize = 5;

/// Width of the tract code inside a GEOID, per the Census GEOID schema.
pub const TRACT_CODE_WIDTH: usize = 6;

/// Width of a full tract GEOID.
pub const TRACT_KEY_WIDTH: usize = COUNTY_FIPS_WIDTH + TRACT_CODE_WIDTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeoType {
    County,     // SSCCC
    Tract,      // SSCCCTTTTTT
}

impl GeoType {
    pub fn to_str(&self) -> &'static str {
        match self {
            GeoType::County => "county",
            GeoType::Tract => "tract",
        }
    }

    /// Number of digits in a canonical key of this type.
    pub fn width(&self) -> usize {
        match self {
            GeoType::County => COUNTY_FIPS_WIDTH,
            GeoType::Tract => TRACT_KEY_WIDTH,
        }
    }
}

/// Canonical join key for a county or tract.
/// Fixed-width, zero-padded digits; cloning shares the underlying text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeoKey {
    ty: GeoType,
    id: Arc<str>, // e.g., "47037" for county, "47037010102" for tract
}

impl GeoKey {
    /// Validate an identifier that is already in canonical form.
    pub fn parse(ty: GeoType, raw: &str) -> Result<Self, MalformedKeyError> {
        let id = raw.trim();
        if !is_digits(id) {
            return Err(malformed(raw, "identifier is not numeric"));
        }
        if id.len() != ty.width() {
            return Err(malformed(raw, "identifier has the wrong width"));
        }
        Ok(Self { ty, id: Arc::from(id) })
    }

    #[inline] pub fn ty(&self) -> GeoType { self.ty }

    #[inline] pub fn id(&self) -> &str { &self.id }

    /// The county this key belongs to (itself, for county keys).
    pub fn county(&self) -> GeoKey {
        match self.ty {
            GeoType::County => self.clone(),
            GeoType::Tract => GeoKey {
                ty: GeoType::County,
                id: Arc::from(&self.id[..COUNTY_FIPS_WIDTH]),
            },
        }
    }
}

impl fmt::Display for GeoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.id) }
}

impl Serialize for GeoKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.id)
    }
}

/// Canonicalize a raw tract identifier such as `"47037.0102"`.
///
/// The whole-number part is the county FIPS code and the fractional part is
/// the tract code. Each side is left-padded with zeros to its fixed width, so
/// `"47037.0102"` becomes `"47037000102"` and `"1001.0201"` becomes
/// `"01001000201"`.
pub fn normalize_tract_key(raw: &str) -> Result<GeoKey, MalformedKeyError> {
    let trimmed = raw.trim();
    let (prefix, suffix) = trimmed.split_once('.')
        .ok_or_else(|| malformed(raw, "missing '.' between county and tract code"))?;

    if !is_digits(prefix) {
        return Err(malformed(raw, "county prefix is not numeric"));
    }
    if !is_digits(suffix) {
        return Err(malformed(raw, "tract suffix is not numeric"));
    }
    if prefix.len() > COUNTY_FIPS_WIDTH {
        return Err(malformed(raw, "county prefix is wider than a FIPS code"));
    }
    if suffix.len() > TRACT_CODE_WIDTH {
        return Err(malformed(raw, "tract suffix is wider than a tract code"));
    }

    let id = format!(
        "{prefix:0>cw$}{suffix:0>tw$}",
        cw = COUNTY_FIPS_WIDTH,
        tw = TRACT_CODE_WIDTH,
    );
    Ok(GeoKey { ty: GeoType::Tract, id: Arc::from(id) })
}

fn is_digits(s: &str) -> bool { !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) }

fn malformed(raw: &str, reason: &'static str) -> MalformedKeyError {
    MalformedKeyError { raw: raw.to_string(), reason }
}
