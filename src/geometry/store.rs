use std::{collections::HashMap, sync::{Arc, OnceLock, PoisonError, RwLock}};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::{
    errors::GeometryNotFoundError,
    geo::{GeoKey, GeoType, county_by_fips},
    io::geojson::read_polygon_features,
    source::DataSource,
};
use super::{CountyOutline, TractGeometry};

/// Loads tract and county-outline geometry once and hands out shared views.
///
/// Tracts are loaded on first use and kept for the life of the store. County
/// outlines are memoized per requested county name; entries are never evicted
/// or replaced, so a cached `Arc` stays valid for every later caller.
pub struct GeometryStore {
    source: Arc<dyn DataSource>,
    tracts_path: String,
    counties_path: String,
    tracts: OnceLock<Arc<[TractGeometry]>>,
    outlines: RwLock<HashMap<String, Arc<CountyOutline>>>,
}

impl GeometryStore {
    pub fn new(source: Arc<dyn DataSource>, tracts_path: impl Into<String>, counties_path: impl Into<String>) -> Self {
        Self {
            source,
            tracts_path: tracts_path.into(),
            counties_path: counties_path.into(),
            tracts: OnceLock::new(),
            outlines: RwLock::new(HashMap::new()),
        }
    }

    /// All tract polygons, read from the source on the first call only.
    pub fn load_tracts(&self) -> Result<Arc<[TractGeometry]>> {
        if let Some(tracts) = self.tracts.get() {
            debug!(count = tracts.len(), "tract geometry cache hit");
            return Ok(Arc::clone(tracts));
        }

        let loaded = self.read_tracts()?;
        info!(count = loaded.len(), path = %self.tracts_path, "loaded tract geometry");
        Ok(Arc::clone(self.tracts.get_or_init(|| loaded)))
    }

    /// Outline of `county`, read and filtered from the source the first time
    /// this county is requested. Names are matched ignoring case and
    /// surrounding whitespace, and share one cache entry.
    pub fn load_county_outline(&self, county: &str) -> Result<Arc<CountyOutline>> {
        let key = county.trim().to_ascii_lowercase();
        if let Some(outline) = self.outlines.read().unwrap_or_else(PoisonError::into_inner).get(&key) {
            debug!(county, "county outline cache hit");
            return Ok(Arc::clone(outline));
        }

        let outline = Arc::new(self.read_county_outline(county)?);
        info!(county, fips = %outline.fips, "loaded county outline");

        let mut outlines = self.outlines.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(outlines.entry(key).or_insert(outline)))
    }

    /// Number of county outlines currently cached.
    pub fn cached_outlines(&self) -> usize {
        self.outlines.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[inline] pub fn tracts_loaded(&self) -> bool { self.tracts.get().is_some() }

    fn read_tracts(&self) -> Result<Arc<[TractGeometry]>> {
        let bytes = self.source.get(&self.tracts_path)
            .with_context(|| format!("[GeometryStore.load_tracts] Failed to read {}", self.tracts_path))?;
        let features = read_polygon_features(&bytes)
            .with_context(|| format!("[GeometryStore.load_tracts] Invalid tract geometry in {}", self.tracts_path))?;

        let mut tracts = Vec::with_capacity(features.len());
        let mut skipped = 0usize;
        for feature in features {
            let Some(raw) = feature.property_str("GEOID") else {
                skipped += 1;
                debug!(path = %self.tracts_path, "skipping tract feature without GEOID");
                continue;
            };
            let geo_key = match GeoKey::parse(GeoType::Tract, &raw) {
                Ok(geo_key) => geo_key,
                Err(err) => {
                    skipped += 1;
                    debug!(%err, "skipping tract feature");
                    continue;
                }
            };
            let county = feature.property_str("county")
                .map(Arc::from)
                .or_else(|| county_by_fips(geo_key.county().id()).map(|c| Arc::from(c.name)));

            tracts.push(TractGeometry { geo_key, county, geometry: Arc::new(feature.geometry) });
        }

        if skipped > 0 {
            warn!(path = %self.tracts_path, skipped, kept = tracts.len(), "skipped tract features without an 11-digit GEOID");
        }
        Ok(tracts.into())
    }

    fn read_county_outline(&self, county: &str) -> Result<CountyOutline> {
        let bytes = self.source.get(&self.counties_path)
            .with_context(|| format!("[GeometryStore.load_county_outline] Failed to read {}", self.counties_path))?;
        let features = read_polygon_features(&bytes)
            .with_context(|| format!("[GeometryStore.load_county_outline] Invalid county geometry in {}", self.counties_path))?;

        let wanted = county.trim();
        let feature = features.into_iter()
            .find(|feature| feature.property_str("NAME").is_some_and(|name| name.eq_ignore_ascii_case(wanted)))
            .ok_or_else(|| GeometryNotFoundError {
                county: county.to_string(),
                path: self.counties_path.clone(),
            })?;

        let raw_fips = feature.property_str("GEOID")
            .with_context(|| format!("[GeometryStore.load_county_outline] County {county:?} has no GEOID"))?;
        let fips = GeoKey::parse(GeoType::County, &raw_fips)
            .with_context(|| format!("[GeometryStore.load_county_outline] County {county:?} has a malformed GEOID"))?;
        let name = feature.property_str("NAME").unwrap_or_else(|| wanted.to_string());

        Ok(CountyOutline { name: Arc::from(name), fips, geometry: Arc::new(feature.geometry) })
    }
}
