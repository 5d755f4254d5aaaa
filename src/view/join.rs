use std::sync::Arc;

use ahash::AHashMap;
use geo::MultiPolygon;

use crate::{data::AttributeRow, geo::GeoKey, geometry::TractGeometry};

/// A tract ready to be drawn: geometry, value, tooltip and county.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedFeature {
    pub geo_key: GeoKey,
    pub geometry: Arc<MultiPolygon<f64>>,
    pub value: f64,
    pub tooltip: String,
    pub county_name: Arc<str>,
}

/// Inner join of tract geometry and attribute rows on `GeoKey`.
///
/// A key present on only one side is dropped, as is a tract for which
/// `county_of` has no county. The result holds at most one feature per key,
/// sorted by key; if a key repeats, the first tract and the first row win.
pub fn join<F>(tracts: &[TractGeometry], rows: &[AttributeRow], county_of: F) -> Vec<MergedFeature>
where
    F: Fn(&GeoKey) -> Option<Arc<str>>,
{
    let mut by_key: AHashMap<&GeoKey, &AttributeRow> = AHashMap::with_capacity(rows.len());
    for row in rows {
        by_key.entry(&row.geo_key).or_insert(row);
    }

    let mut features: Vec<MergedFeature> = tracts.iter()
        .filter_map(|tract| {
            let row = by_key.get(&tract.geo_key)?;
            let county_name = county_of(&tract.geo_key)?;
            Some(MergedFeature {
                geo_key: tract.geo_key.clone(),
                geometry: Arc::clone(&tract.geometry),
                value: row.value,
                tooltip: row.tooltip.clone(),
                county_name,
            })
        })
        .collect();

    features.sort_by(|a, b| a.geo_key.cmp(&b.geo_key));
    features.dedup_by(|later, earlier| later.geo_key == earlier.geo_key);
    features
}
