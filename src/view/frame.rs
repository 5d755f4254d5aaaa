use std::sync::Arc;

use anyhow::Result;
use serde_json::{Map, Value, json};

use crate::{
    catalog::DisplayMeta,
    data::PermitRecord,
    geometry::CountyOutline,
    io::geojson::multipolygon_to_geojson,
};
use super::{join::MergedFeature, state::ViewState};

/// Everything one rerun hands to the renderer. The renderer reads it; nothing
/// in here is shared mutably with the pipeline.
#[derive(Debug, Clone)]
pub struct RenderFrame {
    pub display: DisplayMeta,
    pub features: Vec<MergedFeature>,
    pub view: ViewState,
    /// Outline of the selected county, if one is selected.
    pub outline: Option<Arc<CountyOutline>>,
    /// Permit series of the selected county.
    pub permits: Vec<PermitRecord>,
    pub kpi_series: String,
    pub kpi: i64,
}

impl RenderFrame {
    /// Export as a GeoJSON FeatureCollection of the merged tracts, with the
    /// view state, display metadata, outline and permit panel as foreign members.
    pub fn to_geojson(&self) -> Result<Value> {
        let features: Vec<Value> = self.features.iter()
            .map(|feature| {
                let mut properties = Map::new();
                properties.insert("geo_id".into(), json!(feature.geo_key.id()));
                properties.insert("value".into(), json!(feature.value));
                properties.insert("tooltip".into(), json!(feature.tooltip));
                properties.insert("county".into(), json!(&*feature.county_name));

                json!({
                    "type": "Feature",
                    "id": feature.geo_key.id(),
                    "geometry": multipolygon_to_geojson(&feature.geometry),
                    "properties": properties,
                })
            })
            .collect();

        let outline = match &self.outline {
            Some(outline) => json!({
                "name": &*outline.name,
                "fips": outline.fips.id(),
                "bounds": outline.bounds(),
                "geometry": multipolygon_to_geojson(&outline.geometry),
            }),
            None => Value::Null,
        };

        Ok(json!({
            "type": "FeatureCollection",
            "features": features,
            "view": serde_json::to_value(&self.view)?,
            "display": serde_json::to_value(&self.display)?,
            "outline": outline,
            "permits": serde_json::to_value(&self.permits)?,
            "kpi": { "series": self.kpi_series, "value": self.kpi },
        }))
    }
}
