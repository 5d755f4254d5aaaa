use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use super::DataSource;

pub const MANIFEST_FILE: &str = "manifest.json";

/// Layout and defaults of a dashboard data directory, read from `manifest.json`.
/// Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataManifest {
    /// Tract polygons (GeoJSON, `GEOID` + `county` properties).
    pub tracts: String,
    /// County outlines (GeoJSON, `NAME` + `GEOID` properties).
    pub counties: String,
    /// Building permit series (CSV).
    pub permits: String,
    /// Initial map center as `[lat, lon]`.
    pub center: [f64; 2],
    pub zoom: f64,
    /// Permit series summed by the KPI.
    pub kpi_series: String,
    /// Length of the KPI's trailing window, in months.
    pub kpi_window_months: u32,
}

impl Default for DataManifest {
    fn default() -> Self {
        Self {
            tracts: "geometry/tracts.geojson".into(),
            counties: "geometry/counties.geojson".into(),
            permits: "permits/permits.csv".into(),
            center: [36.1627, -86.7816], // Nashville
            zoom: 8.0,
            kpi_series: "Total Units".into(),
            kpi_window_months: 12,
        }
    }
}

impl DataManifest {
    /// Read the manifest from `src`, or fall back to defaults when it has none.
    pub fn from_source(src: &dyn DataSource) -> Result<Self> {
        if !src.has(MANIFEST_FILE) {
            return Ok(Self::default());
        }
        let bytes = src.get(MANIFEST_FILE)?;
        let manifest: DataManifest = serde_json::from_slice(&bytes)
            .context("[source::manifest] Failed to parse manifest.json")?;
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> Result<()> {
        let [lat, lon] = self.center;
        ensure!((-90.0..=90.0).contains(&lat), "[source::manifest] center latitude {lat} out of range");
        ensure!((-180.0..=180.0).contains(&lon), "[source::manifest] center longitude {lon} out of range");
        ensure!(self.zoom.is_finite() && self.zoom >= 0.0, "[source::manifest] zoom must be a non-negative number");
        ensure!(self.kpi_window_months > 0, "[source::manifest] kpi_window_months must be positive");
        Ok(())
    }
}
