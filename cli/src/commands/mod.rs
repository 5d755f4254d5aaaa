pub mod list;
pub mod render;
pub mod session;

use std::{fs, path::Path};

use anyhow::{Context, Result};
use tractmap::RenderFrame;

/// One-line summary of a frame, for stdout.
pub(crate) fn summary(frame: &RenderFrame) -> String {
    let county = frame.view.selected_county().unwrap_or("none");
    format!(
        "attribute='{}' county={} features={} {}={}",
        frame.display.attribute, county, frame.features.len(), frame.kpi_series, frame.kpi,
    )
}

pub(crate) fn write_frame(frame: &RenderFrame, path: &Path) -> Result<()> {
    let geojson = frame.to_geojson()?;
    let text = serde_json::to_string(&geojson)?;
    fs::write(path, text).with_context(|| format!("[write_frame] Failed to write {}", path.display()))
}
