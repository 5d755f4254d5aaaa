use std::{path::Path, sync::Arc};

use ahash::AHashMap;
use anyhow::{Result, bail};
use tracing::debug;

use crate::{
    catalog::AttributeCatalog,
    data::{load_attribute_data, permits},
    geo::{GeoKey, county_by_fips},
    geometry::GeometryStore,
    source::{DataManifest, DataSource, DiskSource},
};
use super::{frame::RenderFrame, join::join, state::ViewState};

/// Process-wide pipeline context: the data source, its manifest and the
/// geometry cache. Sessions borrow it; it holds no per-session state.
pub struct Dashboard {
    source: Arc<dyn DataSource>,
    manifest: DataManifest,
    geometry: GeometryStore,
    catalog: &'static AttributeCatalog,
}

impl Dashboard {
    /// Open a data directory on disk.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            bail!("[Dashboard.open] Data directory does not exist: {}", path.display());
        }
        Self::from_source(Arc::new(DiskSource::new(path)))
    }

    pub fn from_source(source: Arc<dyn DataSource>) -> Result<Self> {
        let manifest = DataManifest::from_source(source.as_ref())?;
        let geometry = GeometryStore::new(Arc::clone(&source), manifest.tracts.clone(), manifest.counties.clone());
        Ok(Self { source, manifest, geometry, catalog: AttributeCatalog::global() })
    }

    #[inline] pub fn manifest(&self) -> &DataManifest { &self.manifest }

    #[inline] pub fn geometry(&self) -> &GeometryStore { &self.geometry }

    #[inline] pub fn catalog(&self) -> &'static AttributeCatalog { self.catalog }

    /// The view state a new session starts from.
    pub fn initial_view(&self) -> ViewState {
        let [lat, lon] = self.manifest.center;
        ViewState::new((lat, lon), self.manifest.zoom)
    }

    /// Run the full pipeline for one view state and attribute.
    ///
    /// Reads `view` only; the caller applies selection events first.
    pub fn render(&self, view: &ViewState, attribute: &str) -> Result<RenderFrame> {
        let spec = self.catalog.lookup(attribute)?;
        let tracts = self.geometry.load_tracts()?;
        let rows = load_attribute_data(self.source.as_ref(), spec)?;

        // county names from the registry, else from the geometry source
        let named: AHashMap<&GeoKey, &Arc<str>> = tracts.iter()
            .filter_map(|tract| tract.county.as_ref().map(|county| (&tract.geo_key, county)))
            .collect();
        let county_of = |key: &GeoKey| {
            county_by_fips(key.county().id())
                .map(|county| Arc::from(county.name))
                .or_else(|| named.get(key).map(|&county| Arc::clone(county)))
        };
        let features = join(&tracts, &rows, county_of);
        debug!(tracts = tracts.len(), rows = rows.len(), features = features.len(), "joined attribute data");

        let outline = view.selected_county()
            .map(|county| self.geometry.load_county_outline(county))
            .transpose()?;

        let county_permits = match &outline {
            Some(outline) => {
                let records = permits::load_permits(self.source.as_ref(), &self.manifest.permits)?;
                permits::filter(&records, outline.fips.id())
            }
            None => Vec::new(),
        };
        let kpi = permits::trailing_kpi(&county_permits, &self.manifest.kpi_series, self.manifest.kpi_window_months);

        Ok(RenderFrame {
            display: spec.display(),
            features,
            view: view.get(),
            outline,
            permits: county_permits,
            kpi_series: self.manifest.kpi_series.clone(),
            kpi,
        })
    }
}
