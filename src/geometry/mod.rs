mod store;

use std::sync::Arc;

use geo::{BoundingRect, MultiPolygon};

use crate::geo::GeoKey;

pub use store::GeometryStore;

/// Polygon of one tract.
#[derive(Debug, Clone)]
pub struct TractGeometry {
    pub geo_key: GeoKey,
    /// County name carried by the geometry source, if any.
    pub county: Option<Arc<str>>,
    pub geometry: Arc<MultiPolygon<f64>>,
}

/// Outline of one county, drawn over the choropleth.
#[derive(Debug, Clone)]
pub struct CountyOutline {
    pub name: Arc<str>,
    pub fips: GeoKey,
    pub geometry: Arc<MultiPolygon<f64>>,
}

impl CountyOutline {
    /// `[min_lon, min_lat, max_lon, max_lat]`, or `None` for an empty outline.
    pub fn bounds(&self) -> Option<[f64; 4]> {
        self.geometry.bounding_rect()
            .map(|rect| [rect.min().x, rect.min().y, rect.max().x, rect.max().y])
    }
}
