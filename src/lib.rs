#![doc = "tractmap public API"]
mod catalog;
mod data;
mod errors;
mod geo;
mod geometry;
mod io;
mod source;
mod view;

#[doc(inline)]
pub use crate::catalog::{Attribute, AttributeCatalog, AttributeSpec, ColorScale, DisplayMeta, TRACT_ID_COLUMN, TooltipFormat};

#[doc(inline)]
pub use crate::data::{AttributeRow, PermitRecord, attribute_rows, load_attribute_data, permits};

#[doc(inline)]
pub use crate::errors::{GeometryNotFoundError, MalformedKeyError, UnknownAttributeError, UnknownCountyError};

#[doc(inline)]
pub use crate::geo::{
    COUNTY_FIPS_WIDTH, County, GeoKey, GeoType, METRO_COUNTIES, TRACT_CODE_WIDTH, TRACT_KEY_WIDTH,
    county_by_fips, find_county, normalize_tract_key, require_county,
};

#[doc(inline)]
pub use crate::geometry::{CountyOutline, GeometryStore, TractGeometry};

#[doc(inline)]
pub use crate::source::{DataManifest, DataSource, DiskSource, MANIFEST_FILE, MemSource};

#[doc(inline)]
pub use crate::view::{
    DEFAULT_CENTER, DEFAULT_ZOOM, Dashboard, MergedFeature, RenderFrame, SelectionEvent, Session, ViewState, join,
};
