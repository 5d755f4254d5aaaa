mod county;
mod geo_id;

pub use county::{County, METRO_COUNTIES, county_by_fips, find_county, require_county};
pub use geo_id::{
    COUNTY_FIPS_WIDTH, GeoKey, GeoType, TRACT_CODE_WIDTH, TRACT_KEY_WIDTH, normalize_tract_key,
};
