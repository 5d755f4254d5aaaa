use anyhow::{Context, Result, anyhow, bail};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::{Map, Value, json};
use tracing::warn;

/// A polygon feature with its raw property bag.
#[derive(Debug, Clone)]
pub(crate) struct PolygonFeature {
    pub properties: Map<String, Value>,
    pub geometry: MultiPolygon<f64>,
}

impl PolygonFeature {
    /// String value of a property; integer properties are rendered as text.
    pub(crate) fn property_str(&self, key: &str) -> Option<String> {
        match self.properties.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) if n.is_u64() || n.is_i64() => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Read every `Polygon`/`MultiPolygon` feature of a GeoJSON FeatureCollection.
/// Features with other geometry types are skipped.
pub(crate) fn read_polygon_features(bytes: &[u8]) -> Result<Vec<PolygonFeature>> {
    let value: Value = serde_json::from_slice(bytes)
        .context("[io::geojson] Failed to parse GeoJSON bytes")?;
    let features = value["features"].as_array()
        .ok_or_else(|| anyhow!("[io::geojson] Expected a FeatureCollection with a 'features' array"))?;

    let mut out = Vec::with_capacity(features.len());
    for (idx, feature) in features.iter().enumerate() {
        let geometry = &feature["geometry"];
        let coords = geometry["coordinates"].as_array();
        let parsed = match (geometry["type"].as_str(), coords) {
            (Some("Polygon"), Some(coords)) => MultiPolygon(vec![parse_polygon(coords)?]),
            (Some("MultiPolygon"), Some(coords)) => parse_multipolygon(coords)?,
            (ty, _) => {
                warn!(feature = idx, geometry_type = ?ty, "skipping non-polygon feature");
                continue;
            }
        };
        let properties = feature["properties"].as_object().cloned().unwrap_or_default();
        out.push(PolygonFeature { properties, geometry: parsed });
    }
    Ok(out)
}

/// GeoJSON `MultiPolygon` geometry object for `mp`.
pub(crate) fn multipolygon_to_geojson(mp: &MultiPolygon<f64>) -> Value {
    let polygons: Vec<Vec<Vec<[f64; 2]>>> = mp.0.iter()
        .map(|polygon| {
            std::iter::once(polygon.exterior())
                .chain(polygon.interiors())
                .map(|ring| ring.coords().map(|c| [c.x, c.y]).collect())
                .collect()
        })
        .collect();

    json!({
        "type": "MultiPolygon",
        "coordinates": polygons,
    })
}

/// `[[ring, ring, ...], ...]`
fn parse_multipolygon(coords: &[Value]) -> Result<MultiPolygon<f64>> {
    coords.iter()
        .map(|polygon| {
            let rings = polygon.as_array()
                .ok_or_else(|| anyhow!("[io::geojson] MultiPolygon member is not an array"))?;
            parse_polygon(rings)
        })
        .collect::<Result<Vec<_>>>()
        .map(MultiPolygon)
}

/// `[exterior, interior, ...]`
fn parse_polygon(rings: &[Value]) -> Result<Polygon<f64>> {
    let mut rings = rings.iter().map(|ring| {
        let coords = ring.as_array()
            .ok_or_else(|| anyhow!("[io::geojson] Polygon ring is not an array"))?;
        parse_ring(coords)
    });

    let exterior = rings.next()
        .ok_or_else(|| anyhow!("[io::geojson] Polygon has no exterior ring"))??;
    let interiors = rings.collect::<Result<Vec<_>>>()?;
    Ok(Polygon::new(exterior, interiors))
}

/// `[[x, y], [x, y], ...]`, closed if the source left it open.
fn parse_ring(coords: &[Value]) -> Result<LineString<f64>> {
    let mut points = Vec::with_capacity(coords.len() + 1);
    for pair in coords {
        let (Some(x), Some(y)) = (pair[0].as_f64(), pair[1].as_f64()) else {
            bail!("[io::geojson] Invalid coordinate: {pair}");
        };
        points.push(Coord { x, y });
    }

    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        if first != last { points.push(first) }
    }
    Ok(LineString(points))
}
