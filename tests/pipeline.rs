// End-to-end runs of the dashboard pipeline over a data directory on disk:
// manifest, geometry, attribute tables, permits, session events.

use std::{fs, path::Path, sync::Arc};

use serde_json::json;
use tractmap::{
    Dashboard, GeometryNotFoundError, SelectionEvent, Session, UnknownAttributeError,
    UnknownCountyError, ViewState,
};

fn square(x: f64, y: f64) -> serde_json::Value {
    json!({ "type": "Polygon", "coordinates": [[[x, y], [x + 0.1, y], [x + 0.1, y + 0.1], [x, y + 0.1], [x, y]]] })
}

fn write(root: &Path, rel: &str, contents: impl AsRef<[u8]>) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Davidson tract 0102 with population 1200, plus a Williamson tract that has
/// geometry but no attribute row, plus an attribute row with no geometry.
fn data_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    let tracts = json!({ "type": "FeatureCollection", "features": [
        { "type": "Feature", "properties": { "GEOID": "47037000102", "county": "Davidson" }, "geometry": square(-86.8, 36.1) },
        { "type": "Feature", "properties": { "GEOID": "47187050100", "county": "Williamson" }, "geometry": square(-86.9, 35.9) },
    ]});
    let counties = json!({ "type": "FeatureCollection", "features": [
        { "type": "Feature", "properties": { "NAME": "Davidson", "GEOID": "47037" }, "geometry": square(-87.0, 36.0) },
        { "type": "Feature", "properties": { "NAME": "Williamson", "GEOID": "47187" }, "geometry": square(-87.0, 35.8) },
        { "type": "Feature", "properties": { "NAME": "Cannon", "GEOID": "47015" }, "geometry": square(-86.1, 35.8) },
    ]});
    write(root, "geometry/tracts.geojson", tracts.to_string());
    write(root, "geometry/counties.geojson", counties.to_string());

    write(root, "attributes/total_population_2023.csv",
        "tract_id,total_population\n47037.0102,1200\n47037.0199,800\n");
    write(root, "attributes/median_household_income_2023.csv",
        "tract_id,median_household_income\n47037.0102,72500\n47187.5010,98000\n");

    write(root, "permits/permits.csv", "FIPS,date,Series,Permits\n\
        47037,2023-05-01,Total Units,100\n\
        47037,2023-12-01,Total Units,40\n\
        47037,2024-06-01,Total Units,60\n\
        47037,2024-06-01,1 Unit,25\n\
        47187,2024-06-01,Total Units,70\n");

    dir
}

#[test]
fn selecting_davidson_yields_one_joined_feature() {
    let dir = data_dir();
    let dashboard = Dashboard::open(dir.path()).unwrap();

    let mut view = dashboard.initial_view();
    view.select_county("Davidson");
    let frame = dashboard.render(&view, "2023 Total Population").unwrap();

    assert_eq!(frame.features.len(), 1);
    let feature = &frame.features[0];
    assert_eq!(feature.geo_key.id(), "47037000102");
    assert_eq!(feature.value, 1200.0);
    assert_eq!(&*feature.county_name, "Davidson");
    assert_eq!(feature.tooltip, "1,200");

    let outline = frame.outline.as_ref().unwrap();
    assert_eq!(outline.fips.id(), "47037");
    assert_eq!(frame.display.legend_title, "Total Population");
    assert_eq!(frame.display.colorbar_format, ",.0f");

    // trailing 12 months of "Total Units" for 47037
    assert_eq!(frame.permits.len(), 4);
    assert_eq!(frame.kpi_series, "Total Units");
    assert_eq!(frame.kpi, 100);
}

#[test]
fn county_without_permits_has_zero_kpi() {
    let dir = data_dir();
    let dashboard = Dashboard::open(dir.path()).unwrap();

    let mut view = dashboard.initial_view();
    view.select_county("Cannon");
    let frame = dashboard.render(&view, "2023 Total Population").unwrap();

    assert!(frame.permits.is_empty());
    assert_eq!(frame.kpi, 0);
    assert_eq!(frame.features.len(), 1);
}

#[test]
fn no_selection_renders_map_without_outline() {
    let dir = data_dir();
    let dashboard = Dashboard::open(dir.path()).unwrap();

    let frame = dashboard.render(&dashboard.initial_view(), "2023 Median Household Income").unwrap();
    assert!(frame.outline.is_none());
    assert!(frame.permits.is_empty());
    assert_eq!(frame.kpi, 0);

    // only the Davidson tract exists on both sides
    assert_eq!(frame.features.len(), 1);
    assert_eq!(frame.features[0].tooltip, "$72,500");
}

#[test]
fn unknown_attribute_fails_the_rerun() {
    let dir = data_dir();
    let dashboard = Dashboard::open(dir.path()).unwrap();

    let err = dashboard.render(&ViewState::default(), "2023 Median Age").unwrap_err();
    assert!(err.downcast_ref::<UnknownAttributeError>().is_some());
}

#[test]
fn county_missing_from_outlines_is_geometry_not_found() {
    let dir = data_dir();
    let dashboard = Dashboard::open(dir.path()).unwrap();

    let mut view = dashboard.initial_view();
    view.select_county("Wilson");
    let err = dashboard.render(&view, "2023 Total Population").unwrap_err();
    assert!(err.downcast_ref::<GeometryNotFoundError>().is_some());
}

#[test]
fn missing_attribute_table_is_an_error() {
    let dir = data_dir();
    let dashboard = Dashboard::open(dir.path()).unwrap();
    assert!(dashboard.render(&ViewState::default(), "2023 Population Density").is_err());
}

#[test]
fn reruns_reuse_cached_geometry() {
    let dir = data_dir();
    let dashboard = Dashboard::open(dir.path()).unwrap();

    let mut view = dashboard.initial_view();
    view.select_county("Davidson");
    let first = dashboard.render(&view, "2023 Total Population").unwrap();

    // geometry files are gone; only the caches can serve the second rerun
    fs::remove_dir_all(dir.path().join("geometry")).unwrap();
    let second = dashboard.render(&view, "2023 Median Household Income").unwrap();

    assert!(Arc::ptr_eq(first.outline.as_ref().unwrap(), second.outline.as_ref().unwrap()));
    assert!(Arc::ptr_eq(&first.features[0].geometry, &second.features[0].geometry));
    assert_eq!(dashboard.geometry().cached_outlines(), 1);
}

#[test]
fn manifest_overrides_viewport_and_kpi() {
    let dir = data_dir();
    write(dir.path(), "manifest.json", r#"{ "center": [35.0, -86.0], "zoom": 10, "kpi_series": "1 Unit" }"#);
    let dashboard = Dashboard::open(dir.path()).unwrap();

    let mut view = dashboard.initial_view();
    assert_eq!(view.map_center(), (35.0, -86.0));
    assert_eq!(view.zoom_level(), 10.0);

    view.select_county("Davidson");
    let frame = dashboard.render(&view, "2023 Total Population").unwrap();
    assert_eq!(frame.kpi, 25);
}

#[test]
fn session_applies_events_before_rerunning() {
    let dir = data_dir();
    let dashboard = Dashboard::open(dir.path()).unwrap();
    let mut session = Session::new(&dashboard).unwrap();
    assert_eq!(session.attribute(), "2023 Total Population");

    session.apply(SelectionEvent::SetViewport { center: (36.0, -86.5), zoom: 11.0 }).unwrap();
    let frame = session.handle("county davidson".parse().unwrap()).unwrap();

    assert_eq!(frame.view.selected_county(), Some("Davidson"));
    assert_eq!(frame.view.map_center(), (36.0, -86.5));
    assert_eq!(frame.view.zoom_level(), 11.0);
    assert_eq!(frame.outline.as_ref().unwrap().fips.id(), "47037");

    let frame = session.handle(SelectionEvent::SelectAttribute("2023 Median Household Income".into())).unwrap();
    assert_eq!(frame.display.attribute, "2023 Median Household Income");
    assert_eq!(frame.view.selected_county(), Some("Davidson"));
}

#[test]
fn rejected_events_leave_the_session_unchanged() {
    let dir = data_dir();
    let dashboard = Dashboard::open(dir.path()).unwrap();
    let mut session = Session::new(&dashboard).unwrap();
    session.apply(SelectionEvent::SelectCounty("Davidson".into())).unwrap();
    let before = session.view().get();

    let err = session.apply(SelectionEvent::SelectCounty("Shelby".into())).unwrap_err();
    assert!(err.downcast_ref::<UnknownCountyError>().is_some());
    let err = session.apply(SelectionEvent::SelectAttribute("Median Age".into())).unwrap_err();
    assert!(err.downcast_ref::<UnknownAttributeError>().is_some());

    assert_eq!(session.view(), &before);
    assert_eq!(session.attribute(), "2023 Total Population");
}

#[test]
fn frame_exports_as_geojson() {
    let dir = data_dir();
    let dashboard = Dashboard::open(dir.path()).unwrap();
    let mut view = dashboard.initial_view();
    view.select_county("Davidson");

    let value = dashboard.render(&view, "2023 Total Population").unwrap().to_geojson().unwrap();
    assert_eq!(value["type"], "FeatureCollection");
    assert_eq!(value["features"].as_array().unwrap().len(), 1);
    assert_eq!(value["features"][0]["id"], "47037000102");
    assert_eq!(value["features"][0]["properties"]["tooltip"], "1,200");
    assert_eq!(value["features"][0]["properties"]["county"], "Davidson");
    assert_eq!(value["features"][0]["geometry"]["type"], "MultiPolygon");
    assert_eq!(value["view"]["selected_county"], "Davidson");
    assert_eq!(value["display"]["color_scale"], "Blues");
    assert_eq!(value["outline"]["fips"], "47037");
    assert_eq!(value["kpi"]["value"], 100);
    assert_eq!(value["permits"][0]["date"], "2023-05-01");
}

#[test]
fn ten_digit_geoid_never_joins() {
    let dir = data_dir();
    // "4703710102" is one digit short of a tract GEOID; "47037.0102" normalizes to "47037000102"
    let tracts = json!({ "type": "FeatureCollection", "features": [
        { "type": "Feature", "properties": { "GEOID": "4703710102", "county": "Davidson" }, "geometry": square(-86.8, 36.1) },
    ]});
    write(dir.path(), "geometry/tracts.geojson", tracts.to_string());
    let dashboard = Dashboard::open(dir.path()).unwrap();

    let mut view = dashboard.initial_view();
    view.select_county("Davidson");
    let frame = dashboard.render(&view, "2023 Total Population").unwrap();

    assert!(frame.features.is_empty());
    assert!(dashboard.geometry().load_tracts().unwrap().is_empty());
    // the rest of the frame is unaffected
    assert_eq!(frame.outline.as_ref().unwrap().fips.id(), "47037");
    assert_eq!(frame.kpi, 100);
}

#[test]
fn county_outline_cache_ignores_name_case() {
    let dir = data_dir();
    let dashboard = Dashboard::open(dir.path()).unwrap();

    let mut upper = dashboard.initial_view();
    upper.select_county("Davidson");
    let mut lower = dashboard.initial_view();
    lower.select_county("davidson");

    let first = dashboard.render(&upper, "2023 Total Population").unwrap();
    let second = dashboard.render(&lower, "2023 Total Population").unwrap();
    assert!(Arc::ptr_eq(first.outline.as_ref().unwrap(), second.outline.as_ref().unwrap()));
    assert_eq!(dashboard.geometry().cached_outlines(), 1);
}

#[test]
fn open_rejects_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Dashboard::open(&dir.path().join("nope")).is_err());
}
