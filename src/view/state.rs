use serde::Serialize;

/// Nashville, as `(lat, lon)`.
pub const DEFAULT_CENTER: (f64, f64) = (36.1627, -86.7816);
pub const DEFAULT_ZOOM: f64 = 8.0;

/// Map view state carried across reruns of one session.
///
/// County selection and viewport are independent: selecting a county never
/// moves the map, and panning never changes the selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    selected_county: Option<String>,
    map_center: (f64, f64),
    zoom_level: f64,
}

impl Default for ViewState {
    fn default() -> Self { Self::new(DEFAULT_CENTER, DEFAULT_ZOOM) }
}

impl ViewState {
    /// Fresh state with no county selected.
    pub fn new(map_center: (f64, f64), zoom_level: f64) -> Self {
        Self { selected_county: None, map_center, zoom_level }
    }

    /// Snapshot of the current state.
    #[inline] pub fn get(&self) -> ViewState { self.clone() }

    #[inline] pub fn selected_county(&self) -> Option<&str> { self.selected_county.as_deref() }

    #[inline] pub fn map_center(&self) -> (f64, f64) { self.map_center }

    #[inline] pub fn zoom_level(&self) -> f64 { self.zoom_level }

    /// Apply a county selection. Center and zoom are left as they are.
    pub fn select_county(&mut self, county: impl Into<String>) {
        self.selected_county = Some(county.into());
    }

    /// Record a pan/zoom reported by the renderer.
    pub fn set_viewport(&mut self, map_center: (f64, f64), zoom_level: f64) {
        self.map_center = map_center;
        self.zoom_level = zoom_level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unselected_at_defaults() {
        let state = ViewState::default();
        assert_eq!(state.selected_county(), None);
        assert_eq!(state.map_center(), DEFAULT_CENTER);
        assert_eq!(state.zoom_level(), DEFAULT_ZOOM);
    }

    #[test]
    fn select_county_leaves_viewport_alone() {
        let mut state = ViewState::new((36.0, -87.0), 9.5);
        let before = state.get();

        state.select_county("Davidson");
        let after = state.get();

        assert_eq!(after.selected_county(), Some("Davidson"));
        assert_eq!(after.map_center(), before.map_center());
        assert_eq!(after.zoom_level(), before.zoom_level());
    }

    #[test]
    fn viewport_survives_repeated_selections() {
        let mut state = ViewState::default();
        state.set_viewport((35.9, -86.5), 11.0);
        state.select_county("Davidson");
        state.select_county("Wilson");

        assert_eq!(state.selected_county(), Some("Wilson"));
        assert_eq!(state.map_center(), (35.9, -86.5));
        assert_eq!(state.zoom_level(), 11.0);
    }

    #[test]
    fn get_is_idempotent() {
        let mut state = ViewState::default();
        state.select_county("Maury");
        assert_eq!(state.get(), state.get());
        assert_eq!(state.get(), state);
    }

    #[test]
    fn serializes_for_the_renderer() {
        let mut state = ViewState::default();
        state.select_county("Davidson");
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["selected_county"], "Davidson");
        assert_eq!(value["map_center"][0], 36.1627);
        assert_eq!(value["zoom_level"], 8.0);
    }
}
