use std::str::FromStr;

use anyhow::{Context, Error, Result, anyhow, bail};
use tracing::info;

use crate::geo::require_county;
use super::{frame::RenderFrame, pipeline::Dashboard, state::ViewState};

/// A user interaction, as produced by the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    SelectCounty(String),
    SelectAttribute(String),
    /// Pan/zoom reported by the renderer, as `(lat, lon)` and zoom.
    SetViewport { center: (f64, f64), zoom: f64 },
}

/// Parses one line of the session protocol:
/// `county <name>`, `attribute <name>` or `viewport <lat> <lon> <zoom>`.
impl FromStr for SelectionEvent {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match verb.to_ascii_lowercase().as_str() {
            "county" if !rest.is_empty() => Ok(SelectionEvent::SelectCounty(rest.to_string())),
            "attribute" if !rest.is_empty() => Ok(SelectionEvent::SelectAttribute(rest.to_string())),
            "viewport" => {
                let numbers = rest.split_whitespace()
                    .map(|n| n.parse::<f64>().with_context(|| format!("[SelectionEvent] '{n}' is not a number")))
                    .collect::<Result<Vec<_>>>()?;
                let &[lat, lon, zoom] = numbers.as_slice() else {
                    bail!("[SelectionEvent] viewport takes <lat> <lon> <zoom>, got {:?}", rest);
                };
                Ok(SelectionEvent::SetViewport { center: (lat, lon), zoom })
            }
            _ => Err(anyhow!("[SelectionEvent] unrecognized event {line:?}")),
        }
    }
}

/// One user's session: its own `ViewState` and selected attribute, rerunning
/// the shared `Dashboard` pipeline after every event.
pub struct Session<'a> {
    dashboard: &'a Dashboard,
    view: ViewState,
    attribute: &'static str,
}

impl<'a> Session<'a> {
    /// Start at the dashboard's initial view with the first catalog attribute.
    pub fn new(dashboard: &'a Dashboard) -> Result<Self> {
        let attribute = dashboard.catalog().names().next()
            .ok_or_else(|| anyhow!("[Session.new] Attribute catalog is empty"))?;
        Ok(Self { dashboard, view: dashboard.initial_view(), attribute })
    }

    #[inline] pub fn view(&self) -> &ViewState { &self.view }

    #[inline] pub fn attribute(&self) -> &'static str { self.attribute }

    /// Apply an event to the session state. A rejected event leaves the state untouched.
    pub fn apply(&mut self, event: SelectionEvent) -> Result<()> {
        match event {
            SelectionEvent::SelectCounty(name) => {
                let county = require_county(&name)?;
                info!(county = county.name, "county selected");
                self.view.select_county(county.name);
            }
            SelectionEvent::SelectAttribute(name) => {
                let spec = self.dashboard.catalog().lookup(&name)?;
                info!(attribute = spec.name, "attribute selected");
                self.attribute = spec.name;
            }
            SelectionEvent::SetViewport { center, zoom } => {
                if !(center.0.is_finite() && center.1.is_finite() && zoom.is_finite()) {
                    bail!("[Session.apply] viewport must be finite");
                }
                self.view.set_viewport(center, zoom);
            }
        }
        Ok(())
    }

    /// Run the pipeline against the current state.
    pub fn rerun(&self) -> Result<RenderFrame> {
        self.dashboard.render(&self.view, self.attribute)
    }

    /// Apply `event`, then rerun; the event is fully applied before the pipeline reads state.
    pub fn handle(&mut self, event: SelectionEvent) -> Result<RenderFrame> {
        self.apply(event)?;
        self.rerun()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_event_lines() {
        assert_eq!(
            "county Davidson".parse::<SelectionEvent>().unwrap(),
            SelectionEvent::SelectCounty("Davidson".into()),
        );
        assert_eq!(
            "  attribute   2023 Total Population ".parse::<SelectionEvent>().unwrap(),
            SelectionEvent::SelectAttribute("2023 Total Population".into()),
        );
        assert_eq!(
            "viewport 36.2 -86.8 10".parse::<SelectionEvent>().unwrap(),
            SelectionEvent::SetViewport { center: (36.2, -86.8), zoom: 10.0 },
        );
    }

    #[test]
    fn rejects_bad_event_lines() {
        assert!("county".parse::<SelectionEvent>().is_err());
        assert!("viewport 36.2 -86.8".parse::<SelectionEvent>().is_err());
        assert!("viewport a b c".parse::<SelectionEvent>().is_err());
        assert!("zoom 3".parse::<SelectionEvent>().is_err());
        assert!("".parse::<SelectionEvent>().is_err());
    }
}
