use crate::core::{geo::LatLng, map_type::MapType};
use crate::{MapError, Result};
use std::collections::VecDeque;
use std::fmt;

/// Global the engine page binds the map instance to
const MAP_OBJECT: &str = "map";

/// Evaluates script in the host's web view.
///
/// Hosts typically wrap their platform web view here; calls are made from the
/// thread that owns the map view, one at a time.
pub trait ScriptChannel {
    /// Runs `script` and returns its result stringified, or an empty string
    /// when the script produces no value
    fn eval(&mut self, script: &str) -> Result<String>;
}

/// Calls the map view issues against the engine's script API
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptCommand {
    SetZoom(u8),
    ZoomIn,
    ZoomOut,
    SetCenter(LatLng),
    /// Recenters and zooms in a single engine call
    SetCenterAndZoom(LatLng, u8),
    PanTo(LatLng),
    /// Shifts the map content by a pixel offset
    PanBy { dx: i64, dy: i64 },
    SetMapType(MapType),
    CheckResize,
    /// Asks the engine for its zoom and center as a JSON object
    QueryState,
}

impl ScriptCommand {
    /// Renders the command as a script statement
    pub fn to_script(&self) -> String {
        match self {
            Self::SetZoom(zoom) => format!("{}.setZoom({});", MAP_OBJECT, zoom),
            Self::ZoomIn => format!("{}.zoomIn();", MAP_OBJECT),
            Self::ZoomOut => format!("{}.zoomOut();", MAP_OBJECT),
            Self::SetCenter(lat_lng) => format!(
                "{}.setCenter(new GLatLng({}, {}));",
                MAP_OBJECT, lat_lng.lat, lat_lng.lng
            ),
            Self::SetCenterAndZoom(lat_lng, zoom) => format!(
                "{}.setCenter(new GLatLng({}, {}), {});",
                MAP_OBJECT, lat_lng.lat, lat_lng.lng, zoom
            ),
            Self::PanTo(lat_lng) => format!(
                "{}.panTo(new GLatLng({}, {}));",
                MAP_OBJECT, lat_lng.lat, lat_lng.lng
            ),
            Self::PanBy { dx, dy } => {
                format!("{}.panBy(new GSize({}, {}));", MAP_OBJECT, dx, dy)
            }
            Self::SetMapType(map_type) => {
                format!("{}.setMapType({});", MAP_OBJECT, map_type.js_identifier())
            }
            Self::CheckResize => format!("{}.checkResize();", MAP_OBJECT),
            Self::QueryState => format!(
                "JSON.stringify({{zoom: {m}.getZoom(), lat: {m}.getCenter().lat(), lng: {m}.getCenter().lng()}});",
                m = MAP_OBJECT
            ),
        }
    }
}

impl fmt::Display for ScriptCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_script())
    }
}

/// In-memory channel that records every script it is asked to run.
///
/// Replies are taken from a queue of canned responses, falling back to an
/// empty string. Useful for headless hosts and tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingChannel {
    scripts: Vec<String>,
    responses: VecDeque<String>,
    failure: Option<String>,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the reply for the next `eval` call
    pub fn push_response(&mut self, response: impl Into<String>) {
        self.responses.push_back(response.into());
    }

    /// Makes every following `eval` fail with `message`
    pub fn fail_with(&mut self, message: impl Into<String>) {
        self.failure = Some(message.into());
    }

    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }

    pub fn take_scripts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.scripts)
    }
}

impl ScriptChannel for RecordingChannel {
    fn eval(&mut self, script: &str) -> Result<String> {
        if let Some(message) = &self.failure {
            return Err(MapError::Script(message.clone()));
        }
        self.scripts.push(script.to_string());
        Ok(self.responses.pop_front().unwrap_or_default())
    }
}
