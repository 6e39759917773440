use crate::core::{geo::LatLng, geo::PixelSize, map_type::MapType};
use crate::Result;
use serde::{Deserialize, Serialize};

/// Change notification posted by the engine page after the user interacts
/// with the map, e.g. `{"event":"zoom","zoom":5}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum EngineReport {
    Zoom { zoom: i32 },
    Center { lat: f64, lng: f64 },
    Resize { width: i64, height: i64 },
    MapType { id: String },
}

/// The page may batch several reports into one array
#[derive(Deserialize)]
#[serde(untagged)]
enum ReportPayload {
    One(EngineReport),
    Many(Vec<EngineReport>),
}

impl EngineReport {
    /// Parses a single report
    pub fn parse(message: &str) -> Result<Self> {
        Ok(serde_json::from_str(message)?)
    }

    /// Parses a single report or an array of reports
    pub fn parse_many(message: &str) -> Result<Vec<Self>> {
        let payload: ReportPayload = serde_json::from_str(message)?;
        match payload {
            ReportPayload::One(report) => Ok(vec![report]),
            ReportPayload::Many(reports) => Ok(reports),
        }
    }

    pub fn center(&self) -> Option<LatLng> {
        match self {
            Self::Center { lat, lng } => Some(LatLng::new(*lat, *lng)),
            _ => None,
        }
    }

    pub fn size(&self) -> Option<PixelSize> {
        match self {
            Self::Resize { width, height } => Some(PixelSize::new(*width, *height)),
            _ => None,
        }
    }

    /// Resolves the engine's map type identifier
    pub fn map_type(&self) -> Option<Result<MapType>> {
        match self {
            Self::MapType { id } => Some(id.parse()),
            _ => None,
        }
    }
}

/// Reply to [`crate::bridge::ScriptCommand::QueryState`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    pub zoom: i32,
    pub lat: f64,
    pub lng: f64,
}

impl EngineState {
    pub fn parse(message: &str) -> Result<Self> {
        Ok(serde_json::from_str(message)?)
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}
