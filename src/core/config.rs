//! Configuration for map views
//!
//! Options can be built in code starting from `MapViewOptions::default()` or
//! loaded from a JSON document. Missing fields take their default value.

use crate::core::{
    constants::{DEFAULT_ZOOM_DELTA, TILE_SIZE},
    geo::{LatLng, PixelSize, ZoomRange},
    map_type::MapType,
};
use crate::{MapError, Result};
use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapViewOptions {
    /// Edge length of a base tile in pixels
    pub tile_size: u32,
    /// Initial center of the view
    pub center: LatLng,
    /// Initial zoom level, clamped into the zoom range of `map_type`
    pub zoom: i32,
    /// Size of the map container in pixels
    pub size: PixelSize,
    /// Initial base-map style
    pub map_type: MapType,
    /// Pixels kept free on every side when fitting bounds
    pub fit_padding: u32,
    /// Levels added or removed by `zoom_in/zoom_out`
    pub zoom_delta: u8,
    /// Per-style overrides of the engine's zoom ranges
    pub zoom_ranges: FxHashMap<MapType, ZoomRange>,
}

impl Default for MapViewOptions {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            center: LatLng::default(),
            zoom: 0,
            size: PixelSize::default(),
            map_type: MapType::default(),
            fit_padding: 0,
            zoom_delta: DEFAULT_ZOOM_DELTA,
            zoom_ranges: FxHashMap::default(),
        }
    }
}

impl MapViewOptions {
    /// Parses options from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self =
            serde_json::from_str(json).map_err(|e| MapError::Config(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Reads options from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        log::debug!("loading map view options from {}", path.display());
        Self::from_json_str(&contents)
    }

    /// Rejects options no view could be built from
    pub fn validate(&self) -> Result<()> {
        if !self.size.is_valid() {
            return Err(MapError::Config(format!(
                "viewport size must be positive, got {}x{}",
                self.size.width, self.size.height
            )));
        }
        if self.zoom_delta == 0 {
            return Err(MapError::Config("zoom_delta must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Zoom range in effect for `map_type`
    pub fn zoom_range_for(&self, map_type: MapType) -> ZoomRange {
        self.zoom_ranges
            .get(&map_type)
            .copied()
            .unwrap_or_else(|| map_type.default_zoom_range())
    }

    pub fn with_center(mut self, center: LatLng) -> Self {
        self.center = center;
        self
    }

    pub fn with_zoom(mut self, zoom: i32) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_size(mut self, width: i64, height: i64) -> Self {
        self.size = PixelSize::new(width, height);
        self
    }

    pub fn with_map_type(mut self, map_type: MapType) -> Self {
        self.map_type = map_type;
        self
    }

    pub fn with_fit_padding(mut self, padding: u32) -> Self {
        self.fit_padding = padding;
        self
    }

    pub fn with_zoom_range(mut self, map_type: MapType, range: ZoomRange) -> Self {
        self.zoom_ranges.insert(map_type, range);
        self
    }
}
