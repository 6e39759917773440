//! Base-map styles offered by the hosted map engine.

use crate::core::geo::ZoomRange;
use crate::MapError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of base-map styles, including the celestial-body variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MapType {
    #[default]
    Normal,
    Satellite,
    Hybrid,
    Physical,
    MoonElevation,
    MoonVisible,
    MarsElevation,
    MarsVisible,
    MarsInfrared,
    SkyVisible,
}

impl MapType {
    pub const ALL: [MapType; 10] = [
        MapType::Normal,
        MapType::Satellite,
        MapType::Hybrid,
        MapType::Physical,
        MapType::MoonElevation,
        MapType::MoonVisible,
        MapType::MarsElevation,
        MapType::MarsVisible,
        MapType::MarsInfrared,
        MapType::SkyVisible,
    ];

    /// Global constant naming this style in the engine's script API
    pub fn js_identifier(&self) -> &'static str {
        match self {
            Self::Normal => "G_NORMAL_MAP",
            Self::Satellite => "G_SATELLITE_MAP",
            Self::Hybrid => "G_HYBRID_MAP",
            Self::Physical => "G_PHYSICAL_MAP",
            Self::MoonElevation => "G_MOON_ELEVATION_MAP",
            Self::MoonVisible => "G_MOON_VISIBLE_MAP",
            Self::MarsElevation => "G_MARS_ELEVATION_MAP",
            Self::MarsVisible => "G_MARS_VISIBLE_MAP",
            Self::MarsInfrared => "G_MARS_INFRARED_MAP",
            Self::SkyVisible => "G_SKY_VISIBLE_MAP",
        }
    }

    /// Short kebab-case name, as used in config files and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Satellite => "satellite",
            Self::Hybrid => "hybrid",
            Self::Physical => "physical",
            Self::MoonElevation => "moon-elevation",
            Self::MoonVisible => "moon-visible",
            Self::MarsElevation => "mars-elevation",
            Self::MarsVisible => "mars-visible",
            Self::MarsInfrared => "mars-infrared",
            Self::SkyVisible => "sky-visible",
        }
    }

    /// Zoom levels the engine serves imagery for with this style
    pub fn default_zoom_range(&self) -> ZoomRange {
        match self {
            Self::Normal | Self::Satellite | Self::Hybrid => ZoomRange::new(0, 21),
            Self::Physical => ZoomRange::new(0, 15),
            Self::MoonElevation | Self::MoonVisible => ZoomRange::new(0, 9),
            Self::MarsElevation | Self::MarsVisible | Self::MarsInfrared => ZoomRange::new(0, 12),
            Self::SkyVisible => ZoomRange::new(0, 19),
        }
    }

    /// True for styles that do not show the Earth
    pub fn is_celestial(&self) -> bool {
        !matches!(
            self,
            Self::Normal | Self::Satellite | Self::Hybrid | Self::Physical
        )
    }
}

impl fmt::Display for MapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MapType {
    type Err = MapError;

    /// Accepts either the script identifier or the short name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|map_type| {
                map_type.js_identifier() == needle || map_type.name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| MapError::UnknownMapType(s.to_string()))
    }
}
