//! Prelude module for common webmapview types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use webmapview::prelude::*;`

pub use crate::core::{
    config::MapViewOptions,
    geo::{LatLng, LatLngBounds, PixelPoint, PixelSize, Point, ZoomRange},
    map::MapView,
    map_type::MapType,
    projection::Projection,
    viewport::Viewport,
};

pub use crate::input::{
    events::{MapDelegate, MapEvent},
    handler::{EventCallback, EventManager},
};

pub use crate::bridge::{
    report::{EngineReport, EngineState},
    script::{RecordingChannel, ScriptChannel, ScriptCommand},
};

pub use crate::{Error as MapError, Result};

pub use std::sync::Arc;

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
