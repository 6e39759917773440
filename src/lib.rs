//! # webmapview
//!
//! Web Mercator projection and zoom fitting for slippy-map widgets hosted in
//! a web view.
//!
//! The projection engine in [`crate::core::projection`] is pure and can be used on
//! its own. [`MapView`] layers the mutable widget state on top of it, forwards
//! changes to the map engine through a [`ScriptChannel`] and reports changes
//! back to the host through [`MapDelegate`] notifications.

pub mod bridge;
pub mod core;
pub mod input;
pub mod prelude;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::MapViewOptions,
    geo::{LatLng, LatLngBounds, PixelPoint, PixelSize, Point, ZoomRange},
    map::MapView,
    map_type::MapType,
    projection::Projection,
    viewport::Viewport,
};

pub use input::{
    events::{MapDelegate, MapEvent},
    handler::EventManager,
};

pub use bridge::{
    report::EngineReport,
    script::{RecordingChannel, ScriptChannel, ScriptCommand},
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid viewport: {width}x{height} pixels")]
    InvalidViewport { width: i64, height: i64 },

    #[error("Unknown map type: {0}")]
    UnknownMapType(String),

    #[error("Script error: {0}")]
    Script(String),

    #[error("Malformed engine report: {0}")]
    Report(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Error type alias for convenience
pub type Error = MapError;
