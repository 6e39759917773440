//! Core constants derived from common web-map conventions.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// Latitude limit of the Web Mercator projection, `atan(sinh(π))` in degrees.
pub const MAX_LATITUDE: f64 = 85.0511287798;

/// Lowest zoom level supported by the map engine.
pub const DEFAULT_MIN_ZOOM: u8 = 0;

/// Highest zoom level supported by the map engine.
pub const DEFAULT_MAX_ZOOM: u8 = 21;

/// Programmatic +/- zoom step when calling `zoom_in/zoom_out`.
pub const DEFAULT_ZOOM_DELTA: u8 = 1;

/// Slack applied to `log2` results before flooring in the bounds search, so
/// spans that fit exactly are not pushed one level down by rounding noise.
pub const ZOOM_FIT_EPSILON: f64 = 1e-9;

/// Default viewport size in pixels (the original widget's full-screen frame).
pub const DEFAULT_VIEWPORT_SIZE: (i64, i64) = (320, 460);
