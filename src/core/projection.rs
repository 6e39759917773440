//! Web Mercator projection between geographic, world and pixel space.
//!
//! World coordinates live in a square of `tile_size` pixels and do not depend
//! on zoom. Pixel coordinates are world coordinates scaled by `2^zoom` and
//! shifted by a pixel origin, the zoomed world position of the container's
//! top-left corner.
//!
//! Everything here is a pure function of its inputs.

use crate::core::constants::{TILE_SIZE, ZOOM_FIT_EPSILON};
use crate::core::geo::{LatLng, LatLngBounds, PixelPoint, PixelSize, Point, ZoomRange};
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Spherical Mercator projection with a fixed base tile size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    tile_size: f64,
}

impl Projection {
    /// Creates a projection for square tiles of `tile_size` pixels.
    /// A zero tile size falls back to the standard 256.
    pub fn new(tile_size: u32) -> Self {
        let tile_size = if tile_size == 0 { TILE_SIZE } else { tile_size };
        Self {
            tile_size: tile_size as f64,
        }
    }

    pub fn tile_size(&self) -> f64 {
        self.tile_size
    }

    /// Scale factor from world to pixel coordinates
    pub fn scale(zoom: u8) -> f64 {
        2_f64.powi(zoom as i32)
    }

    /// Side length of the whole world in pixels at `zoom`
    pub fn world_size(&self, zoom: u8) -> f64 {
        self.tile_size * Self::scale(zoom)
    }

    /// Projects a geographic coordinate into world coordinates.
    /// Latitudes outside the Mercator band are clamped to its edge.
    pub fn lat_lng_to_world(&self, lat_lng: &LatLng) -> Point {
        let normalized = lat_lng.normalized();
        let lat = LatLng::clamp_mercator_lat(normalized.lat);
        if lat != normalized.lat {
            log::trace!("latitude {} clamped to mercator limit", lat_lng.lat);
        }

        let x = (normalized.lng + 180.0) / 360.0;
        let y = 0.5 - (PI / 4.0 + lat * PI / 360.0).tan().ln() / (2.0 * PI);

        Point::new(x * self.tile_size, y * self.tile_size)
    }

    /// Inverse of [`Projection::lat_lng_to_world`]. Points left or right of
    /// the world square wrap around to the matching longitude.
    pub fn world_to_lat_lng(&self, point: &Point) -> LatLng {
        let x = point.x / self.tile_size;
        let y = point.y / self.tile_size;

        let lng = x * 360.0 - 180.0;
        let lat = (360.0 / PI) * ((PI * (1.0 - 2.0 * y)).exp().atan()) - 90.0;

        LatLng::new(lat, lng).normalized()
    }

    /// Projects a geographic coordinate to fractional pixels at `zoom`
    /// relative to `origin`
    pub fn project(&self, lat_lng: &LatLng, zoom: u8, origin: &Point) -> Point {
        self.lat_lng_to_world(lat_lng)
            .multiply(Self::scale(zoom))
            .subtract(origin)
    }

    /// Converts fractional pixels at `zoom` relative to `origin` back to a
    /// geographic coordinate
    pub fn unproject(&self, pixel: &Point, zoom: u8, origin: &Point) -> LatLng {
        let world = pixel.add(origin).multiply(1.0 / Self::scale(zoom));
        self.world_to_lat_lng(&world)
    }

    /// Projects a geographic coordinate to the pixel grid at `zoom`
    pub fn lat_lng_to_pixel(&self, lat_lng: &LatLng, zoom: u8, origin: &Point) -> PixelPoint {
        PixelPoint::from_point(&self.project(lat_lng, zoom, origin))
    }

    /// Geographic coordinate shown at an integer pixel at `zoom`
    pub fn pixel_to_lat_lng(&self, pixel: &PixelPoint, zoom: u8, origin: &Point) -> LatLng {
        self.unproject(&pixel.to_point(), zoom, origin)
    }

    /// Zoom-independent extent of the bounds in world coordinates
    pub fn world_span(&self, bounds: &LatLngBounds) -> Point {
        let south = self.lat_lng_to_world(&LatLng::new(bounds.south_west.lat, 0.0));
        let north = self.lat_lng_to_world(&LatLng::new(bounds.north_east.lat, 0.0));

        Point::new(
            bounds.lng_span() / 360.0 * self.tile_size,
            (south.y - north.y).abs(),
        )
    }

    /// Largest zoom in `range` at which `bounds` fit inside `viewport`.
    ///
    /// The fit is strict: at the returned zoom the projected bounds are no
    /// larger than the viewport on either axis. Zero-area bounds fit at any
    /// zoom and return `range.max`.
    pub fn bounds_zoom(
        &self,
        bounds: &LatLngBounds,
        viewport: PixelSize,
        range: ZoomRange,
    ) -> Result<u8> {
        self.bounds_zoom_with_padding(bounds, viewport, 0, range)
    }

    /// Same as [`Projection::bounds_zoom`] after shrinking the viewport by
    /// `padding` pixels on every side
    pub fn bounds_zoom_with_padding(
        &self,
        bounds: &LatLngBounds,
        viewport: PixelSize,
        padding: u32,
        range: ZoomRange,
    ) -> Result<u8> {
        let inset = 2 * padding as i64;
        let available = PixelSize::new(
            viewport.width.saturating_sub(inset),
            viewport.height.saturating_sub(inset),
        );
        if !available.is_valid() {
            return Err(MapError::InvalidViewport {
                width: available.width,
                height: available.height,
            });
        }

        let span = self.world_span(bounds);
        let zoom_x = Self::axis_zoom(available.width as f64, span.x);
        let zoom_y = Self::axis_zoom(available.height as f64, span.y);

        let zoom = match (zoom_x, zoom_y) {
            (Some(x), Some(y)) => x.min(y),
            (Some(z), None) | (None, Some(z)) => z,
            (None, None) => {
                log::debug!("degenerate bounds {:?}, using max zoom", bounds);
                return Ok(range.max);
            }
        };

        let clamped = range.clamp(zoom.clamp(i32::MIN as f64, i32::MAX as f64) as i32);
        log::debug!(
            "bounds span {:.3}x{:.3} world px fits {}x{} at zoom {}",
            span.x,
            span.y,
            available.width,
            available.height,
            clamped
        );
        Ok(clamped)
    }

    /// `floor(log2(extent / span))`, or `None` for a zero span which fits at
    /// every zoom
    fn axis_zoom(extent: f64, span: f64) -> Option<f64> {
        if span <= 0.0 {
            return None;
        }
        Some(((extent / span).log2() + ZOOM_FIT_EPSILON).floor())
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(TILE_SIZE)
    }
}
