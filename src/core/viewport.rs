use crate::core::geo::{LatLng, LatLngBounds, PixelPoint, PixelSize, Point, ZoomRange};
use crate::core::projection::Projection;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Manages the current view of the map: center, zoom, and screen dimensions.
///
/// All coordinate math is delegated to the stateless [`Projection`]; this type
/// only holds the inputs that change while the user moves the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The center of the map view in geographical coordinates
    center: LatLng,
    /// The current zoom level
    zoom: u8,
    /// The size of the viewport in pixels
    size: PixelSize,
    /// Zoom levels the current map type supports
    zoom_range: ZoomRange,
    projection: Projection,
}

impl Viewport {
    /// Creates a new viewport with the default zoom range and tile size
    pub fn new(center: LatLng, zoom: i32, size: PixelSize) -> Self {
        Self::with_projection(center, zoom, size, ZoomRange::default(), Projection::default())
    }

    pub fn with_projection(
        center: LatLng,
        zoom: i32,
        size: PixelSize,
        zoom_range: ZoomRange,
        projection: Projection,
    ) -> Self {
        Self {
            center: Self::clamp_center(center),
            zoom: zoom_range.clamp(zoom),
            size,
            zoom_range,
            projection,
        }
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn size(&self) -> PixelSize {
        self.size
    }

    pub fn zoom_range(&self) -> ZoomRange {
        self.zoom_range
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Sets the center of the viewport, clamping latitude into the Mercator
    /// band and wrapping longitude
    pub fn set_center(&mut self, center: LatLng) {
        self.center = Self::clamp_center(center);
    }

    /// Sets the zoom level, clamping to valid range
    pub fn set_zoom(&mut self, zoom: i32) {
        if !self.zoom_range.contains(zoom) {
            log::debug!(
                "zoom {} outside {}..={}, clamping",
                zoom,
                self.zoom_range.min,
                self.zoom_range.max
            );
        }
        self.zoom = self.zoom_range.clamp(zoom);
    }

    /// Sets the viewport size
    pub fn set_size(&mut self, size: PixelSize) {
        self.size = size;
    }

    /// Sets the zoom limits, re-clamping the current zoom
    pub fn set_zoom_range(&mut self, zoom_range: ZoomRange) {
        self.zoom_range = zoom_range;
        self.zoom = zoom_range.clamp(self.zoom as i32);
    }

    /// Gets the scale factor for the current zoom level
    pub fn scale(&self) -> f64 {
        Projection::scale(self.zoom)
    }

    /// Zoomed world position of the center, before snapping to pixels
    fn center_world_point(&self) -> Point {
        self.projection
            .project(&self.center, self.zoom, &Point::default())
    }

    /// Zoomed world pixel shown at the container's top-left corner
    pub fn pixel_origin(&self) -> Point {
        self.center_world_point().subtract(&self.size.center())
    }

    /// Center of the view in zoomed world pixels
    pub fn center_pixel(&self) -> PixelPoint {
        PixelPoint::from_point(&self.center_world_point())
    }

    /// Converts a geographical coordinate to container pixel coordinates
    pub fn lat_lng_to_container_pixel(&self, lat_lng: &LatLng) -> PixelPoint {
        self.projection
            .lat_lng_to_pixel(lat_lng, self.zoom, &self.pixel_origin())
    }

    /// Converts container pixel coordinates back to geographical coordinates
    pub fn container_pixel_to_lat_lng(&self, pixel: &PixelPoint) -> LatLng {
        self.projection
            .pixel_to_lat_lng(pixel, self.zoom, &self.pixel_origin())
    }

    /// Geographic coordinate at a zoomed world pixel
    pub fn world_pixel_to_lat_lng(&self, pixel: &PixelPoint) -> LatLng {
        self.projection
            .pixel_to_lat_lng(pixel, self.zoom, &Point::default())
    }

    /// Moves the view so the content shifts by `(dx, dy)` container pixels.
    /// Positive `dx` reveals more of the map to the east.
    pub fn pan_by(&mut self, dx: i64, dy: i64) {
        let target = self.size.center().add(&Point::new(dx as f64, dy as f64));
        let new_center =
            self.projection
                .unproject(&target, self.zoom, &self.pixel_origin());
        self.set_center(new_center);
    }

    /// Gets the current viewport bounds in geographical coordinates.
    ///
    /// The longitude extent comes from the container width. Once it passes
    /// half the world the bounds cover every longitude, since a box is always
    /// read the shorter way around.
    pub fn bounds(&self) -> LatLngBounds {
        let origin = self.pixel_origin();
        let north = self
            .projection
            .unproject(&Point::default(), self.zoom, &origin)
            .lat;
        let south = self
            .projection
            .unproject(&self.size.to_point(), self.zoom, &origin)
            .lat;

        let lng_span = self.size.width as f64 / self.projection.world_size(self.zoom) * 360.0;
        if lng_span > 180.0 {
            return LatLngBounds::from_coords(south, -180.0, north, 180.0);
        }

        let half = lng_span / 2.0;
        LatLngBounds::from_coords(
            south,
            LatLng::wrap_lng(self.center.lng - half),
            north,
            LatLng::wrap_lng(self.center.lng + half),
        )
    }

    /// Largest zoom at which `bounds` fit this viewport
    pub fn bounds_zoom(&self, bounds: &LatLngBounds, padding: u32) -> Result<u8> {
        self.projection
            .bounds_zoom_with_padding(bounds, self.size, padding, self.zoom_range)
    }

    /// Clamps center to the projectable world
    fn clamp_center(center: LatLng) -> LatLng {
        let normalized = center.normalized();
        LatLng::new(LatLng::clamp_mercator_lat(normalized.lat), normalized.lng)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(LatLng::new(0.0, 0.0), 0, PixelSize::default())
    }
}
