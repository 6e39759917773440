use crate::core::constants::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, MAX_LATITUDE};
use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns a copy with latitude clamped to [-90, 90] and longitude wrapped
    /// into [-180, 180]. Non-finite components collapse to zero.
    pub fn normalized(&self) -> Self {
        let lat = if self.lat.is_finite() { self.lat } else { 0.0 };
        let lng = if self.lng.is_finite() { self.lng } else { 0.0 };
        Self::new(Self::clamp_lat(lat), Self::wrap_lng(lng))
    }

    /// Wraps longitude to [-180, 180] range
    pub fn wrap_lng(lng: f64) -> f64 {
        let wrapped = lng % 360.0;
        if wrapped > 180.0 {
            wrapped - 360.0
        } else if wrapped < -180.0 {
            wrapped + 360.0
        } else {
            wrapped
        }
    }

    /// Clamps latitude to the geographic range
    pub fn clamp_lat(lat: f64) -> f64 {
        lat.clamp(-90.0, 90.0)
    }

    /// Clamps latitude to the band the Mercator projection can represent
    pub fn clamp_mercator_lat(lat: f64) -> f64 {
        lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<LatLng> for geo_types::Coord<f64> {
    fn from(lat_lng: LatLng) -> Self {
        geo_types::coord! { x: lat_lng.lng, y: lat_lng.lat }
    }
}

impl From<geo_types::Coord<f64>> for LatLng {
    fn from(coord: geo_types::Coord<f64>) -> Self {
        LatLng::new(coord.y, coord.x)
    }
}

impl From<geo_types::Point<f64>> for LatLng {
    fn from(point: geo_types::Point<f64>) -> Self {
        LatLng::new(point.y(), point.x())
    }
}

/// Represents a point in world or zoomed-pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn multiply(&self, scalar: f64) -> Point {
        Point::new(self.x * scalar, self.y * scalar)
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Rounds both components to the nearest integer, ties away from zero
    pub fn round(&self) -> Point {
        Point::new(self.x.round(), self.y.round())
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Integer pixel position relative to the map container's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: i64,
    pub y: i64,
}

impl PixelPoint {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Snaps a fractional position onto the pixel grid
    pub fn from_point(point: &Point) -> Self {
        let rounded = point.round();
        Self::new(rounded.x as i64, rounded.y as i64)
    }

    pub fn to_point(self) -> Point {
        Point::new(self.x as f64, self.y as f64)
    }

    pub fn offset(&self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Pixel dimensions of the map container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: i64,
    pub height: i64,
}

impl PixelSize {
    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    /// A viewport can only be fitted when both dimensions are positive
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn to_point(self) -> Point {
        Point::new(self.width as f64, self.height as f64)
    }

    /// Position of the container's central pixel
    pub fn center(&self) -> Point {
        Point::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }
}

impl Default for PixelSize {
    fn default() -> Self {
        let (width, height) = crate::core::constants::DEFAULT_VIEWPORT_SIZE;
        Self::new(width, height)
    }
}

/// Inclusive range of integer zoom levels supported by a map type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoomRange {
    pub min: u8,
    pub max: u8,
}

impl ZoomRange {
    /// Creates a range, swapping the bounds if they are given in reverse
    pub fn new(min: u8, max: u8) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn contains(&self, zoom: i32) -> bool {
        zoom >= self.min as i32 && zoom <= self.max as i32
    }

    /// Clamps any requested zoom to the nearest supported level
    pub fn clamp(&self, zoom: i32) -> u8 {
        zoom.clamp(self.min as i32, self.max as i32) as u8
    }
}

impl Default for ZoomRange {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_ZOOM, DEFAULT_MAX_ZOOM)
    }
}

/// Represents a bounding box of geographical coordinates.
///
/// The two corner longitudes are joined the shorter way around the globe, so
/// corners at 170° and -170° describe a 20° box across the anti-meridian in
/// either order. Corners exactly 360° apart cover the whole world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    /// Creates bounds from two corners. Latitudes are ordered so that
    /// `south_west.lat <= north_east.lat`; longitudes are wrapped into
    /// [-180, 180] and otherwise kept as given.
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        let sw = south_west.normalized();
        let ne = north_east.normalized();
        Self {
            south_west: LatLng::new(sw.lat.min(ne.lat), sw.lng),
            north_east: LatLng::new(sw.lat.max(ne.lat), ne.lng),
        }
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self::new(LatLng::new(south, west), LatLng::new(north, east))
    }

    /// Bounds around a single point
    pub fn from_point(point: LatLng) -> Self {
        Self::new(point, point)
    }

    /// Latitude extent in degrees
    pub fn lat_span(&self) -> f64 {
        self.north_east.lat - self.south_west.lat
    }

    /// Longitude extent in degrees, taking the shorter way around the globe.
    /// A box spanning the full 360° stays the whole world.
    pub fn lng_span(&self) -> f64 {
        let direct = (self.north_east.lng - self.south_west.lng).abs();
        if direct >= 360.0 {
            360.0
        } else {
            direct.min(360.0 - direct)
        }
    }

    /// True when the shorter longitude span runs across ±180°
    pub fn crosses_antimeridian(&self) -> bool {
        let direct = (self.north_east.lng - self.south_west.lng).abs();
        direct > 180.0 && direct < 360.0
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: &LatLng) -> bool {
        if point.lat < self.south_west.lat || point.lat > self.north_east.lat {
            return false;
        }

        let west = self.south_west.lng.min(self.north_east.lng);
        let east = self.south_west.lng.max(self.north_east.lng);
        if self.crosses_antimeridian() {
            point.lng >= east || point.lng <= west
        } else {
            point.lng >= west && point.lng <= east
        }
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> LatLng {
        let lat = (self.south_west.lat + self.north_east.lat) / 2.0;
        let mid = (self.south_west.lng + self.north_east.lng) / 2.0;
        let lng = if self.crosses_antimeridian() {
            LatLng::wrap_lng(mid + 180.0)
        } else {
            mid
        };
        LatLng::new(lat, lng)
    }
}

impl From<LatLngBounds> for geo_types::Rect<f64> {
    fn from(bounds: LatLngBounds) -> Self {
        geo_types::Rect::new(
            geo_types::Coord::from(bounds.south_west),
            geo_types::Coord::from(bounds.north_east),
        )
    }
}

impl From<geo_types::Rect<f64>> for LatLngBounds {
    fn from(rect: geo_types::Rect<f64>) -> Self {
        LatLngBounds::new(LatLng::from(rect.min()), LatLng::from(rect.max()))
    }
}
