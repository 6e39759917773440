use crate::core::{
    geo::{LatLng, PixelPoint, PixelSize},
    map_type::MapType,
};
use serde::{Deserialize, Serialize};

/// Map event types that can be emitted by the map view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MapEvent {
    /// Zoom level changed
    ZoomUpdated { zoom: u8 },
    /// Center moved, in geographic coordinates
    CenterUpdatedToLatLng { lat_lng: LatLng },
    /// Center moved, in zoomed world pixels
    CenterUpdatedToPixel { pixel: PixelPoint },
    /// Base-map style changed
    MapTypeChanged { map_type: MapType },
    /// Container was resized
    Resized { size: PixelSize },
}

impl MapEvent {
    /// Name listeners register under
    pub fn event_type(&self) -> &'static str {
        match self {
            MapEvent::ZoomUpdated { .. } => "zoom",
            MapEvent::CenterUpdatedToLatLng { .. } => "center_latlng",
            MapEvent::CenterUpdatedToPixel { .. } => "center_pixel",
            MapEvent::MapTypeChanged { .. } => "maptype",
            MapEvent::Resized { .. } => "resize",
        }
    }

    /// Forwards the event to the matching delegate callback
    pub fn dispatch(&self, delegate: &dyn MapDelegate) {
        match *self {
            MapEvent::ZoomUpdated { zoom } => delegate.map_zoom_updated_to(zoom),
            MapEvent::CenterUpdatedToLatLng { lat_lng } => {
                delegate.map_center_updated_to_lat_lng(lat_lng)
            }
            MapEvent::CenterUpdatedToPixel { pixel } => delegate.map_center_updated_to_pixel(pixel),
            MapEvent::MapTypeChanged { map_type } => delegate.map_type_updated_to(map_type),
            MapEvent::Resized { size } => delegate.map_resized_to(size),
        }
    }
}

/// Receives change notifications from a map view.
///
/// Zoom and center callbacks are required; the rest default to no-ops.
pub trait MapDelegate: Send + Sync {
    fn map_zoom_updated_to(&self, zoom: u8);

    fn map_center_updated_to_lat_lng(&self, lat_lng: LatLng);

    fn map_center_updated_to_pixel(&self, pixel: PixelPoint);

    fn map_type_updated_to(&self, _map_type: MapType) {}

    fn map_resized_to(&self, _size: PixelSize) {}
}
