use std::sync::{Arc, Mutex};
use webmapview::{
    LatLng, LatLngBounds, MapDelegate, MapEvent, MapType, MapView, MapViewOptions, PixelPoint,
    PixelSize, ScriptChannel,
};

/// Integration tests for the map view driving a script engine
/// These tests simulate how a host wires the view to its web view
#[cfg(test)]
mod map_view_tests {
    use super::*;

    /// Channel handle the test keeps while the view owns a clone
    #[derive(Clone, Default)]
    struct SharedChannel {
        scripts: Arc<Mutex<Vec<String>>>,
        replies: Arc<Mutex<Vec<String>>>,
    }

    impl SharedChannel {
        fn scripts(&self) -> Vec<String> {
            self.scripts.lock().unwrap().clone()
        }

        fn reply_with(&self, reply: &str) {
            self.replies.lock().unwrap().push(reply.to_string());
        }
    }

    impl ScriptChannel for SharedChannel {
        fn eval(&mut self, script: &str) -> webmapview::Result<String> {
            self.scripts.lock().unwrap().push(script.to_string());
            Ok(self.replies.lock().unwrap().pop().unwrap_or_default())
        }
    }

    #[derive(Default)]
    struct RecordingDelegate {
        zooms: Mutex<Vec<u8>>,
        centers: Mutex<Vec<LatLng>>,
        pixels: Mutex<Vec<PixelPoint>>,
    }

    impl MapDelegate for RecordingDelegate {
        fn map_zoom_updated_to(&self, zoom: u8) {
            self.zooms.lock().unwrap().push(zoom);
        }

        fn map_center_updated_to_lat_lng(&self, lat_lng: LatLng) {
            self.centers.lock().unwrap().push(lat_lng);
        }

        fn map_center_updated_to_pixel(&self, pixel: PixelPoint) {
            self.pixels.lock().unwrap().push(pixel);
        }
    }

    fn wired_view() -> (MapView, SharedChannel, Arc<RecordingDelegate>) {
        let channel = SharedChannel::default();
        let delegate = Arc::new(RecordingDelegate::default());
        let options = MapViewOptions::default()
            .with_center(LatLng::new(37.7749, -122.4194))
            .with_zoom(10)
            .with_size(320, 460);

        let mut view = MapView::with_channel(options, Box::new(channel.clone())).unwrap();
        view.add_delegate(delegate.clone());
        (view, channel, delegate)
    }

    #[test]
    fn test_zoom_notifies_delegate_and_engine() {
        let (mut view, channel, delegate) = wired_view();

        view.zoom_in().unwrap();
        view.set_zoom(4).unwrap();

        assert_eq!(channel.scripts(), vec!["map.zoomIn();", "map.setZoom(4);"]);
        assert_eq!(*delegate.zooms.lock().unwrap(), vec![11, 4]);
        // the center stays put in degrees but moves in zoomed pixels
        assert!(delegate.centers.lock().unwrap().is_empty());
        assert_eq!(delegate.pixels.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_unchanged_zoom_is_silent() {
        let (mut view, channel, delegate) = wired_view();

        view.set_zoom(10).unwrap();

        assert!(channel.scripts().is_empty());
        assert!(delegate.zooms.lock().unwrap().is_empty());
    }

    #[test]
    fn test_center_with_pixel_round_trip() {
        let (mut view, channel, delegate) = wired_view();

        let target = view.center_pixel().offset(300, -120);
        view.set_center_with_pixel(target).unwrap();

        assert_eq!(view.center_pixel(), target);
        assert!(channel.scripts()[0].starts_with("map.setCenter(new GLatLng("));
        assert_eq!(*delegate.pixels.lock().unwrap(), vec![target]);
        assert_eq!(delegate.centers.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_pan_to_center_uses_pan_script() {
        let (mut view, channel, _) = wired_view();

        let target = view.center_pixel().offset(-40, 40);
        view.pan_to_center_with_pixel(target).unwrap();

        assert_eq!(view.center_pixel(), target);
        assert!(channel.scripts()[0].starts_with("map.panTo(new GLatLng("));
    }

    #[test]
    fn test_move_by_follows_content() {
        let (mut view, channel, _) = wired_view();
        let before = view.center_pixel();

        // dragging the content right and down shows what lies west and north
        view.move_by(25, 10).unwrap();

        assert_eq!(view.center_pixel(), before.offset(-25, -10));
        assert_eq!(channel.scripts(), vec!["map.panBy(new GSize(25, 10));"]);
    }

    #[test]
    fn test_container_pixel_conversions() {
        let (view, _, _) = wired_view();

        let center = view.from_container_pixel_to_lat_lng(PixelPoint::new(160, 230));
        assert!((center.lat - 37.7749).abs() < 1e-3);
        assert!((center.lng - -122.4194).abs() < 1e-3);

        let corner = LatLng::new(37.8, -122.5);
        let pixel = view.from_lat_lng_to_container_pixel(corner);
        let back = view.from_container_pixel_to_lat_lng(pixel);
        assert!((back.lat - corner.lat).abs() < 1e-3);
        assert!((back.lng - corner.lng).abs() < 1e-3);
    }

    #[test]
    fn test_container_pixel_off_world_edge_wraps() {
        let view = MapView::new(MapViewOptions::default()).unwrap();

        let corner = view.from_container_pixel_to_lat_lng(PixelPoint::new(0, 0));

        assert!((-180.0..=180.0).contains(&corner.lng));
        assert!((corner.lng - 135.0).abs() < 1e-9);
        assert!(view.visible_bounds().contains(&LatLng::new(0.0, 0.0)));
    }

    #[test]
    fn test_engine_reports_update_without_echo() {
        let (mut view, channel, delegate) = wired_view();

        view.apply_report(r#"[{"event":"zoom","zoom":12},{"event":"center","lat":40.7128,"lng":-74.006}]"#)
            .unwrap();

        assert_eq!(view.zoom(), 12);
        assert_eq!(view.center_lat_lng(), LatLng::new(40.7128, -74.006));
        assert!(channel.scripts().is_empty());
        assert_eq!(*delegate.zooms.lock().unwrap(), vec![12]);
        assert_eq!(*delegate.centers.lock().unwrap(), vec![LatLng::new(40.7128, -74.006)]);
    }

    #[test]
    fn test_bad_report_changes_nothing() {
        let (mut view, _, delegate) = wired_view();

        let result = view.apply_report(r#"[{"event":"zoom","zoom":3},{"event":"maptype","id":"G_PLUTO_MAP"}]"#);

        assert!(result.is_err());
        assert_eq!(view.zoom(), 10);
        assert!(delegate.zooms.lock().unwrap().is_empty());
    }

    #[test]
    fn test_map_type_report_applies_zoom_range() {
        let (mut view, _, _) = wired_view();

        view.apply_report(r#"{"event":"maptype","id":"G_MOON_ELEVATION_MAP"}"#)
            .unwrap();

        assert_eq!(view.map_type(), MapType::MoonElevation);
        assert_eq!(view.zoom(), 9);
    }

    #[test]
    fn test_sync_from_engine() {
        let (mut view, channel, delegate) = wired_view();
        channel.reply_with(r#"{"zoom":6,"lat":51.5074,"lng":-0.1278}"#);

        view.sync_from_engine().unwrap();

        assert_eq!(view.zoom(), 6);
        assert_eq!(view.center_lat_lng(), LatLng::new(51.5074, -0.1278));
        assert!(channel.scripts()[0].starts_with("JSON.stringify("));
        assert_eq!(*delegate.zooms.lock().unwrap(), vec![6]);
    }

    #[test]
    fn test_fit_bounds_centers_and_zooms() {
        let (mut view, channel, _) = wired_view();
        let bay_area = LatLngBounds::from_coords(37.3, -122.6, 38.0, -121.8);

        let zoom = view.fit_bounds(&bay_area).unwrap();

        assert_eq!(zoom, view.bounds_zoom_level(&bay_area).unwrap());
        assert_eq!(view.zoom(), zoom);
        assert!(view.visible_bounds().contains(&LatLng::new(37.65, -122.2)));
        let scripts = channel.scripts();
        assert_eq!(scripts.len(), 1);
        assert!(scripts[0].starts_with("map.setCenter(new GLatLng("));
        assert!(scripts[0].ends_with(&format!(", {});", zoom)));
    }

    #[test]
    fn test_set_map_type_sends_identifier() {
        let (mut view, channel, _) = wired_view();
        let events = view.subscribe();

        view.set_map_type(MapType::Satellite).unwrap();
        view.set_map_type(MapType::Satellite).unwrap();

        assert_eq!(channel.scripts(), vec!["map.setMapType(G_SATELLITE_MAP);"]);
        assert_eq!(
            events.try_recv().unwrap(),
            MapEvent::MapTypeChanged { map_type: MapType::Satellite }
        );
    }

    #[test]
    fn test_resize_changes_fit() {
        let (mut view, channel, _) = wired_view();
        let bounds = LatLngBounds::from_coords(0.0, 0.0, 0.0, 45.0);

        let small = view.bounds_zoom_level(&bounds).unwrap();
        view.resize(PixelSize::new(1280, 960)).unwrap();
        let large = view.bounds_zoom_level(&bounds).unwrap();

        assert_eq!(large, small + 2);
        assert_eq!(channel.scripts(), vec!["map.checkResize();"]);
    }

    #[test]
    fn test_options_from_file() {
        let path = std::env::temp_dir().join("webmapview-options-test.json");
        std::fs::write(
            &path,
            r#"{ "center": { "lat": 48.8566, "lng": 2.3522 }, "zoom": 30, "map_type": "physical" }"#,
        )
        .unwrap();

        let options = MapViewOptions::from_file(&path).unwrap();
        let view = MapView::new(options).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(view.map_type(), MapType::Physical);
        assert_eq!(view.zoom(), 15);
    }
}
