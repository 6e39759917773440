use webmapview::{
    LatLng, LatLngBounds, MapView, MapViewOptions, PixelPoint, PixelSize, Point, Projection,
    ZoomRange,
};

/// Properties of the projection engine checked over a grid of inputs
#[cfg(test)]
mod projection_properties {
    use super::*;

    const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    fn sample_points() -> Vec<LatLng> {
        let mut points = Vec::new();
        let mut lat = -84.5;
        while lat < 85.0 {
            let mut lng = -179.5;
            while lng < 180.0 {
                points.push(LatLng::new(lat, lng));
                lng += 23.75;
            }
            lat += 12.25;
        }
        points
    }

    #[test]
    fn test_pixel_round_trip_within_half_pixel() {
        let projection = Projection::default();

        for zoom in 0..=21u8 {
            for point in sample_points() {
                let pixel = projection.lat_lng_to_pixel(&point, zoom, &ORIGIN);
                let back = projection.pixel_to_lat_lng(&pixel, zoom, &ORIGIN);

                let exact = projection.project(&point, zoom, &ORIGIN);
                let returned = projection.project(&back, zoom, &ORIGIN);
                assert!((exact.x - returned.x).abs() <= 0.5 + 1e-6, "{:?} at {}", point, zoom);
                assert!((exact.y - returned.y).abs() <= 0.5 + 1e-6, "{:?} at {}", point, zoom);

                let degrees_per_pixel = 360.0 / projection.world_size(zoom);
                assert!((back.lng - point.lng).abs() <= degrees_per_pixel / 2.0 + 1e-9);
            }
        }
    }

    #[test]
    fn test_round_trip_high_zoom_degrees() {
        let projection = Projection::default();

        for zoom in 17..=21u8 {
            for point in sample_points() {
                let pixel = projection.lat_lng_to_pixel(&point, zoom, &ORIGIN);
                let back = projection.pixel_to_lat_lng(&pixel, zoom, &ORIGIN);
                assert!((back.lat - point.lat).abs() < 1e-5, "{:?} at {}", point, zoom);
                assert!((back.lng - point.lng).abs() < 1e-5, "{:?} at {}", point, zoom);
            }
        }
    }

    #[test]
    fn test_zoom_doubles_pixel_distance() {
        let projection = Projection::default();
        let a = LatLng::new(40.7128, -74.0060);
        let b = LatLng::new(34.0522, -118.2437);

        for zoom in 0..21u8 {
            let near = projection
                .project(&a, zoom, &ORIGIN)
                .distance_to(&projection.project(&b, zoom, &ORIGIN));
            let far = projection
                .project(&a, zoom + 1, &ORIGIN)
                .distance_to(&projection.project(&b, zoom + 1, &ORIGIN));
            assert!((far / near - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_bounds_exactly_filling_viewport() {
        let projection = Projection::default();
        let viewport = PixelSize::new(512, 512);
        let zoom = 5u8;

        // corners 512px apart around London at zoom 5
        let center = projection.project(&LatLng::new(51.5, -0.12), zoom, &ORIGIN);
        let nw = projection.unproject(&center.subtract(&Point::new(256.0, 256.0)), zoom, &ORIGIN);
        let se = projection.unproject(&center.add(&Point::new(256.0, 256.0)), zoom, &ORIGIN);
        let bounds = LatLngBounds::from_coords(se.lat, nw.lng, nw.lat, se.lng);

        let fitted = projection
            .bounds_zoom(&bounds, viewport, ZoomRange::default())
            .unwrap();
        assert_eq!(fitted, zoom);
    }

    #[test]
    fn test_one_pixel_too_wide_drops_a_level() {
        let projection = Projection::default();
        let zoom = 4u8;
        let degrees_per_pixel = 360.0 / projection.world_size(zoom);
        let bounds = LatLngBounds::from_coords(0.0, 0.0, 0.0, 257.0 * degrees_per_pixel);

        let fitted = projection
            .bounds_zoom(&bounds, PixelSize::new(256, 256), ZoomRange::default())
            .unwrap();
        assert_eq!(fitted, zoom - 1);
    }

    #[test]
    fn test_single_point_bounds_use_max_zoom() {
        let projection = Projection::default();
        let bounds = LatLngBounds::from_point(LatLng::new(-33.8688, 151.2093));

        for range in [ZoomRange::default(), ZoomRange::new(2, 9)] {
            let fitted = projection
                .bounds_zoom(&bounds, PixelSize::new(320, 460), range)
                .unwrap();
            assert_eq!(fitted, range.max);
        }
    }

    #[test]
    fn test_antimeridian_bounds_match_plain_span() {
        let projection = Projection::default();
        let viewport = PixelSize::new(320, 460);

        let wrapped = LatLngBounds::from_coords(10.0, 170.0, 20.0, -170.0);
        let plain = LatLngBounds::from_coords(10.0, 0.0, 20.0, 20.0);
        assert!((wrapped.lng_span() - 20.0).abs() < 1e-9);

        let wrapped_zoom = projection
            .bounds_zoom(&wrapped, viewport, ZoomRange::default())
            .unwrap();
        let plain_zoom = projection
            .bounds_zoom(&plain, viewport, ZoomRange::default())
            .unwrap();
        assert_eq!(wrapped_zoom, plain_zoom);
        assert!(wrapped_zoom >= 3);
    }

    #[test]
    fn test_non_positive_viewport_fails() {
        let projection = Projection::default();
        let bounds = LatLngBounds::from_coords(0.0, 0.0, 1.0, 1.0);

        for size in [PixelSize::new(0, 0), PixelSize::new(-10, 200), PixelSize::new(200, -1)] {
            assert!(projection
                .bounds_zoom(&bounds, size, ZoomRange::default())
                .is_err());
        }
    }

    #[test]
    fn test_poles_never_produce_nan() {
        let projection = Projection::default();
        for lat in [90.0, -90.0, 89.999, 1e6, -1e6] {
            let world = projection.lat_lng_to_world(&LatLng::new(lat, 0.0));
            assert!(world.x.is_finite() && world.y.is_finite(), "lat {}", lat);
        }
    }

    #[test]
    fn test_container_pixel_examples() {
        let at_zero = MapView::new(MapViewOptions::default().with_size(256, 256)).unwrap();
        assert_eq!(
            at_zero.from_lat_lng_to_container_pixel(LatLng::new(0.0, 0.0)),
            PixelPoint::new(128, 128)
        );

        let at_one = MapView::new(MapViewOptions::default().with_zoom(1).with_size(512, 512)).unwrap();
        assert_eq!(
            at_one.from_lat_lng_to_container_pixel(LatLng::new(0.0, 0.0)),
            PixelPoint::new(256, 256)
        );
    }

    #[test]
    fn test_set_zoom_999_clamps_to_max() {
        let mut view = MapView::new(MapViewOptions::default()).unwrap();
        view.set_zoom(999).unwrap();
        assert_eq!(view.zoom(), view.viewport().zoom_range().max);
    }
}
