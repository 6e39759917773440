use webmapview::prelude::*;

/// Drives a map view against an in-memory script channel, printing the
/// scripts a web view would run and the events a host would receive
fn main() -> Result<()> {
    env_logger::init();

    println!("webmapview headless example");
    println!("===========================");

    let options = MapViewOptions::default()
        .with_center(LatLng::new(37.7749, -122.4194))
        .with_zoom(12)
        .with_size(320, 460);
    let mut view = MapView::with_channel(options, Box::new(RecordingChannel::new()))?;
    let events = view.subscribe();

    println!("\nPerforming map operations:");
    let locations = [
        ("New York", LatLng::new(40.7128, -74.0060), 11),
        ("London", LatLng::new(51.5074, -0.1278), 10),
        ("Tokyo", LatLng::new(35.6762, 139.6503), 12),
    ];

    for (name, location, zoom) in locations {
        view.set_center_with_lat_lng(location)?;
        view.set_zoom(zoom)?;
        let pixel = view.center_pixel();
        println!(
            "   {} - {:.4}, {:.4} at zoom {} (world pixel {}, {})",
            name,
            location.lat,
            location.lng,
            view.zoom(),
            pixel.x,
            pixel.y
        );
    }

    println!("\nDragging the map:");
    for (dx, dy) in [(100, 0), (0, 100), (-50, -50)] {
        let before = view.center_lat_lng();
        view.move_by(dx, dy)?;
        let after = view.center_lat_lng();
        println!(
            "   Drag by ({}, {}) - center ({:.4}, {:.4}) -> ({:.4}, {:.4})",
            dx, dy, before.lat, before.lng, after.lat, after.lng
        );
    }

    println!("\nFitting bounds:");
    let pacific = LatLngBounds::from_coords(-20.0, 170.0, 20.0, -170.0);
    let zoom = view.fit_bounds(&pacific)?;
    println!(
        "   {:?} spans {:.1} degrees of longitude, fitted at zoom {}",
        pacific,
        pacific.lng_span(),
        zoom
    );

    view.set_map_type(MapType::Physical)?;
    println!("   Switched to {} (zoom range {:?})", view.map_type(), view.viewport().zoom_range());

    println!("\nSimulating a pinch reported by the engine:");
    view.apply_report(r#"{"event":"zoom","zoom":3}"#)?;
    println!("   Zoom is now {}", view.zoom());

    let received: Vec<MapEvent> = events.try_iter().collect();
    println!("\nReceived {} events", received.len());
    for event in received.iter().take(5) {
        println!("   {:?}", event);
    }

    println!("\nFinal map state:");
    let center = view.center_lat_lng();
    println!("   Center: {:.6}, {:.6}", center.lat, center.lng);
    println!("   Zoom: {}", view.zoom());
    println!("   Visible: {:?}", view.visible_bounds());

    Ok(())
}
