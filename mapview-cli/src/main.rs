//! mapview: inspect Web Mercator projections and bounds fitting from a shell.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use webmapview::{LatLng, LatLngBounds, MapType, MapView, MapViewOptions, PixelPoint};

#[derive(Parser)]
#[command(name = "mapview")]
#[command(about = "Project coordinates and fit bounds the way the map widget does")]
#[command(version)]
struct Cli {
    /// JSON file with map view options
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a coordinate to world and container pixels
    Project {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
        /// Zoom level, clamped to the map type's range
        #[arg(long, short)]
        zoom: Option<i32>,
    },
    /// Convert a container pixel back to a coordinate
    Unproject {
        #[arg(allow_negative_numbers = true)]
        x: i64,
        #[arg(allow_negative_numbers = true)]
        y: i64,
        #[arg(long, short)]
        zoom: Option<i32>,
    },
    /// Find the largest zoom at which a bounding box fits the viewport
    Fit {
        #[arg(allow_negative_numbers = true)]
        south: f64,
        #[arg(allow_negative_numbers = true)]
        west: f64,
        #[arg(allow_negative_numbers = true)]
        north: f64,
        #[arg(allow_negative_numbers = true)]
        east: f64,
        #[arg(long)]
        width: Option<i64>,
        #[arg(long)]
        height: Option<i64>,
        /// Pixels kept free on every side
        #[arg(long)]
        padding: Option<u32>,
        /// Base-map style, e.g. `satellite` or `G_MOON_VISIBLE_MAP`
        #[arg(long)]
        map_type: Option<String>,
    },
}

fn load_options(path: Option<&PathBuf>) -> anyhow::Result<MapViewOptions> {
    match path {
        Some(path) => MapViewOptions::from_file(path)
            .with_context(|| format!("reading options from {}", path.display())),
        None => Ok(MapViewOptions::default()),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut options = load_options(cli.config.as_ref())?;

    match cli.command {
        Commands::Project { lat, lng, zoom } => {
            if let Some(zoom) = zoom {
                options.zoom = zoom;
            }
            let view = MapView::new(options)?;
            let lat_lng = LatLng::new(lat, lng);
            let projection = view.viewport().projection();
            let world = projection.lat_lng_to_world(&lat_lng);
            let container = view.from_lat_lng_to_container_pixel(lat_lng);

            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "zoom": view.zoom(),
                        "world": world,
                        "container": container,
                    })
                );
            } else {
                println!("Zoom: {}", view.zoom());
                println!("World: {:.6}, {:.6}", world.x, world.y);
                println!("Container pixel: {}, {}", container.x, container.y);
            }
        }
        Commands::Unproject { x, y, zoom } => {
            if let Some(zoom) = zoom {
                options.zoom = zoom;
            }
            let view = MapView::new(options)?;
            let lat_lng = view.from_container_pixel_to_lat_lng(PixelPoint::new(x, y));

            if cli.json {
                println!("{}", serde_json::json!({ "zoom": view.zoom(), "lat_lng": lat_lng }));
            } else {
                println!("Zoom: {}", view.zoom());
                println!("LatLng: {:.7}, {:.7}", lat_lng.lat, lat_lng.lng);
            }
        }
        Commands::Fit {
            south,
            west,
            north,
            east,
            width,
            height,
            padding,
            map_type,
        } => {
            if let Some(map_type) = map_type {
                options.map_type = map_type.parse::<MapType>()?;
            }
            if let Some(width) = width {
                options.size.width = width;
            }
            if let Some(height) = height {
                options.size.height = height;
            }
            if let Some(padding) = padding {
                options.fit_padding = padding;
            }

            let bounds = LatLngBounds::from_coords(south, west, north, east);
            let view = MapView::new(options)?;
            let zoom = view.bounds_zoom_level(&bounds)?;
            log::debug!("fitted {:?} into {:?}", bounds, view.viewport().size());

            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "zoom": zoom,
                        "center": bounds.center(),
                        "crosses_antimeridian": bounds.crosses_antimeridian(),
                    })
                );
            } else {
                let center = bounds.center();
                println!("Zoom: {}", zoom);
                println!("Center: {:.6}, {:.6}", center.lat, center.lng);
                if bounds.crosses_antimeridian() {
                    println!("Bounds cross the anti-meridian");
                }
            }
        }
    }

    Ok(())
}
