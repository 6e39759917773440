use crate::{
    bridge::{EngineReport, EngineState, ScriptChannel, ScriptCommand},
    core::{
        config::MapViewOptions,
        geo::{LatLng, LatLngBounds, PixelPoint, PixelSize},
        map_type::MapType,
        projection::Projection,
        viewport::Viewport,
    },
    input::{EventManager, MapDelegate, MapEvent},
    MapError, Result,
};
use crossbeam_channel::Receiver;
use std::sync::Arc;

/// A slippy-map widget backed by a script-driven map engine.
///
/// The view keeps its own copy of zoom, center, size and map type and
/// computes every coordinate conversion locally. Changes are mirrored to the
/// engine through the attached [`ScriptChannel`] before they are committed,
/// so a failed script call leaves the view untouched.
pub struct MapView {
    viewport: Viewport,
    map_type: MapType,
    options: MapViewOptions,
    event_manager: EventManager,
    channel: Option<Box<dyn ScriptChannel>>,
}

impl MapView {
    pub fn new(options: MapViewOptions) -> Result<Self> {
        options.validate()?;

        let viewport = Viewport::with_projection(
            options.center,
            options.zoom,
            options.size,
            options.zoom_range_for(options.map_type),
            Projection::new(options.tile_size),
        );

        Ok(Self {
            viewport,
            map_type: options.map_type,
            options,
            event_manager: EventManager::new(),
            channel: None,
        })
    }

    /// Creates a view and attaches the engine's script channel
    pub fn with_channel(options: MapViewOptions, channel: Box<dyn ScriptChannel>) -> Result<Self> {
        let mut view = Self::new(options)?;
        view.attach_channel(channel);
        Ok(view)
    }

    pub fn attach_channel(&mut self, channel: Box<dyn ScriptChannel>) {
        self.channel = Some(channel);
    }

    pub fn detach_channel(&mut self) -> Option<Box<dyn ScriptChannel>> {
        self.channel.take()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn options(&self) -> &MapViewOptions {
        &self.options
    }

    pub fn map_type(&self) -> MapType {
        self.map_type
    }

    pub fn add_delegate(&mut self, delegate: Arc<dyn MapDelegate>) {
        self.event_manager.add_delegate(delegate);
    }

    pub fn on<F>(&mut self, event_type: &str, callback: F)
    where
        F: Fn(&MapEvent) + Send + Sync + 'static,
    {
        self.event_manager.on(event_type, callback);
    }

    pub fn subscribe(&mut self) -> Receiver<MapEvent> {
        self.event_manager.subscribe()
    }

    pub fn zoom(&self) -> u8 {
        self.viewport.zoom()
    }

    /// Sets the zoom level, clamped into the current map type's range
    pub fn set_zoom(&mut self, zoom: i32) -> Result<()> {
        let mut next = self.viewport.clone();
        next.set_zoom(zoom);
        let command = ScriptCommand::SetZoom(next.zoom());
        self.transition(next, command)
    }

    pub fn zoom_in(&mut self) -> Result<()> {
        let delta = self.options.zoom_delta;
        self.step_zoom(delta as i32, ScriptCommand::ZoomIn)
    }

    pub fn zoom_out(&mut self) -> Result<()> {
        let delta = self.options.zoom_delta;
        self.step_zoom(-(delta as i32), ScriptCommand::ZoomOut)
    }

    fn step_zoom(&mut self, delta: i32, single_step: ScriptCommand) -> Result<()> {
        let mut next = self.viewport.clone();
        next.set_zoom(self.viewport.zoom() as i32 + delta);

        let command = if delta.abs() == 1 {
            single_step
        } else {
            ScriptCommand::SetZoom(next.zoom())
        };
        self.transition(next, command)
    }

    pub fn center_lat_lng(&self) -> LatLng {
        self.viewport.center()
    }

    /// Center in zoomed world pixels
    pub fn center_pixel(&self) -> PixelPoint {
        self.viewport.center_pixel()
    }

    pub fn set_center_with_lat_lng(&mut self, lat_lng: LatLng) -> Result<()> {
        let mut next = self.viewport.clone();
        next.set_center(lat_lng);
        let command = ScriptCommand::SetCenter(next.center());
        self.transition(next, command)
    }

    /// Centers the view on a zoomed world pixel
    pub fn set_center_with_pixel(&mut self, pixel: PixelPoint) -> Result<()> {
        let lat_lng = self.viewport.world_pixel_to_lat_lng(&pixel);
        self.set_center_with_lat_lng(lat_lng)
    }

    /// Like [`MapView::set_center_with_pixel`], but the engine animates the move
    pub fn pan_to_center_with_pixel(&mut self, pixel: PixelPoint) -> Result<()> {
        let mut next = self.viewport.clone();
        next.set_center(self.viewport.world_pixel_to_lat_lng(&pixel));
        let command = ScriptCommand::PanTo(next.center());
        self.transition(next, command)
    }

    /// Shifts the map content by `(dx, dy)` pixels, as a finger drag would
    pub fn move_by(&mut self, dx: i64, dy: i64) -> Result<()> {
        let mut next = self.viewport.clone();
        next.pan_by(-dx, -dy);
        self.transition(next, ScriptCommand::PanBy { dx, dy })
    }

    pub fn from_container_pixel_to_lat_lng(&self, pixel: PixelPoint) -> LatLng {
        self.viewport.container_pixel_to_lat_lng(&pixel)
    }

    pub fn from_lat_lng_to_container_pixel(&self, lat_lng: LatLng) -> PixelPoint {
        self.viewport.lat_lng_to_container_pixel(&lat_lng)
    }

    /// Largest zoom at which `bounds` fit the current viewport, keeping the
    /// configured padding free
    pub fn bounds_zoom_level(&self, bounds: &LatLngBounds) -> Result<u8> {
        self.viewport.bounds_zoom(bounds, self.options.fit_padding)
    }

    /// Centers on `bounds` at the zoom returned by
    /// [`MapView::bounds_zoom_level`]
    pub fn fit_bounds(&mut self, bounds: &LatLngBounds) -> Result<u8> {
        let zoom = self.bounds_zoom_level(bounds)?;
        let mut next = self.viewport.clone();
        next.set_zoom(zoom as i32);
        next.set_center(bounds.center());

        let command = if next.zoom() == self.viewport.zoom() {
            ScriptCommand::SetCenter(next.center())
        } else {
            ScriptCommand::SetCenterAndZoom(next.center(), next.zoom())
        };
        self.transition(next, command)?;
        Ok(zoom)
    }

    /// Visible area in geographic coordinates
    pub fn visible_bounds(&self) -> LatLngBounds {
        self.viewport.bounds()
    }

    /// Switches the base-map style and applies its zoom range
    pub fn set_map_type(&mut self, map_type: MapType) -> Result<()> {
        if map_type == self.map_type {
            return Ok(());
        }

        let mut next = self.viewport.clone();
        next.set_zoom_range(self.options.zoom_range_for(map_type));
        self.send(ScriptCommand::SetMapType(map_type))?;

        self.map_type = map_type;
        self.event_manager.emit(MapEvent::MapTypeChanged { map_type });
        self.commit(next);
        Ok(())
    }

    /// Records a new container size and lets the engine re-layout
    pub fn resize(&mut self, size: PixelSize) -> Result<()> {
        if !size.is_valid() {
            return Err(MapError::InvalidViewport {
                width: size.width,
                height: size.height,
            });
        }
        let mut next = self.viewport.clone();
        next.set_size(size);
        self.transition(next, ScriptCommand::CheckResize)
    }

    /// Passes a raw script to the engine
    pub fn eval_script(&mut self, script: &str) -> Result<String> {
        match self.channel.as_mut() {
            Some(channel) => channel.eval(script),
            None => Err(MapError::Script("no script channel attached".to_string())),
        }
    }

    /// Applies change reports posted by the engine after user gestures.
    ///
    /// Nothing is sent back to the engine. Reports are validated before any
    /// of them is applied.
    pub fn apply_report(&mut self, message: &str) -> Result<()> {
        let reports = EngineReport::parse_many(message)?;

        let mut next = self.viewport.clone();
        let mut map_type = self.map_type;
        for report in &reports {
            match report {
                EngineReport::Zoom { zoom } => next.set_zoom(*zoom),
                EngineReport::Center { lat, lng } => next.set_center(LatLng::new(*lat, *lng)),
                EngineReport::Resize { width, height } => {
                    let size = PixelSize::new(*width, *height);
                    if !size.is_valid() {
                        return Err(MapError::InvalidViewport {
                            width: size.width,
                            height: size.height,
                        });
                    }
                    next.set_size(size);
                }
                EngineReport::MapType { id } => {
                    map_type = id.parse()?;
                    next.set_zoom_range(self.options.zoom_range_for(map_type));
                }
            }
        }

        if map_type != self.map_type {
            self.map_type = map_type;
            self.event_manager.emit(MapEvent::MapTypeChanged { map_type });
        }
        self.commit(next);
        Ok(())
    }

    /// Pulls zoom and center from the engine, replacing the local copy
    pub fn sync_from_engine(&mut self) -> Result<()> {
        let reply = self.eval_script(&ScriptCommand::QueryState.to_script())?;
        let state = EngineState::parse(&reply)?;

        let mut next = self.viewport.clone();
        next.set_zoom(state.zoom);
        next.set_center(state.center());
        self.commit(next);
        Ok(())
    }

    /// Sends `command` and commits `next` if it differs from the current view
    fn transition(&mut self, next: Viewport, command: ScriptCommand) -> Result<()> {
        if next == self.viewport {
            return Ok(());
        }
        self.send(command)?;
        self.commit(next);
        Ok(())
    }

    fn send(&mut self, command: ScriptCommand) -> Result<()> {
        let Some(channel) = self.channel.as_mut() else {
            return Ok(());
        };

        log::debug!("engine <- {}", command);
        channel.eval(&command.to_script()).map(|_| ()).map_err(|e| {
            log::warn!("engine rejected {:?}: {}", command, e);
            e
        })
    }

    /// Swaps in the new viewport and notifies about what changed
    fn commit(&mut self, next: Viewport) {
        let previous = std::mem::replace(&mut self.viewport, next);
        let current = &self.viewport;

        if previous.zoom() != current.zoom() {
            self.event_manager.emit(MapEvent::ZoomUpdated {
                zoom: current.zoom(),
            });
        }
        if previous.center() != current.center() {
            self.event_manager.emit(MapEvent::CenterUpdatedToLatLng {
                lat_lng: current.center(),
            });
        }
        if previous.center_pixel() != current.center_pixel() {
            self.event_manager.emit(MapEvent::CenterUpdatedToPixel {
                pixel: current.center_pixel(),
            });
        }
        if previous.size() != current.size() {
            self.event_manager.emit(MapEvent::Resized {
                size: current.size(),
            });
        }

        self.event_manager.process_events();
    }
}

impl std::fmt::Debug for MapView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapView")
            .field("viewport", &self.viewport)
            .field("map_type", &self.map_type)
            .field("events", &self.event_manager)
            .field("channel_attached", &self.channel.is_some())
            .finish()
    }
}
