use crate::input::events::{MapDelegate, MapEvent};
use crossbeam_channel::{Receiver, Sender};
use fxhash::FxHashMap;
use std::collections::VecDeque;
use std::sync::Arc;

/// Event listener callback type
pub type EventCallback = Box<dyn Fn(&MapEvent) + Send + Sync>;

/// Event management system for the map view.
///
/// Events are queued by `emit` and delivered by `process_events` to, in
/// order: listeners registered for the event type, delegates, and channel
/// subscribers.
#[derive(Default)]
pub struct EventManager {
    /// Event listeners by event type
    listeners: FxHashMap<String, Vec<EventCallback>>,
    delegates: Vec<Arc<dyn MapDelegate>>,
    subscribers: Vec<Sender<MapEvent>>,
    /// Event queue for processing
    event_queue: VecDeque<MapEvent>,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event listener
    pub fn on<F>(&mut self, event_type: &str, callback: F)
    where
        F: Fn(&MapEvent) + Send + Sync + 'static,
    {
        self.listeners
            .entry(event_type.to_string())
            .or_default()
            .push(Box::new(callback));
    }

    /// Register a delegate that receives every event
    pub fn add_delegate(&mut self, delegate: Arc<dyn MapDelegate>) {
        self.delegates.push(delegate);
    }

    /// Drop all delegates
    pub fn clear_delegates(&mut self) {
        self.delegates.clear();
    }

    /// Returns a receiver that gets a copy of every processed event.
    /// The subscription ends when the receiver is dropped.
    pub fn subscribe(&mut self) -> Receiver<MapEvent> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Emit an event to the queue
    pub fn emit(&mut self, event: MapEvent) {
        self.event_queue.push_back(event);
    }

    /// Process all queued events
    pub fn process_events(&mut self) -> Vec<MapEvent> {
        let events: Vec<_> = self.event_queue.drain(..).collect();

        for event in &events {
            if let Some(callbacks) = self.listeners.get(event.event_type()) {
                for callback in callbacks {
                    callback(event);
                }
            }

            for delegate in &self.delegates {
                event.dispatch(delegate.as_ref());
            }

            self.subscribers.retain(|tx| tx.send(*event).is_ok());
        }

        events
    }

    /// Clear all events from the queue
    pub fn clear_events(&mut self) {
        self.event_queue.clear();
    }

    /// Get number of pending events
    pub fn pending_events(&self) -> usize {
        self.event_queue.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl std::fmt::Debug for EventManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventManager")
            .field("listeners", &self.listeners.len())
            .field("delegates", &self.delegates.len())
            .field("subscribers", &self.subscribers.len())
            .field("pending", &self.event_queue.len())
            .finish()
    }
}
