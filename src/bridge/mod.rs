//! Plumbing between a map view and the JavaScript map engine running in the
//! host's web view.
//!
//! Commands flow out as script strings through a [`script::ScriptChannel`];
//! changes the user makes on the engine side flow back as JSON
//! [`report::EngineReport`] messages.

pub mod report;
pub mod script;

pub use report::{EngineReport, EngineState};
pub use script::{RecordingChannel, ScriptChannel, ScriptCommand};
