pub mod config;
pub mod constants;
pub mod geo;
pub mod map;
pub mod map_type;
pub mod projection;
pub mod viewport;
