pub mod adapters;
pub mod container;
pub mod document;
pub mod errors;
pub mod io_models;
pub mod models;
mod port;

pub use adapters::config_to_probe::config_to_container_probe;
pub use container::liveness_probe;
pub use errors::{DocumentError, ProbeExtractionError};
