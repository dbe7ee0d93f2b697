//! Acceleration structures over a scene's geoms.

pub mod linear_time;

pub use linear_time::LinearTime;
