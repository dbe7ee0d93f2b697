//! A physically-based Monte Carlo path tracer: the iterated radiance
//! estimator, filtered sample accumulation, and the parallel row-based
//! worker pool that drives them. Geometry, material, area-light, and
//! acceleration-structure *implementations* are supplied by the host
//! application through the [`capability`] traits — this crate only supplies
//! the rendering core that consumes them.

pub mod accel;
pub mod camera;
pub mod capability;
pub mod core;
pub mod error;
pub mod estimator;
pub mod image;
pub mod pool;
pub mod scene;
pub mod shared;

pub use camera::{Camera, CameraParams, CameraTransform};
pub use capability::{Accelerator, AreaLight, Geom, Material};
pub use core::Colour;
pub use error::{CameraError, ConfigError, PoolError};
pub use estimator::RadianceEstimator;
pub use image::{Image, PresentBuffer};
pub use scene::{CameraDesc, SceneDesc};
