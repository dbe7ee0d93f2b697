//! Small core types and cross-cutting helpers shared by every other module.

pub mod colour;
pub mod targets;
pub mod types;

pub use colour::Colour;
pub use types::{Number, Point2, Point3, Vector2, Vector3};
