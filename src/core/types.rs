//! Type aliases over [`glam`] used throughout the crate.
//!
//! The renderer works entirely in single precision; these aliases exist so
//! the rest of the crate reads in domain terms (`Point3`, `Vector3`) rather
//! than bare `glam::Vec3`.

pub type Number = f32;

pub type Point2 = glam::Vec2;
pub type Point3 = glam::Vec3;
pub type Vector2 = glam::Vec2;
pub type Vector3 = glam::Vec3;

pub type Channel = f32;
