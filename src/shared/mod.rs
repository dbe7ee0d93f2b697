//! Value types and small numerical helpers shared across capability
//! boundaries: rays, intersections, bounding boxes, randomness, debug
//! validation.

pub mod aabb;
pub mod intersect;
pub mod light_ray;
pub mod math;
pub mod ray;
pub mod rng;
pub mod sample;
pub mod validate;

pub use aabb::BoundBox;
pub use intersect::Intersection;
pub use light_ray::LightRay;
pub use ray::Ray;
pub use rng::Randomness;
pub use sample::Sample;
